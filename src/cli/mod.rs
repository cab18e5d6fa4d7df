//! Terminal commands and rendering

pub mod calc;
pub mod learn;
pub mod report;
pub mod setup;
pub mod summary;
pub mod ui;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
