use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use devyield::cli::OutputFormat;
use devyield::core::log::init_logging;
use devyield::core::yields::ProjectInputs;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct CalcArgs {
    /// Project name shown in the report
    #[arg(long, default_value = "Project")]
    name: String,

    /// Land cost
    #[arg(long, default_value_t = 6_000_000.0, value_parser = parse_amount)]
    land_cost: f64,

    /// Construction cost
    #[arg(long, default_value_t = 10_000_000.0, value_parser = parse_amount)]
    construction_cost: f64,

    /// Professional fees
    #[arg(long, default_value_t = 1_000_000.0, value_parser = parse_amount)]
    professional_fees: f64,

    /// Other costs (permits, marketing, etc.)
    #[arg(long, default_value_t = 500_000.0, value_parser = parse_amount)]
    other_costs: f64,

    /// Expected annual rent
    #[arg(long, default_value_t = 1_400_000.0, value_parser = parse_amount)]
    annual_rent: f64,

    /// Currency label, defaults to the configured currency
    #[arg(long)]
    currency: Option<String>,
}

impl From<CalcArgs> for devyield::AppCommand {
    fn from(args: CalcArgs) -> devyield::AppCommand {
        devyield::AppCommand::Calc {
            name: args.name,
            inputs: ProjectInputs {
                land_cost: args.land_cost,
                construction_cost: args.construction_cost,
                professional_fees: args.professional_fees,
                other_costs: args.other_costs,
                annual_rent: args.annual_rent,
            },
            currency: args.currency,
        }
    }
}

impl From<Commands> for devyield::AppCommand {
    fn from(cmd: Commands) -> devyield::AppCommand {
        match cmd {
            Commands::Calc(args) => args.into(),
            Commands::Summary => devyield::AppCommand::Summary,
            Commands::Learn => devyield::AppCommand::Learn,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Calculate the development yield of a single project
    Calc(CalcArgs),
    /// Display yield reports for all configured projects
    Summary,
    /// Explain development yield and its typical ranges
    Learn,
}

/// Accepts finite, non-negative amounts; `_` may be used as a digit separator.
fn parse_amount(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .replace('_', "")
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !value.is_finite() {
        return Err(format!("'{s}' is not a finite number"));
    }
    if value < 0.0 {
        return Err(format!("'{s}' must not be negative"));
    }
    Ok(value)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => devyield::cli::setup::setup(),
        Some(cmd) => devyield::run_command(cmd.into(), cli.config_path.as_deref(), cli.format),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
