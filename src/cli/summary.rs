use super::OutputFormat;
use super::report::{self, ProjectReport};
use super::ui;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

/// Evaluates every project in the configuration.
pub fn run(config: &AppConfig, format: OutputFormat) -> Result<()> {
    if config.projects.is_empty() {
        println!("No projects found in configuration.");
        return Ok(());
    }

    info!(projects = config.projects.len(), "Evaluating configured projects");
    let offsets = config.sensitivity.offsets();
    debug!(?offsets, "Using sensitivity offsets");

    let reports = build_reports(config, &offsets);

    match format {
        OutputFormat::Json => report::print_json(&reports)?,
        OutputFormat::Table => {
            let num_reports = reports.len();
            for (i, project_report) in reports.iter().enumerate() {
                report::display(project_report);
                if i < num_reports - 1 {
                    ui::print_separator();
                }
            }
            if num_reports > 1 {
                ui::print_separator();
                report::display_comparison(&reports);
            }
        }
    }
    Ok(())
}

fn build_reports(config: &AppConfig, offsets: &[i32]) -> Vec<ProjectReport> {
    config
        .projects
        .iter()
        .map(|project| ProjectReport::new(&project.name, &config.currency, &project.inputs, offsets))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::YieldBand;
    use crate::core::config::{Project, SensitivityConfig};
    use crate::core::yields::ProjectInputs;

    fn project(name: &str, annual_rent: f64) -> Project {
        Project {
            name: name.to_string(),
            inputs: ProjectInputs {
                annual_rent,
                ..ProjectInputs::default()
            },
        }
    }

    #[test]
    fn test_build_reports_keeps_project_order() {
        let config = AppConfig {
            projects: vec![
                project("Low", 700_000.0),
                project("Moderate", 1_400_000.0),
                project("Strong", 2_100_000.0),
            ],
            sensitivity: SensitivityConfig {
                range_percent: 10,
                step_percent: 5,
            },
            currency: "EUR".to_string(),
        };

        let reports = build_reports(&config, &config.sensitivity.offsets());
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].name, "Low");
        assert_eq!(reports[0].evaluation.band, YieldBand::Low);
        assert_eq!(reports[1].evaluation.band, YieldBand::Moderate);
        assert_eq!(reports[2].evaluation.band, YieldBand::Strong);
        assert!(reports.iter().all(|r| r.currency == "EUR"));
        assert!(reports.iter().all(|r| r.evaluation.sensitivity.len() == 5));
    }

    #[test]
    fn test_run_with_no_projects_succeeds() {
        let config = AppConfig::default();
        assert!(run(&config, OutputFormat::Table).is_ok());
        assert!(run(&config, OutputFormat::Json).is_ok());
    }
}
