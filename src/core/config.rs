use crate::core::yields::{self, MAX_SWEEP_RANGE_PERCENT, ProjectInputs};
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(from = "ProjectEntry")]
pub struct Project {
    pub name: String,
    #[serde(flatten)]
    pub inputs: ProjectInputs,
}

/// On-disk shape of a project. Unknown keys are rejected so a misspelled
/// figure is an error rather than a silent zero.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectEntry {
    name: String,
    #[serde(default)]
    land_cost: f64,
    #[serde(default)]
    construction_cost: f64,
    #[serde(default)]
    professional_fees: f64,
    #[serde(default)]
    other_costs: f64,
    #[serde(default)]
    annual_rent: f64,
}

impl From<ProjectEntry> for Project {
    fn from(entry: ProjectEntry) -> Self {
        Project {
            name: entry.name,
            inputs: ProjectInputs {
                land_cost: entry.land_cost,
                construction_cost: entry.construction_cost,
                professional_fees: entry.professional_fees,
                other_costs: entry.other_costs,
                annual_rent: entry.annual_rent,
            },
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SensitivityConfig {
    pub range_percent: u32,
    pub step_percent: u32,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        SensitivityConfig {
            range_percent: 25,
            step_percent: 5,
        }
    }
}

impl SensitivityConfig {
    pub fn offsets(&self) -> Vec<i32> {
        yields::sweep_offsets(self.range_percent, self.step_percent)
    }
}

fn default_currency() -> String {
    "NOK".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub sensitivity: SensitivityConfig,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            projects: Vec::new(),
            sensitivity: SensitivityConfig::default(),
            currency: default_currency(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("no", "devyield", "devyield")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!(projects = config.projects.len(), "Successfully loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sensitivity.step_percent == 0 {
            bail!("sensitivity.step_percent must be greater than zero");
        }
        if self.sensitivity.range_percent > MAX_SWEEP_RANGE_PERCENT {
            bail!(
                "sensitivity.range_percent must be at most {MAX_SWEEP_RANGE_PERCENT}, got {}",
                self.sensitivity.range_percent
            );
        }
        for project in &self.projects {
            project
                .inputs
                .validate()
                .with_context(|| format!("Project '{}' has invalid inputs", project.name))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
projects:
  - name: "Riverside Flats"
    land_cost: 6000000
    construction_cost: 10000000
    professional_fees: 1000000
    other_costs: 500000
    annual_rent: 1400000
  - name: "Corner Shop"
    land_cost: 2500000.5
    annual_rent: 180000
sensitivity:
  range_percent: 30
  step_percent: 10
currency: "EUR"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.projects.len(), 2);
        assert_eq!(config.projects[0].name, "Riverside Flats");
        assert_eq!(config.projects[0].inputs, ProjectInputs::default());

        let shop = &config.projects[1].inputs;
        assert_eq!(config.projects[1].name, "Corner Shop");
        assert_eq!(shop.land_cost, 2_500_000.5);
        assert_eq!(shop.construction_cost, 0.0);
        assert_eq!(shop.professional_fees, 0.0);
        assert_eq!(shop.other_costs, 0.0);
        assert_eq!(shop.annual_rent, 180_000.0);

        assert_eq!(config.sensitivity.range_percent, 30);
        assert_eq!(config.sensitivity.offsets(), vec![-30, -20, -10, 0, 10, 20, 30]);
        assert_eq!(config.currency, "EUR");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("projects: []").unwrap();
        assert!(config.projects.is_empty());
        assert_eq!(config.currency, "NOK");
        assert_eq!(config.sensitivity, SensitivityConfig::default());
        assert_eq!(config.sensitivity.offsets().len(), 11);
    }

    #[test]
    fn test_load_from_path_rejects_negative_inputs() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            r#"
projects:
  - name: "Broken"
    land_cost: -10
    annual_rent: 100
"#
        )?;

        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Broken"), "{message}");
        assert!(message.contains("land_cost"), "{message}");
        Ok(())
    }

    #[test]
    fn test_load_from_path_rejects_zero_step() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "sensitivity:\n  range_percent: 25\n  step_percent: 0")?;

        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("step_percent"));
        Ok(())
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let err = AppConfig::load_from_path("/definitely/not/here/config.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_uneven_step_keeps_baseline() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "sensitivity:\n  range_percent: 25\n  step_percent: 10")?;

        let config = AppConfig::load_from_path(file.path())?;
        let offsets = config.sensitivity.offsets();
        assert_eq!(offsets, vec![-25, -20, -10, 0, 10, 20, 25]);
        assert!(offsets.contains(&0));
        Ok(())
    }

    #[test]
    fn test_load_from_path_rejects_excessive_range() -> Result<()> {
        for range in ["150", "3000000000"] {
            let mut file = NamedTempFile::new()?;
            writeln!(file, "sensitivity:\n  range_percent: {range}\n  step_percent: 5")?;

            let err = AppConfig::load_from_path(file.path()).unwrap_err();
            assert!(format!("{err:#}").contains("range_percent"), "{err:#}");
        }

        let mut file = NamedTempFile::new()?;
        writeln!(file, "sensitivity:\n  range_percent: 100\n  step_percent: 50")?;
        let config = AppConfig::load_from_path(file.path())?;
        assert_eq!(config.sensitivity.offsets(), vec![-100, -50, 0, 50, 100]);
        Ok(())
    }

    #[test]
    fn test_load_from_path_rejects_misspelled_project_field() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            r#"
projects:
  - name: "Typo"
    land_cost: 6000000
    anual_rent: 1400000
"#
        )?;

        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to parse config file"), "{message}");
        assert!(message.contains("anual_rent"), "{message}");
        Ok(())
    }

    #[test]
    fn test_load_from_path_rejects_misspelled_sensitivity_field() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "sensitivity:\n  range_percent: 25\n  step: 10")?;

        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("step"));
        Ok(())
    }
}
