//! # Console Configuration
//!
//! Settings for the `arcade` binary.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command Line (highest priority)                                    │
//! │     --import games.json --no-simulation                                │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     ARCADE_IMPORT_PATH=games.json                                      │
//! │     ARCADE_SIMULATE_SALES=false                                        │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, else arcade.toml in the platform config dir      │
//! │     ~/.config/arcade-store/arcade.toml (Linux)                         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     sample games, simulation on, 50-column chart                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # arcade.toml
//! [catalog]
//! import_path = "games_to_import.json"
//! export_path = "exported_games.json"
//! seed_defaults = true
//!
//! [simulation]
//! enabled = true
//! min_sales_per_product = 1000
//! max_sales_per_product = 10000
//!
//! [report]
//! chart_width = 50
//! ```

use std::path::{Path, PathBuf};

use arcade_store::SimulationPlan;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cli::Cli;

/// Narrowest and widest revenue chart, in bar characters.
pub const CHART_WIDTH_RANGE: (usize, usize) = (10, 200);

/// Upper bound for simulated sales of one product.
pub const MAX_SIMULATED_SALES: u32 = 100_000;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// Where the catalog comes from and goes to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Catalog file imported at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_path: Option<PathBuf>,

    /// Catalog file written once startup is done.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_path: Option<PathBuf>,

    /// Add the sample games when nothing is imported.
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            import_path: None,
            export_path: None,
            seed_defaults: true,
        }
    }
}

/// Startup sales simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_min_sales")]
    pub min_sales_per_product: u32,

    #[serde(default = "default_max_sales")]
    pub max_sales_per_product: u32,
}

fn default_true() -> bool {
    true
}

fn default_min_sales() -> u32 {
    1000
}

fn default_max_sales() -> u32 {
    10_000
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            enabled: true,
            min_sales_per_product: default_min_sales(),
            max_sales_per_product: default_max_sales(),
        }
    }
}

impl SimulationSettings {
    pub fn plan(&self) -> SimulationPlan {
        SimulationPlan::new(self.min_sales_per_product, self.max_sales_per_product)
    }
}

/// Report rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Length of the longest bar in the revenue chart.
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_chart_width() -> usize {
    50
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            chart_width: default_chart_width(),
        }
    }
}

// =============================================================================
// App Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub simulation: SimulationSettings,

    #[serde(default)]
    pub report: ReportSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and command line.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`cli.config`, else the platform default)
    /// 3. Environment variables
    /// 4. Command-line flags
    ///
    /// A missing default config file is fine. A missing file named with
    /// `--config` is an error.
    pub fn load(cli: &Cli) -> ConfigResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.apply_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Reads one TOML file. Sections and keys it leaves out keep defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let (min_width, max_width) = CHART_WIDTH_RANGE;
        if !(min_width..=max_width).contains(&self.report.chart_width) {
            return Err(ConfigError::Invalid(format!(
                "chart_width must be between {} and {}, got {}",
                min_width, max_width, self.report.chart_width
            )));
        }

        let simulation = &self.simulation;
        if simulation.min_sales_per_product > simulation.max_sales_per_product {
            return Err(ConfigError::Invalid(format!(
                "min_sales_per_product ({}) exceeds max_sales_per_product ({})",
                simulation.min_sales_per_product, simulation.max_sales_per_product
            )));
        }
        if simulation.max_sales_per_product > MAX_SIMULATED_SALES {
            return Err(ConfigError::Invalid(format!(
                "max_sales_per_product must be at most {}",
                MAX_SIMULATED_SALES
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides read through `var`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("ARCADE_IMPORT_PATH") {
            debug!(path = %path, "Overriding import path from environment");
            self.catalog.import_path = Some(PathBuf::from(path));
        }

        if let Some(path) = var("ARCADE_EXPORT_PATH") {
            debug!(path = %path, "Overriding export path from environment");
            self.catalog.export_path = Some(PathBuf::from(path));
        }

        if let Some(value) = var("ARCADE_SIMULATE_SALES") {
            match parse_flag(&value) {
                Some(enabled) => self.simulation.enabled = enabled,
                None => warn!(value = %value, "Unknown ARCADE_SIMULATE_SALES value"),
            }
        }

        if let Some(value) = var("ARCADE_CHART_WIDTH") {
            match value.parse::<usize>() {
                Ok(width) => self.report.chart_width = width,
                Err(_) => warn!(value = %value, "Unknown ARCADE_CHART_WIDTH value"),
            }
        }
    }

    /// Applies command-line flags.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(path) = &cli.import {
            self.catalog.import_path = Some(path.clone());
        }
        if let Some(path) = &cli.export {
            self.catalog.export_path = Some(path.clone());
        }
        if cli.no_simulation {
            self.simulation.enabled = false;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "arcade", "arcade-store")
            .map(|dirs| dirs.config_dir().join("arcade.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.catalog.import_path.is_none());
        assert!(config.catalog.seed_defaults);
        assert!(config.simulation.enabled);
        assert_eq!(config.report.chart_width, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [catalog]
            import_path = "games.json"

            [simulation]
            max_sales_per_product = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.import_path, Some(PathBuf::from("games.json")));
        assert!(config.catalog.seed_defaults);
        assert_eq!(config.simulation.min_sales_per_product, 1000);
        assert_eq!(config.simulation.max_sales_per_product, 20);
        assert_eq!(config.report.chart_width, 50);
        // min > max is only caught by validate()
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.report.chart_width = 5;
        assert!(config.validate().is_err());

        config.report.chart_width = 80;
        config.simulation.min_sales_per_product = 1;
        config.simulation.max_sales_per_product = MAX_SIMULATED_SALES + 1;
        assert!(config.validate().is_err());

        config.simulation.max_sales_per_product = 5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(env(&[
            ("ARCADE_IMPORT_PATH", "in.json"),
            ("ARCADE_SIMULATE_SALES", "off"),
            ("ARCADE_CHART_WIDTH", "72"),
        ]));

        assert_eq!(config.catalog.import_path, Some(PathBuf::from("in.json")));
        assert!(config.catalog.export_path.is_none());
        assert!(!config.simulation.enabled);
        assert_eq!(config.report.chart_width, 72);
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(env(&[
            ("ARCADE_SIMULATE_SALES", "maybe"),
            ("ARCADE_CHART_WIDTH", "wide"),
        ]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_cli_beats_file_and_env() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("arcade.toml");
        std::fs::write(
            &path,
            "[catalog]\nimport_path = \"from_file.json\"\n\n[simulation]\nenabled = true\n",
        )
        .unwrap();

        let cli = Cli {
            config: Some(path),
            import: Some(PathBuf::from("from_cli.json")),
            export: None,
            no_simulation: true,
        };
        let mut config = AppConfig::from_file(cli.config.as_deref().unwrap()).unwrap();
        config.apply_env_overrides(env(&[("ARCADE_IMPORT_PATH", "from_env.json")]));
        config.apply_cli(&cli);

        assert_eq!(config.catalog.import_path, Some(PathBuf::from("from_cli.json")));
        assert!(!config.simulation.enabled);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let cli = Cli {
            config: Some(temp_dir.path().join("nope.toml")),
            ..Cli::default()
        };
        assert!(matches!(AppConfig::load(&cli), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("arcade.toml");
        std::fs::write(&path, "[report]\nchart_width = \"wide\"\n").unwrap();

        assert!(matches!(AppConfig::from_file(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_simulation_plan_from_settings() {
        let settings = SimulationSettings {
            enabled: true,
            min_sales_per_product: 3,
            max_sales_per_product: 7,
        };
        let plan = settings.plan();
        assert_eq!(plan.min_sales_per_product(), 3);
        assert_eq!(plan.max_sales_per_product(), 7);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("[catalog]"));
        assert!(toml_str.contains("[simulation]"));
        assert!(toml_str.contains("[report]"));
    }
}
