//! Runner configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;

use domain_export::ExportConfig;

/// Prefix of every environment variable read by the runner
pub const ENV_PREFIX: &str = "EXPORT";

/// Runner configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerConfig {
    /// Application name used in journal descriptions
    pub app_name: String,
    /// First calendar month of the fiscal year
    pub fiscal_start_month: u32,
    /// chrono strftime pattern for statement dates
    pub display_date_format: String,
    /// Directory receiving batch files when no explicit output is given
    pub output_dir: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        let export = ExportConfig::default();
        Self {
            app_name: export.app_name,
            fiscal_start_month: export.fiscal_start_month,
            display_date_format: export.display_date_format,
            output_dir: PathBuf::from("exports"),
            log_level: "info".to_string(),
        }
    }
}

impl RunnerConfig {
    /// Loads configuration from `EXPORT_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an environment source, filling in defaults
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("fiscal_start_month", i64::from(defaults.fiscal_start_month))?
            .set_default("display_date_format", defaults.display_date_format)?
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("log_level", defaults.log_level)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// The engine settings carried by this configuration
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig::new(
            self.app_name.clone(),
            self.fiscal_start_month,
            self.display_date_format.clone(),
        )
    }
}
