use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;

const DEFAULT_CONFIG_DIR: &str = "config";
const DEFAULT_RUN_MODE: &str = "development";
const ENV_PREFIX: &str = "RELGRAPH";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("data.file_path must not be empty")]
    EmptyDataPath,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Location of the dataset JSON consumed by the "fetch" action.
    pub file_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub data: DataConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, SettingsError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| DEFAULT_RUN_MODE.into());
        Self::from_sources(Path::new(DEFAULT_CONFIG_DIR), &run_mode)
    }

    /// Layers `<dir>/default`, the optional `<dir>/<run_mode>` and `RELGRAPH__*` variables.
    pub fn from_sources(dir: &Path, run_mode: &str) -> Result<Self, SettingsError> {
        tracing::debug!(dir = %dir.display(), run_mode, "loading configuration");

        let default_file = dir.join("default");
        let mode_file = dir.join(run_mode);

        let builder = Config::builder()
            .add_source(File::with_name(&default_file.to_string_lossy()))
            .add_source(File::with_name(&mode_file.to_string_lossy()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.data.file_path.trim().is_empty() {
            return Err(SettingsError::EmptyDataPath);
        }
        Ok(())
    }
}
