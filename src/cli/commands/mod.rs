pub mod check_config;
pub mod serve;

use anyhow::Result;

use super::ConfigArgs;
use crate::domain::models::Config;
use crate::infrastructure::config::{ConfigLoader, DEFAULT_ENV_FILE};

/// Load configuration from the selected file, or the default lookup.
pub(crate) fn load_config(args: &ConfigArgs) -> Result<Config> {
    match &args.config {
        Some(path) => {
            ConfigLoader::load_env_file(DEFAULT_ENV_FILE)?;
            ConfigLoader::load_from_file(path)
        }
        None => ConfigLoader::load(),
    }
}
