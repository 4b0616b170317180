//! `check-config` command: validate and print the effective configuration.

use anyhow::{Context, Result};

use super::load_config;
use crate::cli::ConfigArgs;
use crate::domain::models::Config;
use crate::infrastructure::credentials::mask_api_key;

pub fn execute(args: &ConfigArgs, json: bool) -> Result<()> {
    let config = redacted(load_config(args)?);

    let rendered = if json {
        serde_json::to_string_pretty(&config).context("Failed to render configuration")?
    } else {
        serde_yaml::to_string(&config).context("Failed to render configuration")?
    };
    println!("{rendered}");
    Ok(())
}

/// Copy of the configuration with the credential masked.
pub fn redacted(mut config: Config) -> Config {
    config.upstream.api_key = config.upstream.api_key.as_deref().map(mask_api_key);
    config
}
