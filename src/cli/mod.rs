//! Command-line interface for the weather gateway binary.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Caching HTTP gateway for current weather by city.
#[derive(Parser, Debug)]
#[command(name = "weather-gateway", version, about)]
pub struct Cli {
    /// Emit machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration and exit
    CheckConfig(ConfigArgs),
}

/// Arguments for `serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Port to listen on (overrides configuration and PORT)
    #[arg(long, short)]
    pub port: Option<u16>,
}

/// Configuration source selection.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// YAML config file to use instead of ./weather.yaml
    #[arg(long, short, env = "WEATHER_CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Print an error and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let body = serde_json::json!({
            "error": err.to_string(),
            "causes": err.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>(),
        });
        eprintln!("{body}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
