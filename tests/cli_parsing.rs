/// Tests for command-line parsing
use clap::Parser;
use std::path::PathBuf;
use weather_gateway::cli::{Cli, Commands};

#[test]
fn test_serve_defaults() {
    let cli = Cli::try_parse_from(["weather-gateway", "serve"]).unwrap();

    assert!(!cli.json);
    match cli.command {
        Commands::Serve(args) => {
            assert!(args.port.is_none());
        }
        Commands::CheckConfig(_) => panic!("Expected serve"),
    }
}

#[test]
fn test_serve_with_port_and_config() {
    let cli = Cli::try_parse_from([
        "weather-gateway",
        "serve",
        "--port",
        "8080",
        "--config",
        "/etc/weather.yaml",
    ])
    .unwrap();

    match cli.command {
        Commands::Serve(args) => {
            assert_eq!(args.port, Some(8080));
            assert_eq!(args.config.config, Some(PathBuf::from("/etc/weather.yaml")));
        }
        Commands::CheckConfig(_) => panic!("Expected serve"),
    }
}

#[test]
fn test_check_config_with_global_json() {
    let cli = Cli::try_parse_from(["weather-gateway", "check-config", "--json"]).unwrap();

    assert!(cli.json);
    assert!(matches!(cli.command, Commands::CheckConfig(_)));
}

#[test]
fn test_invalid_port_is_rejected() {
    assert!(Cli::try_parse_from(["weather-gateway", "serve", "--port", "70000"]).is_err());
}

#[test]
fn test_subcommand_is_required() {
    assert!(Cli::try_parse_from(["weather-gateway"]).is_err());
}
