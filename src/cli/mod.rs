//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Veil using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Veil - author anonymization for academic papers
#[derive(Parser, Debug)]
#[command(name = "veil")]
#[command(version, about, long_about = None)]
#[command(author = "Veil Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "veil.toml", env = "VEIL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VEIL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove author information from a document
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_anonymize() {
        let cli = Cli::parse_from(["veil", "anonymize", "paper.json"]);
        assert_eq!(cli.config, "veil.toml");
        match cli.command {
            Commands::Anonymize(args) => {
                assert_eq!(args.input, "paper.json");
                assert!(args.output.is_none());
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_anonymize_flags() {
        let cli = Cli::parse_from([
            "veil",
            "anonymize",
            "paper.json",
            "--output",
            "out.json",
            "--dry-run",
            "--report",
        ]);
        match cli.command {
            Commands::Anonymize(args) => {
                assert_eq!(args.output.as_deref(), Some("out.json"));
                assert!(args.dry_run);
                assert!(args.report);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["veil", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["veil", "--log-level", "debug", "init"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["veil", "anonymize"]).is_err());
    }
}
