//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "veil.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: veil validate-config");
                println!("  3. Anonymize a paper: veil anonymize paper.json");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Sample configuration with every setting at its default
    fn generate_config() -> &'static str {
        r#"# Veil Configuration File
# Author anonymization for academic papers

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Detect and report without writing output
dry_run = false

[detection]
# Paragraphs at least this long are never treated as headings
max_heading_length = 50

# Author section length when no Abstract/Introduction heading is found
fallback_author_paragraphs = 15

[recognizer]
# Name recognizer (currently only "heuristic")
kind = "heuristic"

# Longest capitalised word run accepted as a name
max_name_tokens = 4

# Extra words that never form part of a name
extra_stop_words = []

[audit]
# Append a hashed record of every redaction
enabled = false
log_path = "./audit/veil.log"
json_format = true

[logging]
# JSON file logging in addition to the console
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never
"#
    }
}
