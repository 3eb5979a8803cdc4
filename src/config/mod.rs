//! Configuration management for Veil.
//!
//! Veil uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `VEIL_*` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use veil::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("veil.toml")?;
//! println!("Fallback author paragraphs: {}", config.detection.fallback_author_paragraphs);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [detection]
//! max_heading_length = 50
//! fallback_author_paragraphs = 15
//!
//! [recognizer]
//! kind = "heuristic"
//! max_name_tokens = 4
//! extra_stop_words = ["Consortium"]
//!
//! [audit]
//! enabled = true
//! log_path = "${VEIL_AUDIT_DIR}/veil.log"
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LoggingConfig, RecognizerConfig, VeilConfig};
