//! Domain error and result types for Veil.
//!
//! All fallible library operations return [`Result<T, VeilError>`]:
//!
//! ```rust
//! use veil::domain::{VeilError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = veil::config::load_config("veil.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::VeilError;
pub use result::Result;
