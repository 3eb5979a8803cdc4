//! CLI command implementations
//!
//! Each command returns a process exit code:
//! 0 success, 1 anonymization failed, 2 configuration error, 5 fatal error.

pub mod anonymize;
pub mod init;
pub mod validate;
