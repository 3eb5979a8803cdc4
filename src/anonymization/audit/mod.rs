//! Audit logging module
//!
//! Records what was redacted from each document, hashing every value.

pub mod logger;

pub use logger::AuditLogger;
