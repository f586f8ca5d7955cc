//! # Folio Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite implementations of the storage ports defined in `folio-core`
//! - The connection pool and schema migration runner
//!
//! ## Architecture
//! - Implements traits defined in `folio-core`
//! - Depends on `folio-domain` and `folio-core`
//! - Contains all "impure" code (I/O)

pub mod database;
pub mod errors;

// Re-export commonly used items
pub use database::*;
