//! Surdex common types, errors, and configuration.
//!
//! This crate provides shared definitions used across all Surdex components.

pub mod config;
pub mod error;
pub mod types;

pub use config::CatalogConfig;
pub use error::{Result, SurdexError};
pub use types::{CustomerId, Record};
