//! Shared types, errors, and configuration for Freightbooks.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe record references
//! - Lenient decoding of numeric and date fields from upstream records
//! - Application-wide error types
//! - Configuration management
//! - JSON snapshot reading

pub mod config;
pub mod error;
pub mod snapshot;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
