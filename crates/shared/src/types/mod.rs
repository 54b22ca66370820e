//! Common types used across the application.

pub mod id;
pub mod lenient;

pub use id::*;
