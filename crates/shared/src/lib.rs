//! Shared library for the AnimeSensei toolkit.
//!
//! This crate provides common functionality used across the binary crates:
//! - Configuration management
//! - Logging infrastructure
//! - Normalized domain models

pub mod config;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use config::{AnilistConfig, Config, MirrorsConfig};
pub use logging::LogConfig;
pub use models::*;

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
