//! Configuration system for the profile-toggle demo.
//!
//! This crate provides configuration loading, saving, validation and default
//! values for the host window. Component state is never persisted here.

pub mod config;
pub mod defaults;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{LogLevel, ThemeMode};
