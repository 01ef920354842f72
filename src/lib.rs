// Library exports for testing and potential library use

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod app;
pub mod cli;
pub mod config {
    //! Configuration re-exports from the `profile-toggle-config` sub-crate.
    pub use profile_toggle_config::{Config, ConfigError, LogLevel, ThemeMode};
}
pub mod http;
pub mod image_loader;
pub mod profile_window;
pub use profile_toggle_ui as ui;
