//! Command-line interface for profile-toggle.
//!
//! This module handles CLI argument parsing and the headless `render` subcommand.

use crate::ui::ProfileToggle;
use clap::{Parser, Subcommand};
use profile_toggle_config::LogLevel;

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Off => LogLevel::Off,
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

/// profile-toggle - show and hide a profile card
#[derive(Parser)]
#[command(name = "profile-toggle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Set debug log level (overrides config and RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,

    /// Exit after the specified number of seconds
    #[arg(long, value_name = "SECONDS")]
    pub exit_after: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the component's UI description as text and exit
    Render {
        /// Number of toggle activations to apply before rendering
        #[arg(short, long, default_value_t = 0)]
        toggles: u32,
    },
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Exit after this many seconds
    pub exit_after: Option<f64>,
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal application startup
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    process_parsed(Cli::parse())
}

/// Handle already-parsed arguments
pub fn process_parsed(cli: Cli) -> CliResult {
    match cli.command {
        Some(Commands::Render { toggles }) => {
            println!("{}", render_after_toggles(toggles));
            CliResult::Exit(0)
        }
        None => CliResult::Continue(RuntimeOptions {
            log_level: cli.log_level.map(LogLevel::from),
            exit_after: cli.exit_after,
        }),
    }
}

/// Text description of a fresh component after `toggles` activations
pub fn render_after_toggles(toggles: u32) -> String {
    let mut component = ProfileToggle::new();
    for _ in 0..toggles {
        component.toggle_visibility();
    }
    component.render().to_string()
}
