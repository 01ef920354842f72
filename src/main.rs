// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use profile_toggle::app::App;
use profile_toggle::cli;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };
    // CLI --log-level takes highest precedence, then RUST_LOG, then config (applied later).
    profile_toggle::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting profile-toggle {}", profile_toggle::VERSION);

    // Runtime drives the async GPU adapter/device setup
    let runtime = Arc::new(Runtime::new()?);

    let app = App::new(Arc::clone(&runtime), runtime_options)?;
    let result = app.run();

    log::info!("Event loop exited, shutting down runtime");
    if let Ok(rt) = Arc::try_unwrap(runtime) {
        rt.shutdown_timeout(std::time::Duration::from_secs(2));
    }

    if let Err(ref e) = result {
        eprintln!("profile-toggle: error: {e:#}");
        // On Linux, provide a hint when the error looks like a missing display server
        #[cfg(target_os = "linux")]
        {
            let msg = format!("{e:?}").to_lowercase();
            if msg.contains("display")
                || msg.contains("wayland")
                || msg.contains("xcb")
                || msg.contains("x server")
            {
                eprintln!(
                    "profile-toggle: hint: no display server found; ensure DISPLAY (X11) or \
                     WAYLAND_DISPLAY (Wayland) is set"
                );
            }
        }
    }
    result
}
