//! Application module for profile-toggle
//!
//! - `App`: entry point that loads config and runs the event loop
//! - `AppHandler`: winit `ApplicationHandler` owning the profile window

use crate::cli::RuntimeOptions;
use crate::config::Config;
use crate::profile_window::{ProfileWindow, ProfileWindowAction};
use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// Main application entry point
pub struct App {
    config: Config,
    runtime: Arc<Runtime>,
    runtime_options: RuntimeOptions,
}

impl App {
    /// Create a new application
    pub fn new(runtime: Arc<Runtime>, runtime_options: RuntimeOptions) -> Result<Self> {
        let config = Config::load()?;
        crate::debug::apply_config_log_level(config.log_level);

        Ok(Self {
            config,
            runtime,
            runtime_options,
        })
    }

    /// Run the application until the window closes
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        // Use Wait for power-efficient event handling
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut handler = AppHandler::new(self.config, self.runtime, &self.runtime_options);
        event_loop.run_app(&mut handler)?;

        match handler.init_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Event loop state
pub struct AppHandler {
    config: Config,
    runtime: Arc<Runtime>,
    window: Option<ProfileWindow>,
    exit_deadline: Option<Instant>,
    init_error: Option<anyhow::Error>,
}

impl AppHandler {
    pub fn new(config: Config, runtime: Arc<Runtime>, options: &RuntimeOptions) -> Self {
        Self {
            config,
            runtime,
            window: None,
            exit_deadline: exit_deadline(options.exit_after, Instant::now()),
            init_error: None,
        }
    }
}

/// Convert `--exit-after` seconds into a deadline. Negative or non-finite values are ignored.
pub fn exit_deadline(exit_after: Option<f64>, now: Instant) -> Option<Instant> {
    let secs = exit_after?;
    match Duration::try_from_secs_f64(secs) {
        Ok(delay) => Some(now + delay),
        Err(e) => {
            log::warn!("Ignoring --exit-after {}: {}", secs, e);
            None
        }
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let runtime = Arc::clone(&self.runtime);
        match runtime.block_on(ProfileWindow::new(event_loop, &self.config)) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to initialize profile window: {:#}", e);
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if window.window_id() != window_id {
            return;
        }

        match window.handle_window_event(event) {
            ProfileWindowAction::Close => {
                log::info!("Profile window closed, exiting");
                self.window = None;
                event_loop.exit();
            }
            ProfileWindowAction::Toggled(visibility) => {
                log::debug!("Window observed toggle: {}", visibility.display_name());
            }
            ProfileWindowAction::None => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(deadline) = self.exit_deadline {
            if Instant::now() >= deadline {
                log::info!("--exit-after elapsed, exiting");
                event_loop.exit();
                return;
            }
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }

        if let Some(window) = &self.window {
            window.about_to_wait();
        }
    }
}
