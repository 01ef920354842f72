//! Native window hosting the profile toggle component.
//!
//! Owns the winit window, its wgpu surface, and an egui context with the
//! remote image loader installed. Each redraw runs one egui frame that shows
//! the component.

use crate::config::{Config, ThemeMode};
use crate::image_loader::RemoteImageLoader;
use crate::ui::{ProfileToggle, ProfileToggleAction, Visibility};
use anyhow::{Context, Result};
use std::sync::Arc;
use wgpu::SurfaceError;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// Result of processing a profile window event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileWindowAction {
    /// No action needed
    None,
    /// Close the window
    Close,
    /// The toggle control flipped the profile visibility
    Toggled(Visibility),
}

/// Manages the profile window with its own egui context and wgpu renderer
pub struct ProfileWindow {
    /// The winit window
    window: Arc<Window>,
    /// Window ID for event routing
    window_id: WindowId,
    /// wgpu surface
    surface: wgpu::Surface<'static>,
    /// wgpu device
    device: wgpu::Device,
    /// wgpu queue
    queue: wgpu::Queue,
    /// Surface configuration
    surface_config: wgpu::SurfaceConfiguration,
    /// egui context
    egui_ctx: egui::Context,
    /// egui-winit state
    egui_state: egui_winit::State,
    /// egui-wgpu renderer
    egui_renderer: egui_wgpu::Renderer,
    /// Profile toggle component
    component: ProfileToggle,
}

impl ProfileWindow {
    /// Create the window and its GPU/egui state
    pub async fn new(event_loop: &ActiveEventLoop, config: &Config) -> Result<Self> {
        let window_attrs = Window::default_attributes()
            .with_title(&config.window_title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_min_inner_size(winit::dpi::LogicalSize::new(320, 240))
            .with_resizable(true);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("Failed to create profile window")?,
        );
        let window_id = window.id();
        let size = window.inner_size();

        // Platform-specific backend selection for better VM compatibility
        #[cfg(target_os = "windows")]
        let backends = wgpu::Backends::DX12;
        #[cfg(target_os = "macos")]
        let backends = wgpu::Backends::all();
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let backends = wgpu::Backends::VULKAN | wgpu::Backends::GL;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .context("Failed to create GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("Surface reports no supported formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        // Initialize egui
        let scale_factor = window.scale_factor() as f32;
        let egui_ctx = egui::Context::default();
        egui_ctx.set_visuals(match config.theme {
            ThemeMode::Dark => egui::Visuals::dark(),
            ThemeMode::Light => egui::Visuals::light(),
        });
        RemoteImageLoader::from_config(config).install(&egui_ctx);

        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(scale_factor),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            surface_format,
            egui_wgpu::RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                predictable_texture_filtering: false,
            },
        );

        log::info!(
            "Profile window created ({}x{}, format {:?})",
            surface_config.width,
            surface_config.height,
            surface_format
        );

        Ok(Self {
            window,
            window_id,
            surface,
            device,
            queue,
            surface_config,
            egui_ctx,
            egui_state,
            egui_renderer,
            component: ProfileToggle::new(),
        })
    }

    /// Get the window ID
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Forward repaint requests made outside a frame (background image fetches,
    /// loading spinners) to the window.
    pub fn about_to_wait(&self) {
        if self.egui_ctx.has_requested_repaint() {
            self.window.request_redraw();
        }
    }

    /// Handle a window event
    pub fn handle_window_event(&mut self, event: WindowEvent) -> ProfileWindowAction {
        // Let egui handle the event
        let event_response = self.egui_state.on_window_event(&self.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                return ProfileWindowAction::Close;
            }

            WindowEvent::Resized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    self.surface_config.width = new_size.width;
                    self.surface_config.height = new_size.height;
                    self.surface.configure(&self.device, &self.surface_config);
                    self.window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                // Escape closes the window unless egui consumed it
                if !event_response.consumed
                    && event.state.is_pressed()
                    && matches!(event.logical_key, Key::Named(NamedKey::Escape))
                {
                    return ProfileWindowAction::Close;
                }
            }

            WindowEvent::RedrawRequested => {
                return self.render();
            }

            _ => {}
        }

        if event_response.repaint {
            self.window.request_redraw();
        }

        ProfileWindowAction::None
    }

    /// Run one egui frame and present it
    fn render(&mut self) -> ProfileWindowAction {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                return ProfileWindowAction::None;
            }
            Err(SurfaceError::Timeout) => {
                log::warn!("Profile window surface timeout");
                return ProfileWindowAction::None;
            }
            Err(e) => {
                log::error!("Profile window surface error: {:?}", e);
                return ProfileWindowAction::None;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut component_action = ProfileToggleAction::None;
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            component_action = self.component.show(ctx);
        });

        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        for (id, delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Profile Window Encoder"),
            });

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Profile Window Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui_renderer.render() requires a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        match component_action {
            ProfileToggleAction::Toggled(visibility) => {
                self.window.request_redraw();
                ProfileWindowAction::Toggled(visibility)
            }
            ProfileToggleAction::None => ProfileWindowAction::None,
        }
    }
}
