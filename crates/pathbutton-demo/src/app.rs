//! Application state and lifecycle.

use pathbutton_core::Density;
use pathbutton_render::{ButtonRenderer, RendererError};
use peniko::Color;
use std::sync::Arc;
use thiserror::Error;
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, Scene};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::button::{demo_buttons, DemoButton};
use crate::ui::{render_ui, UiAction, UiState};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Surface creation failed: {0}")]
    Surface(String),
    #[error(transparent)]
    Renderer(#[from] RendererError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "PathButton Demo".to_string(),
            width: 480,
            height: 360,
            background_color: Color::from_rgba8(250, 250, 250, 255),
        }
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    renderer: ButtonRenderer,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // State
    buttons: Vec<DemoButton>,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
        }
    }

    /// Run the application until the window is closed.
    pub async fn run() -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        let mut app = App::new();
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| AppError::Surface(format!("{:?}", e)))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let renderer = ButtonRenderer::new(device)?;

        // Vello renders to Rgba8Unorm; the surface may be Bgra8Unorm.
        let texture_blitter =
            vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let density = Density::new(window.scale_factor());
        let buttons = demo_buttons(density);
        log::info!(
            "PathButton demo initialized - {} buttons at density {}",
            buttons.len(),
            density.scale
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            renderer,
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::default(),
            buttons,
        });

        window.request_redraw();
        Ok(())
    }

    fn handle_action(state: &mut AppState, action: UiAction) {
        match action {
            UiAction::ButtonClicked(index) => {
                if let Some(button) = state.buttons.get(index) {
                    let message = format!("{} clicked!", button.label());
                    log::info!("{}", message);
                    state.ui_state.show_toast(message);
                }
            }
        }
    }

    fn redraw(&mut self) {
        let Some(state) = &mut self.state else {
            return;
        };
        let Some(render_cx) = self.render_cx.as_ref() else {
            return;
        };

        // Run egui: lays out buttons and updates their interaction state
        let egui_input = state.egui_state.take_egui_input(&state.window);
        let mut action = None;
        let egui_output = state.egui_ctx.run(egui_input, |ctx| {
            action = render_ui(ctx, &mut state.ui_state, &mut state.buttons);
        });
        if let Some(action) = action {
            Self::handle_action(state, action);
        }

        state
            .egui_state
            .handle_platform_output(&state.window, egui_output.platform_output);
        let egui_primitives = state
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        // Border and fill of every button
        let mut scene = Scene::new();
        for button in &state.buttons {
            button.paint(&mut scene);
        }

        let device_handle = &render_cx.devices[state.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match state.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };

        let width = state.surface.config.width;
        let height = state.surface.config.height;

        let params = RenderParams {
            base_color: self.config.background_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello needs a StorageBinding target, which must be Rgba8Unorm.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        if let Err(e) = state.renderer.render_to_texture(
            device,
            queue,
            &scene,
            &render_texture_view,
            &params,
        ) {
            log::error!("{}", e);
            return;
        }

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            state.texture_blitter.copy(
                device,
                &mut blit_encoder,
                &render_texture_view,
                &surface_view,
            );
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        for (id, image_delta) in &egui_output.textures_delta.set {
            state.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });
            state.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load, // Keep Vello content
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu needs a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            state
                .egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            state.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        // Buttons whose colors or geometry changed this frame need another pass
        // so vello picks up the state egui just reported.
        let buttons_dirty = state
            .buttons
            .iter_mut()
            .fold(false, |dirty, button| button.take_redraw_request() | dirty);
        let egui_wants_repaint = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());
        if buttons_dirty || egui_wants_repaint || state.ui_state.toast.is_some() {
            state.window.request_redraw();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");
        if let Err(e) = self.init(event_loop) {
            log::error!("Initialization failed: {}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                // Border minimums were resolved at construction.
                log::info!("Scale factor changed to {}", scale_factor);
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            _ => {}
        }
    }
}
