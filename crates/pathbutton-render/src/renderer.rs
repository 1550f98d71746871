//! GPU renderer wrapper.

use thiserror::Error;
use vello::wgpu::{Device, Queue, TextureView};
use vello::{RenderParams, Renderer, RendererOptions, Scene};

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Renders button scenes to a texture with vello.
pub struct ButtonRenderer {
    renderer: Renderer,
}

impl ButtonRenderer {
    /// Create a renderer on `device`.
    pub fn new(device: &Device) -> RenderResult<Self> {
        let renderer = Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(format!("{:?}", e)))?;
        log::debug!("Vello renderer created");
        Ok(Self { renderer })
    }

    /// Render `scene` into `target`, which must allow storage binding.
    pub fn render_to_texture(
        &mut self,
        device: &Device,
        queue: &Queue,
        scene: &Scene,
        target: &TextureView,
        params: &RenderParams,
    ) -> RenderResult<()> {
        self.renderer
            .render_to_texture(device, queue, scene, target, params)
            .map_err(|e| RendererError::RenderFailed(format!("{:?}", e)))
    }
}
