//! PathButton Render Library
//!
//! Vello backend for PathButton: a [`DrawSurface`](pathbutton_core::DrawSurface)
//! that records into a `vello::Scene`, and a thin GPU renderer wrapper.

mod renderer;
mod surface;

pub use renderer::{ButtonRenderer, RenderResult, RendererError};
pub use surface::{paint_button, VelloSurface};
