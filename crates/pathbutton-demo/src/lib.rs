//! PathButton Demo
//!
//! A window with three PathButtons: a custom border width, state-dependent
//! colors, and a solid fill. Clicking a button shows a toast.

mod app;
mod button;
mod ui;

pub use app::{App, AppConfig, AppError};
pub use button::{demo_buttons, DemoButton};
pub use ui::{render_ui, Toast, UiAction, UiState};
