//! PathButton Core Library
//!
//! Platform-agnostic geometry and paint state for the PathButton widget: a
//! button outlined by a stadium ("pill") shaped border whose color follows the
//! text color, with an optional fill that follows the interaction state.

pub mod button;
pub mod color;
pub mod error;
pub mod geometry;
pub mod state;
pub mod style;

pub use button::{ButtonWidget, DrawSurface, PathButton, PathButtonConfig};
pub use color::{ButtonColor, ColorMapping, ColorMappingBuilder, StateMatcher};
pub use error::{PathButtonError, Result};
pub use geometry::StadiumGeometry;
pub use state::{StateFlag, StateSet};
pub use style::{ColorSpec, Density, Dimension, PathButtonStyle, DEFAULT_MIN_BORDER_WIDTH_DP};
