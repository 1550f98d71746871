//! The PathButton paint state: border width, fill colors, and redraw requests.

use crate::color::{ButtonColor, ColorMapping};
use crate::error::{PathButtonError, Result};
use crate::geometry::StadiumGeometry;
use crate::state::StateSet;
use crate::style::{Density, Dimension, PathButtonStyle, DEFAULT_MIN_BORDER_WIDTH_DP};
use kurbo::{BezPath, Point, Size};

/// A drawing surface provided by the host for one draw callback.
pub trait DrawSurface {
    /// Fill `path` with the non-zero winding rule.
    fn fill_path(&mut self, path: &BezPath, color: ButtonColor);

    /// Stroke `path` with the given line width.
    fn stroke_path(&mut self, path: &BezPath, width: f64, color: ButtonColor);
}

/// Lifecycle notifications a host widget forwards to its decoration.
pub trait ButtonWidget {
    /// The widget was laid out at a new size, in pixels.
    fn on_size_changed(&mut self, width: f64, height: f64);

    /// The widget's interaction state changed.
    fn on_state_changed(&mut self, state: StateSet);

    /// Paint into `surface`. `text_color` is the host's current text color.
    fn draw(&self, surface: &mut dyn DrawSurface, text_color: ButtonColor);
}

/// Construction parameters for a [`PathButton`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathButtonConfig {
    /// Smallest border width the button will render, in pixels.
    pub min_border_width: u32,
    /// Initial border width, in pixels. Clamped to `min_border_width`.
    pub border_width: u32,
    /// Initial fill colors.
    pub fill_colors: ColorMapping,
}

impl PathButtonConfig {
    /// Defaults for the given density: a 2dp border and a transparent fill.
    pub fn new(density: Density) -> Self {
        let min_border_width = density.pixel_size(Dimension::Dp(DEFAULT_MIN_BORDER_WIDTH_DP));
        Self {
            min_border_width,
            border_width: min_border_width,
            fill_colors: ColorMapping::default(),
        }
    }

    /// Defaults overridden by any attribute present in `style`.
    pub fn from_style(style: &PathButtonStyle, density: Density) -> Self {
        let mut config = Self::new(density);
        if let Some(width) = style.border_width {
            config.border_width = density.pixel_size(width);
        }
        if let Some(fill) = &style.fill_color {
            config.fill_colors = fill.clone().into_mapping();
        }
        config
    }
}

impl Default for PathButtonConfig {
    fn default() -> Self {
        Self::new(Density::default())
    }
}

/// Stadium border and fill decoration for a button.
///
/// The border is stroked in the host's text color, so it tracks the text
/// color automatically. The fill color is resolved from a [`ColorMapping`]
/// against the current interaction state.
///
/// Setters never repaint directly. They record a redraw request which the host
/// collects with [`PathButton::take_redraw_request`].
#[derive(Debug, Clone)]
pub struct PathButton {
    min_border_width: u32,
    border_width: u32,
    fill_colors: ColorMapping,
    current_fill: ButtonColor,
    state: StateSet,
    size: Option<Size>,
    geometry: Option<StadiumGeometry>,
    redraw_requested: bool,
}

impl PathButton {
    pub fn new(config: PathButtonConfig) -> Self {
        let border_width = config.border_width.max(config.min_border_width);
        let current_fill = config.fill_colors.resolve(StateSet::NORMAL);
        Self {
            min_border_width: config.min_border_width,
            border_width,
            fill_colors: config.fill_colors,
            current_fill,
            state: StateSet::NORMAL,
            size: None,
            geometry: None,
            redraw_requested: false,
        }
    }

    /// Create a button from style attributes, read once.
    pub fn from_style(style: &PathButtonStyle, density: Density) -> Self {
        Self::new(PathButtonConfig::from_style(style, density))
    }

    /// Set the border width in pixels. Values below the minimum are raised to it.
    pub fn set_border_width(&mut self, pixels: u32) {
        let width = pixels.max(self.min_border_width);
        if width != pixels {
            log::trace!("Border width {}px raised to minimum {}px", pixels, width);
        }
        self.border_width = width;
        self.rebuild_geometry();
        self.request_redraw();
    }

    /// Current border width in pixels.
    pub fn border_width(&self) -> u32 {
        self.border_width
    }

    /// Smallest border width this button will render.
    pub fn min_border_width(&self) -> u32 {
        self.min_border_width
    }

    /// Use a single fill color for every state.
    pub fn set_fill_color(&mut self, color: ButtonColor) {
        self.fill_colors = ColorMapping::constant(color);
        self.update_fill_color();
    }

    /// Replace the fill color mapping.
    ///
    /// Fails with [`PathButtonError::InvalidArgument`] when `colors` is `None`,
    /// leaving the previous mapping in place.
    pub fn set_fill_colors(&mut self, colors: Option<ColorMapping>) -> Result<()> {
        let colors =
            colors.ok_or(PathButtonError::InvalidArgument("fill colors must not be None"))?;
        self.fill_colors = colors;
        self.update_fill_color();
        Ok(())
    }

    /// The current fill color mapping.
    pub fn fill_colors(&self) -> &ColorMapping {
        &self.fill_colors
    }

    /// The fill color resolved for the current state.
    pub fn current_fill_color(&self) -> ButtonColor {
        self.current_fill
    }

    /// The last interaction state received from the host.
    pub fn state(&self) -> StateSet {
        self.state
    }

    /// Geometry for the last size, if the host has reported one.
    pub fn geometry(&self) -> Option<&StadiumGeometry> {
        self.geometry.as_ref()
    }

    /// Hit test in widget-local coordinates.
    pub fn contains(&self, point: Point) -> bool {
        self.geometry.as_ref().is_some_and(|geom| geom.contains(point))
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Check for a pending redraw request without clearing it.
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn rebuild_geometry(&mut self) {
        if let Some(size) = self.size {
            self.geometry = Some(StadiumGeometry::build(
                size.width,
                size.height,
                self.border_width as f64,
            ));
        }
    }

    fn update_fill_color(&mut self) {
        let color = self.fill_colors.resolve(self.state);
        if color != self.current_fill {
            self.current_fill = color;
            self.request_redraw();
        }
    }
}

impl Default for PathButton {
    fn default() -> Self {
        Self::new(PathButtonConfig::default())
    }
}

impl ButtonWidget for PathButton {
    fn on_size_changed(&mut self, width: f64, height: f64) {
        self.size = Some(Size::new(width, height));
        self.rebuild_geometry();
        self.request_redraw();
    }

    fn on_state_changed(&mut self, state: StateSet) {
        self.state = state;
        if self.fill_colors.is_state_dependent() {
            self.update_fill_color();
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface, text_color: ButtonColor) {
        let Some(geometry) = &self.geometry else {
            return;
        };
        if !self.current_fill.is_transparent() {
            surface.fill_path(geometry.fill_path(), self.current_fill);
        }
        surface.stroke_path(geometry.border_path(), self.border_width as f64, text_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::StateMatcher;

    const RED: ButtonColor = ButtonColor::rgb(255, 0, 0);
    const GREEN: ButtonColor = ButtonColor::rgb(0, 255, 0);
    const BLUE: ButtonColor = ButtonColor::rgb(0, 0, 255);

    #[derive(Debug, PartialEq)]
    enum DrawOp {
        Fill(ButtonColor),
        Stroke(f64, ButtonColor),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<DrawOp>,
    }

    impl DrawSurface for RecordingSurface {
        fn fill_path(&mut self, _path: &BezPath, color: ButtonColor) {
            self.ops.push(DrawOp::Fill(color));
        }

        fn stroke_path(&mut self, _path: &BezPath, width: f64, color: ButtonColor) {
            self.ops.push(DrawOp::Stroke(width, color));
        }
    }

    fn button_with_min(min: u32) -> PathButton {
        PathButton::new(PathButtonConfig {
            min_border_width: min,
            border_width: min,
            fill_colors: ColorMapping::default(),
        })
    }

    fn pressed_fill() -> ColorMapping {
        ColorMapping::builder(BLUE)
            .rule(StateMatcher::when(StateSet::PRESSED), RED)
            .build()
    }

    #[test]
    fn test_default_config_for_density() {
        let config = PathButtonConfig::new(Density::new(2.625));
        assert_eq!(config.min_border_width, 5);
        assert_eq!(config.border_width, 5);
        assert_eq!(config.fill_colors, ColorMapping::constant(ButtonColor::TRANSPARENT));
    }

    #[test]
    fn test_border_width_clamped_to_minimum() {
        let mut button = PathButton::new(PathButtonConfig::new(Density::new(2.625)));
        button.set_border_width(1);
        assert_eq!(button.border_width(), 5);

        for x in [0, 4, 5, 6, 40] {
            button.set_border_width(x);
            assert_eq!(button.border_width(), x.max(5));
        }
    }

    #[test]
    fn test_initial_border_width_clamped() {
        let button = PathButton::new(PathButtonConfig {
            min_border_width: 4,
            border_width: 1,
            fill_colors: ColorMapping::default(),
        });
        assert_eq!(button.border_width(), 4);
    }

    #[test]
    fn test_set_border_width_rebuilds_geometry() {
        let mut button = button_with_min(2);
        button.on_size_changed(200.0, 60.0);
        assert!(button.take_redraw_request());

        button.set_border_width(4);
        assert!(button.take_redraw_request());
        let geom = button.geometry().unwrap();
        assert!(geom.matches(200.0, 60.0, 4.0));
        assert!((geom.radius() - 26.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_border_width_before_layout() {
        let mut button = button_with_min(2);
        button.set_border_width(6);
        assert!(button.geometry().is_none());
        button.on_size_changed(100.0, 40.0);
        assert!(button.geometry().unwrap().matches(100.0, 40.0, 6.0));
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut button = button_with_min(4);
        button.on_size_changed(200.0, 60.0);
        let first = button.geometry().unwrap().border_path().clone();
        button.on_size_changed(200.0, 60.0);
        assert_eq!(first.elements(), button.geometry().unwrap().border_path().elements());
    }

    #[test]
    fn test_set_fill_color_is_constant() {
        let mut button = button_with_min(2);
        button.set_fill_color(GREEN);
        assert!(button.take_redraw_request());
        assert!(!button.fill_colors().is_state_dependent());
        let all = StateSet::PRESSED | StateSet::FOCUSED | StateSet::DISABLED | StateSet::HOVERED;
        for state in all.subsets() {
            assert_eq!(button.fill_colors().resolve(state), GREEN);
        }
        assert_eq!(button.current_fill_color(), GREEN);

        // Same color again: nothing to repaint.
        button.set_fill_color(GREEN);
        assert!(!button.take_redraw_request());
    }

    #[test]
    fn test_set_fill_colors_none_is_rejected() {
        let mut button = button_with_min(2);
        button.set_fill_colors(Some(pressed_fill())).unwrap();
        button.on_state_changed(StateSet::PRESSED);
        assert_eq!(button.current_fill_color(), RED);
        button.take_redraw_request();

        let result = button.set_fill_colors(None);
        assert!(matches!(result, Err(PathButtonError::InvalidArgument(_))));
        assert_eq!(button.fill_colors(), &pressed_fill());
        assert_eq!(button.current_fill_color(), RED);
        assert!(!button.needs_redraw());
    }

    #[test]
    fn test_set_fill_colors_resolves_against_current_state() {
        let mut button = button_with_min(2);
        button.on_state_changed(StateSet::PRESSED);
        button.set_fill_colors(Some(pressed_fill())).unwrap();
        assert_eq!(button.current_fill_color(), RED);
        assert!(button.take_redraw_request());
    }

    #[test]
    fn test_state_change_redraws_only_on_color_change() {
        let mut button = button_with_min(2);
        button.set_fill_colors(Some(pressed_fill())).unwrap();
        assert!(button.take_redraw_request());
        assert_eq!(button.current_fill_color(), BLUE);

        button.on_state_changed(StateSet::FOCUSED);
        assert!(!button.take_redraw_request());
        assert_eq!(button.current_fill_color(), BLUE);

        button.on_state_changed(StateSet::PRESSED | StateSet::FOCUSED);
        assert!(button.take_redraw_request());
        assert_eq!(button.current_fill_color(), RED);

        button.on_state_changed(StateSet::NORMAL);
        assert!(button.take_redraw_request());
        assert_eq!(button.current_fill_color(), BLUE);
    }

    #[test]
    fn test_state_change_with_constant_fill_never_redraws() {
        let mut button = button_with_min(2);
        button.set_fill_color(RED);
        button.take_redraw_request();
        for state in (StateSet::PRESSED | StateSet::FOCUSED | StateSet::DISABLED).subsets() {
            button.on_state_changed(state);
            assert!(!button.take_redraw_request());
        }
        assert_eq!(button.state(), StateSet::NORMAL);
    }

    #[test]
    fn test_draw_order_and_colors() {
        let mut button = button_with_min(3);
        button.set_fill_color(GREEN);
        button.on_size_changed(120.0, 40.0);

        let mut surface = RecordingSurface::default();
        button.draw(&mut surface, RED);
        assert_eq!(surface.ops, vec![DrawOp::Fill(GREEN), DrawOp::Stroke(3.0, RED)]);
    }

    #[test]
    fn test_draw_skips_transparent_fill() {
        let mut button = button_with_min(2);
        button.on_size_changed(120.0, 40.0);

        let mut surface = RecordingSurface::default();
        button.draw(&mut surface, BLUE);
        assert_eq!(surface.ops, vec![DrawOp::Stroke(2.0, BLUE)]);
    }

    #[test]
    fn test_draw_before_layout_is_noop() {
        let button = button_with_min(2);
        let mut surface = RecordingSurface::default();
        button.draw(&mut surface, BLUE);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_from_style() {
        let style = PathButtonStyle::default()
            .with_border_width(Dimension::Dp(5.0))
            .with_fill(pressed_fill());
        let button = PathButton::from_style(&style, Density::new(2.0));
        assert_eq!(button.min_border_width(), 4);
        assert_eq!(button.border_width(), 10);
        assert!(button.fill_colors().is_state_dependent());
        assert_eq!(button.current_fill_color(), BLUE);
    }

    #[test]
    fn test_from_style_small_border_is_clamped() {
        let style = PathButtonStyle::default().with_border_width(Dimension::Px(1.0));
        let button = PathButton::from_style(&style, Density::new(3.0));
        assert_eq!(button.border_width(), 6);
    }

    #[test]
    fn test_contains_uses_geometry() {
        let mut button = button_with_min(4);
        assert!(!button.contains(Point::new(100.0, 30.0)));
        button.on_size_changed(200.0, 60.0);
        assert!(button.contains(Point::new(100.0, 30.0)));
        assert!(!button.contains(Point::new(1.0, 1.0)));
    }
}
