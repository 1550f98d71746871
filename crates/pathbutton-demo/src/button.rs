//! Host-side button: owns the label and text colors, and forwards layout and
//! state notifications to its [`PathButton`] decoration.

use kurbo::{Point, Rect};
use pathbutton_core::{
    ButtonColor, ButtonWidget, ColorMapping, Density, Dimension, PathButton, PathButtonStyle,
    StateMatcher, StateSet,
};
use pathbutton_render::paint_button;
use vello::Scene;

/// Default text (and therefore border) color.
pub const DEFAULT_TEXT: ButtonColor = ButtonColor::rgb(60, 60, 60);
/// Text color of disabled buttons.
pub const DISABLED_TEXT: ButtonColor = ButtonColor::rgb(160, 160, 160);

/// A labeled button decorated with a stadium border.
pub struct DemoButton {
    label: String,
    text_colors: ColorMapping,
    decoration: PathButton,
    state: StateSet,
    bounds: Option<Rect>,
    text_changed: bool,
}

impl DemoButton {
    /// Create a button, reading `style` once.
    pub fn new(label: impl Into<String>, style: &PathButtonStyle, density: Density) -> Self {
        let text_colors = style
            .text_color
            .clone()
            .map(|spec| spec.into_mapping())
            .unwrap_or_else(default_text_colors);
        Self {
            label: label.into(),
            text_colors,
            decoration: PathButton::from_style(style, density),
            state: StateSet::NORMAL,
            bounds: None,
            text_changed: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn decoration(&self) -> &PathButton {
        &self.decoration
    }

    pub fn decoration_mut(&mut self) -> &mut PathButton {
        &mut self.decoration
    }

    /// Bounds in physical pixels from the last layout.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn state(&self) -> StateSet {
        self.state
    }

    /// Text color for the current state. The border is stroked with it too.
    pub fn text_color(&self) -> ButtonColor {
        self.text_colors.resolve(self.state)
    }

    /// Place the button. Only a change of size reaches the decoration.
    pub fn layout(&mut self, bounds: Rect) {
        let resized = self
            .bounds
            .is_none_or(|old| old.width() != bounds.width() || old.height() != bounds.height());
        self.bounds = Some(bounds);
        if resized {
            log::debug!(
                "Button '{}' resized to {:.0}x{:.0}",
                self.label,
                bounds.width(),
                bounds.height()
            );
            self.decoration.on_size_changed(bounds.width(), bounds.height());
        }
    }

    /// Update the interaction state.
    pub fn set_state(&mut self, state: StateSet) {
        if state == self.state {
            return;
        }
        let old_text = self.text_color();
        self.state = state;
        if self.text_color() != old_text {
            self.text_changed = true;
        }
        self.decoration.on_state_changed(state);
    }

    /// Hit test in physical pixels.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds
            .is_some_and(|bounds| self.decoration.contains(point - bounds.origin().to_vec2()))
    }

    /// Paint the border and fill into `scene`.
    pub fn paint(&self, scene: &mut Scene) {
        if let Some(bounds) = self.bounds {
            paint_button(scene, &self.decoration, bounds.origin(), self.text_color());
        }
    }

    /// Return and clear any pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        let decoration = self.decoration.take_redraw_request();
        let text = std::mem::take(&mut self.text_changed);
        decoration || text
    }
}

fn default_text_colors() -> ColorMapping {
    ColorMapping::builder(DEFAULT_TEXT)
        .when(StateSet::DISABLED, DISABLED_TEXT)
        .build()
}

/// The three buttons of the demo screen.
pub fn demo_buttons(density: Density) -> Vec<DemoButton> {
    let mut custom_border =
        DemoButton::new("Custom Border Width", &PathButtonStyle::default(), density);
    custom_border
        .decoration_mut()
        .set_border_width(density.pixel_offset(Dimension::Dp(5.0)));

    let indigo = ButtonColor::rgb(99, 102, 241);
    let indigo_dark = ButtonColor::rgb(55, 48, 163);
    let indigo_light = ButtonColor::rgb(224, 231, 255);
    let alternate_text = ColorMapping::builder(indigo)
        .when(StateSet::DISABLED, DISABLED_TEXT)
        .when(StateSet::PRESSED, ButtonColor::WHITE)
        .rule(StateMatcher::when(StateSet::FOCUSED).unless(StateSet::HOVERED), indigo_dark)
        .build();
    let alternate_fill = ColorMapping::builder(ButtonColor::TRANSPARENT)
        .when(StateSet::DISABLED, ButtonColor::TRANSPARENT)
        .when(StateSet::PRESSED, indigo)
        .when(StateSet::FOCUSED, indigo_light)
        .when(StateSet::HOVERED, indigo_light)
        .build();
    let alternate = DemoButton::new(
        "Alternate Colors",
        &PathButtonStyle::default()
            .with_text_color(alternate_text)
            .with_fill(alternate_fill),
        density,
    );

    let solid = DemoButton::new(
        "Solid Color",
        &PathButtonStyle::default()
            .with_text_color(ButtonColor::from_argb(0xFFCC_0000))
            .with_fill(ButtonColor::from_argb(0xFFFF_4444)),
        density,
    );

    vec![custom_border, alternate, solid]
}
