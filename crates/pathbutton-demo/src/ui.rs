//! egui overlay: button layout, input, labels, and toasts.
//!
//! The stadium border and fill are painted by vello underneath; egui only
//! allocates each button's rect, reports its interaction state, and draws the
//! label on top.

use egui::{
    vec2, Align2, Color32, Context, CornerRadius, CursorIcon, FontId, Frame, Margin, Response,
    RichText, Sense, Vec2,
};
use kurbo::Rect;
use pathbutton_core::{ButtonColor, StateSet};
use std::time::{Duration, Instant};

use crate::button::DemoButton;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A short message shown at the bottom of the window.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            expires_at: now + TOAST_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Actions triggered from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// The button at this index was clicked.
    ButtonClicked(usize),
}

/// UI layout and transient state.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Space between stacked buttons, in points.
    pub button_margin: f32,
    /// Label padding inside a button, in points.
    pub button_padding: Vec2,
    /// Label font size, in points.
    pub font_size: f32,
    /// Currently visible toast.
    pub toast: Option<Toast>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            button_margin: 16.0,
            button_padding: vec2(24.0, 14.0),
            font_size: 16.0,
            toast: None,
        }
    }
}

impl UiState {
    /// Show a toast, replacing any visible one.
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Instant::now()));
    }

    /// Drop the toast once it has expired.
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }
}

/// Lay out the buttons, update their state, and draw labels and the toast.
pub fn render_ui(
    ctx: &Context,
    ui_state: &mut UiState,
    buttons: &mut [DemoButton],
) -> Option<UiAction> {
    let action = render_buttons(ctx, ui_state, buttons);
    ui_state.expire_toast(Instant::now());
    render_toast(ctx, ui_state);
    action
}

fn render_buttons(
    ctx: &Context,
    ui_state: &UiState,
    buttons: &mut [DemoButton],
) -> Option<UiAction> {
    let mut action = None;
    let pixels_per_point = ctx.pixels_per_point() as f64;

    egui::CentralPanel::default()
        .frame(Frame::NONE.inner_margin(Margin::same(24)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.spacing_mut().item_spacing = vec2(0.0, ui_state.button_margin);

                for (index, button) in buttons.iter_mut().enumerate() {
                    let font_id = FontId::proportional(ui_state.font_size);
                    let galley = ui.painter().layout_no_wrap(
                        button.label().to_string(),
                        font_id.clone(),
                        Color32::PLACEHOLDER,
                    );
                    let size = galley.size() + 2.0 * ui_state.button_padding;
                    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

                    button.layout(Rect::new(
                        rect.min.x as f64 * pixels_per_point,
                        rect.min.y as f64 * pixels_per_point,
                        rect.max.x as f64 * pixels_per_point,
                        rect.max.y as f64 * pixels_per_point,
                    ));
                    button.set_state(interaction_state(&response));

                    if ui.is_rect_visible(rect) {
                        ui.painter().text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            button.label(),
                            font_id,
                            to_color32(button.text_color()),
                        );
                    }

                    if response.clicked() {
                        action = Some(UiAction::ButtonClicked(index));
                    }
                    response.on_hover_cursor(CursorIcon::PointingHand);
                }
            });
        });

    action
}

fn render_toast(ctx: &Context, ui_state: &UiState) {
    let Some(toast) = &ui_state.toast else {
        return;
    };

    egui::Area::new(egui::Id::new("toast"))
        .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -32.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            Frame::new()
                .fill(Color32::from_black_alpha(200))
                .corner_radius(CornerRadius::same(16))
                .inner_margin(Margin::symmetric(16, 8))
                .show(ui, |ui| {
                    ui.label(RichText::new(&toast.message).color(Color32::WHITE).size(14.0));
                });
        });
}

/// Map an egui response to the interaction state of a button.
fn interaction_state(response: &Response) -> StateSet {
    let mut state = StateSet::NORMAL;
    state.set(StateSet::PRESSED, response.is_pointer_button_down_on());
    state.set(StateSet::HOVERED, response.hovered());
    state.set(StateSet::FOCUSED, response.has_focus());
    state.set(StateSet::DISABLED, !response.enabled());
    state
}

fn to_color32(color: ButtonColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
