//! Vello-backed drawing surface.

use kurbo::{Affine, BezPath, Point, Stroke};
use pathbutton_core::{ButtonColor, ButtonWidget, DrawSurface};
use peniko::{Color, Fill};
use vello::Scene;

/// Draws into a vello [`Scene`] with a fixed transform.
pub struct VelloSurface<'a> {
    scene: &'a mut Scene,
    transform: Affine,
}

impl<'a> VelloSurface<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self::with_transform(scene, Affine::IDENTITY)
    }

    /// Draw with every path mapped through `transform`.
    pub fn with_transform(scene: &'a mut Scene, transform: Affine) -> Self {
        Self { scene, transform }
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }
}

impl DrawSurface for VelloSurface<'_> {
    fn fill_path(&mut self, path: &BezPath, color: ButtonColor) {
        self.scene
            .fill(Fill::NonZero, self.transform, Color::from(color), None, path);
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: ButtonColor) {
        let stroke = Stroke::new(width);
        self.scene
            .stroke(&stroke, self.transform, Color::from(color), None, path);
    }
}

/// Paint a button whose top-left corner is at `origin` (scene coordinates).
pub fn paint_button(
    scene: &mut Scene,
    button: &dyn ButtonWidget,
    origin: Point,
    text_color: ButtonColor,
) {
    let mut surface = VelloSurface::with_transform(scene, Affine::translate(origin.to_vec2()));
    button.draw(&mut surface, text_color);
}
