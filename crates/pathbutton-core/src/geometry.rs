//! Stadium ("pill") geometry for the button outline and fill.

use kurbo::{Arc, BezPath, Line, Point, Rect, Shape as KurboShape, Vec2};
use std::f64::consts::PI;

/// Accuracy used when converting arcs to cubic Béziers.
const ARC_TOLERANCE: f64 = 0.1;

/// Border and fill paths of a stadium shape inset by the stroke width.
///
/// Built wholesale from `(width, height, stroke_width)`; never mutated after
/// construction. A resize produces a new value that replaces the old one.
#[derive(Debug, Clone)]
pub struct StadiumGeometry {
    width: f64,
    height: f64,
    stroke_width: f64,
    radius: f64,
    left_arc_bounds: Rect,
    right_arc_bounds: Rect,
    top_edge: Line,
    bottom_edge: Line,
    border_path: BezPath,
    fill_path: BezPath,
}

impl StadiumGeometry {
    /// Build the geometry for a widget of `width` x `height` pixels.
    ///
    /// The cap radius is `(height - 2 * stroke_width) / 2`. When the stroke is
    /// wider than half the height the radius goes negative and the arcs fold
    /// over themselves; the shape is still built as-is.
    pub fn build(width: f64, height: f64, stroke_width: f64) -> Self {
        let s = stroke_width;
        let radius = (height - 2.0 * s) / 2.0;
        if radius < 0.0 {
            log::debug!(
                "Degenerate stadium: stroke {} too wide for height {} (radius {})",
                s,
                height,
                radius
            );
        }

        let left_arc_bounds = Rect::new(s, s, s + 2.0 * radius, height - s);
        let right_arc_bounds = Rect::new(width - s - 2.0 * radius, s, width - s, height - s);

        // Left cap runs bottom -> top through the left, right cap top -> bottom.
        let left_arc = cap_arc(left_arc_bounds, radius, PI / 2.0);
        let right_arc = cap_arc(right_arc_bounds, radius, 3.0 * PI / 2.0);

        let top_edge = Line::new((s + radius, s), (width - s - radius, s));
        let bottom_edge = Line::new((s + radius, height - s), (width - s - radius, height - s));

        let mut border_path = BezPath::new();
        border_path.extend(left_arc.path_elements(ARC_TOLERANCE));
        border_path.extend(right_arc.path_elements(ARC_TOLERANCE));
        // Edges are separate subpaths; the stroke overlaps the arc ends.
        border_path.move_to(top_edge.p0);
        border_path.line_to(top_edge.p1);
        border_path.move_to(bottom_edge.p0);
        border_path.line_to(bottom_edge.p1);

        let mut fill_path = BezPath::new();
        // Each cap closes on its own chord; together with the body the
        // non-zero union is the full stadium.
        fill_path.extend(left_arc.path_elements(ARC_TOLERANCE));
        fill_path.close_path();
        fill_path.extend(right_arc.path_elements(ARC_TOLERANCE));
        fill_path.close_path();
        fill_path.move_to(top_edge.p0);
        fill_path.line_to(top_edge.p1);
        fill_path.line_to(bottom_edge.p1);
        fill_path.line_to(bottom_edge.p0);
        fill_path.close_path();

        Self {
            width,
            height,
            stroke_width,
            radius,
            left_arc_bounds,
            right_arc_bounds,
            top_edge,
            bottom_edge,
            border_path,
            fill_path,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Cap radius. Negative for degenerate input.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True when the stroke is too wide for the height and the caps fold over.
    pub fn is_degenerate(&self) -> bool {
        self.radius < 0.0
    }

    /// Bounding box of the left cap's full circle.
    pub fn left_arc_bounds(&self) -> Rect {
        self.left_arc_bounds
    }

    /// Bounding box of the right cap's full circle.
    pub fn right_arc_bounds(&self) -> Rect {
        self.right_arc_bounds
    }

    pub fn top_edge(&self) -> Line {
        self.top_edge
    }

    pub fn bottom_edge(&self) -> Line {
        self.bottom_edge
    }

    /// Outline to be stroked: two caps plus two disconnected edges.
    pub fn border_path(&self) -> &BezPath {
        &self.border_path
    }

    /// Interior region, including the area under the border stroke.
    pub fn fill_path(&self) -> &BezPath {
        &self.fill_path
    }

    /// Hit test against the fill region.
    pub fn contains(&self, point: Point) -> bool {
        self.fill_path.contains(point)
    }

    /// Check whether this geometry was built from the given inputs.
    pub fn matches(&self, width: f64, height: f64, stroke_width: f64) -> bool {
        self.width == width && self.height == height && self.stroke_width == stroke_width
    }
}

/// Half circle inscribed in `bounds`, starting at `start_angle` and sweeping 180°.
fn cap_arc(bounds: Rect, radius: f64, start_angle: f64) -> Arc {
    Arc {
        center: Point::new((bounds.x0 + bounds.x1) / 2.0, (bounds.y0 + bounds.y1) / 2.0),
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle: PI,
        x_rotation: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    const EPS: f64 = 1e-9;

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
            "expected ({}, {}), got {:?}",
            x,
            y,
            actual
        );
    }

    fn assert_rect(actual: Rect, x0: f64, y0: f64, x1: f64, y1: f64) {
        assert!((actual.x0 - x0).abs() < EPS, "x0: {:?}", actual);
        assert!((actual.y0 - y0).abs() < EPS, "y0: {:?}", actual);
        assert!((actual.x1 - x1).abs() < EPS, "x1: {:?}", actual);
        assert!((actual.y1 - y1).abs() < EPS, "y1: {:?}", actual);
    }

    fn count(path: &BezPath, pred: impl Fn(&PathEl) -> bool) -> usize {
        path.elements().iter().filter(|el| pred(*el)).count()
    }

    #[test]
    fn test_reference_button() {
        let geom = StadiumGeometry::build(200.0, 60.0, 4.0);
        assert!((geom.radius() - 26.0).abs() < EPS);
        assert!(!geom.is_degenerate());
        assert_rect(geom.left_arc_bounds(), 4.0, 4.0, 56.0, 56.0);
        // w - s - 2r = 144; a radius-26 circle is 52 wide.
        assert_rect(geom.right_arc_bounds(), 144.0, 4.0, 196.0, 56.0);
        assert!((geom.right_arc_bounds().width() - 2.0 * geom.radius()).abs() < EPS);
        assert_point(geom.top_edge().p0, 30.0, 4.0);
        assert_point(geom.top_edge().p1, 170.0, 4.0);
        assert_point(geom.bottom_edge().p0, 30.0, 56.0);
        assert_point(geom.bottom_edge().p1, 170.0, 56.0);
    }

    #[test]
    fn test_edge_span() {
        let inputs = [
            (200.0, 60.0, 4.0),
            (120.0, 40.0, 5.0),
            (80.0, 10.0, 2.0),
            (300.0, 90.0, 9.0),
        ];
        for (w, h, s) in inputs {
            let geom = StadiumGeometry::build(w, h, s);
            assert_eq!((geom.width(), geom.height(), geom.stroke_width()), (w, h, s));
            let r = geom.radius();
            assert!((r - (h - 2.0 * s) / 2.0).abs() < EPS);
            let expected = w - 2.0 * s - 2.0 * r;
            let top = geom.top_edge();
            let bottom = geom.bottom_edge();
            assert!((top.p1.x - top.p0.x - expected).abs() < EPS);
            assert!((bottom.p1.x - bottom.p0.x - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_arc_endpoints() {
        let geom = StadiumGeometry::build(200.0, 60.0, 4.0);
        let elements = geom.border_path().elements();
        // Left cap starts at its bottom point.
        match elements[0] {
            PathEl::MoveTo(p) => assert_point(p, 30.0, 56.0),
            ref other => panic!("expected MoveTo, got {:?}", other),
        }
        // Right cap starts at its top point.
        let second_move = elements
            .iter()
            .skip(1)
            .find_map(|el| match el {
                PathEl::MoveTo(p) => Some(*p),
                _ => None,
            })
            .unwrap();
        assert_point(second_move, 170.0, 4.0);
    }

    #[test]
    fn test_border_subpaths() {
        let geom = StadiumGeometry::build(200.0, 60.0, 4.0);
        let border = geom.border_path();
        assert_eq!(count(border, |el| matches!(el, PathEl::MoveTo(_))), 4);
        assert_eq!(count(border, |el| matches!(el, PathEl::ClosePath)), 0);

        let bounds = border.bounding_box();
        assert!((bounds.x0 - 4.0).abs() < 0.1);
        assert!((bounds.y0 - 4.0).abs() < 0.1);
        assert!((bounds.x1 - 196.0).abs() < 0.1);
        assert!((bounds.y1 - 56.0).abs() < 0.1);
    }

    #[test]
    fn test_fill_region() {
        let geom = StadiumGeometry::build(200.0, 60.0, 4.0);
        let fill = geom.fill_path();
        assert_eq!(count(fill, |el| matches!(el, PathEl::MoveTo(_))), 3);
        assert_eq!(count(fill, |el| matches!(el, PathEl::ClosePath)), 3);

        assert!(geom.contains(Point::new(100.0, 30.0)));
        // Inside the left and right caps.
        assert!(geom.contains(Point::new(8.0, 30.0)));
        assert!(geom.contains(Point::new(192.0, 30.0)));
        // Corners outside the caps.
        assert!(!geom.contains(Point::new(5.0, 6.0)));
        assert!(!geom.contains(Point::new(195.0, 54.0)));
        assert!(!geom.contains(Point::new(100.0, 59.0)));
    }

    #[test]
    fn test_deterministic() {
        let a = StadiumGeometry::build(150.0, 48.0, 5.0);
        let b = StadiumGeometry::build(150.0, 48.0, 5.0);
        assert_eq!(a.border_path().elements(), b.border_path().elements());
        assert_eq!(a.fill_path().elements(), b.fill_path().elements());
        assert!(a.matches(150.0, 48.0, 5.0));
        assert!(!a.matches(150.0, 48.0, 6.0));
    }

    #[test]
    fn test_degenerate_is_built_anyway() {
        let geom = StadiumGeometry::build(100.0, 6.0, 5.0);
        assert!(geom.is_degenerate());
        assert!((geom.radius() + 2.0).abs() < EPS);
        assert!(!geom.border_path().elements().is_empty());
        assert!(!geom.fill_path().elements().is_empty());
    }

    #[test]
    fn test_tiny_and_empty_sizes_do_not_panic() {
        for (w, h, s) in [(0.0, 0.0, 2.0), (10.0, 1.0, 5.0), (1.0, 100.0, 2.0)] {
            let geom = StadiumGeometry::build(w, h, s);
            let _ = geom.contains(Point::new(w / 2.0, h / 2.0));
            let _ = geom.fill_path().bounding_box();
        }
    }
}
