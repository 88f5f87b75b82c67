//! Cubic Bezier curves and raw-coordinate helpers over `[x1, y1, cx1, cy1, cx2, cy2, x2, y2]`.
use crate::crossing::{cross_shape, intersect_shape, is_inside_even_odd, Crossing};
use crate::math::lines::point_seg_dist_sq;
use crate::math::Point2;
use crate::path::{PathIterator, Segment, SegmentListIter, WindingRule};
use crate::transform::Transform;

use super::{Rect, Shape};

/// Cubic Bezier segment over `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCurve {
    p1: Point2,
    ctrl1: Point2,
    ctrl2: Point2,
    p2: Point2,
}

impl CubicCurve {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x1: f64,
        y1: f64,
        ctrl_x1: f64,
        ctrl_y1: f64,
        ctrl_x2: f64,
        ctrl_y2: f64,
        x2: f64,
        y2: f64,
    ) -> Self {
        Self::from_points(
            Point2::new(x1, y1),
            Point2::new(ctrl_x1, ctrl_y1),
            Point2::new(ctrl_x2, ctrl_y2),
            Point2::new(x2, y2),
        )
    }

    #[must_use]
    pub fn from_points(p1: Point2, ctrl1: Point2, ctrl2: Point2, p2: Point2) -> Self {
        Self {
            p1,
            ctrl1,
            ctrl2,
            p2,
        }
    }

    #[must_use]
    pub fn p1(&self) -> Point2 {
        self.p1
    }

    #[must_use]
    pub fn ctrl1(&self) -> Point2 {
        self.ctrl1
    }

    #[must_use]
    pub fn ctrl2(&self) -> Point2 {
        self.ctrl2
    }

    #[must_use]
    pub fn p2(&self) -> Point2 {
        self.p2
    }

    /// Coordinates as `[x1, y1, cx1, cy1, cx2, cy2, x2, y2]`.
    #[must_use]
    pub fn coords(&self) -> [f64; 8] {
        [
            self.p1.x,
            self.p1.y,
            self.ctrl1.x,
            self.ctrl1.y,
            self.ctrl2.x,
            self.ctrl2.y,
            self.p2.x,
            self.p2.y,
        ]
    }

    fn from_coords(c: &[f64; 8]) -> Self {
        Self::new(c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7])
    }

    /// Point on the curve at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let p = self.p1.coords * (u * u * u)
            + self.ctrl1.coords * (3.0 * u * u * t)
            + self.ctrl2.coords * (3.0 * u * t * t)
            + self.p2.coords * (t * t * t);
        Point2::from(p)
    }

    /// Squared distance of the farther control point from the chord.
    #[must_use]
    pub fn flatness_sq(&self) -> f64 {
        flatness_sq(&self.coords())
    }

    /// Distance of the farther control point from the chord.
    #[must_use]
    pub fn flatness(&self) -> f64 {
        self.flatness_sq().sqrt()
    }

    /// Splits the curve at `t = 0.5`.
    #[must_use]
    pub fn subdivide(&self) -> (CubicCurve, CubicCurve) {
        let (l, r) = subdivide(&self.coords());
        (Self::from_coords(&l), Self::from_coords(&r))
    }
}

/// Squared flatness of raw cubic coordinates.
#[must_use]
pub fn flatness_sq(c: &[f64; 8]) -> f64 {
    point_seg_dist_sq(c[2], c[3], c[0], c[1], c[6], c[7])
        .max(point_seg_dist_sq(c[4], c[5], c[0], c[1], c[6], c[7]))
}

/// Splits raw cubic coordinates at `t = 0.5` into left and right halves.
#[must_use]
pub fn subdivide(c: &[f64; 8]) -> ([f64; 8], [f64; 8]) {
    let [x1, y1, cx1, cy1, cx2, cy2, x2, y2] = *c;
    let mid_cx = (cx1 + cx2) / 2.0;
    let mid_cy = (cy1 + cy2) / 2.0;
    let cx1 = (x1 + cx1) / 2.0;
    let cy1 = (y1 + cy1) / 2.0;
    let cx2 = (x2 + cx2) / 2.0;
    let cy2 = (y2 + cy2) / 2.0;
    let ax = (cx1 + mid_cx) / 2.0;
    let ay = (cy1 + mid_cy) / 2.0;
    let bx = (cx2 + mid_cx) / 2.0;
    let by = (cy2 + mid_cy) / 2.0;
    let mx = (ax + bx) / 2.0;
    let my = (ay + by) / 2.0;
    (
        [x1, y1, cx1, cy1, ax, ay, mx, my],
        [mx, my, bx, by, cx2, cy2, x2, y2],
    )
}

impl Shape for CubicCurve {
    fn is_empty(&self) -> bool {
        true
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        is_inside_even_odd(cross_shape(self, x, y))
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        match intersect_shape(self, rect) {
            Crossing::Boundary => false,
            Crossing::Count(n) => is_inside_even_odd(n),
        }
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        match intersect_shape(self, rect) {
            Crossing::Boundary => true,
            Crossing::Count(n) => is_inside_even_odd(n),
        }
    }

    fn bounds(&self) -> Rect {
        let xs = [self.p1.x, self.ctrl1.x, self.ctrl2.x, self.p2.x];
        let ys = [self.p1.y, self.ctrl1.y, self.ctrl2.y, self.p2.y];
        let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_y = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_> {
        let segments = vec![
            Segment::MoveTo(self.p1),
            Segment::CubicTo(self.ctrl1, self.ctrl2, self.p2),
        ];
        Box::new(SegmentListIter::new(segments, WindingRule::NonZero, transform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> CubicCurve {
        CubicCurve::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0)
    }

    #[test]
    fn halves_meet_at_midpoint() {
        let c = arch();
        let (l, r) = c.subdivide();
        let mid = c.evaluate(0.5);
        assert_relative_eq!(mid, Point2::new(5.0, 7.5));
        assert_relative_eq!(l.p2(), mid);
        assert_relative_eq!(r.p1(), mid);
        assert_relative_eq!(l.evaluate(0.5), c.evaluate(0.25), epsilon = 1e-12);
        assert_relative_eq!(r.evaluate(0.5), c.evaluate(0.75), epsilon = 1e-12);
    }

    #[test]
    fn flatness_uses_farther_control_point() {
        let c = CubicCurve::new(0.0, 0.0, 2.0, 3.0, 8.0, -6.0, 10.0, 0.0);
        assert_relative_eq!(c.flatness(), 6.0);
    }

    #[test]
    fn containment_agrees_with_even_odd_crossing() {
        let c = arch();
        for &(x, y) in &[(5.0, 2.0), (5.0, 9.0), (1.0, 1.0), (9.0, 5.0), (5.0, -3.0)] {
            assert_eq!(c.contains(x, y), is_inside_even_odd(cross_shape(&c, x, y)));
        }
        assert!(c.contains(5.0, 2.0));
        assert!(!c.contains(5.0, 9.0));
    }

    #[test]
    fn rect_queries() {
        let c = arch();
        assert!(c.contains_rect(&Rect::new(4.0, 1.0, 2.0, 1.0)));
        assert!(c.intersects_rect(&Rect::new(4.0, 7.0, 2.0, 1.0)));
        assert!(!c.contains_rect(&Rect::new(4.0, 7.0, 2.0, 1.0)));
        assert!(!c.intersects_rect(&Rect::new(-5.0, -5.0, 2.0, 2.0)));
    }

    #[test]
    fn bounds_cover_control_points() {
        assert_eq!(arch().bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }
}
