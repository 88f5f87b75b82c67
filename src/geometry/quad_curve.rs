//! Quadratic Bezier curves and raw-coordinate helpers over `[x1, y1, cx, cy, x2, y2]`.
use crate::crossing::{cross_shape, intersect_shape, is_inside_even_odd, Crossing};
use crate::math::lines::point_seg_dist_sq;
use crate::math::Point2;
use crate::path::{PathIterator, Segment, SegmentListIter, WindingRule};
use crate::transform::Transform;

use super::{Rect, Shape};

/// Quadratic Bezier segment over `t` in `[0, 1]`.
///
/// A curve encloses no area, but containment queries treat the region between
/// the curve and its chord as its interior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCurve {
    p1: Point2,
    ctrl: Point2,
    p2: Point2,
}

impl QuadCurve {
    #[must_use]
    pub fn new(x1: f64, y1: f64, ctrl_x: f64, ctrl_y: f64, x2: f64, y2: f64) -> Self {
        Self::from_points(
            Point2::new(x1, y1),
            Point2::new(ctrl_x, ctrl_y),
            Point2::new(x2, y2),
        )
    }

    #[must_use]
    pub fn from_points(p1: Point2, ctrl: Point2, p2: Point2) -> Self {
        Self { p1, ctrl, p2 }
    }

    #[must_use]
    pub fn p1(&self) -> Point2 {
        self.p1
    }

    #[must_use]
    pub fn ctrl(&self) -> Point2 {
        self.ctrl
    }

    #[must_use]
    pub fn p2(&self) -> Point2 {
        self.p2
    }

    /// Coordinates as `[x1, y1, ctrl_x, ctrl_y, x2, y2]`.
    #[must_use]
    pub fn coords(&self) -> [f64; 6] {
        [self.p1.x, self.p1.y, self.ctrl.x, self.ctrl.y, self.p2.x, self.p2.y]
    }

    /// Point on the curve at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let p = self.p1.coords * (u * u) + self.ctrl.coords * (2.0 * u * t) + self.p2.coords * (t * t);
        Point2::from(p)
    }

    /// Squared distance of the control point from the chord.
    #[must_use]
    pub fn flatness_sq(&self) -> f64 {
        flatness_sq(&self.coords())
    }

    /// Distance of the control point from the chord.
    #[must_use]
    pub fn flatness(&self) -> f64 {
        self.flatness_sq().sqrt()
    }

    /// Splits the curve at `t = 0.5`.
    #[must_use]
    pub fn subdivide(&self) -> (QuadCurve, QuadCurve) {
        let (l, r) = subdivide(&self.coords());
        (
            QuadCurve::new(l[0], l[1], l[2], l[3], l[4], l[5]),
            QuadCurve::new(r[0], r[1], r[2], r[3], r[4], r[5]),
        )
    }
}

/// Squared flatness of raw quadratic coordinates `[x1, y1, cx, cy, x2, y2]`.
#[must_use]
pub fn flatness_sq(c: &[f64; 6]) -> f64 {
    point_seg_dist_sq(c[2], c[3], c[0], c[1], c[4], c[5])
}

/// Splits raw quadratic coordinates at `t = 0.5` into left and right halves.
#[must_use]
pub fn subdivide(c: &[f64; 6]) -> ([f64; 6], [f64; 6]) {
    let [x1, y1, cx, cy, x2, y2] = *c;
    let cx1 = (x1 + cx) / 2.0;
    let cy1 = (y1 + cy) / 2.0;
    let cx2 = (x2 + cx) / 2.0;
    let cy2 = (y2 + cy) / 2.0;
    let mx = (cx1 + cx2) / 2.0;
    let my = (cy1 + cy2) / 2.0;
    ([x1, y1, cx1, cy1, mx, my], [mx, my, cx2, cy2, x2, y2])
}

impl Shape for QuadCurve {
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
        let min_x = self.p1.x.min(self.p2.x).min(self.ctrl.x);
        let min_y = self.p1.y.min(self.p2.y).min(self.ctrl.y);
        let max_x = self.p1.x.max(self.p2.x).max(self.ctrl.x);
        let max_y = self.p1.y.max(self.p2.y).max(self.ctrl.y);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_> {
        let segments = vec![Segment::MoveTo(self.p1), Segment::QuadTo(self.ctrl, self.p2)];
        Box::new(SegmentListIter::new(segments, WindingRule::NonZero, transform))
    }
}
