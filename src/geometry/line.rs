use crate::math::lines;
use crate::math::Point2;
use crate::path::{PathIterator, Segment, SegmentListIter, WindingRule};
use crate::transform::Transform;

use super::{frame, Rect, Shape};

/// Line segment between two points. Encloses no area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Line {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[must_use]
    pub fn from_points(p1: &Point2, p2: &Point2) -> Self {
        Self::new(p1.x, p1.y, p2.x, p2.y)
    }

    #[must_use]
    pub fn p1(&self) -> Point2 {
        Point2::new(self.x1, self.y1)
    }

    #[must_use]
    pub fn p2(&self) -> Point2 {
        Point2::new(self.x2, self.y2)
    }

    /// Orientation of `(px, py)` relative to this directed line.
    #[must_use]
    pub fn relative_ccw(&self, px: f64, py: f64) -> i32 {
        lines::relative_ccw(self.x1, self.y1, self.x2, self.y2, px, py)
    }

    /// Distance from `(px, py)` to the infinite line through this segment.
    #[must_use]
    pub fn point_line_dist(&self, px: f64, py: f64) -> f64 {
        lines::point_line_dist(px, py, self.x1, self.y1, self.x2, self.y2)
    }

    /// Distance from `(px, py)` to this segment.
    #[must_use]
    pub fn point_seg_dist(&self, px: f64, py: f64) -> f64 {
        lines::point_seg_dist(px, py, self.x1, self.y1, self.x2, self.y2)
    }

    /// Returns true if the two segments touch.
    #[must_use]
    pub fn intersects_line(&self, other: &Line) -> bool {
        lines::lines_intersect(
            self.x1, self.y1, self.x2, self.y2, other.x1, other.y1, other.x2, other.y2,
        )
    }
}

impl Shape for Line {
    fn is_empty(&self) -> bool {
        true
    }

    fn contains(&self, _x: f64, _y: f64) -> bool {
        false
    }

    fn contains_rect(&self, _rect: &Rect) -> bool {
        false
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        lines::line_intersects_rect(
            self.x1,
            self.y1,
            self.x2,
            self.y2,
            rect.x(),
            rect.y(),
            rect.width(),
            rect.height(),
        )
    }

    fn bounds(&self) -> Rect {
        frame::from_diagonal(self.x1, self.y1, self.x2, self.y2)
    }

    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_> {
        let segments = vec![Segment::MoveTo(self.p1()), Segment::LineTo(self.p2())];
        Box::new(SegmentListIter::new(segments, WindingRule::NonZero, transform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn lines_enclose_nothing() {
        let l = Line::new(0.0, 0.0, 10.0, 10.0);
        assert!(l.is_empty());
        assert!(!l.contains(5.0, 5.0));
        assert!(!l.contains_rect(&Rect::new(4.0, 4.0, 1.0, 1.0)));
    }

    #[test]
    fn degenerate_line_is_valid() {
        let l = Line::new(3.0, 3.0, 3.0, 3.0);
        assert_eq!(l.bounds(), Rect::new(3.0, 3.0, 0.0, 0.0));
        assert_abs_diff_eq!(l.point_seg_dist(6.0, 7.0), 5.0);
        assert_eq!(l.path_iter(None).segments().count(), 2);
    }

    #[test]
    fn intersects_rect_through_and_outside() {
        let l = Line::new(-5.0, 5.0, 15.0, 5.0);
        assert!(l.intersects_rect(&Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!l.intersects_rect(&Rect::new(0.0, 6.0, 10.0, 10.0)));
    }

    #[test]
    fn queries_delegate_to_line_helpers() {
        let l = Line::new(0.0, 0.0, 10.0, 0.0);
        assert_eq!(l.relative_ccw(5.0, -1.0), 1);
        assert_abs_diff_eq!(l.point_line_dist(20.0, 3.0), 3.0);
        assert!(l.intersects_line(&Line::new(5.0, -5.0, 5.0, 5.0)));
        assert!(!l.intersects_line(&Line::new(0.0, 1.0, 10.0, 1.0)));
    }
}
