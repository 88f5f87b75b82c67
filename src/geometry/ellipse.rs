use std::f64::consts::SQRT_2;

use crate::error::Result;
use crate::math::Point2;
use crate::path::{exhausted, PathIterator, Segment, WindingRule};
use crate::transform::Transform;

use super::{frame, Rect, Shape};

/// One frame-relative coordinate: `x + fx·width + ax·arc_w`, `y + fy·height + ay·arc_h`,
/// stored as `[fx, ax, fy, ay]`.
pub(crate) type TablePoint = [f64; 4];

#[derive(Debug, Clone, Copy)]
pub(crate) enum TableEntry {
    Move(TablePoint),
    Line(TablePoint),
    Cubic(TablePoint, TablePoint, TablePoint),
}

/// Control point offset for a quarter ellipse measured from the corner.
const U: f64 = 2.0 / 3.0 * (SQRT_2 - 1.0);

const ELLIPSE_TABLE: [TableEntry; 5] = [
    TableEntry::Move([1.0, 0.0, 0.5, 0.0]),
    TableEntry::Cubic(
        [1.0, 0.0, 0.5 + U, 0.0],
        [0.5 + U, 0.0, 1.0, 0.0],
        [0.5, 0.0, 1.0, 0.0],
    ),
    TableEntry::Cubic(
        [0.5 - U, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.5 + U, 0.0],
        [0.0, 0.0, 0.5, 0.0],
    ),
    TableEntry::Cubic(
        [0.0, 0.0, 0.5 - U, 0.0],
        [0.5 - U, 0.0, 0.0, 0.0],
        [0.5, 0.0, 0.0, 0.0],
    ),
    TableEntry::Cubic(
        [0.5 + U, 0.0, 0.0, 0.0],
        [1.0, 0.0, 0.5 - U, 0.0],
        [1.0, 0.0, 0.5, 0.0],
    ),
];

/// Walks a table of frame-relative segments and closes the outline.
#[derive(Debug, Clone)]
pub(crate) struct CornerTableIter {
    frame: Rect,
    arc_w: f64,
    arc_h: f64,
    table: &'static [TableEntry],
    index: usize,
    transform: Option<Transform>,
}

impl CornerTableIter {
    pub(crate) fn new(
        frame: Rect,
        arc_w: f64,
        arc_h: f64,
        table: &'static [TableEntry],
        transform: Option<&Transform>,
    ) -> Self {
        let index = if frame.width() < 0.0 || frame.height() < 0.0 || arc_w < 0.0 || arc_h < 0.0 {
            table.len() + 1
        } else {
            0
        };
        Self {
            frame,
            arc_w,
            arc_h,
            table,
            index,
            transform: transform.copied(),
        }
    }

    fn point(&self, p: &TablePoint) -> Point2 {
        Point2::new(
            self.frame.x() + p[0] * self.frame.width() + p[1] * self.arc_w,
            self.frame.y() + p[2] * self.frame.height() + p[3] * self.arc_h,
        )
    }
}

impl PathIterator for CornerTableIter {
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }

    fn is_done(&self) -> bool {
        self.index > self.table.len()
    }

    fn advance(&mut self) {
        if !self.is_done() {
            self.index += 1;
        }
    }

    fn current_segment(&self) -> Result<Segment> {
        if self.is_done() {
            return Err(exhausted());
        }
        let segment = match self.table.get(self.index) {
            None => Segment::Close,
            Some(TableEntry::Move(p)) => Segment::MoveTo(self.point(p)),
            Some(TableEntry::Line(p)) => Segment::LineTo(self.point(p)),
            Some(TableEntry::Cubic(c1, c2, p)) => {
                Segment::CubicTo(self.point(c1), self.point(c2), self.point(p))
            }
        };
        Ok(segment.apply(self.transform.as_ref()))
    }
}

/// Ellipse inscribed in a framing rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ellipse {
    frame: Rect,
}

impl Ellipse {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_frame(Rect::new(x, y, width, height))
    }

    #[must_use]
    pub fn from_frame(frame: Rect) -> Self {
        Self { frame }
    }

    /// Returns the framing rectangle.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

impl Shape for Ellipse {
    fn is_empty(&self) -> bool {
        frame::is_empty(&self.frame)
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        frame::normalize(&self.frame, x, y).is_some_and(|(a, b)| a * a + b * b < 0.25)
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        if self.is_empty() || frame::is_empty(rect) {
            return false;
        }
        let (x1, y1, x2, y2) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
        self.contains(x1, y1) && self.contains(x2, y1) && self.contains(x2, y2) && self.contains(x1, y2)
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        if self.is_empty() || frame::is_empty(rect) {
            return false;
        }
        let (nx, ny) = frame::nearest_in(rect, self.frame.center_x(), self.frame.center_y());
        self.contains(nx, ny)
    }

    fn bounds(&self) -> Rect {
        self.frame
    }

    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_> {
        Box::new(ellipse_iter(self.frame, transform))
    }
}

pub(crate) fn ellipse_iter(frame: Rect, transform: Option<&Transform>) -> CornerTableIter {
    CornerTableIter::new(frame, 0.0, 0.0, &ELLIPSE_TABLE, transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossing::{cross_shape, is_inside_non_zero};
    use approx::assert_relative_eq;

    #[test]
    fn outline_has_four_quarters_and_close() {
        let e = Ellipse::new(0.0, 0.0, 10.0, 20.0);
        let segments: Vec<_> = e.path_iter(None).segments().collect();
        assert_eq!(segments.len(), 6);
        assert_eq!(segments[0], Segment::MoveTo(Point2::new(10.0, 10.0)));
        assert_eq!(segments[5], Segment::Close);
        match segments[1] {
            Segment::CubicTo(_, _, p) => assert_relative_eq!(p, Point2::new(5.0, 20.0)),
            other => panic!("expected a cubic, got {other:?}"),
        }
    }

    #[test]
    fn containment_matches_crossing() {
        let e = Ellipse::new(0.0, 0.0, 10.0, 20.0);
        for &(x, y) in &[(5.0, 10.0), (1.0, 10.0), (5.0, 1.0), (0.5, 0.5), (9.5, 19.5)] {
            assert_eq!(e.contains(x, y), is_inside_non_zero(cross_shape(&e, x, y)), "({x}, {y})");
        }
    }

    #[test]
    fn rect_queries() {
        let e = Ellipse::new(0.0, 0.0, 10.0, 10.0);
        assert!(e.contains_rect(&Rect::new(3.0, 3.0, 4.0, 4.0)));
        assert!(!e.contains_rect(&Rect::new(0.0, 0.0, 4.0, 4.0)));
        assert!(e.intersects_rect(&Rect::new(-5.0, 4.0, 6.0, 2.0)));
        // Corner region of the frame lies outside the ellipse.
        assert!(!e.intersects_rect(&Rect::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn empty_frame_contains_nothing() {
        let e = Ellipse::new(0.0, 0.0, 0.0, 10.0);
        assert!(e.is_empty());
        assert!(!e.contains(0.0, 5.0));
        assert!(!e.intersects_rect(&Rect::new(-1.0, -1.0, 5.0, 20.0)));
    }

    #[test]
    fn negative_frame_iterator_is_exhausted() {
        let e = Ellipse::new(0.0, 0.0, -1.0, 10.0);
        let iter = e.path_iter(None);
        assert!(iter.is_done());
        assert!(iter.current_segment().is_err());
    }
}
