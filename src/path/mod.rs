//! Path iteration protocol shared by every shape.
//!
//! A shape's outline is exposed as a single-pass cursor over [`Segment`]s.
//! The cursor is stateful and cannot be restarted; ask the shape for a fresh
//! one instead.
mod area;
mod builder;

pub use area::Area;
pub use builder::Path;

use crate::error::{PathError, Result};
use crate::math::Point2;
use crate::transform::Transform;

/// Policy for turning a crossing count into inside/outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindingRule {
    /// Inside when the crossing count is odd.
    EvenOdd,
    /// Inside when the crossing count is non-zero.
    #[default]
    NonZero,
}

impl WindingRule {
    /// Classifies a crossing count under this rule.
    #[must_use]
    pub fn is_inside(self, cross: i32) -> bool {
        match self {
            Self::EvenOdd => crate::crossing::is_inside_even_odd(cross),
            Self::NonZero => crate::crossing::is_inside_non_zero(cross),
        }
    }
}

/// A single path command with its coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Starts a new subpath.
    MoveTo(Point2),
    /// Straight line to the point.
    LineTo(Point2),
    /// Quadratic Bezier through a control point.
    QuadTo(Point2, Point2),
    /// Cubic Bezier through two control points.
    CubicTo(Point2, Point2, Point2),
    /// Closes the current subpath back to its start.
    Close,
}

impl Segment {
    /// The point the segment ends at, or `None` for [`Segment::Close`].
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::QuadTo(_, p) | Self::CubicTo(_, _, p) => {
                Some(p)
            }
            Self::Close => None,
        }
    }

    /// Applies `transform` to every point of the segment.
    #[must_use]
    pub fn transformed(self, transform: &Transform) -> Self {
        let t = |p: Point2| transform.transform_point(&p);
        match self {
            Self::MoveTo(p) => Self::MoveTo(t(p)),
            Self::LineTo(p) => Self::LineTo(t(p)),
            Self::QuadTo(c, p) => Self::QuadTo(t(c), t(p)),
            Self::CubicTo(c1, c2, p) => Self::CubicTo(t(c1), t(c2), t(p)),
            Self::Close => Self::Close,
        }
    }

    pub(crate) fn apply(self, transform: Option<&Transform>) -> Self {
        match transform {
            Some(transform) => self.transformed(transform),
            None => self,
        }
    }
}

/// Single-pass cursor over the segments of an outline.
pub trait PathIterator {
    /// Winding rule to classify the outline with.
    fn winding_rule(&self) -> WindingRule;

    /// Returns true once every segment has been consumed.
    fn is_done(&self) -> bool;

    /// Moves to the next segment. Advancing a finished cursor has no effect.
    fn advance(&mut self);

    /// Reads the segment under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Exhausted`] if the cursor is done.
    fn current_segment(&self) -> Result<Segment>;

    /// Adapts the cursor into a standard [`Iterator`] over its remaining segments.
    fn segments(self) -> Segments<Self>
    where
        Self: Sized,
    {
        Segments { iter: self }
    }
}

impl<I: PathIterator + ?Sized> PathIterator for Box<I> {
    fn winding_rule(&self) -> WindingRule {
        (**self).winding_rule()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn advance(&mut self) {
        (**self).advance();
    }

    fn current_segment(&self) -> Result<Segment> {
        (**self).current_segment()
    }
}

impl<I: PathIterator + ?Sized> PathIterator for &mut I {
    fn winding_rule(&self) -> WindingRule {
        (**self).winding_rule()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn advance(&mut self) {
        (**self).advance();
    }

    fn current_segment(&self) -> Result<Segment> {
        (**self).current_segment()
    }
}

/// Iterator adapter returned by [`PathIterator::segments`].
#[derive(Debug)]
pub struct Segments<I> {
    iter: I,
}

impl<I: PathIterator> Iterator for Segments<I> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.iter.is_done() {
            return None;
        }
        let segment = self.iter.current_segment().ok()?;
        self.iter.advance();
        Some(segment)
    }
}

pub(crate) fn exhausted() -> crate::error::EuklidError {
    PathError::Exhausted.into()
}

/// Cursor over a precomputed list of segments.
///
/// Used by shapes whose outline is cheap to materialize up front.
#[derive(Debug, Clone)]
pub struct SegmentListIter {
    segments: Vec<Segment>,
    index: usize,
    rule: WindingRule,
}

impl SegmentListIter {
    /// Creates a cursor over `segments`, applying `transform` to each one.
    #[must_use]
    pub fn new(segments: Vec<Segment>, rule: WindingRule, transform: Option<&Transform>) -> Self {
        let segments = match transform {
            Some(t) => segments.into_iter().map(|s| s.transformed(t)).collect(),
            None => segments,
        };
        Self {
            segments,
            index: 0,
            rule,
        }
    }
}

impl PathIterator for SegmentListIter {
    fn winding_rule(&self) -> WindingRule {
        self.rule
    }

    fn is_done(&self) -> bool {
        self.index >= self.segments.len()
    }

    fn advance(&mut self) {
        if !self.is_done() {
            self.index += 1;
        }
    }

    fn current_segment(&self) -> Result<Segment> {
        self.segments.get(self.index).copied().ok_or_else(exhausted)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> Vec<Segment> {
        vec![
            Segment::MoveTo(Point2::new(0.0, 0.0)),
            Segment::LineTo(Point2::new(1.0, 0.0)),
            Segment::LineTo(Point2::new(1.0, 1.0)),
            Segment::Close,
        ]
    }

    #[test]
    fn list_iter_walks_then_exhausts() {
        let mut iter = SegmentListIter::new(square(), WindingRule::NonZero, None);
        let mut count = 0;
        while !iter.is_done() {
            assert!(iter.current_segment().is_ok());
            iter.advance();
            count += 1;
        }
        assert_eq!(count, 4);
        assert_eq!(
            iter.current_segment(),
            Err(crate::error::EuklidError::Path(PathError::Exhausted))
        );
        iter.advance();
        assert!(iter.is_done());
    }

    #[test]
    fn segments_adapter_collects_everything() {
        let iter = SegmentListIter::new(square(), WindingRule::EvenOdd, None);
        assert_eq!(iter.winding_rule(), WindingRule::EvenOdd);
        let collected: Vec<_> = iter.segments().collect();
        assert_eq!(collected, square());
    }

    #[test]
    fn transform_applies_to_every_point() {
        let mut translate = Transform::identity();
        translate = translate.concatenate(&Transform::rigid(0.0, 5.0, 7.0));
        let segments: Vec<_> =
            SegmentListIter::new(square(), WindingRule::NonZero, Some(&translate))
                .segments()
                .collect();
        assert_eq!(segments[0], Segment::MoveTo(Point2::new(5.0, 7.0)));
        assert_eq!(segments[2], Segment::LineTo(Point2::new(6.0, 8.0)));
        assert_eq!(segments[3], Segment::Close);
    }

    #[test]
    fn winding_rule_classification() {
        assert!(WindingRule::NonZero.is_inside(2));
        assert!(!WindingRule::EvenOdd.is_inside(2));
        assert!(WindingRule::EvenOdd.is_inside(-1));
        assert!(!WindingRule::NonZero.is_inside(0));
    }

    #[test]
    fn end_point_of_close_is_none() {
        assert_eq!(Segment::Close.end_point(), None);
        let p = Point2::new(3.0, 4.0);
        assert_eq!(Segment::CubicTo(p, p, p).end_point(), Some(p));
    }
}
