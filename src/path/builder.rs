use crate::crossing::{cross_shape, intersect_shape, Crossing};
use crate::error::{PathError, Result};
use crate::geometry::{frame, Rect, Shape};
use crate::math::Point2;
use crate::transform::Transform;

use super::{PathIterator, Segment, SegmentListIter, WindingRule};

/// A mutable outline assembled from move, line, curve and close commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    rule: WindingRule,
    segments: Vec<Segment>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_winding_rule(rule: WindingRule) -> Self {
        Self {
            rule,
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn winding_rule(&self) -> WindingRule {
        self.rule
    }

    pub fn set_winding_rule(&mut self, rule: WindingRule) {
        self.rule = rule;
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Starts a new subpath. A move directly after another move replaces it.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let p = Point2::new(x, y);
        if let Some(Segment::MoveTo(last)) = self.segments.last_mut() {
            *last = p;
        } else {
            self.segments.push(Segment::MoveTo(p));
        }
    }

    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] if the path has no segments yet.
    pub fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.push_drawing(Segment::LineTo(Point2::new(x, y)))
    }

    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] if the path has no segments yet.
    pub fn quad_to(&mut self, ctrl_x: f64, ctrl_y: f64, x: f64, y: f64) -> Result<()> {
        self.push_drawing(Segment::QuadTo(Point2::new(ctrl_x, ctrl_y), Point2::new(x, y)))
    }

    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] if the path has no segments yet.
    #[allow(clippy::too_many_arguments)]
    pub fn cubic_to(
        &mut self,
        ctrl_x1: f64,
        ctrl_y1: f64,
        ctrl_x2: f64,
        ctrl_y2: f64,
        x: f64,
        y: f64,
    ) -> Result<()> {
        self.push_drawing(Segment::CubicTo(
            Point2::new(ctrl_x1, ctrl_y1),
            Point2::new(ctrl_x2, ctrl_y2),
            Point2::new(x, y),
        ))
    }

    /// Closes the current subpath. Closing twice in a row has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] if the path has no segments yet.
    pub fn close_path(&mut self) -> Result<()> {
        match self.segments.last() {
            None => Err(PathError::MissingMoveTo.into()),
            Some(Segment::Close) => Ok(()),
            Some(_) => {
                self.segments.push(Segment::Close);
                Ok(())
            }
        }
    }

    fn push_drawing(&mut self, segment: Segment) -> Result<()> {
        if self.segments.is_empty() {
            return Err(PathError::MissingMoveTo.into());
        }
        self.segments.push(segment);
        Ok(())
    }

    /// Removes every segment, keeping the winding rule.
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    /// Appends the segments of `iter`.
    ///
    /// With `connect`, a leading move is turned into a line from the current
    /// point, unless the current subpath is closed or the move lands on the
    /// current point.
    pub fn append<I: PathIterator>(&mut self, iter: I, connect: bool) {
        let mut first = true;
        for segment in iter.segments() {
            let segment = match segment {
                Segment::MoveTo(p) if first && connect => match self.open_point() {
                    Some(current) if current == p => {
                        first = false;
                        continue;
                    }
                    Some(_) => Segment::LineTo(p),
                    None => segment,
                },
                _ => segment,
            };
            first = false;
            self.segments.push(segment);
        }
    }

    /// Current point of an unclosed subpath.
    fn open_point(&self) -> Option<Point2> {
        match self.segments.last() {
            None | Some(Segment::Close) => None,
            Some(segment) => segment.end_point(),
        }
    }

    /// Point the next segment would start from.
    ///
    /// After a close this is the start of the closed subpath.
    #[must_use]
    pub fn current_point(&self) -> Option<Point2> {
        match self.segments.last()? {
            Segment::Close => self.segments.iter().rev().find_map(|s| match s {
                Segment::MoveTo(p) => Some(*p),
                _ => None,
            }),
            segment => segment.end_point(),
        }
    }

    /// Applies `transform` to every point in place.
    pub fn transform(&mut self, transform: &Transform) {
        for segment in &mut self.segments {
            *segment = segment.transformed(transform);
        }
    }
}

/// Bounds of every point, control points included.
pub(crate) fn segment_bounds(segments: &[Segment]) -> Rect {
    let mut points = segments.iter().flat_map(|s| match *s {
        Segment::MoveTo(p) | Segment::LineTo(p) => vec![p],
        Segment::QuadTo(c, p) => vec![c, p],
        Segment::CubicTo(c1, c2, p) => vec![c1, c2, p],
        Segment::Close => Vec::new(),
    });
    let Some(first) = points.next() else {
        return Rect::default();
    };
    let mut bounds = Rect::new(first.x, first.y, 0.0, 0.0);
    for p in points {
        bounds.add_point_local(p.x, p.y);
    }
    bounds
}

impl Shape for Path {
    fn is_empty(&self) -> bool {
        frame::is_empty(&self.bounds())
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        self.rule.is_inside(cross_shape(self, x, y))
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        match intersect_shape(self, rect) {
            Crossing::Boundary => false,
            Crossing::Count(n) => self.rule.is_inside(n),
        }
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        match intersect_shape(self, rect) {
            Crossing::Boundary => true,
            Crossing::Count(n) => self.rule.is_inside(n),
        }
    }

    fn bounds(&self) -> Rect {
        segment_bounds(&self.segments)
    }

    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_> {
        Box::new(SegmentListIter::new(self.segments.clone(), self.rule, transform))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::EuklidError;

    fn triangle() -> Path {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(10.0, 0.0).unwrap();
        path.line_to(0.0, 10.0).unwrap();
        path.close_path().unwrap();
        path
    }

    #[test]
    fn drawing_requires_a_move() {
        let mut path = Path::new();
        assert_eq!(
            path.line_to(1.0, 1.0),
            Err(EuklidError::Path(PathError::MissingMoveTo))
        );
        assert!(path.quad_to(1.0, 1.0, 2.0, 2.0).is_err());
        assert!(path.cubic_to(1.0, 1.0, 2.0, 2.0, 3.0, 3.0).is_err());
        assert!(path.close_path().is_err());
        assert!(path.segments().is_empty());
    }

    #[test]
    fn repeated_moves_and_closes_collapse() {
        let mut path = Path::new();
        path.move_to(1.0, 1.0);
        path.move_to(2.0, 2.0);
        path.line_to(3.0, 2.0).unwrap();
        path.close_path().unwrap();
        path.close_path().unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::MoveTo(Point2::new(2.0, 2.0)),
                Segment::LineTo(Point2::new(3.0, 2.0)),
                Segment::Close,
            ]
        );
        assert_eq!(path.current_point(), Some(Point2::new(2.0, 2.0)));
    }

    #[test]
    fn containment_follows_winding_rule() {
        let path = triangle();
        assert!(path.contains(2.0, 2.0));
        assert!(!path.contains(8.0, 8.0));
        assert!(path.contains_rect(&Rect::new(1.0, 1.0, 2.0, 2.0)));
        assert!(path.intersects_rect(&Rect::new(4.0, 4.0, 4.0, 4.0)));
        assert!(!path.intersects_rect(&Rect::new(8.0, 8.0, 1.0, 1.0)));

        // Two nested squares wound the same way.
        let mut nested = Path::with_winding_rule(WindingRule::EvenOdd);
        for (lo, hi) in [(0.0, 10.0), (3.0, 7.0)] {
            nested.move_to(lo, lo);
            nested.line_to(hi, lo).unwrap();
            nested.line_to(hi, hi).unwrap();
            nested.line_to(lo, hi).unwrap();
            nested.close_path().unwrap();
        }
        assert!(nested.contains(1.0, 5.0));
        assert!(!nested.contains(5.0, 5.0));
        nested.set_winding_rule(WindingRule::NonZero);
        assert!(nested.contains(5.0, 5.0));
    }

    #[test]
    fn append_connects_subpaths() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(5.0, 0.0).unwrap();
        let line = crate::geometry::Line::new(5.0, 5.0, 0.0, 5.0);
        path.append(line.path_iter(None), true);
        assert_eq!(path.segments()[2], Segment::LineTo(Point2::new(5.0, 5.0)));

        let mut separate = Path::new();
        separate.append(line.path_iter(None), true);
        assert_eq!(separate.segments()[0], Segment::MoveTo(Point2::new(5.0, 5.0)));
    }

    #[test]
    fn bounds_and_transform() {
        let mut path = triangle();
        assert_eq!(path.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
        path.transform(&Transform::rigid(0.0, 5.0, -5.0));
        assert_eq!(path.bounds(), Rect::new(5.0, -5.0, 10.0, 10.0));
        path.reset();
        assert!(path.is_empty());
        assert_eq!(path.current_point(), None);
    }

    #[test]
    fn quad_control_points_count_toward_bounds() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.quad_to(5.0, 10.0, 10.0, 0.0).unwrap();
        assert_eq!(path.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(path.contains(5.0, 2.0));
    }
}
