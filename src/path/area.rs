use tracing::trace;

use crate::crossing::{cross_shape, intersect_shape, is_inside_non_zero, Crossing};
use crate::geometry::{Rect, Shape};
use crate::math::Point2;
use crate::transform::Transform;

use super::builder::segment_bounds;
use super::{PathIterator, Segment, SegmentListIter, WindingRule};

/// A closed region captured from an outline.
///
/// Every subpath is closed and subpaths that cannot enclose any area are
/// dropped. Containment always uses the non-zero rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Area {
    segments: Vec<Segment>,
}

impl Area {
    /// Captures the region outlined by `iter`.
    ///
    /// Drawing segments that appear before any move are skipped.
    pub fn new<I: PathIterator>(iter: I) -> Self {
        let mut segments = Vec::new();
        let mut subpath: Vec<Segment> = Vec::new();

        for segment in iter.segments() {
            match segment {
                Segment::MoveTo(_) => {
                    flush(&mut subpath, &mut segments);
                    subpath.push(segment);
                }
                Segment::Close => flush(&mut subpath, &mut segments),
                _ if subpath.is_empty() => {
                    trace!(?segment, "skipping segment before the first move");
                }
                _ => subpath.push(segment),
            }
        }
        flush(&mut subpath, &mut segments);
        Self { segments }
    }

    /// Segments of the captured region; each subpath ends with a close.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Moves a finished subpath into `out`, closing it, unless it encloses nothing.
fn flush(subpath: &mut Vec<Segment>, out: &mut Vec<Segment>) {
    if encloses_area(subpath) {
        out.append(subpath);
        out.push(Segment::Close);
    }
    subpath.clear();
}

/// False when every point, control points included, lies on one line.
fn encloses_area(subpath: &[Segment]) -> bool {
    let points: Vec<Point2> = subpath
        .iter()
        .flat_map(|s| match *s {
            Segment::MoveTo(p) | Segment::LineTo(p) => vec![p],
            Segment::QuadTo(c, p) => vec![c, p],
            Segment::CubicTo(c1, c2, p) => vec![c1, c2, p],
            Segment::Close => Vec::new(),
        })
        .collect();
    let Some(&origin) = points.first() else {
        return false;
    };
    let Some(&far) = points.iter().find(|p| **p != origin) else {
        return false;
    };
    let dir = far - origin;
    points.iter().any(|p| {
        let off = p - origin;
        dir.x * off.y - dir.y * off.x != 0.0
    })
}

impl Shape for Area {
    fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        is_inside_non_zero(cross_shape(self, x, y))
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        match intersect_shape(self, rect) {
            Crossing::Boundary => false,
            Crossing::Count(n) => is_inside_non_zero(n),
        }
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        match intersect_shape(self, rect) {
            Crossing::Boundary => true,
            Crossing::Count(n) => is_inside_non_zero(n),
        }
    }

    fn bounds(&self) -> Rect {
        segment_bounds(&self.segments)
    }

    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_> {
        Box::new(SegmentListIter::new(self.segments.clone(), WindingRule::NonZero, transform))
    }
}

impl From<&super::Path> for Area {
    fn from(path: &super::Path) -> Self {
        Self::new(path.path_iter(None))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::path::Path;
    use approx::assert_abs_diff_eq;

    fn assert_same_iteration(one: &Area, two: &Area) {
        let a: Vec<_> = one.path_iter(None).segments().collect();
        let b: Vec<_> = two.path_iter(None).segments().collect();
        assert_eq!(a.len(), b.len());
        for (s1, s2) in a.iter().zip(&b) {
            assert_eq!(std::mem::discriminant(s1), std::mem::discriminant(s2));
            match (s1.end_point(), s2.end_point()) {
                (Some(p1), Some(p2)) => {
                    assert_abs_diff_eq!(p1.x, p2.x, epsilon = crate::math::EPSILON);
                    assert_abs_diff_eq!(p1.y, p2.y, epsilon = crate::math::EPSILON);
                }
                (None, None) => {}
                _ => panic!("segment mismatch: {s1:?} vs {s2:?}"),
            }
        }
    }

    #[test]
    fn explicit_close_changes_nothing() {
        for n in [9_u32, 10, 11] {
            // Collinear walk: no area either way.
            let mut path = Path::new();
            path.move_to(0.0, 0.0);
            for i in 1..n {
                let i = f64::from(i);
                path.line_to(2.0 * i, 3.0 * i).unwrap();
            }
            let open = Area::from(&path);
            path.close_path().unwrap();
            let closed = Area::from(&path);
            assert_same_iteration(&open, &closed);
            assert!(open.is_empty());

            // Zigzag with real area.
            let mut path = Path::new();
            path.move_to(0.0, 0.0);
            for i in 1..n {
                let y = if i % 2 == 0 { 0.0 } else { 4.0 };
                path.line_to(2.0 * f64::from(i), y).unwrap();
            }
            let open = Area::from(&path);
            path.close_path().unwrap();
            let closed = Area::from(&path);
            assert_same_iteration(&open, &closed);
            assert_eq!(open.segments().len(), n as usize + 1);
            assert_eq!(open.segments().last(), Some(&Segment::Close));
        }
    }

    #[test]
    fn empty_subpaths_are_dropped() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(5.0, 5.0).unwrap();
        path.move_to(10.0, 10.0);
        path.line_to(20.0, 10.0).unwrap();
        path.line_to(20.0, 20.0).unwrap();
        path.move_to(50.0, 50.0);
        let area = Area::from(&path);
        assert_eq!(
            area.segments(),
            &[
                Segment::MoveTo(Point2::new(10.0, 10.0)),
                Segment::LineTo(Point2::new(20.0, 10.0)),
                Segment::LineTo(Point2::new(20.0, 20.0)),
                Segment::Close,
            ]
        );
        assert_eq!(area.bounds(), Rect::new(10.0, 10.0, 10.0, 10.0));
    }

    #[test]
    fn curved_subpath_with_collinear_ends_is_kept() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.quad_to(5.0, 10.0, 10.0, 0.0).unwrap();
        let area = Area::from(&path);
        assert!(!area.is_empty());
        assert!(area.contains(5.0, 2.0));
        assert!(!area.contains(5.0, 8.0));
    }

    #[test]
    fn region_queries_use_non_zero() {
        let mut path = Path::with_winding_rule(WindingRule::EvenOdd);
        for (lo, hi) in [(0.0, 10.0), (3.0, 7.0)] {
            path.move_to(lo, lo);
            path.line_to(hi, lo).unwrap();
            path.line_to(hi, hi).unwrap();
            path.line_to(lo, hi).unwrap();
        }
        let area = Area::from(&path);
        assert!(area.contains(5.0, 5.0));
        assert!(area.contains_rect(&Rect::new(1.0, 1.0, 1.0, 1.0)));
        assert!(!area.contains_rect(&Rect::new(1.0, 1.0, 8.0, 8.0)));
        assert!(area.intersects_rect(&Rect::new(-1.0, -1.0, 2.0, 2.0)));
        assert!(!area.intersects_rect(&Rect::new(20.0, 20.0, 2.0, 2.0)));
    }
}
