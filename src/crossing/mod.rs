//! Ray and band crossing counts used for containment and intersection tests.
//!
//! A point is classified by casting a ray toward +x and summing the signed
//! crossings of every segment of an outline. Rectangles are classified the
//! same way with a horizontal band, which additionally detects when the
//! outline passes through the rectangle.
mod bound;
mod curve;
mod segment;

pub use segment::{cross_cubic, cross_line, cross_quad, intersect_cubic, intersect_line, intersect_quad};

use crate::geometry::{Rect, Shape};
use crate::path::{PathIterator, Segment};

/// Tolerance for parameter and bound comparisons.
pub const DELTA: f64 = 1e-5;

/// Outcome of sweeping a band across an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// The outline passes through the swept rectangle.
    Boundary,
    /// Net signed crossings of the band.
    Count(i32),
}

impl Crossing {
    /// Returns true if the outline touches the swept rectangle.
    #[must_use]
    pub fn is_boundary(self) -> bool {
        matches!(self, Self::Boundary)
    }

    /// Crossing count, or `None` for [`Crossing::Boundary`].
    #[must_use]
    pub fn count(self) -> Option<i32> {
        match self {
            Self::Boundary => None,
            Self::Count(n) => Some(n),
        }
    }
}

/// Returns true if `v` is within [`DELTA`] of zero.
#[must_use]
pub fn is_zero(v: f64) -> bool {
    -DELTA < v && v < DELTA
}

/// Inside test for the non-zero winding rule.
#[must_use]
pub fn is_inside_non_zero(cross: i32) -> bool {
    cross != 0
}

/// Inside test for the even-odd winding rule.
#[must_use]
pub fn is_inside_even_odd(cross: i32) -> bool {
    cross & 1 != 0
}

/// Signed crossings of the ray from `(x, y)` with every segment of `iter`.
///
/// Open subpaths are closed implicitly. A query point that coincides with a
/// vertex yields `0`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn cross_path<I: PathIterator>(mut iter: I, x: f64, y: f64) -> i32 {
    let mut cross = 0;
    let (mut mx, mut my) = (0.0, 0.0);
    let (mut cx, mut cy) = (0.0, 0.0);

    while !iter.is_done() {
        let Ok(segment) = iter.current_segment() else {
            break;
        };
        match segment {
            Segment::MoveTo(p) => {
                if cx != mx || cy != my {
                    cross += cross_line(cx, cy, mx, my, x, y);
                }
                (mx, my) = (p.x, p.y);
                (cx, cy) = (p.x, p.y);
            }
            Segment::LineTo(p) => {
                cross += cross_line(cx, cy, p.x, p.y, x, y);
                (cx, cy) = (p.x, p.y);
            }
            Segment::QuadTo(c, p) => {
                cross += cross_quad(cx, cy, c.x, c.y, p.x, p.y, x, y);
                (cx, cy) = (p.x, p.y);
            }
            Segment::CubicTo(c1, c2, p) => {
                cross += cross_cubic(cx, cy, c1.x, c1.y, c2.x, c2.y, p.x, p.y, x, y);
                (cx, cy) = (p.x, p.y);
            }
            Segment::Close => {
                if cy != my || cx != mx {
                    cross += cross_line(cx, cy, mx, my, x, y);
                    (cx, cy) = (mx, my);
                }
            }
        }

        if x == cx && y == cy {
            cross = 0;
            cy = my;
            break;
        }
        iter.advance();
    }

    if cy != my {
        cross += cross_line(cx, cy, mx, my, x, y);
    }
    cross
}

/// Band crossing of every segment of `iter` against `rect`.
///
/// Stops at the first segment that passes through the rectangle.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn intersect_path<I: PathIterator>(mut iter: I, rect: &Rect) -> Crossing {
    let (rx1, ry1) = (rect.x(), rect.y());
    let (rx2, ry2) = (rect.max_x(), rect.max_y());
    let mut cross = 0;
    let (mut mx, mut my) = (0.0, 0.0);
    let (mut cx, mut cy) = (0.0, 0.0);

    while !iter.is_done() {
        let Ok(segment) = iter.current_segment() else {
            break;
        };
        let count = match segment {
            Segment::MoveTo(p) => {
                let count = if cx != mx || cy != my {
                    intersect_line(cx, cy, mx, my, rx1, ry1, rx2, ry2)
                } else {
                    Crossing::Count(0)
                };
                (mx, my) = (p.x, p.y);
                (cx, cy) = (p.x, p.y);
                count
            }
            Segment::LineTo(p) => {
                let count = intersect_line(cx, cy, p.x, p.y, rx1, ry1, rx2, ry2);
                (cx, cy) = (p.x, p.y);
                count
            }
            Segment::QuadTo(c, p) => {
                let count = intersect_quad(cx, cy, c.x, c.y, p.x, p.y, rx1, ry1, rx2, ry2);
                (cx, cy) = (p.x, p.y);
                count
            }
            Segment::CubicTo(c1, c2, p) => {
                let count = intersect_cubic(
                    cx, cy, c1.x, c1.y, c2.x, c2.y, p.x, p.y, rx1, ry1, rx2, ry2,
                );
                (cx, cy) = (p.x, p.y);
                count
            }
            Segment::Close => {
                let count = if cy != my || cx != mx {
                    intersect_line(cx, cy, mx, my, rx1, ry1, rx2, ry2)
                } else {
                    Crossing::Count(0)
                };
                (cx, cy) = (mx, my);
                count
            }
        };
        match count {
            Crossing::Boundary => return Crossing::Boundary,
            Crossing::Count(n) => cross += n,
        }
        iter.advance();
    }

    if cy != my {
        match intersect_line(cx, cy, mx, my, rx1, ry1, rx2, ry2) {
            Crossing::Boundary => return Crossing::Boundary,
            Crossing::Count(n) => cross += n,
        }
    }
    Crossing::Count(cross)
}

/// Ray crossings of `shape`'s outline, or `0` if `(x, y)` is outside its bounds.
#[must_use]
pub fn cross_shape<S: Shape + ?Sized>(shape: &S, x: f64, y: f64) -> i32 {
    if !shape.bounds().contains(x, y) {
        return 0;
    }
    cross_path(shape.path_iter(None), x, y)
}

/// Band crossing of `shape`'s outline, or a zero count if `rect` misses its bounds.
#[must_use]
pub fn intersect_shape<S: Shape + ?Sized>(shape: &S, rect: &Rect) -> Crossing {
    if !shape.bounds().intersects_rect(rect) {
        return Crossing::Count(0);
    }
    intersect_path(shape.path_iter(None), rect)
}
