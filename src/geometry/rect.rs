use crate::math::lines::{distance_sq, line_intersects_rect};
use crate::math::util::clamp;
use crate::math::Point2;
use crate::path::{PathIterator, Segment, SegmentListIter, WindingRule};
use crate::transform::Transform;

use super::{frame, Shape};

/// Outcode bit: the point lies left of the rectangle.
pub const OUT_LEFT: u8 = 1;
/// Outcode bit: the point lies above the rectangle.
pub const OUT_TOP: u8 = 2;
/// Outcode bit: the point lies right of the rectangle.
pub const OUT_RIGHT: u8 = 4;
/// Outcode bit: the point lies below the rectangle.
pub const OUT_BOTTOM: u8 = 8;

/// Width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension {
    width: f64,
    height: f64,
}

impl Dimension {
    /// Creates a new dimension.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner (y grows down).
///
/// Negative or zero sizes are allowed and make the rectangle empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning two opposite corners, in any order.
    #[must_use]
    pub fn from_diagonal(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        frame::from_diagonal(x1, y1, x2, y2)
    }

    /// Rectangle centered on `(cx, cy)` with one corner at `(corner_x, corner_y)`.
    #[must_use]
    pub fn from_center(cx: f64, cy: f64, corner_x: f64, corner_y: f64) -> Self {
        frame::from_center(cx, cy, corner_x, corner_y)
    }

    /// Returns the x coordinate of the origin.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate of the origin.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    #[must_use]
    pub fn min(&self) -> Point2 {
        Point2::new(self.min_x(), self.min_y())
    }

    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.max_x(), self.max_y())
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.center_x(), self.center_y())
    }

    /// Returns the origin.
    #[must_use]
    pub fn location(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Returns the size.
    #[must_use]
    pub fn size(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    /// Replaces origin and size.
    pub fn set_bounds(&mut self, x: f64, y: f64, width: f64, height: f64) {
        *self = Self::new(x, y, width, height);
    }

    /// Overlap of the two rectangles. Disjoint inputs yield an empty result.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x1 = self.min_x().max(other.min_x());
        let y1 = self.min_y().max(other.min_y());
        let x2 = self.max_x().min(other.max_x());
        let y2 = self.max_y().min(other.max_y());
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        let mut r = *self;
        r.union_local(other);
        r
    }

    /// Grows this rectangle to contain `other`.
    pub fn union_local(&mut self, other: &Rect) {
        let x1 = self.min_x().min(other.min_x());
        let y1 = self.min_y().min(other.min_y());
        let x2 = self.max_x().max(other.max_x());
        let y2 = self.max_y().max(other.max_y());
        self.set_bounds(x1, y1, x2 - x1, y2 - y1);
    }

    /// Grows this rectangle to contain `(px, py)`.
    pub fn add_point_local(&mut self, px: f64, py: f64) {
        let x1 = self.x.min(px);
        let x2 = self.max_x().max(px);
        let y1 = self.y.min(py);
        let y2 = self.max_y().max(py);
        self.set_bounds(x1, y1, x2 - x1, y2 - y1);
    }

    /// Bit mask of the `OUT_*` sides that `(px, py)` lies beyond.
    ///
    /// An empty dimension marks the point outside on both sides of that axis.
    #[must_use]
    pub fn outcode(&self, px: f64, py: f64) -> u8 {
        let mut code = 0;
        if self.width <= 0.0 {
            code |= OUT_LEFT | OUT_RIGHT;
        } else if px < self.x {
            code |= OUT_LEFT;
        } else if px > self.max_x() {
            code |= OUT_RIGHT;
        }
        if self.height <= 0.0 {
            code |= OUT_TOP | OUT_BOTTOM;
        } else if py < self.y {
            code |= OUT_TOP;
        } else if py > self.max_y() {
            code |= OUT_BOTTOM;
        }
        code
    }

    /// Returns true if the segment `(x1, y1)-(x2, y2)` touches this rectangle.
    #[must_use]
    pub fn intersects_line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
        line_intersects_rect(x1, y1, x2, y2, self.x, self.y, self.width, self.height)
    }

    /// The point of this rectangle nearest to `p`.
    #[must_use]
    pub fn closest_interior_point(&self, p: &Point2) -> Point2 {
        Point2::new(
            clamp(p.x, self.min_x(), self.max_x()),
            clamp(p.y, self.min_y(), self.max_y()),
        )
    }

    /// Squared distance from `p` to the nearest point of this rectangle.
    #[must_use]
    pub fn point_rect_distance_sq(&self, p: &Point2) -> f64 {
        let q = self.closest_interior_point(p);
        distance_sq(p.x, p.y, q.x, q.y)
    }

    /// Distance from `p` to the nearest point of this rectangle.
    #[must_use]
    pub fn point_rect_distance(&self, p: &Point2) -> f64 {
        self.point_rect_distance_sq(p).sqrt()
    }
}

impl Shape for Rect {
    fn is_empty(&self) -> bool {
        frame::is_empty(self)
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        if self.is_empty() || x < self.x || y < self.y {
            return false;
        }
        x - self.x <= self.width && y - self.y <= self.height
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        if self.is_empty() {
            return false;
        }
        self.x <= rect.x
            && rect.max_x() <= self.max_x()
            && self.y <= rect.y
            && rect.max_y() <= self.max_y()
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        if self.is_empty() {
            return false;
        }
        rect.max_x() > self.x
            && rect.x < self.max_x()
            && rect.max_y() > self.y
            && rect.y < self.max_y()
    }

    fn bounds(&self) -> Rect {
        *self
    }

    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_> {
        let segments = if self.width < 0.0 || self.height < 0.0 {
            Vec::new()
        } else {
            vec![
                Segment::MoveTo(Point2::new(self.x, self.y)),
                Segment::LineTo(Point2::new(self.max_x(), self.y)),
                Segment::LineTo(Point2::new(self.max_x(), self.max_y())),
                Segment::LineTo(Point2::new(self.x, self.max_y())),
                Segment::Close,
            ]
        };
        Box::new(SegmentListIter::new(segments, WindingRule::NonZero, transform))
    }
}
