use crate::math::Point2;
use crate::path::PathIterator;
use crate::transform::Transform;

use super::ellipse::ellipse_iter;
use super::{Ellipse, Rect, Shape};

/// Circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    x: f64,
    y: f64,
    radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    #[must_use]
    pub fn from_center(center: &Point2, radius: f64) -> Self {
        Self::new(center.x, center.y, radius)
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Returns true if the two circles overlap. Tangent circles do not.
    #[must_use]
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy < reach * reach
    }

    /// Copy of this circle moved by `(dx, dy)`.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.radius)
    }

    /// Moves this circle by `(dx, dy)` in place.
    pub fn offset_local(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    fn as_ellipse(&self) -> Ellipse {
        Ellipse::from_frame(self.bounds())
    }
}

impl Shape for Circle {
    fn is_empty(&self) -> bool {
        self.radius <= 0.0
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy < self.radius * self.radius
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        self.as_ellipse().contains_rect(rect)
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        self.as_ellipse().intersects_rect(rect)
    }

    fn bounds(&self) -> Rect {
        let d = self.radius * 2.0;
        Rect::new(self.x - self.radius, self.y - self.radius, d, d)
    }

    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_> {
        Box::new(ellipse_iter(self.bounds(), transform))
    }
}
