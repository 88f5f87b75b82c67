pub mod cubic_curve;
pub mod frame;
pub mod quad_curve;

mod arc;
mod circle;
mod ellipse;
mod line;
mod plane;
mod rect;
mod round_rect;

pub use arc::{Arc, ArcType};
pub use circle::Circle;
pub use cubic_curve::CubicCurve;
pub use ellipse::Ellipse;
pub use line::Line;
pub use plane::{Plane, Ray3};
pub use quad_curve::QuadCurve;
pub use rect::{Dimension, Rect, OUT_BOTTOM, OUT_LEFT, OUT_RIGHT, OUT_TOP};
pub use round_rect::RoundRect;

use crate::error::Result;
use crate::math::Point2;
use crate::path::PathIterator;
use crate::tessellation::{FlattenParams, FlatteningPathIter};
use crate::transform::Transform;

/// A closed or open 2D outline that can be queried and walked as a path.
pub trait Shape {
    /// Returns true if the shape encloses no area.
    fn is_empty(&self) -> bool;

    /// Returns true if `(x, y)` lies inside the shape.
    fn contains(&self, x: f64, y: f64) -> bool;

    /// Returns true if `p` lies inside the shape.
    fn contains_point(&self, p: &Point2) -> bool {
        self.contains(p.x, p.y)
    }

    /// Returns true if `rect` lies entirely inside the shape.
    fn contains_rect(&self, rect: &Rect) -> bool;

    /// Returns true if the shape's interior overlaps `rect`.
    fn intersects_rect(&self, rect: &Rect) -> bool;

    /// Axis-aligned bounding rectangle.
    fn bounds(&self) -> Rect;

    /// Fresh cursor over the outline, with `transform` applied to every point.
    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_>;

    /// Cursor over the outline with every curve replaced by line segments
    /// deviating at most `flatness` from the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `flatness` is negative or not a number.
    fn flattened_path_iter(
        &self,
        transform: Option<&Transform>,
        flatness: f64,
    ) -> Result<FlatteningPathIter<'_>> {
        let params = FlattenParams::new(flatness, FlattenParams::default().limit())?;
        Ok(FlatteningPathIter::new(self.path_iter(transform), params))
    }
}

/// Every concrete shape in the library.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyShape {
    Line(Line),
    Rect(Rect),
    Ellipse(Ellipse),
    Arc(Arc),
    RoundRect(RoundRect),
    QuadCurve(QuadCurve),
    CubicCurve(CubicCurve),
    Circle(Circle),
}

macro_rules! dispatch {
    ($self:ident, $s:ident => $body:expr) => {
        match $self {
            AnyShape::Line($s) => $body,
            AnyShape::Rect($s) => $body,
            AnyShape::Ellipse($s) => $body,
            AnyShape::Arc($s) => $body,
            AnyShape::RoundRect($s) => $body,
            AnyShape::QuadCurve($s) => $body,
            AnyShape::CubicCurve($s) => $body,
            AnyShape::Circle($s) => $body,
        }
    };
}

impl Shape for AnyShape {
    fn is_empty(&self) -> bool {
        dispatch!(self, s => s.is_empty())
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        dispatch!(self, s => s.contains(x, y))
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        dispatch!(self, s => s.contains_rect(rect))
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        dispatch!(self, s => s.intersects_rect(rect))
    }

    fn bounds(&self) -> Rect {
        dispatch!(self, s => s.bounds())
    }

    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_> {
        dispatch!(self, s => s.path_iter(transform))
    }
}

macro_rules! any_shape_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for AnyShape {
                fn from(shape: $variant) -> Self {
                    Self::$variant(shape)
                }
            }
        )*
    };
}

any_shape_from!(Line, Rect, Ellipse, Arc, RoundRect, QuadCurve, CubicCurve, Circle);
