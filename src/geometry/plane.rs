use crate::error::{GeometryError, Result};
use crate::math::{Point3, Quaternion, Vector3, EPSILON};

/// A ray in 3D space with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3 {
    origin: Point3,
    direction: Vector3,
}

impl Ray3 {
    /// Creates a ray, normalizing `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if `direction` has zero length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    #[must_use]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Point reached after travelling `distance` along the ray.
    #[must_use]
    pub fn point_at(&self, distance: f64) -> Point3 {
        self.origin + self.direction * distance
    }
}

/// An infinite plane `Ax + By + Cz + D = 0` with unit normal `(A, B, C)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    constant: f64,
}

impl Plane {
    /// The X/Y plane.
    pub const XY: Plane = Plane::from_raw(0.0, 0.0, 1.0, 0.0);
    /// The X/Z plane.
    pub const XZ: Plane = Plane::from_raw(0.0, 1.0, 0.0, 0.0);
    /// The Y/Z plane.
    pub const YZ: Plane = Plane::from_raw(1.0, 0.0, 0.0, 0.0);

    const fn from_raw(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            normal: Vector3::new(a, b, c),
            constant: d,
        }
    }

    /// Creates a plane from a normal and constant, normalizing both.
    ///
    /// # Errors
    ///
    /// Returns an error if `normal` has zero length.
    pub fn new(normal: Vector3, constant: f64) -> Result<Self> {
        let len = normal.norm();
        if len < EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            normal: normal / len,
            constant: constant / len,
        })
    }

    /// Plane through three points, facing the side where they wind counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are collinear.
    pub fn from_points(p1: &Point3, p2: &Point3, p3: &Point3) -> Result<Self> {
        let normal = (p2 - p1).cross(&(p3 - p1));
        let len = normal.norm();
        if len < EPSILON {
            return Err(GeometryError::Degenerate(format!(
                "plane through collinear points {p1}, {p2}, {p3}"
            ))
            .into());
        }
        let normal = normal / len;
        Ok(Self {
            normal,
            constant: -normal.dot(&p1.coords),
        })
    }

    /// Plane through `point` with the given normal.
    ///
    /// # Errors
    ///
    /// Returns an error if `normal` has zero length.
    pub fn from_point_normal(point: &Point3, normal: &Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        Ok(Self {
            normal,
            constant: -normal.dot(&point.coords),
        })
    }

    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    #[must_use]
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Signed distance from the plane to `point`; positive on the normal side.
    #[must_use]
    pub fn distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) + self.constant
    }

    /// The same plane facing the other way.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            normal: -self.normal,
            constant: -self.constant,
        }
    }

    pub fn negate_local(&mut self) -> &mut Self {
        *self = self.negate();
        self
    }

    /// Signed distance along `ray` to the plane, or `None` if the ray runs parallel to it.
    ///
    /// A ray starting on the plane is at distance zero.
    #[must_use]
    pub fn ray_distance(&self, ray: &Ray3) -> Option<f64> {
        let dividend = -self.distance(&ray.origin);
        let divisor = self.normal.dot(&ray.direction);
        if dividend.abs() < EPSILON {
            Some(0.0)
        } else if divisor.abs() < EPSILON {
            None
        } else {
            Some(dividend / divisor)
        }
    }

    /// Point where `ray` meets the plane, if it does so ahead of its origin.
    #[must_use]
    pub fn intersection(&self, ray: &Ray3) -> Option<Point3> {
        self.ray_distance(ray)
            .filter(|d| *d >= 0.0)
            .map(|d| ray.point_at(d))
    }

    /// The plane rotated about the origin.
    #[must_use]
    pub fn rotated(&self, rotation: &Quaternion) -> Self {
        Self {
            normal: rotation * self.normal,
            constant: self.constant,
        }
    }
}
