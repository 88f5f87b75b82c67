//! 2D affine transforms organized by a generality ladder.
//!
//! Each [`Transform`] variant can represent everything the variants below it
//! on the ladder can, except that a uniform scale is not a rigid motion.
//! Composition, inversion and interpolation always return a transform at
//! least as general as their inputs, climbing further only when the result
//! does not fit.
mod mutate;

use std::fmt;

use tracing::debug;

use crate::error::{Result, TransformError};
use crate::math::util::{lerp, lerpa};
use crate::math::{Matrix3, Point2, Vector2, EPSILON};

/// Tolerance when checking whether a matrix fits a less general variant.
const FIT_TOLERANCE: f64 = 1e-10;

/// Capability class of a transform, totally ordered from least to most general.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Generality {
    Identity,
    UniformScale,
    Rigid,
    NonUniform,
    Affine,
}

impl Generality {
    /// Every level in ascending order.
    pub const ALL: [Generality; 5] = [
        Self::Identity,
        Self::UniformScale,
        Self::Rigid,
        Self::NonUniform,
        Self::Affine,
    ];
}

impl fmt::Display for Generality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identity => "identity",
            Self::UniformScale => "uniform scale",
            Self::Rigid => "rigid",
            Self::NonUniform => "non-uniform",
            Self::Affine => "affine",
        };
        f.write_str(name)
    }
}

/// A 2D transform mapping `(x, y)` to
/// `(m00·x + m10·y + tx, m01·x + m11·y + ty)`.
///
/// Angles are in radians. Structured variants apply scale, then rotation,
/// then translation.
///
/// Mutators are checked against the variant: asking a transform for an
/// operation it cannot represent fails with [`TransformError::Unsupported`]
/// and leaves it unchanged. The structured variants update the named
/// component directly, while [`Transform::Affine`] composes the operation in
/// its local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Transform {
    #[default]
    Identity,
    UniformScale {
        scale: f64,
    },
    Rigid {
        rotation: f64,
        tx: f64,
        ty: f64,
    },
    NonUniform {
        scale_x: f64,
        scale_y: f64,
        rotation: f64,
        tx: f64,
        ty: f64,
    },
    Affine {
        m00: f64,
        m01: f64,
        m10: f64,
        m11: f64,
        tx: f64,
        ty: f64,
    },
}

impl Transform {
    #[must_use]
    pub fn identity() -> Self {
        Self::Identity
    }

    #[must_use]
    pub fn uniform(scale: f64) -> Self {
        Self::UniformScale { scale }
    }

    /// Rotation about the origin followed by a translation.
    #[must_use]
    pub fn rigid(rotation: f64, tx: f64, ty: f64) -> Self {
        Self::Rigid { rotation, tx, ty }
    }

    #[must_use]
    pub fn non_uniform(scale_x: f64, scale_y: f64, rotation: f64, tx: f64, ty: f64) -> Self {
        Self::NonUniform {
            scale_x,
            scale_y,
            rotation,
            tx,
            ty,
        }
    }

    #[must_use]
    pub fn affine(m00: f64, m01: f64, m10: f64, m11: f64, tx: f64, ty: f64) -> Self {
        Self::Affine {
            m00,
            m01,
            m10,
            m11,
            tx,
            ty,
        }
    }

    fn from_array(m: [f64; 6]) -> Self {
        Self::affine(m[0], m[1], m[2], m[3], m[4], m[5])
    }

    #[must_use]
    pub fn generality(&self) -> Generality {
        match self {
            Self::Identity => Generality::Identity,
            Self::UniformScale { .. } => Generality::UniformScale,
            Self::Rigid { .. } => Generality::Rigid,
            Self::NonUniform { .. } => Generality::NonUniform,
            Self::Affine { .. } => Generality::Affine,
        }
    }

    /// Coefficients as `[m00, m01, m10, m11, tx, ty]`.
    #[must_use]
    pub fn matrix(&self) -> [f64; 6] {
        match *self {
            Self::Identity => [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            Self::UniformScale { scale } => [scale, 0.0, 0.0, scale, 0.0, 0.0],
            Self::Rigid { rotation, tx, ty } => {
                let (sin, cos) = rotation.sin_cos();
                [cos, sin, -sin, cos, tx, ty]
            }
            Self::NonUniform {
                scale_x,
                scale_y,
                rotation,
                tx,
                ty,
            } => {
                let (sin, cos) = rotation.sin_cos();
                [scale_x * cos, scale_x * sin, -scale_y * sin, scale_y * cos, tx, ty]
            }
            Self::Affine {
                m00,
                m01,
                m10,
                m11,
                tx,
                ty,
            } => [m00, m01, m10, m11, tx, ty],
        }
    }

    /// Homogeneous 3x3 form of [`Transform::matrix`].
    #[must_use]
    pub fn to_matrix3(&self) -> Matrix3 {
        let [m00, m01, m10, m11, tx, ty] = self.matrix();
        Matrix3::new(m00, m10, tx, m01, m11, ty, 0.0, 0.0, 1.0)
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        let [m00, m01, m10, m11, ..] = self.matrix();
        m00 * m11 - m01 * m10
    }

    /// Signed geometric mean of the two scale factors.
    #[must_use]
    pub fn uniform_scale(&self) -> f64 {
        match *self {
            Self::Identity | Self::Rigid { .. } => 1.0,
            Self::UniformScale { scale } => scale,
            _ => {
                let det = self.determinant();
                det.abs().sqrt().copysign(det)
            }
        }
    }

    #[must_use]
    pub fn scale_x(&self) -> f64 {
        match *self {
            Self::NonUniform { scale_x, .. } => scale_x,
            _ => {
                let [m00, m01, ..] = self.matrix();
                m00.hypot(m01)
            }
        }
    }

    #[must_use]
    pub fn scale_y(&self) -> f64 {
        match *self {
            Self::NonUniform { scale_y, .. } => scale_y,
            _ => {
                let [_, _, m10, m11, ..] = self.matrix();
                m10.hypot(m11)
            }
        }
    }

    /// `(scale_x, scale_y)` as a vector.
    #[must_use]
    pub fn scale_vector(&self) -> Vector2 {
        Vector2::new(self.scale_x(), self.scale_y())
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        match *self {
            Self::Identity | Self::UniformScale { .. } => 0.0,
            Self::Rigid { rotation, .. } | Self::NonUniform { rotation, .. } => rotation,
            Self::Affine { m00, m01, .. } => m01.atan2(m00),
        }
    }

    #[must_use]
    pub fn tx(&self) -> f64 {
        self.matrix()[4]
    }

    #[must_use]
    pub fn ty(&self) -> f64 {
        self.matrix()[5]
    }

    #[must_use]
    pub fn translation(&self) -> Vector2 {
        Vector2::new(self.tx(), self.ty())
    }

    /// Transform applying `other` first and then `self`.
    #[must_use]
    pub fn concatenate(&self, other: &Transform) -> Transform {
        match (self, other) {
            (Self::Identity, _) => return *other,
            (_, Self::Identity) => return *self,
            _ => {}
        }
        let floor = self.generality().max(other.generality());
        let product = self.to_matrix3() * other.to_matrix3();
        fit_at_least(&from_matrix3(&product), floor)
    }

    /// Transform applying `self` first and then `other`.
    #[must_use]
    pub fn pre_concatenate(&self, other: &Transform) -> Transform {
        other.concatenate(self)
    }

    /// The inverse transform.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Noninvertible`] if the determinant is
    /// smaller in magnitude than [`EPSILON`].
    pub fn invert(&self) -> Result<Transform> {
        let determinant = self.determinant();
        if determinant.abs() < EPSILON {
            return Err(TransformError::Noninvertible { determinant }.into());
        }
        match *self {
            Self::Identity => Ok(Self::Identity),
            Self::UniformScale { scale } => Ok(Self::uniform(1.0 / scale)),
            Self::Rigid { rotation, tx, ty } => {
                let (sin, cos) = (-rotation).sin_cos();
                Ok(Self::rigid(
                    -rotation,
                    -(cos * tx - sin * ty),
                    -(sin * tx + cos * ty),
                ))
            }
            _ => {
                let inverse = self
                    .to_matrix3()
                    .try_inverse()
                    .ok_or(TransformError::Noninvertible { determinant })?;
                Ok(fit_at_least(&from_matrix3(&inverse), self.generality()))
            }
        }
    }

    /// Interpolates from `self` at `t = 0` to `other` at `t = 1`.
    ///
    /// Affine transforms interpolate their coefficients; the others
    /// interpolate scale, rotation (the short way around) and translation.
    #[must_use]
    pub fn lerp(&self, other: &Transform, t: f64) -> Transform {
        let floor = self.generality().max(other.generality());
        if floor == Generality::Affine {
            let a = self.matrix();
            let b = other.matrix();
            let mut m = [0.0; 6];
            for (out, (a, b)) in m.iter_mut().zip(a.iter().zip(b.iter())) {
                *out = lerp(*a, *b, t);
            }
            return Self::from_array(m);
        }

        let a = self.components();
        let b = other.components();
        let blended = Self::non_uniform(
            lerp(a[0], b[0], t),
            lerp(a[1], b[1], t),
            lerpa(a[2], b[2], t),
            lerp(a[3], b[3], t),
            lerp(a[4], b[4], t),
        );
        fit_at_least(&blended.matrix(), floor)
    }

    /// `[scale_x, scale_y, rotation, tx, ty]` of a non-affine transform.
    fn components(&self) -> [f64; 5] {
        match *self {
            Self::Identity => [1.0, 1.0, 0.0, 0.0, 0.0],
            Self::UniformScale { scale } => [scale, scale, 0.0, 0.0, 0.0],
            Self::Rigid { rotation, tx, ty } => [1.0, 1.0, rotation, tx, ty],
            Self::NonUniform {
                scale_x,
                scale_y,
                rotation,
                tx,
                ty,
            } => [scale_x, scale_y, rotation, tx, ty],
            Self::Affine { .. } => [
                self.scale_x(),
                self.scale_y(),
                self.rotation(),
                self.tx(),
                self.ty(),
            ],
        }
    }

    #[must_use]
    pub fn transform_point(&self, p: &Point2) -> Point2 {
        if let Self::Identity = self {
            return *p;
        }
        let [m00, m01, m10, m11, tx, ty] = self.matrix();
        Point2::new(m00 * p.x + m10 * p.y + tx, m01 * p.x + m11 * p.y + ty)
    }

    /// Maps `p` through the inverse transform.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Noninvertible`] if the transform has no inverse.
    pub fn inverse_transform_point(&self, p: &Point2) -> Result<Point2> {
        Ok(self.invert()?.transform_point(p))
    }

    /// Maps a direction, ignoring translation.
    #[must_use]
    pub fn transform_vector(&self, v: &Vector2) -> Vector2 {
        let [m00, m01, m10, m11, ..] = self.matrix();
        Vector2::new(m00 * v.x + m10 * v.y, m01 * v.x + m11 * v.y)
    }

    /// Maps a direction through the inverse transform, ignoring translation.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Noninvertible`] if the transform has no inverse.
    pub fn inverse_transform_vector(&self, v: &Vector2) -> Result<Vector2> {
        Ok(self.invert()?.transform_vector(v))
    }
}

fn from_matrix3(m: &Matrix3) -> [f64; 6] {
    [m[(0, 0)], m[(1, 0)], m[(0, 1)], m[(1, 1)], m[(0, 2)], m[(1, 2)]]
}

/// Least general transform at or above `floor` reproducing `m`.
fn fit_at_least(m: &[f64; 6], floor: Generality) -> Transform {
    let fitted = Generality::ALL
        .iter()
        .filter(|g| **g >= floor)
        .find_map(|g| fit(m, *g))
        .unwrap_or(Transform::from_array(*m));
    if fitted.generality() > floor {
        debug!(
            from = %floor,
            to = %fitted.generality(),
            "transform generality upgraded"
        );
    }
    fitted
}

fn fit(m: &[f64; 6], level: Generality) -> Option<Transform> {
    let [m00, m01, m10, m11, tx, ty] = *m;
    let candidate = match level {
        Generality::Identity => Transform::Identity,
        Generality::UniformScale => Transform::uniform(m00),
        Generality::Rigid => Transform::rigid(m01.atan2(m00), tx, ty),
        Generality::NonUniform => {
            let det = m00 * m11 - m01 * m10;
            Transform::non_uniform(m00.hypot(m01), m10.hypot(m11).copysign(det), m01.atan2(m00), tx, ty)
        }
        Generality::Affine => return Some(Transform::from_array(*m)),
    };
    let fits = candidate
        .matrix()
        .iter()
        .zip(m.iter())
        .all(|(a, b)| (a - b).abs() <= FIT_TOLERANCE * (1.0 + b.abs()));
    fits.then_some(candidate)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::EuklidError;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn ladder_is_totally_ordered() {
        assert!(Generality::Identity < Generality::UniformScale);
        assert!(Generality::UniformScale < Generality::Rigid);
        assert!(Generality::Rigid < Generality::NonUniform);
        assert!(Generality::NonUniform < Generality::Affine);
        assert_eq!(Generality::NonUniform.to_string(), "non-uniform");
    }

    #[test]
    fn identity_is_neutral() {
        let r = Transform::rigid(0.3, 1.0, 2.0);
        assert_eq!(Transform::identity().concatenate(&r), r);
        assert_eq!(r.concatenate(&Transform::identity()), r);
        let p = Point2::new(3.0, -4.0);
        assert_eq!(Transform::identity().transform_point(&p), p);
    }

    #[test]
    fn rigid_composition_stays_rigid() {
        let a = Transform::rigid(FRAC_PI_4, 1.0, 0.0);
        let b = Transform::rigid(FRAC_PI_4, 0.0, 2.0);
        let c = a.concatenate(&b);
        assert_eq!(c.generality(), Generality::Rigid);
        assert_relative_eq!(c.rotation(), FRAC_PI_2, epsilon = 1e-12);
        let p = Point2::new(1.0, 1.0);
        assert_relative_eq!(
            c.transform_point(&p),
            a.transform_point(&b.transform_point(&p)),
            epsilon = 1e-12
        );
    }

    #[test]
    fn scale_after_rotation_upgrades() {
        let c = Transform::uniform(2.0).concatenate(&Transform::rigid(FRAC_PI_2, 1.0, 0.0));
        assert_eq!(c.generality(), Generality::NonUniform);
        assert_relative_eq!(c.transform_point(&Point2::new(1.0, 0.0)), Point2::new(2.0, 2.0), epsilon = 1e-12);

        let sheared = Transform::non_uniform(2.0, 1.0, 0.0, 0.0, 0.0)
            .concatenate(&Transform::rigid(FRAC_PI_4, 0.0, 0.0));
        assert_eq!(sheared.generality(), Generality::Affine);
    }

    #[test]
    fn pre_concatenate_reverses_order() {
        let s = Transform::uniform(3.0);
        let t = Transform::rigid(0.0, 1.0, 0.0);
        let p = Point2::new(1.0, 1.0);
        // Scale first, then translate.
        assert_relative_eq!(s.pre_concatenate(&t).transform_point(&p), Point2::new(4.0, 3.0));
        assert_relative_eq!(s.concatenate(&t).transform_point(&p), Point2::new(6.0, 3.0));
    }

    #[test]
    fn inversion_round_trips() {
        let p = Point2::new(2.5, -1.0);
        for t in [
            Transform::uniform(4.0),
            Transform::rigid(1.2, -3.0, 5.0),
            Transform::non_uniform(2.0, -0.5, 0.4, 1.0, 1.0),
            Transform::affine(1.0, 0.5, 0.25, 2.0, 3.0, -2.0),
        ] {
            let inverse = t.invert().unwrap();
            assert!(inverse.generality() >= t.generality());
            assert_relative_eq!(inverse.transform_point(&t.transform_point(&p)), p, epsilon = 1e-9);
            assert_relative_eq!(t.inverse_transform_point(&t.transform_point(&p)).unwrap(), p, epsilon = 1e-9);
        }
        assert_eq!(Transform::uniform(4.0).invert().unwrap(), Transform::uniform(0.25));
    }

    #[test]
    fn singular_transform_is_noninvertible() {
        let err = Transform::uniform(0.0).invert().unwrap_err();
        assert!(matches!(
            err,
            EuklidError::Transform(TransformError::Noninvertible { .. })
        ));
        assert!(Transform::affine(1.0, 2.0, 2.0, 4.0, 0.0, 0.0)
            .inverse_transform_vector(&Vector2::x())
            .is_err());
    }

    #[test]
    fn vectors_ignore_translation() {
        let t = Transform::rigid(FRAC_PI_2, 10.0, 10.0);
        assert_relative_eq!(t.transform_vector(&Vector2::x()), Vector2::y(), epsilon = 1e-12);
        assert_relative_eq!(
            t.inverse_transform_vector(&Vector2::y()).unwrap(),
            Vector2::x(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn lerp_stays_on_the_ladder() {
        let mid = Transform::uniform(2.0).lerp(&Transform::uniform(4.0), 0.5);
        assert_eq!(mid.generality(), Generality::UniformScale);
        assert_relative_eq!(mid.uniform_scale(), 3.0, epsilon = 1e-12);

        let mid = Transform::rigid(0.0, 0.0, 0.0).lerp(&Transform::rigid(1.0, 10.0, 0.0), 0.5);
        assert_eq!(mid.generality(), Generality::Rigid);
        assert_relative_eq!(mid.rotation(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(mid.translation(), Vector2::new(5.0, 0.0), epsilon = 1e-12);

        let a = Transform::affine(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let b = Transform::affine(3.0, 2.0, 0.0, 1.0, 4.0, 0.0);
        assert_eq!(a.lerp(&b, 0.5), Transform::affine(2.0, 1.0, 0.0, 1.0, 2.0, 0.0));
    }

    #[test]
    fn getters_read_through_every_variant() {
        let t = Transform::non_uniform(2.0, 3.0, 0.5, 1.0, -1.0);
        assert_relative_eq!(t.scale_vector(), Vector2::new(2.0, 3.0));
        assert_relative_eq!(t.uniform_scale(), 6.0_f64.sqrt(), epsilon = 1e-12);
        let a = Transform::from_array(t.matrix());
        assert_relative_eq!(a.scale_x(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(a.scale_y(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(a.rotation(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(a.translation(), Vector2::new(1.0, -1.0));
    }
}
