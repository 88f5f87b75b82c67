use crate::error::{EuklidError, Result, TransformError};

use super::{Generality, Transform};

fn unsupported(operation: &'static str, generality: Generality) -> EuklidError {
    TransformError::Unsupported {
        operation,
        generality,
    }
    .into()
}

impl Transform {
    /// Sets both scale factors to `scale`.
    ///
    /// # Errors
    ///
    /// Unsupported by identity and rigid transforms.
    pub fn set_uniform_scale(&mut self, scale: f64) -> Result<&mut Self> {
        if let Self::Affine { .. } = self {
            return self.set_scale(scale, scale);
        }
        let generality = self.generality();
        match self {
            Self::UniformScale { scale: s } => *s = scale,
            Self::NonUniform {
                scale_x, scale_y, ..
            } => {
                *scale_x = scale;
                *scale_y = scale;
            }
            _ => return Err(unsupported("set_uniform_scale", generality)),
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Supported by non-uniform and affine transforms only.
    pub fn set_scale(&mut self, scale_x: f64, scale_y: f64) -> Result<&mut Self> {
        self.check("set_scale", Generality::NonUniform)?;
        self.set_scale_x(scale_x)?;
        self.set_scale_y(scale_y)
    }

    /// # Errors
    ///
    /// Supported by non-uniform and affine transforms only.
    pub fn set_scale_x(&mut self, value: f64) -> Result<&mut Self> {
        let generality = self.generality();
        match self {
            Self::NonUniform { scale_x, .. } => *scale_x = value,
            Self::Affine { m00, m01, .. } => rescale(m00, m01, value),
            _ => return Err(unsupported("set_scale_x", generality)),
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Supported by non-uniform and affine transforms only.
    pub fn set_scale_y(&mut self, value: f64) -> Result<&mut Self> {
        let generality = self.generality();
        match self {
            Self::NonUniform { scale_y, .. } => *scale_y = value,
            Self::Affine { m10, m11, .. } => rescale(m11, m10, value),
            _ => return Err(unsupported("set_scale_y", generality)),
        }
        Ok(self)
    }

    /// Replaces the rotation, keeping the scale factors.
    ///
    /// An affine transform loses any shear.
    ///
    /// # Errors
    ///
    /// Unsupported by identity and uniform scale transforms.
    pub fn set_rotation(&mut self, angle: f64) -> Result<&mut Self> {
        let generality = self.generality();
        let (scale_x, scale_y) = (self.scale_x(), self.scale_y());
        match self {
            Self::Rigid { rotation, .. } | Self::NonUniform { rotation, .. } => *rotation = angle,
            Self::Affine {
                m00, m01, m10, m11, ..
            } => {
                let (sin, cos) = angle.sin_cos();
                *m00 = cos * scale_x;
                *m01 = sin * scale_x;
                *m10 = -sin * scale_y;
                *m11 = cos * scale_y;
            }
            _ => return Err(unsupported("set_rotation", generality)),
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Unsupported by identity and uniform scale transforms.
    pub fn set_translation(&mut self, tx: f64, ty: f64) -> Result<&mut Self> {
        self.set_tx(tx)?;
        self.set_ty(ty)
    }

    /// # Errors
    ///
    /// Unsupported by identity and uniform scale transforms.
    pub fn set_tx(&mut self, value: f64) -> Result<&mut Self> {
        let generality = self.generality();
        match self {
            Self::Rigid { tx, .. } | Self::NonUniform { tx, .. } | Self::Affine { tx, .. } => {
                *tx = value;
            }
            _ => return Err(unsupported("set_tx", generality)),
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Unsupported by identity and uniform scale transforms.
    pub fn set_ty(&mut self, value: f64) -> Result<&mut Self> {
        let generality = self.generality();
        match self {
            Self::Rigid { ty, .. } | Self::NonUniform { ty, .. } | Self::Affine { ty, .. } => {
                *ty = value;
            }
            _ => return Err(unsupported("set_ty", generality)),
        }
        Ok(self)
    }

    /// Replaces every coefficient.
    ///
    /// # Errors
    ///
    /// Supported by affine transforms only.
    pub fn set_transform(
        &mut self,
        m00: f64,
        m01: f64,
        m10: f64,
        m11: f64,
        tx: f64,
        ty: f64,
    ) -> Result<&mut Self> {
        self.check("set_transform", Generality::Affine)?;
        *self = Self::affine(m00, m01, m10, m11, tx, ty);
        Ok(self)
    }

    /// Multiplies both scale factors by `scale`.
    ///
    /// # Errors
    ///
    /// Unsupported by identity and rigid transforms.
    pub fn uniform_scale_by(&mut self, scale: f64) -> Result<&mut Self> {
        if let Self::Affine { .. } = self {
            return self.scale(scale, scale);
        }
        let generality = self.generality();
        match self {
            Self::UniformScale { scale: s } => *s *= scale,
            Self::NonUniform {
                scale_x, scale_y, ..
            } => {
                *scale_x *= scale;
                *scale_y *= scale;
            }
            _ => return Err(unsupported("uniform_scale_by", generality)),
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Supported by non-uniform and affine transforms only.
    pub fn scale(&mut self, scale_x: f64, scale_y: f64) -> Result<&mut Self> {
        self.check("scale", Generality::NonUniform)?;
        self.scale_x_by(scale_x)?;
        self.scale_y_by(scale_y)
    }

    /// # Errors
    ///
    /// Supported by non-uniform and affine transforms only.
    pub fn scale_x_by(&mut self, factor: f64) -> Result<&mut Self> {
        let generality = self.generality();
        match self {
            Self::NonUniform { scale_x, .. } => *scale_x *= factor,
            Self::Affine { m00, m01, .. } => {
                *m00 *= factor;
                *m01 *= factor;
            }
            _ => return Err(unsupported("scale_x_by", generality)),
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Supported by non-uniform and affine transforms only.
    pub fn scale_y_by(&mut self, factor: f64) -> Result<&mut Self> {
        let generality = self.generality();
        match self {
            Self::NonUniform { scale_y, .. } => *scale_y *= factor,
            Self::Affine { m10, m11, .. } => {
                *m10 *= factor;
                *m11 *= factor;
            }
            _ => return Err(unsupported("scale_y_by", generality)),
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Unsupported by identity and uniform scale transforms.
    pub fn rotate(&mut self, angle: f64) -> Result<&mut Self> {
        let generality = self.generality();
        match self {
            Self::Rigid { rotation, .. } | Self::NonUniform { rotation, .. } => *rotation += angle,
            Self::Affine {
                m00, m01, m10, m11, ..
            } => {
                let (sin, cos) = angle.sin_cos();
                let (a00, a01, a10, a11) = (*m00, *m01, *m10, *m11);
                *m00 = cos * a00 + sin * a10;
                *m01 = cos * a01 + sin * a11;
                *m10 = -sin * a00 + cos * a10;
                *m11 = -sin * a01 + cos * a11;
            }
            _ => return Err(unsupported("rotate", generality)),
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Unsupported by identity and uniform scale transforms.
    pub fn translate(&mut self, dx: f64, dy: f64) -> Result<&mut Self> {
        let generality = self.generality();
        match self {
            Self::Rigid { tx, ty, .. } | Self::NonUniform { tx, ty, .. } => {
                *tx += dx;
                *ty += dy;
            }
            Self::Affine {
                m00,
                m01,
                m10,
                m11,
                tx,
                ty,
            } => {
                *tx += *m00 * dx + *m10 * dy;
                *ty += *m01 * dx + *m11 * dy;
            }
            _ => return Err(unsupported("translate", generality)),
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Unsupported by identity and uniform scale transforms.
    pub fn translate_x(&mut self, dx: f64) -> Result<&mut Self> {
        self.translate(dx, 0.0)
    }

    /// # Errors
    ///
    /// Unsupported by identity and uniform scale transforms.
    pub fn translate_y(&mut self, dy: f64) -> Result<&mut Self> {
        self.translate(0.0, dy)
    }

    /// Shears along x by `sx`, then along y by `sy`.
    ///
    /// # Errors
    ///
    /// Supported by affine transforms only.
    pub fn shear(&mut self, sx: f64, sy: f64) -> Result<&mut Self> {
        self.shear_x(sx)?;
        self.shear_y(sy)
    }

    /// # Errors
    ///
    /// Supported by affine transforms only.
    pub fn shear_x(&mut self, sx: f64) -> Result<&mut Self> {
        let generality = self.generality();
        match self {
            Self::Affine {
                m00, m01, m10, m11, ..
            } => {
                *m10 += sx * *m00;
                *m11 += sx * *m01;
            }
            _ => return Err(unsupported("shear_x", generality)),
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Supported by affine transforms only.
    pub fn shear_y(&mut self, sy: f64) -> Result<&mut Self> {
        let generality = self.generality();
        match self {
            Self::Affine {
                m00, m01, m10, m11, ..
            } => {
                *m00 += sy * *m10;
                *m01 += sy * *m11;
            }
            _ => return Err(unsupported("shear_y", generality)),
        }
        Ok(self)
    }

    fn check(&self, operation: &'static str, required: Generality) -> Result<()> {
        let generality = self.generality();
        if generality < required {
            return Err(unsupported(operation, generality));
        }
        Ok(())
    }
}

/// Rescales the column `(a, b)` to length `value`.
fn rescale(a: &mut f64, b: &mut f64, value: f64) {
    let current = a.hypot(*b);
    if current == 0.0 {
        *a = value;
        *b = 0.0;
    } else {
        let mult = value / current;
        *a *= mult;
        *b *= mult;
    }
}
