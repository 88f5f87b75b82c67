pub mod lines;
pub mod roots;
pub mod util;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Homogeneous 2D transform matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Unit quaternion used for 3D rotations.
///
/// Rotation code assumes unit magnitude; renormalize after accumulating error.
pub type Quaternion = nalgebra::UnitQuaternion<f64>;

/// General tolerance for "close enough" float comparisons.
pub const EPSILON: f64 = 1e-5;
