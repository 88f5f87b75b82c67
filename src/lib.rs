//! Planar shapes, paths and transforms.
//!
//! Shapes expose their outline as a stream of path segments. Containment and
//! rectangle queries are answered by counting boundary crossings along a ray,
//! and curved outlines can be flattened into polylines.

pub mod crossing;
pub mod error;
pub mod geometry;
pub mod math;
pub mod path;
pub mod tessellation;
pub mod transform;

pub use error::{EuklidError, Result};
