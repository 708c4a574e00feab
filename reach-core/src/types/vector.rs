//! 3D vector alias.

/// A 3D position or direction in meters, x/y horizontal, z vertical.
pub type Vec3 = nalgebra::Vector3<f64>;
