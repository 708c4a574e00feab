//! Vector geometry helpers with degeneracy guards.

use reach_core::constants::VECTOR_EPSILON;
use reach_core::Vec3;

/// Normalize a vector.
///
/// A near-zero vector is returned unchanged instead of dividing by zero.
pub fn normalize(v: Vec3) -> Vec3 {
    let length = v.norm();
    if length < VECTOR_EPSILON {
        return v;
    }
    v / length
}

/// Planar angle between two vectors, ignoring the vertical axis.
///
/// Always in [0, π]; a (numerically) zero-length projection yields π, the
/// maximal deviation, so degenerate tangents never look like a match.
pub fn planar_angle(a: Vec3, b: Vec3) -> f64 {
    let ax = a.x;
    let ay = a.y;
    let bx = b.x;
    let by = b.y;

    let norm_a = (ax * ax + ay * ay).sqrt();
    let norm_b = (bx * bx + by * by).sqrt();
    if norm_a < VECTOR_EPSILON || norm_b < VECTOR_EPSILON {
        return std::f64::consts::PI;
    }

    let cos = ((ax * bx + ay * by) / (norm_a * norm_b)).clamp(-1.0, 1.0);
    cos.acos()
}

/// Euclidean distance between two points.
pub fn distance(a: Vec3, b: Vec3) -> f64 {
    (a - b).norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    #[test]
    fn normalize_yields_unit_length() {
        let v = normalize(Vec3::new(3.0, 4.0, 0.0));
        assert!((v.norm() - 1.0).abs() < TOL);
        assert!((v - Vec3::new(0.6, 0.8, 0.0)).norm() < TOL);
    }

    #[test]
    fn normalize_passes_near_zero_vectors_through() {
        let v = Vec3::new(1e-6, 0.0, 0.0);
        assert_eq!(normalize(v), v);
        assert_eq!(normalize(Vec3::zeros()), Vec3::zeros());
    }

    #[test]
    fn angle_of_parallel_vectors_is_zero() {
        let v = Vec3::new(1.0, 2.0, 0.0);
        assert!(planar_angle(v, v) < TOL);
        // The vertical axis does not contribute.
        assert!(planar_angle(Vec3::new(1.0, 0.0, 1.0), Vec3::new(1.0, 0.0, -5.0)) < TOL);
    }

    #[test]
    fn angle_of_opposite_vectors_is_pi() {
        let v = Vec3::new(1.0, 1.0, 0.0);
        assert!((planar_angle(v, -v) - PI).abs() < TOL);
    }

    #[test]
    fn angle_of_orthogonal_vectors_is_half_pi() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        assert!((planar_angle(a, b) - PI / 2.0).abs() < TOL);
    }

    #[test]
    fn vertical_only_vector_is_degenerate() {
        // Projection onto the plane is zero-length.
        let up = Vec3::new(0.0, 0.0, 1.0);
        let x = Vec3::new(1.0, 0.0, 0.0);
        assert!((planar_angle(up, x) - PI).abs() < TOL);
    }
}
