#![warn(missing_docs)]

//! Math types for the opencyl kernel.
//!
//! Thin aliases over nalgebra for the points, vectors and unit directions
//! the cylinder and ray code is written against, plus the axis-aligned
//! bounding box used as an output target by shape queries.

use nalgebra::{Unit, Vector3};

pub mod bbox;

pub use bbox::Aabb3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Component of `v` perpendicular to the unit vector `axis`.
///
/// `v - (v · axis) * axis`. Only meaningful when `axis` has unit length.
#[inline]
pub fn reject_from(v: &Vec3, axis: &Dir3) -> Vec3 {
    let axis = axis.as_ref();
    v - v.dot(axis) * axis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_removes_axial_component() {
        let axis = Dir3::new_normalize(Vec3::z());
        let v = Vec3::new(3.0, -4.0, 12.0);
        let perp = reject_from(&v, &axis);
        assert!((perp.x - 3.0).abs() < 1e-12);
        assert!((perp.y + 4.0).abs() < 1e-12);
        assert!(perp.z.abs() < 1e-12);
    }

    #[test]
    fn test_reject_oblique_axis() {
        let axis = Dir3::new_normalize(Vec3::new(1.0, 1.0, 0.0));
        let v = Vec3::new(2.0, 0.0, 5.0);
        let perp = reject_from(&v, &axis);
        assert!(perp.dot(axis.as_ref()).abs() < 1e-12);
        // |v|^2 = |perp|^2 + (v . axis)^2
        let along = v.dot(axis.as_ref());
        assert!((v.norm_squared() - perp.norm_squared() - along * along).abs() < 1e-12);
    }

    #[test]
    fn test_reject_parallel_is_zero() {
        let axis = Dir3::new_normalize(Vec3::x());
        let perp = reject_from(&Vec3::new(-7.5, 0.0, 0.0), &axis);
        assert!(perp.norm() < 1e-12);
    }
}
