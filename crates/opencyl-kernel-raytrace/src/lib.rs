#![warn(missing_docs)]

//! Ray queries against opencyl shapes.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and unit direction
//! - [`intersect`] - Ray-shape intersection algorithms
//!
//! # Example
//!
//! ```
//! use opencyl_kernel_geom::Cylinder;
//! use opencyl_kernel_math::{Dir3, Point3, Vec3};
//! use opencyl_kernel_raytrace::{intersect_cylinder, Ray};
//!
//! let cyl = Cylinder::infinite(Point3::origin(), Dir3::new_normalize(Vec3::z()), 1.0);
//! let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
//!
//! let hit = intersect_cylinder(&ray, &cyl).unwrap();
//! assert!((hit.x + 1.0).abs() < 1e-12);
//! ```

mod ray;
pub mod intersect;

pub use intersect::{
    intersect_cylinder, intersect_cylinder_hit, intersect_cylinder_into, CylinderHit,
};
pub use ray::Ray;
