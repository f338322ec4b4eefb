//! Ray-shape intersection algorithms.

mod cylinder;

pub use cylinder::{
    intersect_cylinder, intersect_cylinder_hit, intersect_cylinder_into, CylinderHit,
    PARALLEL_EPSILON,
};
