//! Ray-cylinder intersection (quadratic equation).
//!
//! The cylinder is open: only the lateral surface is tested, and the axial
//! range `(inf, sup)` filters roots instead of adding end caps.

use opencyl_kernel_geom::Cylinder;
use opencyl_kernel_math::{reject_from, Point3};
use tracing::trace;

use crate::Ray;

/// Below this value of `|d_perp|^2` the ray is treated as parallel to the
/// cylinder axis and cannot hit the lateral surface.
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// The nearest valid intersection of a ray with a cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderHit {
    /// Parameter along the ray. Always strictly positive.
    pub t: f64,
    /// 3D intersection point.
    pub point: Point3,
    /// Offset of `point` along the cylinder axis, strictly inside `(inf, sup)`.
    pub axial: f64,
}

/// Intersect a ray with an open, possibly truncated cylinder.
///
/// Returns the first point along the ray (`t > 0`) that lies on the lateral
/// surface with an axial offset strictly inside `(cylinder.inf, cylinder.sup)`.
/// Rays parallel to the axis never hit.
pub fn intersect_cylinder(ray: &Ray, cylinder: &Cylinder) -> Option<Point3> {
    intersect_cylinder_hit(ray, cylinder).map(|hit| hit.point)
}

/// Like [`intersect_cylinder`] but writes the hit point into `target`.
///
/// On a miss `target` is left unchanged and `None` is returned.
pub fn intersect_cylinder_into<'a>(
    ray: &Ray,
    cylinder: &Cylinder,
    target: &'a mut Point3,
) -> Option<&'a mut Point3> {
    let hit = intersect_cylinder_hit(ray, cylinder)?;
    *target = hit.point;
    Some(target)
}

/// Intersect a ray with a cylinder, returning the ray parameter and axial
/// offset along with the point.
pub fn intersect_cylinder_hit(ray: &Ray, cylinder: &Cylinder) -> Option<CylinderHit> {
    let vtos = ray.origin - cylinder.origin;

    // Work in the plane perpendicular to the axis, where the cylinder is a circle:
    // |p_perp + t * d_perp|^2 = r^2
    let d_perp = reject_from(ray.direction.as_ref(), &cylinder.axis);
    let p_perp = reject_from(&vtos, &cylinder.axis);

    let a = d_perp.dot(&d_perp);
    let b = 2.0 * d_perp.dot(&p_perp);
    let c = p_perp.dot(&p_perp) - cylinder.radius * cylinder.radius;

    if a < PARALLEL_EPSILON {
        trace!(a, "ray is parallel to the cylinder axis");
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant.is_nan() {
        trace!(a, b, c, "non-finite ray-cylinder coefficients");
        return None;
    }
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);

    if discriminant == 0.0 {
        // Tangent ray: a single root
        return accept_root(ray, cylinder, t1);
    }

    let t2 = (-b + sqrt_disc) / (2.0 * a);

    // t1 <= t2, so the far root only wins when the near one is rejected
    let near = accept_root(ray, cylinder, t1);
    let best_t = near.map_or(f64::MAX, |hit| hit.t);
    match accept_root(ray, cylinder, t2) {
        Some(far) if far.t < best_t => Some(far),
        _ => near,
    }
}

/// Keep a root only if it lies ahead of the ray origin and inside the
/// truncation range.
fn accept_root(ray: &Ray, cylinder: &Cylinder, t: f64) -> Option<CylinderHit> {
    let point = ray.at(t);
    let axial = cylinder.axial_offset(&point);
    (t > 0.0 && cylinder.contains_offset(axial)).then_some(CylinderHit { t, point, axial })
}
