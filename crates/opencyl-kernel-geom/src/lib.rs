#![warn(missing_docs)]

//! Shape types for the opencyl kernel.
//!
//! Provides [`Cylinder`], an open (uncapped) right circular cylinder that
//! may be truncated along its axis. The cylinder is a plain value: callers
//! read and write its fields directly and the ray code in
//! `opencyl-kernel-raytrace` only ever reads them.

mod error;
#[cfg(feature = "serde")]
mod serde_bound;

pub use error::{GeomError, Result};

use opencyl_kernel_math::{reject_from, Aabb3, Dir3, Point3, Vec3};

// =============================================================================
// Cylinder
// =============================================================================

/// An open right circular cylinder, optionally truncated along its axis.
///
/// A point `P` belongs to the surface when its distance to the axis line
/// equals `radius` and its axial offset `(P - origin) · axis` lies strictly
/// inside `(inf, sup)`. The ends are never closed: truncation only limits
/// the lateral surface.
///
/// `axis` must have unit length. The type never renormalizes it; a
/// non-unit axis silently scales both the radius test and the truncation
/// offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cylinder {
    /// Point on the axis; truncation offsets are measured from here.
    pub origin: Point3,
    /// Unit direction of the centerline.
    pub axis: Dir3,
    /// Radius. Zero or negative makes the cylinder empty.
    #[cfg_attr(feature = "serde", serde(with = "serde_bound"))]
    pub radius: f64,
    /// Lower axial bound (exclusive).
    #[cfg_attr(feature = "serde", serde(with = "serde_bound"))]
    pub inf: f64,
    /// Upper axial bound (exclusive).
    #[cfg_attr(feature = "serde", serde(with = "serde_bound"))]
    pub sup: f64,
}

impl Cylinder {
    /// Lower bound used when none is given.
    pub const DEFAULT_INF: f64 = 0.0;
    /// Upper bound used when none is given.
    pub const DEFAULT_SUP: f64 = f64::INFINITY;

    /// Create a cylinder, substituting defaults for absent arguments.
    ///
    /// Defaults: origin at the world origin, axis `+X`, `inf = 0`,
    /// `sup = +inf`. The default range is one-sided; pass
    /// `Some(f64::NEG_INFINITY)` for `inf` to extend the cylinder both ways.
    /// The radius is stored exactly as given.
    pub fn new(
        origin: Option<Point3>,
        axis: Option<Dir3>,
        radius: f64,
        inf: Option<f64>,
        sup: Option<f64>,
    ) -> Self {
        Self {
            origin: origin.unwrap_or_else(Point3::origin),
            axis: axis.unwrap_or_else(Vec3::x_axis),
            radius,
            inf: inf.unwrap_or(Self::DEFAULT_INF),
            sup: sup.unwrap_or(Self::DEFAULT_SUP),
        }
    }

    /// Cylinder at the origin along `+X` with the default `[0, +inf)` range.
    pub fn with_radius(radius: f64) -> Self {
        Self::new(None, None, radius, None, None)
    }

    /// Cylinder unbounded in both axial directions.
    pub fn infinite(origin: Point3, axis: Dir3, radius: f64) -> Self {
        Self::new(
            Some(origin),
            Some(axis),
            radius,
            Some(f64::NEG_INFINITY),
            Some(f64::INFINITY),
        )
    }

    /// Cylinder restricted to axial offsets in `(inf, sup)`.
    pub fn truncated(origin: Point3, axis: Dir3, radius: f64, inf: f64, sup: f64) -> Self {
        Self::new(Some(origin), Some(axis), radius, Some(inf), Some(sup))
    }

    /// Overwrite every field in place, with the same `inf`/`sup` defaults
    /// as [`Cylinder::new`].
    pub fn set(
        &mut self,
        origin: Point3,
        axis: Dir3,
        radius: f64,
        inf: Option<f64>,
        sup: Option<f64>,
    ) -> &mut Self {
        self.origin = origin;
        self.axis = axis;
        self.radius = radius;
        self.inf = inf.unwrap_or(Self::DEFAULT_INF);
        self.sup = sup.unwrap_or(Self::DEFAULT_SUP);
        self
    }

    /// Copy all fields from `other` into `self`.
    pub fn copy_from(&mut self, other: &Cylinder) -> &mut Self {
        *self = *other;
        self
    }

    /// True if the cylinder is degenerate: non-positive radius or an empty
    /// axial range.
    pub fn is_empty(&self) -> bool {
        self.radius <= 0.0 || self.inf >= self.sup
    }

    /// Exact field-wise equality. No tolerance is applied.
    pub fn equals(&self, other: &Cylinder) -> bool {
        self == other
    }

    /// Bounding box of the truncated cylinder.
    ///
    /// Not implemented: always returns [`GeomError::NotImplemented`] and
    /// leaves `target` untouched.
    pub fn compute_bounding_box<'a>(&self, _target: &'a mut Aabb3) -> Result<&'a mut Aabb3> {
        Err(GeomError::NotImplemented("Cylinder::compute_bounding_box"))
    }

    /// Signed offset of `p` along the axis, measured from `origin`.
    #[inline]
    pub fn axial_offset(&self, p: &Point3) -> f64 {
        (p - self.origin).dot(self.axis.as_ref())
    }

    /// True if an axial offset lies strictly inside `(inf, sup)`.
    #[inline]
    pub fn contains_offset(&self, offset: f64) -> bool {
        offset > self.inf && offset < self.sup
    }

    /// Distance from `p` to the axis line.
    pub fn distance_to_axis(&self, p: &Point3) -> f64 {
        reject_from(&(p - self.origin), &self.axis).norm()
    }
}

impl Default for Cylinder {
    /// A zero-radius (and therefore empty) cylinder with default placement.
    fn default() -> Self {
        Self::with_radius(0.0)
    }
}
