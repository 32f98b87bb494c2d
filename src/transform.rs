//! Keplerian-to-Cartesian frame transformation.
//!
//! The orbit is first placed in its own plane (the perifocal frame), then
//! tilted into the inertial frame by three active rotations, applied in
//! this order:
//!
//! 1. about z by the argument of periapsis `ω`,
//! 2. about x by the inclination `i`,
//! 3. about z by the longitude of the ascending node `Ω`.
//!
//! That is, `R = Rz(Ω) · Rx(i) · Rz(ω)`, a 3-1-3 Euler sequence.
//! Any other order gives a different (wrong) orbit.

use glam::{DMat3, DVec2, DVec3};

use crate::Matrix3x2;

/// Builds the active rotation matrix about the x axis.
///
/// ```text
/// | 1    0       0    |
/// | 0  cos θ  -sin θ  |
/// | 0  sin θ   cos θ  |
/// ```
pub fn rotation_x(angle: f64) -> DMat3 {
    let (sin, cos) = angle.sin_cos();

    // glam matrices are column-major
    DMat3::from_cols(
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, cos, sin),
        DVec3::new(0.0, -sin, cos),
    )
}

/// Builds the active rotation matrix about the z axis.
///
/// ```text
/// | cos θ  -sin θ  0 |
/// | sin θ   cos θ  0 |
/// |   0       0    1 |
/// ```
pub fn rotation_z(angle: f64) -> DMat3 {
    let (sin, cos) = angle.sin_cos();

    DMat3::from_cols(
        DVec3::new(cos, sin, 0.0),
        DVec3::new(-sin, cos, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
    )
}

/// Composes the perifocal-to-inertial rotation `Rz(Ω) · Rx(i) · Rz(ω)`.
///
/// All angles are in radians.
///
/// # Example
/// ```
/// use frozen_orbits::transform::perifocal_to_inertial;
/// use glam::DVec3;
///
/// // With every angle at zero the perifocal and inertial frames coincide
/// let matrix = perifocal_to_inertial(0.0, 0.0, 0.0);
/// assert_eq!(matrix * DVec3::X, DVec3::X);
/// ```
pub fn perifocal_to_inertial(inclination: f64, arg_pe: f64, long_asc_node: f64) -> DMat3 {
    let periapsis_alignment = rotation_z(arg_pe);
    let tilt = rotation_x(inclination);
    let node_orientation = rotation_z(long_asc_node);

    node_orientation * tilt * periapsis_alignment
}

/// Gets the scalar radius `r = a(1 - e cos E)`.
#[inline]
pub fn radius_at_eccentric_anomaly(
    semi_major_axis: f64,
    eccentricity: f64,
    eccentric_anomaly: f64,
) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.cos())
}

/// Gets the in-plane position `(r cos E, r sin E)`.
///
/// The out-of-plane component is zero by construction and is left off.
pub fn perifocal_position(semi_major_axis: f64, eccentricity: f64, eccentric_anomaly: f64) -> DVec2 {
    let radius = radius_at_eccentric_anomaly(semi_major_axis, eccentricity, eccentric_anomaly);
    let (sin, cos) = eccentric_anomaly.sin_cos();

    DVec2::new(radius * cos, radius * sin)
}

/// Transforms `(a, e, E, i, Ω, ω)` into an inertial position.
///
/// Angles are in radians; the result is in the unit of `semi_major_axis`.
///
/// This builds the full rotation on every call. To transform many points
/// of the same orbit, build the matrix once with [`perifocal_to_inertial`]
/// (or use [`Orbit`][crate::Orbit], which caches it).
pub fn keplerian_to_cartesian(
    semi_major_axis: f64,
    eccentricity: f64,
    eccentric_anomaly: f64,
    inclination: f64,
    long_asc_node: f64,
    arg_pe: f64,
) -> DVec3 {
    let pqw = perifocal_position(semi_major_axis, eccentricity, eccentric_anomaly);
    let rotation = perifocal_to_inertial(inclination, arg_pe, long_asc_node);

    rotation * pqw.extend(0.0)
}

impl Matrix3x2 {
    /// Keeps the first two columns of a 3x3 rotation.
    ///
    /// The third column only ever multiplies the perifocal z component,
    /// which is always zero.
    pub fn from_rotation(rotation: DMat3) -> Self {
        Self {
            e11: rotation.x_axis.x,
            e12: rotation.y_axis.x,
            e21: rotation.x_axis.y,
            e22: rotation.y_axis.y,
            e31: rotation.x_axis.z,
            e32: rotation.y_axis.z,
        }
    }
}
