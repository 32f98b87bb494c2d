//! Two-body orbital period.

use core::f64::consts::TAU;

use crate::{InvalidBodyError, InvalidElementError, OrbitResult};

/// The number of seconds in an hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Gets the time it takes to complete one revolution, in seconds.
///
/// `T = 2π sqrt(a^3 / (G m))`, assuming an unperturbed two-body orbit.
///
/// ### Parameters
/// - `semi_major_axis`: in meters.
/// - `mass`: the mass of the central body, in kilograms.
/// - `gravitational_constant`: in m^3 kg^-1 s^-2.
///
/// # Errors
/// Every argument must be strictly positive; nothing is clamped.
///
/// # Example
/// ```
/// use frozen_orbits::{orbital_period, seconds_to_hours, GRAVITATIONAL_CONSTANT};
///
/// # fn main() -> Result<(), frozen_orbits::OrbitError> {
/// let period = orbital_period(6_541_400.0, 7.34767309e22, GRAVITATIONAL_CONSTANT)?;
/// let hours = seconds_to_hours(period);
///
/// assert!(hours > 13.0 && hours < 13.5);
/// assert!(orbital_period(-1.0, 7.34767309e22, GRAVITATIONAL_CONSTANT).is_err());
/// # Ok(())
/// # }
/// ```
pub fn orbital_period(
    semi_major_axis: f64,
    mass: f64,
    gravitational_constant: f64,
) -> OrbitResult<f64> {
    if !(semi_major_axis.is_finite() && semi_major_axis > 0.0) {
        return Err(InvalidElementError::NonPositiveSemiMajorAxis(semi_major_axis).into());
    }
    if !(mass.is_finite() && mass > 0.0) {
        return Err(InvalidBodyError::NonPositiveMass(mass).into());
    }
    if !(gravitational_constant.is_finite() && gravitational_constant > 0.0) {
        return Err(InvalidBodyError::NonPositiveGravitationalConstant(gravitational_constant).into());
    }

    // https://en.wikipedia.org/wiki/Orbital_period
    let mu = gravitational_constant * mass;
    Ok(TAU * (semi_major_axis.powi(3) / mu).sqrt())
}

/// Converts a duration in seconds into hours.
#[inline]
pub fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / SECONDS_PER_HOUR
}
