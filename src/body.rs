#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{orbital_period, InvalidBodyError, OrbitResult, OrbitTrait};

/// A struct representing the body being orbited.
///
/// Its mass feeds the period calculation. The radius is carried along
/// for whoever draws the body; nothing in this crate depends on it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CentralBody {
    /// The name of the celestial body.
    pub name: String,

    /// The mass of the celestial body, in kilograms.
    pub mass: f64,

    /// The mean radius of the celestial body, in meters.
    pub radius: f64,
}

impl CentralBody {
    /// Creates a new `CentralBody` instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the celestial body.
    /// * `mass` - The mass of the celestial body, in kilograms.
    /// * `radius` - The radius of the celestial body, in meters.
    ///
    /// # Errors
    ///
    /// The mass and radius must both be strictly positive.
    pub fn new(name: impl Into<String>, mass: f64, radius: f64) -> Result<Self, InvalidBodyError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(InvalidBodyError::NonPositiveMass(mass));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(InvalidBodyError::NonPositiveRadius(radius));
        }

        Ok(Self {
            name: name.into(),
            mass,
            radius,
        })
    }

    /// Gets the gravitational parameter `mu = G m`, in m^3 s^-2.
    pub fn gravitational_parameter(&self, gravitational_constant: f64) -> f64 {
        gravitational_constant * self.mass
    }

    /// Gets the period of `orbit` around this body, in seconds.
    pub fn orbital_period(
        &self,
        orbit: &impl OrbitTrait,
        gravitational_constant: f64,
    ) -> OrbitResult<f64> {
        orbital_period(orbit.get_semi_major_axis(), self.mass, gravitational_constant)
    }
}
