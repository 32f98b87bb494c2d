#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{transform, InvalidElementError, Matrix3x2, OrbitTrait};

/// The length unit a semi-major axis is given in.
///
/// Element sets always store meters; this only matters at the boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    /// Meters. The crate's internal unit.
    #[default]
    Meters,
    /// Kilometers.
    Kilometers,
}

impl LengthUnit {
    /// Converts a length in this unit into meters.
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            LengthUnit::Meters => value,
            LengthUnit::Kilometers => value * 1e3,
        }
    }

    /// Converts a length in meters into this unit.
    pub fn from_meters(self, meters: f64) -> f64 {
        match self {
            LengthUnit::Meters => meters,
            LengthUnit::Kilometers => meters * 1e-3,
        }
    }
}

/// An immutable set of Keplerian elements describing one closed orbit.
///
/// Angles are given in degrees to [`new`][Self::new] and stored in
/// radians. The semi-major axis is stored in meters.
///
/// Every constructor validates its input: `a > 0`, `0 <= e < 1`, and
/// all angles finite. An `OrbitalElementSet` that exists is valid.
///
/// # Example
/// ```
/// use frozen_orbits::{LengthUnit, OrbitalElementSet, OrbitTrait};
///
/// # fn main() -> Result<(), frozen_orbits::InvalidElementError> {
/// let elements = OrbitalElementSet::with_unit(
///     LengthUnit::Kilometers,
///     // Semi-major axis
///     6540.0,
///     // Eccentricity
///     0.6,
///     // Inclination
///     63.0,
///     // Longitude of ascending node
///     0.0,
///     // Argument of periapsis
///     90.0,
///     // Mean anomaly
///     0.0,
/// )?;
///
/// assert_eq!(elements.get_semi_major_axis(), 6_540_000.0);
/// assert!(OrbitalElementSet::new(6_540_000.0, 1.0, 63.0, 0.0, 90.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawElementSet"))]
pub struct OrbitalElementSet {
    /// The semi-major axis, in meters.
    semi_major_axis: f64,

    /// The eccentricity, in `[0, 1)`.
    eccentricity: f64,

    /// The inclination, in radians.
    inclination: f64,

    /// The longitude (right ascension) of the ascending node, in radians.
    long_asc_node: f64,

    /// The argument of periapsis, in radians.
    arg_pe: f64,

    /// The mean anomaly, in radians.
    mean_anomaly: f64,
}

impl OrbitalElementSet {
    /// Creates a new element set.
    ///
    /// ### Parameters
    /// - `semi_major_axis`: in meters.
    /// - `eccentricity`: in `[0, 1)`.
    /// - `inclination`: in degrees.
    /// - `long_asc_node`: the right ascension of the ascending node, in degrees.
    /// - `arg_pe`: the argument of periapsis, in degrees.
    /// - `mean_anomaly`: in degrees.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        long_asc_node: f64,
        arg_pe: f64,
        mean_anomaly: f64,
    ) -> Result<Self, InvalidElementError> {
        Self::from_radians(
            semi_major_axis,
            eccentricity,
            inclination.to_radians(),
            long_asc_node.to_radians(),
            arg_pe.to_radians(),
            mean_anomaly.to_radians(),
        )
    }

    /// Like [`new`][Self::new], but with the semi-major axis given in `unit`.
    pub fn with_unit(
        unit: LengthUnit,
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        long_asc_node: f64,
        arg_pe: f64,
        mean_anomaly: f64,
    ) -> Result<Self, InvalidElementError> {
        Self::new(
            unit.to_meters(semi_major_axis),
            eccentricity,
            inclination,
            long_asc_node,
            arg_pe,
            mean_anomaly,
        )
    }

    /// Creates a new element set from angles already in radians.
    ///
    /// The semi-major axis is in meters.
    pub fn from_radians(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        long_asc_node: f64,
        arg_pe: f64,
        mean_anomaly: f64,
    ) -> Result<Self, InvalidElementError> {
        if !(semi_major_axis.is_finite() && semi_major_axis > 0.0) {
            return Err(InvalidElementError::NonPositiveSemiMajorAxis(semi_major_axis));
        }

        // Also rejects NaN
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(InvalidElementError::EccentricityOutOfRange(eccentricity));
        }

        check_angle("inclination", inclination)?;
        check_angle("longitude of ascending node", long_asc_node)?;
        check_angle("argument of periapsis", arg_pe)?;
        check_angle("mean anomaly", mean_anomaly)?;

        Ok(Self {
            semi_major_axis,
            eccentricity,
            inclination,
            long_asc_node,
            arg_pe,
            mean_anomaly,
        })
    }

    /// Returns a copy of this element set at another mean anomaly, in degrees.
    pub fn with_mean_anomaly(&self, mean_anomaly: f64) -> Result<Self, InvalidElementError> {
        self.with_mean_anomaly_radians(mean_anomaly.to_radians())
    }

    /// Returns a copy of this element set at another mean anomaly, in radians.
    pub fn with_mean_anomaly_radians(
        &self,
        mean_anomaly: f64,
    ) -> Result<Self, InvalidElementError> {
        check_angle("mean anomaly", mean_anomaly)?;

        Ok(Self {
            mean_anomaly,
            ..*self
        })
    }
}

fn check_angle(name: &'static str, value: f64) -> Result<(), InvalidElementError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidElementError::NonFiniteAngle { name, value })
    }
}

impl OrbitTrait for OrbitalElementSet {
    #[inline]
    fn get_semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    #[inline]
    fn get_eccentricity(&self) -> f64 {
        self.eccentricity
    }

    #[inline]
    fn get_inclination(&self) -> f64 {
        self.inclination
    }

    #[inline]
    fn get_arg_pe(&self) -> f64 {
        self.arg_pe
    }

    #[inline]
    fn get_long_asc_node(&self) -> f64 {
        self.long_asc_node
    }

    #[inline]
    fn get_mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    fn get_transformation_matrix(&self) -> Matrix3x2 {
        Matrix3x2::from_rotation(transform::perifocal_to_inertial(
            self.inclination,
            self.arg_pe,
            self.long_asc_node,
        ))
    }
}

/// Unvalidated mirror of [`OrbitalElementSet`] for deserialization.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawElementSet {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    long_asc_node: f64,
    arg_pe: f64,
    mean_anomaly: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawElementSet> for OrbitalElementSet {
    type Error = InvalidElementError;

    fn try_from(raw: RawElementSet) -> Result<Self, Self::Error> {
        Self::from_radians(
            raw.semi_major_axis,
            raw.eccentricity,
            raw.inclination,
            raw.long_asc_node,
            raw.arg_pe,
            raw.mean_anomaly,
        )
    }
}
