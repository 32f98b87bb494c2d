#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{transform, InvalidElementError, Matrix3x2, OrbitTrait, OrbitalElementSet};

/// A struct representing a Keplerian orbit with some cached values.
///
/// This struct carries the perifocal-to-inertial matrix alongside the
/// elements, so the three rotations are composed once instead of on every
/// position lookup.
/// If you only need one or two positions, [`OrbitalElementSet`] does the
/// same job without the cache.
///
/// # Example
/// ```
/// use frozen_orbits::{KeplerSolver, Orbit, OrbitalElementSet, OrbitTrait};
///
/// # fn main() -> Result<(), frozen_orbits::OrbitError> {
/// let elements = OrbitalElementSet::new(6_540_000.0, 0.6, 49.4, 180.0, 90.0, 0.0)?;
/// let orbit = Orbit::from(elements);
///
/// let solver = KeplerSolver::default();
/// assert_eq!(orbit.get_state(&solver)?, elements.get_state(&solver)?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "OrbitalElementSet", into = "OrbitalElementSet"))]
pub struct Orbit {
    elements: OrbitalElementSet,
    cache: OrbitCachedCalculations,
}

// -------- MEMO --------
// When updating this struct, please review `Orbit::get_cached_calculations()`
#[derive(Clone, Debug, PartialEq)]
struct OrbitCachedCalculations {
    /// The transformation matrix to tilt the 2D planar orbit into 3D space.
    transformation_matrix: Matrix3x2,
}

impl Orbit {
    /// Creates a new orbit with the given parameters.
    ///
    /// Takes the same arguments as [`OrbitalElementSet::new`]: the
    /// semi-major axis in meters and every angle in degrees.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        long_asc_node: f64,
        arg_pe: f64,
        mean_anomaly: f64,
    ) -> Result<Self, InvalidElementError> {
        OrbitalElementSet::new(
            semi_major_axis,
            eccentricity,
            inclination,
            long_asc_node,
            arg_pe,
            mean_anomaly,
        )
        .map(Self::from)
    }

    /// Gets the element set this orbit was built from.
    pub fn elements(&self) -> &OrbitalElementSet {
        &self.elements
    }

    fn get_cached_calculations(elements: &OrbitalElementSet) -> OrbitCachedCalculations {
        let rotation = transform::perifocal_to_inertial(
            elements.get_inclination(),
            elements.get_arg_pe(),
            elements.get_long_asc_node(),
        );

        OrbitCachedCalculations {
            transformation_matrix: Matrix3x2::from_rotation(rotation),
        }
    }
}

impl From<OrbitalElementSet> for Orbit {
    fn from(elements: OrbitalElementSet) -> Self {
        Self {
            cache: Self::get_cached_calculations(&elements),
            elements,
        }
    }
}

impl From<Orbit> for OrbitalElementSet {
    fn from(orbit: Orbit) -> Self {
        orbit.elements
    }
}

impl OrbitTrait for Orbit {
    #[inline]
    fn get_semi_major_axis(&self) -> f64 {
        self.elements.get_semi_major_axis()
    }

    #[inline]
    fn get_eccentricity(&self) -> f64 {
        self.elements.get_eccentricity()
    }

    #[inline]
    fn get_inclination(&self) -> f64 {
        self.elements.get_inclination()
    }

    #[inline]
    fn get_arg_pe(&self) -> f64 {
        self.elements.get_arg_pe()
    }

    #[inline]
    fn get_long_asc_node(&self) -> f64 {
        self.elements.get_long_asc_node()
    }

    #[inline]
    fn get_mean_anomaly(&self) -> f64 {
        self.elements.get_mean_anomaly()
    }

    #[inline]
    fn get_transformation_matrix(&self) -> Matrix3x2 {
        self.cache.transformation_matrix
    }
}
