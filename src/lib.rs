//! # Lunar Frozen Orbits
//! This library crate computes Cartesian positions and orbital periods for
//! constellations of satellites on lunar frozen orbits, starting from their
//! Keplerian orbital elements.
//!
//! It is a two-body model. There is no J2, no third-body pull from the
//! Earth or the Sun, and no numerical integration. Each position comes
//! straight from the elements: solve Kepler's equation for the eccentric
//! anomaly, place the point in the orbital plane, then rotate it into the
//! inertial frame.
//!
//! ## Getting started
//! This crate provides a few main structs:
//! - [`OrbitalElementSet`]: an immutable, validated set of Keplerian elements.
//!   It doesn't cache anything.
//! - [`Orbit`]: an element set together with its cached perifocal-to-inertial
//!   rotation. Use it when evaluating many points on the same orbit.
//! - [`OrbitSampler`]: a lazy iterator over evenly spaced points of one
//!   full revolution.
//! - [`CentralBody`]: the body being orbited. Its mass drives the
//!   [orbital period][orbital_period].
//! - [`SatelliteCatalog`]: a named, ordered set of element sets, passed
//!   around as configuration.
//!
//! Presets for the Moon and for the ELFO constellation live in
//! [`body_presets`] and [`catalog_presets`].
//!
//! ## Units
//! Lengths are in meters, masses in kilograms, and times in seconds.
//! Angles are taken in degrees at construction and stored in radians.
//! Use [`LengthUnit`] to convert kilometer inputs at the boundary.
//!
//! ## Example
//!
//! ```rust
//! use frozen_orbits::{OrbitalElementSet, OrbitTrait, KeplerSolver};
//!
//! # fn main() -> Result<(), frozen_orbits::OrbitError> {
//! let elements = OrbitalElementSet::new(6_540_000.0, 0.6, 63.0, 0.0, 90.0, 0.0)?;
//! let state = elements.get_state(&KeplerSolver::default())?;
//!
//! // At periapsis, the distance is a(1 - e)
//! assert!((state.radius() - 2_616_000.0).abs() < 1e-3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod body;
pub mod body_presets;
mod cached_orbit;
mod catalog;
pub mod catalog_presets;
mod elements;
mod error;
mod period;
mod sampler;
mod solvers;
pub mod transform;

pub use body::CentralBody;
pub use cached_orbit::Orbit;
#[cfg(feature = "serde")]
pub use catalog::{CatalogConfig, SatelliteConfig};
pub use catalog::SatelliteCatalog;
pub use elements::{LengthUnit, OrbitalElementSet};
pub use error::{
    CatalogError, InvalidBodyError, InvalidElementError, InvalidSolverConfigError,
    NonConvergenceError, OrbitError, OrbitResult,
};
pub use period::{orbital_period, seconds_to_hours, SECONDS_PER_HOUR};
pub use sampler::{OrbitSampler, OrbitTrace, SampleInterval};
pub use solvers::{
    KeplerMethod, KeplerSolution, KeplerSolver, KeplerSolverConfig, DEFAULT_TOLERANCE,
};

use glam::{DVec2, DVec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The Newtonian constant of gravitation (CODATA 2018), in m^3 kg^-1 s^-2.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// The maximum number of iterations for the numerical approach algorithms.
///
/// This is used to prevent infinite loops in case the method fails to converge.
const NUMERIC_MAX_ITERS: u32 = 1000;

/// A struct representing a 3x2 matrix.
///
/// This struct is used to store the transformation matrix
/// for transforming a 2D perifocal vector into a 3D inertial vector.
///
/// It holds the first two columns of the full 3-1-3 rotation; the third
/// column is never needed since perifocal positions have no z component.
///
/// Each element is named `eXY`, where `X` is the row and `Y` is the column.
///
/// # Example
/// ```
/// use glam::{DVec2, DVec3};
///
/// use frozen_orbits::Matrix3x2;
///
/// let matrix = Matrix3x2 {
///    e11: 1.0, e12: 0.0,
///    e21: 0.0, e22: 1.0,
///    e31: 0.0, e32: 0.0,
/// };
///
/// let vec = DVec2::new(1.0, 2.0);
///
/// let result = matrix.dot_vec(vec);
///
/// assert_eq!(result, DVec3::new(1.0, 2.0, 0.0));
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix3x2 {
    // Element XY
    pub e11: f64,
    pub e12: f64,
    pub e21: f64,
    pub e22: f64,
    pub e31: f64,
    pub e32: f64,
}

impl Matrix3x2 {
    /// The identity-like matrix, which leaves the x and y components alone.
    pub const IDENTITY: Self = Self {
        e11: 1.0,
        e12: 0.0,
        e21: 0.0,
        e22: 1.0,
        e31: 0.0,
        e32: 0.0,
    };

    /// Computes a dot product between this matrix and a 2D vector.
    pub fn dot_vec(&self, vec: DVec2) -> DVec3 {
        DVec3::new(
            vec.x * self.e11 + vec.y * self.e12,
            vec.x * self.e21 + vec.y * self.e22,
            vec.x * self.e31 + vec.y * self.e32,
        )
    }
}

/// A position at a point in the orbit.
///
/// The position is in the inertial frame, in the same length unit as the
/// semi-major axis it was computed from (meters, in this crate).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartesianState {
    /// The 3D position, in meters.
    pub position: DVec3,
}

impl CartesianState {
    /// Wraps a position vector.
    pub fn new(position: DVec3) -> Self {
        Self { position }
    }

    /// Gets the distance from the center of the central body.
    pub fn radius(&self) -> f64 {
        self.position.length()
    }
}

impl From<DVec3> for CartesianState {
    fn from(position: DVec3) -> Self {
        Self::new(position)
    }
}

/// A trait that defines the methods that a Keplerian orbit must implement.
///
/// This trait is implemented by both [`OrbitalElementSet`] and [`Orbit`].
///
/// # Example
/// ```
/// use frozen_orbits::{OrbitalElementSet, Orbit, OrbitTrait};
///
/// fn accepts_orbit(orbit: &impl OrbitTrait) {
///     println!("That's an orbit!");
/// }
///
/// fn main() -> Result<(), frozen_orbits::OrbitError> {
///     let elements = OrbitalElementSet::new(6_540_000.0, 0.6, 63.0, 0.0, 90.0, 0.0)?;
///     accepts_orbit(&elements);
///
///     let orbit = Orbit::from(elements);
///     accepts_orbit(&orbit);
///     Ok(())
/// }
/// ```
pub trait OrbitTrait {
    /// Gets the semi-major axis of the orbit, in meters.
    fn get_semi_major_axis(&self) -> f64;

    /// Gets the eccentricity of the orbit, in `[0, 1)`.
    fn get_eccentricity(&self) -> f64;

    /// Gets the inclination of the orbit, in radians.
    fn get_inclination(&self) -> f64;

    /// Gets the argument of periapsis of the orbit, in radians.
    fn get_arg_pe(&self) -> f64;

    /// Gets the longitude (right ascension) of the ascending node, in radians.
    fn get_long_asc_node(&self) -> f64;

    /// Gets the mean anomaly the element set was defined at, in radians.
    fn get_mean_anomaly(&self) -> f64;

    /// Gets the matrix that tilts perifocal vectors into the inertial frame.
    fn get_transformation_matrix(&self) -> Matrix3x2;

    /// Gets the periapsis distance, `a(1 - e)`.
    fn get_periapsis(&self) -> f64 {
        self.get_semi_major_axis() * (1.0 - self.get_eccentricity())
    }

    /// Gets the apoapsis distance, `a(1 + e)`.
    fn get_apoapsis(&self) -> f64 {
        self.get_semi_major_axis() * (1.0 + self.get_eccentricity())
    }

    /// Gets the semi-minor axis, `a sqrt(1 - e^2)`.
    fn get_semi_minor_axis(&self) -> f64 {
        let eccentricity = self.get_eccentricity();
        self.get_semi_major_axis() * (1.0 - eccentricity * eccentricity).sqrt()
    }

    /// Gets the eccentric anomaly at a given mean anomaly, in radians.
    ///
    /// # Errors
    /// Fails if the solver runs out of iterations.
    fn get_eccentric_anomaly_at_mean_anomaly(
        &self,
        solver: &KeplerSolver,
        mean_anomaly: f64,
    ) -> Result<f64, NonConvergenceError> {
        solver.solve_strict(mean_anomaly, self.get_eccentricity())
    }

    /// Gets the distance from the focus at a given eccentric anomaly.
    fn get_radius_at_eccentric_anomaly(&self, eccentric_anomaly: f64) -> f64 {
        transform::radius_at_eccentric_anomaly(
            self.get_semi_major_axis(),
            self.get_eccentricity(),
            eccentric_anomaly,
        )
    }

    /// Gets the position in the orbital plane at a given eccentric anomaly.
    fn get_pqw_position_at_eccentric_anomaly(&self, eccentric_anomaly: f64) -> DVec2 {
        transform::perifocal_position(
            self.get_semi_major_axis(),
            self.get_eccentricity(),
            eccentric_anomaly,
        )
    }

    /// Transforms a position from the perifocal coordinate (PQW) system into
    /// the inertial frame, using the orbital parameters.
    ///
    /// # Perifocal Coordinate (PQW) System
    /// The perifocal coordinate (PQW) system is a frame of reference using
    /// the basis vectors p-hat, q-hat, and w-hat, where p-hat points to the
    /// periapsis, q-hat has a true anomaly 90 degrees more than p-hat, and
    /// w-hat points perpendicular to the orbital plane.
    ///
    /// Learn more: <https://en.wikipedia.org/wiki/Perifocal_coordinate_system>
    fn transform_pqw_vector(&self, position: DVec2) -> DVec3 {
        self.get_transformation_matrix().dot_vec(position)
    }

    /// Gets the inertial position at a given eccentric anomaly.
    fn get_position_at_eccentric_anomaly(&self, eccentric_anomaly: f64) -> DVec3 {
        self.transform_pqw_vector(self.get_pqw_position_at_eccentric_anomaly(eccentric_anomaly))
    }

    /// Gets the state at a given mean anomaly, in radians.
    ///
    /// # Errors
    /// Fails if the solver runs out of iterations.
    fn get_state_at_mean_anomaly(
        &self,
        solver: &KeplerSolver,
        mean_anomaly: f64,
    ) -> Result<CartesianState, NonConvergenceError> {
        let eccentric_anomaly = self.get_eccentric_anomaly_at_mean_anomaly(solver, mean_anomaly)?;

        Ok(CartesianState::new(
            self.get_position_at_eccentric_anomaly(eccentric_anomaly),
        ))
    }

    /// Gets the inertial position at a given mean anomaly, in radians.
    ///
    /// # Errors
    /// Fails if the solver runs out of iterations.
    fn get_position_at_mean_anomaly(
        &self,
        solver: &KeplerSolver,
        mean_anomaly: f64,
    ) -> Result<DVec3, NonConvergenceError> {
        self.get_state_at_mean_anomaly(solver, mean_anomaly)
            .map(|state| state.position)
    }

    /// Gets the state at the element set's own mean anomaly.
    ///
    /// # Errors
    /// Fails if the solver runs out of iterations.
    fn get_state(&self, solver: &KeplerSolver) -> Result<CartesianState, NonConvergenceError> {
        self.get_state_at_mean_anomaly(solver, self.get_mean_anomaly())
    }

    /// Gets the time it takes to complete one revolution around `body`,
    /// in seconds.
    ///
    /// # Errors
    /// Fails if the body's mass or `gravitational_constant` isn't strictly positive.
    fn get_orbital_period(
        &self,
        body: &CentralBody,
        gravitational_constant: f64,
    ) -> OrbitResult<f64> {
        orbital_period(self.get_semi_major_axis(), body.mass, gravitational_constant)
    }
}
