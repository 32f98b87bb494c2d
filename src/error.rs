//! Error types for orbit construction and evaluation.
//!
//! Every failure in this crate is a local input-validation failure.
//! Nothing here is retryable: callers either fix their inputs or give up.

use thiserror::Error;

/// Result type used throughout the crate.
pub type OrbitResult<T> = Result<T, OrbitError>;

/// An orbital element set was rejected before any computation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidElementError {
    /// Closed orbits need `0 <= e < 1`.
    #[error("eccentricity {0} is outside of [0, 1)")]
    EccentricityOutOfRange(f64),

    /// The semi-major axis must be strictly positive (and finite).
    #[error("semi-major axis {0} is not strictly positive")]
    NonPositiveSemiMajorAxis(f64),

    /// One of the angular elements is NaN or infinite.
    #[error("{name} is not finite: {value}")]
    NonFiniteAngle {
        /// Which element was rejected.
        name: &'static str,
        /// The offending value, as given.
        value: f64,
    },
}

/// The Kepler solver ran out of iterations before `|ΔE|` dropped below
/// its tolerance.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error(
    "Kepler's equation did not converge for M = {mean_anomaly} rad, e = {eccentricity} \
    after {iterations} iterations (last |ΔE| = {last_delta})"
)]
pub struct NonConvergenceError {
    /// The mean anomaly being solved for, in radians.
    pub mean_anomaly: f64,
    /// The eccentricity of the orbit.
    pub eccentricity: f64,
    /// How many iterations were spent.
    pub iterations: u32,
    /// The size of the last correction step, in radians.
    pub last_delta: f64,
}

/// A Kepler solver configuration was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidSolverConfigError {
    /// The tolerance must be finite and strictly positive, otherwise no
    /// non-circular solve could ever converge.
    #[error("solver tolerance {0} is not a finite, strictly positive number")]
    InvalidTolerance(f64),
}

/// A central body was rejected by the period calculation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidBodyError {
    /// The mass must be strictly positive.
    #[error("central body mass {0} is not strictly positive")]
    NonPositiveMass(f64),

    /// The gravitational constant must be strictly positive.
    #[error("gravitational constant {0} is not strictly positive")]
    NonPositiveGravitationalConstant(f64),

    /// The radius must be strictly positive.
    #[error("central body radius {0} is not strictly positive")]
    NonPositiveRadius(f64),
}

/// A satellite catalog could not be built or queried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Two entries share a name.
    #[error("satellite '{0}' is already in the catalog")]
    DuplicateSatellite(String),

    /// Lookup of a name that isn't in the catalog.
    #[error("satellite '{0}' is not in the catalog")]
    UnknownSatellite(String),

    /// The configuration document could not be parsed.
    #[error("could not parse catalog configuration: {0}")]
    Parse(String),
}

/// Umbrella error for every fallible operation in the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    /// See [`InvalidElementError`].
    #[error(transparent)]
    InvalidElement(#[from] InvalidElementError),

    /// See [`NonConvergenceError`].
    #[error(transparent)]
    NonConvergence(#[from] NonConvergenceError),

    /// See [`InvalidSolverConfigError`].
    #[error(transparent)]
    InvalidSolverConfig(#[from] InvalidSolverConfigError),

    /// See [`InvalidBodyError`].
    #[error(transparent)]
    InvalidBody(#[from] InvalidBodyError),

    /// See [`CatalogError`].
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An element set in the catalog named `satellite` was rejected.
    #[error("satellite '{satellite}': {source}")]
    InvalidCatalogEntry {
        /// The catalog entry that failed validation.
        satellite: String,
        /// Why it failed.
        #[source]
        source: InvalidElementError,
    },
}
