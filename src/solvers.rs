//! Solvers for the elliptic Kepler equation, `M = E - e sin(E)`.

use core::f64::consts::{PI, TAU};

use crate::{InvalidSolverConfigError, NonConvergenceError, NUMERIC_MAX_ITERS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A constant used to get the initial seed for the eccentric anomaly
/// in the Laguerre-Conway method.
///
/// Source:
/// "Two fast and accurate routines for solving the elliptic Kepler
/// equation for all values of the eccentricity and mean anomaly"
/// by Daniele Tommasini and David N. Olivieri,
/// section 2.1.2, 'The "rational seed"'
///
/// <https://doi.org/10.1051/0004-6361/202141423>
const B: f64 = 0.999999;

/// The order `n` of the Laguerre method.
///
/// Conway reports that convergence speed is very insensitive to `n`,
/// and that no value consistently beats `n = 5`.
const LAGUERRE_N: f64 = 5.0;

const PI_SQUARED: f64 = PI * PI;

/// The default convergence tolerance on `|ΔE|`, in radians.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// The numerical method used to solve Kepler's equation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeplerMethod {
    /// Picard iteration, `E_{n+1} = M + e sin(E_n)` starting from `E_0 = M`.
    ///
    /// Converges linearly with ratio of roughly `e`, so it slows down
    /// considerably as `e` approaches 1.
    #[default]
    FixedPoint,

    /// Laguerre's method as adapted by Conway, seeded with the
    /// Tommasini-Olivieri rational seed.
    ///
    /// From the paper
    /// "An improved algorithm due to laguerre for the solution of Kepler's equation."
    /// by Bruce A. Conway
    /// <https://doi.org/10.1007/bf01230852>
    LaguerreConway,
}

/// Parameters for [`KeplerSolver`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeplerSolverConfig {
    /// Which method to iterate with.
    pub method: KeplerMethod,

    /// The solve is considered converged once a correction step is
    /// smaller than this, in radians.
    ///
    /// Must be finite and strictly positive; [`KeplerSolver::new`]
    /// rejects anything else.
    pub tolerance: f64,

    /// The hard upper bound on iterations.
    pub max_iterations: u32,
}

impl Default for KeplerSolverConfig {
    fn default() -> Self {
        Self {
            method: KeplerMethod::FixedPoint,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: NUMERIC_MAX_ITERS,
        }
    }
}

/// The outcome of a single Kepler solve.
///
/// A solve that ran out of iterations still carries its last iterate;
/// callers decide whether that is acceptable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolution {
    /// The eccentric anomaly, in radians.
    pub eccentric_anomaly: f64,
    /// How many iterations were run.
    pub iterations: u32,
    /// Whether `|ΔE|` dropped below the tolerance.
    pub converged: bool,
    /// The size of the last correction step, in radians.
    pub last_delta: f64,
}

/// Solves Kepler's equation for the eccentric anomaly.
///
/// # Example
/// ```
/// use frozen_orbits::KeplerSolver;
///
/// let solver = KeplerSolver::default();
/// let solution = solver.solve(1.0, 0.5);
///
/// assert!(solution.converged);
///
/// let e = solution.eccentric_anomaly;
/// assert!((e - 0.5 * e.sin() - 1.0).abs() < 1e-10);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "KeplerSolverConfig", into = "KeplerSolverConfig")
)]
pub struct KeplerSolver {
    config: KeplerSolverConfig,
}

impl KeplerSolver {
    /// Creates a solver with the given configuration.
    ///
    /// # Errors
    /// Fails unless the tolerance is finite and strictly positive.
    pub fn new(config: KeplerSolverConfig) -> Result<Self, InvalidSolverConfigError> {
        if !(config.tolerance.is_finite() && config.tolerance > 0.0) {
            return Err(InvalidSolverConfigError::InvalidTolerance(config.tolerance));
        }

        Ok(Self { config })
    }

    /// Creates a solver using `method` with the default tolerance and
    /// iteration bound.
    pub fn with_method(method: KeplerMethod) -> Self {
        Self {
            config: KeplerSolverConfig {
                method,
                ..Default::default()
            },
        }
    }

    /// Gets the configuration this solver runs with.
    pub fn config(&self) -> &KeplerSolverConfig {
        &self.config
    }

    /// Solves `M = E - e sin(E)` for `E`.
    ///
    /// `mean_anomaly` is in radians, `eccentricity` must be in `[0, 1)`.
    /// The eccentricity is not checked here; element sets are validated
    /// when they are built.
    ///
    /// A circular orbit (`e = 0`) returns `E = M` exactly, regardless
    /// of the configured iteration bound.
    pub fn solve(&self, mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
        if eccentricity == 0.0 {
            return KeplerSolution {
                eccentric_anomaly: mean_anomaly,
                iterations: 0,
                converged: true,
                last_delta: 0.0,
            };
        }

        let solution = match self.config.method {
            KeplerMethod::FixedPoint => solve_fixed_point(
                mean_anomaly,
                eccentricity,
                self.config.tolerance,
                self.config.max_iterations,
            ),
            KeplerMethod::LaguerreConway => solve_laguerre_conway(
                mean_anomaly,
                eccentricity,
                self.config.tolerance,
                self.config.max_iterations,
            ),
        };

        tracing::trace!(
            mean_anomaly,
            eccentricity,
            iterations = solution.iterations,
            converged = solution.converged,
            "solved Kepler's equation"
        );

        solution
    }

    /// Like [`solve`][Self::solve], but treats running out of iterations
    /// as an error.
    pub fn solve_strict(
        &self,
        mean_anomaly: f64,
        eccentricity: f64,
    ) -> Result<f64, NonConvergenceError> {
        let solution = self.solve(mean_anomaly, eccentricity);

        if solution.converged {
            return Ok(solution.eccentric_anomaly);
        }

        tracing::warn!(
            mean_anomaly,
            eccentricity,
            iterations = solution.iterations,
            last_delta = solution.last_delta,
            "Kepler's equation did not converge"
        );

        Err(NonConvergenceError {
            mean_anomaly,
            eccentricity,
            iterations: solution.iterations,
            last_delta: solution.last_delta,
        })
    }
}

impl TryFrom<KeplerSolverConfig> for KeplerSolver {
    type Error = InvalidSolverConfigError;

    fn try_from(config: KeplerSolverConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl From<KeplerSolver> for KeplerSolverConfig {
    fn from(solver: KeplerSolver) -> Self {
        solver.config
    }
}

fn solve_fixed_point(
    mean_anomaly: f64,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: u32,
) -> KeplerSolution {
    // Iterate within one revolution; far from zero an ulp of M alone
    // exceeds any useful tolerance.
    let reduced = mean_anomaly.rem_euclid(TAU);
    let offset = mean_anomaly - reduced;

    let mut eccentric_anomaly = reduced;
    let mut last_delta = f64::INFINITY;

    for iteration in 1..=max_iterations {
        let next = reduced + eccentricity * eccentric_anomaly.sin();
        last_delta = (next - eccentric_anomaly).abs();
        eccentric_anomaly = next;

        if last_delta < tolerance {
            return KeplerSolution {
                eccentric_anomaly: eccentric_anomaly + offset,
                iterations: iteration,
                converged: true,
                last_delta,
            };
        }
    }

    KeplerSolution {
        eccentric_anomaly: eccentric_anomaly + offset,
        iterations: max_iterations,
        converged: false,
        last_delta,
    }
}

fn solve_laguerre_conway(
    mean_anomaly: f64,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: u32,
) -> KeplerSolution {
    // Use the symmetry and periodicity of Kepler's equation to work
    // in [0, pi], then map the answer back onto the caller's revolution.
    // Equation 2 of the Tommasini-Olivieri paper.
    let mut reduced = mean_anomaly.rem_euclid(TAU);
    let mut offset = mean_anomaly - reduced;
    if reduced > PI {
        reduced -= TAU;
        offset += TAU;
    }
    let sign = if reduced < 0.0 { -1.0 } else { 1.0 };
    let reduced = reduced.abs();

    // Rational seed, equation 19:
    // E_0 = M + (4beM(pi - M)) / (8eM + 4e(e - pi) + pi^2)
    let mut eccentric_anomaly = reduced
        + (4.0 * eccentricity * B * reduced * (PI - reduced))
            / (8.0 * eccentricity * reduced
                + 4.0 * eccentricity * (eccentricity - PI)
                + PI_SQUARED);

    let n = LAGUERRE_N;
    let n_minus_1 = n - 1.0;
    let mut last_delta = f64::INFINITY;
    let mut iterations = 0;
    let mut converged = false;

    // x_{i+1} = x_i - n f(x_i) / (f'(x_i) +/- D)
    // D = sqrt(|(n-1)^2 f'(x_i)^2 - n(n-1) f(x_i) f''(x_i)|)
    // ...where "+/-" is chosen so that |denominator| is maximized
    while iterations < max_iterations {
        iterations += 1;

        let f = keplers_equation(reduced, eccentric_anomaly, eccentricity);
        let fp = keplers_equation_derivative(eccentric_anomaly, eccentricity);
        let fpp = keplers_equation_second_derivative(eccentric_anomaly, eccentricity);

        let d = ((n_minus_1 * n_minus_1) * fp * fp - n * n_minus_1 * f * fpp)
            .abs()
            .sqrt()
            .copysign(fp);
        let denominator = fp + d;

        if denominator == 0.0 || !denominator.is_finite() {
            // f' = 0 cannot happen for e < 1, so this is a degenerate input
            break;
        }

        let delta = n * f / denominator;
        eccentric_anomaly -= delta;
        last_delta = delta.abs();

        if last_delta < tolerance {
            converged = true;
            break;
        }
    }

    KeplerSolution {
        eccentric_anomaly: sign * eccentric_anomaly + offset,
        iterations,
        converged,
        last_delta,
    }
}

/// The residual of Kepler's equation, `E - e sin(E) - M`.
#[inline]
pub(crate) fn keplers_equation(mean_anomaly: f64, eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - (eccentricity * eccentric_anomaly.sin()) - mean_anomaly
}
#[inline]
fn keplers_equation_derivative(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    1.0 - (eccentricity * eccentric_anomaly.cos())
}
#[inline]
fn keplers_equation_second_derivative(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentricity * eccentric_anomaly.sin()
}
