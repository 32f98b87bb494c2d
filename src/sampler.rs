use core::f64::consts::TAU;
use core::iter::FusedIterator;

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CartesianState, KeplerSolver, NonConvergenceError, Orbit, OrbitTrait, OrbitalElementSet};

/// Which mean anomalies an [`OrbitSampler`] covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SampleInterval {
    /// `[0°, 360°]`, both ends included.
    ///
    /// The first and last points coincide, so a polyline drawn through the
    /// trace closes on itself.
    #[default]
    Closed,

    /// `[0°, 360°)`: every sample is a distinct point of the orbit.
    HalfOpen,
}

/// A lazy, finite sequence of points over one revolution of an orbit.
///
/// Mean anomalies are evenly spaced over the configured
/// [`SampleInterval`]. The element set's own mean anomaly is ignored.
///
/// Each item is the result of one Kepler solve followed by one frame
/// transform. The rotation is built once, when the sampler is created.
///
/// The sampler is cheap to clone, and a clone (or [`restart`][Self::restart])
/// starts over from the first sample and yields the exact same values.
///
/// # Example
/// ```
/// use frozen_orbits::{OrbitalElementSet, OrbitSampler, SampleInterval};
///
/// # fn main() -> Result<(), frozen_orbits::OrbitError> {
/// let elements = OrbitalElementSet::new(6_540_000.0, 0.6, 63.0, 0.0, 90.0, 0.0)?;
///
/// let trace = OrbitSampler::new(elements, 100).trace()?;
/// assert_eq!(trace.len(), 100);
///
/// let open = OrbitSampler::new(elements, 100)
///     .with_interval(SampleInterval::HalfOpen)
///     .trace()?;
/// assert_eq!(open.len(), 100);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSampler {
    orbit: Orbit,
    solver: KeplerSolver,
    samples: usize,
    interval: SampleInterval,
    next: usize,
}

impl OrbitSampler {
    /// Creates a sampler producing `samples` points over `[0°, 360°]`,
    /// using the default Kepler solver.
    pub fn new(elements: OrbitalElementSet, samples: usize) -> Self {
        Self {
            orbit: Orbit::from(elements),
            solver: KeplerSolver::default(),
            samples,
            interval: SampleInterval::default(),
            next: 0,
        }
    }

    /// Sets which interval of mean anomalies is sampled.
    pub fn with_interval(mut self, interval: SampleInterval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the Kepler solver used for every sample.
    pub fn with_solver(mut self, solver: KeplerSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Gets the total number of samples, including those already yielded.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Gets the mean anomaly of the `index`-th sample, in radians.
    pub fn mean_anomaly_at(&self, index: usize) -> f64 {
        let divisor = match self.interval {
            SampleInterval::Closed => self.samples.saturating_sub(1),
            SampleInterval::HalfOpen => self.samples,
        };

        if divisor == 0 {
            return 0.0;
        }

        TAU * (index as f64 / divisor as f64)
    }

    /// Rewinds to the first sample.
    pub fn restart(&mut self) {
        self.next = 0;
    }

    /// Computes every sample from the first, regardless of how far this
    /// sampler has already advanced.
    ///
    /// # Errors
    /// Fails on the first sample whose Kepler solve doesn't converge.
    pub fn trace(&self) -> Result<OrbitTrace, NonConvergenceError> {
        let mut sampler = self.clone();
        sampler.restart();

        let points = sampler.collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            samples = points.len(),
            interval = ?self.interval,
            "sampled orbit trace"
        );

        Ok(OrbitTrace { points })
    }
}

impl Iterator for OrbitSampler {
    type Item = Result<CartesianState, NonConvergenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.samples {
            return None;
        }

        let mean_anomaly = self.mean_anomaly_at(self.next);
        self.next += 1;

        Some(self.orbit.get_state_at_mean_anomaly(&self.solver, mean_anomaly))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OrbitSampler {}

impl FusedIterator for OrbitSampler {}

/// An ordered sequence of points over one revolution of an orbit.
///
/// Produced by [`OrbitSampler::trace`]. Recompute it rather than editing it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitTrace {
    points: Vec<CartesianState>,
}

impl OrbitTrace {
    /// Gets the sampled points, in order.
    pub fn points(&self) -> &[CartesianState] {
        &self.points
    }

    /// Gets the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trace has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the sampled points.
    pub fn iter(&self) -> core::slice::Iter<'_, CartesianState> {
        self.points.iter()
    }

    /// Iterates over the bare position vectors, for handing to a renderer.
    pub fn positions(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.points.iter().map(|state| state.position)
    }

    /// Gets the smallest and largest distance from the focus, if any.
    pub fn radius_range(&self) -> Option<(f64, f64)> {
        self.points.iter().map(CartesianState::radius).fold(None, |range, radius| {
            Some(match range {
                None => (radius, radius),
                Some((min, max)) => (min.min(radius), max.max(radius)),
            })
        })
    }
}

impl<'a> IntoIterator for &'a OrbitTrace {
    type Item = &'a CartesianState;
    type IntoIter = core::slice::Iter<'a, CartesianState>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for OrbitTrace {
    type Item = CartesianState;
    type IntoIter = std::vec::IntoIter<CartesianState>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
