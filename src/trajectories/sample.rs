use serde::{Deserialize, Serialize};

use crate::constants::MJD;
use crate::ref_frame::{EclipticState, EclipticVec};

/// One time-stamped trajectory record for a single body.
///
/// Carries a heliocentric ecliptic state plus the optional observational
/// scalars an external ephemeris source may attach (Sun distance, observer
/// distance, visual magnitude). Produced either by an external fetch
/// collaborator or by the propagator; immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSample {
    /// Epoch of the sample (MJD days).
    pub epoch: MJD,
    /// Heliocentric ecliptic position (AU).
    pub position: EclipticVec,
    /// Heliocentric ecliptic velocity (AU/day).
    pub velocity: EclipticVec,
    /// Distance from the Sun in AU, when the source supplied it.
    pub sun_distance: Option<f64>,
    /// Distance from the observer in AU, when the source supplied it.
    pub observer_distance: Option<f64>,
    /// Apparent visual magnitude, when the source supplied it.
    pub magnitude: Option<f64>,
}

impl TimeSample {
    /// Build a bare sample from a propagated state, without observational scalars.
    pub fn from_state(epoch: MJD, state: EclipticState) -> Self {
        TimeSample {
            epoch,
            position: state.position,
            velocity: state.velocity,
            sun_distance: None,
            observer_distance: None,
            magnitude: None,
        }
    }

    /// Heliocentric distance in AU.
    ///
    /// Prefers the externally supplied value so fetched and propagated
    /// samples behave identically downstream; falls back to the position
    /// norm.
    pub fn heliocentric_distance(&self) -> f64 {
        self.sun_distance.unwrap_or_else(|| self.position.norm())
    }

    /// Speed `|v|` in AU/day.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

/// The ordered sample sequence of one body.
///
/// Samples are strictly time-ordered as supplied by the source. The sequence
/// is owned by the body's identity in the enclosing
/// [`TrajectorySet`](crate::constants::TrajectorySet) and is treated as
/// immutable after construction: merging derives new data instead of
/// mutating this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory(Vec<TimeSample>);

impl Trajectory {
    pub fn new(samples: Vec<TimeSample>) -> Self {
        Trajectory(samples)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn samples(&self) -> &[TimeSample] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&TimeSample> {
        self.0.get(index)
    }

    pub fn first(&self) -> Option<&TimeSample> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&TimeSample> {
        self.0.last()
    }

    /// Sample at `timestep`, clamped to the nearest available end.
    ///
    /// A timestep beyond the last sample yields the **last** sample; one
    /// before the data starts yields the **first**. This is the merge
    /// fallback policy: clamp, never interpolate, and never silently reuse a
    /// sentinel index.
    ///
    /// Returns `None` only when the trajectory holds no samples at all.
    pub fn clamped(&self, timestep: usize) -> Option<&TimeSample> {
        if self.0.is_empty() {
            return None;
        }
        Some(&self.0[timestep.min(self.0.len() - 1)])
    }
}

impl From<Vec<TimeSample>> for Trajectory {
    fn from(samples: Vec<TimeSample>) -> Self {
        Trajectory(samples)
    }
}

impl FromIterator<TimeSample> for Trajectory {
    fn from_iter<I: IntoIterator<Item = TimeSample>>(iter: I) -> Self {
        Trajectory(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TimeSample;
    type IntoIter = std::slice::Iter<'a, TimeSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
