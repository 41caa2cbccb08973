//! # Timeline merge and downsampling
//!
//! Aligns several per-body trajectories of different lengths onto one shared
//! integer timestep domain `[0, N)` with `N` the longest input, so the host
//! animation can walk a single index across all bodies.
//!
//! Two deliberate policies, both observable and therefore contractual:
//!
//! * **Clamp, never interpolate** — a body without a sample at timestep `t`
//!   contributes its nearest available end sample (last one past the end of
//!   its data, first one before the data starts). No synthetic in-between
//!   values are ever produced.
//! * **Stride downsampling** — a display-geometry budget selects every
//!   `⌈L/K⌉`-th sample. Index 0 is always kept; the last sample survives
//!   only when the stride divides the length. Downsampling affects path
//!   geometry only and never the shared timestep domain: the
//!   current-position lookup always walks the full-resolution indices.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::{BodyName, TrajectorySet, MJD};
use crate::energy::{classify, specific_orbital_energy, OrbitClassification};
use crate::heliotrace_errors::HeliotraceError;
use crate::ref_frame::RenderVec;

/// One re-indexed point of a merged track, in the render frame.
///
/// Positions come out of the single canonical ecliptic → render conversion;
/// the scalar series (distance, speed, energy) are derived here once so
/// charting consumers never recompute them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Epoch of the underlying sample (MJD days).
    pub epoch: MJD,
    /// Render-frame position (AU).
    pub position: RenderVec,
    /// Render-frame velocity (AU/day).
    pub velocity: RenderVec,
    /// Heliocentric distance (AU).
    pub sun_distance: f64,
    /// Speed |v| (AU/day).
    pub speed: f64,
    /// Specific orbital energy ε (AU²/day²).
    pub specific_energy: f64,
}

/// The merged, re-indexed series of one body: exactly `N` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedTrack {
    points: Vec<TimelinePoint>,
    /// Number of native (un-clamped) samples the body contributed.
    native_len: usize,
}

impl MergedTrack {
    pub fn points(&self) -> &[TimelinePoint] {
        &self.points
    }

    /// Length of the body's own trajectory before re-indexing.
    pub fn native_len(&self) -> usize {
        self.native_len
    }

    pub fn point(&self, timestep: usize) -> Option<&TimelinePoint> {
        self.points.get(timestep)
    }

    /// Downsampled path geometry under a point budget.
    ///
    /// The stride filter runs over the body's **native** samples so clamped
    /// tail repeats do not pad the drawn path.
    pub fn display_path(&self, budget: usize) -> Vec<RenderVec> {
        downsample_indices(self.native_len, budget)
            .into_iter()
            .map(|i| self.points[i].position)
            .collect()
    }

    /// Orbit classification at one timestep, recomputed on demand.
    ///
    /// `None` for a timestep outside `[0, N)`. The distance was validated
    /// during the merge, so classification itself cannot fail here.
    pub fn classification_at(&self, timestep: usize) -> Option<OrbitClassification> {
        let point = self.points.get(timestep)?;
        classify(point.speed, point.sun_distance).ok()
    }
}

/// All bodies re-indexed to the shared timestep domain `[0, N)`.
///
/// Body order is the insertion order of the input set. Rebuilt from scratch
/// whenever the selected bodies or the time range change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedTimeline {
    tracks: IndexMap<BodyName, MergedTrack, ahash::RandomState>,
    len: usize,
}

impl MergedTimeline {
    /// Length `N` of the shared timestep domain.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bodies(&self) -> impl Iterator<Item = &BodyName> {
        self.tracks.keys()
    }

    pub fn track(&self, body: &str) -> Option<&MergedTrack> {
        self.tracks.get(body)
    }

    pub fn tracks(&self) -> impl Iterator<Item = (&BodyName, &MergedTrack)> {
        self.tracks.iter()
    }

    /// Render-frame position of `body` at `timestep`, if both exist.
    pub fn position_at(&self, body: &str, timestep: usize) -> Option<RenderVec> {
        self.tracks
            .get(body)?
            .point(timestep)
            .map(|point| point.position)
    }
}

/// Merge a set of per-body trajectories onto one integer timestep domain.
///
/// `N = max(len)` over all inputs; for each body and each `t < N` the output
/// point is the body's own `t`-th sample when it has one, otherwise the
/// clamp policy result. The inputs are read-only; the timeline is a fresh
/// derived value.
///
/// Errors
/// ------
/// * [`HeliotraceError::EmptyTrajectorySet`] when called with zero bodies.
/// * [`HeliotraceError::EmptyTrajectory`] when a body carries no samples:
///   there is no end to clamp to, and silently skipping the body would
///   desynchronize the caller's body set from the output.
/// * [`HeliotraceError::DegenerateDistance`] from the energy series when a
///   sample reports a non-positive heliocentric distance.
pub fn merge(trajectories: &TrajectorySet) -> Result<MergedTimeline, HeliotraceError> {
    if trajectories.is_empty() {
        return Err(HeliotraceError::EmptyTrajectorySet);
    }

    let len = trajectories
        .values()
        .map(|traj| traj.len())
        .max()
        .unwrap_or(0);

    let mut tracks: IndexMap<BodyName, MergedTrack, ahash::RandomState> =
        IndexMap::with_capacity_and_hasher(trajectories.len(), ahash::RandomState::default());

    for (name, trajectory) in trajectories {
        if trajectory.is_empty() {
            return Err(HeliotraceError::EmptyTrajectory(name.clone()));
        }

        let mut points = Vec::with_capacity(len);
        for timestep in 0..len {
            // Non-empty checked above, clamped() cannot return None here.
            let sample = trajectory
                .clamped(timestep)
                .ok_or_else(|| HeliotraceError::EmptyTrajectory(name.clone()))?;

            let sun_distance = sample.heliocentric_distance();
            let speed = sample.speed();
            let specific_energy = specific_orbital_energy(speed, sun_distance)?;

            points.push(TimelinePoint {
                epoch: sample.epoch,
                position: sample.position.to_render(),
                velocity: sample.velocity.to_render(),
                sun_distance,
                speed,
                specific_energy,
            });
        }

        tracks.insert(
            name.clone(),
            MergedTrack {
                points,
                native_len: trajectory.len(),
            },
        );
    }

    Ok(MergedTimeline { tracks, len })
}

/// Indices selected by the stride filter for a trajectory of `len` samples
/// under a `budget`-point budget.
///
/// Stride is `⌈len/budget⌉`; index 0 is always retained. The last index is
/// retained only when the stride divides `len − 1` evenly — a documented
/// boundary property of the filter, not a bug to compensate for.
pub fn downsample_indices(len: usize, budget: usize) -> Vec<usize> {
    if len == 0 || budget == 0 {
        return Vec::new();
    }
    if len <= budget {
        return (0..len).collect();
    }
    let stride = len.div_ceil(budget);
    (0..len).step_by(stride).collect()
}
