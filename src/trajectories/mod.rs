//! # Trajectories: per-body time series and timeline synthesis
//!
//! Storage and reconciliation of heterogeneous trajectory sources. The
//! central container is [`TrajectorySet`](crate::constants::TrajectorySet),
//! an insertion-ordered map bucketing time-ordered [`TimeSample`]s per body.
//!
//! Modules
//! -----------------
//! * [`sample`](crate::trajectories::sample) – The atomic [`TimeSample`] record and the
//!   per-body [`Trajectory`] sequence with its clamp-to-nearest-end lookup.
//! * [`merger`](crate::trajectories::merger) – Re-indexing of multiple trajectories onto one
//!   integer timestep domain ([`MergedTimeline`]) plus stride downsampling
//!   for display geometry.
//!
//! Data model
//! -----------------
//! * **Key:** body name or designation (insertion order preserved).
//! * **Value:** [`Trajectory`], strictly time-ordered, immutable once built.
//!   Sources give no deduplication guarantee and timestamps are never
//!   assumed unique across bodies.
//! * Merging derives a fresh [`MergedTimeline`]; inputs are never mutated,
//!   and the timeline is rebuilt from scratch whenever the body set or time
//!   range changes (never patched incrementally).
//!
//! Units
//! -----------------
//! Positions in AU (heliocentric ecliptic on input, render frame on merged
//! output), velocities in AU/day, epochs in MJD.

pub mod merger;
pub mod sample;

pub use merger::{downsample_indices, merge, MergedTimeline, MergedTrack, TimelinePoint};
pub use sample::{TimeSample, Trajectory};
