//! # Animation timestep clock
//!
//! A logical clock, not a wall clock: the host scheduler owns the current
//! timestep and calls [`advance_timestep`] at whatever cadence it likes. The
//! playback speed multiplier scales *how often* the host ticks, never the
//! step size — the engine walks every index and loops at the end of the
//! merged timeline, matching the replay behavior of the visualization.
//!
//! Concurrency: the current index is host-owned and must be driven by a
//! single controller (one UI event loop or one timer); nothing here holds
//! state or synchronizes.

use std::time::Duration;

/// Next timestep index for a timeline of `timeline_len` steps.
///
/// `current + 1`, wrapping to `0` once the end is reached — a loop, never a
/// clamp-and-stop. A zero-length timeline stays pinned at `0`.
pub fn advance_timestep(current: usize, timeline_len: usize) -> usize {
    if timeline_len == 0 || current + 1 >= timeline_len {
        0
    } else {
        current + 1
    }
}

/// Playback speed as a tick-cadence multiplier.
///
/// A rate of `2.0` means the host should call [`advance_timestep`] twice as
/// often; the indices themselves are never skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Smallest accepted multiplier; rates at or below zero are clamped here
    /// so [`PlaybackRate::tick_interval`] stays finite.
    pub const MIN: f64 = 1e-3;

    pub fn new(multiplier: f64) -> Self {
        if multiplier.is_finite() && multiplier > Self::MIN {
            PlaybackRate(multiplier)
        } else {
            PlaybackRate(Self::MIN)
        }
    }

    pub fn multiplier(&self) -> f64 {
        self.0
    }

    /// Interval between two host ticks for a given base frame interval.
    pub fn tick_interval(&self, base: Duration) -> Duration {
        base.div_f64(self.0)
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        PlaybackRate(1.0)
    }
}
