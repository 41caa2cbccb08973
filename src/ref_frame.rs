//! # Reference-frame conversion
//!
//! The engine does all orbital math in the **heliocentric ecliptic frame**
//! (Sun-centered, XY-plane on Earth's orbital plane, Z toward the north
//! ecliptic pole). Downstream consumers (the scene graph, distance checks
//! against externally converted samples) use a **render frame** obtained by
//! the single axis permutation `(x, y, z) → (x, z, −y)`.
//!
//! That permutation must be applied exactly once between the ecliptic math
//! and anything downstream. Mixing the two frames silently is the classic
//! correctness bug in this kind of pipeline, so the frames are distinct
//! types: [`EclipticVec`] and [`RenderVec`] only meet through the explicit
//! conversions below, which are exact inverses of each other.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A Cartesian vector in the heliocentric ecliptic frame (AU or AU/day).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticVec(pub Vector3<f64>);

/// A Cartesian vector in the render frame (AU or AU/day).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderVec(pub Vector3<f64>);

impl EclipticVec {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        EclipticVec(Vector3::new(x, y, z))
    }

    /// Canonical ecliptic → render mapping: `(x, y, z) → (x, z, −y)`.
    pub fn to_render(&self) -> RenderVec {
        RenderVec(Vector3::new(self.0.x, self.0.z, -self.0.y))
    }

    /// Euclidean norm (heliocentric distance for positions, speed for velocities).
    pub fn norm(&self) -> f64 {
        self.0.norm()
    }
}

impl RenderVec {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        RenderVec(Vector3::new(x, y, z))
    }

    /// Exact inverse of [`EclipticVec::to_render`]: `(x, y, z) → (x, −z, y)`.
    pub fn to_ecliptic(&self) -> EclipticVec {
        EclipticVec(Vector3::new(self.0.x, -self.0.z, self.0.y))
    }

    pub fn norm(&self) -> f64 {
        self.0.norm()
    }
}

impl From<Vector3<f64>> for EclipticVec {
    fn from(v: Vector3<f64>) -> Self {
        EclipticVec(v)
    }
}

impl From<Vector3<f64>> for RenderVec {
    fn from(v: Vector3<f64>) -> Self {
        RenderVec(v)
    }
}

/// Heliocentric state vector in the ecliptic frame.
///
/// Position in AU, velocity in AU/day. Produced by the propagator or built
/// from externally fetched ephemeris records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticState {
    pub position: EclipticVec,
    pub velocity: EclipticVec,
}

impl EclipticState {
    pub fn new(position: EclipticVec, velocity: EclipticVec) -> Self {
        EclipticState { position, velocity }
    }

    /// Heliocentric distance `r` in AU.
    pub fn heliocentric_distance(&self) -> f64 {
        self.position.norm()
    }

    /// Speed `|v|` in AU/day.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

#[cfg(test)]
mod ref_frame_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn render_round_trip_is_identity() {
        let cases = [
            EclipticVec::new(1.0, 2.0, 3.0),
            EclipticVec::new(-0.5, 0.0, 7.25),
            EclipticVec::new(0.0, 0.0, 0.0),
            EclipticVec::new(1e-9, -1e9, 42.0),
        ];
        for v in cases {
            let back = v.to_render().to_ecliptic();
            assert_abs_diff_eq!(back.0.x, v.0.x, epsilon = 0.0);
            assert_abs_diff_eq!(back.0.y, v.0.y, epsilon = 0.0);
            assert_abs_diff_eq!(back.0.z, v.0.z, epsilon = 0.0);
        }
    }

    #[test]
    fn render_mapping_permutes_axes() {
        let r = EclipticVec::new(1.0, 2.0, 3.0).to_render();
        assert_eq!(r, RenderVec::new(1.0, 3.0, -2.0));
    }

    #[test]
    fn norm_is_frame_invariant() {
        let v = EclipticVec::new(3.0, -4.0, 12.0);
        assert_abs_diff_eq!(v.norm(), v.to_render().norm(), epsilon = 1e-15);
    }
}
