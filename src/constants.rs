//! # Constants and type definitions for heliotrace
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `heliotrace` library.
//!
//! ## Overview
//!
//! - Heliocentric gravitational parameter and unit conversions (degrees ↔ radians, AU ↔ km)
//! - The J2000.0 reference epoch in MJD
//! - Core type aliases used across the crate
//! - The container type that groups per-body trajectories
//!
//! Canonical units everywhere in the engine: distances in **AU**, velocities in
//! **AU/day**, angles in **degrees** until the point where they enter a
//! trigonometric function (conversion to radians is explicit and local), and
//! epochs in **MJD** days.

use indexmap::IndexMap;

use crate::trajectories::Trajectory;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Heliocentric gravitational parameter μ = GM☉ in AU³/day²
pub const GAUSS_MU: f64 = 2.9591220828559093e-4;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
/// Julian Date (days)
pub type JulianDay = f64;

/// Name or designation identifying one body (e.g. `"Earth"`, `"2I/Borisov"`).
pub type BodyName = String;

/// A full set of trajectories for multiple bodies.
///
/// The key is the [`BodyName`]; the value is the time-ordered [`Trajectory`]
/// of that body. Uses an [`IndexMap`](https://docs.rs/indexmap) with
/// [`ahash`](https://docs.rs/ahash) hashing: iteration order is the insertion
/// order of the bodies, which the merge step is required to preserve.
pub type TrajectorySet = IndexMap<BodyName, Trajectory, ahash::RandomState>;
