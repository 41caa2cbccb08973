//! # Kepler equation solvers
//!
//! Converts a mean anomaly and an eccentricity into the eccentric (or
//! hyperbolic) anomaly and the true anomaly.
//!
//! Two branches are provided and the **caller selects the branch from `e`**:
//!
//! - [`solve_elliptic`] — fixed-point iteration on `M = E − e·sin(E)` for
//!   `0 ≤ e < 1`, run for a **fixed 10 iterations with no convergence check**.
//!   The iteration count is part of the contract: identical input yields
//!   bit-identical output across reimplementations. Convergence degrades as
//!   `e → 1`; this is a documented boundary of the fixed-count scheme.
//! - [`solve_hyperbolic`] — damped Newton iteration on `M = e·sinh(H) − H`
//!   for `e > 1`.

use crate::constants::{Degree, Radian, DPI};
use crate::heliotrace_errors::HeliotraceError;

/// Number of fixed-point iterations of the elliptic solver. Contractual, not tunable.
pub const ELLIPTIC_ITERATIONS: usize = 10;

/// Iteration cap for the hyperbolic Newton solver.
const HYPERBOLIC_MAX_ITERATIONS: usize = 50;

/// Newton step tolerance for the hyperbolic branch (radians).
const HYPERBOLIC_TOL: f64 = 1e-12;

/// Normalize an angle in degrees into `[0, 360)`.
pub fn principal_angle_deg(angle: Degree) -> Degree {
    angle.rem_euclid(360.0)
}

/// Normalize an angle in radians into `[0, 2π)`.
pub fn principal_angle(angle: Radian) -> Radian {
    angle.rem_euclid(DPI)
}

/// Solve the elliptic Kepler equation `M = E − e·sin(E)`.
///
/// Fixed-point scheme `E_{k+1} = M + e·sin(E_k)` seeded with `E_0 = M`, run
/// for exactly [`ELLIPTIC_ITERATIONS`] iterations without a convergence
/// check.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians, any real value
/// * `eccentricity`: eccentricity `e`, must lie in `[0, 1)`
///
/// Return
/// ------
/// * Eccentric anomaly `E` in radians such that `M ≈ E − e·sin(E)`.
///
/// Errors
/// ------
/// * [`HeliotraceError::InvalidEccentricity`] if `e` is NaN, negative, or `≥ 1`
///   (hyperbolic elements must go through [`solve_hyperbolic`]).
pub fn solve_elliptic(mean_anomaly: Radian, eccentricity: f64) -> Result<Radian, HeliotraceError> {
    if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
        return Err(HeliotraceError::InvalidEccentricity(eccentricity));
    }

    let mut ecc_anomaly = mean_anomaly;
    for _ in 0..ELLIPTIC_ITERATIONS {
        ecc_anomaly = mean_anomaly + eccentricity * ecc_anomaly.sin();
    }
    Ok(ecc_anomaly)
}

/// Solve the hyperbolic Kepler equation `M = e·sinh(H) − H`.
///
/// Damped Newton iteration: steps that would flip the sign of `H` are halved
/// to keep the iterate on the correct branch. The seed follows the standard
/// asymptotic guess `H_0 = asinh(M / e)`.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: hyperbolic mean anomaly `M` in radians, any real value
///   (unbounded; hyperbolic anomalies are **not** periodic)
/// * `eccentricity`: eccentricity `e`, must be `> 1`
///
/// Return
/// ------
/// * Hyperbolic anomaly `H` in radians.
///
/// Errors
/// ------
/// * [`HeliotraceError::InvalidEccentricity`] if `e` is NaN or `≤ 1`.
pub fn solve_hyperbolic(mean_anomaly: Radian, eccentricity: f64) -> Result<Radian, HeliotraceError> {
    if !eccentricity.is_finite() || eccentricity <= 1.0 {
        return Err(HeliotraceError::InvalidEccentricity(eccentricity));
    }

    let mut h = (mean_anomaly / eccentricity).asinh();
    for _ in 0..HYPERBOLIC_MAX_ITERATIONS {
        let f = eccentricity * h.sinh() - h - mean_anomaly;
        let fp = eccentricity * h.cosh() - 1.0;
        let dh = -f / fp;

        let h1 = h + dh;
        h = if h1 * h < 0.0 { h / 2.0 } else { h1 };

        if dh.abs() < HYPERBOLIC_TOL {
            break;
        }
    }
    Ok(h)
}

/// True anomaly `ν` from the eccentric anomaly `E` (elliptic branch).
///
/// `ν = 2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2))`
pub fn true_anomaly(ecc_anomaly: Radian, eccentricity: f64) -> Radian {
    let half = ecc_anomaly / 2.0;
    2.0 * f64::atan2(
        (1.0 + eccentricity).sqrt() * half.sin(),
        (1.0 - eccentricity).sqrt() * half.cos(),
    )
}

/// True anomaly `ν` from the hyperbolic anomaly `H` (hyperbolic branch).
///
/// `ν = 2·atan(√((e+1)/(e−1))·tanh(H/2))`
pub fn hyperbolic_true_anomaly(hyp_anomaly: Radian, eccentricity: f64) -> Radian {
    let factor = ((eccentricity + 1.0) / (eccentricity - 1.0)).sqrt();
    2.0 * (factor * (hyp_anomaly / 2.0).tanh()).atan()
}
