//! # Two-body orbit propagation
//!
//! Propagates a set of classical orbital elements to an arbitrary
//! epoch-relative time and returns the heliocentric ecliptic state vector.
//!
//! Propagation is a pure function: same `(elements, dt)` always yields the
//! same state, with no internal caching or mutation. The elliptic branch
//! goes through the fixed-iteration solver in [`crate::kepler`]; hyperbolic
//! element sets (`e > 1`, `a < 0`) use the Newton variant with the mean
//! motion derived from the orbital energy.

use nalgebra::Vector3;

use crate::constants::{GAUSS_MU, RADEG};
use crate::heliotrace_errors::HeliotraceError;
use crate::kepler::{
    hyperbolic_true_anomaly, principal_angle_deg, solve_elliptic, solve_hyperbolic, true_anomaly,
};
use crate::keplerian_element::KeplerianElements;
use crate::ref_frame::{EclipticState, EclipticVec};

/// Propagate orbital elements to `dt_days` after their reference epoch.
///
/// Steps, all in the canonical degree/AU/day units:
/// 1. `M = M0 + n·dt`, wrapped into `[0°, 360°)` on the elliptic branch
///    (hyperbolic mean anomalies are unbounded and stay unwrapped),
/// 2. Kepler solve for the eccentric (or hyperbolic) anomaly,
/// 3. perifocal position `(r·cos ν, r·sin ν)` with `r = a(1 − e·cos E)`
///    (elliptic) or `r = a(1 − e·cosh H)` (hyperbolic, `a < 0`),
/// 4. perifocal velocity `√(μ/p)·(−sin ν, e + cos ν)` with the semi-latus
///    rectum `p = a(1 − e²)`, valid on both branches,
/// 5. rotation by argument of perihelion `ω`, inclination `i`, and ascending
///    node `Ω` into the heliocentric ecliptic frame.
///
/// Errors
/// ------
/// * [`HeliotraceError::InvalidEccentricity`] / [`HeliotraceError::IncoherentElements`]
///   propagated from element validation and the solver branch selection.
pub fn propagate(
    elements: &KeplerianElements,
    dt_days: f64,
) -> Result<EclipticState, HeliotraceError> {
    let mean_motion = elements.mean_motion()?;
    let a = elements.semi_major_axis;
    let e = elements.eccentricity;

    let (radius, nu) = if elements.is_hyperbolic() {
        let mean_anomaly = (elements.mean_anomaly + mean_motion * dt_days) * RADEG;
        let hyp_anomaly = solve_hyperbolic(mean_anomaly, e)?;
        (a * (1.0 - e * hyp_anomaly.cosh()), hyperbolic_true_anomaly(hyp_anomaly, e))
    } else {
        let mean_anomaly =
            principal_angle_deg(elements.mean_anomaly + mean_motion * dt_days) * RADEG;
        let ecc_anomaly = solve_elliptic(mean_anomaly, e)?;
        (a * (1.0 - e * ecc_anomaly.cos()), true_anomaly(ecc_anomaly, e))
    };

    // Perifocal (orbital-plane) state, z = 0 by construction.
    let x_orb = radius * nu.cos();
    let y_orb = radius * nu.sin();

    let semi_latus = a * (1.0 - e * e);
    let v_scale = (GAUSS_MU / semi_latus).sqrt();
    let vx_orb = -v_scale * nu.sin();
    let vy_orb = v_scale * (e + nu.cos());

    let position = perifocal_to_ecliptic(elements, x_orb, y_orb);
    let velocity = perifocal_to_ecliptic(elements, vx_orb, vy_orb);

    Ok(EclipticState::new(position, velocity))
}

/// Propagate and return only the heliocentric ecliptic position.
pub fn propagate_position(
    elements: &KeplerianElements,
    dt_days: f64,
) -> Result<EclipticVec, HeliotraceError> {
    Ok(propagate(elements, dt_days)?.position)
}

/// Rotate a perifocal vector into the heliocentric ecliptic frame.
///
/// Textbook three-angle rotation `R_z(−Ω)·R_x(−i)·R_z(−ω)` applied to
/// `(x_orb, y_orb, 0)`:
///
/// ```text
/// x = (cosΩ·cosω − sinΩ·sinω·cosi)·x_orb + (−cosΩ·sinω − sinΩ·cosω·cosi)·y_orb
/// y = (sinΩ·cosω + cosΩ·sinω·cosi)·x_orb + (−sinΩ·sinω + cosΩ·cosω·cosi)·y_orb
/// z = (sinω·sini)·x_orb + (cosω·sini)·y_orb
/// ```
///
/// The sign conventions must match this form exactly or cross-body frames
/// mismatch downstream.
fn perifocal_to_ecliptic(elements: &KeplerianElements, x_orb: f64, y_orb: f64) -> EclipticVec {
    let (sin_w, cos_w) = (elements.periapsis_argument * RADEG).sin_cos();
    let (sin_i, cos_i) = (elements.inclination * RADEG).sin_cos();
    let (sin_o, cos_o) = (elements.ascending_node_longitude * RADEG).sin_cos();

    let x = (cos_o * cos_w - sin_o * sin_w * cos_i) * x_orb
        + (-cos_o * sin_w - sin_o * cos_w * cos_i) * y_orb;
    let y = (sin_o * cos_w + cos_o * sin_w * cos_i) * x_orb
        + (-sin_o * sin_w + cos_o * cos_w * cos_i) * y_orb;
    let z = (sin_w * sin_i) * x_orb + (cos_w * sin_i) * y_orb;

    EclipticVec(Vector3::new(x, y, z))
}

#[cfg(test)]
mod propagator_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn earth() -> KeplerianElements {
        KeplerianElements {
            epoch: 51544.5,
            semi_major_axis: 1.0,
            eccentricity: 0.0167,
            inclination: 0.00005,
            ascending_node_longitude: -11.26,
            periapsis_argument: 102.95,
            mean_anomaly: 100.46,
            period: Some(365.256),
        }
    }

    fn oumuamua() -> KeplerianElements {
        KeplerianElements {
            epoch: 58080.0,
            semi_major_axis: -1.27234,
            eccentricity: 1.20113,
            inclination: 122.7417,
            ascending_node_longitude: 24.5997,
            periapsis_argument: 241.8105,
            mean_anomaly: 51.1576,
            period: None,
        }
    }

    #[test]
    fn earth_at_epoch_is_near_one_au() {
        let state = propagate(&earth(), 0.0).unwrap();
        let r = state.heliocentric_distance();
        // Within Earth's perihelion/aphelion band.
        assert!((0.983..=1.017).contains(&r), "r = {r}");
    }

    #[test]
    fn earth_speed_is_near_circular_speed() {
        let state = propagate(&earth(), 0.0).unwrap();
        let v = state.speed();
        // ~29.8 km/s ≈ 0.0172 AU/day, within a few percent for e = 0.0167.
        assert_abs_diff_eq!(v, (GAUSS_MU / 1.0_f64).sqrt(), epsilon = 4e-4);
    }

    #[test]
    fn propagation_at_epoch_matches_direct_substitution() {
        let el = earth();
        let state = propagate(&el, 0.0).unwrap();

        // Direct substitution of M0 through the same formulas.
        let m = el.mean_anomaly * RADEG;
        let ecc = solve_elliptic(m, el.eccentricity).unwrap();
        let nu = true_anomaly(ecc, el.eccentricity);
        let r = el.semi_major_axis * (1.0 - el.eccentricity * ecc.cos());
        let expected = perifocal_to_ecliptic(&el, r * nu.cos(), r * nu.sin());

        assert_abs_diff_eq!(state.position.0.x, expected.0.x, epsilon = 1e-14);
        assert_abs_diff_eq!(state.position.0.y, expected.0.y, epsilon = 1e-14);
        assert_abs_diff_eq!(state.position.0.z, expected.0.z, epsilon = 1e-14);
    }

    #[test]
    fn elliptic_propagation_is_periodic() {
        let el = earth();
        let a = propagate(&el, 42.5).unwrap();
        let b = propagate(&el, 42.5 + 365.256).unwrap();
        assert_abs_diff_eq!(a.position.0.x, b.position.0.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.position.0.y, b.position.0.y, epsilon = 1e-9);
        assert_abs_diff_eq!(a.position.0.z, b.position.0.z, epsilon = 1e-9);
    }

    #[test]
    fn propagation_is_deterministic() {
        let el = earth();
        assert_eq!(propagate(&el, 17.0).unwrap(), propagate(&el, 17.0).unwrap());
    }

    #[test]
    fn hyperbolic_radius_is_positive_and_receding() {
        let el = oumuamua();
        let near = propagate(&el, 0.0).unwrap();
        let far = propagate(&el, 500.0).unwrap();
        assert!(near.heliocentric_distance() > 0.0);
        // 'Oumuamua is outbound after its 2017 perihelion.
        assert!(far.heliocentric_distance() > near.heliocentric_distance());
    }

    #[test]
    fn hyperbolic_state_is_unbound() {
        let el = oumuamua();
        let state = propagate(&el, 100.0).unwrap();
        let r = state.heliocentric_distance();
        let eps = state.speed().powi(2) / 2.0 - GAUSS_MU / r;
        assert!(eps > 0.0, "specific energy {eps} should be positive");
    }

    #[test]
    fn vis_viva_holds_along_the_orbit() {
        let el = earth();
        for dt in [0.0, 50.0, 120.0, 300.0] {
            let state = propagate(&el, dt).unwrap();
            let r = state.heliocentric_distance();
            let v2 = state.speed().powi(2);
            let expected = GAUSS_MU * (2.0 / r - 1.0 / el.semi_major_axis);
            assert_abs_diff_eq!(v2, expected, epsilon = 1e-8);
        }
    }

    #[test]
    fn near_zero_inclination_stays_in_ecliptic_plane() {
        let state = propagate(&earth(), 200.0).unwrap();
        assert!(state.position.0.z.abs() < 1e-5);
    }
}
