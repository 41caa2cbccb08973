use serde::{Deserialize, Serialize};

use crate::constants::{Degree, MJD, GAUSS_MU, RADEG};
use crate::heliotrace_errors::HeliotraceError;

/// Classical Keplerian orbital elements.
///
/// Units & conventions
/// --------------------
/// * `epoch`: MJD (Modified Julian Date) of the element set
/// * `semi_major_axis`: AU, **negative for hyperbolic orbits**
/// * `eccentricity`: unitless, ≥ 0
/// * `inclination`, `ascending_node_longitude`, `periapsis_argument`,
///   `mean_anomaly`: degrees
/// * `period`: days, `None` for unbound orbits
///
/// Degrees and days are the canonical units of this engine; conversion to
/// radians happens locally at the trigonometric call sites.
///
/// Exactly one mean-motion source must be coherent per element set: either a
/// finite positive `period` (elliptic, `e < 1`), or a hyperbolic pair
/// `e > 1` / `a < 0` from which the mean motion is derived via
/// `n = √(μ/(−a)³)`. [`KeplerianElements::mean_motion`] enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub epoch: MJD,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub ascending_node_longitude: Degree,
    pub periapsis_argument: Degree,
    pub mean_anomaly: Degree,
    pub period: Option<f64>,
}

impl KeplerianElements {
    /// `true` when the element set describes an unbound (hyperbolic) orbit.
    pub fn is_hyperbolic(&self) -> bool {
        self.eccentricity > 1.0
    }

    /// Check coherence of the element set.
    ///
    /// Errors
    /// ------
    /// * [`HeliotraceError::InvalidEccentricity`] for `e < 0` or NaN.
    /// * [`HeliotraceError::IncoherentElements`] when neither mean-motion
    ///   source is usable: no positive period for an elliptic set, or a
    ///   hyperbolic eccentricity paired with a non-negative semi-major axis.
    ///   `e = 1` exactly (parabolic) is rejected as well: a parabola has no
    ///   finite semi-major axis and needs a perihelion-based formulation
    ///   this engine does not carry.
    pub fn validate(&self) -> Result<(), HeliotraceError> {
        if !self.eccentricity.is_finite() || self.eccentricity < 0.0 {
            return Err(HeliotraceError::InvalidEccentricity(self.eccentricity));
        }
        if self.eccentricity == 1.0 {
            return Err(HeliotraceError::IncoherentElements(
                "parabolic elements (e = 1) have no finite semi-major axis or period".into(),
            ));
        }
        if self.is_hyperbolic() {
            if self.semi_major_axis >= 0.0 {
                return Err(HeliotraceError::IncoherentElements(format!(
                    "hyperbolic eccentricity {} requires a negative semi-major axis, got {}",
                    self.eccentricity, self.semi_major_axis
                )));
            }
        } else {
            match self.period {
                Some(p) if p > 0.0 => {}
                _ => {
                    return Err(HeliotraceError::IncoherentElements(format!(
                        "elliptic elements (e = {}) require a positive period, got {:?}",
                        self.eccentricity, self.period
                    )));
                }
            }
        }
        Ok(())
    }

    /// Mean motion `n` in degrees per day.
    ///
    /// Elliptic sets use `n = 360 / P`; hyperbolic sets derive the mean
    /// motion from the orbital energy, `n = √(μ/(−a)³)` converted to
    /// degrees.
    ///
    /// Errors
    /// ------
    /// Same coherence errors as [`KeplerianElements::validate`].
    pub fn mean_motion(&self) -> Result<Degree, HeliotraceError> {
        self.validate()?;
        if self.is_hyperbolic() {
            let n_rad = (GAUSS_MU / (-self.semi_major_axis).powi(3)).sqrt();
            Ok(n_rad / RADEG)
        } else {
            // validate() guarantees the period is present and positive
            let period = self.period.ok_or_else(|| {
                HeliotraceError::IncoherentElements("missing period for elliptic orbit".into())
            })?;
            Ok(360.0 / period)
        }
    }

    /// Perihelion distance `q` in AU, valid for both branches.
    pub fn perihelion_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }
}

impl std::fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "epoch (MJD)      : {}", self.epoch)?;
        writeln!(f, "a (AU)           : {}", self.semi_major_axis)?;
        writeln!(f, "e                : {}", self.eccentricity)?;
        writeln!(f, "i (deg)          : {}", self.inclination)?;
        writeln!(f, "Ω (deg)          : {}", self.ascending_node_longitude)?;
        writeln!(f, "ω (deg)          : {}", self.periapsis_argument)?;
        writeln!(f, "M (deg)          : {}", self.mean_anomaly)?;
        match self.period {
            Some(p) => writeln!(f, "P (days)         : {p}"),
            None => writeln!(f, "P (days)         : unbound"),
        }
    }
}
