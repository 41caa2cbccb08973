//! # Reference body registry
//!
//! An explicit, immutable configuration structure mapping body names to
//! their display color, catalog metadata, and J2000 orbital elements. This
//! replaces the ambient global name→color / name→constants tables of the
//! original visualization layer: the registry is built once, passed into the
//! engine/UI boundary, and adding a body means adding one entry here rather
//! than touching hidden state.
//!
//! Propagation through these elements is the documented fallback path for a
//! body that has no fetched ephemeris samples covering a requested instant.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::BodyName;
use crate::heliotrace_errors::HeliotraceError;
use crate::keplerian_element::KeplerianElements;

/// Static configuration of one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Catalog designation: JPL Horizons ID for planets (e.g. `"399"`),
    /// provisional designation for interstellar objects (e.g. `"C/2019 Q4"`).
    pub designation: String,
    /// Display color as a hex string, e.g. `"#3b82f6"`.
    pub color: String,
    /// Discovery year, for objects that were discovered rather than always known.
    pub discovery_year: Option<u16>,
    pub description: Option<String>,
    pub elements: KeplerianElements,
}

/// Immutable, insertion-ordered name → [`BodyConfig`] registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyRegistry {
    bodies: IndexMap<BodyName, BodyConfig, ahash::RandomState>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the nine major-planet entries (J2000 mean elements,
    /// heliocentric ecliptic) and the three known interstellar objects.
    pub fn builtin() -> Self {
        let mut registry = BodyRegistry::new();
        for (name, config) in builtin_entries() {
            registry.insert(name, config);
        }
        registry
    }

    pub fn insert(&mut self, name: impl Into<BodyName>, config: BodyConfig) {
        self.bodies.insert(name.into(), config);
    }

    pub fn get(&self, name: &str) -> Option<&BodyConfig> {
        self.bodies.get(name)
    }

    /// Look a body up by name or by catalog designation.
    ///
    /// Errors
    /// ------
    /// * [`HeliotraceError::UnknownBody`] when neither matches.
    pub fn resolve(&self, name_or_designation: &str) -> Result<&BodyConfig, HeliotraceError> {
        if let Some(config) = self.bodies.get(name_or_designation) {
            return Ok(config);
        }
        self.bodies
            .values()
            .find(|config| config.designation == name_or_designation)
            .ok_or_else(|| HeliotraceError::UnknownBody(name_or_designation.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &BodyName> {
        self.bodies.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BodyName, &BodyConfig)> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

fn planet(
    designation: &str,
    color: &str,
    a: f64,
    e: f64,
    i: f64,
    node: f64,
    peri: f64,
    mean_anomaly: f64,
    period: f64,
) -> BodyConfig {
    BodyConfig {
        designation: designation.to_string(),
        color: color.to_string(),
        discovery_year: None,
        description: None,
        elements: KeplerianElements {
            epoch: crate::constants::T2000,
            semi_major_axis: a,
            eccentricity: e,
            inclination: i,
            ascending_node_longitude: node,
            periapsis_argument: peri,
            mean_anomaly,
            period: Some(period),
        },
    }
}

fn interstellar(
    designation: &str,
    color: &str,
    discovery_year: u16,
    description: &str,
    epoch: f64,
    a: f64,
    e: f64,
    i: f64,
    node: f64,
    peri: f64,
    mean_anomaly: f64,
) -> BodyConfig {
    BodyConfig {
        designation: designation.to_string(),
        color: color.to_string(),
        discovery_year: Some(discovery_year),
        description: Some(description.to_string()),
        elements: KeplerianElements {
            epoch,
            semi_major_axis: a,
            eccentricity: e,
            inclination: i,
            ascending_node_longitude: node,
            periapsis_argument: peri,
            mean_anomaly,
            period: None,
        },
    }
}

/// J2000 mean elements for the planets (angles in degrees, a in AU, P in
/// days); hyperbolic element sets for the interstellar objects at their
/// respective epochs (MJD).
fn builtin_entries() -> Vec<(&'static str, BodyConfig)> {
    vec![
        (
            "Mercury",
            planet("199", "#9e9e9e", 0.387098, 0.205630, 7.0047, 48.3313, 77.4561, 252.2509, 87.969),
        ),
        (
            "Venus",
            planet("299", "#e6c229", 0.723332, 0.006773, 3.3946, 76.6799, 131.5637, 181.9798, 224.701),
        ),
        (
            "Earth",
            planet("399", "#3b82f6", 1.0, 0.0167, 0.00005, -11.26, 102.95, 100.46, 365.256),
        ),
        (
            "Mars",
            planet("499", "#c1440e", 1.523688, 0.093405, 1.8497, 49.5574, 336.0590, 355.4533, 686.980),
        ),
        (
            "Jupiter",
            planet("599", "#d8ca9d", 5.20256, 0.048498, 1.3030, 100.4542, 14.7539, 34.4044, 4332.589),
        ),
        (
            "Saturn",
            planet("699", "#e3dccb", 9.55475, 0.055546, 2.4886, 113.6634, 92.8680, 49.9443, 10759.22),
        ),
        (
            "Uranus",
            planet("799", "#4fd0e7", 19.18171, 0.047318, 0.7733, 74.0005, 170.9642, 313.2322, 30685.4),
        ),
        (
            "Neptune",
            planet("899", "#4b70dd", 30.05826, 0.008606, 1.7700, 131.7806, 44.9714, 304.8800, 60189.0),
        ),
        (
            "Pluto",
            planet("999", "#9ca6b7", 39.48168, 0.248808, 17.14175, 110.30347, 224.06676, 238.92881, 90560.0),
        ),
        (
            "1I/Oumuamua",
            interstellar(
                "A/2017 U1",
                "#e74c3c",
                2017,
                "First known interstellar object to pass through our solar system",
                58080.0,
                -1.27234,
                1.20113,
                122.7417,
                24.5997,
                241.8105,
                51.1576,
            ),
        ),
        (
            "2I/Borisov",
            interstellar(
                "C/2019 Q4",
                "#2ecc71",
                2019,
                "Second interstellar object and first interstellar comet",
                // Epoch one day past the 2019-Dec-08 perihelion.
                58826.0,
                -0.85151,
                3.35648,
                44.0526,
                308.1490,
                209.1240,
                1.2546,
            ),
        ),
        (
            "3I/ATLAS",
            interstellar(
                "C/2025 N1",
                "#f39c12",
                2025,
                "Third interstellar object - comet discovered in July 2025",
                // Epoch at the 2025-Oct-29 perihelion, so M = 0 there.
                60977.0,
                -0.26390,
                6.1398,
                175.1130,
                322.1600,
                128.0100,
                0.0,
            ),
        ),
    ]
}

#[cfg(test)]
mod bodies_test {
    use super::*;
    use crate::propagator::propagate;

    #[test]
    fn builtin_has_planets_then_interstellar_in_order() {
        let registry = BodyRegistry::builtin();
        assert_eq!(registry.len(), 12);
        let names: Vec<&BodyName> = registry.names().collect();
        assert_eq!(names[0], "Mercury");
        assert_eq!(names[2], "Earth");
        assert_eq!(names[9], "1I/Oumuamua");
        assert_eq!(names[11], "3I/ATLAS");
    }

    #[test]
    fn resolve_by_name_and_designation() {
        let registry = BodyRegistry::builtin();
        assert_eq!(registry.resolve("Earth").unwrap().designation, "399");
        assert_eq!(
            registry.resolve("C/2019 Q4").unwrap().discovery_year,
            Some(2019)
        );
        assert!(matches!(
            registry.resolve("Planet X"),
            Err(HeliotraceError::UnknownBody(_))
        ));
    }

    #[test]
    fn every_builtin_element_set_is_coherent() {
        let registry = BodyRegistry::builtin();
        for (name, config) in registry.iter() {
            assert!(
                config.elements.validate().is_ok(),
                "incoherent elements for {name}"
            );
        }
    }

    #[test]
    fn every_builtin_body_propagates_at_epoch() {
        let registry = BodyRegistry::builtin();
        for (name, config) in registry.iter() {
            let state = propagate(&config.elements, 0.0).unwrap();
            let r = state.heliocentric_distance();
            assert!(r > 0.0 && r.is_finite(), "bad epoch distance for {name}: {r}");
        }
    }

    #[test]
    fn interstellar_entries_are_hyperbolic() {
        let registry = BodyRegistry::builtin();
        for name in ["1I/Oumuamua", "2I/Borisov", "3I/ATLAS"] {
            let config = registry.get(name).unwrap();
            assert!(config.elements.is_hyperbolic(), "{name}");
            assert!(config.elements.period.is_none(), "{name}");
        }
    }
}
