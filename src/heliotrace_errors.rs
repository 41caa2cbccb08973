use thiserror::Error;

/// Error taxonomy of the trajectory engine.
///
/// Every failure is local and synchronous: the engine surfaces it to the
/// caller immediately and never substitutes a default value (e.g. a clamped
/// eccentricity) on its own. Retry semantics belong to the external fetch
/// layer, not here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeliotraceError {
    #[error("Invalid eccentricity for Kepler solver: {0}")]
    InvalidEccentricity(f64),

    #[error("Degenerate heliocentric distance: {0} AU")]
    DegenerateDistance(f64),

    #[error("Trajectory merge called with zero bodies")]
    EmptyTrajectorySet,

    #[error("Trajectory for body '{0}' contains no samples")]
    EmptyTrajectory(String),

    #[error("Incoherent orbital elements: {0}")]
    IncoherentElements(String),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Unknown body: {0}")]
    UnknownBody(String),
}
