pub mod animation;
pub mod bodies;
pub mod constants;
pub mod energy;
pub mod heliotrace_errors;
pub mod kepler;
pub mod keplerian_element;
pub mod propagator;
pub mod ref_frame;
pub mod time;
pub mod trajectories;

pub use constants::{BodyName, TrajectorySet};
pub use heliotrace_errors::HeliotraceError;
pub use keplerian_element::KeplerianElements;
pub use ref_frame::{EclipticState, EclipticVec, RenderVec};
pub use trajectories::{MergedTimeline, TimeSample, Trajectory};
