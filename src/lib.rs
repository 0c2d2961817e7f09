//! RailPulse: an in-memory simulation core for a live commuter-train map.
//!
//! The [`catalog`] holds the fixed geography, [`schedule`] rolls out each
//! train's stop plan, [`fleet`] builds and snapshots the train set, and
//! [`sim`] advances every train once per tick. All randomness flows through
//! an injected rng so a seeded session replays exactly.

use thiserror::Error;

pub mod catalog;
pub mod fleet;
pub mod schedule;
pub mod shared;
pub mod sim;

pub mod prelude {
    pub use crate::catalog::{Catalog, Line, Station};
    pub use crate::fleet::{CrowdLevel, Fleet, FleetConfig, Train, TrainStatus, build_fleet};
    pub use crate::schedule::{Direction, ScheduleEntry, build_schedule};
    pub use crate::shared::geo::Coordinate;
    pub use crate::shared::time::Time;
    pub use crate::sim::{EndOfLinePolicy, SimConfig, Simulation, advance};
}

/// Failures while assembling the static network or the initial fleet.
/// Simulation-time lookup misses are not errors; they degrade silently.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not find station with id: {0}")]
    UnknownStation(String),
    #[error("Route for line {0} has no stations")]
    EmptyRoute(catalog::Line),
}
