use std::{fmt::Display, sync::Arc};

use crate::{
    catalog::Line,
    schedule::{Direction, ScheduleEntry},
    shared::{Searchable, geo::Coordinate},
};

/// Sentinel ETA shown when a station is not part of a train's run.
pub const UNKNOWN_ETA: &str = "--";

/// Punctuality indicator, re-rolled on every station arrival.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TrainStatus {
    #[default]
    OnTime,
    Delayed,
    Stopped,
}

impl Display for TrainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainStatus::OnTime => f.write_str("ON_TIME"),
            TrainStatus::Delayed => f.write_str("DELAYED"),
            TrainStatus::Stopped => f.write_str("STOPPED"),
        }
    }
}

/// Cosmetic passenger-density level, fixed at creation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CrowdLevel {
    #[default]
    Low,
    Medium,
    High,
    SuperDense,
}

impl CrowdLevel {
    pub const ALL: [CrowdLevel; 4] = [
        CrowdLevel::Low,
        CrowdLevel::Medium,
        CrowdLevel::High,
        CrowdLevel::SuperDense,
    ];
}

impl Display for CrowdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrowdLevel::Low => f.write_str("LOW"),
            CrowdLevel::Medium => f.write_str("MEDIUM"),
            CrowdLevel::High => f.write_str("HIGH"),
            CrowdLevel::SuperDense => f.write_str("SUPER_DENSE"),
        }
    }
}

/// The mutable root entity of the simulation.
///
/// Identity, endpoints and the schedule are fixed after creation; position,
/// heading, status and the schedule pointer change tick to tick. Shared
/// `Arc` fields keep the whole-fleet clone on every tick cheap.
#[derive(Debug, Default, Clone)]
pub struct Train {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub line: Line,
    pub direction: Direction,
    pub source: Arc<str>,
    pub destination: Arc<str>,
    pub schedule: Arc<[ScheduleEntry]>,
    /// Pointer into `schedule`: the station this train is heading for.
    pub next_station_id: Arc<str>,
    pub coordinate: Coordinate,
    /// Marker rotation in degrees, recomputed from the movement vector.
    pub heading: f64,
    pub status: TrainStatus,
    pub crowd_level: CrowdLevel,
    /// Decorative only; movement is driven by a fixed per-tick step.
    pub speed_kmh: f64,
    /// Lowercased id/name/endpoints blob matched by ranked search.
    pub search_text: Arc<str>,
}

impl Train {
    pub fn build_search_text(id: &str, name: &str, source: &str, destination: &str) -> Arc<str> {
        format!("{id} {name} {source} {destination}")
            .to_lowercase()
            .into()
    }

    /// Index of the pointer's entry within the schedule.
    fn pointer_index(&self) -> Option<usize> {
        self.schedule
            .iter()
            .position(|entry| entry.station_id == self.next_station_id)
    }

    /// Up to `count` upcoming entries, starting at the pointer.
    /// Empty when the pointer is not on this run.
    pub fn next_stations(&self, count: usize) -> &[ScheduleEntry] {
        match self.pointer_index() {
            Some(index) => {
                let end = (index + count).min(self.schedule.len());
                &self.schedule[index..end]
            }
            None => &[],
        }
    }

    /// Planned arrival time at `station_id`, or the `--` sentinel when the
    /// station is not part of this run. This is the scheduled time, not a
    /// live recomputation from position and speed.
    pub fn eta_for_station(&self, station_id: &str) -> &str {
        self.schedule
            .iter()
            .find(|entry| entry.station_id.as_ref() == station_id)
            .map(|entry| entry.arrival_time.as_ref())
            .unwrap_or(UNKNOWN_ETA)
    }
}

impl Searchable for Train {
    fn id(&self) -> &str {
        &self.id
    }

    fn haystack(&self) -> &str {
        &self.search_text
    }
}
