use railpulse::{
    fleet::{Train, UNKNOWN_ETA},
    schedule::ScheduleEntry,
    shared::geo::Coordinate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntryDto {
    pub station_id: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub platform: String,
}

impl ScheduleEntryDto {
    pub fn from(entry: &ScheduleEntry) -> Self {
        Self {
            station_id: entry.station_id.to_string(),
            arrival_time: entry.arrival_time.to_string(),
            departure_time: entry.departure_time.to_string(),
            platform: entry.platform.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainDto {
    pub id: String,
    pub name: String,
    pub line: String,
    pub source: String,
    pub destination: String,
    pub coordinate: Coordinate,
    pub heading: f64,
    pub status: String,
    pub crowd_level: String,
    pub speed_kmh: f64,
    pub next_station_id: String,
    /// Planned arrival at the next stop, or `--` past the end of the run.
    pub eta: String,
    pub next_stations: Vec<ScheduleEntryDto>,
}

impl TrainDto {
    pub fn from(train: &Train) -> Self {
        let next_stations: Vec<_> = train
            .next_stations(5)
            .iter()
            .map(ScheduleEntryDto::from)
            .collect();
        let eta = match next_stations.first() {
            Some(stop) => train.eta_for_station(&stop.station_id).to_string(),
            None => UNKNOWN_ETA.to_string(),
        };
        Self {
            id: train.id.to_string(),
            name: train.name.to_string(),
            line: train.line.to_string(),
            source: train.source.to_string(),
            destination: train.destination.to_string(),
            coordinate: train.coordinate,
            heading: train.heading,
            status: train.status.to_string(),
            crowd_level: train.crowd_level.to_string(),
            speed_kmh: train.speed_kmh,
            next_station_id: train.next_station_id.to_string(),
            eta,
            next_stations,
        }
    }
}
