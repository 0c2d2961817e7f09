use railpulse::{
    catalog::{Line, Station},
    shared::geo::Coordinate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationDto {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
}

impl StationDto {
    pub fn from(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.to_string(),
            coordinate: station.coordinate,
        }
    }
}

/// Display polyline for one line, for map rendering only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDto {
    pub line: String,
    pub points: Vec<Coordinate>,
}

impl TrackDto {
    pub fn from(line: Line, points: &[Coordinate]) -> Self {
        Self {
            line: line.to_string(),
            points: points.to_vec(),
        }
    }
}
