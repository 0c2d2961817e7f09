use std::{collections::HashMap, sync::Arc};

mod data;
mod models;
pub use models::*;

use crate::{
    Error,
    shared::{self, geo::Coordinate},
};

type IdToIndex = HashMap<Arc<str>, usize>;
type LineToIndexes = HashMap<Line, Box<[usize]>>;

/// Static registry of stations, per-line routes and track geometry.
///
/// Built once at startup and never mutated; lookups by id return `None`
/// rather than failing so callers can degrade silently.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub stations: Box<[Station]>,
    station_lookup: Arc<IdToIndex>,
    routes: Arc<LineToIndexes>,
}

impl Catalog {
    /// Builds the fixed suburban network. Fails only when a route
    /// references a station id missing from the registry.
    pub fn new() -> Result<Self, Error> {
        let stations = data::stations();
        let mut station_lookup: IdToIndex = HashMap::new();
        for (i, station) in stations.iter().enumerate() {
            station_lookup.insert(station.id.clone(), i);
        }

        let mut routes: LineToIndexes = HashMap::new();
        for (line, ids) in data::routes() {
            let mut indexes = Vec::with_capacity(ids.len());
            for id in ids {
                let index = station_lookup
                    .get(*id)
                    .ok_or_else(|| Error::UnknownStation(id.to_string()))?;
                indexes.push(*index);
            }
            routes.insert(line, indexes.into());
        }

        Ok(Self {
            stations: stations.into(),
            station_lookup: station_lookup.into(),
            routes: routes.into(),
        })
    }

    /// Get a station with the given id.
    /// If no station is found with the given id None is returned.
    pub fn station_by_id(&self, id: &str) -> Option<&Station> {
        let station_index = self.station_lookup.get(id)?;
        Some(&self.stations[*station_index])
    }

    /// The stations of a line's route in canonical DOWN order.
    pub fn route(&self, line: Line) -> Vec<&Station> {
        match self.routes.get(&line) {
            Some(indexes) => indexes.iter().map(|i| &self.stations[*i]).collect(),
            None => Vec::new(),
        }
    }

    /// Display polyline for a line's track. Independent of station data.
    pub fn track(&self, line: Line) -> &'static [Coordinate] {
        data::track(line)
    }

    /// Does a ranked search on all the stations, comparing their name to
    /// the needle.
    pub fn search_stations_by_name<'a>(&'a self, needle: &str) -> Vec<&'a Station> {
        shared::search(needle, &self.stations)
    }
}
