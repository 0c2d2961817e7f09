use std::{collections::HashMap, sync::Arc};

mod train;
pub use train::*;

use rand::Rng;
use tracing::debug;

use crate::{
    Error,
    catalog::{Catalog, Line, Station},
    schedule::{self, Direction},
    shared::{self, time::Time},
};

type IdToIndex = HashMap<Arc<str>, usize>;

/// Knobs for the one-time fleet build at startup.
pub struct FleetConfig {
    pub trains_per_line: usize,
    /// First departures leave from this hour; later pairs shift by 30 min.
    pub base_start_hour: u32,
    /// Chance a train is already running late when it spawns.
    pub initial_delay_probability: f64,
    /// Ids are sequential decimal strings counting up from here.
    pub first_train_id: u32,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            trains_per_line: 50,
            base_start_hour: 8,
            initial_delay_probability: 0.2,
            first_train_id: 90001,
        }
    }
}

/// One immutable snapshot of every train's state.
///
/// The simulator replaces the whole value on every tick, so holders of the
/// previous snapshot keep a stable reference to compare against.
#[derive(Debug, Default, Clone)]
pub struct Fleet {
    trains: Box<[Train]>,
    train_lookup: Arc<IdToIndex>,
}

impl Fleet {
    pub fn from_trains(trains: Vec<Train>) -> Self {
        let mut train_lookup: IdToIndex = HashMap::new();
        for (i, train) in trains.iter().enumerate() {
            train_lookup.insert(train.id.clone(), i);
        }
        Self {
            trains: trains.into(),
            train_lookup: train_lookup.into(),
        }
    }

    /// Successor snapshot with the same train ids in the same order.
    /// The id lookup is shared since no train is ever added or removed.
    pub(crate) fn rebuilt_from(&self, trains: Vec<Train>) -> Self {
        Self {
            trains: trains.into(),
            train_lookup: self.train_lookup.clone(),
        }
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Get a train with the given id.
    /// If no train is found with the given id None is returned.
    pub fn train_by_id(&self, id: &str) -> Option<&Train> {
        let train_index = self.train_lookup.get(id)?;
        Some(&self.trains[*train_index])
    }

    /// Does a ranked search on all the trains, comparing the needle to
    /// their id, name, source and destination.
    pub fn search_trains<'a>(&'a self, needle: &str) -> Vec<&'a Train> {
        shared::search(needle, &self.trains)
    }
}

/// Builds the initial fleet for every line. Runs once at startup; all
/// randomness comes from the injected `rng`.
pub fn build_fleet<R: Rng>(
    catalog: &Catalog,
    config: &FleetConfig,
    rng: &mut R,
) -> Result<Fleet, Error> {
    let mut trains = Vec::with_capacity(config.trains_per_line * Line::ALL.len());
    let mut id_counter = config.first_train_id;

    for line in Line::ALL {
        let route = catalog.route(line);
        if route.is_empty() {
            return Err(Error::EmptyRoute(line));
        }
        for i in 0..config.trains_per_line {
            trains.push(spawn_train(id_counter, line, &route, i, config, rng));
            id_counter += 1;
        }
        debug!("spawned {} trains on the {line} line", config.trains_per_line);
    }

    Ok(Fleet::from_trains(trains))
}

fn spawn_train<R: Rng>(
    id: u32,
    line: Line,
    route: &[&Station],
    index: usize,
    config: &FleetConfig,
    rng: &mut R,
) -> Train {
    let direction = if index % 2 == 0 {
        Direction::Up
    } else {
        Direction::Down
    };

    // Pairs of trains share a half-hour slot, jittered so departures do
    // not cluster on one instant.
    let start_hour = config.base_start_hour + index as u32 / 2;
    let start_minute = (index as u32 % 2) * 30 + rng.gen_range(0..15);
    let start = Time::from_hm(start_hour, start_minute);

    let schedule = schedule::build_schedule(start, route, direction, rng);

    let first = route[0];
    let last = route[route.len() - 1];
    let (start_station, end_station) = match direction {
        Direction::Down => (first, last),
        Direction::Up => (last, first),
    };

    let id: Arc<str> = id.to_string().into();
    let name: Arc<str> = if index % 3 == 0 {
        format!("{} Fast", end_station.name).into()
    } else {
        format!("{} Slow", end_station.name).into()
    };
    let source = start_station.name.clone();
    let destination = end_station.name.clone();

    // Spawn parked at the first stop, aimed at the second. A single-stop
    // schedule targets itself.
    let next_station_id = match schedule.get(1) {
        Some(entry) => entry.station_id.clone(),
        None => schedule[0].station_id.clone(),
    };

    let status = if rng.gen_bool(config.initial_delay_probability) {
        TrainStatus::Delayed
    } else {
        TrainStatus::OnTime
    };

    Train {
        search_text: Train::build_search_text(&id, &name, &source, &destination),
        id,
        name,
        line,
        direction,
        source,
        destination,
        schedule: schedule.into(),
        next_station_id,
        coordinate: start_station.coordinate,
        heading: 0.0,
        status,
        crowd_level: CrowdLevel::ALL[rng.gen_range(0..CrowdLevel::ALL.len())],
        speed_kmh: rng.gen_range(30..90) as f64,
    }
}
