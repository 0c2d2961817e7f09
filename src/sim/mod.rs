mod config;
mod simulation;
pub use config::*;
pub use simulation::*;

use rand::Rng;
use tracing::trace;

use crate::{
    catalog::Catalog,
    fleet::{Fleet, Train, TrainStatus},
    schedule,
    shared::time::Time,
};

/// Advances every train by one tick, producing a fresh fleet snapshot.
///
/// The input fleet is left untouched so views holding the previous value
/// keep a stable reference. Trains are stepped in order with a single rng,
/// which keeps a seeded run exactly replayable.
pub fn advance<R: Rng>(
    fleet: &Fleet,
    catalog: &Catalog,
    config: &SimConfig,
    rng: &mut R,
) -> Fleet {
    let trains = fleet
        .trains()
        .iter()
        .map(|train| step_train(train, catalog, config, rng))
        .collect();
    fleet.rebuilt_from(trains)
}

fn step_train<R: Rng>(train: &Train, catalog: &Catalog, config: &SimConfig, rng: &mut R) -> Train {
    // A pointer that does not resolve leaves the train exactly where it is.
    let Some(target) = catalog.station_by_id(&train.next_station_id) else {
        return train.clone();
    };

    let offset = train.coordinate.offset_to(&target.coordinate);
    if offset.magnitude() < config.arrival_threshold {
        return arrive(train, catalog, config, rng);
    }

    let mut next = train.clone();
    next.coordinate = train
        .coordinate
        .step_towards(&target.coordinate, config.step_size);
    next.heading = offset.heading();
    next
}

/// The train is within the arrival threshold of its target. Position stays
/// at the arrival point for this tick; only the pointer and status move.
fn arrive<R: Rng>(train: &Train, catalog: &Catalog, config: &SimConfig, rng: &mut R) -> Train {
    let Some(index) = train
        .schedule
        .iter()
        .position(|entry| entry.station_id == train.next_station_id)
    else {
        return train.clone();
    };

    match train.schedule.get(index + 1) {
        Some(next_entry) => {
            trace!(
                "train {} arrived at {}, next {}",
                train.id, train.next_station_id, next_entry.station_id
            );
            let mut next = train.clone();
            next.next_station_id = next_entry.station_id.clone();
            next.status = roll_status(config.arrival_delay_probability, rng);
            next
        }
        None => end_of_line(train, catalog, config, rng),
    }
}

fn roll_status<R: Rng>(delay_probability: f64, rng: &mut R) -> TrainStatus {
    if rng.gen_bool(delay_probability) {
        TrainStatus::Delayed
    } else {
        TrainStatus::OnTime
    }
}

fn end_of_line<R: Rng>(train: &Train, catalog: &Catalog, config: &SimConfig, rng: &mut R) -> Train {
    match config.end_of_line {
        // Parked for good: every later tick re-evaluates the same arrival
        // and produces this same value again.
        EndOfLinePolicy::Freeze => train.clone(),
        EndOfLinePolicy::Respawn => respawn(train, catalog),
        EndOfLinePolicy::Reverse => reverse(train, catalog, rng),
    }
}

/// Same run again from the top: park at the first stop, aim at the second.
fn respawn(train: &Train, catalog: &Catalog) -> Train {
    let Some(first) = train.schedule.first() else {
        return train.clone();
    };

    let mut next = train.clone();
    if let Some(station) = catalog.station_by_id(&first.station_id) {
        next.coordinate = station.coordinate;
    }
    next.next_station_id = match train.schedule.get(1) {
        Some(entry) => entry.station_id.clone(),
        None => first.station_id.clone(),
    };
    trace!("train {} respawned at {}", train.id, first.station_id);
    next
}

/// Turn around at the terminus: a fresh schedule in the opposite direction
/// starting now, endpoints swapped. The train is already parked at the new
/// run's first stop.
fn reverse<R: Rng>(train: &Train, catalog: &Catalog, rng: &mut R) -> Train {
    let route = catalog.route(train.line);
    if route.is_empty() {
        return train.clone();
    }

    let direction = train.direction.flipped();
    let schedule = schedule::build_schedule(Time::now(), &route, direction, rng);
    let next_station_id = match schedule.get(1) {
        Some(entry) => entry.station_id.clone(),
        None => schedule[0].station_id.clone(),
    };

    let mut next = train.clone();
    next.direction = direction;
    next.source = train.destination.clone();
    next.destination = train.source.clone();
    next.schedule = schedule.into();
    next.next_station_id = next_station_id;
    next.search_text =
        Train::build_search_text(&next.id, &next.name, &next.source, &next.destination);
    trace!("train {} reversed towards {}", train.id, next.destination);
    next
}
