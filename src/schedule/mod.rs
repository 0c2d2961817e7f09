use std::sync::Arc;

use rand::Rng;

use crate::{
    catalog::Station,
    shared::time::{Duration, Time},
};

/// Dwell applied at every stop before departure.
const DWELL: Duration = Duration::from_minutes(1);
/// Inter-station travel takes between 3 and 5 minutes.
const TRAVEL_MINUTES: std::ops::RangeInclusive<u32> = 3..=5;
/// Platforms are drawn from PF 1 through PF 4.
const PLATFORM_COUNT: u32 = 4;

/// Traversal direction over a line's canonical ordering.
/// DOWN follows the catalog order, UP reverses it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Down,
    Up,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }
}

/// One stop of a train's planned run.
///
/// Times are preformatted 24-hour `HH:mm` strings so the display layer can
/// show them as-is. Entries are generated once and never rewritten; the
/// simulator only advances a pointer over them.
#[derive(Debug, Default, Clone)]
pub struct ScheduleEntry {
    pub station_id: Arc<str>,
    pub arrival_time: Arc<str>,
    pub departure_time: Arc<str>,
    pub platform: Arc<str>,
}

/// Rolls out one run over `stations`, producing an entry per stop in
/// traversal order. The running clock starts at `start`; platform and
/// travel-time draws come from the injected `rng`, so a seeded source
/// makes the output reproducible.
pub fn build_schedule<R: Rng>(
    start: Time,
    stations: &[&Station],
    direction: Direction,
    rng: &mut R,
) -> Vec<ScheduleEntry> {
    let mut clock = start;
    let mut entries = Vec::with_capacity(stations.len());

    let ordered: Vec<&Station> = match direction {
        Direction::Down => stations.to_vec(),
        Direction::Up => stations.iter().rev().copied().collect(),
    };

    for station in ordered {
        let arrival_time = clock.to_hm_string();
        clock += DWELL;
        let departure_time = clock.to_hm_string();
        let platform = format!("PF {}", rng.gen_range(1..=PLATFORM_COUNT));

        entries.push(ScheduleEntry {
            station_id: station.id.clone(),
            arrival_time: arrival_time.into(),
            departure_time: departure_time.into(),
            platform: platform.into(),
        });

        clock += Duration::from_minutes(rng.gen_range(TRAVEL_MINUTES));
    }

    entries
}
