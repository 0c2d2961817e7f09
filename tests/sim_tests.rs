use railpulse::{
    catalog::{Catalog, Line},
    fleet::{Fleet, FleetConfig, Train, TrainStatus, build_fleet},
    schedule::{Direction, ScheduleEntry, build_schedule},
    shared::{geo::Coordinate, time::Time},
    sim::{EndOfLinePolicy, SimConfig, advance},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

const CHURCHGATE: Coordinate = Coordinate::new(18.9322, 72.8264);
const MUMBAI_CENTRAL: Coordinate = Coordinate::new(18.9696, 72.8194);
const VIRAR: Coordinate = Coordinate::new(19.4700, 72.8100);

fn entry(station_id: &str, arrival: &str, departure: &str) -> ScheduleEntry {
    ScheduleEntry {
        station_id: station_id.into(),
        arrival_time: arrival.into(),
        departure_time: departure.into(),
        platform: "PF 1".into(),
    }
}

fn test_train(schedule: Vec<ScheduleEntry>, next_station_id: &str, at: Coordinate) -> Train {
    Train {
        id: "90001".into(),
        name: "Mumbai Central Fast".into(),
        line: Line::Western,
        source: "Churchgate".into(),
        destination: "Mumbai Central".into(),
        schedule: schedule.into(),
        next_station_id: next_station_id.into(),
        coordinate: at,
        search_text: Train::build_search_text(
            "90001",
            "Mumbai Central Fast",
            "Churchgate",
            "Mumbai Central",
        ),
        ..Default::default()
    }
}

fn two_stop_schedule() -> Vec<ScheduleEntry> {
    vec![
        entry("st-ccg", "08:00", "08:01"),
        entry("st-mcl", "08:05", "08:06"),
    ]
}

fn assert_train_unchanged(before: &Train, after: &Train) {
    assert_eq!(before.id, after.id);
    assert_eq!(before.name, after.name);
    assert_eq!(before.line, after.line);
    assert_eq!(before.direction, after.direction);
    assert_eq!(before.source, after.source);
    assert_eq!(before.destination, after.destination);
    assert_eq!(before.schedule.len(), after.schedule.len());
    assert_eq!(before.next_station_id, after.next_station_id);
    assert_eq!(before.coordinate, after.coordinate);
    assert_eq!(before.heading, after.heading);
    assert_eq!(before.status, after.status);
    assert_eq!(before.crowd_level, after.crowd_level);
    assert_eq!(before.speed_kmh, after.speed_kmh);
}

#[test]
fn advance_preserves_count_and_ids() {
    let catalog = Catalog::new().unwrap();
    let mut rng = XorShiftRng::seed_from_u64(42);
    let fleet = build_fleet(&catalog, &FleetConfig::default(), &mut rng).unwrap();
    let next = advance(&fleet, &catalog, &SimConfig::default(), &mut rng);
    assert_eq!(next.len(), fleet.len());
    for (before, after) in fleet.trains().iter().zip(next.trains().iter()) {
        assert_eq!(before.id, after.id);
    }
}

#[test]
fn far_train_moves_exactly_one_step() {
    let catalog = Catalog::new().unwrap();
    let mut rng = XorShiftRng::seed_from_u64(42);
    let config = SimConfig::default();
    let train = test_train(two_stop_schedule(), "st-mcl", CHURCHGATE);
    let fleet = Fleet::from_trains(vec![train]);

    let next = advance(&fleet, &catalog, &config, &mut rng);
    let before = &fleet.trains()[0];
    let after = &next.trains()[0];

    let moved = before.coordinate.planar_distance(&after.coordinate);
    assert!((moved - config.step_size).abs() < 1e-9);
    assert!(
        after.coordinate.planar_distance(&MUMBAI_CENTRAL)
            < before.coordinate.planar_distance(&MUMBAI_CENTRAL)
    );
    assert_eq!(after.next_station_id.as_ref(), "st-mcl");
    assert_eq!(after.status, before.status);
}

#[test]
fn far_train_heading_follows_movement_vector() {
    let catalog = Catalog::new().unwrap();
    let mut rng = XorShiftRng::seed_from_u64(42);
    let train = test_train(two_stop_schedule(), "st-mcl", CHURCHGATE);
    let fleet = Fleet::from_trains(vec![train]);

    let next = advance(&fleet, &catalog, &SimConfig::default(), &mut rng);
    let after = &next.trains()[0];

    let d_lat = MUMBAI_CENTRAL.latitude - CHURCHGATE.latitude;
    let d_lng = MUMBAI_CENTRAL.longitude - CHURCHGATE.longitude;
    let expected = f64::atan2(d_lng, d_lat).to_degrees();
    assert!((after.heading - expected).abs() < 1e-9);
}

#[test]
fn arrival_advances_pointer_without_moving() {
    let catalog = Catalog::new().unwrap();
    let mut rng = XorShiftRng::seed_from_u64(42);
    let schedule = vec![
        entry("st-ccg", "08:00", "08:01"),
        entry("st-mcl", "08:05", "08:06"),
        entry("st-ddr-w", "08:10", "08:11"),
    ];
    let train = test_train(schedule, "st-mcl", MUMBAI_CENTRAL);
    let fleet = Fleet::from_trains(vec![train]);

    let next = advance(&fleet, &catalog, &SimConfig::default(), &mut rng);
    let after = &next.trains()[0];

    assert_eq!(after.next_station_id.as_ref(), "st-ddr-w");
    assert_eq!(after.coordinate, MUMBAI_CENTRAL);
    assert!(matches!(
        after.status,
        TrainStatus::OnTime | TrainStatus::Delayed
    ));
}

#[test]
fn terminal_freeze_is_a_fixed_point() {
    let catalog = Catalog::new().unwrap();
    let mut rng = XorShiftRng::seed_from_u64(42);
    let config = SimConfig::default();
    let train = test_train(two_stop_schedule(), "st-mcl", MUMBAI_CENTRAL);
    let fleet = Fleet::from_trains(vec![train]);

    let once = advance(&fleet, &catalog, &config, &mut rng);
    assert_train_unchanged(&fleet.trains()[0], &once.trains()[0]);

    let twice = advance(&once, &catalog, &config, &mut rng);
    assert_train_unchanged(&once.trains()[0], &twice.trains()[0]);
}

#[test]
fn unresolved_pointer_is_a_noop() {
    let catalog = Catalog::new().unwrap();
    let mut rng = XorShiftRng::seed_from_u64(42);
    let train = test_train(two_stop_schedule(), "st-nowhere", CHURCHGATE);
    let fleet = Fleet::from_trains(vec![train]);

    let next = advance(&fleet, &catalog, &SimConfig::default(), &mut rng);
    assert_train_unchanged(&fleet.trains()[0], &next.trains()[0]);
}

#[test]
fn two_stop_scenario_runs_to_a_fixed_point() {
    let catalog = Catalog::new().unwrap();
    let mut rng = XorShiftRng::seed_from_u64(42);
    let config = SimConfig::default();
    let train = test_train(two_stop_schedule(), "st-mcl", CHURCHGATE);
    let mut fleet = Fleet::from_trains(vec![train]);

    // First tick: strictly closer, pointer untouched.
    let next = advance(&fleet, &catalog, &config, &mut rng);
    assert!(
        next.trains()[0].coordinate.planar_distance(&MUMBAI_CENTRAL)
            < fleet.trains()[0].coordinate.planar_distance(&MUMBAI_CENTRAL)
    );
    assert_eq!(next.trains()[0].next_station_id.as_ref(), "st-mcl");
    fleet = next;

    // Run the rest of the way in; the distance is ~0.038 so well under 200
    // ticks suffice.
    for _ in 0..200 {
        fleet = advance(&fleet, &catalog, &config, &mut rng);
    }
    let parked = &fleet.trains()[0];
    assert!(parked.coordinate.planar_distance(&MUMBAI_CENTRAL) < config.arrival_threshold);
    assert_eq!(parked.next_station_id.as_ref(), "st-mcl");

    let settled = advance(&fleet, &catalog, &config, &mut rng);
    assert_train_unchanged(parked, &settled.trains()[0]);
}

#[test]
fn respawn_policy_restarts_the_run() {
    let catalog = Catalog::new().unwrap();
    let mut rng = XorShiftRng::seed_from_u64(42);
    let config = SimConfig {
        end_of_line: EndOfLinePolicy::Respawn,
        ..Default::default()
    };
    let train = test_train(two_stop_schedule(), "st-mcl", MUMBAI_CENTRAL);
    let fleet = Fleet::from_trains(vec![train]);

    let next = advance(&fleet, &catalog, &config, &mut rng);
    let after = &next.trains()[0];

    assert_eq!(after.coordinate, CHURCHGATE);
    assert_eq!(after.next_station_id.as_ref(), "st-mcl");
    assert_eq!(after.schedule.len(), 2);
}

#[test]
fn reverse_policy_turns_around_at_the_terminus() {
    let catalog = Catalog::new().unwrap();
    let mut rng = XorShiftRng::seed_from_u64(42);
    let config = SimConfig {
        end_of_line: EndOfLinePolicy::Reverse,
        ..Default::default()
    };

    let route = catalog.route(Line::Western);
    let schedule = build_schedule(Time::from_hm(8, 0), &route, Direction::Down, &mut rng);
    let mut train = test_train(schedule, "st-vir", VIRAR);
    train.source = "Churchgate".into();
    train.destination = "Virar".into();
    let fleet = Fleet::from_trains(vec![train]);

    let next = advance(&fleet, &catalog, &config, &mut rng);
    let after = &next.trains()[0];

    assert_eq!(after.direction, Direction::Up);
    assert_eq!(after.source.as_ref(), "Virar");
    assert_eq!(after.destination.as_ref(), "Churchgate");
    assert_eq!(after.schedule.len(), route.len());
    assert_eq!(after.schedule[0].station_id.as_ref(), "st-vir");
    assert_eq!(after.next_station_id, after.schedule[1].station_id);
    // Parked at the terminus, which is the new run's first stop.
    assert_eq!(after.coordinate, VIRAR);
}

#[test]
fn seeded_sessions_replay_identically() {
    let catalog = Catalog::new().unwrap();
    let config = SimConfig::default();

    let mut rng_a = XorShiftRng::seed_from_u64(9);
    let mut fleet_a = build_fleet(&catalog, &FleetConfig::default(), &mut rng_a).unwrap();
    let mut rng_b = XorShiftRng::seed_from_u64(9);
    let mut fleet_b = build_fleet(&catalog, &FleetConfig::default(), &mut rng_b).unwrap();

    for _ in 0..10 {
        fleet_a = advance(&fleet_a, &catalog, &config, &mut rng_a);
        fleet_b = advance(&fleet_b, &catalog, &config, &mut rng_b);
    }

    for (a, b) in fleet_a.trains().iter().zip(fleet_b.trains().iter()) {
        assert_eq!(a.coordinate, b.coordinate);
        assert_eq!(a.next_station_id, b.next_station_id);
        assert_eq!(a.status, b.status);
    }
}
