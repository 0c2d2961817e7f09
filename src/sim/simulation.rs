use std::sync::Arc;

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use tracing::debug;

use crate::{
    Error,
    catalog::Catalog,
    fleet::{self, Fleet, FleetConfig, Train},
};

use super::{SimConfig, advance};

/// Owns the authoritative state: the current fleet snapshot, the selected
/// train, and the rng feeding every randomized transition.
///
/// One `tick` fully replaces the fleet before the next can run, so there is
/// never a half-advanced snapshot to observe.
pub struct Simulation {
    catalog: Catalog,
    fleet: Fleet,
    config: SimConfig,
    rng: XorShiftRng,
    selected_train_id: Option<Arc<str>>,
}

impl Simulation {
    /// Builds the catalog and initial fleet from an OS-entropy seed.
    pub fn new(config: SimConfig, fleet_config: FleetConfig) -> Result<Self, Error> {
        Self::with_rng(config, fleet_config, XorShiftRng::from_entropy())
    }

    /// Deterministic variant: the same seed replays the same session.
    pub fn seeded(config: SimConfig, fleet_config: FleetConfig, seed: u64) -> Result<Self, Error> {
        Self::with_rng(config, fleet_config, XorShiftRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: SimConfig,
        fleet_config: FleetConfig,
        mut rng: XorShiftRng,
    ) -> Result<Self, Error> {
        let catalog = Catalog::new()?;
        let fleet = fleet::build_fleet(&catalog, &fleet_config, &mut rng)?;
        debug!("initialized fleet with {} trains", fleet.len());
        Ok(Self {
            catalog,
            fleet,
            config,
            rng,
            selected_train_id: None,
        })
    }

    /// One simulation tick: swaps in the advanced fleet snapshot.
    pub fn tick(&mut self) {
        self.fleet = advance(&self.fleet, &self.catalog, &self.config, &mut self.rng);
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replaces the selection. The id is not validated; a dangling
    /// selection simply never resolves to a train.
    pub fn select_train(&mut self, id: &str) {
        self.selected_train_id = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected_train_id = None;
    }

    pub fn selected_train_id(&self) -> Option<&str> {
        self.selected_train_id.as_deref()
    }

    /// The selected train in the current snapshot, if the selection
    /// resolves.
    pub fn selected_train(&self) -> Option<&Train> {
        self.fleet.train_by_id(self.selected_train_id.as_deref()?)
    }
}
