use railpulse::sim::Simulation;
use tokio::sync::RwLock;

pub struct AppState {
    pub simulation: RwLock<Simulation>,
}

impl AppState {
    pub fn new(simulation: Simulation) -> Self {
        Self {
            simulation: RwLock::new(simulation),
        }
    }
}
