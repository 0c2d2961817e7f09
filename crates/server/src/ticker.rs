use crate::state::AppState;
use std::{sync::Arc, time::Duration};
use tokio::{task::JoinHandle, time};
use tracing::debug;

/// Cadence of the fleet recomputation.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Drives the simulation clock on a fixed interval.
///
/// Owns the task handle so teardown can cancel it; an uncancelled interval
/// would keep advancing state nobody observes.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn start(state: Arc<AppState>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(TICK_INTERVAL);
            interval.set_missed_tick_behavior(time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                state.simulation.write().await.tick();
            }
        });
        debug!("ticker started at {TICK_INTERVAL:?} cadence");
        Self { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
        debug!("ticker stopped");
    }
}
