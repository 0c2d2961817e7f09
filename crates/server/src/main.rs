mod api;
mod dto;
mod state;
mod ticker;

use crate::{state::AppState, ticker::Ticker};
use axum::routing::get;
use railpulse::{
    fleet::FleetConfig,
    sim::{SimConfig, Simulation},
};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let now = Instant::now();
    let simulation = match Simulation::new(SimConfig::default(), FleetConfig::default()) {
        Ok(simulation) => simulation,
        Err(err) => {
            error!("Failed to build the fleet: {err}");
            std::process::exit(1);
        }
    };
    info!("Building the fleet took {:?}", now.elapsed());

    let state = Arc::new(AppState::new(simulation));
    let ticker = Ticker::start(state.clone());

    let app = axum::Router::new()
        .route("/trains", get(api::trains))
        .route("/trains/{id}", get(api::train))
        .route("/search", get(api::search))
        .route("/stations", get(api::stations))
        .route("/stations/search", get(api::search_stations))
        .route("/tracks", get(api::tracks))
        .route("/selection", get(api::selection).post(api::select))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{PORT}"))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    ticker.stop();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
