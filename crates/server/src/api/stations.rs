use std::{collections::HashMap, sync::Arc};

use crate::{
    dto::{StationDto, TrackDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use railpulse::catalog::Line;

pub async fn stations(State(state): State<Arc<AppState>>) -> Response {
    let simulation = state.simulation.read().await;
    let stations: Vec<_> = simulation
        .catalog()
        .stations
        .iter()
        .map(StationDto::from)
        .collect();
    Json(stations).into_response()
}

pub async fn search_stations(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    if let Some(query) = params.get("q") {
        let count: usize = match params.get("count") {
            Some(value) => match value.parse() {
                Ok(value) => value,
                Err(_) => return Err(StatusCode::BAD_REQUEST),
            },
            None => 5,
        };
        let simulation = state.simulation.read().await;
        let result: Vec<_> = simulation
            .catalog()
            .search_stations_by_name(query)
            .into_iter()
            .take(count)
            .map(StationDto::from)
            .collect();
        Ok(Json(result).into_response())
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}

pub async fn tracks(State(state): State<Arc<AppState>>) -> Response {
    let simulation = state.simulation.read().await;
    let tracks: Vec<_> = Line::ALL
        .into_iter()
        .map(|line| TrackDto::from(line, simulation.catalog().track(line)))
        .collect();
    Json(tracks).into_response()
}
