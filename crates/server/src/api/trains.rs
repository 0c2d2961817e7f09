use std::{collections::HashMap, sync::Arc};

use crate::{dto::TrainDto, state::AppState};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn trains(State(state): State<Arc<AppState>>) -> Response {
    let simulation = state.simulation.read().await;
    let trains: Vec<_> = simulation
        .fleet()
        .trains()
        .iter()
        .map(TrainDto::from)
        .collect();
    Json(trains).into_response()
}

pub async fn train(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let simulation = state.simulation.read().await;
    let train = simulation
        .fleet()
        .train_by_id(&id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(TrainDto::from(train)).into_response())
}

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    if let Some(query) = params.get("q") {
        let count: usize = match params.get("count") {
            Some(value) => match value.parse() {
                Ok(value) => value,
                Err(_) => return Err(StatusCode::BAD_REQUEST),
            },
            None => 20,
        };
        let simulation = state.simulation.read().await;
        let result: Vec<_> = simulation
            .fleet()
            .search_trains(query)
            .into_iter()
            .take(count)
            .map(TrainDto::from)
            .collect();
        Ok(Json(result).into_response())
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}
