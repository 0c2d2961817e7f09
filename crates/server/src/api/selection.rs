use std::sync::Arc;

use crate::{dto::TrainDto, state::AppState};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionDto {
    pub selected_train_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedTrainDto {
    pub selected_train_id: Option<String>,
    /// The selected train in the current snapshot; absent when the
    /// selection is empty or dangling.
    pub train: Option<TrainDto>,
}

pub async fn selection(State(state): State<Arc<AppState>>) -> Response {
    let simulation = state.simulation.read().await;
    Json(SelectedTrainDto {
        selected_train_id: simulation.selected_train_id().map(str::to_string),
        train: simulation.selected_train().map(TrainDto::from),
    })
    .into_response()
}

/// The single write entry point for the selection. The id is not checked
/// against the fleet; a dangling selection just never highlights anything.
pub async fn select(
    State(state): State<Arc<AppState>>,
    Json(selection): Json<SelectionDto>,
) -> StatusCode {
    let mut simulation = state.simulation.write().await;
    match selection.selected_train_id {
        Some(id) => simulation.select_train(&id),
        None => simulation.clear_selection(),
    }
    StatusCode::NO_CONTENT
}
