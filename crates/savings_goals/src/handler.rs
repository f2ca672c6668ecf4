use crate::models::{RawCreateSavingsGoalRequest, SavingsGoalResponse};
use crate::service::{SavingsGoalError, SavingsGoalService};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use common::AppState;
use serde_json::json;
use std::sync::Arc;

impl IntoResponse for SavingsGoalError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            SavingsGoalError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            SavingsGoalError::NotFound => {
                (StatusCode::NOT_FOUND, "Savings goal not found".to_string())
            }
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

pub fn savings_goals_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_savings_goals).post(create_savings_goal))
        .route("/{id}", get(get_savings_goal))
        .with_state(state)
}

async fn list_savings_goals(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<SavingsGoalResponse>> {
    let now = Utc::now();
    let goals = SavingsGoalService::list_savings_goals(&state.store)
        .into_iter()
        .map(|g| SavingsGoalResponse::new(g, now))
        .collect();
    Json(goals)
}

async fn get_savings_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SavingsGoalResponse>, SavingsGoalError> {
    let goal = SavingsGoalService::get_savings_goal(&state.store, &id)?;
    Ok(Json(SavingsGoalResponse::new(goal, Utc::now())))
}

async fn create_savings_goal(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RawCreateSavingsGoalRequest>,
) -> Result<impl IntoResponse, SavingsGoalError> {
    let goal = SavingsGoalService::create_savings_goal(&state.store, payload)?;
    Ok((
        StatusCode::CREATED,
        Json(SavingsGoalResponse::new(goal, Utc::now())),
    ))
}
