use crate::models::RawCreateBudgetRequest;
use crate::service::{BudgetError, BudgetService};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use common::AppState;
use ledger::Budget;
use serde_json::json;
use std::sync::Arc;

impl IntoResponse for BudgetError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            BudgetError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            BudgetError::NotFound => (StatusCode::NOT_FOUND, "Budget not found".to_string()),
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

pub fn budgets_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_budgets).post(create_budget))
        .route("/{id}", get(get_budget))
        .with_state(state)
}

async fn list_budgets(State(state): State<Arc<AppState>>) -> Json<Vec<Budget>> {
    Json(BudgetService::list_budgets(&state.store))
}

async fn get_budget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Budget>, BudgetError> {
    let budget = BudgetService::get_budget(&state.store, &id)?;
    Ok(Json(budget))
}

async fn create_budget(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RawCreateBudgetRequest>,
) -> Result<impl IntoResponse, BudgetError> {
    let budget = BudgetService::create_budget(&state.store, payload)?;
    Ok((StatusCode::CREATED, Json(budget)))
}
