use crate::models::RawCreateTransactionRequest;
use crate::service::{TransactionError, TransactionService};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use common::AppState;
use ledger::Transaction;
use serde_json::json;
use std::sync::Arc;

impl IntoResponse for TransactionError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            TransactionError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            TransactionError::NotFound => {
                (StatusCode::NOT_FOUND, "Transaction not found".to_string())
            }
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

pub fn transactions_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_transactions).post(create_transaction))
        .route("/{id}", get(get_transaction))
        .with_state(state)
}

async fn list_transactions(State(state): State<Arc<AppState>>) -> Json<Vec<Transaction>> {
    Json(TransactionService::list_transactions(&state.store))
}

async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, TransactionError> {
    let transaction = TransactionService::get_transaction(&state.store, &id)?;
    Ok(Json(transaction))
}

async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RawCreateTransactionRequest>,
) -> Result<impl IntoResponse, TransactionError> {
    let transaction = TransactionService::create_transaction(&state.store, payload)?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{TimeZone, Utc};
    use common::Config;
    use http_body_util::BodyExt;
    use ledger::{Budget, BudgetCategory, LedgerStore};
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn test_app(store: LedgerStore) -> Router {
        let config = Config { port: 0 };
        let state = Arc::new(AppState { store, config });
        transactions_router(state.clone()).with_state(state)
    }

    #[tokio::test]
    async fn test_list_transactions_returns_ok() {
        let app = test_app(LedgerStore::with_sample_data());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let transactions: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(transactions.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_get_transaction_unknown_id_returns_404() {
        let app = test_app(LedgerStore::new());

        let response = app
            .oneshot(Request::builder().uri("/no-such-id").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_expense_updates_matching_budget() {
        let store = LedgerStore::new();
        store.add_budget(Budget::new(
            "December 2025 Budget".to_string(),
            dec!(4500),
            Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap(),
            vec![BudgetCategory {
                name: "Groceries".to_string(),
                planned_amount: dec!(600),
                spent_amount: dec!(425),
                color: "#10B981".to_string(),
            }],
        ));
        let budget_id = store.list_budgets()[0].id.clone();
        let app = test_app(store.clone());

        let payload = json!({
            "description": "Walmart",
            "amount": "75.50",
            "date": "2025-12-15T00:00:00Z",
            "category": "Groceries",
            "kind": "Expense"
        });
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let budget = store.get_budget(&budget_id).unwrap();
        assert_eq!(budget.categories[0].spent_amount, dec!(500.50));
    }

    #[tokio::test]
    async fn test_create_transaction_invalid_amount_returns_400() {
        let app = test_app(LedgerStore::new());

        let payload = json!({
            "description": "Bad",
            "amount": "-5",
            "date": "2025-12-15T00:00:00Z",
            "category": "Groceries",
            "kind": "Expense"
        });
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
