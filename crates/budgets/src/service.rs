use crate::models::{CreateBudgetRequest, RawCreateBudgetRequest};
use ledger::{Budget, LedgerStore};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Budget not found")]
    NotFound,
}

pub struct BudgetService;

impl BudgetService {
    #[instrument(skip(store, payload))]
    pub fn create_budget(
        store: &LedgerStore,
        payload: RawCreateBudgetRequest,
    ) -> Result<Budget, BudgetError> {
        let req = CreateBudgetRequest::new(
            payload.name,
            payload.total_amount,
            payload.month,
            payload.categories,
        )
        .map_err(BudgetError::InvalidInput)?;

        let budget = req.into_budget();
        store.add_budget(budget.clone());
        tracing::info!(id = %budget.id, "created budget");

        Ok(budget)
    }

    #[instrument(skip(store))]
    pub fn list_budgets(store: &LedgerStore) -> Vec<Budget> {
        store.list_budgets()
    }

    #[instrument(skip(store))]
    pub fn get_budget(store: &LedgerStore, id: &str) -> Result<Budget, BudgetError> {
        store.get_budget(id).ok_or(BudgetError::NotFound)
    }
}
