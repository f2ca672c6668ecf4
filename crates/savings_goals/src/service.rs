use crate::models::{CreateSavingsGoalRequest, RawCreateSavingsGoalRequest};
use ledger::{LedgerStore, SavingsGoal};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum SavingsGoalError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Savings goal not found")]
    NotFound,
}

pub struct SavingsGoalService;

impl SavingsGoalService {
    #[instrument(skip(store, payload))]
    pub fn create_savings_goal(
        store: &LedgerStore,
        payload: RawCreateSavingsGoalRequest,
    ) -> Result<SavingsGoal, SavingsGoalError> {
        let req = CreateSavingsGoalRequest::new(
            payload.name,
            payload.target_amount,
            payload.current_amount,
            payload.target_date,
            payload.monthly_contribution,
            payload.color,
        )
        .map_err(SavingsGoalError::InvalidInput)?;

        let goal = req.into_goal();
        store.add_savings_goal(goal.clone());
        tracing::info!(id = %goal.id, "created savings goal");

        Ok(goal)
    }

    #[instrument(skip(store))]
    pub fn list_savings_goals(store: &LedgerStore) -> Vec<SavingsGoal> {
        store.list_savings_goals()
    }

    #[instrument(skip(store))]
    pub fn get_savings_goal(store: &LedgerStore, id: &str) -> Result<SavingsGoal, SavingsGoalError> {
        store.get_savings_goal(id).ok_or(SavingsGoalError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    fn payload(name: &str) -> RawCreateSavingsGoalRequest {
        RawCreateSavingsGoalRequest {
            name: name.to_string(),
            target_amount: dec!(10000),
            current_amount: dec!(2500),
            target_date: Utc::now() + Duration::days(365),
            monthly_contribution: dec!(500),
            color: "#10B981".to_string(),
        }
    }

    #[test]
    fn test_create_savings_goal_returns_stored_goal() {
        let store = LedgerStore::new();
        let goal = SavingsGoalService::create_savings_goal(&store, payload("Emergency Fund")).unwrap();

        let fetched = SavingsGoalService::get_savings_goal(&store, &goal.id).unwrap();
        assert_eq!(fetched, goal);
        assert_eq!(SavingsGoalService::list_savings_goals(&store).len(), 1);
    }

    #[test]
    fn test_create_savings_goal_rejects_empty_name() {
        let store = LedgerStore::new();
        let err = SavingsGoalService::create_savings_goal(&store, payload("  "));
        assert!(matches!(err, Err(SavingsGoalError::InvalidInput(_))));
    }

    #[test]
    fn test_get_savings_goal_unknown_id_is_not_found() {
        let store = LedgerStore::new();
        let err = SavingsGoalService::get_savings_goal(&store, "missing");
        assert!(matches!(err, Err(SavingsGoalError::NotFound)));
    }
}
