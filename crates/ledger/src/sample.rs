use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::{Budget, BudgetCategory, SavingsGoal, Transaction, TransactionKind};
use crate::store::LedgerStore;

fn category(name: &str, planned: i64, spent: i64, color: &str) -> BudgetCategory {
    BudgetCategory {
        name: name.to_string(),
        planned_amount: Decimal::from(planned),
        spent_amount: Decimal::from(spent),
        color: color.to_string(),
    }
}

impl LedgerStore {
    /// A store pre-loaded with the fixed demo data set: one December 2025
    /// budget, a handful of recent transactions and two savings goals.
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        let now = Utc::now();

        store.add_budget(Budget::new(
            "December 2025 Budget".to_string(),
            Decimal::from(4500),
            Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap(),
            vec![
                category("Groceries", 600, 425, "#10B981"),
                category("Utilities", 300, 285, "#3B82F6"),
                category("Entertainment", 200, 150, "#8B5CF6"),
                category("Transportation", 400, 320, "#F59E0B"),
                category("Dining Out", 300, 280, "#EF4444"),
                category("Shopping", 500, 450, "#EC4899"),
                category("Healthcare", 200, 0, "#06B6D4"),
                category("Savings", 2000, 2000, "#14B8A6"),
            ],
        ));

        let seed_transactions = [
            ("Grocery Shopping", Decimal::new(12550, 2), "Groceries", 2, TransactionKind::Expense),
            ("Monthly Salary", Decimal::from(5000), "Income", 28, TransactionKind::Income),
            ("Electric Bill", Decimal::from(145), "Utilities", 5, TransactionKind::Expense),
            ("Gas Station", Decimal::from(55), "Transportation", 3, TransactionKind::Expense),
            ("Movie Tickets", Decimal::from(45), "Entertainment", 7, TransactionKind::Expense),
        ];
        for (description, amount, category, days_ago, kind) in seed_transactions {
            store.add_transaction(Transaction::new(
                description.to_string(),
                amount,
                now - Duration::days(days_ago),
                category.to_string(),
                kind,
            ));
        }

        store.add_savings_goal(SavingsGoal::new(
            "Emergency Fund".to_string(),
            Decimal::from(10000),
            Decimal::from(6500),
            Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap(),
            Decimal::from(500),
            "#10B981".to_string(),
        ));
        store.add_savings_goal(SavingsGoal::new(
            "Vacation to Europe".to_string(),
            Decimal::from(5000),
            Decimal::from(2800),
            Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap(),
            Decimal::from(400),
            "#3B82F6".to_string(),
        ));

        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_is_seeded() {
        let store = LedgerStore::with_sample_data();

        let budgets = store.list_budgets();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].name, "December 2025 Budget");
        assert_eq!(budgets[0].categories.len(), 8);

        assert_eq!(store.list_transactions().len(), 5);
        assert_eq!(store.list_savings_goals().len(), 2);
    }

    #[test]
    fn test_sample_entities_have_ids_and_names() {
        let store = LedgerStore::with_sample_data();
        for budget in store.list_budgets() {
            assert!(!budget.id.is_empty());
            assert!(!budget.name.is_empty());
        }
        for goal in store.list_savings_goals() {
            assert!(!goal.id.is_empty());
            assert!(goal.target_amount > Decimal::ZERO);
        }
    }
}
