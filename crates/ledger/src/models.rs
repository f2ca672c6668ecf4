use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Expense,
    Income,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal, // Always positive; kind says which direction
    pub date: DateTime<Utc>,
    pub category: String,
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        description: String,
        amount: Decimal,
        date: DateTime<Utc>,
        category: String,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description,
            amount,
            date,
            category,
            kind,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub name: String,
    pub total_amount: Decimal,
    pub month: DateTime<Utc>, // Only year and month are significant
    pub categories: Vec<BudgetCategory>,
    pub created_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(
        name: String,
        total_amount: Decimal,
        month: DateTime<Utc>,
        categories: Vec<BudgetCategory>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            total_amount,
            month,
            categories,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub name: String,
    pub planned_amount: Decimal,
    pub spent_amount: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: DateTime<Utc>,
    pub monthly_contribution: Decimal,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl SavingsGoal {
    pub fn new(
        name: String,
        target_amount: Decimal,
        current_amount: Decimal,
        target_date: DateTime<Utc>,
        monthly_contribution: Decimal,
        color: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            target_amount,
            current_amount,
            target_date,
            monthly_contribution,
            color,
            created_at: Utc::now(),
        }
    }

    /// current/target as a percentage, rounded to 2 decimal places.
    /// Unbounded above 100; zero when the target is not positive.
    pub fn progress_percentage(&self) -> Decimal {
        if self.target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.current_amount / self.target_amount * Decimal::from(100)).round_dp(2)
    }

    /// Whole 30-day periods until the target date, never negative.
    pub fn months_remaining(&self, now: DateTime<Utc>) -> i64 {
        let days = (self.target_date - now).num_days();
        (days / 30).max(0)
    }
}
