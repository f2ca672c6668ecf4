use chrono::{DateTime, Utc};
use ledger::SavingsGoal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct CreateSavingsGoalRequest {
    name: String,
    target_amount: Decimal,
    current_amount: Decimal,
    target_date: DateTime<Utc>,
    monthly_contribution: Decimal,
    color: String,
}

// Raw input struct for deserialization (CreateSavingsGoalRequest has private fields)
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCreateSavingsGoalRequest {
    pub name: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    pub target_date: DateTime<Utc>,
    #[serde(default)]
    pub monthly_contribution: Decimal,
    #[serde(default = "default_goal_color")]
    pub color: String,
}

fn default_goal_color() -> String {
    "#10B981".to_string()
}

impl CreateSavingsGoalRequest {
    pub fn new(
        name: String,
        target_amount: Decimal,
        current_amount: Decimal,
        target_date: DateTime<Utc>,
        monthly_contribution: Decimal,
        color: String,
    ) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Goal name cannot be empty".to_string());
        }
        if current_amount < Decimal::ZERO {
            return Err("Current amount cannot be negative".to_string());
        }
        if monthly_contribution < Decimal::ZERO {
            return Err("Monthly contribution cannot be negative".to_string());
        }

        Ok(Self {
            name: name.trim().to_string(),
            target_amount,
            current_amount,
            target_date,
            monthly_contribution,
            color,
        })
    }

    /// Assigns the id and creation timestamp.
    pub fn into_goal(self) -> SavingsGoal {
        SavingsGoal::new(
            self.name,
            self.target_amount,
            self.current_amount,
            self.target_date,
            self.monthly_contribution,
            self.color,
        )
    }
}

/// Wire shape for a goal: the stored fields plus the derived progress and
/// months-remaining values, evaluated at response time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalResponse {
    #[serde(flatten)]
    pub goal: SavingsGoal,
    pub progress_percentage: Decimal,
    pub months_remaining: i64,
}

impl SavingsGoalResponse {
    pub fn new(goal: SavingsGoal, now: DateTime<Utc>) -> Self {
        let progress_percentage = goal.progress_percentage();
        let months_remaining = goal.months_remaining(now);
        Self {
            goal,
            progress_percentage,
            months_remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_savings_goal_request_valid() {
        let req = CreateSavingsGoalRequest::new(
            "New Car".to_string(),
            dec!(25000),
            dec!(5000),
            Utc::now() + Duration::days(730),
            dec!(800),
            "#3B82F6".to_string(),
        )
        .unwrap();

        let goal = req.into_goal();
        assert!(!goal.id.is_empty());
        assert_eq!(goal.target_amount, dec!(25000));
    }

    #[test]
    fn test_create_savings_goal_request_empty_name() {
        let result = CreateSavingsGoalRequest::new(
            " ".to_string(),
            dec!(1000),
            dec!(0),
            Utc::now(),
            dec!(0),
            "#10B981".to_string(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_create_savings_goal_request_negative_current_amount() {
        let result = CreateSavingsGoalRequest::new(
            "Goal".to_string(),
            dec!(1000),
            dec!(-1),
            Utc::now(),
            dec!(0),
            "#10B981".to_string(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_response_includes_derived_fields() {
        let now = Utc::now();
        let goal = SavingsGoal::new(
            "Bonus Savings".to_string(),
            dec!(1000),
            dec!(1200),
            now + Duration::days(31),
            dec!(100),
            "#10B981".to_string(),
        );

        let response = SavingsGoalResponse::new(goal, now);
        assert_eq!(response.progress_percentage, dec!(120));
        assert_eq!(response.months_remaining, 1);
    }
}
