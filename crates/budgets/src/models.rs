use chrono::{DateTime, Utc};
use ledger::{Budget, BudgetCategory};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug)]
pub struct CreateBudgetRequest {
    name: String,
    total_amount: Decimal,
    month: DateTime<Utc>,
    categories: Vec<BudgetCategory>,
}

// Raw input struct for deserialization (CreateBudgetRequest has private fields)
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCreateBudgetRequest {
    pub name: String,
    pub total_amount: Decimal,
    pub month: DateTime<Utc>,
    #[serde(default)]
    pub categories: Vec<RawBudgetCategory>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBudgetCategory {
    pub name: String,
    pub planned_amount: Decimal,
    #[serde(default)]
    pub spent_amount: Decimal,
    #[serde(default = "default_category_color")]
    pub color: String,
}

fn default_category_color() -> String {
    "#1E3A8A".to_string()
}

impl CreateBudgetRequest {
    pub fn new(
        name: String,
        total_amount: Decimal,
        month: DateTime<Utc>,
        categories: Vec<RawBudgetCategory>,
    ) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Budget name cannot be empty".to_string());
        }
        if total_amount < Decimal::ZERO {
            return Err("Total amount cannot be negative".to_string());
        }
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err("Category name cannot be empty".to_string());
            }
            if category.planned_amount < Decimal::ZERO {
                return Err("Planned amount cannot be negative".to_string());
            }
        }

        Ok(Self {
            name: name.trim().to_string(),
            total_amount,
            month,
            categories: categories
                .into_iter()
                .map(|c| BudgetCategory {
                    name: c.name,
                    planned_amount: c.planned_amount,
                    spent_amount: c.spent_amount,
                    color: c.color,
                })
                .collect(),
        })
    }

    /// Assigns the id and creation timestamp.
    pub fn into_budget(self) -> Budget {
        Budget::new(self.name, self.total_amount, self.month, self.categories)
    }
}
