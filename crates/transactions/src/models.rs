use chrono::{DateTime, Utc};
use ledger::{Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug)]
pub struct CreateTransactionRequest {
    description: String,
    amount: Decimal,
    date: DateTime<Utc>,
    category: String,
    kind: TransactionKind,
}

// Raw input struct for deserialization (CreateTransactionRequest has private fields)
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCreateTransactionRequest {
    pub description: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub category: String,
    pub kind: TransactionKind,
}

impl CreateTransactionRequest {
    pub fn new(
        description: String,
        amount: Decimal,
        date: DateTime<Utc>,
        category: String,
        kind: TransactionKind,
    ) -> Result<Self, String> {
        if description.trim().is_empty() {
            return Err("Description cannot be empty".to_string());
        }
        if amount <= Decimal::ZERO {
            return Err("Amount must be positive".to_string());
        }
        if category.trim().is_empty() {
            return Err("Category cannot be empty".to_string());
        }

        Ok(Self {
            description: description.trim().to_string(),
            amount,
            date,
            category: category.trim().to_string(),
            kind,
        })
    }

    /// Assigns the id and creation timestamp.
    pub fn into_transaction(self) -> Transaction {
        Transaction::new(
            self.description,
            self.amount,
            self.date,
            self.category,
            self.kind,
        )
    }
}
