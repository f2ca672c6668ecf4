pub mod models;
pub mod sample;
pub mod store;

pub use models::{Budget, BudgetCategory, SavingsGoal, Transaction, TransactionKind};
pub use store::LedgerStore;
