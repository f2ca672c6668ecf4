use crate::models::{CreateTransactionRequest, RawCreateTransactionRequest};
use ledger::{LedgerStore, Transaction};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Transaction not found")]
    NotFound,
}

pub struct TransactionService;

impl TransactionService {
    /// Records the transaction; the store rolls expenses into the matching
    /// budget month and category as part of the same call.
    #[instrument(skip(store, payload))]
    pub fn create_transaction(
        store: &LedgerStore,
        payload: RawCreateTransactionRequest,
    ) -> Result<Transaction, TransactionError> {
        let req = CreateTransactionRequest::new(
            payload.description,
            payload.amount,
            payload.date,
            payload.category,
            payload.kind,
        )
        .map_err(TransactionError::InvalidInput)?;

        let transaction = req.into_transaction();
        store.add_transaction(transaction.clone());
        tracing::info!(id = %transaction.id, kind = ?transaction.kind, "recorded transaction");

        Ok(transaction)
    }

    #[instrument(skip(store))]
    pub fn list_transactions(store: &LedgerStore) -> Vec<Transaction> {
        store.list_transactions()
    }

    #[instrument(skip(store))]
    pub fn get_transaction(store: &LedgerStore, id: &str) -> Result<Transaction, TransactionError> {
        store.get_transaction(id).ok_or(TransactionError::NotFound)
    }
}
