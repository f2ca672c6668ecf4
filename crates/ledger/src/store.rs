use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Datelike;

use crate::models::{Budget, SavingsGoal, Transaction, TransactionKind};

#[derive(Debug, Default)]
struct Collections {
    budgets: Vec<Budget>,
    transactions: Vec<Transaction>,
    savings_goals: Vec<SavingsGoal>,
}

/// In-memory store for budgets, transactions and savings goals.
///
/// A cheap-to-clone handle; all clones share the same collections behind one
/// mutex, so `add_transaction`'s find-then-increment sequence is atomic with
/// respect to concurrent callers. Collections only grow; there are no update
/// or delete operations.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    inner: Arc<Mutex<Collections>>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        // A poisoned mutex still holds consistent data here; every write is a
        // single push or a single field increment.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list_budgets(&self) -> Vec<Budget> {
        self.lock().budgets.clone()
    }

    pub fn get_budget(&self, id: &str) -> Option<Budget> {
        self.lock().budgets.iter().find(|b| b.id == id).cloned()
    }

    /// Appends without validating name uniqueness or month overlap.
    pub fn add_budget(&self, budget: Budget) {
        self.lock().budgets.push(budget);
    }

    /// All transactions, most recent date first. The sort is stable, so
    /// same-date transactions keep their insertion order.
    pub fn list_transactions(&self) -> Vec<Transaction> {
        let mut transactions = self.lock().transactions.clone();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions
    }

    pub fn get_transaction(&self, id: &str) -> Option<Transaction> {
        self.lock().transactions.iter().find(|t| t.id == id).cloned()
    }

    /// Appends the transaction, then rolls an expense into the matching
    /// budget category. Income transactions never touch budgets.
    pub fn add_transaction(&self, transaction: Transaction) {
        let mut guard = self.lock();
        let collections = &mut *guard;
        collections.transactions.push(transaction);
        if let Some(transaction) = collections.transactions.last() {
            if transaction.kind == TransactionKind::Expense {
                update_budget_for_transaction(&mut collections.budgets, transaction);
            }
        }
    }

    pub fn list_savings_goals(&self) -> Vec<SavingsGoal> {
        self.lock().savings_goals.clone()
    }

    pub fn get_savings_goal(&self, id: &str) -> Option<SavingsGoal> {
        self.lock().savings_goals.iter().find(|g| g.id == id).cloned()
    }

    pub fn add_savings_goal(&self, goal: SavingsGoal) {
        self.lock().savings_goals.push(goal);
    }
}

/// Finds the first budget whose month matches the transaction's year+month
/// and adds the amount to the first category with a matching name. Either
/// lookup missing leaves every budget untouched.
///
/// Known limitation: if two budgets cover the same month, only the first one
/// in insertion order is updated.
fn update_budget_for_transaction(budgets: &mut [Budget], transaction: &Transaction) {
    let Some(budget) = budgets.iter_mut().find(|b| {
        b.month.year() == transaction.date.year() && b.month.month() == transaction.date.month()
    }) else {
        return;
    };

    let Some(category) = budget
        .categories
        .iter_mut()
        .find(|c| category_names_match(&c.name, &transaction.category))
    else {
        return;
    };

    category.spent_amount += transaction.amount;
}

// Unicode-aware but locale-independent, so matching does not change with the
// process locale.
fn category_names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
