use tracing::warn;

use crate::api::TransactionApi;
use crate::domain::{Transaction, TransactionInput, recent_history, total_amount};

/// How many entries `transaction_history` returns at most.
pub const HISTORY_LIMIT: usize = 3;

/// In-memory state container for transaction data, mediating between a
/// consumer (CLI, GUI, ...) and the remote tracker service.
///
/// The two collections always hold the last known server state as of the
/// most recent completed load; mutations write through to the service and
/// then reload, they never patch the local copy. Concurrent loads of the
/// same collection race and the last completed response wins; there is no
/// request sequencing or cancellation.
pub struct LedgerStore<C: TransactionApi> {
    api: C,
    incomes: Vec<Transaction>,
    expenses: Vec<Transaction>,
    last_error: Option<String>,
}

impl<C: TransactionApi> LedgerStore<C> {
    /// Create an empty store. Call [`refresh`](Self::refresh) afterwards to
    /// populate both collections from the service.
    pub fn new(api: C) -> Self {
        Self {
            api,
            incomes: Vec::new(),
            expenses: Vec::new(),
            last_error: None,
        }
    }

    /// Load both collections from the service.
    pub async fn refresh(&mut self) {
        self.load_incomes().await;
        self.load_expenses().await;
    }

    // ========================
    // Income operations
    // ========================

    /// Replace the income collection with the service's current state.
    /// On failure the collection is left as it was; read errors are logged,
    /// never surfaced through `last_error`.
    pub async fn load_incomes(&mut self) {
        match self.api.get_incomes().await {
            Ok(records) => self.incomes = records,
            Err(err) => warn!("failed to load incomes: {err}"),
        }
    }

    /// Create an income record on the service, then reload the collection.
    ///
    /// The reload runs regardless of the outcome: after any mutation attempt
    /// the store resynchronizes with server truth, so a failed create still
    /// leaves the collection refreshed (i.e. unchanged). On failure the
    /// service's message is captured into `last_error`.
    pub async fn add_income(&mut self, input: &TransactionInput) {
        if let Err(err) = self.api.add_income(input).await {
            self.last_error = Some(err.user_message());
        }
        self.load_incomes().await;
    }

    /// Delete an income record by id, then reload the collection.
    /// Delete failures are logged and otherwise ignored.
    pub async fn delete_income(&mut self, id: &str) {
        if let Err(err) = self.api.delete_income(id).await {
            warn!("failed to delete income {id}: {err}");
        }
        self.load_incomes().await;
    }

    // ========================
    // Expense operations
    // ========================

    /// Replace the expense collection with the service's current state.
    pub async fn load_expenses(&mut self) {
        match self.api.get_expenses().await {
            Ok(records) => self.expenses = records,
            Err(err) => warn!("failed to load expenses: {err}"),
        }
    }

    /// Create an expense record on the service, then reload the collection.
    /// Same contract as [`add_income`](Self::add_income).
    pub async fn add_expense(&mut self, input: &TransactionInput) {
        if let Err(err) = self.api.add_expense(input).await {
            self.last_error = Some(err.user_message());
        }
        self.load_expenses().await;
    }

    /// Delete an expense record by id, then reload the collection.
    pub async fn delete_expense(&mut self, id: &str) {
        if let Err(err) = self.api.delete_expense(id).await {
            warn!("failed to delete expense {id}: {err}");
        }
        self.load_expenses().await;
    }

    // ========================
    // Read accessors
    // ========================

    /// Income records in the order the service returned them.
    pub fn incomes(&self) -> &[Transaction] {
        &self.incomes
    }

    /// Expense records in the order the service returned them.
    pub fn expenses(&self) -> &[Transaction] {
        &self.expenses
    }

    /// Sum of all income amounts in the current in-memory state.
    /// Pure; never triggers a fetch.
    pub fn total_income(&self) -> f64 {
        total_amount(&self.incomes)
    }

    /// Sum of all expense amounts in the current in-memory state.
    pub fn total_expenses(&self) -> f64 {
        total_amount(&self.expenses)
    }

    /// `total_income() - total_expenses()`.
    pub fn total_balance(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }

    /// The most recent transactions across both collections, date
    /// descending, at most [`HISTORY_LIMIT`] entries.
    pub fn transaction_history(&self) -> Vec<Transaction> {
        recent_history(&self.incomes, &self.expenses, HISTORY_LIMIT)
    }

    // ========================
    // Error state
    // ========================

    /// Message of the last failed mutation, if any. The store never clears
    /// this itself; the consumer dismisses it via [`set_error`](Self::set_error).
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Set or clear the error value directly.
    pub fn set_error(&mut self, error: Option<String>) {
        self.last_error = error;
    }
}
