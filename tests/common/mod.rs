// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use moneta::api::{ApiError, TransactionApi};
use moneta::application::LedgerStore;
use moneta::domain::{Transaction, TransactionInput};

/// Helper to parse a date string into DateTime<Utc>
pub fn parse_date(date_str: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Build a transaction record the way the service would return it.
pub fn transaction(id: &str, amount: f64, title: &str, date_str: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        title: title.to_string(),
        date: parse_date(date_str),
        category: "misc".to_string(),
        description: String::new(),
    }
}

#[derive(Default)]
struct StubState {
    incomes: Vec<Transaction>,
    expenses: Vec<Transaction>,
    next_id: u32,
    /// When set, the next add request fails with this service message.
    reject_next_add: Option<String>,
    /// When true, all reads fail with a transport-level error.
    fail_reads: bool,
}

#[derive(Default)]
struct StubInner {
    state: Mutex<StubState>,
    income_loads: AtomicUsize,
    expense_loads: AtomicUsize,
}

/// In-memory stand-in for the remote tracker service. Behaves like the real
/// API: adds assign server-side ids, deletes remove by id, reads return the
/// current collection state.
///
/// Clones share state, so a test can keep a handle while the store owns
/// another.
#[derive(Default, Clone)]
pub struct StubApi {
    inner: Arc<StubInner>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the income collection.
    pub fn with_incomes(self, incomes: Vec<Transaction>) -> Self {
        self.inner.state.lock().unwrap().incomes = incomes;
        self
    }

    /// Seed the expense collection.
    pub fn with_expenses(self, expenses: Vec<Transaction>) -> Self {
        self.inner.state.lock().unwrap().expenses = expenses;
        self
    }

    /// Replace the income collection, as if the server state moved on.
    pub fn set_incomes(&self, incomes: Vec<Transaction>) {
        self.inner.state.lock().unwrap().incomes = incomes;
    }

    /// Make the next add request fail with a structured service error.
    pub fn reject_next_add(&self, message: &str) {
        self.inner.state.lock().unwrap().reject_next_add = Some(message.to_string());
    }

    /// Make all subsequent reads fail.
    pub fn fail_reads(&self, fail: bool) {
        self.inner.state.lock().unwrap().fail_reads = fail;
    }

    /// Income records currently held by the stub service.
    pub fn incomes(&self) -> Vec<Transaction> {
        self.inner.state.lock().unwrap().incomes.clone()
    }

    /// How many times the income collection was fetched.
    pub fn income_loads(&self) -> usize {
        self.inner.income_loads.load(Ordering::SeqCst)
    }

    /// How many times the expense collection was fetched.
    pub fn expense_loads(&self) -> usize {
        self.inner.expense_loads.load(Ordering::SeqCst)
    }

    fn create(state: &mut StubState, input: &TransactionInput) -> Result<Transaction, ApiError> {
        if let Some(message) = state.reject_next_add.take() {
            return Err(ApiError::Service { message });
        }

        state.next_id += 1;
        Ok(Transaction {
            id: format!("stub-{}", state.next_id),
            amount: input.amount,
            title: input.title.clone(),
            date: input.date,
            category: input.category.clone(),
            description: input.description.clone(),
        })
    }
}

#[async_trait]
impl TransactionApi for StubApi {
    async fn get_incomes(&self) -> Result<Vec<Transaction>, ApiError> {
        self.inner.income_loads.fetch_add(1, Ordering::SeqCst);
        let state = self.inner.state.lock().unwrap();
        if state.fail_reads {
            return Err(ApiError::MalformedResponse("stub read failure".to_string()));
        }
        Ok(state.incomes.clone())
    }

    async fn add_income(&self, input: &TransactionInput) -> Result<Transaction, ApiError> {
        let mut state = self.inner.state.lock().unwrap();
        let created = Self::create(&mut state, input)?;
        state.incomes.push(created.clone());
        Ok(created)
    }

    async fn delete_income(&self, id: &str) -> Result<(), ApiError> {
        let mut state = self.inner.state.lock().unwrap();
        state.incomes.retain(|t| t.id != id);
        Ok(())
    }

    async fn get_expenses(&self) -> Result<Vec<Transaction>, ApiError> {
        self.inner.expense_loads.fetch_add(1, Ordering::SeqCst);
        let state = self.inner.state.lock().unwrap();
        if state.fail_reads {
            return Err(ApiError::MalformedResponse("stub read failure".to_string()));
        }
        Ok(state.expenses.clone())
    }

    async fn add_expense(&self, input: &TransactionInput) -> Result<Transaction, ApiError> {
        let mut state = self.inner.state.lock().unwrap();
        let created = Self::create(&mut state, input)?;
        state.expenses.push(created.clone());
        Ok(created)
    }

    async fn delete_expense(&self, id: &str) -> Result<(), ApiError> {
        let mut state = self.inner.state.lock().unwrap();
        state.expenses.retain(|t| t.id != id);
        Ok(())
    }
}

/// Helper to create a store over a freshly seeded stub service, returning a
/// shared handle to the stub alongside the store.
pub fn test_store(
    incomes: Vec<Transaction>,
    expenses: Vec<Transaction>,
) -> (LedgerStore<StubApi>, StubApi) {
    let api = StubApi::new().with_incomes(incomes).with_expenses(expenses);
    (LedgerStore::new(api.clone()), api)
}
