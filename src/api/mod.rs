mod client;
mod error;

pub use client::{DEFAULT_BASE_URL, HttpApi};
pub use error::ApiError;

use async_trait::async_trait;

use crate::domain::{Transaction, TransactionInput};

/// The remote service contract consumed by the ledger store.
///
/// Abstracting the wire behind a trait keeps the store testable against an
/// in-memory double; `HttpApi` is the production implementation.
#[async_trait]
pub trait TransactionApi {
    async fn get_incomes(&self) -> Result<Vec<Transaction>, ApiError>;
    async fn add_income(&self, input: &TransactionInput) -> Result<Transaction, ApiError>;
    async fn delete_income(&self, id: &str) -> Result<(), ApiError>;

    async fn get_expenses(&self) -> Result<Vec<Transaction>, ApiError>;
    async fn add_expense(&self, input: &TransactionInput) -> Result<Transaction, ApiError>;
    async fn delete_expense(&self, id: &str) -> Result<(), ApiError>;
}
