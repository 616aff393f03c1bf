use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single income or expense record as returned by the tracker service.
///
/// Whether a transaction is an income or an expense is positional: it is
/// determined by which collection of the ledger store holds it, never by a
/// tagged field on the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned identifier, unique within its collection.
    #[serde(rename = "_id")]
    pub id: String,
    /// Amount as carried by the service JSON (always non-negative).
    pub amount: f64,
    pub title: String,
    /// When the transaction occurred.
    pub date: DateTime<Utc>,
    /// Category for grouping (e.g., "salary", "groceries").
    pub category: String,
    pub description: String,
}

/// Fields for a create request. The server assigns the identifier.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionInput {
    pub amount: f64,
    pub title: String,
    pub date: DateTime<Utc>,
    pub category: String,
    pub description: String,
}

impl TransactionInput {
    pub fn new(amount: f64, title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            amount,
            title: title.into(),
            date,
            category: String::new(),
            description: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
