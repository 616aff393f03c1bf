use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Transaction, TransactionInput};

use super::{ApiError, TransactionApi};

/// Default address of the tracker service. Fixed configuration; override
/// with `HttpApi::new` when the service runs elsewhere.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1/";

/// Structured error body the service sends on rejected requests.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for the tracker service endpoints.
pub struct HttpApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApi {
    /// Create a client against the given base address (host, port and path
    /// prefix, e.g. `http://localhost:5000/api/v1/`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into an `ApiError`, preferring the
    /// service's structured `{message}` body when it parses as one.
    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return ApiError::Transport(err),
        };

        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(error) => ApiError::Service {
                message: error.message,
            },
            Err(_) => ApiError::MalformedResponse(format!("{}: {}", status, body)),
        }
    }

    async fn get_collection(&self, path: &str) -> Result<Vec<Transaction>, ApiError> {
        debug!(path, "fetching collection");
        let response = self.http.get(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(response.json().await?)
    }

    async fn post_transaction(
        &self,
        path: &str,
        input: &TransactionInput,
    ) -> Result<Transaction, ApiError> {
        debug!(path, "creating transaction");
        let response = self.http.post(self.url(path)).json(input).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete_transaction(&self, path: &str, id: &str) -> Result<(), ApiError> {
        debug!(path, id, "deleting transaction");
        let url = format!("{}/{}", self.url(path), id);
        let response = self.http.delete(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionApi for HttpApi {
    async fn get_incomes(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_collection("get-incomes").await
    }

    async fn add_income(&self, input: &TransactionInput) -> Result<Transaction, ApiError> {
        self.post_transaction("add-income", input).await
    }

    async fn delete_income(&self, id: &str) -> Result<(), ApiError> {
        self.delete_transaction("delete-income", id).await
    }

    async fn get_expenses(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_collection("get-expenses").await
    }

    async fn add_expense(&self, input: &TransactionInput) -> Result<Transaction, ApiError> {
        self.post_transaction("add-expense", input).await
    }

    async fn delete_expense(&self, id: &str) -> Result<(), ApiError> {
        self.delete_transaction("delete-expense", id).await
    }
}
