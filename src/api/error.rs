use thiserror::Error;

/// Failures when talking to the tracker service.
///
/// A `Service` error carries the message the service put in its structured
/// error body; anything else (connection failures, bad payloads) surfaces as
/// `Transport` or `MalformedResponse` instead of a crash.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service rejected the request with a structured `{message}` body.
    #[error("{message}")]
    Service { message: String },

    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service returned an error status without the structured shape.
    #[error("unexpected error response from service: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// The text a user should see for this failure: the service's own
    /// message when there is one, the error display otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Service { message } => message.clone(),
            other => other.to_string(),
        }
    }
}
