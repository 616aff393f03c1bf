pub mod api;
pub mod application;
pub mod cli;
pub mod domain;

pub use api::{ApiError, HttpApi, TransactionApi};
pub use application::LedgerStore;
pub use domain::*;
