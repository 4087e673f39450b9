/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod cards;
pub mod client;
pub mod documents;
pub mod error;
mod pagination;
pub mod retry;
pub mod transactions;
pub mod transfers;

pub use error::{ApiErrorBody, ErrorType, IncreaseError, Result};
pub use retry::RetryPolicy;

pub use client::{ClientConfig, Environment, IncreaseClient};
