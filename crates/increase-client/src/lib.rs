/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Increase client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

// `types` goes first: its macros are used by `http`.
#[macro_use]
pub mod types;
pub mod http;

// Re-export commonly used types from http
pub use http::{
    ApiErrorBody,
    ClientConfig,
    Environment,
    ErrorType,
    IncreaseClient,
    IncreaseError,
    Result,
    RetryPolicy,
};

// Re-export all types
pub use types::*;
