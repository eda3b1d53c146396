//! Shared API types - error mapping and the JSON extractor

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorBody, LOOKUP_ERROR_MESSAGE, REGISTRATION_ERROR_MESSAGE};
pub use json::Json;
