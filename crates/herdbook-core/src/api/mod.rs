//! REST API client module for the farm management service.
//!
//! This module provides the `ApiClient`, the HTTP implementation of the
//! session manager's remote validator, and the `ApiError` classification of
//! transport outcomes.
//!
//! The API uses HTTP Basic authentication on every request.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
