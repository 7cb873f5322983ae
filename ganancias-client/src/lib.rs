//! HTTP access to the remote ganancias calculation service.
//!
//! The service owns all tax math; this crate only shuttles typed requests
//! and responses, resolves the base URL for the current environment, and
//! keeps the deduction catalog cached across reloads.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;

pub use cache::CatalogCache;
pub use client::ApiClient;
pub use config::{ApiConfig, BaseUrlRule, DEFAULT_CALC_TIMEOUT, DEFAULT_PORT};
pub use error::ApiError;
