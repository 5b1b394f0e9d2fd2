//! HTTP transport shared by the rail and bus clients.
//!
//! Key characteristics of the WMATA API:
//! - Authentication is a plain `api_key` header (no OAuth handshake)
//! - The default tier is rate limited to 10 calls/second and
//!   50,000 calls/day; 429 responses surface as [`ApiError::RateLimited`]
//! - Responses are JSON with PascalCase field names

mod client;
mod error;

pub use client::{ApiClient, ApiConfig, RadiusSearch};
pub use error::ApiError;
