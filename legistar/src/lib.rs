//! High-level client for exploring Legistar legislative datasets.
//!
//! Wraps [`legistar_webapi`] with configuration, an on-disk JSON cache, and
//! a [`Frame`] tabular view used to report the column names a dataset
//! carries.

/// Default endpoint for the hosted Legistar web API
pub const LEGISTAR_BASE_URL: &str = "https://webapi.legistar.com/v1";

/// Environment variable consulted for the API access token
pub const TOKEN_ENV_VAR: &str = "LEGISTAR_API_TOKEN";

pub use legistar_webapi as webapi;

pub mod client;
pub mod colors;
pub mod config;
pub mod error;
pub mod frame;

pub use client::LegistarClient;
pub use colors::{ColorHelper, ColorMode};
pub use config::LegistarConfig;
pub use error::{LegistarError, Result};
pub use frame::Frame;
