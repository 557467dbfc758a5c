//! API clients for the remote tool store.
//!
//! Provides thin HTTP clients over the store's REST surface. The catalog and
//! usage endpoints live behind `StoreClient`; token refresh lives behind
//! `AuthClient`. Both speak the PostgREST/GoTrue conventions the hosted
//! store exposes.
//!
//! ## Features
//!
//! - **Store**: Fetches the tool catalog and patches per-tool usage
//! - **Auth**: Exchanges the refresh token for a fresh access token
//! - **Typed Errors**: Authorization failures are distinguishable so callers
//!   can refresh and retry exactly once

use reqwest::StatusCode;
use thiserror::Error;

// API client modules
pub mod auth;
pub mod store;

// Re-export client structs for easier access from other modules
pub use auth::{AuthClient, TokenPair};
pub use store::{StoreClient, UsagePatch};

/// Errors surfaced by the remote store clients.
///
/// `Unauthorized` is the one callers branch on: it signals that the access
/// token was rejected and a refresh-then-retry is worth attempting. Every
/// other variant is a plain failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authorization rejected by remote store")]
    Unauthorized,
    #[error("tool {0} not found in remote store")]
    ToolNotFound(String),
    #[error("remote store returned {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Body(#[from] serde_json::Error),
}
