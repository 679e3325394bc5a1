// ABOUTME: Client side of the recipe finder: HTTP client, selection session and rendering
// ABOUTME: Shared by the fridge-cli binary and the end-to-end tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Recipe Finder Client
//!
//! [`FinderSession`] is a pure state machine holding the catalog, the
//! selection and the result view. [`ApiClient`] talks to the recipe API.
//! [`Finder`] drives one with the other.

use thiserror::Error;

/// HTTP client for the recipe API
pub mod api;
/// Session driven over the API
pub mod finder;
/// Plain-text presentation
pub mod render;
/// Selection and result state machine
pub mod session;

pub use api::ApiClient;
pub use finder::Finder;
pub use session::{CatalogStatus, FinderSession, ResultsView};

/// Errors surfaced to client front ends
#[derive(Debug, Error)]
pub enum ClientError {
    /// Submit attempted with nothing selected
    #[error("no ingredient selected")]
    EmptySelection,

    /// Submit attempted while the previous one is still in flight
    #[error("a recipe request is already pending")]
    RequestPending,

    /// The base URL cannot be used
    #[error("invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport failure before a response arrived
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// The response body has an unexpected shape
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
