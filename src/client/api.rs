// ABOUTME: reqwest-based HTTP client for the ingredient catalog and recipe matcher
// ABOUTME: Turns non-2xx answers into server errors carrying the response message
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::time::Duration;

use fridge_core::constants::routes;
use fridge_core::errors::ErrorResponse;
use fridge_core::models::{Catalog, Recipe, RecipeSearchRequest};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ClientError, ClientResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one recipe API deployment
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Client for the API at `base_url`, e.g. `http://localhost:5000/api`
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if `base_url` is not an absolute http(s) URL, or
    /// `Network` if the HTTP client cannot be built
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Self::with_http_client(http, base_url)
    }

    /// Client reusing an existing `reqwest::Client`
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if `base_url` is not an absolute http(s) URL
    pub fn with_http_client(http: Client, base_url: &str) -> ClientResult<Self> {
        let parsed = url::Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_owned(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET the ingredient catalog
    ///
    /// # Errors
    ///
    /// Returns `Network`, `Server` or `Decode` on failure
    pub async fn fetch_catalog(&self) -> ClientResult<Catalog> {
        let url = self.endpoint(routes::INGREDIENTS);
        debug!(%url, "Fetching catalog");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    /// POST a selection to the matcher
    ///
    /// # Errors
    ///
    /// Returns `Network`, `Server` or `Decode` on failure
    pub async fn find_recipes(&self, names: &[String]) -> ClientResult<Vec<Recipe>> {
        let url = self.endpoint(routes::RECIPES);
        debug!(%url, selected = names.len(), "Finding recipes");
        let body = RecipeSearchRequest::new(names.iter().cloned());
        let response = self.http.post(&url).json(&body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&bytes).map_or_else(
                |_| String::from_utf8_lossy(&bytes).trim().to_owned(),
                |error| error.message,
            );
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}
