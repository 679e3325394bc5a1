// ABOUTME: Drives a FinderSession over the HTTP API client
// ABOUTME: Loads the catalog and submits selections, recording outcomes in the session
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use fridge_core::models::Recipe;
use tracing::warn;

use super::{ApiClient, ClientResult, FinderSession};

/// A session bound to an API client
#[derive(Debug, Clone)]
pub struct Finder {
    client: ApiClient,
    session: FinderSession,
}

impl Finder {
    /// Fresh session talking to `client`
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            session: FinderSession::new(),
        }
    }

    /// Current session state
    #[must_use]
    pub const fn session(&self) -> &FinderSession {
        &self.session
    }

    /// Session state for selection and search edits
    pub fn session_mut(&mut self) -> &mut FinderSession {
        &mut self.session
    }

    /// Underlying API client
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Fetch the catalog into the session
    ///
    /// A failure is recorded in the session banner and also returned.
    ///
    /// # Errors
    ///
    /// Returns the client error that failed the load
    pub async fn load_catalog(&mut self) -> ClientResult<()> {
        self.session.begin_catalog_load();
        match self.client.fetch_catalog().await {
            Ok(catalog) => {
                self.session.catalog_loaded(catalog);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Catalog load failed");
                self.session.catalog_failed(&e);
                Err(e)
            }
        }
    }

    /// Submit the current selection to the matcher
    ///
    /// An empty selection fails before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns the session's validation error, or the client error of a
    /// failed request
    pub async fn submit(&mut self) -> ClientResult<&[Recipe]> {
        let request = self.session.begin_submit()?;
        let names = request.ingredients.unwrap_or_default();

        match self.client.find_recipes(&names).await {
            Ok(recipes) => {
                self.session.recipes_loaded(recipes);
                Ok(self.session.results().recipes())
            }
            Err(e) => {
                warn!(error = %e, "Recipe request failed");
                self.session.recipes_failed();
                Err(e)
            }
        }
    }
}
