// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! TalkBankDB client configuration and HTTP transport layer.
//!
//! [`TalkBankClient`] is the primary entry point for all SDK operations. It
//! owns the base URL and the HTTP client. Domain-specific methods (data
//! views, pattern queries, path validation) are defined as
//! `impl TalkBankClient` blocks in their respective modules.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::{collect_credentials, Prompt};
use crate::error::{Result, TalkBankError};
use crate::query::{QueryParams, QueryRequest};
use crate::types::ResponseTable;

/// Public TalkBankDB endpoint.
pub const DEFAULT_BASE_URL: &str = "https://sla2.talkbank.org:1515/";

/// The main TalkBankDB client.
///
/// Holds connection parameters and provides the low-level POST helpers that
/// the view methods (`views`, `patterns`, `paths`) delegate to. Every
/// operation is one request/response round trip with no retries, caching, or
/// shared state between calls.
///
/// # Examples
///
/// ```rust,no_run
/// use talkbankdb_client::client::TalkBankClient;
/// use talkbankdb_client::query::QueryParams;
///
/// # #[tokio::main]
/// # async fn main() -> talkbankdb_client::error::Result<()> {
/// let client = TalkBankClient::new()?;
/// let params = QueryParams {
///     corpus_name: Some("childes".to_owned()),
///     ..QueryParams::default()
/// };
/// let table = client.get_transcripts(&params, None).await?;
/// println!("{} rows", table.data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TalkBankClient {
    /// Parsed base URL of the TalkBankDB instance.
    base_url: Url,
    /// Underlying `reqwest` HTTP client (connection-pooled, TLS-capable).
    http: reqwest::Client,
}

impl TalkBankClient {
    // -- Constructors -------------------------------------------------------

    /// Create a client pointing at the public TalkBankDB endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client pointing at a custom endpoint.
    ///
    /// `base_url` should end with a trailing slash; route names are joined
    /// onto it. Intended for tests and self-hosted instances.
    ///
    /// # Errors
    ///
    /// Returns [`TalkBankError::Validation`] if `base_url` cannot be parsed.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| TalkBankError::Validation(format!("Invalid base URL: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(TalkBankError::Transport)?;

        Ok(Self { base_url, http })
    }

    // -- Internal HTTP helpers ----------------------------------------------

    /// Build a full URL by joining a route name onto the base URL.
    pub(crate) fn url(&self, route: &str) -> Url {
        // Unwrap is safe: routes are fixed, well-formed relative segments.
        self.base_url.join(route).expect("valid route join")
    }

    /// Perform a POST with a JSON body and deserialize the JSON response.
    ///
    /// Non-2xx statuses and connection errors surface as
    /// [`TalkBankError::Transport`]; a body that is not valid JSON of the
    /// expected shape surfaces as [`TalkBankError::Decode`].
    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        route: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(route);
        tracing::debug!(%url, "POST");

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(TalkBankError::Transport)?
            .error_for_status()
            .map_err(TalkBankError::Transport)?;

        let text = response.text().await.map_err(TalkBankError::Transport)?;
        serde_json::from_str(&text).map_err(TalkBankError::Decode)
    }

    /// Run one data query: collect credentials if requested, normalize the
    /// parameters, POST `{"queryVals": <envelope>}`, and return the table.
    pub(crate) async fn data_query(
        &self,
        route: &str,
        params: &QueryParams,
        auth: Option<&mut dyn Prompt>,
    ) -> Result<ResponseTable> {
        let mut params = params.clone();
        if let Some(prompt) = auth {
            params.ns_auth = Some(collect_credentials(prompt)?);
        }

        let envelope = params.normalize()?;
        self.post(route, &QueryRequest { query_vals: &envelope }).await
    }

    /// Run one metadata query: POST an empty object, return the raw response.
    pub(crate) async fn metadata_query<T: DeserializeOwned>(&self, route: &str) -> Result<T> {
        self.post(route, &serde_json::json!({})).await
    }
}
