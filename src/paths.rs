// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Path-tree retrieval and corpus path validation.
//!
//! The server exposes its full corpus hierarchy as a nested JSON object (the
//! path tree). [`TalkBankClient::valid_path`] fetches a fresh tree and walks
//! it segment by segment to check that a `corpora` path exists before a
//! query is issued. Useful for validating caller input, driving path
//! pickers, and auto-completion.

use serde_json::Value;

use crate::client::TalkBankClient;
use crate::error::Result;

/// Response envelope key the path tree is nested under.
const RESP_MSG_KEY: &str = "respMsg";

impl TalkBankClient {
    /// Fetch the path tree to every document known to the server.
    ///
    /// Returns the raw JSON response; the tree itself is nested under the
    /// `respMsg` key. No caching: every call re-requests the full tree.
    pub async fn get_path_trees(&self) -> Result<Value> {
        self.metadata_query("getPathTrees").await
    }

    /// Check whether `target` is a valid corpus path.
    ///
    /// Fetches a fresh path tree and descends it one segment at a time.
    /// Returns `Ok(false)` at the first missing segment (logged at `warn`),
    /// `Ok(true)` only after every segment resolved.
    ///
    /// ```rust,no_run
    /// # use talkbankdb_client::client::TalkBankClient;
    /// # #[tokio::main]
    /// # async fn main() -> talkbankdb_client::error::Result<()> {
    /// let client = TalkBankClient::new()?;
    /// assert!(client.valid_path(&["childes", "childes", "Clinical"]).await?);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Only transport/decode failures while fetching the tree are errors; an
    /// invalid path is an ordinary `false`.
    pub async fn valid_path(&self, target: &[&str]) -> Result<bool> {
        let tree = self.get_path_trees().await?;

        // The walk starts at the response envelope key.
        let mut segments = Vec::with_capacity(target.len() + 1);
        segments.push(RESP_MSG_KEY);
        segments.extend_from_slice(target);

        match first_invalid_segment(&tree, &segments) {
            None => Ok(true),
            Some(segment) => {
                tracing::warn!(segment, "invalid path segment");
                Ok(false)
            }
        }
    }
}

/// Walk `segments` down `tree`, returning the first segment that does not
/// resolve, or `None` if the whole path exists.
///
/// A terminal (non-object) value with segments remaining is a failed
/// descent.
fn first_invalid_segment<'a>(tree: &Value, segments: &[&'a str]) -> Option<&'a str> {
    let mut current = tree;
    for segment in segments {
        match current.get(segment) {
            Some(child) => current = child,
            None => return Some(segment),
        }
    }
    None
}
