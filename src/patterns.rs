// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Pattern queries: CQL pattern search and n-gram extraction.
//!
//! CQL (Corpus Query Language) searches for patterns built from ordered
//! word / lemma / part-of-speech components with repetition constraints; see
//! [`CqlComponent`](crate::types::CqlComponent). N-gram queries return
//! contiguous word, stem, or part-of-speech sequences of a fixed length with
//! occurrence counts; see [`NgramSpec`](crate::types::NgramSpec).
//!
//! The client performs no semantic validation of `cql_arr` or `n_gram`
//! contents; the server rejects malformed patterns.

use crate::auth::Prompt;
use crate::client::TalkBankClient;
use crate::error::Result;
use crate::query::QueryParams;
use crate::types::ResponseTable;

impl TalkBankClient {
    /// Search the selected transcripts for a CQL pattern.
    ///
    /// The pattern is the ordered component list in `params.cql_arr`. For
    /// example, any form of "go" followed by exactly "home":
    ///
    /// ```rust
    /// use talkbankdb_client::query::QueryParams;
    /// use talkbankdb_client::types::{CqlComponent, CqlFreq, CqlType};
    ///
    /// let params = QueryParams {
    ///     corpus_name: Some("childes".to_owned()),
    ///     cql_arr: Some(vec![
    ///         CqlComponent { kind: CqlType::Lemma, item: "go".to_owned(), freq: CqlFreq::Once },
    ///         CqlComponent { kind: CqlType::Word, item: "home".to_owned(), freq: CqlFreq::Once },
    ///     ]),
    ///     ..QueryParams::default()
    /// };
    /// ```
    ///
    /// This matches "go home", "goes home", "went home", and "going home".
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TalkBankError::MissingRequiredField`] if
    /// `corpus_name` is unset, or a transport/decode error on failure.
    pub async fn get_cql(
        &self,
        params: &QueryParams,
        auth: Option<&mut dyn Prompt>,
    ) -> Result<ResponseTable> {
        self.data_query("cql", params, auth).await
    }

    /// Get n-grams of the size and type given in `params.n_gram`, one row
    /// per n-gram with its frequency count.
    pub async fn get_ngrams(
        &self,
        params: &QueryParams,
        auth: Option<&mut dyn Prompt>,
    ) -> Result<ResponseTable> {
        self.data_query("getNgrams", params, auth).await
    }
}
