// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Query parameter normalization.
//!
//! Callers describe a query with [`QueryParams`], where every filter is
//! optional. Before transmission the parameters are normalized into a
//! [`QueryEnvelope`]: `corpusName` is required, every omitted filter becomes
//! an empty container, and `respType` is fixed to `"JSON"`. The server always
//! receives a complete, uniformly-shaped object.
//!
//! Normalization is a pure function of its input, so normalizing an
//! already-complete parameter set again yields an identical envelope.

use serde::ser::Serializer;
use serde::Serialize;

use crate::error::{Result, TalkBankError};
use crate::types::{AgeRange, CqlComponent, Credential, NgramSpec};

/// Fixed response-format marker sent with every data query.
const RESP_TYPE_JSON: &str = "JSON";

// ---------------------------------------------------------------------------
// QueryParams
// ---------------------------------------------------------------------------

/// Caller-facing query parameters for all data views.
///
/// Only `corpus_name` is required; every other field is a filter that
/// defaults to "no restriction" when left as `None`. Construct with struct
/// update syntax:
///
/// ```rust
/// use talkbankdb_client::query::QueryParams;
///
/// let params = QueryParams {
///     corpus_name: Some("childes".to_owned()),
///     lang: Some(vec!["eng".to_owned()]),
///     ..QueryParams::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    /// Name of the corpus to query (e.g. `"childes"`). Required.
    pub corpus_name: Option<String>,
    /// Corpus paths to query under `corpus_name`. Each path starts with the
    /// corpus name followed by subfolder names; all transcripts beneath the
    /// final folder are queried
    /// (e.g. `[["childes", "Eng-NA", "MacWhinney"]]`).
    pub corpora: Option<Vec<Vec<String>>>,
    /// Languages spoken, as ISO 639-3 three-letter codes (e.g. `["eng"]`).
    pub lang: Option<Vec<String>>,
    /// Associated media types: `"audio"` or `"video"`.
    pub media: Option<Vec<String>>,
    /// Target participant age ranges, in months.
    pub age: Option<Vec<AgeRange>>,
    /// Target participant genders: `"female"` or `"male"`.
    pub gender: Option<Vec<String>>,
    /// Study design types: `"long"` (longitudinal) or `"cross"`
    /// (cross-sectional).
    pub design_type: Option<Vec<String>>,
    /// Activity types (e.g. `"toyplay"`; see the CHAT manual).
    pub activity_type: Option<Vec<String>>,
    /// Group types (e.g. `"HL"`; see the CHAT manual).
    pub group_type: Option<Vec<String>>,
    /// CQL pattern components for [`get_cql`](crate::client::TalkBankClient::get_cql).
    pub cql_arr: Option<Vec<CqlComponent>>,
    /// N-gram specification for [`get_ngrams`](crate::client::TalkBankClient::get_ngrams).
    pub n_gram: Option<NgramSpec>,
    /// Credentials for protected collections. Usually populated by the
    /// credential collector rather than set directly.
    pub ns_auth: Option<Vec<Credential>>,
}

impl QueryParams {
    /// Normalize into the complete wire envelope.
    ///
    /// Fills every omitted optional field with its empty container and fixes
    /// `respType` to `"JSON"`.
    ///
    /// # Errors
    ///
    /// Returns [`TalkBankError::MissingRequiredField`] if `corpus_name` is
    /// unset.
    pub fn normalize(&self) -> Result<QueryEnvelope> {
        let corpus_name = self
            .corpus_name
            .clone()
            .ok_or(TalkBankError::MissingRequiredField("corpusName"))?;

        Ok(QueryEnvelope {
            corpus_name,
            corpora: self.corpora.clone().unwrap_or_default(),
            lang: self.lang.clone().unwrap_or_default(),
            media: self.media.clone().unwrap_or_default(),
            age: self.age.clone().unwrap_or_default(),
            gender: self.gender.clone().unwrap_or_default(),
            design_type: self.design_type.clone().unwrap_or_default(),
            activity_type: self.activity_type.clone().unwrap_or_default(),
            group_type: self.group_type.clone().unwrap_or_default(),
            cql_arr: self.cql_arr.clone().unwrap_or_default(),
            n_gram: self.n_gram,
            ns_auth: self.ns_auth.clone(),
            resp_type: RESP_TYPE_JSON,
        })
    }
}

// ---------------------------------------------------------------------------
// QueryEnvelope
// ---------------------------------------------------------------------------

/// The normalized, complete query object sent to the server.
///
/// Produced by [`QueryParams::normalize`]; every field is present with at
/// least its empty container. Wrapped as `{"queryVals": <envelope>}` in the
/// request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEnvelope {
    corpus_name: String,
    corpora: Vec<Vec<String>>,
    lang: Vec<String>,
    media: Vec<String>,
    age: Vec<AgeRange>,
    gender: Vec<String>,
    design_type: Vec<String>,
    activity_type: Vec<String>,
    group_type: Vec<String>,
    cql_arr: Vec<CqlComponent>,
    // The server's "no filter" sentinel for nGram is an empty object.
    #[serde(serialize_with = "ngram_or_empty")]
    n_gram: Option<NgramSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ns_auth: Option<Vec<Credential>>,
    resp_type: &'static str,
}

impl From<QueryEnvelope> for QueryParams {
    /// Recover the parameter form of a normalized envelope, e.g. to adjust
    /// one filter of an existing query and normalize again.
    fn from(envelope: QueryEnvelope) -> Self {
        QueryParams {
            corpus_name: Some(envelope.corpus_name),
            corpora: Some(envelope.corpora),
            lang: Some(envelope.lang),
            media: Some(envelope.media),
            age: Some(envelope.age),
            gender: Some(envelope.gender),
            design_type: Some(envelope.design_type),
            activity_type: Some(envelope.activity_type),
            group_type: Some(envelope.group_type),
            cql_arr: Some(envelope.cql_arr),
            n_gram: envelope.n_gram,
            ns_auth: envelope.ns_auth,
        }
    }
}

/// Serialize `None` as `{}` instead of `null`.
fn ngram_or_empty<S>(value: &Option<NgramSpec>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(spec) => spec.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Outgoing body for data queries: `{"queryVals": <envelope>}`.
#[derive(Debug, Serialize)]
pub(crate) struct QueryRequest<'a> {
    #[serde(rename = "queryVals")]
    pub query_vals: &'a QueryEnvelope,
}
