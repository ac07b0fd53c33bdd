// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Core data types for the TalkBankDB client SDK.
//!
//! These types mirror the TalkBankDB JSON wire protocol: query filter values
//! (age ranges, CQL pattern components, n-gram specifications, credentials)
//! and the uniform tabular response returned by every data view. Every struct
//! derives `Serialize` and `Deserialize` so it can be round-tripped through
//! the REST API transparently.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AgeRange
// ---------------------------------------------------------------------------

/// A participant age range filter, in months.
///
/// For example, `AgeRange { from: 14, to: 18 }` selects transcripts whose
/// target participants are 14 to 18 months old.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    /// Lower bound, inclusive, in months.
    pub from: u32,
    /// Upper bound, inclusive, in months.
    pub to: u32,
}

// ---------------------------------------------------------------------------
// CQL pattern components
// ---------------------------------------------------------------------------

/// What a CQL pattern component matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CqlType {
    /// Exact word match.
    Word,
    /// Any inflected form of a word (e.g. `go` matches `goes`, `went`).
    Lemma,
    /// Part-of-speech code (see the CHAT manual for legal values).
    Pos,
}

/// How many times a CQL component may occur at its position in the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CqlFreq {
    /// Exactly once at this location.
    Once,
    /// Zero or more times at this location.
    ZeroPlus,
    /// One or more times at this location.
    OnePlus,
}

/// One component of a CQL pattern query.
///
/// A pattern is an ordered sequence of components; each component matches a
/// word, lemma, or part-of-speech with a repetition constraint. The server
/// performs all semantic validation of `item` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CqlComponent {
    /// Match kind for this component.
    #[serde(rename = "type")]
    pub kind: CqlType,
    /// The word, lemma, or part-of-speech code to match.
    pub item: String,
    /// Repetition constraint at this pattern position.
    pub freq: CqlFreq,
}

// ---------------------------------------------------------------------------
// N-gram specification
// ---------------------------------------------------------------------------

/// Which token attribute an n-gram query ranges over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NgramType {
    /// Exact word n-grams.
    Word,
    /// Word-stem n-grams.
    Stem,
    /// Part-of-speech n-grams.
    Pos,
}

/// An n-gram query specification.
///
/// `size` is the n-gram length (any positive integer); the server rejects
/// out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramSpec {
    /// N-gram length (e.g. 3 for trigrams).
    pub size: u32,
    /// Token attribute to build n-grams from.
    #[serde(rename = "type")]
    pub kind: NgramType,
}

// ---------------------------------------------------------------------------
// Credential
// ---------------------------------------------------------------------------

/// One credential record granting access to a protected collection.
///
/// Collected interactively per request (see [`crate::auth`]) and never
/// persisted; the record lives only for the duration of one outgoing query.
/// The wire key for the secret is `pswd`, fixed by the server protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Corpus path the credentials apply to.
    pub path: String,
    /// User identifier.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Secret, entered without terminal echo.
    #[serde(rename = "pswd")]
    pub password: String,
}

// ---------------------------------------------------------------------------
// ResponseTable
// ---------------------------------------------------------------------------

/// The uniform tabular response returned by every data view.
///
/// Row contents are opaque to the client: each cell is passed through as raw
/// JSON without interpretation. `colHeadings` describes the columns of
/// `data` in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTable {
    /// Column descriptions, in column order.
    pub col_headings: Vec<String>,
    /// Table rows; each row is one record of the queried view.
    pub data: Vec<Vec<serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cql_component_wire_form() {
        let component = CqlComponent {
            kind: CqlType::Lemma,
            item: "go".to_owned(),
            freq: CqlFreq::Once,
        };
        let value = serde_json::to_value(&component).unwrap();
        assert_eq!(value, json!({"type": "lemma", "item": "go", "freq": "once"}));
    }

    #[test]
    fn cql_freq_literals() {
        assert_eq!(
            serde_json::to_value(CqlFreq::ZeroPlus).unwrap(),
            json!("zeroPlus")
        );
        assert_eq!(
            serde_json::to_value(CqlFreq::OnePlus).unwrap(),
            json!("onePlus")
        );
    }

    #[test]
    fn credential_wire_keys() {
        let credential = Credential {
            path: "childes/Eng-NA".to_owned(),
            user_id: "alice".to_owned(),
            password: "secret".to_owned(),
        };
        let value = serde_json::to_value(&credential).unwrap();
        assert_eq!(
            value,
            json!({"path": "childes/Eng-NA", "userID": "alice", "pswd": "secret"})
        );
    }

    #[test]
    fn ngram_spec_wire_form() {
        let spec = NgramSpec {
            size: 3,
            kind: NgramType::Word,
        };
        let value = serde_json::to_value(spec).unwrap();
        assert_eq!(value, json!({"size": 3, "type": "word"}));
    }

    #[test]
    fn response_table_deserializes() {
        let body = json!({
            "colHeadings": ["Path", "Languages"],
            "data": [["childes/Eng-NA/MacWhinney/010411a", "eng"]]
        });
        let table: ResponseTable = serde_json::from_value(body).unwrap();
        assert_eq!(table.col_headings.len(), 2);
        assert_eq!(table.data[0][1], json!("eng"));
    }
}
