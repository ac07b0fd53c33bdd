// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Error types for the TalkBankDB client SDK.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an alias
//! for `std::result::Result<T, TalkBankError>`. The [`TalkBankError`] enum covers
//! missing required query fields, transport failures, response decoding issues,
//! and terminal I/O problems during credential collection.

use thiserror::Error;

/// Comprehensive error type for TalkBankDB client operations.
///
/// Path validation is deliberately not represented here: an invalid corpus
/// path is an ordinary `false` result, not a failure.
#[derive(Error, Debug)]
pub enum TalkBankError {
    /// A required query field was not supplied by the caller.
    ///
    /// Currently only `corpusName` is required; every other query field has
    /// an empty-container default.
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// An underlying HTTP / network transport error from `reqwest`,
    /// including non-success HTTP statuses.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON of the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client-side validation failed before any request was sent
    /// (e.g. an unparseable base URL).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal I/O failed while collecting credentials.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-level result alias using [`TalkBankError`].
pub type Result<T> = std::result::Result<T, TalkBankError>;
