// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! # TalkBankDB Client SDK
//!
//! A Rust client library for TalkBankDB — the query interface to the
//! TalkBank corpora of transcribed conversational data. Query functions
//! cover transcripts, participants, utterances, tokens, token types, CQL
//! pattern search, and n-grams; each returns a uniform table of column
//! headings plus rows.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use talkbankdb_client::client::TalkBankClient;
//! use talkbankdb_client::query::QueryParams;
//!
//! #[tokio::main]
//! async fn main() -> talkbankdb_client::error::Result<()> {
//!     let client = TalkBankClient::new()?;
//!     let params = QueryParams {
//!         corpus_name: Some("childes".to_owned()),
//!         corpora: Some(vec![vec![
//!             "childes".to_owned(),
//!             "Eng-NA".to_owned(),
//!             "MacWhinney".to_owned(),
//!         ]]),
//!         ..QueryParams::default()
//!     };
//!     let table = client.get_transcripts(&params, None).await?;
//!     println!("{} columns, {} rows", table.col_headings.len(), table.data.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] — Connection configuration and HTTP transport.
//! - [`query`] — Query parameters and normalization into the wire envelope.
//! - [`types`] — Wire types (age ranges, CQL components, n-gram specs,
//!   credentials, response tables).
//! - [`views`] — Transcript, participant, utterance, token, and token-type
//!   summary views.
//! - [`patterns`] — CQL pattern search and n-gram queries.
//! - [`paths`] — Path-tree retrieval and corpus path validation.
//! - [`auth`] — Interactive credential collection for protected collections.
//! - [`error`] — Error types and the crate-level `Result` alias.

pub mod auth;
pub mod client;
pub mod error;
pub mod paths;
pub mod patterns;
pub mod query;
pub mod types;
pub mod views;
