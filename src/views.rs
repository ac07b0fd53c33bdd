// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Summary data views: transcripts, participants, utterances, tokens, and
//! token types.
//!
//! Each view is one POST to its route with the normalized query envelope and
//! returns a [`ResponseTable`] whose rows the client passes through without
//! interpretation. Passing `Some(prompt)` as the `auth` argument collects
//! credentials for protected collections before the request is sent.

use crate::auth::Prompt;
use crate::client::TalkBankClient;
use crate::error::Result;
use crate::query::QueryParams;
use crate::types::ResponseTable;

impl TalkBankClient {
    /// Get transcript metadata, one row per transcript.
    ///
    /// Rows carry the transcript link, corpus path, media types, PID,
    /// languages, recording date, and design/activity/group types.
    ///
    /// # Arguments
    ///
    /// * `params` — Query filters; `corpus_name` is required.
    /// * `auth`   — Credential prompt for protected collections, or `None`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TalkBankError::MissingRequiredField`] if
    /// `corpus_name` is unset, or a transport/decode error on failure.
    pub async fn get_transcripts(
        &self,
        params: &QueryParams,
        auth: Option<&mut dyn Prompt>,
    ) -> Result<ResponseTable> {
        self.data_query("getTranscriptSummary", params, auth).await
    }

    /// Get participant information, one row per transcript participant.
    ///
    /// Rows carry the speaker's ID, name, role, language, age, gender, and
    /// word/utterance counts.
    pub async fn get_participants(
        &self,
        params: &QueryParams,
        auth: Option<&mut dyn Prompt>,
    ) -> Result<ResponseTable> {
        self.data_query("getParticipantSummary", params, auth).await
    }

    /// Get utterance text and metadata, one row per utterance.
    ///
    /// Rows carry the utterance sequence number, speaker ID and role,
    /// postcodes, GEMS, the utterance itself, and media start/end times.
    pub async fn get_utterances(
        &self,
        params: &QueryParams,
        auth: Option<&mut dyn Prompt>,
    ) -> Result<ResponseTable> {
        self.data_query("getUtteranceSummary", params, auth).await
    }

    /// Get tokens (words), one row per token occurrence.
    ///
    /// Rows carry the utterance and word sequence numbers, speaker role and
    /// ID, the word, its stem, and its part-of-speech code.
    pub async fn get_tokens(
        &self,
        params: &QueryParams,
        auth: Option<&mut dyn Prompt>,
    ) -> Result<ResponseTable> {
        self.data_query("getTokenSummary", params, auth).await
    }

    /// Get token types, one row per distinct word type.
    ///
    /// Rows carry the speaker's role, the word with its occurrence count,
    /// its part of speech, and its stem.
    pub async fn get_token_types(
        &self,
        params: &QueryParams,
        auth: Option<&mut dyn Prompt>,
    ) -> Result<ResponseTable> {
        self.data_query("getTokenTypes", params, auth).await
    }
}
