// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Interactive credential collection for protected collections.
//!
//! Some TalkBankDB collections require per-path credentials. When a view
//! method is called with an authentication prompt, [`collect_credentials`]
//! runs a blocking foreground loop: path, user ID, and password (entered
//! without echo), repeated until the user declines to add another record.
//! The resulting [`Credential`] list is sent once as `nsAuth` and never
//! persisted.
//!
//! Terminal interaction sits behind the [`Prompt`] trait so tests can supply
//! a scripted sequence without a terminal.

use std::io::{self, Write};

use crate::error::Result;
use crate::types::Credential;

/// Source of interactive line and secret input.
pub trait Prompt {
    /// Display `prompt` and read one line of input, without the trailing
    /// newline.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Display `prompt` and read one secret without echoing it.
    fn read_secret(&mut self, prompt: &str) -> Result<String>;
}

/// [`Prompt`] implementation backed by the process terminal.
///
/// Blocking, single-threaded, no timeout.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        Ok(rpassword::prompt_password(prompt)?)
    }
}

/// Collect credential records until the user declines to continue.
///
/// After each record the user is asked `Authenticate another? (Y/N)`; any
/// answer other than `y` (case-insensitive, surrounding whitespace ignored)
/// ends the loop. Records are returned in entry order.
///
/// # Errors
///
/// Returns [`crate::error::TalkBankError::Io`] if reading from the prompt
/// fails.
pub fn collect_credentials(prompt: &mut dyn Prompt) -> Result<Vec<Credential>> {
    let mut credentials = Vec::new();

    loop {
        let path = prompt.read_line("Path to authenticate: ")?;
        let user_id = prompt.read_line("User ID: ")?;
        let password = prompt.read_secret("Password: ")?;

        credentials.push(Credential {
            path,
            user_id,
            password,
        });

        let another = prompt.read_line("Authenticate another? (Y/N): ")?;
        if !another.trim().eq_ignore_ascii_case("y") {
            return Ok(credentials);
        }
    }
}
