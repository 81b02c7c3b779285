//! Contact form "signal strength": a 0-100 completeness score derived
//! from the current field values, gating submission, plus the submission
//! phase machine. Scoring is synchronous and recomputed on every change;
//! the asynchronous send itself happens in the host layer, which reports
//! the outcome back via [`ContactForm::finish_submit`].

use thiserror::Error;

/// Submission is allowed at or above this score.
pub const SUBMIT_THRESHOLD: u32 = 50;
pub const MAX_SCORE: u32 = 100;

/// Why a send failed. Shown to the visitor next to the retry button; the
/// entered fields are kept so nothing is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("could not reach the contact service")]
    Unreachable,
    #[error("the contact service rejected the message")]
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(SendError),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Index into the persona's intent list, if one was picked.
    pub intent: Option<usize>,
    pub phase: Phase,
}

impl ContactForm {
    /// Cumulative completeness score, clamped to 100. Contributions are
    /// independent; no probabilistic normalisation.
    pub fn score(&self) -> u32 {
        let mut score = 10;
        if self.name.chars().count() > 2 {
            score += 20;
        }
        if email_looks_valid(&self.email) {
            score += 30;
        }
        if self.message.chars().count() > 10 {
            score += 20;
        }
        if self.intent.is_some() {
            score += 20;
        }
        score.min(MAX_SCORE)
    }

    pub fn can_submit(&self) -> bool {
        self.score() >= SUBMIT_THRESHOLD
    }

    /// Move to Sending if the gate allows it and nothing is in flight.
    /// Retrying from Failed is allowed; the fields are still there.
    /// Returns whether the transition happened.
    pub fn begin_submit(&mut self) -> bool {
        let ready = matches!(self.phase, Phase::Idle | Phase::Failed(_));
        if !ready || !self.can_submit() {
            return false;
        }
        self.phase = Phase::Sending;
        true
    }

    /// Host layer reports the send outcome. Success clears the form;
    /// failure keeps every entered value for retry. Ignored unless a
    /// send is actually in flight.
    pub fn finish_submit(&mut self, outcome: Result<(), SendError>) {
        if self.phase != Phase::Sending {
            return;
        }
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.intent = None;
                self.phase = Phase::Sent;
            }
            Err(e) => self.phase = Phase::Failed(e),
        }
    }

    /// Back to Idle from the Sent confirmation (the host schedules this
    /// a few seconds after a successful send).
    pub fn reset_phase(&mut self) {
        if self.phase == Phase::Sent {
            self.phase = Phase::Idle;
        }
    }
}

/// Loose shape check, nothing more: some non-space run containing
/// `local@host.tld` with each part non-empty. Deliberately far short of
/// RFC address validation.
pub fn email_looks_valid(email: &str) -> bool {
    email.split_whitespace().any(|token| {
        let Some(at) = token.find('@') else {
            return false;
        };
        if at == 0 {
            return false;
        }
        let after = &token[at + 1..];
        after
            .char_indices()
            .any(|(k, c)| c == '.' && k > 0 && k + 1 < after.len())
    })
}
