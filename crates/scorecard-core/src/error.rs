//! Audit domain error types.
//!
//! Defined here so callers can match on specific failures (a 0/0 audit, a
//! bad criterion id) instead of string-matching generic errors.

use thiserror::Error;

use crate::session::SessionState;

/// Errors that can occur while scoring or driving an audit session.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Every answered criterion was excluded from the denominator, so no
    /// percentage can be computed.
    #[error("no scoreable answers: every criterion was excluded from the denominator")]
    ZeroDenominator,

    /// No criterion with this id exists.
    #[error("unknown criterion id: {0}")]
    UnknownCriterion(u32),

    /// The answer map has no entry for this criterion.
    #[error("missing answer for criterion {0}")]
    MissingAnswer(u32),

    /// The answer is not one of the criterion's options.
    #[error("answer {answer:?} is not an option for criterion {criterion_id}")]
    InvalidAnswer { criterion_id: u32, answer: String },

    /// A session action was attempted from the wrong state.
    #[error("cannot {action} while in the {from} state")]
    InvalidTransition {
        from: SessionState,
        action: &'static str,
    },

    /// Both participant names are required before an audit can start.
    #[error("auditor and advisor names must both be non-empty")]
    MissingName,
}
