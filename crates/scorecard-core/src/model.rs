//! Core data model types for scorecard.
//!
//! These are the fundamental types the rest of the system uses to represent
//! audit questions and score contributions.

use serde::{Deserialize, Serialize};

/// A single audit question with its answer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Criterion {
    /// Unique identifier, assigned by source order.
    pub id: u32,
    /// The question shown to the auditor.
    pub question_text: String,
    /// Answer labels in display order: affirmative, negative, and an
    /// optional not-applicable entry.
    pub options: Vec<String>,
}

impl Criterion {
    /// Build a criterion from the source columns. The not-applicable option
    /// is included only when its label is non-empty, so the answer set has
    /// either two or three entries.
    pub fn new(
        id: u32,
        question_text: impl Into<String>,
        option_yes: impl Into<String>,
        option_no: impl Into<String>,
        option_na: impl Into<String>,
    ) -> Self {
        let mut options = vec![option_yes.into(), option_no.into()];
        let na = option_na.into();
        if !na.is_empty() {
            options.push(na);
        }
        Self {
            id,
            question_text: question_text.into(),
            options,
        }
    }

    /// Whether this criterion offers a not-applicable answer.
    pub fn allows_not_applicable(&self) -> bool {
        self.options.len() == 3
    }
}

/// The contribution of one answered criterion to the final score.
///
/// A not-applicable answer contributes zero to both fields, which is what
/// keeps it out of the denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Points earned.
    pub score: u32,
    /// Points that were possible.
    pub possible: u32,
}
