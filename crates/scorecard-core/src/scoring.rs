//! Answer scoring and audit finalization.
//!
//! Scoring matches the literal answer labels: "Yes" earns the point, "No"
//! counts against the denominator, and anything else (the not-applicable
//! label included) contributes to neither. That asymmetry is what makes
//! not-applicable different from "No".

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::audit_log::{self, AuditRecord};
use crate::criteria;
use crate::error::AuditError;
use crate::model::{Criterion, ScoreResult};

/// The affirmative answer label the engine scores against.
pub const YES_LABEL: &str = "Yes";
/// The negative answer label the engine scores against.
pub const NO_LABEL: &str = "No";

/// Score one answer against one criterion. Pure: identical inputs always
/// produce identical results.
pub fn score_answer(criterion: &Criterion, answer: &str) -> ScoreResult {
    let result = match answer {
        YES_LABEL => ScoreResult {
            score: 1,
            possible: 1,
        },
        NO_LABEL => ScoreResult {
            score: 0,
            possible: 1,
        },
        _ => ScoreResult {
            score: 0,
            possible: 0,
        },
    };
    tracing::trace!(
        criterion = criterion.id,
        answer,
        score = result.score,
        possible = result.possible,
        "scored answer"
    );
    result
}

/// Sum score contributions into a final percentage.
///
/// A total `possible` of zero has no valid score and is reported as
/// [`AuditError::ZeroDenominator`], never as a silent 0%.
pub fn final_percentage(results: &[ScoreResult]) -> Result<f64, AuditError> {
    let score: u32 = results.iter().map(|r| r.score).sum();
    let possible: u32 = results.iter().map(|r| r.possible).sum();
    if possible == 0 {
        return Err(AuditError::ZeroDenominator);
    }
    Ok(100.0 * f64::from(score) / f64::from(possible))
}

/// One audit's worth of criteria, exposed read-only to the caller.
#[derive(Debug, Clone)]
pub struct Audit {
    criteria: Vec<Criterion>,
}

impl Audit {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    /// Load criteria from a CSV source. A missing source yields an audit
    /// with no criteria.
    pub fn load(criteria_path: &Path) -> Result<Self> {
        Ok(Self::new(criteria::load_criteria(criteria_path)?))
    }

    /// The criteria in source order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Look up a criterion by id.
    pub fn criterion(&self, id: u32) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    /// Score an answer against the criterion with the given id.
    pub fn score_by_id(&self, id: u32, answer: &str) -> Result<ScoreResult, AuditError> {
        let criterion = self.criterion(id).ok_or(AuditError::UnknownCriterion(id))?;
        Ok(score_answer(criterion, answer))
    }

    /// Score every criterion against the answer map and compute the final
    /// percentage. Every criterion must have an answer.
    pub fn finalize(&self, answers: &HashMap<u32, String>) -> Result<f64, AuditError> {
        let results = self
            .criteria
            .iter()
            .map(|c| {
                let answer = answers.get(&c.id).ok_or(AuditError::MissingAnswer(c.id))?;
                Ok(score_answer(c, answer))
            })
            .collect::<Result<Vec<_>, AuditError>>()?;
        final_percentage(&results)
    }

    /// Finalize the audit and append the outcome to the log.
    ///
    /// If the append fails the error propagates and the audit is unsaved;
    /// there is no retry.
    pub fn finalize_and_persist(
        &self,
        log_path: &Path,
        auditor_name: &str,
        advisor_name: &str,
        answers: &HashMap<u32, String>,
    ) -> Result<f64> {
        let percentage = self.finalize(answers)?;
        let record = AuditRecord::now(auditor_name, advisor_name, percentage);
        audit_log::append_record(log_path, &record)
            .with_context(|| format!("failed to save audit to {}", log_path.display()))?;
        tracing::info!(
            auditor = auditor_name,
            advisor = advisor_name,
            final_score = %record.final_score,
            "audit saved"
        );
        Ok(percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(id: u32) -> Criterion {
        Criterion::new(id, "Test question", "Yes", "No", "N/A")
    }

    #[test]
    fn yes_scores_one_of_one() {
        let result = score_answer(&criterion(1), "Yes");
        assert_eq!(
            result,
            ScoreResult {
                score: 1,
                possible: 1
            }
        );
    }

    #[test]
    fn no_scores_zero_of_one() {
        let result = score_answer(&criterion(2), "No");
        assert_eq!(
            result,
            ScoreResult {
                score: 0,
                possible: 1
            }
        );
    }

    #[test]
    fn other_answers_score_zero_of_zero() {
        let excluded = ScoreResult {
            score: 0,
            possible: 0,
        };
        for answer in ["N/A", "", "yes", "maybe", "YES "] {
            assert_eq!(score_answer(&criterion(3), answer), excluded, "{answer:?}");
        }
    }

    #[test]
    fn score_answer_is_idempotent() {
        let c = criterion(4);
        assert_eq!(score_answer(&c, "Yes"), score_answer(&c, "Yes"));
        assert_eq!(score_answer(&c, "N/A"), score_answer(&c, "N/A"));
    }

    #[test]
    fn all_yes_is_one_hundred_percent() {
        let audit = Audit::new(vec![criterion(1), criterion(2)]);
        let answers = HashMap::from([(1, "Yes".to_string()), (2, "Yes".to_string())]);
        let pct = audit.finalize(&answers).unwrap();
        assert_eq!(pct, 100.0);
    }

    #[test]
    fn one_yes_one_no_is_fifty_percent() {
        let audit = Audit::new(vec![criterion(1), criterion(2)]);
        let answers = HashMap::from([(1, "Yes".to_string()), (2, "No".to_string())]);
        let pct = audit.finalize(&answers).unwrap();
        assert_eq!(pct, 50.0);
    }

    #[test]
    fn not_applicable_shrinks_the_denominator() {
        let audit = Audit::new(vec![criterion(1), criterion(2), criterion(3)]);
        let answers = HashMap::from([
            (1, "Yes".to_string()),
            (2, "No".to_string()),
            (3, "N/A".to_string()),
        ]);
        let pct = audit.finalize(&answers).unwrap();
        assert_eq!(pct, 50.0);
    }

    #[test]
    fn all_not_applicable_is_zero_denominator() {
        let audit = Audit::new(vec![criterion(1)]);
        let answers = HashMap::from([(1, "N/A".to_string())]);
        let err = audit.finalize(&answers).unwrap_err();
        assert!(matches!(err, AuditError::ZeroDenominator));
    }

    #[test]
    fn missing_answer_is_an_error() {
        let audit = Audit::new(vec![criterion(1), criterion(2)]);
        let answers = HashMap::from([(1, "Yes".to_string())]);
        let err = audit.finalize(&answers).unwrap_err();
        assert!(matches!(err, AuditError::MissingAnswer(2)));
    }

    #[test]
    fn score_by_id_rejects_unknown_criterion() {
        let audit = Audit::new(vec![criterion(1)]);
        let err = audit.score_by_id(99, "Yes").unwrap_err();
        assert!(matches!(err, AuditError::UnknownCriterion(99)));
    }

    #[test]
    fn finalize_and_persist_appends_to_log() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("audit_log.csv");

        let audit = Audit::new(vec![criterion(1), criterion(2)]);
        let answers = HashMap::from([(1, "Yes".to_string()), (2, "No".to_string())]);
        let pct = audit
            .finalize_and_persist(&log_path, "Kim", "Alex", &answers)
            .unwrap();
        assert_eq!(pct, 50.0);

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("Kim,Alex,50.00%"));
    }

    #[test]
    fn zero_denominator_audit_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("audit_log.csv");

        let audit = Audit::new(vec![criterion(1)]);
        let answers = HashMap::from([(1, "N/A".to_string())]);
        let result = audit.finalize_and_persist(&log_path, "Kim", "Alex", &answers);
        assert!(result.is_err());
        assert!(!log_path.exists());
    }
}
