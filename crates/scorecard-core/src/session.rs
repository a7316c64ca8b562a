//! Audit session state machine.
//!
//! Tracks one audit from setup through answering to completion. The
//! presentation layer holds an [`AuditSession`] and drives it with explicit
//! actions; transitions from the wrong state are errors, not panics.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use anyhow::Result;

use crate::error::AuditError;
use crate::scoring::Audit;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Collecting participant names.
    Setup,
    /// Collecting one answer per criterion.
    Answering,
    /// Finalized and persisted.
    Completed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Setup => "setup",
            SessionState::Answering => "answering",
            SessionState::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// One audit session: the loaded criteria plus collected progress.
#[derive(Debug)]
pub struct AuditSession {
    audit: Audit,
    state: SessionState,
    auditor_name: String,
    advisor_name: String,
    answers: HashMap<u32, String>,
    final_percentage: Option<f64>,
}

impl AuditSession {
    pub fn new(audit: Audit) -> Self {
        Self {
            audit,
            state: SessionState::Setup,
            auditor_name: String::new(),
            advisor_name: String::new(),
            answers: HashMap::new(),
            final_percentage: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn audit(&self) -> &Audit {
        &self.audit
    }

    /// The percentage from the last completed audit, if any.
    pub fn final_percentage(&self) -> Option<f64> {
        self.final_percentage
    }

    /// Setup → Answering. Both names are required.
    pub fn start(&mut self, auditor_name: &str, advisor_name: &str) -> Result<(), AuditError> {
        if self.state != SessionState::Setup {
            return Err(AuditError::InvalidTransition {
                from: self.state,
                action: "start",
            });
        }
        if auditor_name.trim().is_empty() || advisor_name.trim().is_empty() {
            return Err(AuditError::MissingName);
        }
        self.auditor_name = auditor_name.trim().to_string();
        self.advisor_name = advisor_name.trim().to_string();
        self.state = SessionState::Answering;
        Ok(())
    }

    /// Record one answer. The answer must be one of the criterion's options;
    /// re-answering a criterion replaces the previous answer.
    pub fn record_answer(&mut self, criterion_id: u32, answer: &str) -> Result<(), AuditError> {
        if self.state != SessionState::Answering {
            return Err(AuditError::InvalidTransition {
                from: self.state,
                action: "record an answer",
            });
        }
        let criterion = self
            .audit
            .criterion(criterion_id)
            .ok_or(AuditError::UnknownCriterion(criterion_id))?;
        if !criterion.options.iter().any(|o| o == answer) {
            return Err(AuditError::InvalidAnswer {
                criterion_id,
                answer: answer.to_string(),
            });
        }
        self.answers.insert(criterion_id, answer.to_string());
        Ok(())
    }

    /// Answering → Completed: finalize, persist, return the percentage.
    ///
    /// On failure (missing answer, zero denominator, log write) the session
    /// stays in Answering so the caller can correct and resubmit.
    pub fn submit(&mut self, log_path: &Path) -> Result<f64> {
        if self.state != SessionState::Answering {
            return Err(AuditError::InvalidTransition {
                from: self.state,
                action: "submit",
            }
            .into());
        }
        let percentage = self.audit.finalize_and_persist(
            log_path,
            &self.auditor_name,
            &self.advisor_name,
            &self.answers,
        )?;
        self.final_percentage = Some(percentage);
        self.state = SessionState::Completed;
        Ok(percentage)
    }

    /// Completed → Setup, clearing collected names and answers.
    pub fn new_audit(&mut self) -> Result<(), AuditError> {
        if self.state != SessionState::Completed {
            return Err(AuditError::InvalidTransition {
                from: self.state,
                action: "start a new audit",
            });
        }
        self.auditor_name.clear();
        self.advisor_name.clear();
        self.answers.clear();
        self.final_percentage = None;
        self.state = SessionState::Setup;
        Ok(())
    }
}
