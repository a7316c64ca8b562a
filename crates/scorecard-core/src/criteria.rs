//! CSV criteria loader.
//!
//! Loads the audit questions from a CSV source and validates them.

use std::path::Path;

use anyhow::{Context, Result};

use crate::csv;
use crate::model::Criterion;
use crate::scoring::{NO_LABEL, YES_LABEL};

const REQUIRED_COLUMNS: [&str; 5] = [
    "id",
    "question_text",
    "option_yes",
    "option_no",
    "option_na",
];

/// Load criteria from a CSV file.
///
/// A missing file yields an empty list rather than an error, so a caller can
/// still render an empty form. Anything else (unreadable file, malformed
/// rows) is a hard error.
pub fn load_criteria(path: &Path) -> Result<Vec<Criterion>> {
    if !path.exists() {
        tracing::warn!("criteria source not found: {}", path.display());
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read criteria file: {}", path.display()))?;

    parse_criteria_str(&content)
        .with_context(|| format!("failed to parse criteria file: {}", path.display()))
}

/// Parse criteria from CSV content (useful for testing).
///
/// The first row is the header; row order defines question order.
pub fn parse_criteria_str(content: &str) -> Result<Vec<Criterion>> {
    let rows = csv::parse(content);
    let Some((header, data_rows)) = rows.split_first() else {
        return Ok(Vec::new());
    };

    let column = |name: &str| -> Result<usize> {
        header
            .iter()
            .position(|h| h.as_str() == name)
            .with_context(|| format!("missing required column: {name}"))
    };
    let columns: Vec<usize> = REQUIRED_COLUMNS
        .iter()
        .map(|&name| column(name))
        .collect::<Result<_>>()?;
    let [id_col, text_col, yes_col, no_col, na_col] = columns[..] else {
        unreachable!()
    };

    data_rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let field = |col: usize| -> Result<&str> {
                row.get(col)
                    .map(String::as_str)
                    .with_context(|| format!("row {}: too few columns", i + 2))
            };
            let id: u32 = field(id_col)?
                .trim()
                .parse()
                .with_context(|| format!("row {}: invalid id", i + 2))?;
            Ok(Criterion::new(
                id,
                field(text_col)?,
                field(yes_col)?,
                field(no_col)?,
                field(na_col)?,
            ))
        })
        .collect()
}

/// A warning from criteria validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The criterion id (if applicable).
    pub criterion_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Validate loaded criteria for common issues.
pub fn validate_criteria(criteria: &[Criterion]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate ids
    let mut seen_ids = std::collections::HashSet::new();
    for c in criteria {
        if !seen_ids.insert(c.id) {
            warnings.push(ValidationWarning {
                criterion_id: Some(c.id),
                message: format!("duplicate criterion id: {}", c.id),
            });
        }
    }

    // Check for empty question text
    for c in criteria {
        if c.question_text.trim().is_empty() {
            warnings.push(ValidationWarning {
                criterion_id: Some(c.id),
                message: "question text is empty".into(),
            });
        }
    }

    // Scoring matches the literal labels, so anything else will never count
    for c in criteria {
        if c.options[0] != YES_LABEL {
            warnings.push(ValidationWarning {
                criterion_id: Some(c.id),
                message: format!(
                    "affirmative label {:?} will not be scored (scoring matches {YES_LABEL:?})",
                    c.options[0]
                ),
            });
        }
        if c.options[1] != NO_LABEL {
            warnings.push(ValidationWarning {
                criterion_id: Some(c.id),
                message: format!(
                    "negative label {:?} will not count toward the denominator (scoring matches {NO_LABEL:?})",
                    c.options[1]
                ),
            });
        }
    }

    warnings
}
