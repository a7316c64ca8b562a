//! Append-only audit log with CSV persistence.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::csv;

/// One completed audit, as persisted to the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Wall-clock time of completion, "YYYY-MM-DD HH:MM:SS".
    pub timestamp: String,
    pub auditor_name: String,
    pub advisor_name: String,
    /// Percentage with two decimals and a "%" suffix, e.g. "87.50%".
    pub final_score: String,
}

impl AuditRecord {
    /// Build a record stamped with the current local time.
    pub fn now(auditor_name: &str, advisor_name: &str, final_percentage: f64) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            auditor_name: auditor_name.to_string(),
            advisor_name: advisor_name.to_string(),
            final_score: format!("{final_percentage:.2}%"),
        }
    }
}

/// Append one record to the log, creating the file if needed.
///
/// The handle is released whether or not the write succeeds. Rows are only
/// ever appended; existing rows are never rewritten. Failures propagate to
/// the caller; there is no retry.
pub fn append_record(path: &Path, record: &AuditRecord) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open audit log: {}", path.display()))?;

    let row = csv::encode_row(&[
        &record.timestamp,
        &record.auditor_name,
        &record.advisor_name,
        &record.final_score,
    ]);
    writeln!(file, "{row}")
        .with_context(|| format!("failed to write audit log: {}", path.display()))?;
    file.flush()
        .with_context(|| format!("failed to flush audit log: {}", path.display()))?;
    Ok(())
}

/// Read all records back from the log. A missing log yields an empty list,
/// same fail-soft policy as the criteria source.
pub fn load_records(path: &Path) -> Result<Vec<AuditRecord>> {
    if !path.exists() {
        tracing::warn!("audit log not found: {}", path.display());
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read audit log: {}", path.display()))?;

    csv::parse(&content)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let [timestamp, auditor_name, advisor_name, final_score] = row.as_slice() else {
                anyhow::bail!(
                    "malformed audit log row {} in {}: expected 4 fields, got {}",
                    i + 1,
                    path.display(),
                    row.len()
                );
            };
            Ok(AuditRecord {
                timestamp: timestamp.clone(),
                auditor_name: auditor_name.clone(),
                advisor_name: advisor_name.clone(),
                final_score: final_score.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_formats_score_with_two_decimals() {
        let record = AuditRecord::now("Kim", "Alex", 87.5);
        assert_eq!(record.final_score, "87.50%");
        assert_eq!(record.timestamp.len(), "2026-01-05 10:30:00".len());
    }

    #[test]
    fn append_twice_yields_two_rows_after_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit_log.csv");
        std::fs::write(&path, "2025-12-01 09:00:00,Pat,Sam,100.00%\n").unwrap();

        append_record(&path, &AuditRecord::now("Kim", "Alex", 50.0)).unwrap();
        append_record(&path, &AuditRecord::now("Kim", "Jo", 100.0)).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].auditor_name, "Pat");
        assert_eq!(records[1].final_score, "50.00%");
        assert_eq!(records[2].advisor_name, "Jo");
    }

    #[test]
    fn append_quotes_names_with_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit_log.csv");

        let record = AuditRecord::now("Smith, Jane", "Lee", 75.0);
        append_record(&path, &record).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records[0].auditor_name, "Smith, Jane");
        assert_eq!(records[0].final_score, "75.00%");
    }

    #[test]
    fn load_missing_log_yields_empty() {
        let records = load_records(Path::new("no-such-log.csv")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn load_rejects_malformed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit_log.csv");
        std::fs::write(&path, "just,three,fields\n").unwrap();

        let err = load_records(&path).unwrap_err();
        assert!(err.to_string().contains("expected 4 fields"));
    }
}
