//! The `scorecard validate` command.

use std::path::PathBuf;

use anyhow::Result;

use scorecard_core::criteria;

pub fn execute(criteria_path: PathBuf) -> Result<()> {
    if !criteria_path.exists() {
        anyhow::bail!("criteria file not found: {}", criteria_path.display());
    }

    let criteria = criteria::load_criteria(&criteria_path)?;
    println!(
        "Criteria: {} ({} questions)",
        criteria_path.display(),
        criteria.len()
    );

    let warnings = criteria::validate_criteria(&criteria);
    for w in &warnings {
        let prefix = w
            .criterion_id
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All criteria valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
