//! The `scorecard history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use scorecard_core::audit_log;

use crate::config;

pub fn execute(
    log: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let cfg = config::load_config_from(config_path.as_deref())?;
    let log_path = log.unwrap_or(cfg.log_path);

    let records = audit_log::load_records(&log_path)?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        _ => {
            if records.is_empty() {
                println!("No audits recorded at {}.", log_path.display());
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Timestamp", "Auditor", "Advisor", "Score"]);
            for r in &records {
                table.add_row(vec![
                    Cell::new(&r.timestamp),
                    Cell::new(&r.auditor_name),
                    Cell::new(&r.advisor_name),
                    Cell::new(&r.final_score),
                ]);
            }
            println!("{table}");
            println!("{} audit(s)", records.len());
        }
    }

    Ok(())
}
