//! The `scorecard run` command: one interactive audit over stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use scorecard_core::error::AuditError;
use scorecard_core::scoring::Audit;
use scorecard_core::session::AuditSession;

use crate::config;

pub fn execute(
    criteria: Option<PathBuf>,
    log: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let cfg = config::load_config_from(config_path.as_deref())?;
    let criteria_path = criteria.unwrap_or(cfg.criteria_path);
    let log_path = log.unwrap_or(cfg.log_path);

    let audit = Audit::load(&criteria_path)?;
    if audit.criteria().is_empty() {
        println!(
            "No criteria found at {}. Run `scorecard init` to create an example file.",
            criteria_path.display()
        );
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_audit(audit, &log_path, &mut input)
}

fn run_audit(audit: Audit, log_path: &std::path::Path, input: &mut impl BufRead) -> Result<()> {
    let mut session = AuditSession::new(audit);

    println!("Setup");
    loop {
        let auditor = prompt(input, "Auditor: ")?;
        let advisor = prompt(input, "Advisor: ")?;
        match session.start(&auditor, &advisor) {
            Ok(()) => break,
            Err(AuditError::MissingName) => {
                println!("Please enter both names to begin.");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let questions: Vec<(u32, String, Vec<String>)> = session
        .audit()
        .criteria()
        .iter()
        .map(|c| (c.id, c.question_text.clone(), c.options.clone()))
        .collect();

    println!("\nAudit Form");
    for (id, question_text, options) in &questions {
        println!("\n{question_text}");
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
        loop {
            let line = prompt(input, &format!("Answer [1-{}]: ", options.len()))?;
            let answer = match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].clone(),
                _ => line,
            };
            match session.record_answer(*id, &answer) {
                Ok(()) => break,
                Err(AuditError::InvalidAnswer { .. }) => {
                    println!("Please pick one of the listed options.");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    let percentage = session.submit(log_path)?;
    println!("\nFinal score: {percentage:.2}%");
    println!("Saved to {}", log_path.display());
    Ok(())
}

fn prompt(input: &mut impl BufRead, text: &str) -> Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("input ended before the audit was finished");
    }
    Ok(line.trim().to_string())
}
