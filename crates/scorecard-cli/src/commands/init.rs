//! The `scorecard init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create scorecard.toml
    if std::path::Path::new("scorecard.toml").exists() {
        println!("scorecard.toml already exists, skipping.");
    } else {
        std::fs::write("scorecard.toml", SAMPLE_CONFIG)?;
        println!("Created scorecard.toml");
    }

    // Create example criteria
    if std::path::Path::new("criteria.csv").exists() {
        println!("criteria.csv already exists, skipping.");
    } else {
        std::fs::write("criteria.csv", EXAMPLE_CRITERIA)?;
        println!("Created criteria.csv");
    }

    println!("\nNext steps:");
    println!("  1. Edit criteria.csv with your audit questions");
    println!("  2. Run: scorecard validate --criteria criteria.csv");
    println!("  3. Run: scorecard run");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# scorecard configuration

criteria_path = "criteria.csv"
log_path = "audit_log.csv"
"#;

const EXAMPLE_CRITERIA: &str = "\
id,question_text,option_yes,option_no,option_na
1,Did the advisor use the correct greeting?,Yes,No,
2,Was the caller's identity verified?,Yes,No,
3,Was the hold procedure followed?,Yes,No,N/A
4,Was the case logged with the correct category?,Yes,No,
5,Was a callback offered where appropriate?,Yes,No,N/A
";
