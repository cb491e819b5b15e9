// Rust guideline compliant 2026-10-18

//! Implementation of the `stagefmt rules` command.

use anyhow::Result;
use stagefmt_core::RuleTable;
use tabled::{builder::Builder, settings::Style};

/// Prints the extension to formatter table.
///
/// # Arguments
///
/// * `json` - Print a JSON array instead of a table
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    println!("{}", format_rules(&RuleTable::default(), json)?);
    Ok(())
}

/// Renders `rules` in table order, as a table or as JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_rules(rules: &RuleTable, json: bool) -> Result<String> {
    if json {
        let rules: Vec<_> = rules.iter().collect();
        return Ok(serde_json::to_string_pretty(&rules)?);
    }

    if rules.is_empty() {
        return Ok("No formatter rules.".to_string());
    }

    let mut builder = Builder::default();
    builder.push_record(vec!["Extension", "Command"]);
    for rule in rules.iter() {
        builder.push_record(vec![rule.extension.as_str(), rule.template.as_str()]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    Ok(table.to_string())
}
