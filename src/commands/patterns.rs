//! Implementation of the `agent-starterkit patterns` command.

use crate::error::Result;
use crate::pattern::PatternId;

/// Print every registered pattern with its display name and description.
pub fn cmd_patterns() -> Result<()> {
    println!("Available patterns:");
    println!();
    for line in pattern_lines()? {
        println!("{}", line);
    }
    println!();
    println!("Generate one with `agent-starterkit new --pattern <ID> --name <NAME>`.");

    Ok(())
}

fn pattern_lines() -> Result<Vec<String>> {
    let width = PatternId::ALL
        .iter()
        .map(|id| id.as_str().len())
        .max()
        .unwrap_or(0);

    PatternId::ALL
        .iter()
        .map(|id| -> Result<String> {
            let config = id.config()?;
            Ok(format!(
                "  {:<width$}  {} - {}",
                id.as_str(),
                config.name,
                config.description,
                width = width
            ))
        })
        .collect()
}
