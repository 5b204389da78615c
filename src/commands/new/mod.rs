//! Implementation of the `agent-starterkit new` command.
//!
//! # What `new` does
//!
//! 1. Loads config (`--config`, else `./starterkit.yaml`, else defaults)
//! 2. Resolves pattern, name and output from flags, prompts, or config
//! 3. With `--dry-run`, prints the file plan and stops
//! 4. Refuses a non-empty output directory unless `--force`
//! 5. Generates the project and prints the next steps
//! 6. Appends a history event when `history_file` is configured

mod prompt;
mod target;


use crate::cli::NewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::events::{Event, EventAction, append_event};
use crate::project::{
    GenerationReport, ProjectOptions, ProjectPlan, generate_project, plan_project,
};
use serde_json::json;
use std::io;
use std::path::{Path, PathBuf};

use target::check_target;

/// Execute the `agent-starterkit new` command.
pub fn cmd_new(args: NewArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::discover(config_path)?;

    let options = if args.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        prompt::prompt_options(&args, &config, &mut stdin.lock(), &mut stdout)?
    } else {
        resolve_options(&args, &config)?
    };
    let custom = config.customization()?;

    if args.dry_run {
        let plan = plan_project(&options, &custom)?;
        for line in plan_lines(&options, &plan) {
            println!("{}", line);
        }
        return Ok(());
    }

    check_target(&options.output_path, args.force)?;

    println!("Generating agent project...");
    println!("Pattern: {}", options.pattern);
    println!("Name:    {}", options.name);
    println!("Output:  {}", options.output_path.display());
    println!();

    let report = generate_project(&options, &custom)?;
    record_history(&config, &options, &report);

    println!("Generated {} files.", report.files_written);
    if !report.excluded.is_empty() {
        println!("Skipped {} excluded files:", report.excluded.len());
        for path in &report.excluded {
            println!("  {}", path);
        }
    }
    println!();
    println!("Next steps:");
    println!("  cd {}", options.output_path.display());
    println!("  npm install");
    println!("  npm run dev");
    println!();
    println!("Check the README.md for more information.");

    Ok(())
}

/// Resolve options from flags, falling back to config defaults.
pub(crate) fn resolve_options(args: &NewArgs, config: &Config) -> Result<ProjectOptions> {
    let pattern = args.pattern.as_deref().unwrap_or(&config.default_pattern);
    let name = args.name.as_deref().unwrap_or(&config.default_name);
    let output = args
        .output
        .clone()
        .or_else(|| config.default_output.clone())
        .unwrap_or_else(|| default_output_for(name));

    ProjectOptions::new(pattern, name, output)
}

/// `./<name>`
pub(crate) fn default_output_for(name: &str) -> PathBuf {
    Path::new(".").join(name)
}

fn plan_lines(options: &ProjectOptions, plan: &ProjectPlan) -> Vec<String> {
    let mut lines = vec![format!(
        "Would generate {} files for '{}' ({}) in {}:",
        plan.files.len(),
        options.name,
        plan.pattern_name,
        options.output_path.display()
    )];
    lines.extend(plan.files.iter().map(|file| format!("  {}", file.path)));
    if !plan.excluded.is_empty() {
        lines.push(format!("Excluded by config ({}):", plan.excluded.len()));
        lines.extend(plan.excluded.iter().map(|path| format!("  {}", path)));
    }
    lines
}

fn history_event(options: &ProjectOptions, report: &GenerationReport) -> Event {
    Event::new(EventAction::Generate).with_details(json!({
        "pattern": report.pattern.as_str(),
        "name": options.name.as_str(),
        "output": report.output_path.display().to_string(),
        "files_written": report.files_written,
        "files_excluded": report.excluded.len()
    }))
}

fn record_history(config: &Config, options: &ProjectOptions, report: &GenerationReport) {
    let Some(path) = &config.history_file else {
        return;
    };

    if let Err(e) = append_event(path, &history_event(options, report)) {
        eprintln!("Warning: failed to record generation history: {}", e);
    }
}
