//! Interactive prompts for `new --interactive`.
//!
//! Prompts read one line at a time. An empty line or end of input accepts the
//! shown default. Values already given as flags are not asked for.

use super::default_output_for;
use crate::cli::NewArgs;
use crate::config::Config;
use crate::error::{Result, ScaffoldError};
use crate::pattern::PatternId;
use crate::project::{ProjectName, ProjectOptions};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Ask for every option not supplied on the command line.
pub(super) fn prompt_options<R: BufRead, W: Write>(
    args: &NewArgs,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<ProjectOptions> {
    let pattern = match &args.pattern {
        Some(pattern) => pattern.clone(),
        None => prompt_pattern(config, input, out)?.as_str().to_string(),
    };

    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt_name(&config.default_name, input, out)?,
    };

    let output = match (&args.output, &config.default_output) {
        (Some(output), _) => output.clone(),
        (None, Some(configured)) => prompt_output(configured.clone(), input, out)?,
        (None, None) => prompt_output(default_output_for(&name), input, out)?,
    };

    ProjectOptions::new(&pattern, &name, output)
}

fn prompt_pattern<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<PatternId> {
    let default_index = PatternId::ALL
        .iter()
        .position(|id| id.as_str() == config.default_pattern)
        .unwrap_or(0);

    write_out(out, "Which agent pattern would you like to use?\n")?;
    for (i, id) in PatternId::ALL.iter().enumerate() {
        let pattern = id.config()?;
        write_out(
            out,
            &format!("  {}) {} - {}\n", i + 1, pattern.name, pattern.description),
        )?;
    }

    loop {
        write_out(out, &format!("Pattern [{}]: ", default_index + 1))?;
        let Some(answer) = read_answer(input)? else {
            return Ok(PatternId::ALL[default_index]);
        };
        if answer.is_empty() {
            return Ok(PatternId::ALL[default_index]);
        }

        if let Ok(n) = answer.parse::<usize>()
            && (1..=PatternId::ALL.len()).contains(&n)
        {
            return Ok(PatternId::ALL[n - 1]);
        }
        if let Ok(id) = answer.parse::<PatternId>() {
            return Ok(id);
        }

        write_out(
            out,
            &format!(
                "Please enter a number between 1 and {} or a pattern id.\n",
                PatternId::ALL.len()
            ),
        )?;
    }
}

fn prompt_name<R: BufRead, W: Write>(default: &str, input: &mut R, out: &mut W) -> Result<String> {
    loop {
        write_out(out, &format!("Project name [{}]: ", default))?;
        let answer = match read_answer(input)? {
            Some(answer) if !answer.is_empty() => answer,
            _ => return Ok(default.to_string()),
        };

        if ProjectName::new(&answer).is_ok() {
            return Ok(answer);
        }
        write_out(
            out,
            "Project name can only contain letters, numbers, hyphens, and underscores.\n",
        )?;
    }
}

fn prompt_output<R: BufRead, W: Write>(
    default: PathBuf,
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf> {
    write_out(out, &format!("Output directory [{}]: ", default.display()))?;
    match read_answer(input)? {
        Some(answer) if !answer.is_empty() => Ok(PathBuf::from(answer)),
        _ => Ok(default),
    }
}

/// Read one trimmed line. `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| ScaffoldError::UserError(format!("failed to read input: {}", e)))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_out<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| ScaffoldError::UserError(format!("failed to write prompt: {}", e)))
}
