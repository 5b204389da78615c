//! The `augmented-llm` pattern: one research-assistant agent with web search,
//! file I/O, arithmetic and key/value memory tools, plus input and output
//! guardrails.

use super::{PatternConfig, PatternId, TemplateFile, compose};
use crate::error::Result;

macro_rules! template {
    ($path:literal) => {
        embedded!("augmented-llm", $path)
    };
}

pub(super) const NAME: &str = "Augmented LLM";
pub(super) const DESCRIPTION: &str = "Enhanced LLM with tools, retrieval, and memory capabilities";

pub(super) fn pattern() -> Result<PatternConfig> {
    let files = compose(
        PatternId::AugmentedLlm,
        [
            package_files(),
            agent_files(),
            tool_files(),
            guardrail_files(),
            test_files(),
        ],
    )?;

    Ok(PatternConfig {
        id: PatternId::AugmentedLlm,
        name: NAME.to_string(),
        description: DESCRIPTION.to_string(),
        files,
    })
}

/// Manifest, compiler/lint/test configuration, environment templates and README.
pub(super) fn package_files() -> Vec<TemplateFile> {
    vec![
        template!("package.json"),
        template!("tsconfig.json"),
        template!(".env"),
        template!(".env.example"),
        template!("eslint.config.js"),
        template!("jest.config.js"),
        template!("README.md"),
    ]
}

/// Entry point, agent definition and shared context type.
pub(super) fn agent_files() -> Vec<TemplateFile> {
    vec![
        template!("src/index.ts"),
        template!("src/agents/research-assistant.ts"),
        template!("src/context/types.ts"),
        template!("src/mcp-servers/.gitkeep"),
    ]
}

pub(super) fn tool_files() -> Vec<TemplateFile> {
    vec![
        template!("src/tools/web-search.ts"),
        template!("src/tools/file-system.ts"),
        template!("src/tools/calculator.ts"),
        template!("src/tools/memory.ts"),
    ]
}

pub(super) fn guardrail_files() -> Vec<TemplateFile> {
    vec![
        template!("src/guardrails/input.ts"),
        template!("src/guardrails/output.ts"),
    ]
}

pub(super) fn test_files() -> Vec<TemplateFile> {
    vec![template!("src/tests/agent.test.ts")]
}
