use super::*;
use crate::test_support::DirGuard;
use globset::{Glob, GlobSetBuilder};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

const AUGMENTED: &str = "augmented-llm";

fn options(root: &std::path::Path) -> ProjectOptions {
    ProjectOptions::new(AUGMENTED, "test-project", root).unwrap()
}

fn exclude(patterns: &[&str]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).unwrap());
    }
    builder.build().unwrap()
}

#[test]
fn project_name_accepts_letters_digits_dash_underscore() {
    for name in ["test-project", "my_agent", "Agent42", "x"] {
        assert!(ProjectName::new(name).is_ok(), "{} should be valid", name);
    }
}

#[test]
fn project_name_rejects_everything_else() {
    for name in ["", "has space", "dots.js", "a/b", "../up", "naïve"] {
        let err = ProjectName::new(name).unwrap_err();
        assert!(
            matches!(err, ScaffoldError::InvalidProjectName(ref n) if n == name),
            "{} should be rejected",
            name
        );
    }
}

#[test]
fn options_reject_unknown_pattern() {
    let err = ProjectOptions::new("swarm", "test-project", "out").unwrap_err();
    assert!(matches!(err, ScaffoldError::UnknownPattern(ref p) if p == "swarm"));
}

#[test]
fn plan_renders_required_variables() {
    let temp_dir = TempDir::new().unwrap();
    let plan = plan_project(&options(temp_dir.path()), &Customization::default()).unwrap();

    assert_eq!(plan.pattern, PatternId::AugmentedLlm);
    assert_eq!(plan.pattern_name, "Augmented LLM");
    assert!(plan.excluded.is_empty());

    let readme = plan.files.iter().find(|f| f.path == "README.md").unwrap();
    assert!(readme.content.starts_with("# test-project"));
    assert!(readme.content.contains("`augmented-llm`"));

    for file in &plan.files {
        assert!(
            !file.content.contains("{{PROJECT_NAME}}"),
            "{} still has a placeholder",
            file.path
        );
    }
}

#[test]
fn plan_does_not_touch_the_filesystem() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("planned");

    plan_project(&options(&root), &Customization::default()).unwrap();

    assert!(!root.exists());
}

#[test]
fn custom_variables_cannot_override_required_ones() {
    let temp_dir = TempDir::new().unwrap();
    let custom = Customization {
        variables: BTreeMap::from([
            ("PROJECT_NAME".to_string(), "hijacked".to_string()),
            ("AUTHOR".to_string(), "Ada".to_string()),
        ]),
        exclude: None,
    };

    let plan = plan_project(&options(temp_dir.path()), &custom).unwrap();

    let manifest = plan.files.iter().find(|f| f.path == "package.json").unwrap();
    assert!(manifest.content.contains("\"name\": \"test-project\""));
    assert!(!manifest.content.contains("hijacked"));
}

#[test]
fn excluded_paths_are_reported_and_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let full = plan_project(&options(temp_dir.path()), &Customization::default()).unwrap();
    let custom = Customization {
        variables: BTreeMap::new(),
        exclude: Some(exclude(&["src/tests/**", ".env"])),
    };

    let plan = plan_project(&options(temp_dir.path()), &custom).unwrap();

    assert_eq!(
        plan.excluded,
        vec![".env".to_string(), "src/tests/agent.test.ts".to_string()]
    );
    assert_eq!(plan.files.len() + plan.excluded.len(), full.files.len());
    assert!(plan.files.iter().any(|f| f.path == ".env.example"));
}

#[test]
fn generate_writes_the_complete_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("test-output");

    let report = generate_project(&options(&root), &Customization::default()).unwrap();

    let expected = PatternId::AugmentedLlm.config().unwrap().files.len();
    assert_eq!(report.files_written, expected);
    assert_eq!(report.output_path, root);
    assert_eq!(report.pattern, PatternId::AugmentedLlm);

    for dir in ["src/tools", "src/guardrails", "src/context", "src/tests", "src/mcp-servers"] {
        assert!(root.join(dir).is_dir(), "{} missing", dir);
    }
    assert!(root.join("src/mcp-servers/.gitkeep").is_file());
}

#[test]
fn generate_with_unknown_pattern_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("never");

    let result = ProjectOptions::new("does-not-exist", "test-project", &root)
        .and_then(|opts| generate_project(&opts, &Customization::default()));

    assert!(matches!(result, Err(ScaffoldError::UnknownPattern(_))));
    assert!(!root.exists());
}

#[test]
fn generate_twice_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("twice");
    let opts = options(&root);

    generate_project(&opts, &Customization::default()).unwrap();
    let before = fs::read_to_string(root.join("src/index.ts")).unwrap();
    let report = generate_project(&opts, &Customization::default()).unwrap();
    let after = fs::read_to_string(root.join("src/index.ts")).unwrap();

    assert_eq!(before, after);
    assert_eq!(
        report.files_written,
        PatternId::AugmentedLlm.config().unwrap().files.len()
    );
}

#[test]
#[serial]
fn generate_into_relative_path() {
    let temp_dir = TempDir::new().unwrap();
    let _guard = DirGuard::new(temp_dir.path());

    let opts = ProjectOptions::new(AUGMENTED, "test-project", "./test-output").unwrap();
    generate_project(&opts, &Customization::default()).unwrap();

    let root = temp_dir.path().join("test-output");
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "test-project");
    assert!(
        manifest["description"]
            .as_str()
            .unwrap()
            .contains("Enhanced LLM with tools, retrieval, and memory capabilities project")
    );

    for file in [
        "tsconfig.json",
        ".env.example",
        "README.md",
        "src/index.ts",
        "src/agents/research-assistant.ts",
        "src/tools/web-search.ts",
        "src/tools/calculator.ts",
        "src/guardrails/input.ts",
        "src/guardrails/output.ts",
        "src/tests/agent.test.ts",
    ] {
        assert!(root.join(file).is_file(), "{} missing", file);
    }
}
