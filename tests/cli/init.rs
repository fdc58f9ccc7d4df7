use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["translationsDir"], "assets/translations");
    assert_eq!(
        parsed["files"],
        serde_json::json!(["en.json", "tr.json", "fr.json", "de.json", "ru.json"])
    );
    assert_eq!(parsed["nested"], false);

    assert!(
        content.contains("\n  \"files\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Created .keyauditrc.json\n");
    assert!(test.root().join(".keyauditrc.json").exists());

    let content = test.read_file(".keyauditrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keyauditrc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.code, Some(2));
    assert!(output.stdout.is_empty());
    assert_eq!(output.stderr, "Error: .keyauditrc.json already exists\n");
    assert_eq!(test.read_file(".keyauditrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_translations(&[
        ("en.json", r#"{"a": "A"}"#),
        ("tr.json", r#"{"a": "A"}"#),
        ("fr.json", r#"{"a": "A"}"#),
        ("de.json", r#"{"a": "A"}"#),
        ("ru.json", r#"{"a": "A"}"#),
    ])?;

    test.run(&["init"])?;

    let output = test.run(&[])?;
    assert_eq!(
        output.code,
        Some(0),
        "Audit should work with initialized config. stderr: {}",
        output.stderr
    );

    Ok(())
}
