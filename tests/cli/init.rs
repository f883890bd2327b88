use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["sourceRoot"], "src");
    assert_eq!(parsed["callee"], "toast");
    assert_eq!(parsed["targets"]["error"], "showError");
    assert_eq!(parsed["backupSuffix"], ".bak");

    // 2-space indentation
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.init_command());

    assert!(test.root().join(".toastswaprc.json").exists());
    let content = test.read_file(".toastswaprc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".toastswaprc.json", "{}")?;

    assert_cmd_snapshot!(test.init_command());

    assert_eq!(test.read_file(".toastswaprc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.init_command().output()?;
    test.write_file("src/pages/Tasks.tsx", "export {};\n")?;

    let output = test.migrate_command().output()?;
    assert!(
        output.status.success(),
        "Migrate should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
