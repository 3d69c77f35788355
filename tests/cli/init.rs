use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["sourceRoot"], "./src");
    assert_eq!(parsed["output"], "./src/styles/tailcomp.js");
    assert_eq!(parsed["functionName"], "tc");
    assert_eq!(parsed["constName"], "tailcomp");
    assert!(
        parsed["extensions"]
            .as_array()
            .is_some_and(|exts| exts.iter().any(|e| e == "tsx")),
        "Config should list default extensions"
    );
    assert_eq!(parsed["ignores"][0], "**/node_modules/**");

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .tailcomprc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".tailcomprc.json").exists());

    let content = test.read_file(".tailcomprc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tailcomprc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .tailcomprc.json already exists
    ");

    assert_eq!(test.read_file(".tailcomprc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file(
        "src/app.tsx",
        r#"export const App = () => <div className={tc({ base: { static: "p-2" } })} />;"#,
    )?;

    let output = test.generate_command().output()?;
    assert!(
        output.status.success(),
        "Generate should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        test.read_file("src/styles/tailcomp.js")?,
        "export const tailcomp = `p-2`\n"
    );

    Ok(())
}
