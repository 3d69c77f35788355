use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, output_text};

#[test]
fn test_resolve_descriptor() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(
        test.resolve_command(r#"{"base":{"static":"flex items-center","hover":"bg-blue-700"},"md":{"dark":{"hover":"bg-gray-700"}}}"#),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    flex items-center hover:bg-blue-700 md:dark:hover:bg-gray-700

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_resolve_conditional_map() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .resolve_command(r#"{"base":{"static":{"px-4 py-2":true,"hidden":false,"rounded":1}}}"#)
        .output()?;
    let (stdout, _) = output_text(&output);

    assert!(output.status.success());
    assert_eq!(stdout, "px-4 py-2 rounded\n");

    Ok(())
}

#[test]
fn test_resolve_empty_descriptor() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.resolve_command("{}").output()?;
    let (stdout, _) = output_text(&output);

    assert!(output.status.success());
    assert_eq!(stdout, "\n");

    Ok(())
}

#[test]
fn test_resolve_invalid_json() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.resolve_command("{ base: ").output()?;
    let (stdout, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("error: Failed to parse descriptor JSON"));

    Ok(())
}
