use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, output_text};

const CARD: &str = r#"import { tc } from "tailcomp";

export function Card({ children }) {
    return (
        <div
            className={tc({
                base: {
                    static: "bg-white",
                    hover: "bg-gray-100",
                    dark: { static: "bg-gray-800", hover: "bg-gray-700" },
                },
                md: { static: "flex-row" },
            })}
        >
            {children}
        </div>
    );
}
"#;

#[test]
fn test_generate_writes_module() -> Result<()> {
    let test = CliTest::with_file("src/components/Card.tsx", CARD)?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 5 classes from 1 call site in 1 file -> ./src/styles/tailcomp.js

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("src/styles/tailcomp.js")?,
        "export const tailcomp = `bg-white hover:bg-gray-100 dark:bg-gray-800 dark:hover:bg-gray-700 md:flex-row`\n"
    );

    Ok(())
}

#[test]
fn test_generate_dry_run_prints_module() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "export const c = tc({ base: { static: 'flex gap-2' } })",
    )?;

    assert_cmd_snapshot!(test.generate_command().arg("--dry-run"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    export const tailcomp = `flex gap-2`
    ✓ Generated 2 classes from 1 call site in 1 file (dry run)

    ----- stderr -----
    ");

    assert!(!test.root().join("src/styles/tailcomp.js").exists());

    Ok(())
}

#[test]
fn test_generate_merges_files_and_deduplicates() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/a.tsx",
        r#"const a = tc({ base: { static: 'flex items-center', hover: { 'bg-blue-600': theme === 'primary' } } })"#,
    )?;
    test.write_file(
        "src/b.vue",
        r#"<template><div :class="tc({ base: { static: 'flex justify-center' } })" /></template>"#,
    )?;
    test.write_file(
        "src/node_modules/lib/index.js",
        "tc({ base: { static: 'from-dependency' } })",
    )?;
    test.write_file("src/readme.md", "tc({ base: { static: 'from-markdown' } })")?;

    let output = test.generate_command().output()?;
    let (stdout, stderr) = output_text(&output);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(stdout.contains("Generated 4 classes from 2 call sites in 2 files"));

    let module = test.read_file("src/styles/tailcomp.js")?;
    assert_eq!(
        module,
        "export const tailcomp = `flex items-center hover:bg-blue-600 justify-center`\n"
    );

    Ok(())
}

#[test]
fn test_generate_skips_previous_output() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "tc({ base: { static: 'fresh' } })")?;
    test.write_file(
        "src/styles/tailcomp.js",
        "export const stale = tc({ base: { static: 'stale' } })\n",
    )?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file("src/styles/tailcomp.js")?,
        "export const tailcomp = `fresh`\n"
    );

    // Running again over its own output is stable.
    test.generate_command().output()?;
    assert_eq!(
        test.read_file("src/styles/tailcomp.js")?,
        "export const tailcomp = `fresh`\n"
    );

    Ok(())
}

#[test]
fn test_generate_reports_warning_count() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "const ok = tc({ base: { static: 'flex' } })\nconst bad = tc({ base: : })\n",
    )?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 1 class from 2 call sites in 1 file -> ./src/styles/tailcomp.js

    ----- stderr -----
    warning: 1 call site could not be evaluated (use -v for details)
    ");

    assert_eq!(
        test.read_file("src/styles/tailcomp.js")?,
        "export const tailcomp = `flex`\n"
    );

    Ok(())
}

#[test]
fn test_generate_verbose_lists_warnings() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "const ok = tc({ base: { static: 'flex' } })\nconst bad = tc({ base: : })\n",
    )?;

    let output = test.generate_command().arg("-v").output()?;
    let (_, stderr) = output_text(&output);

    assert!(output.status.success());
    assert!(stderr.contains("Note: No .tailcomprc.json found"));
    assert!(stderr.contains("warning: ./src/app.ts:2:13:"), "stderr: {}", stderr);
    assert!(stderr.contains("in `tc({ base: : })` [parse-error]"));
    assert!(!stderr.contains("use -v for details"));

    Ok(())
}

#[test]
fn test_generate_deny_warnings_fails() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "const open = tc({ base: {")?;

    let output = test
        .generate_command()
        .arg("--deny-warnings")
        .output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("1 warning denied by --deny-warnings"));

    Ok(())
}

#[test]
fn test_generate_finds_calls_after_jsx_text() -> Result<()> {
    let test = CliTest::with_file(
        "src/Help.tsx",
        r#"export const Help = () => (
    <p>
        Don't panic, see http://example.com or press ` to open.
        <kbd className={tc({ base: { static: "font-mono" } })}>`</kbd>
    </p>
);
"#,
    )?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file("src/styles/tailcomp.js")?,
        "export const tailcomp = `font-mono`\n"
    );

    Ok(())
}

#[test]
fn test_generate_empty_call_is_not_a_warning() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "const a = tc();\nconst b = tc({ base: { static: 'flex' } });\n",
    )?;

    let output = test
        .generate_command()
        .arg("--deny-warnings")
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr);
    assert!(stderr.is_empty());
    assert!(stdout.contains("Generated 1 class from 1 call site in 1 file"));

    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tailcomprc.json",
        r#"{
            "sourceRoot": "./app",
            "output": "./build/classes.js",
            "functionName": "cx",
            "constName": "classes"
        }"#,
    )?;
    test.write_file(
        "app/page.jsx",
        "cx({ base: { static: 'grid' }, lg: { static: 'grid-cols-3' } }); tc({ base: { static: 'ignored' } })",
    )?;

    let output = test.generate_command().output()?;
    let (stdout, stderr) = output_text(&output);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(stdout.contains("-> ./build/classes.js"));
    assert_eq!(
        test.read_file("build/classes.js")?,
        "export const classes = `grid lg:grid-cols-3`\n"
    );

    Ok(())
}

#[test]
fn test_generate_cli_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tailcomprc.json", r#"{ "functionName": "cx" }"#)?;
    test.write_file(
        "lib/index.ts",
        "styles({ base: { static: 'p-4' } }); cx({ base: { static: 'm-4' } })",
    )?;

    let output = test
        .generate_command()
        .args(["--source-root", "lib", "--function-name", "styles", "--dry-run"])
        .output()?;
    let (stdout, stderr) = output_text(&output);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(stdout.starts_with("export const tailcomp = `p-4`\n"));

    Ok(())
}

#[test]
fn test_generate_rejects_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".tailcomprc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.generate_command().output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("error:"));
    assert!(stderr.contains("ignores"));

    Ok(())
}

#[test]
fn test_generate_rejects_invalid_function_name_flag() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "")?;

    let output = test
        .generate_command()
        .args(["--function-name", "not-valid"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_generate_missing_source_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;
    let (_, stderr) = output_text(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Source root does not exist: ./src"));

    Ok(())
}

#[test]
fn test_generate_empty_project() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "export const nothing = 1;\n")?;

    let output = test.generate_command().output()?;
    let (stdout, _) = output_text(&output);

    assert!(output.status.success());
    assert!(stdout.contains("Generated 0 classes from 0 call sites in 1 file"));
    assert_eq!(
        test.read_file("src/styles/tailcomp.js")?,
        "export const tailcomp = ``\n"
    );

    Ok(())
}
