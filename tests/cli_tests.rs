use assert_cmd::Command;
use predicates::prelude::predicate;

mod common;

#[test]
fn list_prints_every_tool_grouped_by_category() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("devkit")?;
    sut.current_dir(dir.path()).env("NO_COLOR", "1").arg("list");

    let output = sut.assert().success().get_output().stdout.clone();
    let output = String::from_utf8(output)?;

    let headers = output
        .lines()
        .filter(|line| line.ends_with(':'))
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(
        headers,
        vec![
            "format:",
            "convert:",
            "crypto:",
            "diff:",
            "generate:",
            "codegen:"
        ]
    );

    for tool in [
        "format-json",
        "format-xml",
        "base64",
        "case",
        "ascii",
        "unicode",
        "reverse",
        "caesar",
        "diff",
        "json-diff",
        "ascii-art",
        "java-bean",
    ] {
        assert!(
            output.lines().any(|line| line.trim_start().starts_with(&format!("{tool} "))),
            "{tool} missing from list output"
        );
    }

    Ok(())
}

#[test]
fn help_uses_custom_template() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("devkit")?;
    sut.arg("-h");

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(r"devkit 0\.1\.0 - Everyday developer text utilities")?)
        .stdout(predicate::str::contains("USAGE:"));

    Ok(())
}

#[test]
fn unknown_subcommand_is_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("devkit")?;
    sut.arg("frobnicate");

    sut.assert().failure().code(2);

    Ok(())
}

#[test]
fn debug_logs_go_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("devkit")?;
    sut.env("DEVKIT_LOG", "debug")
        .env("NO_PAGER", "1")
        .args(["diff", "--text", "a", "b"]);

    sut.assert()
        .success()
        .stdout(predicate::eq("[-a-]\n{+b+}\n"))
        .stderr(predicate::str::contains("compared inputs"));

    Ok(())
}
