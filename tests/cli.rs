use assert_cmd::Command;

const GREETING_LINE: &str = "Hello, world! This is the scraping_scripts starter.\n";

#[test]
fn test_prints_greeting_without_flag() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("hello-world")?;

    cmd.assert().success().code(0).stdout(GREETING_LINE);

    Ok(())
}

#[test]
fn test_greeting_ignores_environment() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("hello-world")?;

    // Verbose logging must not leak onto stdout.
    cmd.env("RUST_LOG", "trace")
        .env("HTTPS_PROXY", "http://127.0.0.1:1")
        .assert()
        .success()
        .stdout(GREETING_LINE);

    Ok(())
}

#[test]
fn test_two_runs_produce_identical_output() -> Result<(), Box<dyn std::error::Error>> {
    let first = Command::cargo_bin("hello-world")?.output()?;
    let second = Command::cargo_bin("hello-world")?.output()?;

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_rejects_unknown_flag() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("hello-world")?;

    let assert = cmd.arg("--limit").arg("5").assert().failure();
    assert!(assert.get_output().stdout.is_empty());

    Ok(())
}

#[test]
fn test_help_mentions_scrape() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("hello-world")?;

    let output = cmd.arg("--help").output()?;
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("--scrape"));

    Ok(())
}
