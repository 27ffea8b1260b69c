//! End-to-end tests running the built binary
//!
//! `sh` stands in for the crawling framework so each test controls the
//! exit status and the output file the "crawl" leaves behind.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const WRITES_TWO_RECORDS: &str = r#"'echo "{\"url\": \"a\"}" > {output} && echo "{\"url\": \"b\"}" >> {output}'"#;

/// Writes a config that runs `crawl_script` through `sh -c`
fn write_config(dir: &Path, crawl_script: &str) {
    let config = format!(
        r#"
[framework]
program = "sh"
list-args = ["-c", "echo articles-spider"]
crawl-args = ["-c", {}, "{{spider}}"]

[crawl]
output = "items.jl"
output-dir = "wikipages"
"#,
        crawl_script
    );
    std::fs::write(dir.join("spider-run.toml"), config).unwrap();
}

fn run_in(dir: &Path, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spider-run"))
        .current_dir(dir)
        .arg("--config")
        .arg("spider-run.toml")
        .args(extra_args)
        .output()
        .expect("Failed to run spider-run")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_successful_crawl_reports_output() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), WRITES_TWO_RECORDS);

    let output = run_in(dir.path(), &[]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(dir.path().join("wikipages").is_dir());

    let size = std::fs::metadata(dir.path().join("items.jl")).unwrap().len();
    assert!(stdout.contains("Current directory structure:"));
    assert!(stdout.contains("    spider-run.toml"));
    assert!(stdout.contains("articles-spider"));
    assert!(stdout.contains("JSON lines successfully written to items.jl"));
    assert!(stdout.contains("Total crawl runtime:"));
    assert!(stdout.contains(&format!("Output file size: {} bytes", size)));
    assert!(stdout.contains("Number of JSON lines: 2"));
}

#[test]
fn test_failed_crawl_exits_with_one() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "'exit 3 # {output}'");

    let output = run_in(dir.path(), &[]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Crawl process failed with exit code: 3"));
    assert!(!stdout.contains("Total crawl runtime"));
    assert!(!stdout.contains("Output file size"));
    assert!(!stdout.contains("was not created"));
}

#[test]
fn test_missing_output_file_still_succeeds() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "'exit 0 # {output}'");

    let output = run_in(dir.path(), &[]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Total crawl runtime:"));
    assert!(stdout.contains("Warning: items.jl file was not created"));
}

#[test]
fn test_spider_override_is_passed_to_crawl() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), r#"'test "$0" = quotes && echo "{}" > {output}'"#);

    let default_run = run_in(dir.path(), &["--no-tree", "--no-list"]);
    assert_eq!(default_run.status.code(), Some(1));

    let quotes_run = run_in(dir.path(), &["--no-tree", "--no-list", "--spider", "quotes"]);
    let stdout = stdout_of(&quotes_run);
    assert_eq!(quotes_run.status.code(), Some(0));
    assert!(stdout.contains("Number of JSON lines: 1"));
    assert!(!stdout.contains("Current directory structure:"));
}

#[test]
fn test_invalid_config_exits_with_one() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("spider-run.toml"), "[crawl]\nspider = \"\"\n").unwrap();

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("wikipages").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("spider name cannot be empty").count(), 1, "stderr: {}", stderr);
}

#[test]
fn test_fresh_output_flag_discards_previous_results() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("items.jl"), "{}\n{}\n{}\n").unwrap();
    write_config(dir.path(), "'exit 0 # {output}'");

    let appended = run_in(dir.path(), &["--no-tree", "--no-list"]);
    assert!(stdout_of(&appended).contains("Number of JSON lines: 3"));

    let fresh = run_in(dir.path(), &["--no-tree", "--no-list", "--fresh-output"]);
    let stdout = stdout_of(&fresh);
    assert_eq!(fresh.status.code(), Some(0));
    assert!(stdout.contains("Warning: items.jl file was not created"));
    assert!(!dir.path().join("items.jl").exists());
}

#[test]
fn test_existing_output_dir_is_reused() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("wikipages")).unwrap();
    std::fs::write(dir.path().join("wikipages/page.html"), "<html></html>").unwrap();
    write_config(dir.path(), WRITES_TWO_RECORDS);

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("wikipages/page.html").exists());
    assert!(stdout_of(&output).contains("        page.html"));
}
