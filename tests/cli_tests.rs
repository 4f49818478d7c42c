use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn sentimap(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sentimap"));
    cmd.current_dir(dir.path())
        .env_remove("SENTIMAP_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_analyze_json_output() {
    let dir = TempDir::new().unwrap();
    let output = sentimap(&dir)
        .args(["analyze", "-f", "json", "I loved the movie. I hated the ending."])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["overall_sentiment"], "mixed");
    assert_eq!(json["sentiment_counts"]["positive"], 1);
    assert_eq!(json["sentiment_counts"]["negative"], 1);
}

#[test]
fn test_analyze_reads_stdin_and_prints_terminal_report() {
    let dir = TempDir::new().unwrap();
    let output = sentimap(&dir)
        .args(["analyze", "--plain"])
        .write_stdin("I love this product.")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Overall:  positive"), "stdout: {stdout}");
}

#[test]
fn test_analyze_lines_keeps_order() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("reviews.txt");
    fs::write(
        &input,
        indoc! {"
            I love this product.

            The meeting is at 3pm.
            The food was great, but the service was terrible.
        "},
    )
    .unwrap();

    let output = sentimap(&dir)
        .args(["analyze", "--lines", "-f", "json", "--file"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    let labels: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["overall_sentiment"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["positive", "neutral", "mixed"]);
}

#[test]
fn test_analyze_writes_markdown_file() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("report.md");
    sentimap(&dir)
        .args(["analyze", "-f", "markdown", "-o"])
        .arg(&report)
        .arg("The meeting is at 3pm.")
        .assert()
        .success();

    let contents = fs::read_to_string(&report).unwrap();
    assert!(contents.contains("| Overall sentiment | neutral |"));
}

#[test]
fn test_analyze_empty_text_fails() {
    let dir = TempDir::new().unwrap();
    sentimap(&dir).args(["analyze", ""]).assert().failure();
}

#[test]
fn test_rejected_input_leaves_existing_report_untouched() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("keep.md");
    fs::write(&report, "previous report\n").unwrap();

    sentimap(&dir)
        .args(["analyze", "-o", "keep.md", "   "])
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&report).unwrap(), "previous report\n");

    let lines_input = dir.path().join("blank.txt");
    fs::write(&lines_input, "\n   \n").unwrap();
    sentimap(&dir)
        .args(["analyze", "--lines", "-o", "keep.md", "--file"])
        .arg(&lines_input)
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&report).unwrap(), "previous report\n");
}

#[test]
fn test_score_prints_polarity() {
    let dir = TempDir::new().unwrap();
    let output = sentimap(&dir)
        .args(["score", "I love this product."])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["compound"].as_f64(), Some(0.6369));
    let sum: f64 = ["pos", "neg", "neu"]
        .iter()
        .map(|k| json[*k].as_f64().unwrap())
        .sum();
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
fn test_request_exit_codes() {
    let dir = TempDir::new().unwrap();

    let ok = sentimap(&dir)
        .arg("request")
        .write_stdin(r#"{"text": "I love this product."}"#)
        .output()
        .unwrap();
    assert_eq!(ok.status.code(), Some(0));
    assert_eq!(stdout_json(&ok)["overall_sentiment"], "positive");

    let bad = sentimap(&dir)
        .arg("request")
        .write_stdin(r#"{"text": ""}"#)
        .output()
        .unwrap();
    assert_eq!(bad.status.code(), Some(2));
    assert_eq!(stdout_json(&bad)["error"], "No text provided");
}

#[test]
fn test_init_then_config_is_used() {
    let dir = TempDir::new().unwrap();
    sentimap(&dir).arg("init").assert().success();
    assert!(dir.path().join(".sentimap.toml").exists());

    sentimap(&dir).arg("init").assert().failure();
    sentimap(&dir).args(["init", "--force"]).assert().success();

    fs::write(
        dir.path().join(".sentimap.toml"),
        "[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();
    let output = sentimap(&dir)
        .args(["analyze", "I love this product."])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["overall_sentiment"], "positive");
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    sentimap(&dir)
        .args(["analyze", "--config", "missing.toml", "hello"])
        .assert()
        .failure();
}
