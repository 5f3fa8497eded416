//! CLI contract tests
//!
//! Verifies that commands and flags (score, audit, --format, --output,
//! --fail-on, --config, plugin, init) behave as documented.

use std::path::{Path, PathBuf};
use std::process::Command;

fn ecoindex_bin() -> String {
    env!("CARGO_BIN_EXE_ecoindex").to_string()
}

const LIGHT_PAGE: &str = r#"{
    "url": "https://light.example.org/",
    "networkRequests": [
        {"url": "https://light.example.org/", "transferSize": 14336, "resourceType": "Document"},
        {"url": "https://light.example.org/site.css", "transferSize": 4096}
    ],
    "DOMStats": {"totalBodyElements": 40}
}"#;

const HEAVY_PAGE: &str = r#"{
    "url": "https://heavy.example.org/",
    "networkRequests": [
        {"transferSize": 9000000000},
        {"transferSize": 400000000}
    ],
    "DOMStats": {"totalBodyElements": 600000}
}"#;

fn write_page(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

/// Run the binary inside `dir` so no stray config is picked up
fn run(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(ecoindex_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ecoindex");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.code().unwrap_or(-1), stdout, stderr)
}

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("Invalid JSON")
}

// ============================================================================
// score
// ============================================================================

#[test]
fn test_score_empty_page_json() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(
        dir.path(),
        &["score", "--dom", "0", "--requests", "0", "--bytes", "0", "--format", "json"],
    );
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    let page = &json[0];
    assert_eq!(page["score"], 1.0);
    assert_eq!(page["result"]["ecoIndex"], 100.0);
    assert_eq!(page["result"]["grade"], "A");
    assert_eq!(page["result"]["greenhouseGasesEmission"], 1.0);
    assert_eq!(page["result"]["waterConsumption"], 1.5);
}

#[test]
fn test_score_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(
        dir.path(),
        &["score", "--dom", "603", "--requests", "78", "--bytes", "0"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("EcoIndex"));
    assert!(stdout.contains("GHG (gCO2e)"));
    assert!(stdout.contains("Requests size"));
}

#[test]
fn test_score_rejects_negative_input() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run(
        dir.path(),
        &["score", "--dom", "-1", "--requests", "0", "--bytes", "0"],
    );
    assert_ne!(code, 0);
}

#[test]
fn test_score_rounds_like_host() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(
        dir.path(),
        &["score", "--dom", "0", "--requests", "1", "--bytes", "0", "--format", "json"],
    );
    assert_eq!(code, 0);
    assert_eq!(parse_json(&stdout)[0]["result"]["waterConsumption"], 1.52);
}

#[test]
fn test_score_strict_rejects_out_of_table_measurement() {
    let dir = tempfile::tempdir().unwrap();
    let args = ["score", "--dom", "700000", "--requests", "1", "--bytes", "0"];

    let (code, _, _) = run(dir.path(), &args);
    assert_eq!(code, 0);

    let mut strict_args = args.to_vec();
    strict_args.push("--strict");
    let (code, _, stderr) = run(dir.path(), &strict_args);
    assert_ne!(code, 0);
    assert!(stderr.contains("DOM size"));

    std::fs::write(dir.path().join("ecoindex.toml"), "[defaults]\nstrict = true\n").unwrap();
    let (code, _, _) = run(dir.path(), &args);
    assert_ne!(code, 0, "defaults.strict should apply to score");
}

// ============================================================================
// audit
// ============================================================================

#[test]
fn test_audit_multiple_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let light = write_page(dir.path(), "light.json", LIGHT_PAGE);
    let heavy = write_page(dir.path(), "heavy.json", HEAVY_PAGE);

    let (code, stdout, _) = run(
        dir.path(),
        &[
            "audit",
            light.to_str().unwrap(),
            heavy.to_str().unwrap(),
            "--format",
            "json",
        ],
    );
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    let pages = json.as_array().unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0]["source"], "https://light.example.org/");
    assert_eq!(pages[0]["passed"], true);
    assert_eq!(pages[0]["result"]["numberOfRequests"], 2);
    assert_eq!(pages[0]["details"]["items"][0]["sizeOfRequests"], 18432);
    // saturated DOM and size, but only 2 requests
    assert_eq!(pages[1]["result"]["grade"], "E");
    assert_eq!(pages[1]["title"], "Environmental impact is too high");
}

#[test]
fn test_audit_fail_on() {
    let dir = tempfile::tempdir().unwrap();
    let light = write_page(dir.path(), "light.json", LIGHT_PAGE);
    let heavy = write_page(dir.path(), "heavy.json", HEAVY_PAGE);

    let (code, _, _) = run(dir.path(), &["audit", light.to_str().unwrap(), "--fail-on", "E"]);
    assert_eq!(code, 0, "light page should not trip --fail-on E");

    let (code, _, stderr) = run(dir.path(), &["audit", heavy.to_str().unwrap(), "--fail-on", "E"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("--fail-on=E"));
}

#[test]
fn test_audit_fail_on_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let heavy = write_page(dir.path(), "heavy.json", HEAVY_PAGE);
    std::fs::write(dir.path().join("ecoindex.toml"), "[audit]\nfail_on = \"E\"\n").unwrap();

    let (code, _, _) = run(dir.path(), &["audit", heavy.to_str().unwrap()]);
    assert_eq!(code, 1);
}

#[test]
fn test_audit_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let light = write_page(dir.path(), "light.json", LIGHT_PAGE);
    let out = dir.path().join("report.md");

    let (code, stdout, stderr) = run(
        dir.path(),
        &[
            "audit",
            light.to_str().unwrap(),
            "--format",
            "md",
            "-o",
            out.to_str().unwrap(),
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.trim().is_empty());
    assert!(stderr.contains("Report written to"));
    let md = std::fs::read_to_string(&out).unwrap();
    assert!(md.contains("# EcoIndex Report"));
    assert!(md.contains("https://light.example.org/"));
}

#[test]
fn test_audit_missing_dom_stats_fails() {
    let dir = tempfile::tempdir().unwrap();
    let bad = write_page(dir.path(), "bad.json", r#"{"networkRequests": []}"#);

    let (code, _, stderr) = run(dir.path(), &["audit", bad.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("DOMStats"));
}

#[test]
fn test_audit_format_default_from_explicit_config() {
    let dir = tempfile::tempdir().unwrap();
    let light = write_page(dir.path(), "light.json", LIGHT_PAGE);
    let config = dir.path().join("ci.toml");
    std::fs::write(&config, "[defaults]\nformat = \"json\"\n").unwrap();

    let (code, stdout, _) = run(
        dir.path(),
        &["audit", light.to_str().unwrap(), "--config", config.to_str().unwrap()],
    );
    assert_eq!(code, 0);
    assert!(parse_json(&stdout).is_array());
}

// ============================================================================
// plugin / init
// ============================================================================

#[test]
fn test_plugin_registration() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(dir.path(), &["plugin"]);
    assert_eq!(code, 0);
    let json = parse_json(&stdout);
    assert_eq!(json["plugin"]["category"]["auditRefs"][0]["id"], "ecoindex");
    assert_eq!(json["plugin"]["category"]["auditRefs"][0]["weight"], 1);
    assert_eq!(json["audits"][0]["requiredArtifacts"][1], "DOMStats");
}

#[test]
fn test_init_writes_config_once() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run(dir.path(), &["init", "."]);
    assert_eq!(code, 0);
    assert!(dir.path().join("ecoindex.toml").exists());

    let (code, _, stderr) = run(dir.path(), &["init", "."]);
    assert_ne!(code, 0);
    assert!(stderr.contains("already exists"));
}
