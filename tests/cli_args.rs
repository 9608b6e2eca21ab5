//! Integration tests for the command-line binary
//!
//! The binary runs without an API key, so every lookup takes the mock path
//! and output is deterministic.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_findanadvisor"))
        .args(args)
        .env_remove("SERPER_API_KEY")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute findanadvisor")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fetch"), "Help should mention the fetch command");
    assert!(stdout.contains("warm"), "Help should mention the warm command");
}

#[test]
fn test_fetch_without_key_prints_mock_records() {
    let output = run_cli(&["fetch", "Mortgage Advisors", "Bristol"]);
    assert!(output.status.success());

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let first = &records[0];

    assert_eq!(records.as_array().unwrap().len(), 3);
    assert_eq!(first["id"], "1");
    assert_eq!(first["title"], "Mortgage Advisors Specialists Bristol");
    assert_eq!(first["rating"], 4.8);
    assert_eq!(first["reviews"], 127);
    assert_eq!(first["address"], "123 High Street, Bristol");
    assert_eq!(first["phone"], "01234 567890");
    assert_eq!(first["category"], "Mortgage Advisors");
    assert_eq!(first["link"], "#");
}

#[test]
fn test_fetch_resolves_slugs() {
    let output = run_cli(&["fetch", "pension-advisors", "edinburgh"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pension Advisors Specialists Edinburgh"));
}

#[test]
fn test_fetch_schema_prints_json_ld() {
    let output = run_cli(&["fetch", "wealth-managers", "london", "--schema"]);
    assert!(output.status.success());

    let docs: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON output");
    assert_eq!(docs[0]["@type"], "ItemList");
    assert_eq!(docs[0]["numberOfItems"], 3);
    assert_eq!(docs[1]["url"], "https://findanadvisor.online/locations/london");
}

#[test]
fn test_blank_location_prints_error_and_exits() {
    let output = run_cli(&["fetch", "Financial Advisors", " "]);
    assert!(!output.status.success(), "Expected blank location to fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid location"),
        "Should print error message about the location: {}",
        stderr
    );
}

#[test]
fn test_catalog_lists_cities() {
    let output = run_cli(&["catalog"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mortgage-advisors"));
    assert!(stdout.contains("cardiff"));
}

#[test]
fn test_catalog_json_is_machine_readable() {
    let output = run_cli(&["catalog", "--json"]);
    assert!(output.status.success());

    let catalog: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(catalog["advisorTypes"].as_array().unwrap().len(), 5);
    assert_eq!(catalog["cities"].as_array().unwrap().len(), 10);
    assert_eq!(catalog["cities"][9]["name"], "Cardiff");
}

#[test]
fn test_blank_key_from_environment_serves_mock_records() {
    let output = Command::new(env!("CARGO_BIN_EXE_findanadvisor"))
        .args(["fetch", "Financial Advisors", "Leeds", "--endpoint", "http://127.0.0.1:9/places"])
        .env("SERPER_API_KEY", "   ")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute findanadvisor");
    assert!(output.status.success());

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(records[0]["title"], "Financial Advisors Specialists Leeds");
}

#[test]
fn test_warm_summarizes_every_combination() {
    let output = run_cli(&["warm"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 50);
    assert!(lines.contains(&"Financial Advisors in London: 3 advisors"));
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use findanadvisor::cli::{parse_query, Cli, Command};

    #[test]
    fn test_cli_parses_fetch_command() {
        let cli = Cli::parse_from(["findanadvisor", "fetch", "mortgage-advisors", "bristol"]);
        assert!(matches!(cli.command, Command::Fetch { schema: false, .. }));
    }

    #[test]
    fn test_parse_query_from_slugs() {
        let query = parse_query("investment-advisors", "sheffield").unwrap();
        assert_eq!(query.advisor_type, "Investment Advisors");
        assert_eq!(query.location, "Sheffield");
    }
}
