// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end tests of the `tagwerk` binary.

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

/// A command whose settings live in a throwaway data directory.
fn cmd(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tagwerk").unwrap();
    cmd.env("XDG_DATA_HOME", data.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn encode_prints_check_characters() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["encode", "TEST93"])
        .assert()
        .success()
        .stdout(contains("check:   + 6"))
        .stdout(contains("modules: 91"));
}

#[test]
fn encode_rejects_lowercase() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["encode", "a"])
        .assert()
        .code(1)
        .stderr(contains("error: The character 'a' (position 1)"));
}

#[test]
fn svg_goes_to_stdout() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["svg", "AB", "--width", "120", "--height", "35", "--padding", "5"])
        .assert()
        .success()
        .stdout(contains("width=\"130\" height=\"45\""))
        .stdout(contains("<path d=\"M5 5 v 35"));
}

#[test]
fn svg_with_background_to_file() {
    let data = TempDir::new().unwrap();
    let out = data.path().join("code.svg");
    cmd(&data)
        .args(["svg", "A", "--background", "#fff", "-o"])
        .arg(&out)
        .assert()
        .success();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<rect width=\"200\" height=\"50\" fill=\"#fff\"/>"));
}

#[test]
fn svg_rejects_zero_width() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["svg", "A", "--width", "0"])
        .assert()
        .failure()
        .stderr(contains("size"));
}

#[test]
fn templates_lists_catalog() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .arg("templates")
        .assert()
        .success()
        .stdout(contains("5260: 1\" x 2-5/8\" Address Labels (30 per sheet)"))
        .stdout(contains("S-20133"));
}

#[test]
fn sheet_without_consigner_fails() {
    let data = TempDir::new().unwrap();
    let out = data.path().join("tags.pdf");
    cmd(&data)
        .args(["sheet", "--tags", "2:10", "-o"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("No consigner ID is set."));
    assert!(!out.exists());
}

#[test]
fn saved_consigner_and_template_drive_sheet() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["config", "set-consigner", "AB12"])
        .assert()
        .success();
    cmd(&data)
        .args(["config", "set-template", "S-20133"])
        .assert()
        .success();
    cmd(&data)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("consigner: AB12"))
        .stdout(contains("template:  S-20133"));

    let out = data.path().join("tags.pdf");
    cmd(&data)
        .args(["sheet", "--tags", "2:30", "5:10", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Wrote 40 tags on 1 page(s)"))
        .stdout(contains("No unused labels on last page."));

    let pdf = lopdf::Document::load(&out).unwrap();
    assert_eq!(pdf.get_pages().len(), 1);
}

#[test]
fn sheet_json_summary() {
    let data = TempDir::new().unwrap();
    let out = data.path().join("tags.pdf");
    let assert = cmd(&data)
        .args(["--json", "sheet", "--consigner", "ZZ9", "--tags", "1:31", "-o"])
        .arg(&out)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("\"pages\": 2"));
    assert!(stdout.contains("\"unused_on_last_page\": 29"));
}

#[test]
fn unknown_template_is_reported() {
    let data = TempDir::new().unwrap();
    cmd(&data)
        .args(["config", "set-template", "9999"])
        .assert()
        .failure()
        .stderr(contains("tagwerk templates"));
}

#[test]
fn blank_xdg_data_home_uses_home() {
    let home = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("tagwerk").unwrap();
    cmd.env("XDG_DATA_HOME", "")
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(home.path())
        .args(["config", "set-consigner", "AB12"])
        .assert()
        .success();

    let saved = home.path().join(".local/share/tagwerk/config.json");
    assert!(saved.exists());
    assert!(!home.path().join("tagwerk").exists());
}

#[test]
fn retriable_failure_exits_with_tempfail() {
    let data = TempDir::new().unwrap();
    // The output path is a directory, so the write fails with a plain I/O error.
    cmd(&data)
        .args(["sheet", "--consigner", "AB12", "--tags", "2:1", "-o"])
        .arg(data.path())
        .assert()
        .code(75)
        .stderr(contains("temporary error: "));
}
