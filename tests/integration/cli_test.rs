//! End-to-end tests for the flagfetch binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn flagfetch() -> Command {
    Command::cargo_bin("flagfetch").expect("binary should build")
}

#[test]
fn render_reads_template_from_stdin() {
    flagfetch()
        .args(["render", "--preset", "rainbow"])
        .write_stdin("art\nart\nart\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;2;"))
        .stdout(predicate::str::contains("\x1b[0m"));
}

#[test]
fn render_reads_template_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "${{c1}}banner\nbanner\n").unwrap();

    flagfetch()
        .args(["render", "--preset", "bisexual"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("banner"));
}

#[test]
fn vertical_stripes_follow_preset_order() {
    // Every transmasculine stripe is already lighter than the dark-theme
    // default target, so the colors pass through unadjusted.
    let art = vec!["xxxx"; 7].join("\n");
    let output = flagfetch()
        .args(["render", "--preset", "transmasculine"])
        .write_stdin(art)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("\x1b[38;2;255;138;189m"));
    assert!(lines[3].starts_with("\x1b[38;2;116;223;255m"));
    assert!(lines[6].starts_with("\x1b[38;2;255;138;189m"));
}

#[test]
fn ansi16_mode_emits_only_named_color_codes() {
    flagfetch()
        .args(["render", "--preset", "rainbow", "--color-system", "ansi16"])
        .write_stdin("art\nart\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;2;").not())
        .stdout(predicate::str::contains("\x1b[38;5;").not());
}

#[test]
fn unknown_preset_fails_with_its_name() {
    flagfetch()
        .args(["render", "--preset", "nonexistent"])
        .write_stdin("art")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset"))
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn malformed_template_degrades_to_plain_output() {
    flagfetch()
        .args(["render"])
        .write_stdin("fine line\nbroken ${c1")
        .assert()
        .success()
        .stderr(predicate::str::contains("warning"))
        .stdout(predicate::str::contains("fine line"))
        .stdout(predicate::str::contains("\x1b[38;2;").not());
}

#[test]
fn out_of_range_lightness_is_clamped_not_rejected() {
    flagfetch()
        .args(["render", "--preset", "rainbow", "--lightness", "7.5"])
        .write_stdin("art\n")
        .assert()
        .success()
        // Lightness 1.0 pushes every color to white.
        .stdout(predicate::str::contains("\x1b[38;2;255;255;255m"));
}

#[test]
fn presets_lists_catalogue_in_order() {
    let output = flagfetch().arg("presets").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let names: Vec<_> = stdout
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    let rainbow = names.iter().position(|&n| n == "rainbow").unwrap();
    let agender = names.iter().position(|&n| n == "agender").unwrap();
    assert!(agender < rainbow, "catalogue order not preserved");
    assert!(names.contains(&"transgender"));
}

#[test]
fn presets_json_is_machine_readable() {
    let output = flagfetch().args(["presets", "--json"]).output().unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rainbow = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["name"] == "rainbow")
        .expect("rainbow preset present");
    assert_eq!(rainbow["colors"][0], "#E50000");
    assert_eq!(rainbow["colors"].as_array().unwrap().len(), 6);
}

#[test]
fn completions_generate_for_bash() {
    flagfetch()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flagfetch"));
}
