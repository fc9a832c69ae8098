//! Integration tests for sheetwise CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Get the path to the sheetwise binary from the workspace root.
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // Go up from sheetwise-cli to crates
    path.pop(); // Go up from crates to the workspace root

    // Try release first, then debug
    let release = path.join("target/release/sheetwise");
    if release.exists() {
        return release;
    }
    path.join("target/debug/sheetwise")
}

#[test]
fn formats_command_lists_presets() {
    let output = Command::new(binary_path())
        .arg("formats")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("sra3"), "Should list the sra3 preset");
    assert!(stdout.contains("700x1000"), "Should list the 700x1000 preset");

    // Header plus all twelve presets
    let line_count = stdout.lines().count();
    assert!(line_count >= 13, "Should list 12 presets, got {} lines", line_count);
}

#[test]
fn calc_reports_the_tie_scenario() {
    // 450×320 sheet, 90×50 card, gap 2, margins 5: both orientations fit 24,
    // and the tie goes to the unrotated variant.
    let output = Command::new(binary_path())
        .args(["calc", "--sheet", "450x320", "--card", "90x50", "-g", "2", "-m", "5"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Without rotation: 24 pcs (4×6)"), "got:\n{}", stdout);
    assert!(stdout.contains("Rotated 90°:      24 pcs (8×3)"), "got:\n{}", stdout);
    assert!(stdout.contains("Optimal: Without rotation, 24 pcs (4×6)"), "got:\n{}", stdout);
}

#[test]
fn calc_prefers_rotation_when_strictly_better() {
    // Handing the 90×55 card in as 55×90 makes the rotated variant win 25 > 24.
    let output = Command::new(binary_path())
        .args([
            "calc", "--sheet", "500x350", "--card", "55x90", "-g", "3", "-m", "10,15,10,15",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Optimal: Rotated 90°, 25 pcs (5×5)"), "got:\n{}", stdout);
}

#[test]
fn calc_uses_format_presets() {
    let output = Command::new(binary_path())
        .args(["calc", "--format", "sra3", "--card", "90x50", "-g", "2", "-m", "5"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sheet: 450 × 320 mm"), "got:\n{}", stdout);
    assert!(stdout.contains("24 pcs"), "got:\n{}", stdout);
}

#[test]
fn calc_produces_json() {
    let output = Command::new(binary_path())
        .args([
            "calc", "--sheet", "450x320", "--card", "90x50", "-g", "2", "-m", "5", "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("\"unrotated\""), "Should have unrotated key");
    assert!(stdout.contains("\"rotated\""), "Should have rotated key");
    assert!(stdout.contains("\"count_x\""), "Should have count_x key");
    assert!(stdout.contains("\"placement\""), "Should have placement key");
    assert!(stdout.contains("\"best\": \"unrotated\""), "Tie should select unrotated");
    assert!(stdout.contains("\"feasible\": true"), "Layout should be feasible");
}

#[test]
fn calc_reports_infeasible_layouts() {
    let output = Command::new(binary_path())
        .args(["calc", "--sheet", "100x100", "--card", "200x200"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cards do not fit in either orientation"), "got:\n{}", stdout);
}

#[test]
fn calc_rejects_non_positive_sheets() {
    let output = Command::new(binary_path())
        .args(["calc", "--sheet", "0x320", "--card", "90x50"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Zero-length sheet should be an error");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("positive sheet"), "got:\n{}", stderr);
}

#[test]
fn render_produces_svg_on_stdout() {
    let output = Command::new(binary_path())
        .args(["render", "--sheet", "450x320", "--card", "90x50", "-g", "2", "-m", "5"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("<rect"), "Should have rect elements");
    assert!(stdout.contains("Optimal"), "Should title the optimal variant");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn render_writes_svg_file() {
    let out_path = std::env::temp_dir().join("sheetwise_render_test.svg");
    let _ = fs::remove_file(&out_path);

    let output = Command::new(binary_path())
        .args([
            "render",
            "--format",
            "sra3",
            "--card",
            "90x50",
            "-g",
            "2",
            "-m",
            "5",
            "-o",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let content = fs::read_to_string(&out_path).expect("Output SVG should exist");
    assert!(content.contains("<svg"));
    assert!(content.contains("24 pcs"));

    let _ = fs::remove_file(&out_path);
}

#[test]
fn job_command_runs_a_batch() {
    let job_path = std::env::temp_dir().join("sheetwise_jobs_test.yaml");
    fs::write(
        &job_path,
        r#"
name: "Integration batch"
jobs:
  - name: cards_sra3
    format: sra3
    card: { length: 90, width: 50 }
    gap: 2
    margins: { top: 5, right: 5, bottom: 5, left: 5 }
  - name: too_big
    sheet: { length: 100, width: 100 }
    card: { length: 200, width: 200 }
"#,
    )
    .expect("Failed to write job file");

    let output = Command::new(binary_path())
        .args(["job", job_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("cards_sra3"), "got:\n{}", stderr);
    assert!(stderr.contains("24 pcs (4×6)"), "got:\n{}", stderr);
    assert!(stderr.contains("does not fit"), "got:\n{}", stderr);

    let _ = fs::remove_file(&job_path);
}

#[test]
fn job_example_prints_valid_yaml_shape() {
    let output = Command::new(binary_path())
        .args(["job", "--example"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("jobs:"), "Should show a jobs list");
    assert!(stdout.contains("card:"), "Should show a card entry");
}

#[test]
fn help_command_shows_usage() {
    let output = Command::new(binary_path())
        .arg("help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{}{}", stdout, stderr);

    assert!(combined.contains("calc"), "Should mention calc command");
    assert!(combined.contains("render"), "Should mention render command");
    assert!(combined.contains("formats"), "Should mention formats command");
    assert!(combined.contains("job"), "Should mention job command");
}
