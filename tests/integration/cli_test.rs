//! Integration tests for the `at`, `play` and `catalog` commands

use std::process::Command;

use crate::helpers::{run_cuesync, run_cuesync_with_config, write_fixture, DEMO_JSON};

// ============================================================================
// One-shot queries
// ============================================================================

#[test]
fn at_inside_annotation_prints_show_line() {
    let (stdout, _stderr, exit_code) = run_cuesync(&["at", "2.5"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "Show annotation 1 in track 1 (start/end = 2/3)");
}

#[test]
fn at_accepts_current_time_form() {
    let (stdout, _stderr, exit_code) = run_cuesync(&["at", "currentTime=6"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "Show annotation 1 in track 2 (start/end = 5/8)");
}

#[test]
fn at_in_gap_prints_nothing() {
    let (stdout, _stderr, exit_code) = run_cuesync(&["at", "11"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn at_json_reports_transition() {
    let (stdout, _stderr, exit_code) = run_cuesync(&["at", "12.5", "--json"]);
    assert_eq!(exit_code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["to_show"]["id"]["track"], 3);
    assert_eq!(value["to_show"]["id"]["index"], 0);
    assert_eq!(value["to_show"]["annotation"]["end_time"], 14.0);
    assert!(value.get("to_hide").is_none());
}

#[test]
fn at_json_in_gap_is_empty_object() {
    let (stdout, _stderr, exit_code) = run_cuesync(&["at", "11", "--json"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "{}");
}

#[test]
fn at_reads_catalog_file() {
    let (_dir, path) = write_fixture(
        "tracks.json",
        r#"{"tracks": [[{"start_time": 0, "end_time": 1.5}]]}"#,
    );
    let (stdout, _stderr, exit_code) = run_cuesync(&["at", "0", "-c", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "Show annotation 1 in track 1 (start/end = 0/1.5)");
}

#[test]
fn at_without_time_is_usage_error() {
    let (_stdout, stderr, exit_code) = run_cuesync(&["at"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<TIME>"));
}

#[test]
fn at_rejects_negative_time() {
    let (_stdout, stderr, exit_code) = run_cuesync(&["at", "--", "-1"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("invalid time"));
}

// ============================================================================
// Catalog errors
// ============================================================================

#[test]
fn overlapping_catalog_exits_1_with_reason() {
    let (_dir, path) = write_fixture(
        "bad.json",
        r#"[[{"start_time": 1, "end_time": 3}, {"start_time": 2, "end_time": 4}]]"#,
    );
    let (_stdout, stderr, exit_code) = run_cuesync(&["at", "2", "-c", path.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("bad.json"));
    assert!(stderr.contains("before the previous one ends"));
}

#[test]
fn unknown_catalog_extension_exits_1() {
    let (_dir, path) = write_fixture("tracks.yaml", "[]");
    let (_stdout, stderr, exit_code) = run_cuesync(&["catalog", "-c", path.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("tracks.yaml"));
}

#[test]
fn missing_catalog_file_exits_1() {
    let (_stdout, stderr, exit_code) = run_cuesync(&["catalog", "-c", "/nonexistent/tracks.json"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read catalog"));
}

// ============================================================================
// Playback
// ============================================================================

#[test]
fn play_sweeps_the_whole_demo_timeline() {
    let (stdout, stderr, exit_code) =
        run_cuesync(&["play", "--interval-ms", "0", "--until", "20"]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("Playing 5 tracks, 6 annotations"));
    assert!(stderr.contains("Stopped at 20s"));
    insta::assert_snapshot!(stdout, @r###"
    Show annotation 1 in track 1 (start/end = 2/3)
    Hide annotation 1 in track 1 (start/end = 2/3)
    Show annotation 2 in track 1 (start/end = 3/4)
    Hide annotation 2 in track 1 (start/end = 3/4)
    Show annotation 1 in track 2 (start/end = 5/8)
    Hide annotation 1 in track 2 (start/end = 5/8)
    Show annotation 2 in track 2 (start/end = 9/10)
    Hide annotation 2 in track 2 (start/end = 9/10)
    Show annotation 1 in track 4 (start/end = 12/14)
    Hide annotation 1 in track 4 (start/end = 12/14)
    Show annotation 2 in track 4 (start/end = 17/19)
    Hide annotation 2 in track 4 (start/end = 17/19)
    "###);
}

#[test]
fn play_from_toml_catalog_with_start_offset() {
    let (_dir, path) = write_fixture(
        "tracks.toml",
        "tracks = [[{ start_time = 1.0, end_time = 2.0 }, { start_time = 3.0, end_time = 4.0 }]]\n",
    );
    let (stdout, _stderr, exit_code) = run_cuesync(&[
        "play",
        "-c",
        path.to_str().unwrap(),
        "--interval-ms",
        "0",
        "--step",
        "0.5",
        "--start",
        "2.5",
        "--until",
        "5",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "Show annotation 2 in track 1 (start/end = 3/4)",
            "Hide annotation 2 in track 1 (start/end = 3/4)",
        ]
    );
}

#[test]
fn play_rejects_zero_step() {
    let (_stdout, stderr, exit_code) =
        run_cuesync(&["play", "--interval-ms", "0", "--step", "0", "--until", "1"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("--step"));
}

#[test]
fn trace_stages_logs_search_steps_to_stderr() {
    let (stdout, stderr, exit_code) = run_cuesync(&["at", "2.5", "--trace-stages"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stderr.contains("step 5 (find-annotation)"));
}

#[test]
fn trace_stages_from_config_logs_search_steps() {
    let (_dir, config) = write_fixture("config.toml", "[search]\ntrace_stages = true\n");

    let (stdout, stderr, exit_code) = run_cuesync_with_config(&["at", "2.5"], &config);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "Show annotation 1 in track 1 (start/end = 2/3)");
    assert!(stderr.contains("step 5 (find-annotation)"));
}

#[test]
fn error_line_on_piped_stderr_has_no_color_codes() {
    let config_dir = tempfile::TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_cuesync"))
        .args(["catalog", "-c", "/nonexistent/tracks.json"])
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .env("CUESYNC_CONFIG", config_dir.path().join("config.toml"))
        .output()
        .expect("Failed to execute cuesync");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Error:"));
    assert!(!stderr.contains('\x1b'));
}

// ============================================================================
// Catalog listing
// ============================================================================

#[test]
fn catalog_lists_tracks_and_bounds() {
    let (stdout, _stderr, exit_code) = run_cuesync(&["catalog"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r###"
    Track 1: 2-3, 3-4
    Track 2: 5-8, 9-10
    Track 3: (empty)
    Track 4: 12-14, 17-19
    Track 5: (empty)
    First start: 2, last end: 19
    "###);
}

#[test]
fn catalog_json_round_trips_through_loader() {
    let (_dir, path) = write_fixture("demo.json", DEMO_JSON);
    let (stdout, _stderr, exit_code) = run_cuesync(&["catalog", "--json", "-c", path.to_str().unwrap()]);
    assert_eq!(exit_code, 0);

    let (_dir2, exported) = write_fixture("exported.json", &stdout);
    let catalog = cuesync::catalog::load(&exported).unwrap();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.annotation_count(), 6);
    assert_eq!(catalog.non_empty_tracks(), &[0, 1, 3]);
}
