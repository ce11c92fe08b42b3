//! Integration tests for the gymbuddy binary.
//!
//! These tests verify end-to-end behavior including:
//! - Calorie calculator output and defaults
//! - Split generation, missing templates and export
//! - Saved plan workflow (save, list, show, delete)

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// CLI command isolated from the user's config and data directories
fn cli(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gymbuddy"));
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("RUST_LOG");
    cmd
}

fn read_plans(data_dir: &Path) -> Value {
    let content = fs::read_to_string(data_dir.join("plans.json")).expect("Failed to read plans");
    serde_json::from_str(&content).expect("plans.json is not JSON")
}

fn saved_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let line = text
        .lines()
        .find(|l| l.contains("Saved as"))
        .expect("no saved id in output");
    line.rsplit(' ').next().unwrap().trim().to_string()
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("weekly training splits"));
}

#[test]
fn test_calories_report() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args([
            "calories", "--sex", "male", "--age", "30", "--height", "180", "--weight", "80",
            "--activity", "moderate", "--goal", "muscle",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(BMR): 1780 cal/day"))
        .stdout(predicate::str::contains("(TDEE): 2759 cal/day"))
        .stdout(predicate::str::contains("2980 cal/day (+8% from TDEE)"))
        .stdout(predicate::str::contains("2.8L (95 oz)"));
}

#[test]
fn test_calories_unknown_keys_use_defaults() {
    let temp_dir = setup_test_dir();
    let output = cli(temp_dir.path())
        .args([
            "calories", "--sex", "female", "--age", "30", "--height", "180", "--weight", "80",
            "--activity", "couch-athlete", "--goal", "bogus-goal", "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let result: Value = serde_json::from_slice(&output).expect("calories --json output");
    assert_eq!(result["bmr"], 1614);
    // sedentary multiplier, maintain target
    assert_eq!(result["tdee"], 1937);
    assert_eq!(result["target_calories"], 1937);
    assert_eq!(result["surplus_fraction"], 0.0);
}

#[test]
fn test_calories_imperial() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args([
            "calories", "--sex", "male", "--age", "30", "--height", "70", "--weight", "176",
            "--units", "imperial",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(BMR): 1765 cal/day"));
}

#[test]
fn test_calories_rejects_unknown_units() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args([
            "calories", "--age", "30", "--height", "180", "--weight", "80", "--units", "stone",
        ])
        .assert()
        .failure();
}

#[test]
fn test_calories_restores_saved_settings() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");

    let first = cli(temp_dir.path())
        .args([
            "calories", "--sex", "male", "--age", "30", "--height", "180", "--weight", "80",
            "--activity", "moderate", "--goal", "muscle", "--save", "--data-dir",
        ])
        .arg(&data_dir)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let second = cli(temp_dir.path())
        .args(["calories", "--data-dir"])
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2980 cal/day (+8% from TDEE)"))
        .get_output()
        .stdout
        .clone();

    let first = String::from_utf8_lossy(&first);
    let report = first.split("\n✓ Saved as").next().unwrap();
    assert_eq!(report, String::from_utf8_lossy(&second));

    // flags still override single saved values
    cli(temp_dir.path())
        .args(["calories", "--goal", "maintain", "--data-dir"])
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2759 cal/day (0% from TDEE)"));
}

#[test]
fn test_calories_saved_metric_settings_in_imperial() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");

    cli(temp_dir.path())
        .args([
            "calories", "--sex", "male", "--age", "30", "--height", "180", "--weight", "80",
            "--save", "--data-dir",
        ])
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("(BMR): 1780 cal/day"));

    cli(temp_dir.path())
        .args(["calories", "--units", "imperial", "--data-dir"])
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("(BMR): 1780 cal/day"));
}

#[test]
fn test_calories_without_inputs_or_saved_settings_fails() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["calories", "--height", "180", "--weight", "80", "--data-dir"])
        .arg(temp_dir.path().join("empty"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing --age"));
}

#[test]
fn test_split_full_body_three_days() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["split", "--days", "3", "--type", "full-body", "--goal", "muscle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full Body A → Full Body B → Full Body A"))
        .stdout(predicate::str::contains("Mon  Full Body A"))
        .stdout(predicate::str::contains("Tue  Rest"));
}

#[test]
fn test_split_missing_template() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["split", "--days", "4", "--type", "ppl"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No template available for ppl with 4 days per week.",
        ));
}

#[test]
fn test_split_export_to_directory() {
    let temp_dir = setup_test_dir();
    let export_dir = temp_dir.path().join("exports");
    fs::create_dir_all(&export_dir).unwrap();

    cli(temp_dir.path())
        .args(["split", "--days", "3", "--type", "ppl", "--goal", "gain", "--export"])
        .arg(&export_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Split exported"));

    let files: Vec<_> = fs::read_dir(&export_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().to_string_lossy().to_string();
    assert!(name.starts_with("gymbuddy-split-") && name.ends_with(".txt"));

    let text = fs::read_to_string(files[0].path()).unwrap();
    assert!(text.starts_with("GymBuddy HQ - Weekly Split\nGenerated: "));
    assert!(text.contains("Split Type: ppl\nDays per Week: 3\nGoal: gain\n\n"));
    assert!(text.ends_with("Fri: Legs\nSat: Rest\nSun: Rest\n"));
}

#[test]
fn test_workout_beginner() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["workout", "--muscle", "chest", "--level", "beginner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chest Workout"))
        .stdout(predicate::str::contains("3. Cable Flyes"))
        .stdout(predicate::str::contains("4. Dips").not());
}

#[test]
fn test_workout_rejects_unknown_muscle() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["workout", "--muscle", "calves"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown muscle group"));
}

#[test]
fn test_diet_guide() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["diet", "--goal", "lose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fat Loss Guide"));

    cli(temp_dir.path())
        .args(["diet", "--goal", "maintain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No diet guide for maintain"));
}

#[test]
fn test_coach_reply() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["coach", "hello", "there"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I'm here to help!"));
}

#[test]
fn test_saved_workflow() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");

    let output = cli(temp_dir.path())
        .args(["split", "--days", "4", "--type", "upper-lower", "--save", "--data-dir"])
        .arg(&data_dir)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let split_id = saved_id(&output);

    cli(temp_dir.path())
        .args([
            "calories", "--age", "40", "--height", "170", "--weight", "70", "--save",
            "--data-dir",
        ])
        .arg(&data_dir)
        .assert()
        .success();

    let plans = read_plans(&data_dir);
    assert_eq!(plans["entries"].as_array().unwrap().len(), 2);
    assert_eq!(plans["entries"][0]["plan"]["kind"], "split");
    assert_eq!(plans["calorie_settings"]["age_years"], 40);

    cli(temp_dir.path())
        .args(["saved", "list", "--data-dir"])
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(split_id.as_str()))
        .stdout(predicate::str::contains("upper-lower x4"));

    cli(temp_dir.path())
        .args(["saved", "show", split_id.as_str(), "--data-dir"])
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Thu: Upper B"));

    cli(temp_dir.path())
        .args(["saved", "delete", split_id.as_str(), "--data-dir"])
        .arg(&data_dir)
        .assert()
        .success();

    let plans = read_plans(&data_dir);
    assert_eq!(plans["entries"].as_array().unwrap().len(), 1);

    cli(temp_dir.path())
        .args(["saved", "show", split_id.as_str(), "--data-dir"])
        .arg(&data_dir)
        .assert()
        .failure();
}

#[test]
fn test_saved_list_empty() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["saved", "list", "--data-dir"])
        .arg(temp_dir.path().join("empty"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved plans."));
}
