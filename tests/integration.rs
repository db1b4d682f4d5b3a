use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

fn zesty_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("zesty").unwrap();
    cmd.env("ZESTY_CONFIG_DIR", config_dir.path())
        .env_remove("ZESTY_ID")
        .env_remove("ZESTY_ENDPOINT")
        .env_remove("RUST_LOG");
    cmd
}

const TWO_WEEKS: &str = r#"{
    "client": { "name": "Ada Lovelace" },
    "meals": [
        {
            "id": 101,
            "delivery_date": "2024-01-01T12:00:00",
            "restaurant_name": "Souvla",
            "restaurant_cuisine": "Greek"
        },
        {
            "id": 102,
            "delivery_date": "2024-01-10T12:30:00",
            "restaurant_name": "Rooh",
            "restaurant_cuisine": "Indian"
        }
    ]
}"#;

fn write_meals(dir: &TempDir, content: &str) -> String {
    let file = dir.child("meals.json");
    file.write_str(content).unwrap();
    file.path().to_str().unwrap().to_string()
}

fn week_json(config_dir: &TempDir, meals: &str, offset: &str, week_start: &str) -> Value {
    let output = zesty_cmd(config_dir)
        .args([
            "week",
            "--meals-file",
            meals,
            "--today",
            "2024-01-03",
            "--week-start",
            week_start,
            "--offset",
            offset,
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn first_week_cannot_page_back() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(&dir, TWO_WEEKS);

    let week = week_json(&dir, &meals, "0", "monday");
    assert_eq!(week["client"], "Ada Lovelace");
    assert_eq!(week["week_start"], "2024-01-01");
    assert_eq!(week["week_end"], "2024-01-07");
    assert_eq!(week["can_go_prev"], false);
    assert_eq!(week["can_go_next"], true);

    let days = week["days"].as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["meals"][0]["id"], 101);
}

#[test]
fn last_week_cannot_page_forward() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(&dir, TWO_WEEKS);

    let week = week_json(&dir, &meals, "1", "monday");
    assert_eq!(week["week_start"], "2024-01-08");
    assert_eq!(week["can_go_prev"], true);
    assert_eq!(week["can_go_next"], false);
    assert_eq!(week["days"][0]["meals"][0]["restaurant_name"], "Rooh");
}

#[test]
fn empty_week_can_page_both_ways() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(&dir, TWO_WEEKS);

    for offset in ["2", "-3"] {
        let week = week_json(&dir, &meals, offset, "monday");
        assert!(week["days"].as_array().unwrap().is_empty());
        assert_eq!(week["can_go_prev"], true);
        assert_eq!(week["can_go_next"], true);
    }
}

#[test]
fn sunday_is_the_default_first_day() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(&dir, TWO_WEEKS);

    let output = zesty_cmd(&dir)
        .args([
            "week",
            "--meals-file",
            &meals,
            "--today",
            "2024-01-03",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let week: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(week["week_start"], "2023-12-31");
    assert_eq!(week["week_end"], "2024-01-06");
}

#[test]
fn unsorted_meals_are_handled() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(
        &dir,
        r#"{
            "client": { "name": "Ada" },
            "meals": [
                { "id": 3, "delivery_date": "2024-01-17T12:00:00", "restaurant_name": "C", "restaurant_cuisine": "Thai" },
                { "id": 1, "delivery_date": "2024-01-01T12:00:00", "restaurant_name": "A", "restaurant_cuisine": "Greek" },
                { "id": 2, "delivery_date": "2024-01-09T12:00:00", "restaurant_name": "B", "restaurant_cuisine": "Indian" }
            ]
        }"#,
    );

    let first = week_json(&dir, &meals, "0", "monday");
    assert_eq!(first["can_go_prev"], false);
    assert_eq!(first["can_go_next"], true);

    let last = week_json(&dir, &meals, "2", "monday");
    assert_eq!(last["days"][0]["meals"][0]["id"], 3);
    assert_eq!(last["can_go_prev"], true);
    assert_eq!(last["can_go_next"], false);
}

#[test]
fn meals_on_one_day_stay_in_time_order() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(
        &dir,
        r#"{
            "client": { "name": "Ada" },
            "meals": [
                { "id": 2, "delivery_date": "2024-01-03T18:00:00", "restaurant_name": "Dinner", "restaurant_cuisine": "Thai" },
                { "id": 1, "delivery_date": "2024-01-03T12:00:00", "restaurant_name": "Lunch", "restaurant_cuisine": "Greek" }
            ]
        }"#,
    );

    let week = week_json(&dir, &meals, "0", "sunday");
    let day = &week["days"][0];
    assert_eq!(day["date"], "2024-01-03");
    assert_eq!(day["meals"][0]["restaurant_name"], "Lunch");
    assert_eq!(day["meals"][1]["restaurant_name"], "Dinner");
    // both edges of the schedule are on screen
    assert_eq!(week["can_go_prev"], false);
    assert_eq!(week["can_go_next"], false);
}

#[test]
fn empty_schedule_never_blocks_paging() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(&dir, r#"{ "client": { "name": "Ada" }, "meals": [] }"#);

    for offset in ["-10", "0", "10"] {
        let week = week_json(&dir, &meals, offset, "sunday");
        assert_eq!(week["can_go_prev"], true);
        assert_eq!(week["can_go_next"], true);
    }
}

#[test]
fn week_table_output() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(&dir, TWO_WEEKS);

    zesty_cmd(&dir)
        .args([
            "week",
            "--meals-file",
            &meals,
            "--today",
            "2024-01-03",
            "--week-start",
            "monday",
            "--offset",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("Jan 08 – Jan 14, 2024"))
        .stdout(predicate::str::contains("Rooh"))
        .stdout(predicate::str::contains("12:30pm"))
        .stdout(predicate::str::contains("Souvla").not())
        .stdout(predicate::str::contains(
            "Earlier weeks: yes   Later weeks: no",
        ));
}

#[test]
fn week_table_empty_week() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(&dir, TWO_WEEKS);

    zesty_cmd(&dir)
        .args([
            "week",
            "--meals-file",
            &meals,
            "--today",
            "2024-03-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No meals scheduled this week."));
}

#[test]
fn missing_client_id_is_reported() {
    let dir = TempDir::new().unwrap();

    zesty_cmd(&dir)
        .args(["week"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ZESTY_ID"));
}

#[test]
fn missing_meals_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    zesty_cmd(&dir)
        .args(["week", "--meals-file", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn invalid_today_fails() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(&dir, TWO_WEEKS);

    zesty_cmd(&dir)
        .args(["week", "--meals-file", &meals, "--today", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn invalid_week_start_is_rejected() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(&dir, TWO_WEEKS);

    zesty_cmd(&dir)
        .args(["week", "--meals-file", &meals, "--week-start", "friday"])
        .assert()
        .failure();
}

#[test]
fn init_writes_config() {
    let dir = TempDir::new().unwrap();

    zesty_cmd(&dir)
        .args([
            "init",
            "--client-id",
            "4242",
            "--week-start",
            "monday",
            "--non-interactive",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config saved"));

    let contents = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(contents.contains("4242"));
    assert!(contents.contains("monday"));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let args = ["init", "--client-id", "4242", "--non-interactive"];

    zesty_cmd(&dir).args(args).assert().success();
    zesty_cmd(&dir)
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Already initialized"));
}

#[test]
fn init_non_interactive_requires_client_id() {
    let dir = TempDir::new().unwrap();

    zesty_cmd(&dir)
        .args(["init", "--non-interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--client-id"));
}

#[test]
fn configured_week_start_is_used() {
    let dir = TempDir::new().unwrap();
    let meals = write_meals(&dir, TWO_WEEKS);

    zesty_cmd(&dir)
        .args([
            "init",
            "--client-id",
            "4242",
            "--week-start",
            "monday",
            "--non-interactive",
        ])
        .assert()
        .success();

    let output = zesty_cmd(&dir)
        .args([
            "week",
            "--meals-file",
            &meals,
            "--today",
            "2024-01-03",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let week: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(week["week_start"], "2024-01-01");
}
