//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(home: &TempDir, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_alfred"))
        .args(args)
        .env("ALFRED_HOME", home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn home() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn test_distance_same_point_is_zero() {
    let home = home();
    let (code, stdout, _) = run_cli(
        &home,
        &["distance", "-12.0464", "-77.0428", "-12.0464", "-77.0428"],
    );
    assert_eq!(code, 0);
    assert!(stdout.starts_with("0.000 km (0 m)"), "unexpected output: {stdout}");
}

#[test]
fn test_distance_lima_cusco() {
    let home = home();
    let (code, stdout, _) = run_cli(
        &home,
        &["distance", "-12.0464", "-77.0428", "-13.5320", "-71.9675"],
    );
    assert_eq!(code, 0);
    let km: f64 = stdout.split_whitespace().next().unwrap().parse().unwrap();
    assert!((km - 572.0).abs() < 10.0, "got {km}");
}

#[test]
fn test_stateless_commands_leave_no_config_behind() {
    let home = home();
    let (code, _, _) = run_cli(&home, &["distance", "0", "0", "1", "1"]);
    assert_eq!(code, 0);
    let (code, _, _) = run_cli(&home, &["tip"]);
    assert_eq!(code, 0);
    let (code, _, _) = run_cli(&home, &["recommend"]);
    assert_eq!(code, 0);
    assert!(!home.path().join("config.toml").exists());
}

#[test]
fn test_recommend_without_location_uses_fallback() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["recommend"]);
    assert_eq!(code, 0);
    let page: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(page["total"], 6);
    assert_eq!(page["start_index"], 0);
    assert_eq!(page["has_reference"], false);
    assert_eq!(page["items"].as_array().unwrap().len(), 3);
}

#[test]
fn test_recommend_ticks_rotate_the_window() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["recommend", "--ticks", "1"]);
    assert_eq!(code, 0);
    let page: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(page["start_index"], 3);
}

#[test]
fn test_recommend_with_location_filters_by_radius() {
    let home = home();
    let (code, stdout, _) = run_cli(
        &home,
        &["recommend", "--lat", "-12.0464", "--lon", "-77.0428", "--radius", "1"],
    );
    assert_eq!(code, 0);
    let page: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(page["has_reference"], true);
    let items = page["items"].as_array().unwrap();
    assert!(!items.is_empty());
    assert_eq!(items[0]["title"], "Café Luna");
    assert_eq!(items[0]["distance_km"], 0.0);
    for item in items {
        assert!(item["distance_km"].as_f64().unwrap() <= 1.0);
    }
}

#[test]
fn test_recommend_rejects_bad_radius() {
    let home = home();
    let (code, _, stderr) = run_cli(&home, &["recommend", "--radius", "9"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_places_with_empty_category() {
    let home = home();
    let catalog = home.path().join("places.json");
    std::fs::write(
        &catalog,
        r#"[{"id":1,"title":"Museo","category":"Actividades","rating":4.0,"price":"$",
            "coordinate":{"latitude":0.0,"longitude":0.0}}]"#,
    )
    .unwrap();
    let (code, stdout, _) = run_cli(
        &home,
        &["places", "--category", "Comida", "--catalog", catalog.to_str().unwrap()],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("No places match"));
}

#[test]
fn test_places_json_lists_filtered_catalog() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["places", "--category", "Eventos", "--json"]);
    assert_eq!(code, 0);
    let places: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let places = places.as_array().unwrap();
    assert!(!places.is_empty());
    assert!(places.iter().all(|p| p["category"] == "Eventos"));
}

#[test]
fn test_tip_prints_something() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["tip"]);
    assert_eq!(code, 0);
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_set_get_reset() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["config", "get", "recommendations.window_size"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "3");

    let (code, _, _) = run_cli(&home, &["config", "set", "recommendations.window_size", "2"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(&home, &["config", "get", "recommendations.window_size"]);
    assert_eq!(stdout.trim(), "2");

    let (_, stdout, _) = run_cli(&home, &["recommend"]);
    let page: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(page["items"].as_array().unwrap().len(), 2);

    let (code, _, _) = run_cli(&home, &["config", "reset"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(&home, &["config", "get", "recommendations.window_size"]);
    assert_eq!(stdout.trim(), "3");
}

#[test]
fn test_config_location_becomes_reference() {
    let home = home();
    run_cli(&home, &["config", "set", "location.latitude", "-12.0464"]);
    run_cli(&home, &["config", "set", "location.longitude", "-77.0428"]);
    let (_, stdout, _) = run_cli(&home, &["recommend"]);
    let page: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(page["has_reference"], true);
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = home();
    let (code, _, stderr) = run_cli(&home, &["config", "get", "nope.key"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key"));

    let (code, _, _) = run_cli(&home, &["config", "set", "recommendations.default_radius_km", "8"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_list_json() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["config", "list", "--json"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["recommendations"]["fallback_sample_size"], 6);
}

#[test]
fn test_watch_prints_mount_snapshot() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["watch", "--duration-secs", "0"]);
    assert_eq!(code, 0);
    let first = stdout.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert_eq!(event["type"], "PageSnapshot");
}
