mod common;
use common::{fixture, hrd, hrd_with, setup_test_db, temp_out};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;

fn users() -> String {
    fixture("users.json")
}

fn json_of(mut cmd: assert_cmd::Command) -> Value {
    let out = cmd.output().expect("run hrdash");
    assert!(
        out.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout is JSON")
}

fn ids(view: &Value, key: &str) -> Vec<i64> {
    view[key]
        .as_array()
        .expect("array")
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn test_init_creates_db() {
    let db_path = setup_test_db("init_creates_db");

    hrd()
        .args(["--db", &db_path, "--test", "init"])
        .env("RUST_LOG", "off")
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_list_json_shows_whole_directory() {
    let db_path = setup_test_db("list_json_whole");
    let view = json_of(hrd_with(&db_path, &users(), &["list", "--json"]));

    assert_eq!(view["total"], 12);
    assert_eq!(view["stats"]["totalEmployees"], 12);
    assert_eq!(ids(&view, "employees"), (1..=12).collect::<Vec<_>>());

    let employees = view["employees"].as_array().unwrap();
    assert_eq!(employees[0]["department"], "Engineering");
    assert_eq!(employees[2]["department"], "Sales");
    assert_eq!(employees[3]["department"], "HR");
    assert_eq!(employees[10]["department"], "Engineering");

    // placeholders for a record without contact data
    assert_eq!(employees[2]["phone"], "+1-555-0123");
    assert_eq!(employees[2]["address"]["city"], "New York");
    for e in employees {
        let p = e["performance"].as_f64().unwrap();
        assert!((1.0..=5.0).contains(&p));
    }
}

#[test]
fn test_list_text_output() {
    let db_path = setup_test_db("list_text");
    hrd_with(&db_path, &users(), &["list"])
        .assert()
        .success()
        .stdout(contains("Employee Dashboard"))
        .stdout(contains("Filters: no filters"))
        .stdout(contains("Emily Johnson"))
        .stdout(contains("Showing 12 of 12 employees"));
}

#[test]
fn test_list_filters() {
    let db_path = setup_test_db("list_filters");

    let view = json_of(hrd_with(&db_path, &users(), &["list", "--dept", "sales", "--json"]));
    assert_eq!(ids(&view, "employees"), vec![3]);
    assert_eq!(view["total"], 12);
    assert_eq!(view["criteria"]["departments"][0], "Sales");

    let view = json_of(hrd_with(&db_path, &users(), &["list", "-s", "EMILY", "--json"]));
    assert_eq!(ids(&view, "employees"), vec![1]);

    let view = json_of(hrd_with(
        &db_path,
        &users(),
        &["list", "-d", "engineering,hr", "--json"],
    ));
    assert_eq!(ids(&view, "employees"), vec![1, 4, 11]);
}

#[test]
fn test_list_range_filter_is_inclusive() {
    let db_path = setup_test_db("list_range");
    let all = json_of(hrd_with(&db_path, &users(), &["list", "--json"]));
    let expected: Vec<i64> = all["employees"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["performance"].as_f64().unwrap() >= 4.0)
        .map(|e| e["id"].as_i64().unwrap())
        .collect();

    let view = json_of(hrd_with(&db_path, &users(), &["list", "-r", "4-5", "--json"]));
    assert_eq!(ids(&view, "employees"), expected);
}

#[test]
fn test_seed_makes_scores_reproducible() {
    let db_path = setup_test_db("seed_repro");
    let scores = |v: &Value| -> Vec<f64> {
        v["employees"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["performance"].as_f64().unwrap())
            .collect()
    };

    let a = json_of(hrd_with(&db_path, &users(), &["list", "--json"]));
    let b = json_of(hrd_with(&db_path, &users(), &["list", "--json"]));
    assert_eq!(scores(&a), scores(&b));
}

#[test]
fn test_single_bound_range_only_warns() {
    let db_path = setup_test_db("range_single");
    hrd_with(&db_path, &users(), &["list", "--range", "4"])
        .assert()
        .success()
        .stderr(contains("Ignoring performance range"))
        .stdout(contains("Showing 12 of 12 employees"));
}

#[test]
fn test_bad_range_and_department_fail() {
    let db_path = setup_test_db("bad_filters");
    hrd_with(&db_path, &users(), &["list", "--range", "a-b"])
        .assert()
        .failure()
        .stderr(contains("Invalid performance range"));

    hrd_with(&db_path, &users(), &["list", "--range", "4--5"])
        .assert()
        .failure()
        .stderr(contains("Invalid performance range"));

    hrd_with(&db_path, &users(), &["list", "--dept", "astronauts"])
        .assert()
        .failure()
        .stderr(contains("Unknown department"));
}

#[test]
fn test_missing_source_file_fails_with_hint() {
    let db_path = setup_test_db("missing_source");
    hrd_with(&db_path, "/no/such/users.json", &["list"])
        .assert()
        .failure()
        .stderr(contains("Invalid directory source"))
        .stderr(contains("run the command again"));
}

#[test]
fn test_bookmark_flow_persists() {
    let db_path = setup_test_db("bookmark_flow");

    hrd_with(&db_path, &users(), &["bookmark", "2"])
        .assert()
        .success()
        .stdout(contains("Bookmarked #2 Michael Williams."));

    hrd_with(&db_path, &users(), &["bookmark", "2"])
        .assert()
        .success()
        .stdout(contains("already bookmarked"));

    hrd_with(&db_path, &users(), &["toggle", "5"])
        .assert()
        .success()
        .stdout(contains("Bookmarked #5"));

    let view = json_of(hrd_with(&db_path, &users(), &["bookmarks", "--json"]));
    assert_eq!(ids(&view, "employees"), vec![2, 5]);
    assert_eq!(view["stats"]["bookmarked"], 2);

    hrd_with(&db_path, &users(), &["unbookmark", "2"])
        .assert()
        .success()
        .stdout(contains("Bookmark for #2 removed."));

    hrd_with(&db_path, &users(), &["unbookmark", "2"])
        .assert()
        .success()
        .stdout(contains("was not bookmarked"));

    let view = json_of(hrd_with(&db_path, &users(), &["bookmarks", "--json"]));
    assert_eq!(ids(&view, "employees"), vec![5]);

    // bookmark flag shows up in the detail view
    hrd_with(&db_path, &users(), &["show", "5"])
        .assert()
        .success()
        .stdout(contains("Bookmarked: yes"));
}

#[test]
fn test_bookmark_unknown_employee_fails() {
    let db_path = setup_test_db("bookmark_unknown");
    hrd_with(&db_path, &users(), &["bookmark", "999"])
        .assert()
        .failure()
        .stderr(contains("Employee #999 not found"));

    let view = json_of(hrd_with(&db_path, &users(), &["bookmarks", "--json"]));
    assert!(view["employees"].as_array().unwrap().is_empty());
}

#[test]
fn test_orphaned_bookmarks_and_prune() {
    let db_path = setup_test_db("orphans_prune");
    let small = fixture("users_small.json");

    hrd_with(&db_path, &users(), &["bookmark", "1"]).assert().success();
    hrd_with(&db_path, &users(), &["bookmark", "7"]).assert().success();

    // user 7 is not part of the smaller directory
    let view = json_of(hrd_with(&db_path, &small, &["bookmarks", "--json"]));
    assert_eq!(ids(&view, "employees"), vec![1]);
    assert_eq!(view["orphaned"][0]["employeeId"], 7);
    assert_eq!(view["stats"]["orphaned"], 1);

    hrd_with(&db_path, &small, &["bookmarks"])
        .assert()
        .success()
        .stdout(contains("not in directory"))
        .stdout(contains("--prune"));

    // orphans are inert until pruned: the full directory brings them back
    let view = json_of(hrd_with(&db_path, &users(), &["bookmarks", "--json"]));
    assert_eq!(ids(&view, "employees"), vec![1, 7]);

    hrd_with(&db_path, &small, &["bookmarks", "--prune"])
        .assert()
        .success()
        .stdout(contains("Removed 1 bookmark(s)"));

    let view = json_of(hrd_with(&db_path, &users(), &["bookmarks", "--json"]));
    assert_eq!(ids(&view, "employees"), vec![1]);
}

#[test]
fn test_show_detail_tabs() {
    let db_path = setup_test_db("show_tabs");

    hrd_with(&db_path, &users(), &["show", "1"])
        .assert()
        .success()
        .stdout(contains("Emily Johnson (#1)"))
        .stdout(contains("Overview"))
        .stdout(contains("Department : Engineering"))
        .stdout(contains("Performance history").not());

    hrd_with(&db_path, &users(), &["show", "1", "--tab", "all"])
        .assert()
        .success()
        .stdout(contains("Performance history"))
        .stdout(contains("Projects"))
        .stdout(contains("Feedback"));

    let view = json_of(hrd_with(
        &db_path,
        &users(),
        &["show", "4", "--tab", "projects", "--json"],
    ));
    assert_eq!(view["employee"]["id"], 4);
    assert!(view["employee"]["bio"].as_str().unwrap().contains(" 0 years"));
    assert_eq!(view["projects"].as_array().unwrap().len(), 3);
    assert!(view.get("feedback").is_none());
}

#[test]
fn test_show_unknown_falls_back_to_listing() {
    let db_path = setup_test_db("show_unknown");
    hrd_with(&db_path, &users(), &["show", "999"])
        .assert()
        .success()
        .stderr(contains("Employee #999 not found"))
        .stdout(contains("Employee Dashboard"));
}

#[test]
fn test_promote_reports_new_rating() {
    let db_path = setup_test_db("promote_once");
    hrd_with(&db_path, &users(), &["promote", "1"])
        .assert()
        .success()
        .stdout(contains("#1 Emily Johnson"))
        .stdout(contains("current session only"));

    hrd_with(&db_path, &users(), &["promote", "999"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_analytics_json() {
    let db_path = setup_test_db("analytics_json");
    hrd_with(&db_path, &users(), &["bookmark", "3"]).assert().success();

    let view = json_of(hrd_with(&db_path, &users(), &["analytics", "--json"]));

    let bands = view["performanceDistribution"].as_array().unwrap();
    let labels: Vec<&str> = bands.iter().map(|b| b["range"].as_str().unwrap()).collect();
    assert_eq!(labels, vec!["1-2", "2-3", "3-4", "4-5"]);
    let total: u64 = bands.iter().map(|b| b["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 12);

    let depts = view["departmentAverages"].as_array().unwrap();
    assert_eq!(depts.len(), 10);
    assert_eq!(depts[0]["department"], "Engineering");
    assert_eq!(depts[0]["employees"], 2);

    let trend = view["bookmarkTrend"].as_array().unwrap();
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0]["count"], 1);
}

#[test]
fn test_analytics_text() {
    let db_path = setup_test_db("analytics_text");
    hrd_with(&db_path, &users(), &["analytics"])
        .assert()
        .success()
        .stdout(contains("Analytics"))
        .stdout(contains("Average rating by department"))
        .stdout(contains("Performance distribution"))
        .stdout(contains("no bookmarks yet"));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("export_both");
    hrd_with(&db_path, &users(), &["bookmark", "3"]).assert().success();

    let json_out = temp_out("export_sales", "json");
    hrd_with(
        &db_path,
        &users(),
        &["export", "--format", "json", "--file", &json_out, "--dept", "sales", "--force"],
    )
    .assert()
    .success()
    .stdout(contains("1 employee(s) written"));

    let rows: Value = serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["id"], 3);
    assert_eq!(rows[0]["department"], "Sales");
    assert_eq!(rows[0]["bookmarked"], true);

    let csv_out = temp_out("export_all", "csv");
    hrd_with(&db_path, &users(), &["export", "--file", &csv_out, "--force"])
        .assert()
        .success();

    let text = fs::read_to_string(&csv_out).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("id,first_name,last_name,email"));
    assert_eq!(lines.count(), 12);
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    hrd_with(&db_path, &users(), &["export", "--file", "out.csv", "--force"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_log_records_bookmark_operations() {
    let db_path = setup_test_db("log_ops");
    hrd_with(&db_path, &users(), &["bookmark", "1"]).assert().success();
    hrd_with(&db_path, &users(), &["unbookmark", "1"]).assert().success();

    hrd_with(&db_path, &users(), &["log", "--print"])
        .assert()
        .success()
        .stdout(contains("bookmark"))
        .stdout(contains("unbookmark"))
        .stdout(contains("migration_applied"));
}
