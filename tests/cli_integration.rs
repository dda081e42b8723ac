use assert_cmd::Command;
use predicates::prelude::*;

fn locwork(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("locwork").unwrap();
    cmd.env("LOCWORK_HOME", home);
    cmd
}

#[test]
fn location_add_list_remove_flow() {
    let home = tempfile::tempdir().unwrap();

    locwork(home.path())
        .args(["location", "add", "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("location 'home' added"));

    locwork(home.path())
        .args(["location", "add", "work"])
        .assert()
        .success();

    locwork(home.path())
        .args(["location", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("home").and(predicate::str::contains("work")));

    locwork(home.path())
        .args(["location", "remove", "work"])
        .assert()
        .success();

    locwork(home.path())
        .args(["location", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work").not());
}

#[test]
fn bare_invocation_prints_help() {
    let home = tempfile::tempdir().unwrap();

    locwork(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:").and(predicate::str::contains("interactive")));
}

#[test]
fn duplicate_location_fails_nonzero() {
    let home = tempfile::tempdir().unwrap();

    locwork(home.path())
        .args(["location", "add", "home"])
        .assert()
        .success();

    locwork(home.path())
        .args(["location", "add", "home"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn removing_unknown_location_fails_nonzero() {
    let home = tempfile::tempdir().unwrap();

    locwork(home.path())
        .args(["location", "remove", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown location"));
}

#[test]
fn log_add_requires_registered_location() {
    let home = tempfile::tempdir().unwrap();

    locwork(home.path())
        .args(["log", "add", "mars", "--date", "2025-07-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the registry"));
}

#[test]
fn log_add_and_list_round_trip() {
    let home = tempfile::tempdir().unwrap();

    locwork(home.path())
        .args(["location", "add", "home"])
        .assert()
        .success();

    locwork(home.path())
        .args(["log", "add", "home", "--date", "2025-07-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added record: 2025-07-01, home"));

    locwork(home.path())
        .args(["log", "add", "home", "--date", "2025-07-04", "--holiday"])
        .assert()
        .success();

    locwork(home.path())
        .args(["log", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2025-07-01")
                .and(predicate::str::contains("2025-07-04"))
                .and(predicate::str::contains("free")),
        );
}

#[test]
fn relogging_a_date_replaces_the_record() {
    let home = tempfile::tempdir().unwrap();

    for name in ["home", "work"] {
        locwork(home.path())
            .args(["location", "add", name])
            .assert()
            .success();
    }

    locwork(home.path())
        .args(["log", "add", "home", "--date", "2025-07-01"])
        .assert()
        .success();

    locwork(home.path())
        .args(["log", "add", "work", "--date", "2025-07-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("replaced record"));

    locwork(home.path())
        .args(["log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work"))
        .stdout(predicate::str::contains("home").not());
}

#[test]
fn log_add_needs_today_or_date() {
    let home = tempfile::tempdir().unwrap();

    locwork(home.path())
        .args(["location", "add", "home"])
        .assert()
        .success();

    locwork(home.path())
        .args(["log", "add", "home"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--today or --date"));
}

#[test]
fn stats_render_calendar_and_distribution() {
    let home = tempfile::tempdir().unwrap();

    for name in ["home", "work"] {
        locwork(home.path())
            .args(["location", "add", name])
            .assert()
            .success();
    }
    locwork(home.path())
        .args(["log", "add", "home", "--date", "2025-07-01"])
        .assert()
        .success();
    locwork(home.path())
        .args(["log", "add", "work", "--date", "2025-07-02"])
        .assert()
        .success();

    locwork(home.path())
        .args(["stats", "--month", "2025-07"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("July 2025")
                .and(predicate::str::contains("Mo | Tu | We | Th | Fr | Sa | Su"))
                .and(predicate::str::contains("Distribution"))
                .and(predicate::str::contains("50.0%"))
                .and(predicate::str::contains("Logged      2")),
        );
}

#[test]
fn stats_on_empty_month_still_renders() {
    let home = tempfile::tempdir().unwrap();

    locwork(home.path())
        .args(["stats", "--month", "2025-07"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("nothing logged")
                .and(predicate::str::contains("This month  23")),
        );
}

#[test]
fn corrupt_record_store_degrades_with_warning() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path()).unwrap();
    std::fs::write(
        home.path().join("records.csv"),
        "location,date,day_type\nhome,2025-07-01,9\n",
    )
    .unwrap();

    locwork(home.path())
        .args(["stats", "--month", "2025-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("corrupt").and(predicate::str::contains("empty store")));
}

#[test]
fn corrupt_store_aborts_log_add_without_overwriting() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path()).unwrap();
    let garbage = "location,date,day_type\nhome,not-a-date,1\n";
    std::fs::write(home.path().join("records.csv"), garbage).unwrap();

    locwork(home.path())
        .args(["location", "add", "home"])
        .assert()
        .success();

    locwork(home.path())
        .args(["log", "add", "home", "--date", "2025-07-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));

    let content = std::fs::read_to_string(home.path().join("records.csv")).unwrap();
    assert_eq!(content, garbage);
}
