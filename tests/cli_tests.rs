use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{QR, init_db, qra, setup_test_db};

#[test]
fn test_init_creates_store() {
    let db_path = setup_test_db("cli_init");

    qra("cli_init")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());

    qra("cli_init")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_scan_accepts_badge_of_open_project() {
    qra("cli_scan_ok")
        .args(["scan", "--project", "120", QR])
        .assert()
        .success()
        .stdout(contains("Ana Quispe belongs to project 120"))
        .stdout(contains("Assignment id"))
        .stdout(contains("908"));
}

#[test]
fn test_scan_rejects_other_project() {
    qra("cli_scan_mismatch")
        .args(["scan", "--project", "121", QR])
        .assert()
        .failure()
        .stderr(contains("does not belong to this project"));
}

#[test]
fn test_scan_rejects_short_payload() {
    qra("cli_scan_short")
        .args(["scan", "--project", "120", "15|120|Ana"])
        .assert()
        .failure()
        .stderr(contains("expected 12 fields, found 3"));
}

#[test]
fn test_scan_rejects_empty_payload() {
    qra("cli_scan_empty")
        .args(["scan", "--project", "120", ""])
        .assert()
        .failure()
        .stderr(contains("Empty QR code"));
}

#[test]
fn test_session_without_login() {
    let db_path = setup_test_db("cli_session_none");
    init_db("cli_session_none", &db_path);

    qra("cli_session_none")
        .args(["--db", &db_path, "session"])
        .assert()
        .success()
        .stdout(contains("No active session"));
}

#[test]
fn test_projects_requires_login() {
    let db_path = setup_test_db("cli_projects_nologin");
    init_db("cli_projects_nologin", &db_path);

    qra("cli_projects_nologin")
        .args(["--db", &db_path, "projects"])
        .assert()
        .failure()
        .stderr(contains("not authenticated"));
}

#[test]
fn test_mark_validates_type_before_anything_else() {
    let db_path = setup_test_db("cli_mark_badtype");
    init_db("cli_mark_badtype", &db_path);

    qra("cli_mark_badtype")
        .args(["--db", &db_path, "mark", "--project", "120", "--type", "9", QR])
        .assert()
        .failure()
        .stderr(contains("Invalid attendance type"));
}

#[test]
fn test_mark_rejects_mismatch_without_session() {
    let db_path = setup_test_db("cli_mark_mismatch");
    init_db("cli_mark_mismatch", &db_path);

    qra("cli_mark_mismatch")
        .args(["--db", &db_path, "mark", "--project", "999", "--type", "in1", QR])
        .assert()
        .failure()
        .stderr(contains("does not belong to this project").and(contains("999")));
}

#[test]
fn test_attendance_rejects_bad_date() {
    let db_path = setup_test_db("cli_att_baddate");
    init_db("cli_att_baddate", &db_path);

    qra("cli_att_baddate")
        .args(["--db", &db_path, "attendance", "--project", "120", "--date", "2024-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_logout_without_session_is_harmless() {
    let db_path = setup_test_db("cli_logout_none");
    init_db("cli_logout_none", &db_path);

    qra("cli_logout_none")
        .args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("No active session"));
}

#[test]
fn test_login_with_empty_password_fails_locally() {
    let db_path = setup_test_db("cli_login_empty");
    init_db("cli_login_empty", &db_path);

    qra("cli_login_empty")
        .args(["--db", &db_path, "login", "-u", "ana"])
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(contains("Enter username and password"));
}

#[test]
fn test_config_print_shows_defaults() {
    qra("cli_config_print")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("base_url"))
        .stdout(contains("forwarded_host"));
}

#[test]
fn test_login_against_unreachable_server_reports_connection_error() {
    let db_path = setup_test_db("cli_login_unreachable");

    qra("cli_login_unreachable")
        .args([
            "--db", &db_path, "--url", "http://127.0.0.1:9", "login", "-u", "ana", "-p", "x",
        ])
        .assert()
        .failure()
        .stderr(contains("Error: Connection error: server unreachable"))
        .stderr(contains("Login failed").not());
}

#[cfg(unix)]
#[test]
fn test_store_created_by_login_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let db_path = setup_test_db("cli_login_mode");

    qra("cli_login_mode")
        .args([
            "--db", &db_path, "--url", "http://127.0.0.1:9", "login", "-u", "ana", "-p", "x",
        ])
        .assert()
        .failure();

    let mode = std::fs::metadata(&db_path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}
