#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn journal_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("journal"));
    cmd.env("JOURNAL_DATA", data.path().as_os_str())
        .env_remove("RUST_LOG")
        .env_remove("JOURNAL_PAGE_SIZE")
        .env_remove("JOURNAL_EXPORT_DIR")
        .env_remove("JOURNAL_REPORT_TITLE");
    cmd
}

fn login(data: &TempDir, user: &str) {
    journal_cmd(data)
        .args(["login", user, user])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Logged in as {}", user)));
}

#[test]
fn test_naked_run_without_session_shows_hint() {
    let data = TempDir::new().unwrap();
    journal_cmd(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Try: admin/admin, staff/staff, viewer/viewer",
        ));
}

#[test]
fn test_session_persists_between_runs() {
    let data = TempDir::new().unwrap();
    login(&data, "viewer");

    journal_cmd(&data)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as viewer"));

    journal_cmd(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial balance"))
        .stdout(predicate::str::contains("Page [1] 2"));

    journal_cmd(&data)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    journal_cmd(&data)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Role guest is not allowed"));
}

#[test]
fn test_wrong_password_keeps_previous_role() {
    let data = TempDir::new().unwrap();
    login(&data, "staff");

    journal_cmd(&data)
        .args(["login", "admin", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));

    journal_cmd(&data)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as staff"));
}

#[test]
fn test_staff_sees_actions_but_cannot_filter() {
    let data = TempDir::new().unwrap();
    login(&data, "staff");

    journal_cmd(&data)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Actions"))
        .stdout(predicate::str::contains("edit / delete"));

    journal_cmd(&data)
        .args(["show", "--filter", "Cash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Role staff is not allowed to filter the journal",
        ));
}

#[test]
fn test_show_json_with_filter_and_sort() {
    let data = TempDir::new().unwrap();
    login(&data, "viewer");

    let output = journal_cmd(&data)
        .args([
            "show", "--filter", "Cash", "--sort", "debit", "--sort", "debit", "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let window = &json["window"];
    assert_eq!(window["matched"], 4);
    assert_eq!(window["sort"]["ascending"], false);
    let debits: Vec<&serde_json::Value> = window["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| &row["entry"]["debit"])
        .collect();
    assert_eq!(debits[0], 1000.0);
    assert_eq!(debits[2], 50.0);
    assert!(debits[3].is_null());
}

#[test]
fn test_export_writes_files() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    login(&data, "admin");

    journal_cmd(&data)
        .args(["export", "xlsx", "--out"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Excel exported to"));

    journal_cmd(&data)
        .args(["export", "pdf", "--out"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PDF exported to"));

    assert!(out.path().join("journal-report.xlsx").exists());
    let pdf = std::fs::read(out.path().join("journal-report.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn test_staff_export_is_refused() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    login(&data, "staff");

    journal_cmd(&data)
        .args(["export", "pdf", "--out"])
        .arg(out.path())
        .assert()
        .failure();
    assert!(!out.path().join("journal-report.pdf").exists());
}

#[test]
fn test_shell_edit_and_save() {
    let data = TempDir::new().unwrap();
    login(&data, "admin");

    journal_cmd(&data)
        .arg("shell")
        .write_stdin("edit 1\nset description Opening balance\nsave\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("save / cancel"))
        .stdout(predicate::str::contains("Row updated"))
        .stdout(predicate::str::contains("Opening balance"));
}

#[test]
fn test_shell_free_text_keeps_spacing() {
    let data = TempDir::new().unwrap();
    login(&data, "admin");

    journal_cmd(&data)
        .arg("shell")
        .write_stdin("edit 1\nset description Two  spaces   here\nsave\nfilter Two  spaces\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Two  spaces   here"))
        .stdout(predicate::str::contains("Filter: \"Two  spaces\" (1 matching)"));
}

#[test]
fn test_shell_keeps_going_after_errors() {
    let data = TempDir::new().unwrap();
    login(&data, "staff");

    journal_cmd(&data)
        .arg("shell")
        .write_stdin("filter Cash\nedit 9\nfrobnicate\ndelete 1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("not allowed to filter"))
        .stderr(predicate::str::contains("Row 9 is not on the current page"))
        .stdout(predicate::str::contains("Row deleted"));
}

#[test]
fn test_config_reads_data_dir_file() {
    let data = TempDir::new().unwrap();
    std::fs::write(
        data.path().join("journal.toml"),
        "page_size = 3\nreport_title = \"Ledger\"\n",
    )
    .unwrap();

    journal_cmd(&data)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size = 3"))
        .stdout(predicate::str::contains("report_title = \"Ledger\""))
        .stdout(predicate::str::contains("export_dir = (unset)"));

    login(&data, "viewer");
    journal_cmd(&data)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger"))
        .stdout(predicate::str::contains("Page [1] 2 3 4"));
}
