#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dhp_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dhp").unwrap();
    cmd.env("DHP_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

const ADD_AMA: &str = "1\nAma\nMensah\n15-06-2000\nAccra\nH12\n024-000-0000\n";

#[test]
fn test_csv_session_persists_between_runs() {
    let temp = TempDir::new().unwrap();

    // 1. Choose CSV at the prompt and add a patient
    dhp_cmd(&temp)
        .write_stdin(format!("1\n{ADD_AMA}6\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the DHP Patient Management System!"))
        .stdout(predicate::str::contains("Patient added successfully!"))
        .stdout(predicate::str::contains("Goodbye"));

    let csv = fs::read_to_string(temp.path().join("patients.csv")).unwrap();
    assert!(csv.starts_with(
        "id,first_name,last_name,date_of_birth,age,hometown,house_number,phone_number\n1,Ama,Mensah,15-06-2000,"
    ));

    // 2. A new process sees the record and continues numbering after it
    dhp_cmd(&temp)
        .write_stdin(format!("1\n2\n{ADD_AMA}2\n6\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 1, Name: Ama Mensah"))
        .stdout(predicate::str::contains("ID: 2, Name: Ama Mensah"));
}

#[test]
fn test_json_flag_skips_storage_prompt() {
    let temp = TempDir::new().unwrap();

    dhp_cmd(&temp)
        .args(["--storage", "json"])
        .write_stdin(format!("{ADD_AMA}6\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose storage type").not())
        .stdout(predicate::str::contains("Patient added successfully!"));

    let json = fs::read_to_string(temp.path().join("patients.json")).unwrap();
    assert!(json.starts_with("[\n    {\n        \"id\": 1,"));
    assert!(!temp.path().join("patients.csv").exists());
}

#[test]
fn test_delete_last_csv_record_is_durable() {
    let temp = TempDir::new().unwrap();

    dhp_cmd(&temp)
        .args(["--storage", "csv"])
        .write_stdin(format!("{ADD_AMA}5\n1\n6\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Patient with ID 1 deleted successfully!"));

    dhp_cmd(&temp)
        .args(["--storage", "csv"])
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No patients found."));
}

#[test]
fn test_config_file_selects_storage_and_file_name() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("dhp.json"),
        r#"{"storage": "json", "json_file": "clinic.json"}"#,
    )
    .unwrap();

    dhp_cmd(&temp)
        .write_stdin(format!("{ADD_AMA}6\n"))
        .assert()
        .success();

    assert!(temp.path().join("clinic.json").exists());
}

#[test]
fn test_malformed_store_fails_fast() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("patients.json"), "[{\"id\": \"x\"").unwrap();

    dhp_cmd(&temp)
        .args(["--storage", "json"])
        .write_stdin("2\n6\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    dhp_cmd(&temp)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye"));
}
