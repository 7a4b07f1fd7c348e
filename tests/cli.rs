//! End-to-end CLI tests
//!
//! Drives the built binary against a temporary data directory via the
//! CASHBOOK_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cashbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cashbook").unwrap();
    cmd.env("CASHBOOK_DATA_DIR", data_dir.path());
    cmd
}

fn add_salary(data_dir: &TempDir) -> String {
    let output = cashbook(data_dir)
        .args([
            "add", "Salary", "1000", "--kind", "income", "--category", "Work", "--date",
            "2024-01-05",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    // "Transaction: txn-xxxxxxxx"
    stdout
        .split_whitespace()
        .find(|token| token.starts_with("txn-"))
        .expect("add output should contain the new id")
        .to_string()
}

#[test]
fn add_then_list_shows_the_entry() {
    let data_dir = TempDir::new().unwrap();
    add_salary(&data_dir);

    cashbook(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("$1000.00"))
        .stdout(predicate::str::contains("Showing 1 of 1 transactions"));
}

#[test]
fn list_search_filters_case_insensitively() {
    let data_dir = TempDir::new().unwrap();
    add_salary(&data_dir);
    cashbook(&data_dir)
        .args([
            "add", "Rent", "400", "--kind", "expense", "--category", "Housing", "--date",
            "2024-01-01",
        ])
        .assert()
        .success();

    cashbook(&data_dir)
        .args(["list", "--search", "HOUSING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn summary_reports_totals() {
    let data_dir = TempDir::new().unwrap();
    add_salary(&data_dir);
    cashbook(&data_dir)
        .args(["add", "Rent", "400", "--kind", "expense", "--date", "2024-01-01"])
        .assert()
        .success();

    cashbook(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$1000.00"))
        .stdout(predicate::str::contains("$400.00"))
        .stdout(predicate::str::contains("$600.00"));
}

#[test]
fn show_resolves_the_short_id() {
    let data_dir = TempDir::new().unwrap();
    let id = add_salary(&data_dir);

    cashbook(&data_dir)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Work"));
}

#[test]
fn edit_changes_only_the_given_field() {
    let data_dir = TempDir::new().unwrap();
    let id = add_salary(&data_dir);

    cashbook(&data_dir)
        .args(["edit", &id, "--amount", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1200.00"))
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn delete_requires_force() {
    let data_dir = TempDir::new().unwrap();
    let id = add_salary(&data_dir);

    cashbook(&data_dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force"));

    cashbook(&data_dir)
        .args(["delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));

    cashbook(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}

#[test]
fn clear_force_empties_the_ledger() {
    let data_dir = TempDir::new().unwrap();
    add_salary(&data_dir);

    cashbook(&data_dir)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 transactions"));

    cashbook(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 transactions recorded"));
}

#[test]
fn export_writes_a_csv_file() {
    let data_dir = TempDir::new().unwrap();
    add_salary(&data_dir);

    let out_path = data_dir.path().join("ledger.csv");
    cashbook(&data_dir)
        .args(["export", "--output", out_path.to_str().unwrap()])
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out_path).unwrap();
    assert!(csv.contains("Date,Description,Category,Type,Amount"));
    assert!(csv.contains("Salary"));
    assert!(csv.contains("Total Income,1000.00"));
}

#[test]
fn rejects_negative_amounts() {
    let data_dir = TempDir::new().unwrap();

    cashbook(&data_dir)
        .args(["add", "--kind", "expense", "--", "Oops", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn rejects_unknown_kind() {
    let data_dir = TempDir::new().unwrap();

    cashbook(&data_dir)
        .args(["add", "Oops", "5", "--kind", "transfer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("income or expense"));
}

#[test]
fn show_unknown_id_is_a_reported_error() {
    let data_dir = TempDir::new().unwrap();

    cashbook(&data_dir)
        .args(["show", "txn-ffffffff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn corrupt_ledger_degrades_to_empty() {
    let data_dir = TempDir::new().unwrap();
    let ledger = data_dir.path().join("data").join("transactions.json");
    std::fs::create_dir_all(ledger.parent().unwrap()).unwrap();
    std::fs::write(&ledger, "not json").unwrap();

    cashbook(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}
