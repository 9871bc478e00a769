use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir.path())
        .env("FINTRACK_TODAY", "2024-02-15")
        .env_remove("FINTRACK_LOG");
    cmd
}

fn stored(dir: &TempDir) -> Vec<Value> {
    let path = dir
        .path()
        .join("data")
        .join("personal-finance-transactions.json");
    let contents = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&contents).unwrap()
}

fn add(dir: &TempDir, args: &[&str]) {
    fintrack(dir).arg("add").args(args).assert().success();
}

fn seed(dir: &TempDir) {
    add(dir, &["Paycheck", "1000", "-t", "income", "-c", "salary", "-d", "2024-01-05"]);
    add(dir, &["Groceries", "300", "-c", "food", "-d", "2024-01-10"]);
    add(dir, &["Bus pass", "200", "-c", "transport", "-d", "2024-02-01"]);
}

#[test]
fn add_persists_camel_case_document() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["add", "Coffee", "3.50", "-c", "food", "-d", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transaction:"))
        .stdout(predicate::str::contains("-$3.50"));

    let list = stored(&dir);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["description"], "Coffee");
    assert_eq!(list[0]["amount"], 3.5);
    assert_eq!(list[0]["type"], "expense");
    assert_eq!(list[0]["category"], "food");
    assert_eq!(list[0]["date"], "2024-01-01");
    assert!(list[0]["createdAt"].is_string());
    assert!(list[0]["updatedAt"].is_string());
}

#[test]
fn add_defaults_date_to_today() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Lunch", "12", "-c", "food"]);

    assert_eq!(stored(&dir)[0]["date"], "2024-02-15");
}

#[test]
fn invalid_add_reports_every_field_and_changes_nothing() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Coffee", "3.50", "-c", "food", "-d", "2024-01-01"]);

    fintrack(&dir)
        .args(["add", "", "0", "-d", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description is required"))
        .stderr(predicate::str::contains("Amount must be greater than 0"))
        .stderr(predicate::str::contains("Category is required"))
        .stderr(predicate::str::contains("Date is required"));

    assert_eq!(stored(&dir).len(), 1);
}

#[test]
fn mismatched_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["add", "Paycheck", "100", "-t", "income", "-c", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category does not match transaction type"));
}

#[test]
fn summary_for_custom_range() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fintrack(&dir)
        .args(["summary", "--from", "2024-01-01", "--to", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,000.00"))
        .stdout(predicate::str::contains("$300.00"))
        .stdout(predicate::str::contains("$700.00"));
}

#[test]
fn summary_defaults_to_current_month() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fintrack(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Feb 1, 2024 to Feb 29, 2024"))
        .stdout(predicate::str::contains("-$200.00"));
}

#[test]
fn breakdown_lists_expense_categories() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fintrack(&dir)
        .args(["breakdown", "--period", "last-month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food & Dining"))
        .stdout(predicate::str::contains("100%"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn monthly_covers_all_months() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fintrack(&dir)
        .arg("monthly")
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2024"))
        .stdout(predicate::str::contains("February 2024"));
}

#[test]
fn list_filters_by_type() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fintrack(&dir)
        .args(["list", "--type", "expense", "--from", "2024-01-01", "--to", "2024-02-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Bus pass"))
        .stdout(predicate::str::contains("Paycheck").not());
}

#[test]
fn list_rejects_bad_dates() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["list", "--from", "01/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn edit_updates_fields_and_keeps_identity() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Coffee", "3.50", "-c", "food", "-d", "2024-01-01"]);
    let before = stored(&dir);
    let id = before[0]["id"].as_str().unwrap().to_string();

    fintrack(&dir)
        .args(["edit", &id[..8], "--amount", "4.25", "--description", "Latte"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated transaction"));

    let after = stored(&dir);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0]["id"], before[0]["id"]);
    assert_eq!(after[0]["createdAt"], before[0]["createdAt"]);
    assert_eq!(after[0]["description"], "Latte");
    assert_eq!(after[0]["amount"], 4.25);
}

#[test]
fn delete_requires_force() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Coffee", "3.50", "-c", "food", "-d", "2024-01-01"]);
    let id = stored(&dir)[0]["id"].as_str().unwrap().to_string();

    fintrack(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));
    assert_eq!(stored(&dir).len(), 1);

    fintrack(&dir).args(["delete", &id, "--force"]).assert().success();
    assert!(stored(&dir).is_empty());
}

#[test]
fn unknown_id_fails() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["show", "txn-deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn clear_removes_everything_and_is_audited() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    fintrack(&dir).args(["clear", "--force"]).assert().success();
    assert!(stored(&dir).is_empty());

    fintrack(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("CLEAR"));
}

#[test]
fn corrupt_document_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("personal-finance-transactions.json"), "{not json").unwrap();

    fintrack(&dir)
        .args(["list", "--from", "2000-01-01", "--to", "2100-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn categories_by_type() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["categories", "--type", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("freelance"))
        .stdout(predicate::str::contains("entertainment").not());
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").is_dir());
}

#[test]
fn legacy_numeric_ids_stay_usable() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Coffee", "3.50", "-c", "food", "-d", "2024-01-01"]);

    let mut list = stored(&dir);
    let mut legacy = list[0].clone();
    legacy["id"] = Value::from("1704450000000");
    legacy["description"] = Value::from("Imported");
    list.push(legacy);
    std::fs::write(
        dir.path().join("data").join("personal-finance-transactions.json"),
        serde_json::to_string(&list).unwrap(),
    )
    .unwrap();

    fintrack(&dir)
        .args(["show", "txn-17044500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported"))
        .stdout(predicate::str::contains("1704450000000"));

    fintrack(&dir)
        .args(["edit", "1704450000000", "--description", "Imported coffee"])
        .assert()
        .success();

    let after = stored(&dir);
    assert_eq!(after.len(), 2);
    assert_eq!(after[0]["id"], list[0]["id"]);
    assert_eq!(after[1]["id"], "1704450000000");
    assert_eq!(after[1]["description"], "Imported coffee");
}
