use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn shopdesk(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shopdesk").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    // colored output would break the substring assertions
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn customers_list_shows_the_first_seeded_page() {
    let temp_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("customers")
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Jane Cooper"))
        .stdout(predicates::str::contains("1 - 8 of 10 (page 1/2)"));
}

#[test]
fn customers_search_narrows_the_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("customers")
        .arg("list")
        .arg("--term")
        .arg("jane")
        .assert()
        .success()
        .stdout(predicates::str::contains("Jane Cooper"))
        .stdout(predicates::str::contains("of 10").not());
}

#[test]
fn customer_add_then_delete_round_trips_through_the_store() {
    let temp_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("customers")
        .arg("add")
        .arg("--name")
        .arg("Cli Test")
        .arg("--email")
        .arg("cli@test.example")
        .arg("--phone")
        .arg("555-0000")
        .arg("--address")
        .arg("1 Cli Way")
        .assert()
        .success()
        .stdout(predicates::str::contains("Added customer #11"));

    // A second invocation sees the persisted customer.
    shopdesk(temp_dir.path())
        .arg("customers")
        .arg("list")
        .arg("--term")
        .arg("Cli Test")
        .assert()
        .success()
        .stdout(predicates::str::contains("cli@test.example"));

    shopdesk(temp_dir.path())
        .arg("customers")
        .arg("delete")
        .arg("11")
        .assert()
        .success()
        .stdout(predicates::str::contains("Deleted customer #11"));
}

#[test]
fn customer_add_reports_every_missing_field() {
    let temp_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("customers")
        .arg("add")
        .arg("--name")
        .arg("Only A Name")
        .assert()
        .failure()
        .stderr(predicates::str::contains("email is required"))
        .stderr(predicates::str::contains("phone is required"))
        .stderr(predicates::str::contains("address is required"));
}

#[test]
fn deleting_an_unknown_customer_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("customers")
        .arg("delete")
        .arg("999")
        .assert()
        .failure()
        .stderr(predicates::str::contains("customer with id 999 not found"));
}

#[test]
fn orders_list_filters_by_status_tab() {
    let temp_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("orders")
        .arg("list")
        .arg("--status")
        .arg("cancelled")
        .assert()
        .success()
        .stdout(predicates::str::contains("Brooklyn Simmons"))
        .stdout(predicates::str::contains("Jacob Jones"))
        .stdout(predicates::str::contains("1 - 2 of 2 (page 1/1)"));
}

#[test]
fn orders_list_rejects_an_unknown_status() {
    let temp_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("orders")
        .arg("list")
        .arg("--status")
        .arg("pending")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid input"));
}

#[test]
fn customers_export_writes_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("customers")
        .arg("export")
        .arg("--out")
        .arg(out_dir.path())
        .assert()
        .success();

    let exported = std::fs::read_to_string(out_dir.path().join("customers.json")).unwrap();
    assert!(exported.contains("Jane Cooper"));
}

#[test]
fn orders_export_writes_a_pdf() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("orders")
        .arg("export")
        .arg("--out")
        .arg(out_dir.path())
        .assert()
        .success();

    let bytes = std::fs::read(out_dir.path().join("orders.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn profile_set_persists_across_invocations() {
    let temp_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("profile")
        .arg("set")
        .arg("--first-name")
        .arg("Integration")
        .assert()
        .success()
        .stdout(predicates::str::contains("Profile updated"));

    shopdesk(temp_dir.path())
        .arg("profile")
        .arg("show")
        .assert()
        .success()
        .stdout(predicates::str::contains("Integration"));
}

#[test]
fn password_change_writes_the_snapshot() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snapshot_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("profile")
        .arg("password")
        .arg("--current")
        .arg("old-password")
        .arg("--new")
        .arg("long enough password")
        .arg("--confirm")
        .arg("long enough password")
        .arg("--snapshot")
        .arg(snapshot_dir.path())
        .assert()
        .success();

    let snapshot =
        std::fs::read_to_string(snapshot_dir.path().join("shopdesk-settings.env")).unwrap();
    assert!(snapshot.contains("# Password Updated"));
    assert!(snapshot.contains("PASSWORD_UPDATED="));
}

#[test]
fn settings_export_import_round_trip() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    shopdesk(first.path())
        .arg("profile")
        .arg("set")
        .arg("--location")
        .arg("Lisbon, PT")
        .assert()
        .success();

    shopdesk(first.path())
        .arg("profile")
        .arg("export")
        .arg("--out")
        .arg(out_dir.path())
        .assert()
        .success();

    shopdesk(second.path())
        .arg("profile")
        .arg("import")
        .arg(out_dir.path().join("settings.json"))
        .assert()
        .success();

    shopdesk(second.path())
        .arg("profile")
        .arg("show")
        .assert()
        .success()
        .stdout(predicates::str::contains("Lisbon, PT"));
}

#[test]
fn stored_search_state_applies_to_the_next_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("search")
        .arg("set")
        .arg("customers")
        .arg("jane")
        .assert()
        .success();

    shopdesk(temp_dir.path())
        .arg("customers")
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Jane Cooper"))
        .stdout(predicates::str::contains("of 10").not());
}

#[test]
fn account_toggles_persist_across_invocations() {
    let temp_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("profile")
        .arg("account")
        .arg("--sms-notifications")
        .arg("true")
        .assert()
        .success()
        .stdout(predicates::str::contains("Account settings updated"));

    shopdesk(temp_dir.path())
        .arg("profile")
        .arg("show")
        .assert()
        .success()
        .stdout(predicates::str::contains("SMS notifications    on"));
}

#[test]
fn search_state_round_trips_per_route() {
    let temp_dir = tempfile::tempdir().unwrap();

    shopdesk(temp_dir.path())
        .arg("search")
        .arg("set")
        .arg("customers")
        .arg("gmail")
        .arg("--filter")
        .arg("email")
        .assert()
        .success();

    shopdesk(temp_dir.path())
        .arg("search")
        .arg("show")
        .arg("customers")
        .assert()
        .success()
        .stdout(predicates::str::contains("term: gmail"))
        .stdout(predicates::str::contains("filters: email"));

    shopdesk(temp_dir.path())
        .arg("search")
        .arg("clear")
        .arg("customers")
        .assert()
        .success();

    shopdesk(temp_dir.path())
        .arg("search")
        .arg("show")
        .arg("customers")
        .assert()
        .success()
        .stdout(predicates::str::contains("No stored search"));
}
