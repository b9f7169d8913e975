use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn tend_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tend").expect("Failed to find tend binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_add_plant_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tend_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plant",
            "add",
            "Sword Fern",
            "--native",
            "--water-weekdays",
            "1,3,5",
            "--water-time",
            "08:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added plant with ID: 1"))
        .stdout(predicate::str::contains("Sword Fern"))
        .stdout(predicate::str::contains("Mon, Wed, Fri at 08:00"));
}

#[test]
fn test_cli_list_empty_plants() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tend_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "plant", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plants found."));
}

#[test]
fn test_cli_show_missing_plant() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tend_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "plant", "show", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant 7 not found"));
}

#[test]
fn test_cli_remove_plant_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tend_cmd()
        .args(["--database-file", db_arg, "plant", "add", "Doomed"])
        .assert()
        .success();

    tend_cmd()
        .args(["--database-file", db_arg, "plant", "remove", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation"));

    tend_cmd()
        .args(["--database-file", db_arg, "plant", "remove", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed plant 'Doomed' (ID: 1)"));
}

#[test]
fn test_cli_due_report_with_pinned_clock() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tend_cmd()
        .args([
            "--database-file",
            db_arg,
            "plant",
            "add",
            "Fern",
            "--water-weekdays",
            "3",
            "--water-time",
            "08:00",
        ])
        .assert()
        .success();

    // 2025-03-05 is a Wednesday; at 09:00 the 08:00 watering is due.
    tend_cmd()
        .args(["--database-file", db_arg, "--at", "2025-03-05T09:00:00", "due"])
        .assert()
        .success()
        .stdout(predicate::str::contains("➤ Due"));

    // Water it and re-evaluate at the same pinned instant.
    tend_cmd()
        .args([
            "--database-file",
            db_arg,
            "--at",
            "2025-03-05T09:00:00",
            "plant",
            "water",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("care points now 5"));

    tend_cmd()
        .args(["--database-file", db_arg, "--at", "2025-03-05T10:00:00", "due"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Watered"));
}

#[test]
fn test_cli_reconcile_awards_and_is_idempotent() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tend_cmd()
        .args(["--database-file", db_arg, "plant", "add", "Fern"])
        .assert()
        .success();

    tend_cmd()
        .args(["--database-file", db_arg, "--at", "2025-03-05T09:00:00", "reconcile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New: Green Thumb (+10 pts)"))
        .stdout(predicate::str::contains("✓ Earned Green Thumb"));

    // A second pass earns nothing new.
    tend_cmd()
        .args(["--database-file", db_arg, "--at", "2025-03-05T10:00:00", "reconcile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New:").not())
        .stdout(predicate::str::contains("✓ Earned Green Thumb"));
}

#[test]
fn test_cli_quests_and_achievements_readonly() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tend_cmd()
        .args(["--database-file", db_arg, "quests"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily Watering (0/1, 10 pts)"));

    tend_cmd()
        .args(["--database-file", db_arg, "achievements"])
        .assert()
        .success()
        .stdout(predicate::str::contains("○ Locked Green Thumb"));
}

#[test]
fn test_cli_group_lifecycle() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    tend_cmd()
        .args(["--database-file", db_arg, "group", "set", "Sunset Gardeners", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Recorded group 'Sunset Gardeners' with 7 members",
        ));

    tend_cmd()
        .args(["--database-file", db_arg, "group", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunset Gardeners: 7 members"));

    tend_cmd()
        .args(["--database-file", db_arg, "group", "remove", "Sunset Gardeners"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed group 'Sunset Gardeners'"));

    tend_cmd()
        .args(["--database-file", db_arg, "group", "remove", "Sunset Gardeners"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Group 'Sunset Gardeners' not found"));
}

#[test]
fn test_cli_invalid_at_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    tend_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "--at", "whenever", "due"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --at datetime"));
}

#[test]
fn test_cli_import_plants() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let export_path = temp_dir.path().join("export.json");
    std::fs::write(
        &export_path,
        r#"[{"name": "Oak", "native": true, "plant_types": {"name": "Quercus"}}]"#,
    )
    .expect("Failed to write export file");

    tend_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plant",
            "import",
            export_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 plants"))
        .stdout(predicate::str::contains("Oak [Quercus]"));
}
