use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const SAMPLE: &str = "# My Sheet\n\nQuick reference\n\n| Greetings |\n| -------- | ------- |\n| hello | world |\n";

fn cheatz(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cheatz").unwrap();
    cmd.current_dir(home)
        .env("CHEATZ_HOME", home.join("store"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_create_add_table_and_export() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    cheatz(home)
        .args(["create", "Git", "--description", "Everyday commands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheatsheet created: Git"));

    let table_file = home.join("basics.md");
    std::fs::write(
        &table_file,
        "| Basics |\n| --- | --- |\n| git status | show changes |\n",
    )
    .unwrap();

    cheatz(home)
        .args(["add-table", "git", "--file"])
        .arg(&table_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Basics"));

    cheatz(home)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Everyday commands"))
        .stdout(predicate::str::contains("git status  show changes"));

    cheatz(home).args(["export", "1"]).assert().success().stdout(
        "# Git\n\nEveryday commands\n\n| Basics |\n| -------- | -------- |\n| git status | show changes |\n\n",
    );
}

#[test]
fn test_import_file_and_list() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let file = home.join("sheet.md");
    std::fs::write(&file, SAMPLE).unwrap();

    cheatz(home)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total imported: 1"));

    cheatz(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. My Sheet"))
        .stdout(predicate::str::contains("1 table"));

    cheatz(home).arg("export").assert().success().stdout(
        "# My Sheet\n\nQuick reference\n\n| Greetings |\n| -------- | -------- |\n| hello | world |\n\n",
    );
}

#[test]
fn test_import_without_tables_warns() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let file = home.join("prose.md");
    std::fs::write(&file, "# Notes\n\nno tables at all\n").unwrap();

    cheatz(home)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tables found"))
        .stdout(predicate::str::contains("Total imported: 0"));

    cheatz(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No cheatsheets found."));
}

#[test]
fn test_import_from_stdin_and_into_existing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    cheatz(home)
        .arg("import")
        .write_stdin(SAMPLE)
        .assert()
        .success();

    cheatz(home)
        .args(["import", "--into", "my sheet"])
        .write_stdin("# Renamed\n\n| Other |\n| --- | --- |\n| a | b |\n")
        .assert()
        .success();

    cheatz(home)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Renamed\n\n| Other |"))
        .stdout(predicate::str::contains("Greetings").not());
}

#[test]
fn test_add_table_from_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    cheatz(home).args(["n", "Vim"]).assert().success();
    cheatz(home)
        .args(["add-table", "1"])
        .write_stdin("| Motions |\n| --- | --- |\n| w | word |\n| b | back |\n")
        .assert()
        .success();

    cheatz(home)
        .args(["export", "vim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| w | word |\n| b | back |\n"));
}

#[test]
fn test_malformed_table_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    cheatz(home).args(["n", "Vim"]).assert().success();
    cheatz(home)
        .args(["add-table", "1"])
        .write_stdin("| Motions |\n| w | word |\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_move_and_remove_tables() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let file = home.join("two.md");
    std::fs::write(
        &file,
        "# Two\n\n| First |\n| --- | --- |\n| a | 1 |\n\n| Second |\n| --- | --- |\n| b | 2 |\n",
    )
    .unwrap();
    cheatz(home).arg("import").arg(&file).assert().success();

    cheatz(home)
        .args(["move-table", "1", "2", "1"])
        .assert()
        .success();
    cheatz(home)
        .args(["export", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)Second.*First").unwrap());

    cheatz(home)
        .args(["remove-table", "1", "1"])
        .assert()
        .success();
    cheatz(home)
        .args(["export", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Second").not())
        .stdout(predicate::str::contains("| First |"));
}

#[test]
fn test_unknown_sheet_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    cheatz(temp_dir.path())
        .args(["view", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 3 not found"));
}

#[test]
fn test_config_set_and_get() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    cheatz(home)
        .args(["config", "default-name", "Scratch"])
        .assert()
        .success();
    cheatz(home)
        .args(["config", "default-name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scratch"));

    cheatz(home)
        .arg("create")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheatsheet created: Scratch"));
}

#[test]
fn test_export_archive() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    cheatz(home).arg("import").write_stdin(SAMPLE).assert().success();

    cheatz(home)
        .args(["export", "--archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 cheatsheets"));

    let archives: Vec<_> = std::fs::read_dir(home)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tar.gz"))
        .collect();
    assert_eq!(archives.len(), 1);
}
