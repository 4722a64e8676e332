use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BLINKY: &str = "\
TutorialProperties [
    TutorialName: Blinky;
    Icon: heart.png;
    Author: Ada;
]
1 {
    StepTitle: Plug in;
    Contents: Connect the board;
}
2 {
    StepTitle: Blink;
    Contents: Show a heart;
    Hint: Use the display module;
}
";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command bound to a library file, without color
fn tutor_cmd(library: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tutor").expect("Failed to find tutor binary");
    cmd.arg("--no-color")
        .arg("--library-file")
        .arg(library);
    cmd
}

/// Writes the sample tutorial and imports it into the library.
fn import_blinky(temp_dir: &TempDir, library: &Path) {
    let file = temp_dir.path().join("blinky.nim");
    fs::write(&file, BLINKY).unwrap();
    tutor_cmd(library)
        .args(["tutorial", "import"])
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn test_cli_empty_menu() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");

    tutor_cmd(&library)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tutorials found."));
}

#[test]
fn test_cli_new_tutorial_with_yes() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");

    tutor_cmd(&library)
        .args(["tutorial", "new", "Music", "--author", "Grace", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created step `music-1`"))
        .stdout(predicate::str::contains("New tutorial content"));

    tutor_cmd(&library)
        .args(["tutorial", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Music (1 step)"))
        .stdout(predicate::str::contains("Grace"));
}

#[test]
fn test_cli_new_tutorial_declined() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");

    tutor_cmd(&library)
        .args(["tutorial", "new", "Music"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));

    tutor_cmd(&library)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tutorials found."));
}

#[test]
fn test_cli_new_tutorial_confirmed() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");

    tutor_cmd(&library)
        .args(["tutorial", "new", "Music"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("music-1"));
}

#[test]
fn test_cli_duplicate_tutorial_rejected() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");
    import_blinky(&temp_dir, &library);

    tutor_cmd(&library)
        .args(["tutorial", "new", "Blinky", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("Hint: Choose a name"));
}

#[test]
fn test_cli_import_and_export() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");
    import_blinky(&temp_dir, &library);

    tutor_cmd(&library)
        .args(["tutorial", "export", "blinky-2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "TutorialProperties [\n    TutorialName: Blinky;\n    Icon: heart.png;\n    Author: Ada;\n]\n",
        ))
        .stdout(predicate::str::contains("    Hint: Use the display module;\n"));
}

#[test]
fn test_cli_export_to_file_round_trips() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");
    import_blinky(&temp_dir, &library);

    let output = temp_dir.path().join("exported.nim");
    tutor_cmd(&library)
        .args(["tutorial", "export", "blinky-1", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported tutorial"));

    // Importing the export under a new name into a fresh library reproduces it
    let other = temp_dir.path().join("other.db");
    tutor_cmd(&other)
        .args(["tutorial", "import"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported tutorial 'Blinky'"))
        .stdout(predicate::str::contains("(2 steps)"));
}

#[test]
fn test_cli_import_format_error_reports_line() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");
    let file = temp_dir.path().join("broken.nim");
    fs::write(&file, "garbage\n").unwrap();

    tutor_cmd(&library)
        .args(["tutorial", "import"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Failed to import"))
        .stderr(predicate::str::contains("line 1"))
        .stderr(predicate::str::contains("Hint: Fix line 1"));

    tutor_cmd(&library)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tutorials found."));
}

#[test]
fn test_cli_import_missing_file() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");

    tutor_cmd(&library)
        .args(["tutorial", "import", "does-not-exist.nim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("Hint:").not());
}

#[test]
fn test_cli_step_editing() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");
    import_blinky(&temp_dir, &library);

    tutor_cmd(&library)
        .args(["step", "add-after", "blinky-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created step `blinky-3`"))
        .stdout(predicate::str::contains(
            "New tutorial content after what was there before",
        ));

    tutor_cmd(&library)
        .args(["step", "update", "blinky-3", "--title", "Flash", "--hint", "Hold A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Updated title"))
        .stdout(predicate::str::contains("## Flash"));

    tutor_cmd(&library)
        .args(["tutorial", "show", "blinky-2"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)Plug in.*Flash.*Blink").unwrap());

    tutor_cmd(&library)
        .args(["step", "delete", "blinky-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Continue at `blinky-2`"));

    tutor_cmd(&library)
        .args(["tutorial", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All tutorial links are intact."));
}

#[test]
fn test_cli_update_rejects_hint_and_clear_hint() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");

    tutor_cmd(&library)
        .args(["step", "update", "x", "--hint", "h", "--clear-hint"])
        .assert()
        .failure();
}

#[test]
fn test_cli_show_missing_step() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");

    tutor_cmd(&library)
        .args(["step", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Step with slug 'nope' not found"))
        .stderr(predicate::str::contains("Run `tutor tutorial list`"));
}

#[test]
fn test_cli_rename() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");
    import_blinky(&temp_dir, &library);

    tutor_cmd(&library)
        .args(["tutorial", "rename", "blinky-2", "Heartbeat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated tutorial 'Heartbeat'"));

    tutor_cmd(&library)
        .args(["step", "show", "blinky-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Tutorial: Heartbeat"));
}

#[test]
fn test_cli_editor_document_flow() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");
    import_blinky(&temp_dir, &library);

    tutor_cmd(&library)
        .args(["step", "document", "blinky-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"Connect the board\""));

    let document = temp_dir.path().join("doc.json");
    fs::write(
        &document,
        r#"{"root":{"type":"root","format":"","children":[{"type":"paragraph","format":"","children":[{"type":"text","text":"Shout","format":1}]}]}}"#,
    )
    .unwrap();

    tutor_cmd(&library)
        .args(["step", "apply", "blinky-1"])
        .arg(&document)
        .assert()
        .success()
        .stdout(predicate::str::contains("**Shout**"));

    tutor_cmd(&library)
        .args(["tutorial", "export", "blinky-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ContentsJSON: {"));
}

#[test]
fn test_cli_apply_invalid_document() {
    let temp_dir = create_cli_test_environment();
    let library = temp_dir.path().join("library.db");
    import_blinky(&temp_dir, &library);

    let document = temp_dir.path().join("doc.json");
    fs::write(&document, r#"{"nope": 1}"#).unwrap();

    tutor_cmd(&library)
        .args(["step", "apply", "blinky-1"])
        .arg(&document)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid document tree"));
}
