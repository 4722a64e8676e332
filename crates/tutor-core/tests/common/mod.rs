use tempfile::TempDir;
use tutor_core::{Workshop, WorkshopBuilder};

/// Helper function to create a workshop backed by a throwaway library
pub async fn create_test_workshop() -> (TempDir, Workshop) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let library_path = temp_dir.path().join("library.db");
    let workshop = WorkshopBuilder::new()
        .with_library_path(Some(&library_path))
        .build()
        .await
        .expect("Failed to create workshop");
    (temp_dir, workshop)
}

/// A two-step tutorial in the description format
#[allow(dead_code)]
pub const BLINKY: &str = "\
TutorialProperties [
    TutorialName: Blinky Lights;
    Icon: heart.png;
    Author: Ada;
]
1 {
    StepTitle: Plug in;
    Contents: Connect the board
        with the USB cable;
}
2 {
    StepTitle: Blink;
    Contents: Show a heart: then clear it;
}
";
