use tempfile::NamedTempFile;
use tutor_core::{links, Library, TutorialMeta};

/// Helper function to create a temporary library for testing
fn create_test_library() -> (NamedTempFile, Library) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let library = Library::new(temp_file.path()).expect("Failed to create test library");
    (temp_file, library)
}

#[test]
fn test_library_initialization() {
    let (temp_file, library) = create_test_library();
    assert!(temp_file.path().exists());
    assert_eq!(library.step_count().unwrap(), 0);
}

#[test]
fn test_edits_persist_in_collection_order() {
    let (_temp_file, mut library) = create_test_library();

    let created = links::create_tutorial(
        &[],
        TutorialMeta {
            name: "Blinky".to_string(),
            ..TutorialMeta::default()
        },
    )
    .unwrap();
    let before = links::insert_before(&created.steps, &created.slug).unwrap();
    library.replace_steps(&before.steps).unwrap();

    let loaded = library.load_steps().unwrap();
    assert_eq!(loaded, before.steps);

    // Collection order is preserved even though the new step leads the run
    assert_eq!(loaded[0].slug, created.slug);
    let run = links::walk_run(&loaded, &created.slug).unwrap();
    assert_eq!(run[0].slug, before.slug);
}
