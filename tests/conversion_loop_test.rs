use std::cell::RefCell;
use std::fs::File;
use std::path::Path;

use md2docx::prelude::*;
use tempfile::tempdir;

/// Converter that records the requested conversions instead of running anything
#[derive(Default)]
struct RecordingConverter {
    calls: RefCell<Vec<(String, String)>>,
}

impl Converter for RecordingConverter {
    fn convert(&self, _directory: &Path, candidate: &Candidate) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((candidate.source.clone(), candidate.output.clone()));
        Ok(())
    }
}

fn create_files(directory: &Path, names: &[&str]) {
    for name in names {
        File::create(directory.join(name)).expect("Failed to create test file");
    }
}

#[test]
fn test_readme_and_other_files_are_skipped() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    create_files(
        temp_dir.path(),
        &["README.md", "notes.md", "draft.MD", "image.png"],
    );
    let converter = RecordingConverter::default();

    let context = convert_directory(temp_dir.path(), &Settings::default(), &converter, false)
        .expect("Conversion loop should complete");

    let mut calls = converter.calls.borrow().clone();
    calls.sort();
    assert_eq!(
        calls,
        vec![
            ("draft.MD".to_string(), "draft.docx".to_string()),
            ("notes.md".to_string(), "notes.docx".to_string()),
        ]
    );
    assert_eq!(context.stats.entries_seen, 4);
    assert_eq!(context.stats.candidates, 2);
    assert_eq!(context.stats.converted, 2);
    assert_eq!(context.stats.skipped, 2);
}

#[test]
fn test_readme_is_skipped_in_any_case() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    create_files(temp_dir.path(), &["Readme.MD", "guide.md"]);
    let converter = RecordingConverter::default();

    convert_directory(temp_dir.path(), &Settings::default(), &converter, false).unwrap();

    assert_eq!(
        *converter.calls.borrow(),
        vec![("guide.md".to_string(), "guide.docx".to_string())]
    );
}

#[test]
fn test_directory_without_markdown_does_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    create_files(temp_dir.path(), &["image.png", "notes.txt", "README.md"]);
    let converter = RecordingConverter::default();

    let context =
        convert_directory(temp_dir.path(), &Settings::default(), &converter, false).unwrap();

    assert!(converter.calls.borrow().is_empty());
    assert_eq!(context.stats.candidates, 0);
    assert!(!temp_dir.path().join("image.docx").exists());
}

#[test]
fn test_folder_named_like_markdown_is_skipped() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    std::fs::create_dir(temp_dir.path().join("chapters.md")).unwrap();
    let converter = RecordingConverter::default();

    convert_directory(temp_dir.path(), &Settings::default(), &converter, false).unwrap();

    assert!(converter.calls.borrow().is_empty());
}

#[test]
fn test_candidates_follow_custom_settings() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    create_files(temp_dir.path(), &["notes.md", "story.markdown", "README.md"]);
    let settings = Settings {
        source_extension: "markdown".to_string(),
        target_extension: "odt".to_string(),
        ..Settings::default()
    };
    let converter = RecordingConverter::default();

    convert_directory(temp_dir.path(), &settings, &converter, false).unwrap();

    assert_eq!(
        *converter.calls.borrow(),
        vec![("story.markdown".to_string(), "story.odt".to_string())]
    );
}
