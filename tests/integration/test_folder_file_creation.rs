// End-to-end creation scenarios through the library API

use file_manager::models::creation_report::CreationReport;
use file_manager::{parse_arguments, FileManagerError, FolderCreator};
use std::fs;
use tempfile::TempDir;

fn create_from_args(creator: &FolderCreator, args: &[&str]) -> Result<CreationReport, FileManagerError> {
    let (folder, file) = parse_arguments(args)?;
    creator.create(&folder, &file)
}

#[test]
fn test_create_then_repeat_then_add_another_file() {
    let temp_dir = TempDir::new().unwrap();
    let creator = FolderCreator::new(temp_dir.path());

    let first = creator.create("test_folder", "test_file.txt").unwrap();
    assert!(first.folder_created);
    assert!(temp_dir.path().join("test_folder/test_file.txt").exists());

    let repeat = creator.create("test_folder", "test_file.txt").unwrap_err();
    assert!(matches!(
        repeat,
        FileManagerError::FileAlreadyExists { ref file, ref folder }
            if file == "test_file.txt" && folder == "test_folder"
    ));

    let second = creator.create("test_folder", "other_file.txt").unwrap();
    assert!(!second.folder_created);

    let mut entries: Vec<String> = fs::read_dir(temp_dir.path().join("test_folder"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    assert_eq!(entries, vec!["other_file.txt", "test_file.txt"]);
}

#[test]
fn test_both_argument_forms_create_the_same_file() {
    let separate = TempDir::new().unwrap();
    let combined = TempDir::new().unwrap();

    let a = create_from_args(&FolderCreator::new(separate.path()), &["folder1", "file1.txt"]).unwrap();
    let b = create_from_args(&FolderCreator::new(combined.path()), &["folder1 file1.txt"]).unwrap();

    assert_eq!(a.folder, b.folder);
    assert_eq!(a.file, b.file);
    assert!(separate.path().join("folder1/file1.txt").is_file());
    assert!(combined.path().join("folder1/file1.txt").is_file());
}

#[test]
fn test_folder_with_inner_spaces() {
    let temp_dir = TempDir::new().unwrap();
    let creator = FolderCreator::new(temp_dir.path());

    creator.create("quarterly reports", "q1 summary.md").unwrap();

    assert!(temp_dir
        .path()
        .join("quarterly reports")
        .join("q1 summary.md")
        .is_file());
}

#[test]
fn test_validation_errors_propagate_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let creator = FolderCreator::new(temp_dir.path());

    let cases = [
        ("", "file.txt", "empty"),
        ("lpt3", "file.txt", "reserved"),
        ("folder", "aux.log", "reserved"),
        ("folder", "file", "extension"),
        ("folder ", "file.txt", "whitespace"),
    ];

    for (folder, file, expected) in cases {
        let err = creator.create(folder, file).unwrap_err();
        let kind = match err {
            FileManagerError::EmptyName { .. } => "empty",
            FileManagerError::ReservedKeyword { .. } => "reserved",
            FileManagerError::MissingExtension { .. } => "extension",
            FileManagerError::LeadingTrailingWhitespace { .. } => "whitespace",
            ref other => panic!("unexpected error for ({folder:?}, {file:?}): {other}"),
        };
        assert_eq!(kind, expected, "wrong error for ({folder:?}, {file:?})");
    }

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_report_serializes_to_json() {
    let temp_dir = TempDir::new().unwrap();
    let report = FolderCreator::new(temp_dir.path())
        .create("data", "rows.csv")
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["folder"], "data");
    assert_eq!(json["file"], "rows.csv");
    assert!(json["created_at"].is_string());

    let back: CreationReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
