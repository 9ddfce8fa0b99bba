/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use vocab_tr::file_utils::FileManager;
use crate::common;

/// Test that dir_exists distinguishes files from directories
#[test]
fn test_dir_exists_withFileAndDirectory_shouldOnlyAcceptDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "lesson.docx", "test content")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&test_file));
    assert!(!FileManager::dir_exists("non_existent_dir"));
    Ok(())
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&test_subdir)?;

    assert!(test_subdir.is_dir());
    Ok(())
}

/// Test that find_files filters by extension and sorts the result
#[test]
fn test_find_files_withMixedFiles_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("lektion");
    fs::create_dir_all(&nested)?;
    common::create_test_file(temp_dir.path(), "b.docx", "")?;
    common::create_test_file(temp_dir.path(), "a.DOCX", "")?;
    common::create_test_file(temp_dir.path(), "notes.txt", "")?;
    common::create_test_file(temp_dir.path(), "~$b.docx", "")?;
    common::create_test_file(&nested, "c.docx", "")?;

    let files = FileManager::find_files(temp_dir.path(), ".docx")?;
    let names: Vec<String> = files
        .iter()
        .map(|path| path.strip_prefix(temp_dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(names, vec!["a.DOCX", "b.docx", "lektion/c.docx"]);
    Ok(())
}

/// Test that expand_inputs keeps files and expands directories in place
#[test]
fn test_expand_inputs_withFileAndDirectory_shouldPreserveOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let folder = temp_dir.path().join("folder");
    fs::create_dir_all(&folder)?;
    let inside = common::create_test_file(&folder, "inside.docx", "")?;
    let single = PathBuf::from("missing_single.docx");

    let expanded = FileManager::expand_inputs(&[single.clone(), folder], "docx")?;

    assert_eq!(expanded, vec![single, inside]);
    Ok(())
}
