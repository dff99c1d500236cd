/*!
 * Tests for file and cache utility functionality
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use subtext::file_utils::FileManager;
use crate::common;

/// Test file and directory existence checks
#[test]
fn test_existence_checks_withFilesAndDirs_shouldDistinguish() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(&temp_dir.path().to_path_buf(), "a.txt", "hello")?;

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&file));
    Ok(())
}

/// Test directory creation
#[test]
fn test_ensure_dir_withNestedPath_shouldCreateAll() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a/b/c");

    FileManager::ensure_dir(&nested)?;
    assert!(nested.is_dir());

    // Idempotent
    FileManager::ensure_dir(&nested)?;
    Ok(())
}

/// Test output path generation from a stem and extension
#[test]
fn test_generate_output_path_withStemAndExtension_shouldJoinParts() {
    let path = FileManager::generate_output_path("out", "episode01.en", "srt");
    assert_eq!(path, PathBuf::from("out/episode01.en.srt"));

    let path = FileManager::generate_output_path("cache", "dQw4w9WgXcQ_vi", "txt");
    assert_eq!(path, PathBuf::from("cache/dQw4w9WgXcQ_vi.txt"));
}

/// Test writing and reading back file content
#[test]
fn test_write_and_read_withNestedTarget_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("nested/dir/file.srt");

    FileManager::write_to_file(&target, "subtitle content")?;
    assert_eq!(FileManager::read_to_string(&target)?, "subtitle content");
    Ok(())
}

/// Test finding files by extension
#[test]
fn test_find_files_withMixedExtensions_shouldFilterByExtension() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "one.vtt", "")?;
    common::create_test_file(&dir, "two.VTT", "")?;
    common::create_test_file(&dir, "three.srt", "")?;

    let found = FileManager::find_files(&dir, "vtt")?;
    assert_eq!(found.len(), 2);

    let found = FileManager::find_files(&dir, ".srt")?;
    assert_eq!(found.len(), 1);
    Ok(())
}

/// Test age-based cleanup leaves fresh files alone
#[test]
fn test_remove_files_older_than_withFreshFiles_shouldRemoveNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "fresh.srt", "content")?;

    let removed = FileManager::remove_files_older_than(&dir, 24)?;
    assert_eq!(removed, 0);
    assert!(dir.join("fresh.srt").exists());
    Ok(())
}

/// Test cleanup on a directory that does not exist
#[test]
fn test_remove_files_older_than_withMissingDir_shouldRemoveNothing() -> Result<()> {
    let removed = FileManager::remove_files_older_than("no/such/dir", 1)?;
    assert_eq!(removed, 0);
    Ok(())
}

/// Test age-based cleanup removes files past the retention window
#[test]
fn test_remove_files_older_than_withBackdatedFile_shouldRemoveIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let stale = common::create_test_file(&dir, "stale.srt", "content")?;
    let fresh = common::create_test_file(&dir, "fresh.srt", "content")?;

    // Backdate one file past a 1-hour retention window
    let mtime = std::time::SystemTime::now() - std::time::Duration::from_secs(2 * 3600);
    let file = fs::File::options().append(true).open(&stale)?;
    file.set_modified(mtime)?;
    drop(file);

    let removed = FileManager::remove_files_older_than(&dir, 1)?;
    assert_eq!(removed, 1);
    assert!(!stale.exists());
    assert!(fresh.exists());
    Ok(())
}

/// Test clearing every file from a directory
#[test]
fn test_clear_dir_withSeveralFiles_shouldRemoveAll() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "a.srt", "")?;
    common::create_test_file(&dir, "b.txt", "")?;
    fs::create_dir(dir.join("subdir"))?;

    let removed = FileManager::clear_dir(&dir)?;
    assert_eq!(removed, 2);
    // Directories are left alone
    assert!(dir.join("subdir").is_dir());
    Ok(())
}

/// Test trimming a directory down to the newest files
#[test]
fn test_trim_to_newest_withExcessFiles_shouldRemoveOldestFirst() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let oldest = common::create_test_file(&dir, "oldest.srt", "")?;
    let middle = common::create_test_file(&dir, "middle.srt", "")?;
    let newest = common::create_test_file(&dir, "newest.srt", "")?;

    // Spread modification times so ordering is deterministic
    let now = std::time::SystemTime::now();
    for (path, age_secs) in [(&oldest, 300u64), (&middle, 200), (&newest, 100)] {
        let mtime = now - std::time::Duration::from_secs(age_secs);
        let file = fs::File::options().append(true).open(path)?;
        file.set_modified(mtime)?;
    }

    let removed = FileManager::trim_to_newest(&dir, 2)?;
    assert_eq!(removed, 1);
    assert!(!oldest.exists());
    assert!(middle.exists());
    assert!(newest.exists());

    // Already within the limit
    let removed = FileManager::trim_to_newest(&dir, 2)?;
    assert_eq!(removed, 0);
    Ok(())
}
