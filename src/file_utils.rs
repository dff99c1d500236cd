use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use walkdir::WalkDir;
use log::warn;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for a converted caption file
    // @params: output_dir, stem, extension
    pub fn generate_output_path<P: AsRef<Path>>(
        output_dir: P,
        stem: &str,
        extension: &str,
    ) -> PathBuf {
        let mut output_filename = stem.to_string();
        output_filename.push('.');
        output_filename.push_str(extension);

        output_dir.as_ref().join(output_filename)
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(&normalized_ext[1..]) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Remove files in a directory older than the given age. Returns the
    /// number of files removed. Only the top level of the directory is
    /// scanned; subdirectories are left alone.
    pub fn remove_files_older_than<P: AsRef<Path>>(dir: P, max_age_hours: u64) -> Result<usize> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(0);
        }

        let max_age = Duration::from_secs(max_age_hours * 3600);
        let now = SystemTime::now();
        let mut removed = 0;

        for entry in WalkDir::new(dir).max_depth(1) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let modified = match fs::metadata(path).and_then(|m| m.modified()) {
                Ok(time) => time,
                Err(e) => {
                    warn!("Skipping {:?} during cleanup: {}", path, e);
                    continue;
                }
            };

            let age = now.duration_since(modified).unwrap_or_default();
            if age > max_age && fs::remove_file(path).is_ok() {
                removed += 1;
            }
        }

        Ok(removed)
    }

    /// Remove every file in a directory. Returns the number of files removed.
    pub fn clear_dir<P: AsRef<Path>>(dir: P) -> Result<usize> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in WalkDir::new(dir).max_depth(1) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if path.is_file() && fs::remove_file(path).is_ok() {
                removed += 1;
            }
        }

        Ok(removed)
    }

    /// Keep only the newest `max_files` files in a directory, removing the
    /// rest oldest-first. Returns the number of files removed.
    pub fn trim_to_newest<P: AsRef<Path>>(dir: P, max_files: usize) -> Result<usize> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(0);
        }

        let mut files: Vec<(PathBuf, SystemTime)> = Vec::new();
        for entry in WalkDir::new(dir).max_depth(1) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            match fs::metadata(path).and_then(|m| m.modified()) {
                Ok(time) => files.push((path.to_path_buf(), time)),
                Err(e) => warn!("Skipping {:?} during cache trim: {}", path, e),
            }
        }

        if files.len() <= max_files {
            return Ok(0);
        }

        // Oldest first
        files.sort_by_key(|(_, modified)| *modified);

        let mut removed = 0;
        let excess = files.len() - max_files;
        for (path, _) in files.into_iter().take(excess) {
            if fs::remove_file(&path).is_ok() {
                removed += 1;
            }
        }

        Ok(removed)
    }
}
