use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Find files with a specific extension in a directory, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && !Self::is_lock_file(path) {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Expand input paths: files are kept as given, directories are
    /// replaced by the matching files they contain
    pub fn expand_inputs<P: AsRef<Path>>(inputs: &[P], extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        for input in inputs {
            let input = input.as_ref();
            if Self::dir_exists(input) {
                result.extend(Self::find_files(input, extension)?);
            } else {
                result.push(input.to_path_buf());
            }
        }
        Ok(result)
    }

    // @checks: Word owner/lock file (~$name.docx)
    fn is_lock_file(path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().starts_with("~$"))
            .unwrap_or(false)
    }
}
