use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use glob::glob;

// @module: File and directory utilities

/// Directory names never descended into during pattern expansion
const EXCLUDED_DIRS: [&str; 4] = ["node_modules", ".git", ".svn", ".hg"];

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

    /// Expand a glob pattern to the files it matches
    ///
    /// Version-control directories, dependency directories, and dotfiles are
    /// excluded from the result. The exclusion applies to the part of the
    /// path matched by wildcards; a literal pattern prefix the user spelled
    /// out is taken as intentional. Matched directories are skipped.
    pub fn find_files(pattern: &str) -> Result<Vec<PathBuf>> {
        let base_dir = crate::path_mapper::pattern_base_dir(pattern);
        let entries = glob(pattern)
            .with_context(|| format!("Invalid glob pattern: {}", pattern))?;

        let mut result = Vec::new();
        for entry in entries {
            let path = entry.context("Failed to read glob entry")?;

            if path.is_file() && !Self::is_excluded(&path, &base_dir) {
                result.push(path);
            }
        }

        Ok(result)
    }

    /// Check whether a matched path sits under an excluded directory or is a dotfile
    fn is_excluded(path: &Path, base_dir: &Path) -> bool {
        let matched_part = path.strip_prefix(base_dir).unwrap_or(path);

        matched_part.components().any(|component| {
            let name = component.as_os_str().to_string_lossy();
            EXCLUDED_DIRS.contains(&name.as_ref())
                || (name.starts_with('.') && name != "." && name != "..")
        })
    }
}
