use std::path::{Component, Path, PathBuf};

// @module: Output path computation for translated documents

/// Maps matched input files to destination paths
///
/// Pure path arithmetic; nothing here touches the filesystem. In structured
/// mode the directory layout under the pattern's literal base directory is
/// reproduced below the output directory; in flat mode every output lands
/// directly in the output directory.
#[derive(Debug, Clone)]
pub struct PathMapper {
    /// Directory translated files are written under
    output_dir: PathBuf,

    /// Whether to reproduce the input directory layout
    preserve_structure: bool,

    /// Optional filename suffix, inserted before the extension
    suffix: Option<String>,
}

impl PathMapper {
    /// Create a new path mapper
    pub fn new<P: AsRef<Path>>(output_dir: P, preserve_structure: bool, suffix: Option<String>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            preserve_structure,
            suffix,
        }
    }

    /// Compute the destination path for a file matched by `pattern`
    pub fn map_output_path<P: AsRef<Path>>(&self, input_file: P, pattern: &str) -> PathBuf {
        let input_file = input_file.as_ref();
        let filename = self.output_filename(input_file);

        if !self.preserve_structure {
            return self.output_dir.join(filename);
        }

        let base_dir = pattern_base_dir(pattern);
        let relative_dir = relative_dir_for(input_file, &base_dir);

        self.output_dir.join(relative_dir).join(filename)
    }

    /// Build the output filename, inserting the suffix before the extension
    fn output_filename(&self, input_file: &Path) -> String {
        let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();

        let mut filename = stem.to_string();
        if let Some(suffix) = &self.suffix {
            filename.push('_');
            filename.push_str(suffix);
        }

        if let Some(ext) = input_file.extension() {
            filename.push('.');
            filename.push_str(&ext.to_string_lossy());
        }

        filename
    }
}

/// Extract the literal base directory of a glob pattern
///
/// The base directory is the longest path prefix before the first segment
/// containing a wildcard. `docs/**/*.md` yields `docs`, `*.md` yields the
/// empty path.
pub fn pattern_base_dir(pattern: &str) -> PathBuf {
    let mut base = PathBuf::new();

    for segment in Path::new(pattern).components() {
        let segment_str = segment.as_os_str().to_string_lossy();
        if segment_str.contains(['*', '?', '[', '{']) {
            break;
        }
        base.push(segment);
    }

    // A pattern naming a file directly contributes its directory only
    if !pattern.ends_with('/') && base == Path::new(pattern) {
        base.pop();
    }

    base
}

/// Compute the directory of `input_file` relative to the pattern base
///
/// Falls back to the path relative to the current working directory when the
/// file does not live under the base directory.
fn relative_dir_for(input_file: &Path, base_dir: &Path) -> PathBuf {
    if !base_dir.as_os_str().is_empty() {
        if let Ok(rel) = input_file.strip_prefix(base_dir) {
            return rel.parent().unwrap_or(Path::new("")).to_path_buf();
        }
    }

    if input_file.is_absolute() {
        if let Ok(cwd) = std::env::current_dir() {
            if let Ok(rel) = input_file.strip_prefix(&cwd) {
                return rel.parent().unwrap_or(Path::new("")).to_path_buf();
            }
        }
    }

    // A relative path outside the base keeps its own directory layout
    let parent = input_file.parent().unwrap_or(Path::new(""));
    parent
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}
