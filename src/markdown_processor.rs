use anyhow::Result;
use std::path::{Path, PathBuf};
use log::warn;

use crate::errors::DocumentError;
use crate::file_utils::FileManager;

// @module: Markdown document handling and chunking

/// File extensions recognized as translatable documents
pub const MARKDOWN_EXTENSIONS: [&str; 3] = ["md", "markdown", "mdx"];

/// Check whether a path points to a Markdown/MDX document by extension
pub fn is_markdown_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            MARKDOWN_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// A Markdown document loaded into memory
#[derive(Debug, Clone)]
pub struct MarkdownDocument {
    /// Path the content was read from
    pub source_file: PathBuf,

    /// Raw document text
    pub content: String,
}

impl MarkdownDocument {
    /// Create a document from already-loaded content
    pub fn new(source_file: PathBuf, content: String) -> Self {
        Self { source_file, content }
    }

    /// Load a document from disk
    ///
    /// Fails when the file does not exist or contains no translatable content.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();

        if !FileManager::file_exists(path) {
            return Err(DocumentError::InputNotFound(path.to_path_buf()));
        }

        let content = FileManager::read_to_string(path)
            .map_err(|_| DocumentError::ReadFailed(path.to_path_buf()))?;

        if content.trim().is_empty() {
            return Err(DocumentError::EmptyDocument(path.to_path_buf()));
        }

        Ok(Self::new(path.to_path_buf(), content))
    }

    /// Split the document into chunks that respect the character limit
    pub fn split_into_chunks(&self, max_chunk_size: usize) -> Vec<String> {
        split_content_into_chunks(&self.content, max_chunk_size)
    }
}

/// Split document text into size-bounded chunks on line boundaries
///
/// Lines are accumulated greedily: when appending the next line (plus a
/// separating newline) would push the accumulator past `max_chunk_size`, the
/// accumulator is flushed as a chunk and the line starts a new one. A single
/// line longer than the limit becomes its own oversized chunk; lines are
/// never split mid-line, so Markdown constructs stay intact even when the
/// budget is exceeded.
///
/// Chunks are trimmed of surrounding whitespace; empty and whitespace-only
/// input produces no chunks.
pub fn split_content_into_chunks(content: &str, max_chunk_size: usize) -> Vec<String> {
    if content.trim().is_empty() {
        warn!("No content to split into chunks");
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current_chunk = String::new();
    let mut current_size = 0;

    for line in content.lines() {
        let line_size = line.chars().count();

        if !current_chunk.is_empty() && current_size + 1 + line_size > max_chunk_size {
            let completed = current_chunk.trim();
            if !completed.is_empty() {
                chunks.push(completed.to_string());
            }

            current_chunk = line.to_string();
            current_size = line_size;
        } else if current_chunk.is_empty() {
            current_chunk.push_str(line);
            current_size = line_size;
        } else {
            current_chunk.push('\n');
            current_chunk.push_str(line);
            current_size += 1 + line_size;
        }
    }

    let last = current_chunk.trim();
    if !last.is_empty() {
        chunks.push(last.to_string());
    }

    chunks
}
