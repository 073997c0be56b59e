/*!
 * Batch translation processing.
 *
 * This module contains functionality for translating every Markdown file
 * matching a glob pattern, with per-file outcome tracking and progress
 * reporting. Files are processed strictly sequentially; one file's failure
 * never aborts the rest of the batch.
 */

use anyhow::{anyhow, Result};
use log::{error, info};
use std::path::{Path, PathBuf};

use crate::file_utils::FileManager;
use crate::markdown_processor::is_markdown_file;
use crate::path_mapper::PathMapper;

use super::core::{TranslationService, TranslationSummary};

/// Result of one file's translation attempt in a batch
///
/// Modeled as a tagged variant so the batch loop's continue-on-error
/// behavior is guaranteed by construction rather than by catch discipline.
#[derive(Debug)]
pub enum TranslationOutcome {
    /// The file was translated and written
    Success(TranslationSummary),

    /// The file failed; the batch carried on
    Failure {
        /// Path of the file that failed
        input_path: PathBuf,
        /// Error message for the summary
        error: String,
    },
}

impl TranslationOutcome {
    /// Whether this outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The input path this outcome refers to
    pub fn input_path(&self) -> &Path {
        match self {
            Self::Success(summary) => &summary.input_path,
            Self::Failure { input_path, .. } => input_path,
        }
    }
}

/// Options controlling batch output placement
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory translated files are written under
    pub output_dir: PathBuf,

    /// Whether to reproduce the input directory layout below the output
    /// directory; when false every output lands directly in it
    pub preserve_structure: bool,

    /// Optional filename suffix, inserted before the extension
    pub suffix: Option<String>,
}

/// Batch translator for processing every file matching a pattern
pub struct BatchTranslator {
    /// The translation service to use
    service: TranslationService,
}

impl BatchTranslator {
    /// Create a new batch translator
    pub fn new(service: TranslationService) -> Self {
        Self { service }
    }

    /// Translate all Markdown files matching a pattern, without progress reporting
    pub async fn translate_files(
        &self,
        input_pattern: &str,
        target_language: &str,
        options: &BatchOptions,
    ) -> Result<Vec<TranslationOutcome>> {
        self.translate_files_with_progress(input_pattern, target_language, options, |_, _, _| {}, |_, _| {})
            .await
    }

    /// Translate all Markdown files matching a pattern
    ///
    /// `file_progress` fires once per file with (current, total, path) before
    /// that file starts; `chunk_progress` fires per chunk of the file being
    /// processed. Individual file failures are recorded in the returned
    /// outcome list and processing continues; discovery failures (no match,
    /// no Markdown among the matches) abort before anything is written.
    pub async fn translate_files_with_progress(
        &self,
        input_pattern: &str,
        target_language: &str,
        options: &BatchOptions,
        file_progress: impl Fn(usize, usize, &Path),
        chunk_progress: impl Fn(usize, usize),
    ) -> Result<Vec<TranslationOutcome>> {
        let matched = FileManager::find_files(input_pattern)?;
        if matched.is_empty() {
            return Err(anyhow!("No files found matching pattern: {}", input_pattern));
        }

        let markdown_files: Vec<PathBuf> = matched.into_iter().filter(|p| is_markdown_file(p)).collect();
        if markdown_files.is_empty() {
            return Err(anyhow!(
                "No Markdown files found among matches for pattern: {}",
                input_pattern
            ));
        }

        FileManager::ensure_dir(&options.output_dir)?;

        let mapper = PathMapper::new(
            &options.output_dir,
            options.preserve_structure,
            options.suffix.clone(),
        );

        let total_files = markdown_files.len();
        let mut outcomes = Vec::with_capacity(total_files);

        for (index, input_file) in markdown_files.iter().enumerate() {
            file_progress(index + 1, total_files, input_file.as_path());

            let output_path = mapper.map_output_path(input_file, input_pattern);

            let result = self
                .service
                .translate_file(input_file, &output_path, target_language, |current, total| {
                    chunk_progress(current, total)
                })
                .await;

            match result {
                Ok(summary) => {
                    info!("Translated {:?} -> {:?}", summary.input_path, summary.output_path);
                    outcomes.push(TranslationOutcome::Success(summary));
                }
                Err(e) => {
                    error!("Failed to translate {:?}: {:#}", input_file, e);
                    outcomes.push(TranslationOutcome::Failure {
                        input_path: input_file.clone(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        Ok(outcomes)
    }
}
