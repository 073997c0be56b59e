use anyhow::{anyhow, Result};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::language_utils;
use crate::markdown_processor::is_markdown_file;
use crate::path_mapper::PathMapper;
use crate::translation::{BatchOptions, BatchTranslator, TranslationService};

// @module: Application controller for document translation

/// Output placement options taken from the command line
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Directory translated files are written under; defaults to the input's
    /// directory in single-file mode and to `translated` in batch mode
    pub output_dir: Option<PathBuf>,

    /// Discard directory structure in batch mode
    pub flatten: bool,

    /// Custom filename suffix, inserted before the extension
    pub suffix: Option<String>,
}

/// Main application controller for Markdown translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.target_language.is_empty()
    }

    /// Compute the destination for single-file mode
    ///
    /// Without an explicit suffix the target language is used, so
    /// `README.md` translated to `fr` becomes `README_fr.md` next to the
    /// input (or under the requested output directory).
    pub fn single_file_output_path(&self, input_file: &Path, options: &OutputOptions) -> PathBuf {
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            input_file.parent().unwrap_or(Path::new(".")).to_path_buf()
        });

        let suffix = options
            .suffix
            .clone()
            .unwrap_or_else(|| self.config.target_language.clone());

        let mapper = PathMapper::new(&output_dir, false, Some(suffix));
        mapper.map_output_path(input_file, "")
    }

    /// Translate a single document file
    pub async fn run_file(&self, input_file: &Path, options: &OutputOptions) -> Result<()> {
        if !is_markdown_file(input_file) {
            return Err(anyhow!(
                "Unsupported file extension (expected .md, .markdown, or .mdx): {:?}",
                input_file
            ));
        }

        let output_path = self.single_file_output_path(input_file, options);
        if output_path.exists() {
            warn!("Output file already exists and will be overwritten: {:?}", output_path);
        }

        let target_language = language_utils::resolve_language_name(&self.config.target_language);
        let service = TranslationService::new(self.config.translation.clone())?;

        info!("mdtranslate: {} - {}", service.provider_name(), self.config.translation.model);
        info!("Translating {:?} to {}", input_file, target_language);

        let progress_bar = ProgressBar::new(0);
        progress_bar.set_style(Self::chunk_bar_style());
        progress_bar.set_message("Translating");

        let pb = progress_bar.clone();
        let start_time = std::time::Instant::now();

        let summary = service
            .translate_file(input_file, &output_path, &target_language, move |current, total| {
                pb.set_length(total as u64);
                pb.set_position(current as u64);
            })
            .await;

        progress_bar.finish_and_clear();

        let summary = summary?;

        info!(
            "Success: {} ({} chars in, {} chars out) in {}",
            summary.output_path.display(),
            summary.original_length,
            summary.translated_length,
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Translate every Markdown file matching a glob pattern
    ///
    /// Individual file failures are reported at the end; one bad file never
    /// aborts the rest of the batch.
    pub async fn run_batch(&self, input_pattern: &str, options: &OutputOptions) -> Result<()> {
        let start_time = std::time::Instant::now();

        let output_dir = options
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("translated"));

        let target_language = language_utils::resolve_language_name(&self.config.target_language);
        let service = TranslationService::new(self.config.translation.clone())?;

        info!("mdtranslate: {} - {}", service.provider_name(), self.config.translation.model);
        info!("Translating files matching {} to {}", input_pattern, target_language);

        let batch_translator = BatchTranslator::new(service);

        let batch_options = BatchOptions {
            output_dir,
            preserve_structure: !options.flatten,
            suffix: options.suffix.clone(),
        };

        // One bar for files, one for the chunks of the file in flight
        let multi_progress = MultiProgress::new();
        let files_bar = multi_progress.add(ProgressBar::new(0));
        files_bar.set_style(Self::file_bar_style());
        files_bar.set_message("Processing files");

        let chunks_bar = multi_progress.add(ProgressBar::new(0));
        chunks_bar.set_style(Self::chunk_bar_style());

        let fb = files_bar.clone();
        let cb = chunks_bar.clone();

        let outcomes = batch_translator
            .translate_files_with_progress(
                input_pattern,
                &target_language,
                &batch_options,
                move |current, total, path| {
                    fb.set_length(total as u64);
                    fb.set_position(current as u64 - 1);
                    let file_name = path
                        .file_name()
                        .map(|f| f.to_string_lossy().to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    fb.set_message(format!("Processing: {}", file_name));
                },
                move |current, total| {
                    cb.set_length(total as u64);
                    cb.set_position(current as u64);
                },
            )
            .await?;

        chunks_bar.finish_and_clear();
        files_bar.finish_and_clear();

        // Give summary results - important for batch operations
        let success_count = outcomes.iter().filter(|o| o.is_success()).count();
        let error_count = outcomes.len() - success_count;

        info!(
            "Batch completed: {} translated, {} failed in {}",
            success_count,
            error_count,
            Self::format_duration(start_time.elapsed())
        );

        for outcome in &outcomes {
            if let crate::translation::TranslationOutcome::Failure { input_path, error: message } = outcome {
                error!("Failed: {:?} - {}", input_path, message);
            }
        }

        Ok(())
    }

    /// Progress bar style for chunk-level progress
    fn chunk_bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░")
    }

    /// Progress bar style for file-level progress
    fn file_bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░")
    }

    // Format duration in a human-readable format
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
