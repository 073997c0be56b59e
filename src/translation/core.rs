/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct and its implementation,
 * which is responsible for translating Markdown documents chunk by chunk
 * through a text-generation provider.
 */

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::TranslationConfig;
use crate::file_utils::FileManager;
use crate::markdown_processor::{MarkdownDocument, split_content_into_chunks};
use crate::providers::gemini::Gemini;
use crate::providers::{GenerationRequest, Provider};
use super::prompts::build_translation_prompt;

/// Summary of one translated file
#[derive(Debug, Clone)]
pub struct TranslationSummary {
    /// Path the document was read from
    pub input_path: PathBuf,

    /// Path the translation was written to
    pub output_path: PathBuf,

    /// Target language as requested
    pub target_language: String,

    /// Character count of the original document
    pub original_length: usize,

    /// Character count of the translated document
    pub translated_length: usize,
}

/// Main translation service for Markdown documents
///
/// The provider handle is constructed once and reused for every chunk and
/// file processed in a run. Translation is strictly sequential: at most one
/// provider request is in flight, with a configured delay between
/// consecutive chunks as a crude rate-limit mitigation.
pub struct TranslationService {
    /// Provider implementation
    provider: Arc<dyn Provider>,

    /// Configuration for the translation service
    pub config: TranslationConfig,
}

impl TranslationService {
    /// Create a new translation service with the given configuration
    pub fn new(config: TranslationConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(anyhow::anyhow!(
                "Translation API key is required to create the translation service"
            ));
        }

        let provider = Arc::new(Gemini::new(
            &config.api_key,
            &config.endpoint,
            &config.model,
            config.timeout_secs,
        ));

        Ok(Self { provider, config })
    }

    /// Create a translation service around an existing provider handle
    ///
    /// Used by tests to substitute a stub provider.
    pub fn with_provider(config: TranslationConfig, provider: Arc<dyn Provider>) -> Self {
        Self { provider, config }
    }

    /// Human-readable name of the active provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Test the connection to the translation provider
    pub async fn test_connection(&self) -> Result<()> {
        self.provider
            .test_connection()
            .await
            .with_context(|| format!("Failed to connect to {}", self.provider.name()))
    }

    /// Translate a single chunk of Markdown
    ///
    /// Builds the instruction prompt, issues one provider request, and
    /// returns the response trimmed of surrounding whitespace. Provider
    /// failures propagate unchanged; there is no retry.
    pub async fn translate_chunk(&self, chunk: &str, target_language: &str) -> Result<String> {
        let prompt = build_translation_prompt(chunk, target_language);
        let request = GenerationRequest::new(prompt).temperature(self.config.temperature);

        let translated = self.provider.generate(request).await?;

        Ok(translated.trim().to_string())
    }

    /// Translate a whole document without progress reporting
    pub async fn translate_document(&self, content: &str, target_language: &str) -> Result<String> {
        self.translate_document_with_progress(content, target_language, |_, _| {}).await
    }

    /// Translate a whole document, reporting (current, total) per chunk
    ///
    /// Chunks are translated in order, one at a time. The progress callback
    /// fires once per chunk before its request goes out. Any chunk failure
    /// aborts the whole document; results of earlier chunks are discarded.
    pub async fn translate_document_with_progress(
        &self,
        content: &str,
        target_language: &str,
        progress: impl Fn(usize, usize),
    ) -> Result<String> {
        let chunks = split_content_into_chunks(content, self.config.max_chunk_size);
        if chunks.is_empty() {
            return Ok(String::new());
        }

        let total_chunks = chunks.len();
        let mut translated_chunks = Vec::with_capacity(total_chunks);

        for (index, chunk) in chunks.iter().enumerate() {
            progress(index + 1, total_chunks);

            let translated = self.translate_chunk(chunk, target_language).await
                .with_context(|| format!("Failed to translate chunk {} of {}", index + 1, total_chunks))?;
            translated_chunks.push(translated);

            // Pause between consecutive requests, not after the last one
            if index + 1 < total_chunks && self.config.request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.request_delay_ms)).await;
            }
        }

        let mut output = translated_chunks.join("\n\n");
        output.push('\n');

        Ok(output)
    }

    /// Translate a document file from disk and write the result
    ///
    /// The input must exist and contain translatable content. The output
    /// parent directory is created as needed; nothing is written when any
    /// chunk fails.
    pub async fn translate_file(
        &self,
        input_path: &Path,
        output_path: &Path,
        target_language: &str,
        progress: impl Fn(usize, usize),
    ) -> Result<TranslationSummary> {
        let document = MarkdownDocument::from_file(input_path)?;

        let translated = self
            .translate_document_with_progress(&document.content, target_language, progress)
            .await?;

        FileManager::write_to_file(output_path, &translated)?;

        Ok(TranslationSummary {
            input_path: input_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            target_language: target_language.to_string(),
            original_length: document.content.chars().count(),
            translated_length: translated.chars().count(),
        })
    }
}

impl Clone for TranslationService {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            config: self.config.clone(),
        }
    }
}
