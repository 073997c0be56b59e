/*!
 * Translation service for Markdown documents using a text-generation API.
 *
 * This module contains the core functionality for translating Markdown
 * chunk by chunk. It is split into several submodules:
 *
 * - `core`: Core translation functionality and service definition
 * - `batch`: Batch processing of file sets matched by a glob pattern
 * - `prompts`: Prompt templates and builders for translation
 */

// Re-export main types for easier usage
pub use self::batch::{BatchOptions, BatchTranslator, TranslationOutcome};
pub use self::core::{TranslationService, TranslationSummary};

// Re-export prompt types
pub use self::prompts::{PromptTemplate, build_translation_prompt};

// Submodules
pub mod batch;
pub mod core;
pub mod prompts;
