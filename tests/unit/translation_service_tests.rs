/*!
 * Tests for the translation service
 */

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::Ordering;
use anyhow::Result;

use mdtranslate::app_config::TranslationConfig;
use mdtranslate::providers::mock::MockProvider;
use mdtranslate::translation::{TranslationService, build_translation_prompt, PromptTemplate};
use crate::common;

fn service_with(provider: MockProvider) -> TranslationService {
    TranslationService::with_provider(common::test_translation_config(), Arc::new(provider))
}

/// Test that creating a service without an API key fails before any I/O
#[test]
fn test_new_withMissingApiKey_shouldFail() {
    let config = TranslationConfig::default();

    assert!(TranslationService::new(config).is_err());
}

/// Test that the prompt embeds the rules and ends with the chunk verbatim
#[test]
fn test_build_translation_prompt_withChunk_shouldEmbedRulesAndText() {
    let prompt = build_translation_prompt("# Heading\nBody text", "French");

    assert!(prompt.contains("Translate the following Markdown content into French"));
    assert!(prompt.contains("Do NOT translate code blocks"));
    assert!(prompt.ends_with("# Heading\nBody text"));
}

/// Test that the template renders the target language placeholder
#[test]
fn test_prompt_template_render_withLanguage_shouldReplacePlaceholder() {
    let rendered = PromptTemplate::markdown_translator().render("Japanese");

    assert!(rendered.contains("into Japanese"));
    assert!(!rendered.contains("{target_language}"));
}

/// Test that the connection test succeeds against a working provider
#[tokio::test]
async fn test_test_connection_withWorkingProvider_shouldSucceed() -> Result<()> {
    let service = service_with(MockProvider::working());

    assert!(service.test_connection().await.is_ok());

    Ok(())
}

/// Test that the connection test surfaces provider failures
#[tokio::test]
async fn test_test_connection_withFailingProvider_shouldFail() -> Result<()> {
    let service = service_with(MockProvider::failing());

    assert!(service.test_connection().await.is_err());

    Ok(())
}

/// Test that chunk translation returns the provider response trimmed
#[tokio::test]
async fn test_translate_chunk_withWorkingProvider_shouldReturnTrimmedText() -> Result<()> {
    let service = service_with(MockProvider::with_responses(vec!["  translated text \n"]));

    let translated = service.translate_chunk("some text", "French").await?;

    assert_eq!(translated, "translated text");

    Ok(())
}

/// Test the single-chunk document scenario end to end
#[tokio::test]
async fn test_translate_document_withSingleChunk_shouldAddTrailingNewline() -> Result<()> {
    let service = service_with(MockProvider::with_responses(vec!["# Hola\nMundo"]));

    let translated = service.translate_document("# Hello\nWorld\n", "Spanish").await?;

    assert_eq!(translated, "# Hola\nMundo\n");

    Ok(())
}

/// Test that multi-chunk results are joined with a blank line
#[tokio::test]
async fn test_translate_document_withMultipleChunks_shouldJoinWithBlankLine() -> Result<()> {
    let mut config = common::test_translation_config();
    config.max_chunk_size = 10;
    let service = TranslationService::with_provider(
        config,
        Arc::new(MockProvider::with_responses(vec!["Premier paragraphe", "Deuxième paragraphe"])),
    );

    let translated = service
        .translate_document("first paragraph\nsecond paragraph", "French")
        .await?;

    assert_eq!(translated, "Premier paragraphe\n\nDeuxième paragraphe\n");

    Ok(())
}

/// Test that the progress callback fires once per chunk, in order
#[tokio::test]
async fn test_translate_document_withProgressCallback_shouldReportEveryChunk() -> Result<()> {
    let mut config = common::test_translation_config();
    config.max_chunk_size = 3;
    let service = TranslationService::with_provider(config, Arc::new(MockProvider::working()));

    let reported: Mutex<Vec<(usize, usize)>> = Mutex::new(Vec::new());

    service
        .translate_document_with_progress("aaa\nbbb\nccc", "French", |current, total| {
            reported.lock().unwrap().push((current, total));
        })
        .await?;

    let reported = reported.into_inner().unwrap();
    assert_eq!(reported, vec![(1, 3), (2, 3), (3, 3)]);

    Ok(())
}

/// Test that a chunk failure aborts the document and skips later chunks
#[tokio::test]
async fn test_translate_document_withFailingChunk_shouldAbortRemainder() -> Result<()> {
    let mut config = common::test_translation_config();
    config.max_chunk_size = 3;
    let provider = MockProvider::failing_on(2);
    let request_count = provider.request_count();
    let service = TranslationService::with_provider(config, Arc::new(provider));

    let result = service.translate_document("aaa\nbbb\nccc", "French").await;

    assert!(result.is_err());
    assert_eq!(request_count.load(Ordering::SeqCst), 2);

    Ok(())
}

/// Test that an empty document translates to an empty result without requests
#[tokio::test]
async fn test_translate_document_withEmptyContent_shouldReturnEmpty() -> Result<()> {
    let provider = MockProvider::working();
    let request_count = provider.request_count();
    let service = service_with(provider);

    let translated = service.translate_document("   \n  ", "French").await?;

    assert_eq!(translated, "");
    assert_eq!(request_count.load(Ordering::SeqCst), 0);

    Ok(())
}

/// Test that file translation writes the output and reports lengths
#[tokio::test]
async fn test_translate_file_withValidInput_shouldWriteOutputAndSummarize() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(&temp_dir.path().to_path_buf(), "doc.md", "# Hello\nWorld\n")?;
    let output = temp_dir.path().join("out").join("doc_fr.md");

    let service = service_with(MockProvider::with_responses(vec!["# Bonjour\nMonde"]));

    let summary = service
        .translate_file(&input, &output, "French", |_, _| {})
        .await?;

    assert_eq!(std::fs::read_to_string(&output)?, "# Bonjour\nMonde\n");
    assert_eq!(summary.input_path, input);
    assert_eq!(summary.output_path, output);
    assert_eq!(summary.target_language, "French");
    assert_eq!(summary.original_length, "# Hello\nWorld\n".chars().count());
    assert_eq!(summary.translated_length, "# Bonjour\nMonde\n".chars().count());

    Ok(())
}

/// Test that file translation fails for a missing input
#[tokio::test]
async fn test_translate_file_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("out.md");

    let service = service_with(MockProvider::working());

    let result = service
        .translate_file(&temp_dir.path().join("missing.md"), &output, "French", |_, _| {})
        .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("does not exist"));

    Ok(())
}

/// Test that file translation fails for an empty input
#[tokio::test]
async fn test_translate_file_withEmptyInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(&temp_dir.path().to_path_buf(), "empty.md", "\n\n")?;
    let output = temp_dir.path().join("out.md");

    let service = service_with(MockProvider::working());

    let result = service
        .translate_file(&input, &output, "French", |_, _| {})
        .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("empty"));

    Ok(())
}

/// Test that nothing is written when a chunk fails mid-document
#[tokio::test]
async fn test_translate_file_withFailingChunk_shouldNotWritePartialOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::test_translation_config();
    config.max_chunk_size = 3;

    let input = common::create_test_file(&temp_dir.path().to_path_buf(), "doc.md", "aaa\nbbb\nccc")?;
    let output = temp_dir.path().join("doc_fr.md");

    let service =
        TranslationService::with_provider(config, Arc::new(MockProvider::failing_on(2)));

    let result = service
        .translate_file(&input, &output, "French", |_, _| {})
        .await;

    assert!(result.is_err());
    assert!(!output.exists());

    Ok(())
}
