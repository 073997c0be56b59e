/*!
 * Tests for batch translation
 */

use std::sync::Arc;
use std::sync::Mutex;
use anyhow::Result;

use mdtranslate::providers::mock::MockProvider;
use mdtranslate::translation::{BatchOptions, BatchTranslator, TranslationOutcome, TranslationService};
use crate::common;

fn batch_with(provider: MockProvider) -> BatchTranslator {
    BatchTranslator::new(TranslationService::with_provider(
        common::test_translation_config(),
        Arc::new(provider),
    ))
}

fn flat_options(output_dir: std::path::PathBuf) -> BatchOptions {
    BatchOptions {
        output_dir,
        preserve_structure: false,
        suffix: None,
    }
}

/// Test that a pattern matching nothing fails without writing anything
#[tokio::test]
async fn test_translate_files_withNoMatches_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pattern = format!("{}/missing/**/*.md", temp_dir.path().display());
    let output_dir = temp_dir.path().join("out");

    let batch = batch_with(MockProvider::working());
    let result = batch
        .translate_files(&pattern, "French", &flat_options(output_dir.clone()))
        .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("No files found"));
    assert!(!output_dir.exists());

    Ok(())
}

/// Test that matches without any Markdown file fail without writing anything
#[tokio::test]
async fn test_translate_files_withNoMarkdownAmongMatches_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "notes.txt", "plain text")?;
    common::create_test_file(&dir, "data.json", "{}")?;

    let pattern = format!("{}/**/*", dir.display());
    let output_dir = dir.join("out");

    let batch = batch_with(MockProvider::working());
    let result = batch
        .translate_files(&pattern, "French", &flat_options(output_dir.clone()))
        .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("No Markdown files"));
    assert!(!output_dir.exists());

    Ok(())
}

/// Test that one failing file does not stop the rest of the batch
#[tokio::test]
async fn test_translate_files_withOneFailingFile_shouldContinuePastIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "a.md", "# First\n")?;
    common::create_test_file(&dir, "b.md", "# Second\n")?;
    common::create_test_file(&dir, "c.md", "# Third\n")?;

    let pattern = format!("{}/*.md", dir.display());
    let output_dir = dir.join("out");

    // One chunk per file, so the second request is the second file
    let batch = batch_with(MockProvider::failing_on(2));
    let outcomes = batch
        .translate_files(&pattern, "French", &flat_options(output_dir.clone()))
        .await?;

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_success());
    assert!(!outcomes[1].is_success());
    assert!(outcomes[2].is_success());

    match &outcomes[1] {
        TranslationOutcome::Failure { input_path, error } => {
            assert!(input_path.ends_with("b.md"));
            assert!(error.contains("mock provider failure"));
        }
        TranslationOutcome::Success(_) => panic!("expected a failure outcome"),
    }

    assert!(outcomes[0].input_path().ends_with("a.md"));
    assert!(outcomes[2].input_path().ends_with("c.md"));

    assert!(output_dir.join("a.md").exists());
    assert!(!output_dir.join("b.md").exists());
    assert!(output_dir.join("c.md").exists());

    Ok(())
}

/// Test that structured mode reproduces the input layout below the output directory
#[tokio::test]
async fn test_translate_files_withStructuredMode_shouldPreserveLayout() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "docs/guide.md", "# Guide\n")?;
    common::create_test_file(&dir, "docs/api/ref.md", "# Reference\n")?;

    let pattern = format!("{}/docs/**/*.md", dir.display());
    let output_dir = dir.join("translations");

    let batch = batch_with(MockProvider::working());
    let outcomes = batch
        .translate_files(
            &pattern,
            "French",
            &BatchOptions {
                output_dir: output_dir.clone(),
                preserve_structure: true,
                suffix: None,
            },
        )
        .await?;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.is_success()));
    assert!(output_dir.join("api/ref.md").exists());
    assert!(output_dir.join("guide.md").exists());

    Ok(())
}

/// Test that non-Markdown matches are filtered out, not translated
#[tokio::test]
async fn test_translate_files_withMixedMatches_shouldOnlyTranslateMarkdown() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "doc.md", "# Doc\n")?;
    common::create_test_file(&dir, "component.mdx", "# Component\n")?;
    common::create_test_file(&dir, "notes.txt", "plain text")?;

    let pattern = format!("{}/**/*", dir.display());
    let output_dir = dir.join("out");

    let batch = batch_with(MockProvider::working());
    let outcomes = batch
        .translate_files(&pattern, "French", &flat_options(output_dir.clone()))
        .await?;

    assert_eq!(outcomes.len(), 2);
    assert!(output_dir.join("doc.md").exists());
    assert!(output_dir.join("component.mdx").exists());
    assert!(!output_dir.join("notes.txt").exists());

    Ok(())
}

/// Test that file progress reports every file in enumeration order
#[tokio::test]
async fn test_translate_files_withProgressCallbacks_shouldReportEveryFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "a.md", "# A\n")?;
    common::create_test_file(&dir, "b.md", "# B\n")?;

    let pattern = format!("{}/*.md", dir.display());
    let output_dir = dir.join("out");

    let reported: Mutex<Vec<(usize, usize)>> = Mutex::new(Vec::new());

    let batch = batch_with(MockProvider::working());
    batch
        .translate_files_with_progress(
            &pattern,
            "French",
            &flat_options(output_dir),
            |current, total, _path| {
                reported.lock().unwrap().push((current, total));
            },
            |_, _| {},
        )
        .await?;

    assert_eq!(reported.into_inner().unwrap(), vec![(1, 2), (2, 2)]);

    Ok(())
}
