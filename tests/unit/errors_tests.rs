/*!
 * Tests for the error type hierarchy
 */

use mdtranslate::errors::{AppError, DocumentError, ProviderError, TranslationError};
use std::path::PathBuf;

/// Test that provider errors render their context
#[test]
fn test_provider_error_display_withApiError_shouldIncludeStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 429,
        message: "quota exceeded".to_string(),
    };

    let rendered = error.to_string();
    assert!(rendered.contains("429"));
    assert!(rendered.contains("quota exceeded"));
}

/// Test that document errors carry the offending path
#[test]
fn test_document_error_display_withMissingInput_shouldIncludePath() {
    let error = DocumentError::InputNotFound(PathBuf::from("docs/missing.md"));

    assert!(error.to_string().contains("docs/missing.md"));
}

/// Test that provider errors convert into translation errors
#[test]
fn test_translation_error_from_withProviderError_shouldWrapIt() {
    let provider_error = ProviderError::AuthenticationError("bad key".to_string());

    let translation_error: TranslationError = provider_error.into();

    assert!(translation_error.to_string().contains("bad key"));
}

/// Test that io errors convert into the application error type
#[test]
fn test_app_error_from_withIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");

    let app_error: AppError = io_error.into();

    assert!(matches!(app_error, AppError::File(_)));
    assert!(app_error.to_string().contains("gone"));
}

/// Test that anyhow errors convert into the application error type
#[test]
fn test_app_error_from_withAnyhowError_shouldBecomeUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();

    assert!(matches!(app_error, AppError::Unknown(_)));
    assert!(app_error.to_string().contains("something odd"));
}
