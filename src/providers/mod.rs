/*!
 * Provider implementations for text generation.
 *
 * This module contains the client used to reach the Gemini API and the
 * common trait the translation service talks to:
 * - Gemini: Google Gemini API integration
 * - Mock: scriptable provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single text-generation request, independent of any provider wire format.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The full prompt to send
    pub prompt: String,

    /// Temperature for generation
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// Create a new generation request for the given prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Common trait for text-generation providers
///
/// This trait defines the interface the translation service depends on,
/// allowing the real API client and test stubs to be used interchangeably.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Generate text for a request and return the raw response text
    ///
    /// # Arguments
    /// * `request` - The generation request to complete
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The generated text or an error
    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is usable, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Human-readable provider name for logs
    fn name(&self) -> &str;
}

pub mod gemini;
pub mod mock;
