/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds, echoing a marked translation
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::failing_on(n)` - Fails on the nth request only
 * - `MockProvider::with_responses(...)` - Returns scripted responses in order
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{GenerationRequest, Provider};

/// Behavior mode for the mock provider
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always succeeds, returning the prompt wrapped in a translation marker
    Working,
    /// Always fails with an error
    Failing,
    /// Fails on the nth request (1-based), succeeds otherwise
    FailingOn(usize),
    /// Returns the scripted responses in order, failing when exhausted
    Scripted(Vec<String>),
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared so tests can assert call counts
    request_count: Arc<AtomicUsize>,
    /// Prompts received, shared so tests can inspect them
    received_prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            received_prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock provider that fails on the nth request (1-based)
    pub fn failing_on(n: usize) -> Self {
        Self::new(MockBehavior::FailingOn(n))
    }

    /// Create a mock provider that returns the given responses in order
    pub fn with_responses(responses: Vec<&str>) -> Self {
        Self::new(MockBehavior::Scripted(
            responses.into_iter().map(|r| r.to_string()).collect(),
        ))
    }

    /// Handle to the request counter for assertions
    pub fn request_count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.request_count)
    }

    /// Handle to the received prompts for assertions
    pub fn received_prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.received_prompts)
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        let call_number = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.received_prompts
            .lock()
            .expect("mock prompt log poisoned")
            .push(request.prompt.clone());

        match &self.behavior {
            MockBehavior::Working => Ok(format!("[translated] {}", request.prompt)),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock provider failure".to_string(),
            )),
            MockBehavior::FailingOn(n) => {
                if call_number == *n {
                    Err(ProviderError::RequestFailed(format!(
                        "mock provider failure on request {}",
                        call_number
                    )))
                } else {
                    Ok(format!("[translated] {}", request.prompt))
                }
            }
            MockBehavior::Scripted(responses) => responses
                .get(call_number - 1)
                .cloned()
                .ok_or_else(|| {
                    ProviderError::RequestFailed(format!(
                        "mock provider has no scripted response for request {}",
                        call_number
                    ))
                }),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock provider failure".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "Mock"
    }
}
