//! Mock provider implementations used by unit and router-level tests.

use super::{
    FinishReason, GeneratedImage, GenerationParams, ImageProvider, ProviderError,
    ProviderResponse, TextProvider,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A valid 1x1 transparent PNG.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
    0x60, 0xf8, 0x5f, 0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

enum TextBehaviour {
    Reply(String),
    Fail(String),
    NotConfigured,
}

/// Mock text provider returning a scripted reply.
pub struct MockTextProvider {
    behaviour: TextBehaviour,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// Always answer with `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::new(TextBehaviour::Reply(reply.into()))
    }

    /// Always fail with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(TextBehaviour::Fail(message.into()))
    }

    /// Behave like a provider without an API key.
    pub fn unconfigured() -> Self {
        Self::new(TextBehaviour::NotConfigured)
    }

    fn new(behaviour: TextBehaviour) -> Self {
        Self {
            behaviour,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn model(&self) -> &str {
        "mock-text"
    }

    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.behaviour {
            TextBehaviour::Reply(reply) => Ok(ProviderResponse {
                text: Some(reply.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: reply.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            TextBehaviour::Fail(message) => Err(ProviderError::ApiError(message.clone())),
            TextBehaviour::NotConfigured => Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            )),
        }
    }
}

/// Mock image provider returning [`TINY_PNG`].
///
/// Calls are numbered from zero; calls listed in `failing_calls` fail.
pub struct MockImageProvider {
    failing_calls: HashSet<usize>,
    fail_all: bool,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockImageProvider {
    pub fn new() -> Self {
        Self::failing_on(std::iter::empty())
    }

    pub fn failing_on(calls: impl IntoIterator<Item = usize>) -> Self {
        Self {
            failing_calls: calls.into_iter().collect(),
            fail_all: false,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call.
    pub fn always_failing() -> Self {
        Self {
            fail_all: true,
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Default for MockImageProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    fn model(&self) -> &str {
        "mock-image"
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        if self.fail_all || self.failing_calls.contains(&call) {
            return Err(ProviderError::EmptyResponse(format!(
                "mock image call {} scripted to fail",
                call
            )));
        }

        Ok(GeneratedImage {
            mime_type: "image/png".to_string(),
            bytes: TINY_PNG.to_vec(),
        })
    }
}
