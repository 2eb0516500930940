//! Prompt enhancement engine.
//!
//! Renders the style template, calls the text model, and pulls the
//! `enhanced_prompt`/`reasoning` pair out of the reply. A reply that is not a
//! JSON object still yields a result: the raw text becomes the enhanced
//! prompt and the reasoning is synthesized.

use crate::services::styles::render_instruction;
use service_core::genai::extract::{parse_json_object, string_field, strip_code_fence};
use service_core::genai::{GenerationParams, ProviderError, TextProvider};
use std::sync::Arc;

const DEFAULT_REASONING: &str = "Enhanced with AI creativity";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enhancement {
    pub enhanced_prompt: String,
    pub reasoning: String,
}

#[derive(Clone)]
pub struct PromptEnhancer {
    provider: Arc<dyn TextProvider>,
}

impl PromptEnhancer {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    pub async fn enhance(
        &self,
        original_prompt: &str,
        style: &str,
    ) -> Result<Enhancement, ProviderError> {
        let instruction = render_instruction(style, original_prompt);

        let response = self
            .provider
            .generate(&instruction, &GenerationParams::default())
            .await?;

        tracing::debug!(
            model = %self.provider.model(),
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Enhancement reply received"
        );

        let text = response.text.ok_or_else(|| {
            ProviderError::EmptyResponse("model returned no text".to_string())
        })?;

        Ok(parse_enhancement(&text, original_prompt, style))
    }
}

/// Extract the enhancement from a raw model reply.
pub fn parse_enhancement(reply: &str, original_prompt: &str, style: &str) -> Enhancement {
    match parse_json_object(reply) {
        Some(map) => Enhancement {
            enhanced_prompt: string_field(&map, "enhanced_prompt")
                .unwrap_or_else(|| original_prompt.to_string()),
            reasoning: string_field(&map, "reasoning")
                .unwrap_or_else(|| DEFAULT_REASONING.to_string()),
        },
        None => {
            tracing::warn!(style = %style, "Model reply was not a JSON object, using raw text");
            Enhancement {
                enhanced_prompt: strip_code_fence(reply).to_string(),
                reasoning: format!("Enhanced using {} style with AI creativity", style),
            }
        }
    }
}
