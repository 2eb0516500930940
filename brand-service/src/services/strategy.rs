//! Brand strategy generation.
//!
//! One text-model call per strategy. The reply is expected to be a JSON
//! object; fields it lacks are filled from the business input, and a reply
//! that is not JSON at all yields a strategy derived entirely from the input
//! with the raw reply kept in `raw_response`.

use crate::models::{BrandStrategy, BusinessInput, MessagingFramework};
use serde_json::{Map, Value};
use service_core::genai::extract::{parse_json_object, string_field};
use service_core::genai::{GenerationParams, ProviderError, TextProvider};
use std::sync::Arc;

const DEFAULT_PALETTE: [&str; 4] = ["#1F3A5F", "#3FA7D6", "#F5F7FA", "#2E2E2E"];
const DEFAULT_TYPOGRAPHY: &str = "Clean geometric sans-serif headings with a highly legible body face";

/// Fill the strategy prompt from the business input.
///
/// Every slot is filled in a single `format!` pass, so braces inside user
/// text are passed through untouched.
pub fn strategy_prompt(input: &BusinessInput) -> String {
    let values = if input.business_values.is_empty() {
        "not specified".to_string()
    } else {
        input.business_values.join(", ")
    };

    format!(
        r##"You are a senior brand strategist. Build a brand identity for the business below.

Business name: {business_name}
Description: {business_description}
Industry: {industry}
Target audience: {target_audience}
Core values: {business_values}
Preferred style: {preferred_style}
Preferred colours: {preferred_colors}

Respond with JSON only, in exactly this shape:
{{
    "brand_personality": "how the brand looks, sounds and behaves",
    "visual_direction": "imagery, composition and overall visual language",
    "color_palette": ["#RRGGBB", "#RRGGBB", "#RRGGBB", "#RRGGBB"],
    "typography": "typeface families and how they are paired",
    "messaging_framework": {{
        "tagline": "a short memorable tagline",
        "value_proposition": "one sentence on why customers choose this business",
        "key_messages": ["message", "message", "message"]
    }}
}}"##,
        business_name = input.business_name,
        business_description = input.business_description,
        industry = input.industry,
        target_audience = input.target_audience,
        business_values = values,
        preferred_style = input.preferred_style.as_deref().unwrap_or("no preference"),
        preferred_colors = input.preferred_colors.as_deref().unwrap_or("no preference"),
    )
}

#[derive(Clone)]
pub struct StrategyGenerator {
    provider: Arc<dyn TextProvider>,
}

impl StrategyGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    pub async fn generate(&self, input: &BusinessInput) -> Result<BrandStrategy, ProviderError> {
        let params = GenerationParams {
            json_output: true,
            ..Default::default()
        };

        let response = self
            .provider
            .generate(&strategy_prompt(input), &params)
            .await?;

        tracing::debug!(
            model = %self.provider.model(),
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Strategy reply received"
        );

        let text = response.text.ok_or_else(|| {
            ProviderError::EmptyResponse("model returned no text".to_string())
        })?;

        Ok(parse_strategy(&text, input))
    }
}

/// Extract a strategy from a raw model reply.
pub fn parse_strategy(reply: &str, input: &BusinessInput) -> BrandStrategy {
    let fallback = fallback_strategy(input);

    let Some(map) = parse_json_object(reply) else {
        tracing::warn!(
            business = %input.business_name,
            "Strategy reply was not a JSON object, deriving strategy from input"
        );
        return BrandStrategy {
            raw_response: Some(reply.to_string()),
            ..fallback
        };
    };

    let framework = map.get("messaging_framework").and_then(Value::as_object);
    let messaging_framework = MessagingFramework {
        tagline: framework
            .and_then(|m| non_blank(m, "tagline"))
            .unwrap_or(fallback.messaging_framework.tagline),
        value_proposition: framework
            .and_then(|m| non_blank(m, "value_proposition"))
            .unwrap_or(fallback.messaging_framework.value_proposition),
        key_messages: framework
            .map(|m| string_list(m.get("key_messages")))
            .filter(|messages| !messages.is_empty())
            .unwrap_or(fallback.messaging_framework.key_messages),
    };

    let color_palette = Some(string_list(map.get("color_palette")))
        .filter(|colors| !colors.is_empty())
        .unwrap_or(fallback.color_palette);

    BrandStrategy {
        brand_personality: text_field(&map, "brand_personality")
            .unwrap_or(fallback.brand_personality),
        visual_direction: text_field(&map, "visual_direction")
            .unwrap_or(fallback.visual_direction),
        color_palette,
        typography: text_field(&map, "typography").unwrap_or(fallback.typography),
        messaging_framework,
        raw_response: None,
    }
}

/// Strategy built from the business input alone.
pub fn fallback_strategy(input: &BusinessInput) -> BrandStrategy {
    let personality = if input.business_values.is_empty() {
        format!("Professional and trustworthy voice for the {} industry", input.industry)
    } else {
        format!(
            "Professional and trustworthy, grounded in {}",
            input.business_values.join(", ")
        )
    };

    BrandStrategy {
        brand_personality: personality,
        visual_direction: format!(
            "{} visuals designed to resonate with {}",
            input.preferred_style.as_deref().unwrap_or("Modern, minimal"),
            input.target_audience
        ),
        color_palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        typography: DEFAULT_TYPOGRAPHY.to_string(),
        messaging_framework: MessagingFramework {
            tagline: input.business_name.clone(),
            value_proposition: input.business_description.clone(),
            key_messages: input.business_values.clone(),
        },
        raw_response: None,
    }
}

/// Text of a field, rendering structured values as compact JSON.
fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::Null => None,
        Value::String(_) => non_blank(map, key),
        other => Some(other.to_string()),
    }
}

/// Trimmed string field; blank strings count as missing.
fn non_blank(map: &Map<String, Value>, key: &str) -> Option<String> {
    string_field(map, key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Strings of a JSON list, or the string values of a JSON object.
fn string_list(value: Option<&Value>) -> Vec<String> {
    let items: Vec<&Value> = match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Object(map)) => map.values().collect(),
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
