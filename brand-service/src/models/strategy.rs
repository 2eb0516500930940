use serde::{Deserialize, Serialize};

/// Brand identity produced by the text model and consumed by asset prompts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrandStrategy {
    pub brand_personality: String,
    pub visual_direction: String,
    /// Hex colours, most important first.
    pub color_palette: Vec<String>,
    pub typography: String,
    pub messaging_framework: MessagingFramework,
    /// Unparsed model reply, kept when the structured fields were derived
    /// from the business input instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MessagingFramework {
    pub tagline: String,
    pub value_proposition: String,
    pub key_messages: Vec<String>,
}
