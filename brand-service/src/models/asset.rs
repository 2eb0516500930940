use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use service_core::genai::GeneratedImage;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Every asset URL starts with this, whatever the model's reported mime type.
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Logo,
    BusinessCard,
    Letterhead,
    SocialMediaPost,
    Flyer,
    Banner,
}

impl AssetType {
    pub const ALL: [AssetType; 6] = [
        AssetType::Logo,
        AssetType::BusinessCard,
        AssetType::Letterhead,
        AssetType::SocialMediaPost,
        AssetType::Flyer,
        AssetType::Banner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Logo => "logo",
            AssetType::BusinessCard => "business_card",
            AssetType::Letterhead => "letterhead",
            AssetType::SocialMediaPost => "social_media_post",
            AssetType::Flyer => "flyer",
            AssetType::Banner => "banner",
        }
    }

    /// Layout and format instructions given to the image model.
    pub fn format_description(&self) -> &'static str {
        match self {
            AssetType::Logo => {
                "a clean, scalable logo mark on a plain background that works in print and on screen"
            }
            AssetType::BusinessCard => {
                "the front of a standard 3.5 x 2 inch business card with name, title and contact area"
            }
            AssetType::Letterhead => {
                "an A4 letterhead with branded header, subtle footer and generous writing space"
            }
            AssetType::SocialMediaPost => {
                "a square 1080 x 1080 social media post with bold, legible typography"
            }
            AssetType::Flyer => {
                "a portrait promotional flyer with headline, supporting imagery and a call to action"
            }
            AssetType::Banner => "a wide 1200 x 628 web banner with a single focal message",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown asset type '{}'. Expected one of: {}",
                    s,
                    AssetType::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetMetadata {
    /// Full prompt sent to the image model.
    pub prompt: String,
    pub context: Option<String>,
    pub mime_type: String,
    pub size_bytes: i64,
    pub model: String,
}

/// One generated image. Written once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedAsset {
    #[serde(rename = "_id")]
    pub id: String,
    pub project_id: String,
    pub asset_type: AssetType,
    pub asset_url: String,
    pub metadata: AssetMetadata,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl GeneratedAsset {
    pub fn new(
        project_id: String,
        asset_type: AssetType,
        image: GeneratedImage,
        prompt: String,
        context: Option<String>,
        model: String,
    ) -> Self {
        let asset_url = format!("{}{}", DATA_URL_PREFIX, STANDARD.encode(&image.bytes));

        Self {
            id: Uuid::new_v4().to_string(),
            project_id,
            asset_type,
            asset_url,
            metadata: AssetMetadata {
                prompt,
                context,
                mime_type: image.mime_type,
                size_bytes: image.bytes.len() as i64,
                model,
            },
            created_at: Utc::now(),
        }
    }
}
