//! Single visual asset generation.

use crate::models::{AssetType, BrandStrategy, BusinessInput, GeneratedAsset};
use metrics::counter;
use service_core::genai::{ImageProvider, ProviderError};
use std::sync::Arc;

/// Image prompt for one asset of a project.
pub fn asset_prompt(
    input: &BusinessInput,
    strategy: &BrandStrategy,
    asset_type: AssetType,
    context: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Design {} for \"{}\", a {} business.\n\
         Brand personality: {}\n\
         Visual direction: {}\n\
         Colour palette: {}\n\
         Typography: {}\n\
         Tagline: {}\n",
        asset_type.format_description(),
        input.business_name,
        input.industry,
        strategy.brand_personality,
        strategy.visual_direction,
        strategy.color_palette.join(", "),
        strategy.typography,
        strategy.messaging_framework.tagline,
    );

    if let Some(context) = context.map(str::trim).filter(|c| !c.is_empty()) {
        prompt.push_str(&format!("Context: {}\n", context));
    }

    prompt.push_str(
        "Produce a polished, professional image with crisp edges and no placeholder text.",
    );
    prompt
}

#[derive(Clone)]
pub struct AssetGenerator {
    provider: Arc<dyn ImageProvider>,
}

impl AssetGenerator {
    pub fn new(provider: Arc<dyn ImageProvider>) -> Self {
        Self { provider }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Render one asset. The result is not persisted.
    pub async fn generate(
        &self,
        project_id: &str,
        input: &BusinessInput,
        strategy: &BrandStrategy,
        asset_type: AssetType,
        context: Option<String>,
    ) -> Result<GeneratedAsset, ProviderError> {
        let prompt = asset_prompt(input, strategy, asset_type, context.as_deref());

        let image = match self.provider.generate_image(&prompt).await {
            Ok(image) if !image.bytes.is_empty() => image,
            Ok(_) => {
                counter!("brand_assets_total", "asset_type" => asset_type.as_str(), "outcome" => "failed")
                    .increment(1);
                return Err(ProviderError::EmptyResponse(
                    "image payload was empty".to_string(),
                ));
            }
            Err(e) => {
                counter!("brand_assets_total", "asset_type" => asset_type.as_str(), "outcome" => "failed")
                    .increment(1);
                return Err(e);
            }
        };

        counter!("brand_assets_total", "asset_type" => asset_type.as_str(), "outcome" => "ok")
            .increment(1);
        tracing::info!(
            project_id = %project_id,
            asset_type = %asset_type,
            size_bytes = image.bytes.len(),
            "Asset image generated"
        );

        Ok(GeneratedAsset::new(
            project_id.to_string(),
            asset_type,
            image,
            prompt,
            context,
            self.provider.model().to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DATA_URL_PREFIX;
    use crate::services::strategy::fallback_strategy;
    use service_core::genai::mock::MockImageProvider;

    fn input() -> BusinessInput {
        BusinessInput {
            business_name: "Harbor Coffee".to_string(),
            business_description: "Small-batch roastery".to_string(),
            industry: "Food & Beverage".to_string(),
            target_audience: "Local coffee lovers".to_string(),
            business_values: vec!["craft".to_string()],
            preferred_style: None,
            preferred_colors: None,
        }
    }

    #[test]
    fn test_prompt_combines_strategy_and_format() {
        let strategy = fallback_strategy(&input());
        let prompt = asset_prompt(&input(), &strategy, AssetType::BusinessCard, Some(" barista "));

        assert!(prompt.contains("Harbor Coffee"));
        assert!(prompt.contains(AssetType::BusinessCard.format_description()));
        assert!(prompt.contains(&strategy.color_palette.join(", ")));
        assert!(prompt.contains("Context: barista\n"));
    }

    #[test]
    fn test_blank_context_is_omitted() {
        let strategy = fallback_strategy(&input());
        let prompt = asset_prompt(&input(), &strategy, AssetType::Logo, Some("  "));
        assert!(!prompt.contains("Context:"));
    }

    #[tokio::test]
    async fn test_generate_builds_data_url_asset() {
        let provider = Arc::new(MockImageProvider::new());
        let generator = AssetGenerator::new(provider.clone());
        let strategy = fallback_strategy(&input());

        let asset = generator
            .generate("p-1", &input(), &strategy, AssetType::Logo, Some("storefront".to_string()))
            .await
            .unwrap();

        assert_eq!(asset.project_id, "p-1");
        assert!(asset.asset_url.starts_with(DATA_URL_PREFIX));
        assert_eq!(asset.metadata.context.as_deref(), Some("storefront"));
        assert_eq!(asset.metadata.model, "mock-image");
        assert_eq!(asset.metadata.prompt, provider.prompts()[0]);
    }

    #[tokio::test]
    async fn test_generate_surfaces_failure() {
        let generator = AssetGenerator::new(Arc::new(MockImageProvider::always_failing()));
        let strategy = fallback_strategy(&input());

        let result = generator
            .generate("p-1", &input(), &strategy, AssetType::Flyer, None)
            .await;
        assert!(matches!(result, Err(ProviderError::EmptyResponse(_))));
    }
}
