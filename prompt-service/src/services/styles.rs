//! Enhancement styles and their instruction templates.
//!
//! Unknown style identifiers resolve to [`EnhancementStyle::Creative`]; no
//! error is raised for them.

use crate::dtos::StyleInfo;

/// Placeholder replaced by the caller's prompt.
const PROMPT_SLOT: &str = "{original_prompt}";

const RESPONSE_FORMAT: &str = r#"
Respond with JSON only, in exactly this shape:
{
    "enhanced_prompt": "the rewritten prompt",
    "reasoning": "a short note on what was changed and why"
}"#;

const CREATIVE_TEMPLATE: &str = r#"You are a prompt engineer who writes prompts for imaginative, striking AI image generation. Rewrite the prompt below so it yields a memorable, inventive image.

Guidelines:
- Add vivid visual detail, artistic styles and creative flourishes
- Describe lighting, composition and atmosphere
- Point to artistic techniques or well-known artists where they fit
- Keep the core idea intact while adding an unexpected twist

Original prompt: {original_prompt}
"#;

const TECHNICAL_TEMPLATE: &str = r#"You are a prompt engineer who writes precise, technically specified prompts for AI image generation. Rewrite the prompt below with concrete technical parameters.

Guidelines:
- Specify camera body, lens, aperture and other capture settings
- Name the lighting setup, angle and framing
- Use exact technical and rendering vocabulary
- State target quality, resolution and render style

Original prompt: {original_prompt}
"#;

const ARTISTIC_TEMPLATE: &str = r#"You are a prompt engineer who writes art-historically informed prompts for AI image generation. Rewrite the prompt below so it reads like a brief for a fine-art piece.

Guidelines:
- Reference artists, movements or schools that suit the subject
- Describe palette, brushwork, texture and medium
- Apply classical composition principles
- Aim for an emotionally resonant, aesthetically coherent result

Original prompt: {original_prompt}
"#;

const CINEMATIC_TEMPLATE: &str = r#"You are a prompt engineer who writes film-still prompts for AI image generation. Rewrite the prompt below so it produces a dramatic, movie-quality frame.

Guidelines:
- Choose shot type, camera angle and cinematic lighting
- Establish mood, atmosphere and tension
- Borrow from recognisable cinematography and film styles
- Imply a story around the moment being shown

Original prompt: {original_prompt}
"#;

const DETAILED_TEMPLATE: &str = r#"You are a prompt engineer who writes exhaustive, highly specific prompts for AI image generation. Rewrite the prompt below so that every element of the scene is described.

Guidelines:
- Describe every subject, surface, material and texture
- Fill in the environment and background
- Give colours, shapes, sizes and spatial relationships
- Make the description immersive and unambiguous

Original prompt: {original_prompt}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhancementStyle {
    Creative,
    Technical,
    Artistic,
    Cinematic,
    Detailed,
}

impl EnhancementStyle {
    pub const ALL: [EnhancementStyle; 5] = [
        EnhancementStyle::Creative,
        EnhancementStyle::Technical,
        EnhancementStyle::Artistic,
        EnhancementStyle::Cinematic,
        EnhancementStyle::Detailed,
    ];

    /// Resolve a caller-supplied identifier, falling back to creative.
    ///
    /// Identifiers match exactly; `"Cinematic"` is not `"cinematic"`.
    pub fn resolve(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|style| style.id() == id)
            .unwrap_or(EnhancementStyle::Creative)
    }

    pub fn id(self) -> &'static str {
        match self {
            EnhancementStyle::Creative => "creative",
            EnhancementStyle::Technical => "technical",
            EnhancementStyle::Artistic => "artistic",
            EnhancementStyle::Cinematic => "cinematic",
            EnhancementStyle::Detailed => "detailed",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EnhancementStyle::Creative => "Creative",
            EnhancementStyle::Technical => "Technical",
            EnhancementStyle::Artistic => "Artistic",
            EnhancementStyle::Cinematic => "Cinematic",
            EnhancementStyle::Detailed => "Detailed",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EnhancementStyle::Creative => "Imaginative and visually stunning enhancements",
            EnhancementStyle::Technical => "Precise, detailed technical specifications",
            EnhancementStyle::Artistic => "Art-inspired with aesthetic principles",
            EnhancementStyle::Cinematic => "Movie-quality dramatic visuals",
            EnhancementStyle::Detailed => "Extremely comprehensive descriptions",
        }
    }

    fn template(self) -> &'static str {
        match self {
            EnhancementStyle::Creative => CREATIVE_TEMPLATE,
            EnhancementStyle::Technical => TECHNICAL_TEMPLATE,
            EnhancementStyle::Artistic => ARTISTIC_TEMPLATE,
            EnhancementStyle::Cinematic => CINEMATIC_TEMPLATE,
            EnhancementStyle::Detailed => DETAILED_TEMPLATE,
        }
    }

    /// Fill the style's template with the caller's prompt.
    pub fn render(self, original_prompt: &str) -> String {
        let mut instruction = self.template().replacen(PROMPT_SLOT, original_prompt, 1);
        instruction.push_str(RESPONSE_FORMAT);
        instruction
    }

    pub fn info(self) -> StyleInfo {
        StyleInfo {
            id: self.id(),
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Resolve `style` and render its instruction for `original_prompt`.
pub fn render_instruction(style: &str, original_prompt: &str) -> String {
    EnhancementStyle::resolve(style).render(original_prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_embeds_prompt_verbatim() {
        let prompt = "a lighthouse {in} \"fog\"";
        for style in EnhancementStyle::ALL {
            let instruction = render_instruction(style.id(), prompt);
            assert!(!instruction.trim().is_empty());
            assert!(
                instruction.contains(prompt),
                "{} template lost the prompt",
                style.id()
            );
            assert!(!instruction.contains(PROMPT_SLOT));
            assert!(instruction.contains("\"enhanced_prompt\""));
        }
    }

    #[test]
    fn test_unknown_style_behaves_like_creative() {
        let prompt = "a red fox";
        assert_eq!(
            render_instruction("vaporwave", prompt),
            render_instruction("creative", prompt)
        );
        assert_eq!(render_instruction("", prompt), render_instruction("creative", prompt));
    }

    #[test]
    fn test_styles_are_distinct() {
        let prompt = "a red fox";
        let rendered: std::collections::HashSet<String> = EnhancementStyle::ALL
            .iter()
            .map(|s| s.render(prompt))
            .collect();
        assert_eq!(rendered.len(), 5);
    }

    #[test]
    fn test_resolve_matches_exact_ids_only() {
        assert_eq!(EnhancementStyle::resolve("cinematic"), EnhancementStyle::Cinematic);
        assert_eq!(EnhancementStyle::resolve("Cinematic"), EnhancementStyle::Creative);
        assert_eq!(EnhancementStyle::resolve(" detailed "), EnhancementStyle::Creative);
    }
}
