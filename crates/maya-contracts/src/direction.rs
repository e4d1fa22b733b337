use serde::{Deserialize, Serialize};

use crate::catalog::Dimension;
use crate::concept::SemanticProfile;

/// Per-request data about the person being photographed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    /// Opaque token binding the downstream model to a trained likeness.
    #[serde(default)]
    pub trigger: String,
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    pub preferred_mood: Option<String>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub palette: Vec<String>,
    /// Physical descriptors, filtered before they reach the identity lock.
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionOverrides {
    pub mood: Option<String>,
    pub scenario: Option<String>,
    pub composition: Option<String>,
    pub lighting: Option<String>,
    pub outfit: Option<String>,
    pub emotional_tone: Option<String>,
}

impl DimensionOverrides {
    pub const SLOTS: [&'static str; 6] = [
        "mood",
        "scenario",
        "composition",
        "lighting",
        "outfit",
        "emotional_tone",
    ];

    pub fn get(&self, slot: &str) -> Option<&str> {
        let value = match slot {
            "mood" => &self.mood,
            "scenario" => &self.scenario,
            "composition" => &self.composition,
            "lighting" => &self.lighting,
            "outfit" => &self.outfit,
            "emotional_tone" => &self.emotional_tone,
            _ => return None,
        };
        value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Sets or clears one slot. Returns false for an unknown slot name.
    pub fn set(&mut self, slot: &str, value: Option<String>) -> bool {
        let target = match slot {
            "mood" => &mut self.mood,
            "scenario" => &mut self.scenario,
            "composition" => &mut self.composition,
            "lighting" => &mut self.lighting,
            "outfit" => &mut self.outfit,
            "emotional_tone" => &mut self.emotional_tone,
            _ => return false,
        };
        *target = value.filter(|value| !value.trim().is_empty());
        true
    }

    pub fn present_slots(&self) -> Vec<&'static str> {
        Self::SLOTS
            .into_iter()
            .filter(|slot| self.get(slot).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present_slots().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptInput {
    pub brief: String,
    #[serde(default)]
    pub overrides: DimensionOverrides,
}

impl ConceptInput {
    pub fn new(brief: impl Into<String>) -> Self {
        Self {
            brief: brief.into(),
            overrides: DimensionOverrides::default(),
        }
    }
}

/// Why a dimension ended up with its block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionExplanation {
    pub dimension: Dimension,
    pub key: String,
    pub score: u32,
    pub requested: Option<String>,
    pub fallback_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleBlendBlock {
    pub styles: Vec<String>,
    pub keywords: Vec<String>,
    pub colors: Vec<String>,
    pub wardrobe: Vec<String>,
    pub trending: Vec<String>,
}

impl StyleBlendBlock {
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Catalog key chosen per dimension. A free-text outfit shows as `custom`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedModules {
    pub mood: String,
    pub lighting: String,
    pub composition: String,
    pub scenario: String,
    pub pose: String,
    pub fashion: String,
    #[serde(default)]
    pub styles: Vec<String>,
}

impl AppliedModules {
    pub fn key(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Mood => &self.mood,
            Dimension::Lighting => &self.lighting,
            Dimension::Composition => &self.composition,
            Dimension::Scenario => &self.scenario,
            Dimension::Pose => &self.pose,
            Dimension::Fashion => &self.fashion,
        }
    }
}

/// Human readable direction shown next to the generated prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeDirection {
    pub mood: String,
    pub scene: String,
    pub composition: String,
    pub lighting: String,
    pub pose: String,
    pub fashion: String,
    pub identity_lock: String,
    pub style_blend: StyleBlendBlock,
    #[serde(default)]
    pub explanation: Vec<SelectionExplanation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair {
    pub final_prompt: String,
    pub negative_prompt: String,
    pub token_count: usize,
}

/// Everything one `direct` call produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionResult {
    pub direction_id: String,
    pub profile: SemanticProfile,
    pub prompt: PromptPair,
    pub creative_direction: CreativeDirection,
    pub applied_modules: AppliedModules,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ConceptInput, DimensionOverrides, UserContext};

    #[test]
    fn overrides_ignore_blank_values() {
        let mut overrides = DimensionOverrides::default();
        assert!(overrides.set("mood", Some("golden-warmth".to_string())));
        assert!(overrides.set("lighting", Some("   ".to_string())));
        assert_eq!(overrides.get("mood"), Some("golden-warmth"));
        assert_eq!(overrides.get("lighting"), None);
        assert_eq!(overrides.present_slots(), vec!["mood"]);
    }

    #[test]
    fn overrides_reject_unknown_slots() {
        let mut overrides = DimensionOverrides::default();
        assert!(!overrides.set("hairstyle", Some("bob".to_string())));
        assert!(overrides.is_empty());
        overrides.set("outfit", Some("red gown".to_string()));
        overrides.clear();
        assert!(overrides.is_empty());
    }

    #[test]
    fn concept_input_parses_partial_json() -> anyhow::Result<()> {
        let input: ConceptInput = serde_json::from_value(json!({
            "brief": "rooftop at dusk",
            "overrides": {"lighting": "blue-hour-ambient"}
        }))?;
        assert_eq!(input.overrides.get("lighting"), Some("blue-hour-ambient"));
        assert_eq!(input.overrides.get("mood"), None);

        let user: UserContext = serde_json::from_value(json!({"trigger": "ohwx"}))?;
        assert_eq!(user.trigger, "ohwx");
        assert!(user.styles.is_empty());
        assert!(user.weight.is_none());
        Ok(())
    }
}
