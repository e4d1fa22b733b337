mod blocks;
mod composition;
mod fashion;
mod lighting;
mod mood;
mod pose;
mod registry;
mod scenario;
mod styles;

use anyhow::Result;

pub use blocks::{
    CompositionBlock, FashionBlock, LightingBlock, MoodBlock, PersonalStyle, PoseBlock,
    ScenarioBlock,
};
pub use composition::{COMPOSITION_BLOCKS, DEFAULT_COMPOSITION};
pub use fashion::{DEFAULT_FASHION, FASHION_BLOCKS};
pub use lighting::{DEFAULT_LIGHTING, LIGHTING_BLOCKS};
pub use mood::{DEFAULT_MOOD, MOOD_BLOCKS};
pub use pose::{DEFAULT_POSE, POSE_BLOCKS};
pub use registry::{normalize_key, CatalogBlock, Dimension, DimensionCatalog};
pub use scenario::{DEFAULT_SCENARIO, SCENARIO_BLOCKS};
pub use styles::{PERSONAL_STYLES, TRENDING_LOOKS};

/// All dimension libraries, validated once and shared read-only.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub mood: DimensionCatalog<MoodBlock>,
    pub lighting: DimensionCatalog<LightingBlock>,
    pub composition: DimensionCatalog<CompositionBlock>,
    pub scenario: DimensionCatalog<ScenarioBlock>,
    pub pose: DimensionCatalog<PoseBlock>,
    pub fashion: DimensionCatalog<FashionBlock>,
}

impl Catalogs {
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            mood: DimensionCatalog::new(Dimension::Mood, MOOD_BLOCKS, DEFAULT_MOOD)?,
            lighting: DimensionCatalog::new(Dimension::Lighting, LIGHTING_BLOCKS, DEFAULT_LIGHTING)?,
            composition: DimensionCatalog::new(
                Dimension::Composition,
                COMPOSITION_BLOCKS,
                DEFAULT_COMPOSITION,
            )?,
            scenario: DimensionCatalog::new(Dimension::Scenario, SCENARIO_BLOCKS, DEFAULT_SCENARIO)?,
            pose: DimensionCatalog::new(Dimension::Pose, POSE_BLOCKS, DEFAULT_POSE)?,
            fashion: DimensionCatalog::new(Dimension::Fashion, FASHION_BLOCKS, DEFAULT_FASHION)?,
        })
    }

    /// Keys of one dimension in declaration order.
    pub fn keys(&self, dimension: Dimension) -> Vec<&'static str> {
        match dimension {
            Dimension::Mood => self.mood.keys(),
            Dimension::Lighting => self.lighting.keys(),
            Dimension::Composition => self.composition.keys(),
            Dimension::Scenario => self.scenario.keys(),
            Dimension::Pose => self.pose.keys(),
            Dimension::Fashion => self.fashion.keys(),
        }
    }
}

pub fn find_personal_style(raw: &str) -> Option<&'static PersonalStyle> {
    let key = normalize_key(raw);
    PERSONAL_STYLES.iter().find(|style| {
        style.key == key
            || style
                .aliases
                .iter()
                .any(|alias| normalize_key(alias) == key)
    })
}
