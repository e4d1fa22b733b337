use serde::Serialize;

use super::registry::CatalogBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodBlock {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub emotion: &'static str,
    pub expression: &'static str,
    pub atmosphere: &'static str,
    pub color_grade: &'static str,
    pub keywords: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightingBlock {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub angle: &'static str,
    pub softness: &'static str,
    pub shadows: &'static str,
    pub texture: &'static str,
    pub skin_treatment: &'static str,
    pub keywords: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompositionBlock {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub framing: &'static str,
    pub camera_angle: &'static str,
    pub lens: &'static str,
    pub depth_of_field: &'static str,
    pub keywords: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioBlock {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub setting: &'static str,
    pub environment_detail: &'static str,
    pub props: &'static str,
    pub keywords: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoseBlock {
    pub category: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub scenario_affinity: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FashionBlock {
    pub category: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub scenario_affinity: &'static [&'static str],
    pub materials: &'static [&'static str],
    pub palette: &'static str,
}

/// A declared personal aesthetic the style blend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalStyle {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub wardrobe: &'static [&'static str],
}

impl CatalogBlock for MoodBlock {
    fn key(&self) -> &'static str {
        self.key
    }

    fn tags(&self) -> &'static [&'static str] {
        self.tags
    }
}

impl CatalogBlock for LightingBlock {
    fn key(&self) -> &'static str {
        self.key
    }

    fn tags(&self) -> &'static [&'static str] {
        self.tags
    }
}

impl CatalogBlock for CompositionBlock {
    fn key(&self) -> &'static str {
        self.key
    }

    fn tags(&self) -> &'static [&'static str] {
        self.tags
    }
}

impl CatalogBlock for ScenarioBlock {
    fn key(&self) -> &'static str {
        self.key
    }

    fn tags(&self) -> &'static [&'static str] {
        self.tags
    }
}

impl CatalogBlock for PoseBlock {
    fn key(&self) -> &'static str {
        self.category
    }
}

impl CatalogBlock for FashionBlock {
    fn key(&self) -> &'static str {
        self.category
    }
}

impl CatalogBlock for PersonalStyle {
    fn key(&self) -> &'static str {
        self.key
    }
}
