use std::fmt;

use anyhow::{bail, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Mood,
    Lighting,
    Composition,
    Scenario,
    Pose,
    Fashion,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Mood,
        Dimension::Lighting,
        Dimension::Composition,
        Dimension::Scenario,
        Dimension::Pose,
        Dimension::Fashion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Mood => "mood",
            Dimension::Lighting => "lighting",
            Dimension::Composition => "composition",
            Dimension::Scenario => "scenario",
            Dimension::Pose => "pose",
            Dimension::Fashion => "fashion",
        }
    }

    pub fn from_key(raw: &str) -> Option<Dimension> {
        let key = raw.trim().to_ascii_lowercase();
        match key.as_str() {
            "outfit" | "wardrobe" => Some(Dimension::Fashion),
            "scene" => Some(Dimension::Scenario),
            _ => Dimension::ALL
                .into_iter()
                .find(|dimension| dimension.as_str() == key),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static catalog entry addressable by key.
pub trait CatalogBlock: fmt::Debug + 'static {
    fn key(&self) -> &'static str;

    /// Tags matched against a semantic profile. Blocks scored by other
    /// means (pose, fashion) keep the empty default.
    fn tags(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Keyed view over one dimension's blocks, preserving declaration order.
#[derive(Debug, Clone)]
pub struct DimensionCatalog<B: CatalogBlock> {
    dimension: Dimension,
    blocks: IndexMap<&'static str, &'static B>,
    default: &'static B,
}

impl<B: CatalogBlock> DimensionCatalog<B> {
    pub fn new(
        dimension: Dimension,
        blocks: &'static [B],
        default_key: &'static str,
    ) -> Result<Self> {
        let mut keyed = IndexMap::new();
        for block in blocks {
            if keyed.insert(block.key(), block).is_some() {
                bail!("duplicate {dimension} catalog key '{}'", block.key());
            }
        }
        let Some(default) = keyed.get(default_key).copied() else {
            bail!("{dimension} catalog has no default block '{default_key}'");
        };
        Ok(Self {
            dimension,
            blocks: keyed,
            default,
        })
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn get(&self, key: &str) -> Option<&'static B> {
        self.blocks.get(normalize_key(key).as_str()).copied()
    }

    /// Looks `key` up, resolving unknown keys to the default block.
    pub fn resolve(&self, key: &str) -> (&'static B, bool) {
        match self.get(key) {
            Some(block) => (block, true),
            None => (self.default, false),
        }
    }

    pub fn default_block(&self) -> &'static B {
        self.default
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static B> + '_ {
        self.blocks.values().copied()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.blocks.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Catalog keys are kebab-case; callers may pass display names.
pub fn normalize_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::{normalize_key, CatalogBlock, Dimension, DimensionCatalog};

    #[derive(Debug)]
    struct Dummy {
        key: &'static str,
    }

    impl CatalogBlock for Dummy {
        fn key(&self) -> &'static str {
            self.key
        }
    }

    const DUMMIES: &[Dummy] = &[Dummy { key: "b-first" }, Dummy { key: "a-second" }];
    const DUPLICATES: &[Dummy] = &[Dummy { key: "same" }, Dummy { key: "same" }];

    #[test]
    fn catalog_preserves_declaration_order() -> anyhow::Result<()> {
        let catalog = DimensionCatalog::new(Dimension::Mood, DUMMIES, "a-second")?;
        assert_eq!(catalog.keys(), vec!["b-first", "a-second"]);
        assert_eq!(catalog.default_block().key, "a-second");
        Ok(())
    }

    #[test]
    fn unknown_key_resolves_to_default() -> anyhow::Result<()> {
        let catalog = DimensionCatalog::new(Dimension::Mood, DUMMIES, "a-second")?;
        let (block, found) = catalog.resolve("missing");
        assert!(!found);
        assert_eq!(block.key, "a-second");
        let (block, found) = catalog.resolve("B First");
        assert!(found);
        assert_eq!(block.key, "b-first");
        Ok(())
    }

    #[test]
    fn catalog_rejects_missing_default_and_duplicates() {
        assert!(DimensionCatalog::new(Dimension::Pose, DUMMIES, "nope").is_err());
        assert!(DimensionCatalog::new(Dimension::Pose, DUPLICATES, "same").is_err());
    }

    #[test]
    fn normalize_key_kebab_cases_names() {
        assert_eq!(normalize_key("  Moody Night Energy "), "moody-night-energy");
        assert_eq!(normalize_key("Close-Up  Portrait!"), "close-up-portrait");
    }

    #[test]
    fn dimension_aliases() {
        assert_eq!(Dimension::from_key("Outfit"), Some(Dimension::Fashion));
        assert_eq!(Dimension::from_key("scene"), Some(Dimension::Scenario));
        assert_eq!(Dimension::from_key("lighting"), Some(Dimension::Lighting));
        assert_eq!(Dimension::from_key("tone"), None);
    }
}
