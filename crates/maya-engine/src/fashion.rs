use maya_contracts::catalog::{DimensionCatalog, FashionBlock};
use maya_contracts::history::AntiRepetitionMemory;

use crate::pose::affinity_matches;
use crate::scoring::keywords_overlap;

pub const FASHION_AFFINITY_POINTS: u32 = 5;
pub const FASHION_KEYWORD_POINTS: u32 = 2;
pub const FASHION_PALETTE_POINTS: u32 = 3;

/// Key recorded for a free-text outfit override.
pub const CUSTOM_WARDROBE_KEY: &str = "custom";

/// What the subject wears: a catalog look, or the caller's own words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WardrobeChoice {
    Catalog(&'static FashionBlock),
    Custom(String),
}

impl WardrobeChoice {
    pub fn key(&self) -> &str {
        match self {
            WardrobeChoice::Catalog(block) => block.category,
            WardrobeChoice::Custom(_) => CUSTOM_WARDROBE_KEY,
        }
    }

    /// Prompt phrase for the wardrobe slot.
    pub fn phrase(&self) -> String {
        match self {
            WardrobeChoice::Catalog(block) => {
                format!("wearing {}, {}", block.description, block.palette)
            }
            WardrobeChoice::Custom(text) => format!("wearing {text}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FashionPick {
    pub choice: WardrobeChoice,
    pub score: u32,
    pub requested: Option<String>,
    /// How many categories the memory kept out of the pool.
    pub excluded: usize,
}

pub fn score_fashion(
    block: &FashionBlock,
    scenario_key: &str,
    keywords: &[String],
    palette: &[String],
) -> u32 {
    let mut score = 0;
    if affinity_matches(block.scenario_affinity, scenario_key) {
        score += FASHION_AFFINITY_POINTS;
    }
    let overlaps = block
        .keywords
        .iter()
        .chain(block.scenario_affinity.iter())
        .filter(|own| keywords.iter().any(|word| keywords_overlap(own, word)))
        .count() as u32;
    score += overlaps * FASHION_KEYWORD_POINTS;

    let block_palette = block.palette.to_lowercase();
    let palette_hit = palette
        .iter()
        .map(|color| color.trim().to_lowercase())
        .any(|color| !color.is_empty() && block_palette.contains(&color));
    if palette_hit {
        score += FASHION_PALETTE_POINTS;
    }
    score
}

/// Ranks the wardrobe catalog for a scenario.
///
/// With `memory`, categories picked in the recent window are left out of the
/// pool; if that leaves nothing, this call ranks the full catalog instead.
/// The winner is pushed onto the memory, which keeps only its newest entries.
pub fn select_fashion(
    catalog: &DimensionCatalog<FashionBlock>,
    scenario_key: &str,
    keywords: &[String],
    palette: &[String],
    memory: Option<&mut AntiRepetitionMemory>,
) -> FashionPick {
    let all: Vec<&'static FashionBlock> = catalog.iter().collect();
    let fresh: Vec<&'static FashionBlock> = match memory.as_deref() {
        Some(memory) => all
            .iter()
            .copied()
            .filter(|block| !memory.contains(block.category))
            .collect(),
        None => all.clone(),
    };
    let pool = if fresh.is_empty() { &all } else { &fresh };
    let excluded = all.len() - pool.len();

    let mut best: Option<(&'static FashionBlock, u32)> = None;
    for block in pool.iter().copied() {
        let score = score_fashion(block, scenario_key, keywords, palette);
        if best.map_or(true, |(_, current)| score > current) {
            best = Some((block, score));
        }
    }
    let (block, score) = best.unwrap_or((catalog.default_block(), 0));

    if let Some(memory) = memory {
        memory.remember(block.category);
    }
    FashionPick {
        choice: WardrobeChoice::Catalog(block),
        score,
        requested: None,
        excluded,
    }
}

/// Honors an explicit outfit request. A catalog key is used as is and
/// remembered; anything else is taken as the caller's own wardrobe text.
pub fn resolve_outfit_override(
    catalog: &DimensionCatalog<FashionBlock>,
    requested: &str,
    memory: Option<&mut AntiRepetitionMemory>,
) -> FashionPick {
    let choice = match catalog.get(requested) {
        Some(block) => {
            if let Some(memory) = memory {
                memory.remember(block.category);
            }
            WardrobeChoice::Catalog(block)
        }
        None => WardrobeChoice::Custom(requested.trim().to_string()),
    };
    FashionPick {
        choice,
        score: 0,
        requested: Some(requested.to_string()),
        excluded: 0,
    }
}

#[cfg(test)]
mod tests {
    use maya_contracts::catalog::{Catalogs, Dimension, DimensionCatalog, FASHION_BLOCKS};
    use maya_contracts::history::{AntiRepetitionMemory, SelectionHistory, MEMORY_WINDOW};
    use serde_json::json;

    use super::{
        resolve_outfit_override, score_fashion, select_fashion, WardrobeChoice,
        FASHION_PALETTE_POINTS,
    };

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn scenario_affinity_leads_selection() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let keywords = words(&["workout"]);
        let pick = select_fashion(&catalogs.fashion, "gym-mirror-grind", &keywords, &[], None);
        assert_eq!(pick.choice.key(), "matching-athleisure-set");
        Ok(())
    }

    #[test]
    fn palette_match_adds_points() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let (block, _) = catalogs.fashion.resolve("quiet-luxury-knit");
        let plain = score_fashion(block, "studio-seamless", &[], &[]);
        let with_palette = score_fashion(block, "studio-seamless", &[], &words(&[" Camel "]));
        assert_eq!(with_palette, plain + FASHION_PALETTE_POINTS);
        assert_eq!(score_fashion(block, "studio-seamless", &[], &words(&[""])), plain);
        Ok(())
    }

    #[test]
    fn memory_excludes_recent_picks() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let mut memory = AntiRepetitionMemory::new();
        let keywords = words(&["workout"]);
        let first = select_fashion(
            &catalogs.fashion,
            "gym-mirror-grind",
            &keywords,
            &[],
            Some(&mut memory),
        );
        let second = select_fashion(
            &catalogs.fashion,
            "gym-mirror-grind",
            &keywords,
            &[],
            Some(&mut memory),
        );
        assert_ne!(first.choice.key(), second.choice.key());
        assert_eq!(second.excluded, 1);
        Ok(())
    }

    #[test]
    fn nine_repeated_picks_keep_the_window_bounded() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let mut memory = AntiRepetitionMemory::new();
        let keywords = words(&["linen", "beach"]);
        let mut picks = Vec::new();
        for _ in 0..9 {
            let pick = select_fashion(
                &catalogs.fashion,
                "beach-sunset-walk",
                &keywords,
                &[],
                Some(&mut memory),
            );
            assert!(pick.excluded <= MEMORY_WINDOW);
            assert!(memory.len() <= MEMORY_WINDOW);
            picks.push(pick);
        }
        assert_eq!(memory.len(), MEMORY_WINDOW);
        assert_eq!(picks[8].excluded, MEMORY_WINDOW);
        let first_eight: Vec<&str> = picks[..8].iter().map(|pick| pick.choice.key()).collect();
        assert!(!first_eight.contains(&picks[8].choice.key()));
        Ok(())
    }

    #[test]
    fn stored_history_excludes_at_most_one_window() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let stored: Vec<&str> = catalogs.fashion.keys().into_iter().skip(1).collect();
        assert!(stored.len() > MEMORY_WINDOW);
        let mut history: SelectionHistory = serde_json::from_value(json!({"fashion": stored}))?;
        assert_eq!(history.fashion.len(), MEMORY_WINDOW);

        let pick = select_fashion(
            &catalogs.fashion,
            "beach-sunset-walk",
            &[],
            &[],
            Some(&mut history.fashion),
        );
        assert_eq!(pick.excluded, MEMORY_WINDOW);
        assert_eq!(history.fashion.len(), MEMORY_WINDOW);
        Ok(())
    }

    #[test]
    fn exhausted_pool_falls_back_to_full_catalog() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let mut memory = AntiRepetitionMemory::new();
        for key in catalogs.fashion.keys().into_iter().take(MEMORY_WINDOW) {
            memory.remember(key);
        }
        let tiny = DimensionCatalog::new(
            Dimension::Fashion,
            &FASHION_BLOCKS[..2],
            "quiet-luxury-knit",
        )?;
        let pick = select_fashion(&tiny, "cafe-window-seat", &[], &[], Some(&mut memory));
        assert_eq!(pick.excluded, 0);
        assert_eq!(pick.choice.key(), "quiet-luxury-knit");
        Ok(())
    }

    #[test]
    fn disabled_memory_repeats_the_best_look() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let keywords = words(&["workout"]);
        let first = select_fashion(&catalogs.fashion, "gym-mirror-grind", &keywords, &[], None);
        let second = select_fashion(&catalogs.fashion, "gym-mirror-grind", &keywords, &[], None);
        assert_eq!(first.choice, second.choice);
        Ok(())
    }

    #[test]
    fn outfit_override_accepts_keys_and_free_text() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let mut memory = AntiRepetitionMemory::new();

        let known = resolve_outfit_override(&catalogs.fashion, "Linen Resort", Some(&mut memory));
        assert_eq!(known.choice.key(), "linen-resort");
        assert!(memory.contains("linen-resort"));

        let custom =
            resolve_outfit_override(&catalogs.fashion, " red velvet gown ", Some(&mut memory));
        assert_eq!(custom.choice, WardrobeChoice::Custom("red velvet gown".to_string()));
        assert_eq!(custom.choice.key(), "custom");
        assert_eq!(custom.choice.phrase(), "wearing red velvet gown");
        assert_eq!(memory.len(), 1);
        Ok(())
    }
}
