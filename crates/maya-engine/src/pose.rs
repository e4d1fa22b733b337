use maya_contracts::catalog::{DimensionCatalog, PoseBlock};
use maya_contracts::history::AntiRepetitionMemory;

use crate::scoring::keywords_overlap;

pub const POSE_AFFINITY_POINTS: u32 = 5;
pub const POSE_KEYWORD_POINTS: u32 = 2;

#[derive(Debug, Clone, Copy)]
pub struct PosePick {
    pub block: &'static PoseBlock,
    pub score: u32,
    /// True when nothing matched and the catalog default was used.
    pub defaulted: bool,
}

/// Affinity substring match in either direction against the scenario key.
pub(crate) fn affinity_matches(affinity: &[&str], scenario_key: &str) -> bool {
    affinity
        .iter()
        .any(|entry| keywords_overlap(entry, scenario_key))
}

pub fn score_pose(block: &PoseBlock, scenario_key: &str, keywords: &[String]) -> u32 {
    let affinity = if affinity_matches(block.scenario_affinity, scenario_key) {
        POSE_AFFINITY_POINTS
    } else {
        0
    };
    let overlaps = block
        .keywords
        .iter()
        .filter(|own| keywords.iter().any(|word| keywords_overlap(own, word)))
        .count() as u32;
    affinity + overlaps * POSE_KEYWORD_POINTS
}

/// Picks the best pose for a scenario. With `memory`, recently used poses
/// leave the pool unless that would empty it, and the winner is remembered.
pub fn select_pose(
    catalog: &DimensionCatalog<PoseBlock>,
    scenario_key: &str,
    keywords: &[String],
    memory: Option<&mut AntiRepetitionMemory>,
) -> PosePick {
    let pool: Vec<&'static PoseBlock> = match memory.as_deref() {
        Some(memory) => {
            let fresh: Vec<&'static PoseBlock> = catalog
                .iter()
                .filter(|block| !memory.contains(block.category))
                .collect();
            if fresh.is_empty() {
                catalog.iter().collect()
            } else {
                fresh
            }
        }
        None => catalog.iter().collect(),
    };

    let mut best: Option<PosePick> = None;
    for block in pool {
        let score = score_pose(block, scenario_key, keywords);
        if best.map_or(true, |current| score > current.score) {
            best = Some(PosePick {
                block,
                score,
                defaulted: false,
            });
        }
    }

    let pick = match best {
        Some(pick) if pick.score > 0 => pick,
        _ => PosePick {
            block: catalog.default_block(),
            score: 0,
            defaulted: true,
        },
    };
    if let Some(memory) = memory {
        memory.remember(pick.block.category);
    }
    pick
}

#[cfg(test)]
mod tests {
    use maya_contracts::catalog::Catalogs;
    use maya_contracts::history::AntiRepetitionMemory;

    use super::{score_pose, select_pose, POSE_AFFINITY_POINTS};

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn affinity_outweighs_a_single_keyword() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let pick = select_pose(&catalogs.pose, "elevator-mirror-moment", &[], None);
        assert_eq!(pick.block.category, "mirror-selfie-hip-pop");
        assert_eq!(pick.score, POSE_AFFINITY_POINTS);
        Ok(())
    }

    #[test]
    fn keywords_break_affinity_ties() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let pick = select_pose(&catalogs.pose, "bedroom-cozy", &words(&["book", "sheets"]), None);
        assert_eq!(pick.block.category, "lying-in-bed-reading");
        Ok(())
    }

    #[test]
    fn no_match_returns_default_pose() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let pick = select_pose(&catalogs.pose, "moon-base", &words(&["zero-gravity"]), None);
        assert_eq!(pick.block.category, "relaxed-natural-stance");
        assert!(pick.defaulted);
        Ok(())
    }

    #[test]
    fn keyword_overlap_counts_each_pose_keyword_once() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let (block, _) = catalogs.pose.resolve("cup-in-both-hands");
        let once = score_pose(block, "studio-seamless", &words(&["coffee"]));
        let twice = score_pose(block, "studio-seamless", &words(&["coffee", "coffee"]));
        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn memory_rotates_poses_when_enabled() -> anyhow::Result<()> {
        let catalogs = Catalogs::builtin()?;
        let mut memory = AntiRepetitionMemory::new();
        let first = select_pose(&catalogs.pose, "elevator-mirror-moment", &[], Some(&mut memory));
        let second = select_pose(&catalogs.pose, "elevator-mirror-moment", &[], Some(&mut memory));
        assert_ne!(first.block.category, second.block.category);
        assert!(memory.contains(first.block.category));
        assert!(memory.contains(second.block.category));
        Ok(())
    }
}
