use std::collections::BTreeSet;

use maya_contracts::catalog::{
    CatalogBlock, CompositionBlock, Dimension, DimensionCatalog, LightingBlock, MoodBlock,
    ScenarioBlock,
};
use maya_contracts::concept::{
    Aesthetic, CoreScene, Energy, Environment, SemanticProfile, TimeOfDay,
};
use maya_contracts::direction::SelectionExplanation;

/// Below this the profile-aware lighting pick is a weak guess and the
/// context heuristic decides instead.
pub const LIGHTING_CONFIDENCE_GATE: u32 = 5;

/// A scenario needs at least one profile tag plus a raw hit to beat the
/// default apartment setting.
pub const SCENARIO_MIN_SCORE: u32 = 3;

/// Points for a block tag that is present in the profile tag set.
pub const TAG_MATCH_POINTS: u32 = 2;

/// Points for a block tag that only shows up among the raw brief tokens.
pub const RAW_KEYWORD_POINTS: u32 = 1;

/// Nudge for the user's preferred mood. Smaller than a scene bonus so a
/// strong brief still wins.
pub const PREFERRED_MOOD_POINTS: u32 = 4;

/// Profile field that triggers a hand-tuned bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSignal {
    Energy(Energy),
    Aesthetic(Aesthetic),
    Time(TimeOfDay),
    Environment(Environment),
    Scene(CoreScene),
}

impl ProfileSignal {
    fn fires(&self, profile: &SemanticProfile) -> bool {
        match self {
            ProfileSignal::Energy(energy) => profile.has_energy(*energy),
            ProfileSignal::Aesthetic(aesthetic) => profile.has_aesthetic(*aesthetic),
            ProfileSignal::Time(time) => profile.time_of_day == *time,
            ProfileSignal::Environment(environment) => profile.environment == *environment,
            ProfileSignal::Scene(scene) => profile.core_scene == Some(*scene),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProfileBonus {
    pub signal: ProfileSignal,
    pub block: &'static str,
    pub points: u32,
}

const fn bonus(signal: ProfileSignal, block: &'static str, points: u32) -> ProfileBonus {
    ProfileBonus {
        signal,
        block,
        points,
    }
}

use ProfileSignal::{Aesthetic as A, Energy as E, Environment as Env, Scene as S, Time as T};

pub const MOOD_BONUSES: &[ProfileBonus] = &[
    bonus(E(Energy::Mysterious), "moody-night-energy", 3),
    bonus(E(Energy::Dramatic), "cinematic-melancholy", 2),
    bonus(E(Energy::Dramatic), "moody-night-energy", 2),
    bonus(E(Energy::Confident), "confident-power", 3),
    bonus(E(Energy::Playful), "playful-candid-joy", 3),
    bonus(E(Energy::Calm), "quiet-luxury-calm", 2),
    bonus(E(Energy::Calm), "cozy-intimate-softness", 2),
    bonus(E(Energy::Romantic), "golden-warmth", 2),
    bonus(E(Energy::Romantic), "cozy-intimate-softness", 1),
    bonus(E(Energy::Energetic), "sun-drenched-freedom", 2),
    bonus(E(Energy::Energetic), "glam-after-dark", 1),
    bonus(E(Energy::Tired), "cozy-intimate-softness", 3),
    bonus(A(Aesthetic::Luxury), "quiet-luxury-calm", 3),
    bonus(A(Aesthetic::Editorial), "clean-editorial-poise", 3),
    bonus(A(Aesthetic::CleanMinimal), "clean-editorial-poise", 2),
    bonus(A(Aesthetic::Cinematic), "cinematic-melancholy", 3),
    bonus(A(Aesthetic::Moody), "moody-night-energy", 2),
    bonus(A(Aesthetic::Glossy), "glam-after-dark", 2),
    bonus(A(Aesthetic::Candid), "playful-candid-joy", 2),
    bonus(T(TimeOfDay::GoldenHour), "golden-warmth", 3),
    bonus(T(TimeOfDay::Night), "moody-night-energy", 1),
    bonus(T(TimeOfDay::Night), "glam-after-dark", 1),
    bonus(Env(Environment::Coastal), "sun-drenched-freedom", 2),
    bonus(Env(Environment::IndoorsCozy), "cozy-intimate-softness", 1),
];

pub const LIGHTING_BONUSES: &[ProfileBonus] = &[
    bonus(T(TimeOfDay::GoldenHour), "golden-hour-backlight", 5),
    bonus(T(TimeOfDay::BlueHour), "blue-hour-ambient", 5),
    bonus(T(TimeOfDay::Night), "neon-night-glow", 2),
    bonus(T(TimeOfDay::Night), "candlelight-warm", 1),
    bonus(T(TimeOfDay::Midday), "harsh-midday-sun", 3),
    bonus(T(TimeOfDay::Morning), "window-natural", 2),
    bonus(Env(Environment::Studio), "soft-studio-key", 5),
    bonus(Env(Environment::Vehicle), "car-window-daylight", 5),
    bonus(Env(Environment::IndoorsMetal), "overhead-practical-mix", 3),
    bonus(A(Aesthetic::Glossy), "hard-flash-editorial", 2),
    bonus(A(Aesthetic::Editorial), "hard-flash-editorial", 1),
    bonus(A(Aesthetic::Editorial), "soft-studio-key", 1),
    bonus(A(Aesthetic::Moody), "neon-night-glow", 2),
    bonus(E(Energy::Romantic), "candlelight-warm", 2),
    bonus(S(CoreScene::Elevator), "overhead-practical-mix", 2),
    bonus(S(CoreScene::Restaurant), "candlelight-warm", 2),
];

pub const COMPOSITION_BONUSES: &[ProfileBonus] = &[
    bonus(S(CoreScene::Elevator), "mirror-selfie-full-length", 4),
    bonus(S(CoreScene::Gym), "mirror-selfie-full-length", 3),
    bonus(S(CoreScene::Bathroom), "mirror-selfie-full-length", 2),
    bonus(S(CoreScene::Car), "car-window-frame", 4),
    bonus(S(CoreScene::Street), "walking-full-body", 3),
    bonus(S(CoreScene::Bedroom), "overhead-lifestyle", 2),
    bonus(S(CoreScene::Cafe), "seated-lifestyle-medium", 3),
    bonus(S(CoreScene::Restaurant), "seated-lifestyle-medium", 3),
    bonus(Env(Environment::OutdoorsNature), "environmental-wide", 3),
    bonus(Env(Environment::Coastal), "environmental-wide", 2),
    bonus(E(Energy::Confident), "low-angle-power", 2),
    bonus(E(Energy::Playful), "over-the-shoulder-candid", 2),
    bonus(A(Aesthetic::Editorial), "editorial-three-quarter", 2),
    bonus(A(Aesthetic::CleanMinimal), "close-up-portrait", 2),
    bonus(A(Aesthetic::Candid), "over-the-shoulder-candid", 1),
];

pub const SCENARIO_BONUSES: &[ProfileBonus] = &[
    bonus(S(CoreScene::Elevator), "elevator-mirror-moment", 6),
    bonus(S(CoreScene::Car), "car-passenger-seat", 6),
    bonus(S(CoreScene::Gym), "gym-mirror-grind", 6),
    bonus(S(CoreScene::Bathroom), "bathroom-vanity-glow", 6),
    bonus(S(CoreScene::Bedroom), "bedroom-cozy", 6),
    bonus(S(CoreScene::Kitchen), "kitchen-morning-ritual", 6),
    bonus(S(CoreScene::Cafe), "cafe-window-seat", 6),
    bonus(S(CoreScene::Restaurant), "restaurant-dinner-date", 6),
    bonus(S(CoreScene::Office), "home-office-focus", 6),
    bonus(S(CoreScene::Library), "library-quiet-corner", 6),
    bonus(S(CoreScene::Hotel), "luxury-hotel-suite", 6),
    bonus(S(CoreScene::Airport), "airport-lounge-travel", 6),
    bonus(S(CoreScene::Studio), "studio-seamless", 6),
    bonus(S(CoreScene::Rooftop), "rooftop-golden-skyline", 6),
    bonus(S(CoreScene::Pool), "poolside-lounge", 6),
    bonus(S(CoreScene::Yacht), "yacht-deck-escape", 6),
    bonus(S(CoreScene::Beach), "beach-sunset-walk", 6),
    bonus(S(CoreScene::Garden), "garden-bloom", 6),
    bonus(S(CoreScene::Forest), "forest-trail", 6),
    bonus(S(CoreScene::Mountain), "forest-trail", 6),
    bonus(S(CoreScene::Desert), "desert-dunes", 6),
    bonus(S(CoreScene::Street), "city-street-stroll", 6),
    bonus(T(TimeOfDay::Night), "neon-night-out", 2),
    bonus(A(Aesthetic::Moody), "neon-night-out", 1),
];

/// Tag overlap between one block and the profile.
pub fn tag_score(
    block_tags: &[&str],
    profile_tags: &BTreeSet<&'static str>,
    raw_keywords: &[String],
) -> u32 {
    block_tags
        .iter()
        .map(|tag| {
            if profile_tags.contains(tag) {
                TAG_MATCH_POINTS
            } else if raw_keywords.iter().any(|word| word == tag) {
                RAW_KEYWORD_POINTS
            } else {
                0
            }
        })
        .sum()
}

pub fn profile_score(block_key: &str, bonuses: &[ProfileBonus], profile: &SemanticProfile) -> u32 {
    bonuses
        .iter()
        .filter(|row| row.block == block_key && row.signal.fires(profile))
        .map(|row| row.points)
        .sum()
}

#[derive(Debug, Clone, Copy)]
pub struct Scored<B: 'static> {
    pub block: &'static B,
    pub score: u32,
}

/// Every block scored, best first. The sort is stable, so equal scores keep
/// catalog declaration order.
pub fn rank<B: CatalogBlock>(
    catalog: &DimensionCatalog<B>,
    profile: &SemanticProfile,
    bonuses: &[ProfileBonus],
) -> Vec<Scored<B>> {
    let tags = profile.tags();
    let mut scored: Vec<Scored<B>> = catalog
        .iter()
        .map(|block| Scored {
            block,
            score: tag_score(block.tags(), &tags, &profile.raw_keywords)
                + profile_score(block.key(), bonuses, profile),
        })
        .collect();
    scored.sort_by(|left, right| right.score.cmp(&left.score));
    scored
}

/// The outcome for one dimension, with enough context to explain it.
#[derive(Debug, Clone)]
pub struct Selection<B: 'static> {
    pub block: &'static B,
    pub score: u32,
    pub requested: Option<String>,
    pub fallback_reason: Option<String>,
}

impl<B: CatalogBlock> Selection<B> {
    fn scored(block: &'static B, score: u32) -> Self {
        Self {
            block,
            score,
            requested: None,
            fallback_reason: None,
        }
    }

    fn fallback(block: &'static B, score: u32, reason: String) -> Self {
        Self {
            block,
            score,
            requested: None,
            fallback_reason: Some(reason),
        }
    }

    pub fn explain(&self, dimension: Dimension) -> SelectionExplanation {
        SelectionExplanation {
            dimension,
            key: self.block.key().to_string(),
            score: self.score,
            requested: self.requested.clone(),
            fallback_reason: self.fallback_reason.clone(),
        }
    }
}

/// An explicit override wins outright. Unknown keys land on the default block.
fn resolve_override<B: CatalogBlock>(
    catalog: &DimensionCatalog<B>,
    requested: &str,
) -> Selection<B> {
    let (block, found) = catalog.resolve(requested);
    let fallback_reason = (!found).then(|| {
        format!(
            "Requested {} '{requested}' is not in the catalog; using default '{}'.",
            catalog.dimension(),
            block.key()
        )
    });
    Selection {
        block,
        score: 0,
        requested: Some(requested.to_string()),
        fallback_reason,
    }
}

fn top_or_default<B: CatalogBlock>(
    catalog: &DimensionCatalog<B>,
    ranked: &[Scored<B>],
) -> Selection<B> {
    match ranked.first() {
        Some(top) if top.score > 0 => Selection::scored(top.block, top.score),
        _ => Selection::fallback(
            catalog.default_block(),
            0,
            format!(
                "No {} signal in brief; using default '{}'.",
                catalog.dimension(),
                catalog.default_block().key()
            ),
        ),
    }
}

pub fn select_mood(
    catalog: &DimensionCatalog<MoodBlock>,
    profile: &SemanticProfile,
    requested: Option<&str>,
    preferred: Option<&str>,
) -> Selection<MoodBlock> {
    if let Some(requested) = requested {
        return resolve_override(catalog, requested);
    }
    let mut ranked = rank(catalog, profile, MOOD_BONUSES);
    if let Some(preferred) = preferred.and_then(|key| catalog.get(key)) {
        for entry in &mut ranked {
            if entry.block.key == preferred.key {
                entry.score += PREFERRED_MOOD_POINTS;
            }
        }
        ranked.sort_by(|left, right| right.score.cmp(&left.score));
    }
    top_or_default(catalog, &ranked)
}

pub fn select_composition(
    catalog: &DimensionCatalog<CompositionBlock>,
    profile: &SemanticProfile,
    requested: Option<&str>,
) -> Selection<CompositionBlock> {
    if let Some(requested) = requested {
        return resolve_override(catalog, requested);
    }
    top_or_default(catalog, &rank(catalog, profile, COMPOSITION_BONUSES))
}

pub fn select_scenario(
    catalog: &DimensionCatalog<ScenarioBlock>,
    profile: &SemanticProfile,
    requested: Option<&str>,
) -> Selection<ScenarioBlock> {
    if let Some(requested) = requested {
        return resolve_override(catalog, requested);
    }
    let ranked = rank(catalog, profile, SCENARIO_BONUSES);
    match ranked.first() {
        Some(top) if top.score >= SCENARIO_MIN_SCORE => Selection::scored(top.block, top.score),
        top => Selection::fallback(
            catalog.default_block(),
            top.map(|entry| entry.score).unwrap_or(0),
            format!(
                "Best scenario scored below {SCENARIO_MIN_SCORE}; using default '{}'.",
                catalog.default_block().key
            ),
        ),
    }
}

pub fn select_lighting(
    catalog: &DimensionCatalog<LightingBlock>,
    profile: &SemanticProfile,
    requested: Option<&str>,
) -> Selection<LightingBlock> {
    if let Some(requested) = requested {
        return resolve_override(catalog, requested);
    }
    let ranked = rank(catalog, profile, LIGHTING_BONUSES);
    let top_score = ranked.first().map(|entry| entry.score).unwrap_or(0);
    match ranked.first() {
        Some(top) if top.score >= LIGHTING_CONFIDENCE_GATE => {
            Selection::scored(top.block, top.score)
        }
        _ if top_score == 0 => Selection::fallback(
            catalog.default_block(),
            0,
            format!(
                "No lighting signal in brief; using default '{}'.",
                catalog.default_block().key
            ),
        ),
        _ => {
            let (block, _) = catalog.resolve(lighting_from_context(profile));
            Selection::fallback(
                block,
                top_score,
                format!(
                    "Top lighting score {top_score} is below {LIGHTING_CONFIDENCE_GATE}; \
                     using context pick '{}'.",
                    block.key
                ),
            )
        }
    }
}

/// Time of day first, then environment.
fn lighting_from_context(profile: &SemanticProfile) -> &'static str {
    match profile.time_of_day {
        TimeOfDay::GoldenHour => return "golden-hour-backlight",
        TimeOfDay::BlueHour => return "blue-hour-ambient",
        TimeOfDay::Night if profile.environment.is_outdoors() => return "neon-night-glow",
        TimeOfDay::Night => return "overhead-practical-mix",
        _ => {}
    }
    match profile.environment {
        Environment::Studio => "soft-studio-key",
        Environment::Vehicle => "car-window-daylight",
        env if env.is_outdoors() && profile.time_of_day == TimeOfDay::Midday => {
            "harsh-midday-sun"
        }
        env if env.is_outdoors() => "overcast-diffused",
        _ => "window-natural",
    }
}

/// Words from the brief and the chosen scenario that pose and wardrobe
/// matching may use. Short tokens and filler words are dropped.
pub fn selection_keywords(profile: &SemanticProfile, scenario: &ScenarioBlock) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let candidates = profile
        .raw_keywords
        .iter()
        .map(String::as_str)
        .chain(scenario.keywords.iter().copied());
    for word in candidates {
        let word = word.trim().to_lowercase();
        if word.chars().count() < 3 || STOPWORDS.contains(&word.as_str()) {
            continue;
        }
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

const STOPWORDS: &[&str] = &[
    "the", "and", "with", "for", "from", "into", "onto", "over", "under", "her", "his",
    "their", "she", "him", "them", "this", "that", "these", "those", "very", "some", "just",
    "like", "while", "then", "than", "was", "are", "were", "been", "being", "has", "have",
    "had", "but", "not", "all", "any", "out", "off", "about", "photo", "shot", "picture",
    "image", "wearing", "make", "want",
];

/// Case-insensitive substring match in either direction.
pub fn keywords_overlap(left: &str, right: &str) -> bool {
    let left = left.trim().to_lowercase();
    let right = right.trim().to_lowercase();
    if left.is_empty() || right.is_empty() {
        return false;
    }
    left.contains(&right) || right.contains(&left)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use maya_contracts::catalog::{Catalogs, Dimension};
    use maya_contracts::concept::{analyze, SemanticProfile};

    use super::*;

    fn catalogs() -> Catalogs {
        match Catalogs::builtin() {
            Ok(catalogs) => catalogs,
            Err(err) => panic!("catalogs: {err:#}"),
        }
    }

    #[test]
    fn bonus_tables_reference_real_blocks() {
        let catalogs = catalogs();
        let tables: [(&[ProfileBonus], Dimension); 4] = [
            (MOOD_BONUSES, Dimension::Mood),
            (LIGHTING_BONUSES, Dimension::Lighting),
            (COMPOSITION_BONUSES, Dimension::Composition),
            (SCENARIO_BONUSES, Dimension::Scenario),
        ];
        for (table, dimension) in tables {
            let keys = catalogs.keys(dimension);
            for row in table {
                assert!(keys.contains(&row.block), "{dimension} has no '{}'", row.block);
            }
        }
    }

    #[test]
    fn adding_a_matching_tag_never_lowers_score() {
        let profile = analyze("moody rooftop at night");
        let tags = profile.tags();
        let base: &[&str] = &["luxury", "hotel"];
        for extra in tags.iter() {
            let mut extended: Vec<&str> = base.to_vec();
            extended.push(*extra);
            assert!(
                tag_score(&extended, &tags, &profile.raw_keywords)
                    > tag_score(base, &tags, &profile.raw_keywords)
            );
        }
    }

    #[test]
    fn raw_keywords_score_below_profile_tags() {
        let tags: BTreeSet<&'static str> = ["night"].into_iter().collect();
        let raw = vec!["velvet".to_string()];
        assert_eq!(tag_score(&["night"], &tags, &raw), TAG_MATCH_POINTS);
        assert_eq!(tag_score(&["velvet"], &tags, &raw), RAW_KEYWORD_POINTS);
        assert_eq!(tag_score(&["beach"], &tags, &raw), 0);
    }

    #[test]
    fn override_short_circuits_scoring() {
        let catalogs = catalogs();
        let profile = analyze("dramatic elevator selfie at night");
        let mood = select_mood(&catalogs.mood, &profile, Some("sun-drenched-freedom"), None);
        assert_eq!(mood.block.key, "sun-drenched-freedom");
        assert_eq!(mood.requested.as_deref(), Some("sun-drenched-freedom"));
        assert!(mood.fallback_reason.is_none());

        let lighting = select_lighting(&catalogs.lighting, &profile, Some("Candlelight Warm"));
        assert_eq!(lighting.block.key, "candlelight-warm");
    }

    #[test]
    fn unknown_override_resolves_to_default() {
        let catalogs = catalogs();
        let profile = analyze("beach at golden hour");
        let lighting = select_lighting(&catalogs.lighting, &profile, Some("laser-show"));
        assert_eq!(lighting.block.key, "window-natural");
        assert!(lighting.fallback_reason.is_some());

        let scenario = select_scenario(&catalogs.scenario, &profile, Some("moon-base"));
        assert_eq!(scenario.block.key, "apartment-lifestyle");
    }

    #[test]
    fn detected_scene_selects_its_scenario() {
        let catalogs = catalogs();
        let bedroom = analyze("cozy morning coffee in bed with a book");
        assert_eq!(
            select_scenario(&catalogs.scenario, &bedroom, None).block.key,
            "bedroom-cozy"
        );
        let elevator = analyze("dramatic elevator selfie at night");
        assert_eq!(
            select_scenario(&catalogs.scenario, &elevator, None).block.key,
            "elevator-mirror-moment"
        );
        assert_eq!(
            select_composition(&catalogs.composition, &elevator, None).block.key,
            "mirror-selfie-full-length"
        );
    }

    #[test]
    fn empty_brief_uses_defaults_for_scenario_and_lighting() {
        let catalogs = catalogs();
        let profile = analyze("");
        let scenario = select_scenario(&catalogs.scenario, &profile, None);
        assert_eq!(scenario.block.key, "apartment-lifestyle");
        let lighting = select_lighting(&catalogs.lighting, &profile, None);
        assert_eq!(lighting.block.key, "window-natural");
    }

    #[test]
    fn all_zero_lighting_is_window_natural_every_time() -> anyhow::Result<()> {
        let untagged =
            DimensionCatalog::new(Dimension::Lighting, UNTAGGED_LIGHTING, "window-natural")?;
        let profile = SemanticProfile::default();
        for _ in 0..3 {
            let selection = select_lighting(&untagged, &profile, None);
            assert_eq!(selection.block.key, "window-natural");
            assert_eq!(selection.score, 0);
            assert!(selection.fallback_reason.is_some());
        }
        assert_eq!(
            select_lighting(&catalogs().lighting, &profile, None).block.key,
            "window-natural"
        );
        Ok(())
    }

    #[test]
    fn weak_lighting_signal_uses_context_heuristic() {
        let catalogs = catalogs();
        let profile = SemanticProfile {
            environment: Environment::OutdoorsNature,
            ..SemanticProfile::default()
        };
        let selection = select_lighting(&catalogs.lighting, &profile, None);
        assert!(selection.score > 0 && selection.score < LIGHTING_CONFIDENCE_GATE);
        assert_eq!(selection.block.key, "overcast-diffused");
        assert!(selection.fallback_reason.is_some());
    }

    #[test]
    fn confident_lighting_skips_the_heuristic() {
        let catalogs = catalogs();
        let profile = analyze("rooftop at golden hour");
        let selection = select_lighting(&catalogs.lighting, &profile, None);
        assert_eq!(selection.block.key, "golden-hour-backlight");
        assert!(selection.score >= LIGHTING_CONFIDENCE_GATE);
        assert!(selection.fallback_reason.is_none());
    }

    #[test]
    fn context_heuristic_follows_environment_without_time_signal() {
        let mut profile = SemanticProfile::default();
        assert_eq!(lighting_from_context(&profile), "window-natural");
        profile.environment = Environment::Studio;
        assert_eq!(lighting_from_context(&profile), "soft-studio-key");
        profile.environment = Environment::OutdoorsNature;
        assert_eq!(lighting_from_context(&profile), "overcast-diffused");
        profile.time_of_day = TimeOfDay::Midday;
        assert_eq!(lighting_from_context(&profile), "harsh-midday-sun");
        profile.time_of_day = TimeOfDay::Night;
        assert_eq!(lighting_from_context(&profile), "neon-night-glow");
    }

    #[test]
    fn preferred_mood_nudges_but_does_not_override() {
        let catalogs = catalogs();
        let neutral = analyze("");
        let nudged = select_mood(&catalogs.mood, &neutral, None, Some("golden-warmth"));
        assert_eq!(nudged.block.key, "golden-warmth");
        assert!(nudged.requested.is_none());

        let unknown = select_mood(&catalogs.mood, &neutral, None, Some("zen-garden"));
        assert_eq!(
            unknown.block.key,
            select_mood(&catalogs.mood, &neutral, None, None).block.key
        );
    }

    #[test]
    fn ties_keep_declaration_order() {
        let catalogs = catalogs();
        let ranked = rank(&catalogs.scenario, &SemanticProfile::default(), &[]);
        let zero_keys: Vec<&str> = ranked
            .iter()
            .filter(|entry| entry.score == 0)
            .map(|entry| entry.block.key)
            .collect();
        let declared: Vec<&str> = catalogs
            .scenario
            .keys()
            .into_iter()
            .filter(|key| zero_keys.contains(key))
            .collect();
        assert!(!zero_keys.is_empty());
        assert_eq!(zero_keys, declared);
    }

    #[test]
    fn selection_keywords_filter_short_and_filler_words() {
        let catalogs = catalogs();
        let profile = analyze("me and a latte in the cafe");
        let (scenario, _) = catalogs.scenario.resolve("cafe-window-seat");
        let words = selection_keywords(&profile, scenario);
        assert!(words.contains(&"latte".to_string()));
        assert!(words.contains(&"window seat".to_string()));
        assert!(!words.iter().any(|word| word == "me" || word == "and" || word == "the"));
        let unique: BTreeSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), words.len());
    }

    #[test]
    fn overlap_is_bidirectional_and_case_insensitive() {
        assert!(keywords_overlap("Coffee", "coffee mug"));
        assert!(keywords_overlap("coffee mug", "COFFEE"));
        assert!(!keywords_overlap("", "coffee"));
        assert!(!keywords_overlap("tea", "coffee"));
    }

    const UNTAGGED_LIGHTING: &[LightingBlock] = &[LightingBlock {
        key: "window-natural",
        name: "Window Natural",
        description: "soft natural window light",
        angle: "side",
        softness: "soft",
        shadows: "gentle",
        texture: "natural",
        skin_treatment: "true-to-life",
        keywords: &[],
        tags: &[],
    }];
}
