use std::collections::BTreeSet;

use super::keyword_tables::{
    KeywordRule, AESTHETIC_RULES, ENERGY_RULES, ENVIRONMENT_FALLBACK_RULES, LOCATION_RULES,
    MATERIAL_RULES, OBJECT_RULES, SCENE_RULES, TIME_RULES,
};
use super::profile::SemanticProfile;

/// Reads a free-text brief into a [`SemanticProfile`].
///
/// Each field is an independent pass over the same normalized text, so one
/// word can feed several fields (`"selfie"` is both a candid aesthetic and a
/// phone prop). Single-valued fields take the first matching row of their
/// ordered table; anything unmatched keeps the profile default.
pub fn analyze(text: &str) -> SemanticProfile {
    let haystack = normalize_for_match(text);

    let core_scene = first_match(&haystack, SCENE_RULES);
    let environment = match core_scene {
        Some(scene) => scene.environment(),
        None => first_match(&haystack, ENVIRONMENT_FALLBACK_RULES).unwrap_or_default(),
    };

    SemanticProfile {
        core_scene,
        environment,
        time_of_day: first_match(&haystack, TIME_RULES).unwrap_or_default(),
        energy: all_matches(&haystack, ENERGY_RULES),
        aesthetic: all_matches(&haystack, AESTHETIC_RULES),
        location: first_match(&haystack, LOCATION_RULES),
        materials: all_matches(&haystack, MATERIAL_RULES),
        objects: all_matches(&haystack, OBJECT_RULES),
        raw_keywords: tokenize(text),
    }
}

/// Lower-cased whitespace tokens with surrounding punctuation stripped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .trim_matches(|ch: char| !ch.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// True when `term` occurs in `text` on word boundaries. A trailing plural
/// `s` on the text side still counts as a hit.
pub fn contains_term(text: &str, term: &str) -> bool {
    let haystack = normalize_for_match(text);
    haystack_contains(&haystack, term)
}

fn first_match<T: Copy>(haystack: &str, rules: &[KeywordRule<T>]) -> Option<T> {
    rules
        .iter()
        .find(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| haystack_contains(haystack, keyword))
        })
        .map(|rule| rule.result)
}

fn all_matches<T: Copy + Ord>(haystack: &str, rules: &[KeywordRule<T>]) -> BTreeSet<T> {
    rules
        .iter()
        .filter(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| haystack_contains(haystack, keyword))
        })
        .map(|rule| rule.result)
        .collect()
}

fn haystack_contains(haystack: &str, term: &str) -> bool {
    let needle = normalize_for_match(term);
    let needle = needle.trim();
    if needle.is_empty() {
        return false;
    }
    haystack.contains(&format!(" {needle} ")) || haystack.contains(&format!(" {needle}s "))
}

/// Lower-cases, turns every non-alphanumeric run into one space and pads the
/// result so that word-boundary checks reduce to substring checks.
fn normalize_for_match(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(' ');
    let mut last_space = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            last_space = false;
        } else if !last_space {
            out.push(' ');
            last_space = true;
        }
    }
    if !last_space {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{analyze, contains_term, tokenize};
    use crate::concept::profile::{
        Aesthetic, CoreScene, Energy, Environment, Location, Material, SceneObject, TimeOfDay,
    };

    #[test]
    fn cozy_morning_in_bed_reads_as_bedroom() {
        let profile = analyze("cozy morning coffee in bed with a book");
        assert_eq!(profile.core_scene, Some(CoreScene::Bedroom));
        assert_eq!(profile.environment, Environment::IndoorsCozy);
        assert_eq!(profile.time_of_day, TimeOfDay::Morning);
        assert!(profile.has_energy(Energy::Calm));
        assert!(profile.objects.contains(&SceneObject::Coffee));
        assert!(profile.objects.contains(&SceneObject::Book));
    }

    #[test]
    fn dramatic_elevator_selfie_at_night() {
        let profile = analyze("dramatic elevator selfie at night");
        assert_eq!(profile.core_scene, Some(CoreScene::Elevator));
        assert_eq!(profile.environment, Environment::IndoorsMetal);
        assert_eq!(profile.time_of_day, TimeOfDay::Night);
        assert!(profile.has_energy(Energy::Dramatic));
        assert!(profile.has_aesthetic(Aesthetic::Candid));
    }

    #[test]
    fn empty_text_yields_defaults() {
        let profile = analyze("");
        assert_eq!(profile.core_scene, None);
        assert_eq!(profile.environment, Environment::IndoorsNeutral);
        assert_eq!(profile.time_of_day, TimeOfDay::Daytime);
        assert!(profile.energy.is_empty());
        assert!(profile.aesthetic.is_empty());
        assert!(profile.raw_keywords.is_empty());
    }

    #[test]
    fn earlier_scene_group_wins_ties() {
        // "car" is declared ahead of "beach".
        let profile = analyze("driving my car along the beach");
        assert_eq!(profile.core_scene, Some(CoreScene::Car));
        assert_eq!(profile.environment, Environment::Vehicle);
    }

    #[test]
    fn environment_falls_back_to_generic_keywords() {
        let profile = analyze("walking through the city lights");
        assert_eq!(profile.core_scene, None);
        assert_eq!(profile.environment, Environment::OutdoorsUrban);
    }

    #[test]
    fn golden_hour_outranks_morning() {
        let profile = analyze("sunrise morning stretch");
        assert_eq!(profile.time_of_day, TimeOfDay::GoldenHour);
    }

    #[test]
    fn one_word_can_feed_multiple_fields() {
        let profile = analyze("dark velvet evening in Paris");
        assert!(profile.has_energy(Energy::Mysterious));
        assert!(profile.has_aesthetic(Aesthetic::Moody));
        assert!(profile.materials.contains(&Material::Velvet));
        assert_eq!(profile.location, Some(Location::Paris));
        assert_eq!(profile.time_of_day, TimeOfDay::Night);
    }

    #[test]
    fn keyword_matching_respects_word_boundaries() {
        assert!(contains_term("Two beds, one view", "bed"));
        assert!(!contains_term("embedded lights", "bed"));
        assert!(contains_term("old-money weekend", "old money"));
        assert!(!contains_term("barcelona nights", "bar"));
    }

    #[test]
    fn tokenize_strips_punctuation_and_lowercases() {
        assert_eq!(
            tokenize("  Rooftop, GOLDEN hour!  "),
            vec!["rooftop", "golden", "hour"]
        );
    }
}
