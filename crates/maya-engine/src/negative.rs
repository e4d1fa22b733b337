use maya_contracts::catalog::normalize_key;
use serde::{Deserialize, Serialize};

pub const BASE_NEGATIVES: &[&str] = &[
    "blurry",
    "lowres",
    "deformed hands",
    "extra fingers",
    "distorted face",
    "bad anatomy",
    "watermark",
    "text",
    "oversaturated",
    "plastic skin",
];

/// Keyed on fragments of the composition name. Earlier rows win.
const SCENE_NEGATIVES: &[(&str, &[&str])] = &[
    ("selfie", &["phone covering face", "warped mirror", "distorted arm"]),
    ("close-up", &["cropped forehead", "asymmetrical eyes", "over-smoothed skin"]),
    ("full-length", &["cropped feet", "elongated legs", "distorted proportions"]),
    ("full-body", &["cropped feet", "stiff pose", "distorted proportions"]),
    ("wide", &["tiny subject", "cluttered background", "warped perspective"]),
    ("environmental", &["cluttered background", "distracting crowd"]),
    ("portrait", &["cropped head", "cross-eyed", "unnatural skin tone"]),
];

/// Keyed on fragments of the mood name. Earlier rows win.
const MOOD_NEGATIVES: &[(&str, &[&str])] = &[
    ("night", &["blown highlights", "muddy shadows", "color noise"]),
    ("moody", &["flat lighting", "washed out colors"]),
    ("calm", &["harsh shadows", "cluttered background"]),
    ("cozy", &["cold color cast", "sterile setting"]),
    ("soft", &["harsh contrast", "hard shadows"]),
    ("glam", &["smudged makeup", "dull skin"]),
    ("golden", &["cool color cast", "overexposed sky"]),
    ("editorial", &["amateur snapshot", "cluttered styling"]),
];

const FALLBACK_SCENE: &str = "portrait";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegativePrompt {
    pub base: Vec<String>,
    pub context: Vec<String>,
}

impl NegativePrompt {
    pub fn term_count(&self) -> usize {
        self.base.len() + self.context.len()
    }

    pub fn to_prompt_string(&self) -> String {
        self.base
            .iter()
            .chain(&self.context)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Base exclusions plus the terms keyed by the chosen composition and mood
/// names. Names are compared in kebab-case, so display names and keys both
/// work.
pub fn compose(composition_name: &str, mood_name: &str) -> NegativePrompt {
    let scene = lookup(SCENE_NEGATIVES, &normalize_key(composition_name));
    let mood = lookup(MOOD_NEGATIVES, &normalize_key(mood_name));

    let mut context: Vec<String> = Vec::new();
    let picked: Vec<&[&str]> = match (scene, mood) {
        (None, None) => lookup(SCENE_NEGATIVES, FALLBACK_SCENE).into_iter().collect(),
        (scene, mood) => scene.into_iter().chain(mood).collect(),
    };
    for term in picked.into_iter().flatten() {
        if !context.iter().any(|existing| existing == term) {
            context.push(term.to_string());
        }
    }

    NegativePrompt {
        base: BASE_NEGATIVES.iter().map(|term| term.to_string()).collect(),
        context,
    }
}

fn lookup(
    table: &[(&str, &'static [&'static str])],
    name: &str,
) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(fragment, _)| name.contains(fragment))
        .map(|(_, terms)| *terms)
}
