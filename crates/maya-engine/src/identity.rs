use maya_contracts::concept::contains_term;
use maya_contracts::direction::UserContext;

pub const IDENTITY_BASELINE: [&str; 3] = [
    "clear facial structure",
    "recognizable features",
    "consistent likeness",
];

/// Caller features kept after filtering.
pub const MAX_IDENTITY_FEATURES: usize = 4;

/// Descriptors that would rewrite who the subject is rather than describe them.
pub const IDENTITY_DENY_TERMS: &[&str] = &[
    "age",
    "aged",
    "years old",
    "year old",
    "race",
    "racial",
    "ethnic",
    "ethnicity",
    "skin tone",
    "skin color",
    "skin colour",
    "complexion",
    "face shape",
    "younger",
    "older",
];

/// Identity-preservation phrase for the prompt.
///
/// Features that mention a denied term, or restate the declared gender or
/// ethnicity, are dropped without error.
pub fn build_identity_lock(
    features: &[String],
    gender: Option<&str>,
    ethnicity: Option<&str>,
) -> String {
    let declared: Vec<&str> = [gender, ethnicity]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect();

    let mut kept: Vec<&str> = Vec::new();
    for feature in features.iter().map(|feature| feature.trim()) {
        if kept.len() == MAX_IDENTITY_FEATURES {
            break;
        }
        if feature.is_empty()
            || kept.iter().any(|item| item.eq_ignore_ascii_case(feature))
            || IDENTITY_DENY_TERMS
                .iter()
                .any(|term| contains_term(feature, term))
            || declared.iter().any(|term| contains_term(feature, term))
        {
            continue;
        }
        kept.push(feature);
    }

    IDENTITY_BASELINE
        .iter()
        .copied()
        .chain(kept)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Subject noun for the declared gender.
pub fn subject_noun(gender: Option<&str>) -> &'static str {
    let normalized = gender.map(|value| value.trim().to_ascii_lowercase());
    match normalized.as_deref() {
        Some("female" | "woman" | "f" | "girl" | "she") => "woman",
        Some("male" | "man" | "m" | "boy" | "he") => "man",
        _ => "person",
    }
}

/// Trigger token, weighted when the caller asks for a non-unit weight,
/// followed by the subject noun.
pub fn identity_phrase(user: &UserContext) -> String {
    let noun = subject_noun(user.gender.as_deref());
    let trigger = user.trigger.trim();
    if trigger.is_empty() {
        return noun.to_string();
    }
    match user.weight.filter(|weight| weight.is_finite() && *weight > 0.0) {
        Some(weight) if (weight - 1.0).abs() > f64::EPSILON => {
            format!("({trigger}:{weight}) {noun}")
        }
        _ => format!("{trigger} {noun}"),
    }
}

#[cfg(test)]
mod tests {
    use maya_contracts::direction::UserContext;

    use super::{build_identity_lock, identity_phrase, subject_noun};

    fn features(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn baseline_only_without_features() {
        assert_eq!(
            build_identity_lock(&[], None, None),
            "clear facial structure; recognizable features; consistent likeness"
        );
    }

    #[test]
    fn deny_listed_features_are_dropped() {
        let lock = build_identity_lock(
            &features(&[
                "long wavy hair",
                "looks younger",
                "olive skin tone",
                "oval face shape",
                "aged 30",
                "freckles",
            ]),
            None,
            None,
        );
        assert_eq!(
            lock,
            "clear facial structure; recognizable features; consistent likeness; \
             long wavy hair; freckles"
        );
    }

    #[test]
    fn deny_terms_match_words_not_fragments() {
        let lock = build_identity_lock(&features(&["sage green eyes", "gold bracelet"]), None, None);
        assert!(lock.contains("sage green eyes"));
        assert!(lock.contains("gold bracelet"));
    }

    #[test]
    fn at_most_four_features_survive() {
        let lock = build_identity_lock(
            &features(&["a1", "b2", "c3", "d4", "e5", "A1"]),
            None,
            None,
        );
        assert!(lock.ends_with("a1; b2; c3; d4"));
    }

    #[test]
    fn declared_identity_is_not_restated() {
        let lock = build_identity_lock(
            &features(&["Korean features", "dimples", "feminine jawline"]),
            Some("feminine"),
            Some("korean"),
        );
        assert!(lock.ends_with("consistent likeness; dimples"));
    }

    #[test]
    fn identity_phrase_weights_trigger() {
        let mut user = UserContext {
            trigger: "ohwx".to_string(),
            gender: Some("Female".to_string()),
            ..UserContext::default()
        };
        assert_eq!(identity_phrase(&user), "ohwx woman");
        user.weight = Some(1.0);
        assert_eq!(identity_phrase(&user), "ohwx woman");
        user.weight = Some(0.85);
        assert_eq!(identity_phrase(&user), "(ohwx:0.85) woman");
        user.trigger.clear();
        assert_eq!(identity_phrase(&user), "woman");
    }

    #[test]
    fn unknown_gender_is_a_person() {
        assert_eq!(subject_noun(None), "person");
        assert_eq!(subject_noun(Some("non-binary")), "person");
        assert_eq!(subject_noun(Some(" MALE ")), "man");
    }
}
