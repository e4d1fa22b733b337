use maya_contracts::catalog::{find_personal_style, PERSONAL_STYLES, TRENDING_LOOKS};
use maya_contracts::direction::StyleBlendBlock;

/// Merges the declared personal styles with the head of the trending list.
///
/// Recognized styles are walked in catalog order, so the result does not
/// depend on input order and repeating a style changes nothing. Unknown
/// names are dropped.
pub fn blend(styles: &[String], trending_slice: usize) -> StyleBlendBlock {
    let requested: Vec<&'static str> = styles
        .iter()
        .filter_map(|raw| find_personal_style(raw))
        .map(|style| style.key)
        .collect();

    let mut out = StyleBlendBlock::default();
    for style in PERSONAL_STYLES
        .iter()
        .filter(|style| requested.contains(&style.key))
    {
        out.styles.push(style.key.to_string());
        extend_unique(&mut out.keywords, style.keywords);
        extend_unique(&mut out.colors, style.colors);
        extend_unique(&mut out.wardrobe, style.wardrobe);
    }
    let take = trending_slice.min(TRENDING_LOOKS.len());
    out.trending = TRENDING_LOOKS[..take]
        .iter()
        .map(|look| look.to_string())
        .collect();
    out
}

/// Wardrobe-slot phrase for a blend; empty when no style was recognized.
pub fn style_phrase(block: &StyleBlendBlock) -> String {
    if block.is_empty() {
        return String::new();
    }
    let keywords = block.keywords.iter().take(3).cloned().collect::<Vec<_>>();
    let colors = block.colors.iter().take(3).cloned().collect::<Vec<_>>();
    format!(
        "{} styling in {} tones",
        keywords.join(", "),
        colors.join(", ")
    )
}

fn extend_unique(target: &mut Vec<String>, items: &[&str]) {
    for item in items {
        if !target.iter().any(|existing| existing == item) {
            target.push(item.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{blend, style_phrase};

    fn styles(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn repeating_a_style_is_idempotent() {
        assert_eq!(
            blend(&styles(&["minimalist", "minimalist"]), 3),
            blend(&styles(&["minimalist"]), 3)
        );
    }

    #[test]
    fn blend_is_order_independent() {
        assert_eq!(
            blend(&styles(&["boho", "Old Money"]), 3),
            blend(&styles(&["quiet luxury", "bohemian"]), 3)
        );
    }

    #[test]
    fn shared_entries_are_deduplicated() {
        let out = blend(&styles(&["old-money", "minimalist"]), 3);
        assert_eq!(out.styles, vec!["old-money", "minimalist"]);
        let trousers = out
            .wardrobe
            .iter()
            .filter(|item| item.as_str() == "tailored trousers")
            .count();
        assert_eq!(trousers, 1);
        let understated = out
            .keywords
            .iter()
            .filter(|item| item.as_str() == "understated")
            .count();
        assert_eq!(understated, 1);
    }

    #[test]
    fn unknown_styles_are_dropped_but_trending_stays() {
        let out = blend(&styles(&["cottagecore"]), 3);
        assert!(out.styles.is_empty());
        assert!(out.colors.is_empty());
        assert_eq!(out.trending.len(), 3);
        assert_eq!(out.trending[0], "butter yellow accents");
    }

    #[test]
    fn style_phrase_reads_the_leading_entries() {
        assert_eq!(style_phrase(&blend(&[], 3)), "");
        assert_eq!(
            style_phrase(&blend(&styles(&["old money"]), 3)),
            "refined, heritage, understated styling in camel, cream, navy tones"
        );
    }

    #[test]
    fn trending_slice_is_clamped() {
        assert_eq!(blend(&[], 0).trending.len(), 0);
        assert_eq!(blend(&[], 50).trending.len(), 6);
    }
}
