/// Hard ceiling on whitespace-delimited tokens in the positive prompt.
pub const MAX_PROMPT_TOKENS: usize = 120;

const PART_SEPARATOR: &str = "; ";

/// The nine prompt sections, declared in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptParts {
    pub identity: String,
    pub identity_lock: String,
    pub pose: String,
    pub composition: String,
    pub lighting: String,
    pub environment: String,
    pub wardrobe: String,
    pub mood_atmosphere: String,
    pub technical_suffix: String,
}

impl PromptParts {
    fn ordered(&self) -> [&str; 9] {
        [
            self.identity.as_str(),
            self.identity_lock.as_str(),
            self.pose.as_str(),
            self.composition.as_str(),
            self.lighting.as_str(),
            self.environment.as_str(),
            self.wardrobe.as_str(),
            self.mood_atmosphere.as_str(),
            self.technical_suffix.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    pub text: String,
    pub token_count: usize,
}

/// Joins non-blank parts with `"; "`, squeezes whitespace and repeated
/// separators, then keeps the first [`MAX_PROMPT_TOKENS`] tokens.
///
/// The cut is a plain prefix of the token stream and may land mid-phrase.
pub fn assemble(parts: &PromptParts) -> AssembledPrompt {
    let joined = parts
        .ordered()
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR);

    let squeezed = collapse_repeats(&collapse_repeats(&joined, ';'), ',');
    let tokens: Vec<&str> = squeezed
        .split_whitespace()
        .take(MAX_PROMPT_TOKENS)
        .collect();

    AssembledPrompt {
        token_count: tokens.len(),
        text: tokens.join(" "),
    }
}

/// Folds runs of `mark` (whitespace between repeats included) into one.
fn collapse_repeats(text: &str, mark: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if ch == mark && out.ends_with(mark) {
            pending_space = false;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{assemble, PromptParts, MAX_PROMPT_TOKENS};

    fn parts() -> PromptParts {
        PromptParts {
            identity: "ohwx woman".to_string(),
            identity_lock: "clear facial structure".to_string(),
            pose: "leaning on a railing".to_string(),
            composition: "medium shot".to_string(),
            lighting: "golden backlight".to_string(),
            environment: "rooftop terrace".to_string(),
            wardrobe: "wearing linen".to_string(),
            mood_atmosphere: "warm and relaxed".to_string(),
            technical_suffix: "photorealistic".to_string(),
        }
    }

    #[test]
    fn parts_join_in_fixed_order() {
        let prompt = assemble(&parts());
        assert_eq!(
            prompt.text,
            "ohwx woman; clear facial structure; leaning on a railing; medium shot; \
             golden backlight; rooftop terrace; wearing linen; warm and relaxed; photorealistic"
        );
        assert_eq!(prompt.token_count, prompt.text.split_whitespace().count());
    }

    #[test]
    fn blank_parts_are_skipped() {
        let mut input = parts();
        input.pose = "   ".to_string();
        input.wardrobe.clear();
        let prompt = assemble(&input);
        assert!(prompt.text.contains("clear facial structure; medium shot"));
        assert!(prompt.text.contains("rooftop terrace; warm and relaxed"));
        assert!(!prompt.text.contains(";;"));
    }

    #[test]
    fn repeated_separators_and_whitespace_collapse() {
        let input = PromptParts {
            identity: "ohwx   woman;".to_string(),
            pose: "soft ,, natural".to_string(),
            technical_suffix: "sharp\n\tfocus".to_string(),
            ..PromptParts::default()
        };
        assert_eq!(assemble(&input).text, "ohwx woman; soft , natural; sharp focus");
    }

    #[test]
    fn long_input_is_cut_to_exactly_the_token_ceiling() {
        let words: Vec<String> = (0..200).map(|idx| format!("w{idx}")).collect();
        let input = PromptParts {
            environment: words.join(" "),
            technical_suffix: "never reached".to_string(),
            ..PromptParts::default()
        };
        let prompt = assemble(&input);
        assert_eq!(prompt.token_count, MAX_PROMPT_TOKENS);
        assert_eq!(prompt.text, words[..MAX_PROMPT_TOKENS].join(" "));
    }

    #[test]
    fn empty_parts_give_an_empty_prompt() {
        let prompt = assemble(&PromptParts::default());
        assert!(prompt.text.is_empty());
        assert_eq!(prompt.token_count, 0);
    }
}
