use std::collections::BTreeMap;

use serde_json::Value;

use super::command_registry::{
    CommandSpec, CATALOG_COMMAND, LIST_COMMANDS, NO_ARG_COMMANDS, OVERRIDE_COMMANDS,
    QUOTED_LIST_COMMANDS, RAW_ARG_COMMANDS, WEIGHT_COMMAND,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Intent {
    pub action: String,
    pub raw: String,
    pub brief: Option<String>,
    pub command_args: BTreeMap<String, Value>,
}

impl Intent {
    fn new(action: &str, raw: &str) -> Self {
        Self {
            action: action.to_string(),
            raw: raw.to_string(),
            brief: None,
            command_args: BTreeMap::new(),
        }
    }

    fn with_arg(mut self, key: &str, value: Value) -> Self {
        self.command_args.insert(key.to_string(), value);
        self
    }
}

fn find_action(command: &str, specs: &[CommandSpec]) -> Option<&'static str> {
    specs
        .iter()
        .find(|spec| spec.command == command)
        .map(|spec| spec.action)
}

fn parse_comma_list(arg: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for part in arg
        .replace(';', ",")
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        if !items.iter().any(|item| item.eq_ignore_ascii_case(part)) {
            items.push(part.to_string());
        }
    }
    items
}

fn parse_quoted_list(arg: &str) -> Vec<String> {
    if arg.trim().is_empty() {
        return Vec::new();
    }
    match shell_words::split(arg) {
        Ok(parts) => parts
            .into_iter()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect(),
        Err(_) => parse_comma_list(arg),
    }
}

fn optional_string(arg: &str) -> Value {
    if arg.is_empty() {
        Value::Null
    } else {
        Value::String(arg.to_string())
    }
}

fn string_list(items: Vec<String>) -> Value {
    Value::Array(items.into_iter().map(Value::String).collect())
}

/// Turns one chat line into an [`Intent`]. Lines that are not slash
/// commands are creative briefs.
pub fn parse_intent(text: &str) -> Intent {
    let raw_trimmed = text.trim();
    if raw_trimmed.is_empty() {
        return Intent::new("noop", text);
    }

    if let Some(slash_tail) = raw_trimmed.strip_prefix('/') {
        let command_len = slash_tail
            .chars()
            .take_while(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
            .count();
        if command_len > 0 {
            let command = slash_tail[..command_len].to_ascii_lowercase();
            let arg = slash_tail[command_len..].trim();

            if let Some(slot) = find_action(&command, OVERRIDE_COMMANDS) {
                return Intent::new("set_override", text)
                    .with_arg("slot", Value::String(slot.to_string()))
                    .with_arg("value", optional_string(arg));
            }

            if let Some(action) = find_action(&command, RAW_ARG_COMMANDS) {
                return Intent::new(action, text).with_arg("value", optional_string(arg));
            }

            if let Some(action) = find_action(&command, LIST_COMMANDS) {
                return Intent::new(action, text)
                    .with_arg("values", string_list(parse_comma_list(arg)));
            }

            if let Some(action) = find_action(&command, QUOTED_LIST_COMMANDS) {
                return Intent::new(action, text)
                    .with_arg("values", string_list(parse_quoted_list(arg)));
            }

            if command == WEIGHT_COMMAND.command {
                let value = arg
                    .parse::<f64>()
                    .ok()
                    .filter(|weight| weight.is_finite() && *weight > 0.0)
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null);
                return Intent::new(WEIGHT_COMMAND.action, text).with_arg("value", value);
            }

            if command == CATALOG_COMMAND.command {
                return Intent::new(CATALOG_COMMAND.action, text)
                    .with_arg("dimension", optional_string(arg));
            }

            if let Some(action) = find_action(&command, NO_ARG_COMMANDS) {
                return Intent::new(action, text);
            }

            return Intent::new("unknown", text)
                .with_arg("command", Value::String(command))
                .with_arg("arg", Value::String(arg.to_string()));
        }
    }

    let mut intent = Intent::new("direct", text);
    intent.brief = Some(raw_trimmed.to_string());
    intent
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::parse_intent;

    #[test]
    fn plain_text_is_a_brief() {
        let intent = parse_intent("  golden hour rooftop in Paris  ");
        assert_eq!(intent.action, "direct");
        assert_eq!(intent.brief.as_deref(), Some("golden hour rooftop in Paris"));
    }

    #[test]
    fn blank_line_is_noop() {
        assert_eq!(parse_intent("   ").action, "noop");
    }

    #[test]
    fn override_commands_name_their_slot() {
        let mood = parse_intent("/mood golden-warmth");
        assert_eq!(mood.action, "set_override");
        assert_eq!(mood.command_args["slot"], json!("mood"));
        assert_eq!(mood.command_args["value"], json!("golden-warmth"));

        let scene = parse_intent("/scene beach-sunset-walk");
        assert_eq!(scene.command_args["slot"], json!("scenario"));

        let tone = parse_intent("/tone playful");
        assert_eq!(tone.command_args["slot"], json!("emotional_tone"));
    }

    #[test]
    fn outfit_keeps_free_text() {
        let outfit = parse_intent("/outfit red satin gown with opera gloves");
        assert_eq!(outfit.command_args["slot"], json!("outfit"));
        assert_eq!(
            outfit.command_args["value"],
            json!("red satin gown with opera gloves")
        );
    }

    #[test]
    fn override_without_argument_clears_slot() {
        let intent = parse_intent("/lighting");
        assert_eq!(intent.action, "set_override");
        assert_eq!(intent.command_args["value"], Value::Null);
    }

    #[test]
    fn list_commands_split_and_dedup() {
        let styles = parse_intent("/style old money, Parisian; parisian");
        assert_eq!(styles.action, "set_styles");
        assert_eq!(styles.command_args["values"], json!(["old money", "Parisian"]));

        let palette = parse_intent("/palette camel, cream");
        assert_eq!(palette.action, "set_palette");
        assert_eq!(palette.command_args["values"], json!(["camel", "cream"]));
    }

    #[test]
    fn features_accept_quoted_phrases() {
        let intent = parse_intent("/features \"long wavy hair\" freckles \"green eyes\"");
        assert_eq!(intent.action, "set_features");
        assert_eq!(
            intent.command_args["values"],
            json!(["long wavy hair", "freckles", "green eyes"])
        );
    }

    #[test]
    fn features_fall_back_to_commas_on_unbalanced_quotes() {
        let intent = parse_intent("/features \"long hair, freckles");
        assert_eq!(intent.command_args["values"], json!(["\"long hair", "freckles"]));
    }

    #[test]
    fn weight_must_be_a_positive_number() {
        assert_eq!(parse_intent("/weight 0.85").command_args["value"], json!(0.85));
        assert_eq!(parse_intent("/weight heavy").command_args["value"], Value::Null);
        assert_eq!(parse_intent("/weight -1").command_args["value"], Value::Null);
    }

    #[test]
    fn profile_and_catalog_commands() {
        let trigger = parse_intent("/trigger ohwx_user");
        assert_eq!(trigger.action, "set_trigger");
        assert_eq!(trigger.command_args["value"], json!("ohwx_user"));

        let catalog = parse_intent("/catalog lighting");
        assert_eq!(catalog.action, "catalog");
        assert_eq!(catalog.command_args["dimension"], json!("lighting"));
        assert_eq!(parse_intent("/catalog").command_args["dimension"], Value::Null);
    }

    #[test]
    fn no_arg_commands() {
        assert_eq!(parse_intent("/clear").action, "clear_overrides");
        assert_eq!(parse_intent("/forget").action, "forget_history");
        assert_eq!(parse_intent("/HELP").action, "help");
        assert_eq!(parse_intent("/exit").action, "quit");
    }

    #[test]
    fn parse_unknown_command() {
        let intent = parse_intent("/magic foo bar");
        assert_eq!(intent.action, "unknown");
        assert_eq!(intent.command_args["command"], json!("magic"));
        assert_eq!(intent.command_args["arg"], json!("foo bar"));
    }
}
