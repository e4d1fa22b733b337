use std::path::Path;

use serde_json::{Map, Value};

use crate::direction::{ConceptInput, DirectionResult, UserContext};

pub const RECEIPT_SCHEMA_VERSION: u64 = 1;

/// Receipt payload for one direction: what was asked and what came out.
pub fn build_receipt(
    session: &str,
    user: &UserContext,
    concept: &ConceptInput,
    result: &DirectionResult,
    receipt_path: &Path,
) -> anyhow::Result<Value> {
    let mut root = Map::new();
    root.insert(
        "schema_version".to_string(),
        Value::Number(RECEIPT_SCHEMA_VERSION.into()),
    );
    root.insert(
        "direction_id".to_string(),
        Value::String(result.direction_id.clone()),
    );
    root.insert("session".to_string(), Value::String(session.to_string()));

    let mut request = Map::new();
    request.insert("user_context".to_string(), redact_user(user)?);
    request.insert("concept".to_string(), serde_json::to_value(concept)?);
    root.insert("request".to_string(), Value::Object(request));

    root.insert("profile".to_string(), serde_json::to_value(&result.profile)?);
    root.insert("prompt".to_string(), serde_json::to_value(&result.prompt)?);
    root.insert(
        "creative_direction".to_string(),
        serde_json::to_value(&result.creative_direction)?,
    );
    root.insert(
        "applied_modules".to_string(),
        serde_json::to_value(&result.applied_modules)?,
    );

    let mut artifacts = Map::new();
    artifacts.insert(
        "receipt_path".to_string(),
        Value::String(receipt_path.to_string_lossy().to_string()),
    );
    root.insert("artifacts".to_string(), Value::Object(artifacts));
    Ok(Value::Object(root))
}

pub fn write_receipt(path: &Path, payload: &Value) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(payload)?)?;
    Ok(())
}

pub fn receipt_file_name(direction_id: &str) -> String {
    format!("receipt-{direction_id}.json")
}

// Ethnicity never leaves the process in an artifact; only its presence is kept.
fn redact_user(user: &UserContext) -> anyhow::Result<Value> {
    let mut value = serde_json::to_value(user)?;
    if let Value::Object(map) = &mut value {
        if let Some(slot) = map.get_mut("ethnicity") {
            if !slot.is_null() {
                *slot = Value::String("<omitted>".to_string());
            }
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{build_receipt, receipt_file_name, write_receipt, RECEIPT_SCHEMA_VERSION};
    use crate::concept::SemanticProfile;
    use crate::direction::{
        AppliedModules, ConceptInput, CreativeDirection, DirectionResult, PromptPair,
        UserContext,
    };

    fn sample_result() -> DirectionResult {
        DirectionResult {
            direction_id: "abc123".to_string(),
            profile: SemanticProfile::default(),
            prompt: PromptPair {
                final_prompt: "ohwx woman; soft light".to_string(),
                negative_prompt: "blurry, lowres".to_string(),
                token_count: 4,
            },
            creative_direction: CreativeDirection::default(),
            applied_modules: AppliedModules {
                mood: "golden-warmth".to_string(),
                ..AppliedModules::default()
            },
        }
    }

    #[test]
    fn receipt_builder_writes_expected_shape() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let receipt_path = temp.path().join(receipt_file_name("abc123"));
        let user = UserContext {
            trigger: "ohwx".to_string(),
            ethnicity: Some("declared".to_string()),
            ..UserContext::default()
        };
        let concept = ConceptInput::new("golden rooftop");

        let payload = build_receipt("session-1", &user, &concept, &sample_result(), &receipt_path)?;
        write_receipt(&receipt_path, &payload)?;

        let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&receipt_path)?)?;
        assert_eq!(parsed["schema_version"], json!(RECEIPT_SCHEMA_VERSION));
        assert_eq!(parsed["direction_id"], json!("abc123"));
        assert_eq!(parsed["request"]["concept"]["brief"], json!("golden rooftop"));
        assert_eq!(parsed["request"]["user_context"]["trigger"], json!("ohwx"));
        assert_eq!(parsed["request"]["user_context"]["ethnicity"], json!("<omitted>"));
        assert_eq!(parsed["prompt"]["negative_prompt"], json!("blurry, lowres"));
        assert_eq!(parsed["applied_modules"]["mood"], json!("golden-warmth"));
        assert_eq!(
            parsed["artifacts"]["receipt_path"],
            json!(receipt_path.to_string_lossy())
        );
        Ok(())
    }

    #[test]
    fn absent_ethnicity_stays_null() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let payload = build_receipt(
            "session-1",
            &UserContext::default(),
            &ConceptInput::default(),
            &sample_result(),
            &temp.path().join("r.json"),
        )?;
        assert_eq!(payload["request"]["user_context"]["ethnicity"], Value::Null);
        Ok(())
    }
}
