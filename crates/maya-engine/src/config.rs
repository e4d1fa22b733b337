use std::env;
use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};

const DEFAULT_DIRECTION_JSON: &str = include_str!("../resources/default_direction.json");
const FALLBACK_TECHNICAL_SUFFIX: &str = "photorealistic, high detail, sharp focus";
const FALLBACK_TRENDING_SLICE: usize = 3;

pub const CONFIG_ENV_VAR: &str = "MAYA_DIRECTION_CONFIG";

/// Which selectors consult and update the session's anti-repetition memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntiRepetitionPolicy {
    pub fashion: bool,
    pub pose: bool,
}

impl Default for AntiRepetitionPolicy {
    fn default() -> Self {
        Self {
            fashion: true,
            pose: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub anti_repetition: AntiRepetitionPolicy,
    pub technical_suffix: String,
    pub trending_slice: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_layers(&[DEFAULT_DIRECTION_JSON])
    }
}

impl EngineConfig {
    /// Embedded defaults merged with the user's override file, if any.
    pub fn load() -> Self {
        let mut layers = vec![DEFAULT_DIRECTION_JSON.to_string()];
        if let Some(path) = config_override_path() {
            if let Ok(raw) = fs::read_to_string(path) {
                layers.push(raw);
            }
        }
        let borrowed: Vec<&str> = layers.iter().map(String::as_str).collect();
        Self::from_layers(&borrowed)
    }

    /// Later layers win key by key. Layers that are not JSON objects are skipped.
    pub fn from_layers(layers: &[&str]) -> Self {
        let mut merged = Map::new();
        for raw in layers {
            merge_config_layer(&mut merged, raw);
        }
        Self::from_map(&merged)
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let defaults = AntiRepetitionPolicy::default();
        let policy = map.get("anti_repetition").and_then(Value::as_object);
        let toggle = |key: &str, default: bool| {
            policy
                .and_then(|row| row.get(key))
                .and_then(Value::as_bool)
                .unwrap_or(default)
        };
        Self {
            anti_repetition: AntiRepetitionPolicy {
                fashion: toggle("fashion", defaults.fashion),
                pose: toggle("pose", defaults.pose),
            },
            technical_suffix: map
                .get("technical_suffix")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or(FALLBACK_TECHNICAL_SUFFIX)
                .to_string(),
            trending_slice: map
                .get("trending_slice")
                .and_then(Value::as_u64)
                .and_then(|value| usize::try_from(value).ok())
                .unwrap_or(FALLBACK_TRENDING_SLICE),
        }
    }
}

fn merge_config_layer(merged: &mut Map<String, Value>, raw: &str) {
    let Ok(payload) = serde_json::from_str::<Value>(raw) else {
        return;
    };
    let Some(table) = payload.as_object() else {
        return;
    };
    for (key, value) in table {
        match (merged.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(row)) => {
                for (field, field_value) in row {
                    existing.insert(field.to_string(), field_value.clone());
                }
            }
            _ => {
                merged.insert(key.to_string(), value.clone());
            }
        }
    }
}

fn config_override_path() -> Option<PathBuf> {
    override_path_from(
        env::var(CONFIG_ENV_VAR).ok(),
        env::var_os("HOME").map(PathBuf::from),
    )
}

fn override_path_from(explicit: Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    {
        return Some(PathBuf::from(path));
    }
    home.map(|home| home.join(".maya").join("direction_overrides.json"))
}
