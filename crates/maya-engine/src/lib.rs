pub mod assembler;
pub mod config;
pub mod fashion;
pub mod identity;
pub mod negative;
pub mod pose;
pub mod scoring;
pub mod style_blend;

use std::path::{Path, PathBuf};

use anyhow::Result;
use maya_contracts::catalog::{Catalogs, Dimension};
use maya_contracts::concept::{analyze, Energy, SemanticProfile};
use maya_contracts::direction::{
    AppliedModules, ConceptInput, CreativeDirection, DirectionResult, PromptPair,
    SelectionExplanation, UserContext,
};
use maya_contracts::events::{now_utc_iso, EventLog};
use maya_contracts::history::SelectionHistory;
use maya_contracts::runs::summary::{write_summary, DirectionRecord, SessionSummary};
use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};

use crate::assembler::{assemble, PromptParts};
use crate::fashion::{resolve_outfit_override, select_fashion, WardrobeChoice};
use crate::identity::{build_identity_lock, identity_phrase};
use crate::pose::select_pose;
use crate::scoring::{
    select_composition, select_lighting, select_mood, select_scenario, selection_keywords,
};
use crate::style_blend::{blend, style_phrase};

pub use crate::config::{AntiRepetitionPolicy, EngineConfig};

const DIRECTION_ID_LEN: usize = 12;

/// Runs the direction pipeline for one session and records what it did.
///
/// The selection history is owned by the caller and passed to every
/// [`DirectionEngine::direct`] call, so each session carries its own memory.
pub struct DirectionEngine {
    catalogs: Catalogs,
    config: EngineConfig,
    events: EventLog,
    session: String,
    out_dir: Option<PathBuf>,
    started_at: String,
    records: Vec<DirectionRecord>,
}

impl DirectionEngine {
    /// Engine that writes `events.jsonl` and, on [`finish`](Self::finish),
    /// `summary.json` under `out_dir`.
    pub fn new(
        out_dir: impl Into<PathBuf>,
        session: impl Into<String>,
        config: EngineConfig,
    ) -> Result<Self> {
        let out_dir = out_dir.into();
        std::fs::create_dir_all(&out_dir)?;
        let session = session.into();
        let events = EventLog::new(out_dir.join("events.jsonl"), session.clone());
        Self::build(events, session, Some(out_dir), config)
    }

    /// Engine with no file output at all.
    pub fn in_memory(session: impl Into<String>, config: EngineConfig) -> Result<Self> {
        let session = session.into();
        let events = EventLog::disabled(session.clone());
        Self::build(events, session, None, config)
    }

    fn build(
        events: EventLog,
        session: String,
        out_dir: Option<PathBuf>,
        config: EngineConfig,
    ) -> Result<Self> {
        let catalogs = Catalogs::builtin()?;
        events.emit(
            "session_started",
            map_object(json!({
                "out_dir": out_dir.as_ref().map(|dir| dir.to_string_lossy().to_string()),
                "anti_repetition": {
                    "fashion": config.anti_repetition.fashion,
                    "pose": config.anti_repetition.pose,
                },
            })),
        )?;
        Ok(Self {
            catalogs,
            config,
            events,
            session,
            out_dir,
            started_at: now_utc_iso(),
            records: Vec::new(),
        })
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn out_dir(&self) -> Option<&Path> {
        self.out_dir.as_deref()
    }

    pub fn event_log(&self) -> EventLog {
        self.events.clone()
    }


    /// Turns one brief into a creative direction and its prompt pair.
    ///
    /// Selection never fails; errors only come from writing events.
    pub fn direct(
        &mut self,
        user: &UserContext,
        concept: &ConceptInput,
        history: &mut SelectionHistory,
    ) -> Result<DirectionResult> {
        self.events.emit(
            "direction_started",
            map_object(json!({
                "brief": concept.brief,
                "overrides": concept.overrides.present_slots(),
            })),
        )?;

        let composed = compose_direction(&self.catalogs, &self.config, user, concept, history);
        self.events.emit(
            "profile_analyzed",
            map_object(json!({ "profile": serde_json::to_value(&composed.profile)? })),
        )?;
        for explanation in &composed.creative_direction.explanation {
            self.events.emit(
                "dimension_selected",
                map_object(serde_json::to_value(explanation)?),
            )?;
        }

        let direction_id = direction_id(
            &self.session,
            self.records.len(),
            user,
            concept,
            &composed.applied_modules,
        )?;
        self.events.emit(
            "prompt_assembled",
            map_object(json!({
                "direction_id": direction_id,
                "token_count": composed.prompt.token_count,
                "negative_terms": composed.negative_terms,
            })),
        )?;

        self.records.push(DirectionRecord {
            direction_id: direction_id.clone(),
            applied_modules: composed.applied_modules.clone(),
        });
        Ok(DirectionResult {
            direction_id,
            profile: composed.profile,
            prompt: composed.prompt,
            creative_direction: composed.creative_direction,
            applied_modules: composed.applied_modules,
        })
    }

    /// Writes the session summary (when the engine has an output directory)
    /// and emits `session_finished`. Returns the summary path if one was written.
    pub fn finish(&mut self) -> Result<Option<PathBuf>> {
        let summary_path = self.out_dir.as_ref().map(|dir| dir.join("summary.json"));
        if let Some(path) = &summary_path {
            let summary = SessionSummary {
                session: self.session.clone(),
                started_at: self.started_at.clone(),
                finished_at: now_utc_iso(),
                total_directions: self.records.len() as u64,
                directions: self.records.clone(),
            };
            write_summary(path, &summary, None)?;
        }
        self.events.emit(
            "session_finished",
            map_object(json!({
                "total_directions": self.records.len(),
                "summary_path": summary_path
                    .as_ref()
                    .map(|path| path.to_string_lossy().to_string()),
            })),
        )?;
        Ok(summary_path)
    }
}

struct ComposedDirection {
    profile: SemanticProfile,
    prompt: PromptPair,
    creative_direction: CreativeDirection,
    applied_modules: AppliedModules,
    negative_terms: usize,
}

fn compose_direction(
    catalogs: &Catalogs,
    config: &EngineConfig,
    user: &UserContext,
    concept: &ConceptInput,
    history: &mut SelectionHistory,
) -> ComposedDirection {
    let overrides = &concept.overrides;
    let mut profile = analyze(&concept.brief);
    if let Some(energy) = overrides.get("emotional_tone").and_then(Energy::from_key) {
        profile.energy = [energy].into_iter().collect();
    }

    let scenario = select_scenario(&catalogs.scenario, &profile, overrides.get("scenario"));
    let mood = select_mood(
        &catalogs.mood,
        &profile,
        overrides.get("mood"),
        user.preferred_mood.as_deref(),
    );
    let lighting = select_lighting(&catalogs.lighting, &profile, overrides.get("lighting"));
    let composition =
        select_composition(&catalogs.composition, &profile, overrides.get("composition"));

    let keywords = selection_keywords(&profile, scenario.block);
    let policy = config.anti_repetition;
    let pose = select_pose(
        &catalogs.pose,
        scenario.block.key,
        &keywords,
        policy.pose.then_some(&mut history.pose),
    );
    let fashion_memory = policy.fashion.then_some(&mut history.fashion);
    let fashion = match overrides.get("outfit") {
        Some(requested) => resolve_outfit_override(&catalogs.fashion, requested, fashion_memory),
        None => select_fashion(
            &catalogs.fashion,
            scenario.block.key,
            &keywords,
            &user.palette,
            fashion_memory,
        ),
    };

    let style_blend = blend(&user.styles, config.trending_slice);
    let identity_lock = build_identity_lock(
        &user.features,
        user.gender.as_deref(),
        user.ethnicity.as_deref(),
    );
    let negative = negative::compose(composition.block.name, mood.block.name);

    let mut environment = format!(
        "{}, {}",
        scenario.block.setting, scenario.block.environment_detail
    );
    if let Some(location) = profile.location {
        environment.push_str(&format!(", in {}", location.display_name()));
    }
    environment.push_str(&format!(", {}", profile.time_of_day.phrase()));

    let mut wardrobe = fashion.choice.phrase();
    let styling = style_phrase(&style_blend);
    if !styling.is_empty() {
        wardrobe.push_str(&format!(", {styling}"));
    }

    let assembled = assemble(&PromptParts {
        identity: identity_phrase(user),
        identity_lock: identity_lock.clone(),
        pose: pose.block.description.to_string(),
        composition: format!(
            "{}, {}, {}",
            composition.block.framing, composition.block.camera_angle, composition.block.lens
        ),
        lighting: format!(
            "{}, {}",
            lighting.block.description, lighting.block.skin_treatment
        ),
        environment,
        wardrobe,
        mood_atmosphere: format!(
            "{}, {}, {}",
            mood.block.expression, mood.block.atmosphere, mood.block.color_grade
        ),
        technical_suffix: config.technical_suffix.clone(),
    });

    let explanation = vec![
        mood.explain(Dimension::Mood),
        lighting.explain(Dimension::Lighting),
        composition.explain(Dimension::Composition),
        scenario.explain(Dimension::Scenario),
        SelectionExplanation {
            dimension: Dimension::Pose,
            key: pose.block.category.to_string(),
            score: pose.score,
            requested: None,
            fallback_reason: pose.defaulted.then(|| {
                format!(
                    "No pose matched scenario '{}'; using default '{}'.",
                    scenario.block.key, pose.block.category
                )
            }),
        },
        SelectionExplanation {
            dimension: Dimension::Fashion,
            key: fashion.choice.key().to_string(),
            score: fashion.score,
            requested: fashion.requested.clone(),
            fallback_reason: match &fashion.choice {
                WardrobeChoice::Custom(text) => Some(format!(
                    "Outfit '{text}' is not a catalog look; using it as written."
                )),
                WardrobeChoice::Catalog(_) => None,
            },
        },
    ];

    let fashion_text = match &fashion.choice {
        WardrobeChoice::Catalog(block) => format!("{}: {}", block.category, block.description),
        WardrobeChoice::Custom(text) => text.clone(),
    };
    let creative_direction = CreativeDirection {
        mood: format!("{}: {}", mood.block.name, mood.block.description),
        scene: format!("{}: {}", scenario.block.name, scenario.block.description),
        composition: format!("{}: {}", composition.block.name, composition.block.description),
        lighting: format!("{}: {}", lighting.block.name, lighting.block.description),
        pose: pose.block.description.to_string(),
        fashion: fashion_text,
        identity_lock,
        style_blend: style_blend.clone(),
        explanation,
    };
    let applied_modules = AppliedModules {
        mood: mood.block.key.to_string(),
        lighting: lighting.block.key.to_string(),
        composition: composition.block.key.to_string(),
        scenario: scenario.block.key.to_string(),
        pose: pose.block.category.to_string(),
        fashion: fashion.choice.key().to_string(),
        styles: style_blend.styles,
    };

    ComposedDirection {
        profile,
        prompt: PromptPair {
            final_prompt: assembled.text,
            negative_prompt: negative.to_prompt_string(),
            token_count: assembled.token_count,
        },
        creative_direction,
        applied_modules,
        negative_terms: negative.term_count(),
    }
}

fn direction_id(
    session: &str,
    sequence: usize,
    user: &UserContext,
    concept: &ConceptInput,
    applied: &AppliedModules,
) -> Result<String> {
    let payload = json!({
        "session": session,
        "sequence": sequence,
        "user": serde_json::to_value(user)?,
        "concept": serde_json::to_value(concept)?,
        "applied_modules": serde_json::to_value(applied)?,
    });
    let mut digest = stable_hash(&payload);
    digest.truncate(DIRECTION_ID_LEN);
    Ok(digest)
}

fn stable_hash(payload: &Value) -> String {
    let bytes = serde_json::to_vec(payload).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn map_object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}
