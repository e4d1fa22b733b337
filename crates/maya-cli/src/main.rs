use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use maya_contracts::catalog::{Catalogs, Dimension};
use maya_contracts::chat::{parse_intent, Intent, CHAT_HELP_COMMANDS};
use maya_contracts::concept::analyze;
use maya_contracts::direction::{ConceptInput, DimensionOverrides, DirectionResult, UserContext};
use maya_contracts::history::{HistoryStore, SelectionHistory};
use maya_contracts::runs::receipts::{build_receipt, receipt_file_name, write_receipt};
use maya_engine::{DirectionEngine, EngineConfig};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "maya-rs", version, about = "Maya creative direction CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Direct(DirectArgs),
    Chat(ChatArgs),
    Analyze(AnalyzeArgs),
    Catalog(CatalogArgs),
    History(HistoryArgs),
}

#[derive(Debug, Clone, Args)]
struct SessionArgs {
    /// Directory for events.jsonl, receipts and summary.json.
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long)]
    session: Option<String>,
    /// JSON file holding per-session selection history.
    #[arg(long)]
    history: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct UserArgs {
    #[arg(long, default_value = "")]
    trigger: String,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    ethnicity: Option<String>,
    #[arg(long = "style", value_delimiter = ',')]
    styles: Vec<String>,
    #[arg(long)]
    preferred_mood: Option<String>,
    #[arg(long)]
    weight: Option<f64>,
    #[arg(long = "palette", value_delimiter = ',')]
    palette: Vec<String>,
    #[arg(long = "feature")]
    features: Vec<String>,
}

#[derive(Debug, Parser)]
struct DirectArgs {
    #[arg(long)]
    brief: String,
    #[command(flatten)]
    session: SessionArgs,
    #[command(flatten)]
    user: UserArgs,
    #[arg(long)]
    mood: Option<String>,
    #[arg(long)]
    scenario: Option<String>,
    #[arg(long)]
    composition: Option<String>,
    #[arg(long)]
    lighting: Option<String>,
    #[arg(long)]
    outfit: Option<String>,
    #[arg(long)]
    tone: Option<String>,
    /// Number of directions to generate from the same brief.
    #[arg(long, default_value_t = 1)]
    count: usize,
}

#[derive(Debug, Parser)]
struct ChatArgs {
    #[command(flatten)]
    session: SessionArgs,
    #[command(flatten)]
    user: UserArgs,
}

#[derive(Debug, Parser)]
struct AnalyzeArgs {
    brief: String,
}

#[derive(Debug, Parser)]
struct CatalogArgs {
    dimension: Option<String>,
}

/// Lists the sessions stored in a history file, or drops one of them.
#[derive(Debug, Parser)]
struct HistoryArgs {
    file: PathBuf,
    #[arg(long)]
    forget: Option<String>,
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("maya-rs error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Direct(args) => run_direct(args),
        Command::Chat(args) => {
            run_chat(args)?;
            Ok(0)
        }
        Command::Analyze(args) => {
            println!("{}", serde_json::to_string_pretty(&analyze(&args.brief))?);
            Ok(0)
        }
        Command::Catalog(args) => {
            let catalogs = Catalogs::builtin()?;
            print!("{}", render_catalog(&catalogs, args.dimension.as_deref())?);
            Ok(0)
        }
        Command::History(args) => {
            print!("{}", run_history(&args)?);
            Ok(0)
        }
    }
}

impl UserArgs {
    fn to_user_context(&self) -> UserContext {
        UserContext {
            trigger: self.trigger.trim().to_string(),
            gender: non_empty(self.gender.as_deref()),
            ethnicity: non_empty(self.ethnicity.as_deref()),
            styles: self.styles.clone(),
            preferred_mood: non_empty(self.preferred_mood.as_deref()),
            weight: self.weight,
            palette: self.palette.clone(),
            features: self.features.clone(),
        }
    }
}

/// One CLI session: the engine, its history and where receipts go.
struct Session {
    engine: DirectionEngine,
    history: SelectionHistory,
    store: Option<HistoryStore>,
    out_dir: Option<PathBuf>,
}

impl Session {
    fn open(args: &SessionArgs) -> Result<Self> {
        let session_id = args
            .session
            .as_deref()
            .and_then(|value| non_empty(Some(value)))
            .unwrap_or_else(|| format!("session-{}", Uuid::new_v4()));
        let config = EngineConfig::load();
        let engine = match &args.out {
            Some(out) => DirectionEngine::new(out, session_id.clone(), config)?,
            None => DirectionEngine::in_memory(session_id.clone(), config)?,
        };
        let mut store = args.history.as_ref().map(HistoryStore::new);
        let history = store
            .as_mut()
            .map(|store| store.load(&session_id))
            .unwrap_or_default();
        Ok(Self {
            engine,
            history,
            store,
            out_dir: args.out.clone(),
        })
    }

    fn direct(&mut self, user: &UserContext, concept: &ConceptInput) -> Result<DirectionResult> {
        let result = self.engine.direct(user, concept, &mut self.history)?;
        if let Some(store) = self.store.as_mut() {
            store.save(self.engine.session(), &self.history)?;
        }
        if let Some(out_dir) = &self.out_dir {
            write_direction_receipt(out_dir, self.engine.session(), user, concept, &result)?;
        }
        Ok(result)
    }

    /// Empties this session's selection memory, in process and on disk.
    fn forget_history(&mut self) -> Result<()> {
        self.history.clear();
        if let Some(store) = self.store.as_mut() {
            store.forget(self.engine.session())?;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        if let Some(path) = self.engine.finish()? {
            eprintln!("Summary written to {}", path.display());
        }
        if let Some(store) = self.store.as_mut() {
            store.flush()?;
        }
        Ok(())
    }
}

fn run_direct(args: DirectArgs) -> Result<i32> {
    if args.count == 0 {
        bail!("--count must be at least 1");
    }
    let user = args.user.to_user_context();
    let mut concept = ConceptInput::new(args.brief.clone());
    for (slot, value) in [
        ("mood", &args.mood),
        ("scenario", &args.scenario),
        ("composition", &args.composition),
        ("lighting", &args.lighting),
        ("outfit", &args.outfit),
        ("emotional_tone", &args.tone),
    ] {
        concept.overrides.set(slot, value.clone());
    }

    let mut session = Session::open(&args.session)?;
    let mut results = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        results.push(session.direct(&user, &concept)?);
    }
    session.finish()?;

    let rendered = if results.len() == 1 {
        serde_json::to_value(&results[0])?
    } else {
        serde_json::to_value(&results)?
    };
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(0)
}

fn run_chat(args: ChatArgs) -> Result<()> {
    let mut session = Session::open(&args.session)?;
    let catalogs = session.engine.catalogs().clone();
    let mut state = ChatState {
        user: args.user.to_user_context(),
        overrides: DimensionOverrides::default(),
    };

    let stdin = io::stdin();
    let mut line = String::new();
    println!(
        "Maya chat started (session {}). Type /help for commands.",
        session.engine.session()
    );

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        let read = match stdin.read_line(&mut line) {
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        if read == 0 {
            break;
        }

        let intent = parse_intent(line.trim_end_matches(['\n', '\r']));
        match apply_chat_intent(&mut state, &catalogs, &intent) {
            ChatOutcome::Noop => {}
            ChatOutcome::Quit => break,
            ChatOutcome::Reply(message) => println!("{message}"),
            ChatOutcome::Forget => {
                session.forget_history()?;
                println!("Selection history cleared");
            }
            ChatOutcome::Direct(brief) => {
                let concept = ConceptInput {
                    brief,
                    overrides: state.overrides.clone(),
                };
                let result = session.direct(&state.user, &concept)?;
                print!("{}", render_direction(&result));
            }
        }
    }

    session.finish()
}

/// Mutable request state carried between chat lines.
#[derive(Debug, Clone, Default)]
struct ChatState {
    user: UserContext,
    overrides: DimensionOverrides,
}

#[derive(Debug, Clone, PartialEq)]
enum ChatOutcome {
    Noop,
    Quit,
    Reply(String),
    Direct(String),
    Forget,
}

fn apply_chat_intent(state: &mut ChatState, catalogs: &Catalogs, intent: &Intent) -> ChatOutcome {
    let value = value_as_non_empty_string(intent.command_args.get("value"));
    match intent.action.as_str() {
        "noop" => ChatOutcome::Noop,
        "quit" => ChatOutcome::Quit,
        "help" => ChatOutcome::Reply(format!("Commands: {}", CHAT_HELP_COMMANDS.join(" "))),
        "direct" => match intent.brief.clone() {
            Some(brief) => ChatOutcome::Direct(brief),
            None => ChatOutcome::Noop,
        },
        "set_override" => {
            let slot = value_as_non_empty_string(intent.command_args.get("slot"))
                .unwrap_or_default();
            if !state.overrides.set(&slot, value.clone()) {
                return ChatOutcome::Reply(format!("Unknown override slot: {slot}"));
            }
            match value {
                Some(value) => ChatOutcome::Reply(format!("{slot} set to {value}")),
                None => ChatOutcome::Reply(format!("{slot} cleared")),
            }
        }
        "forget_history" => ChatOutcome::Forget,
        "clear_overrides" => {
            state.overrides.clear();
            ChatOutcome::Reply("Overrides cleared".to_string())
        }
        "set_gender" => {
            state.user.gender = value.clone();
            ChatOutcome::Reply(describe_update("Gender", value.as_deref()))
        }
        "set_ethnicity" => {
            state.user.ethnicity = value.clone();
            ChatOutcome::Reply(describe_update("Ethnicity", value.as_deref()))
        }
        "set_trigger" => {
            state.user.trigger = value.clone().unwrap_or_default();
            ChatOutcome::Reply(describe_update("Trigger", value.as_deref()))
        }
        "set_weight" => {
            state.user.weight = intent.command_args.get("value").and_then(Value::as_f64);
            match state.user.weight {
                Some(weight) => ChatOutcome::Reply(format!("Weight set to {weight}")),
                None => ChatOutcome::Reply("Weight cleared".to_string()),
            }
        }
        "set_styles" => {
            state.user.styles = value_as_string_list(intent.command_args.get("values"));
            ChatOutcome::Reply(describe_list("Styles", &state.user.styles))
        }
        "set_palette" => {
            state.user.palette = value_as_string_list(intent.command_args.get("values"));
            ChatOutcome::Reply(describe_list("Palette", &state.user.palette))
        }
        "set_features" => {
            state.user.features = value_as_string_list(intent.command_args.get("values"));
            ChatOutcome::Reply(describe_list("Features", &state.user.features))
        }
        "catalog" => {
            let dimension = value_as_non_empty_string(intent.command_args.get("dimension"));
            match render_catalog(catalogs, dimension.as_deref()) {
                Ok(listing) => ChatOutcome::Reply(listing.trim_end().to_string()),
                Err(err) => ChatOutcome::Reply(err.to_string()),
            }
        }
        _ => {
            let command = value_as_non_empty_string(intent.command_args.get("command"))
                .unwrap_or_else(|| intent.raw.trim().to_string());
            ChatOutcome::Reply(format!("Unknown command: /{command}. Try /help."))
        }
    }
}

fn run_history(args: &HistoryArgs) -> Result<String> {
    let mut store = HistoryStore::new(&args.file);
    if let Some(session) = non_empty(args.forget.as_deref()) {
        store.forget(&session)?;
        return Ok(format!("Forgot {session}\n"));
    }
    let mut out = String::new();
    for session in store.sessions() {
        let history = store.load(&session);
        out.push_str(&format!(
            "{session}: {} fashion, {} pose\n",
            history.fashion.len(),
            history.pose.len()
        ));
    }
    Ok(out)
}

fn render_catalog(catalogs: &Catalogs, dimension: Option<&str>) -> Result<String> {
    let dimensions: Vec<Dimension> = match dimension {
        Some(raw) => match Dimension::from_key(raw) {
            Some(dimension) => vec![dimension],
            None => bail!("unknown dimension: {raw}"),
        },
        None => Dimension::ALL.to_vec(),
    };
    let mut out = String::new();
    for dimension in dimensions {
        out.push_str(&format!("{dimension}:\n"));
        for key in catalogs.keys(dimension) {
            out.push_str(&format!("  {key}\n"));
        }
    }
    Ok(out)
}

fn render_direction(result: &DirectionResult) -> String {
    let modules = &result.applied_modules;
    let mut out = format!("Direction {}\n", result.direction_id);
    for dimension in Dimension::ALL {
        out.push_str(&format!("  {dimension}: {}\n", modules.key(dimension)));
    }
    if !modules.styles.is_empty() {
        out.push_str(&format!("  styles: {}\n", modules.styles.join(", ")));
    }
    out.push_str(&format!(
        "Prompt ({} tokens):\n{}\n",
        result.prompt.token_count, result.prompt.final_prompt
    ));
    out.push_str(&format!("Negative:\n{}\n", result.prompt.negative_prompt));
    out
}

fn write_direction_receipt(
    out_dir: &Path,
    session: &str,
    user: &UserContext,
    concept: &ConceptInput,
    result: &DirectionResult,
) -> Result<PathBuf> {
    let path = out_dir.join(receipt_file_name(&result.direction_id));
    let payload = build_receipt(session, user, concept, result, &path)?;
    write_receipt(&path, &payload)?;
    Ok(path)
}

fn describe_update(label: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{label} set to {value}"),
        None => format!("{label} cleared"),
    }
}

fn describe_list(label: &str, items: &[String]) -> String {
    if items.is_empty() {
        format!("{label} cleared")
    } else {
        format!("{label} set to {}", items.join(", "))
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn value_as_non_empty_string(value: Option<&Value>) -> Option<String> {
    non_empty(value.and_then(Value::as_str))
}

fn value_as_string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| non_empty(item.as_str()))
                .collect()
        })
        .unwrap_or_default()
}
