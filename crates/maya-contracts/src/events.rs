use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

pub type EventPayload = Map<String, Value>;

/// Session event stream: `session_started`, one `direction_started` through
/// `prompt_assembled` run per brief, then `session_finished`.
///
/// Every event carries `type`, `session` and `ts`; payload keys win on
/// collision. An enabled log appends each event as one line of
/// `events.jsonl`. [`EventLog::disabled`] builds the same values in memory.
#[derive(Debug, Clone)]
pub struct EventLog {
    inner: Arc<EventLogInner>,
}

#[derive(Debug)]
struct EventLogInner {
    path: Option<PathBuf>,
    session: String,
    lock: Mutex<()>,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>, session: impl Into<String>) -> Self {
        Self::build(Some(path.into()), session.into())
    }

    pub fn disabled(session: impl Into<String>) -> Self {
        Self::build(None, session.into())
    }

    fn build(path: Option<PathBuf>, session: String) -> Self {
        Self {
            inner: Arc::new(EventLogInner {
                path,
                session,
                lock: Mutex::new(()),
            }),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.inner.path.as_deref()
    }

    pub fn session(&self) -> &str {
        &self.inner.session
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.path.is_some()
    }

    pub fn emit(&self, event_type: &str, payload: EventPayload) -> anyhow::Result<Value> {
        let event = self.envelope(event_type, payload);
        if let Some(path) = &self.inner.path {
            self.append(path, &event)?;
        }
        Ok(Value::Object(event))
    }

    fn envelope(&self, event_type: &str, payload: EventPayload) -> EventPayload {
        let mut event = EventPayload::new();
        event.insert("type".to_string(), Value::from(event_type));
        event.insert("session".to_string(), Value::from(self.session()));
        event.insert("ts".to_string(), Value::from(now_utc_iso()));
        event.extend(payload);
        event
    }

    fn append(&self, path: &Path, event: &EventPayload) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut line = serde_json::to_string(event)?;
        line.push('\n');

        let _guard = self
            .inner
            .lock
            .lock()
            .map_err(|_| anyhow::anyhow!("event log lock poisoned"))?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?
            .write_all(line.as_bytes())?;
        Ok(())
    }
}

pub fn now_utc_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::DateTime;
    use serde_json::json;

    use super::*;

    fn payload(value: Value) -> EventPayload {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn direction_run_lands_in_order() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("session").join("events.jsonl");
        let log = EventLog::new(&path, "rooftop-shoot");

        log.emit("direction_started", payload(json!({"brief": "rooftop at dusk"})))?;
        log.clone().emit(
            "dimension_selected",
            payload(json!({"dimension": "lighting", "key": "blue-hour-ambient", "score": 6})),
        )?;
        let last = log.emit("prompt_assembled", payload(json!({"token_count": 87})))?;

        let events: Vec<Value> = fs::read_to_string(&path)?
            .lines()
            .map(serde_json::from_str)
            .collect::<Result<_, _>>()?;
        let types: Vec<&str> = events.iter().filter_map(|event| event["type"].as_str()).collect();
        assert_eq!(types, ["direction_started", "dimension_selected", "prompt_assembled"]);
        assert_eq!(events[1]["key"], json!("blue-hour-ambient"));
        assert_eq!(events[2], last);
        assert!(events.iter().all(|event| event["session"] == json!("rooftop-shoot")));
        DateTime::parse_from_rfc3339(events[0]["ts"].as_str().unwrap_or(""))?;
        Ok(())
    }

    #[test]
    fn payload_session_replaces_the_log_session() -> anyhow::Result<()> {
        let log = EventLog::disabled("cli-session");
        let emitted = log.emit("session_finished", payload(json!({"session": "imported"})))?;
        assert_eq!(emitted["session"], json!("imported"));
        assert_eq!(emitted["type"], json!("session_finished"));
        Ok(())
    }

    #[test]
    fn disabled_log_keeps_events_off_disk() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let log = EventLog::disabled("preview");
        assert!(!log.is_enabled());
        assert!(log.path().is_none());
        let emitted = log.emit("session_started", EventPayload::new())?;
        assert_eq!(emitted["session"], json!("preview"));
        assert_eq!(fs::read_dir(temp.path())?.count(), 0);
        Ok(())
    }
}
