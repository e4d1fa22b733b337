use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::memory::SelectionHistory;

/// JSON file of [`SelectionHistory`] values keyed by session id.
///
/// Reads refresh from disk, and flushes only rewrite the sessions this
/// instance touched, so several processes can share one file.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    payload: Option<Map<String, Value>>,
    dirty_sessions: Vec<String>,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            payload: None,
            dirty_sessions: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unknown or unreadable sessions start from an empty history.
    pub fn load(&mut self, session: &str) -> SelectionHistory {
        let payload = self.refresh();
        payload
            .get(session)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    pub fn save(&mut self, session: &str, history: &SelectionHistory) -> anyhow::Result<()> {
        let snapshot = serde_json::to_value(history)?;
        let payload = self.refresh();
        if payload.get(session) == Some(&snapshot) {
            return Ok(());
        }
        payload.insert(session.to_string(), snapshot);
        if !self.dirty_sessions.iter().any(|item| item == session) {
            self.dirty_sessions.push(session.to_string());
        }
        self.flush()
    }

    pub fn forget(&mut self, session: &str) -> anyhow::Result<()> {
        let payload = self.refresh();
        if payload.remove(session).is_none() {
            return Ok(());
        }
        let mut on_disk = read_json_object(&self.path).unwrap_or_default();
        on_disk.remove(session);
        write_json_object(&self.path, &on_disk)?;
        self.payload = Some(on_disk);
        self.dirty_sessions.retain(|item| item != session);
        Ok(())
    }

    pub fn sessions(&mut self) -> Vec<String> {
        self.refresh().keys().cloned().collect()
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        if self.dirty_sessions.is_empty() {
            return Ok(());
        }
        let Some(payload) = &self.payload else {
            return Ok(());
        };

        let mut on_disk = read_json_object(&self.path).unwrap_or_default();
        for session in &self.dirty_sessions {
            if let Some(value) = payload.get(session) {
                on_disk.insert(session.clone(), value.clone());
            }
        }
        write_json_object(&self.path, &on_disk)?;
        self.payload = Some(on_disk);
        self.dirty_sessions.clear();
        Ok(())
    }

    fn refresh(&mut self) -> &mut Map<String, Value> {
        let mut fresh = read_json_object(&self.path).unwrap_or_default();
        if let Some(previous) = self.payload.take() {
            for session in &self.dirty_sessions {
                if let Some(value) = previous.get(session) {
                    fresh.insert(session.clone(), value.clone());
                }
            }
        }
        self.payload.insert(fresh)
    }
}

fn read_json_object(path: &Path) -> Option<Map<String, Value>> {
    let raw = std::fs::read_to_string(path).ok()?;
    let parsed: Value = serde_json::from_str(&raw).ok()?;
    parsed.as_object().cloned()
}

fn write_json_object(path: &Path, payload: &Map<String, Value>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(
        path,
        serde_json::to_string_pretty(&Value::Object(payload.clone()))?,
    )?;
    Ok(())
}
