use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Recent picks kept per dimension; anything older is eligible again.
pub const MEMORY_WINDOW: usize = 8;

/// Bounded FIFO of recently chosen catalog keys for one dimension.
///
/// Serialized as a plain list. Longer lists read back from disk keep only
/// their newest [`MEMORY_WINDOW`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VecDeque<String>", into = "VecDeque<String>")]
pub struct AntiRepetitionMemory {
    recent: VecDeque<String>,
}

impl From<VecDeque<String>> for AntiRepetitionMemory {
    fn from(mut recent: VecDeque<String>) -> Self {
        let overflow = recent.len().saturating_sub(MEMORY_WINDOW);
        recent.drain(..overflow);
        Self { recent }
    }
}

impl From<AntiRepetitionMemory> for VecDeque<String> {
    fn from(memory: AntiRepetitionMemory) -> Self {
        memory.recent
    }
}

impl AntiRepetitionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.recent.iter().any(|item| item == key)
    }

    /// Pushes `key` and drops the oldest entries beyond [`MEMORY_WINDOW`].
    pub fn remember(&mut self, key: &str) {
        self.recent.push_back(key.to_string());
        while self.recent.len() > MEMORY_WINDOW {
            self.recent.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    pub fn recent(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}

/// Per-session selection memory threaded through each request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionHistory {
    #[serde(default)]
    pub fashion: AntiRepetitionMemory,
    #[serde(default)]
    pub pose: AntiRepetitionMemory,
}

impl SelectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.fashion.clear();
        self.pose.clear();
    }
}
