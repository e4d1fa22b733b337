mod memory;
mod store;

pub use memory::{AntiRepetitionMemory, SelectionHistory, MEMORY_WINDOW};
pub use store::HistoryStore;
