pub mod catalog;
pub mod chat;
pub mod concept;
pub mod direction;
pub mod events;
pub mod history;
pub mod runs;
