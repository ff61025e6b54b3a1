//! In-memory kanban board state manager.
//!
//! The [`board`] module holds the store and its move engine; the remaining
//! modules support the `taskboard` replay binary.

pub mod board;
pub mod config;
pub mod render;
pub mod script;
