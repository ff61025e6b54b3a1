//! Shared document model for `Taskboard`.
//!
//! The board snapshot, the command vocabulary the UI layer speaks, and the
//! postcard codec used to hand snapshots to outer layers.

pub mod board;
pub mod codec;
pub mod command;
