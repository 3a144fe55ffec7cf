//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] while a board is
//! in play, and into [`PromptKey`] edits while the win prompt asks for a name.

pub mod map;

pub use tui_memory_types as types;

pub use map::{handle_key_event, handle_prompt_key, should_quit, PromptKey};
