//! TUI Memory (workspace facade crate).
//!
//! Re-exports the engine, store, input and terminal crates under
//! `tui_memory::{core,store,input,term,types}` and adds the host controller
//! that wires them together for the terminal runner.

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_store as store;
pub use tui_memory_term as term;
pub use tui_memory_types as types;

pub mod app;
pub mod cli;

pub use app::{App, Message};
pub use cli::Args;
