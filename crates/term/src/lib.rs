//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from snapshots only, never from live game state
//! - Allow precise control over tile size and spacing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{
    value_label, AnchorY, BoardLayout, GameView, HostStatusView, MessageKind, Viewport,
};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
