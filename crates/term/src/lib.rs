//! Terminal presentation for the host binary.
//!
//! The engine produces a complete render view; this crate formats it as text
//! and writes it with `crossterm`.

pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use game_view::frame_lines;
pub use renderer::{encode_full_into, TerminalRenderer};
