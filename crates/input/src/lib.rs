//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. The engine itself
//! only understands commands and raw key identifiers; this crate is the glue for
//! terminal hosts.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, key_identifier, should_quit, should_restart};
