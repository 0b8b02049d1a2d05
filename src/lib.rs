//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{core,input,term,types}` so
//! hosts and integration tests depend on a single package.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
