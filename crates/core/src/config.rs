//! Engine configuration
//!
//! Defaults match the classic game (20x10 board, one gravity step every 500ms).
//! Every field can be overridden through the environment:
//!
//! - `BLOCKFALL_ROWS`: board rows (default 20)
//! - `BLOCKFALL_COLS`: board columns (default 10)
//! - `BLOCKFALL_TICK_MS`: gravity interval in milliseconds (default 500)
//! - `BLOCKFALL_SEED`: piece RNG seed (default: random)
//!
//! Malformed or zero values are ignored and the default is used.

use std::time::Duration;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_interval: Duration,
    /// `None` seeds the piece RNG from OS entropy
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Board of the given size, other fields default
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let positive = |key: &str| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|&v| v > 0)
        };

        let defaults = Self::default();
        let rows = positive("BLOCKFALL_ROWS")
            .map(|v| v as usize)
            .unwrap_or(defaults.rows);
        let cols = positive("BLOCKFALL_COLS")
            .map(|v| v as usize)
            .unwrap_or(defaults.cols);
        let tick_interval = positive("BLOCKFALL_TICK_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);
        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        Self {
            rows,
            cols,
            tick_interval,
            seed,
        }
    }
}
