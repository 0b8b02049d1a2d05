//! Shared types - plain data structures and default constants
//!
//! This crate defines the vocabulary used by every other crate in the workspace.
//! It has no dependencies so it can be used from the core engine, the input
//! mapping layer and any presentation layer alike.
//!
//! # Board Dimensions
//!
//! The default playfield is the classic one:
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//!
//! Both can be overridden when the engine is constructed.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 500 | Gravity step interval |
//!
//! # Scoring
//!
//! Every cleared row is worth `LINE_CLEAR_POINTS` (100), regardless of how many
//! rows are cleared at once.

/// Default board dimensions
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 10;

/// Default gravity cadence (milliseconds)
pub const DEFAULT_TICK_MS: u64 = 500;

/// Points awarded per cleared row
pub const LINE_CLEAR_POINTS: u32 = 100;

/// A board cell: `EMPTY` or a nonzero piece marker
pub type Cell = u8;

/// Value of an empty cell
pub const EMPTY: Cell = 0;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Nonzero marker written into board cells occupied by this kind
    pub fn marker(&self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Player commands understood by the engine
///
/// There is deliberately no hard drop, hold or pause: the engine only knows
/// how to shift the active piece and rotate it clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
}

impl Command {
    /// Parse a raw key identifier as delivered by a host UI (`"ArrowLeft"`, ...)
    ///
    /// Unknown identifiers yield `None` and are meant to be ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Command::MoveLeft),
            "ArrowRight" => Some(Command::MoveRight),
            "ArrowDown" => Some(Command::MoveDown),
            "ArrowUp" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// Board offset `(dx, dy)` for the shifting commands
    pub fn offset(&self) -> Option<(i32, i32)> {
        match self {
            Command::MoveLeft => Some((-1, 0)),
            Command::MoveRight => Some((1, 0)),
            Command::MoveDown => Some((0, 1)),
            Command::Rotate => None,
        }
    }
}
