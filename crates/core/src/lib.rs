//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block game: board, piece catalog,
//! collision, line clearing, scoring, and the [`GameEngine`] that ties them
//! together. It does no I/O and never blocks:
//!
//! - **Deterministic**: randomness comes from an injected [`RandomSource`]
//! - **Clock-free**: gravity is driven by an injected [`Scheduler`]
//! - **Testable**: [`ScriptedSource`] and [`ManualScheduler`] replace both in tests
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with line clearing
//! - [`pieces`]: tetromino shape matrices and matrix rotation
//! - [`engine`]: the game engine (spawn, collision, merge, tick, input)
//! - [`rng`]: random sources for piece selection
//! - [`scheduler`]: tick clocks
//! - [`config`]: board size, tick cadence and seed
//!
//! # Game Rules
//!
//! - Pieces are picked uniformly from the seven tetrominoes and spawn centred on the top row
//! - Every tick moves the active piece down one row; a blocked piece is merged into the board
//! - Full rows are removed and score 100 points each
//! - Rotation is clockwise, in place, without wall kicks
//! - The game ends when a new piece collides as it spawns
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameEngine, ManualScheduler, ScriptedSource};
//! use blockfall_types::Command;
//!
//! let mut game = GameEngine::with_parts(
//!     GameConfig::default(),
//!     ScriptedSource::constant(1), // always the O piece
//!     ManualScheduler::new(),
//! );
//! game.start();
//!
//! game.handle_input(Command::MoveLeft);
//! game.scheduler_mut().advance(2);
//! assert_eq!(game.run_pending(), 2);
//!
//! let piece = game.active().unwrap();
//! assert_eq!((piece.x, piece.y), (3, 2));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod scheduler;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use engine::{GameEngine, Piece, TickOutcome};
pub use pieces::{get_shape, rotate, Shape, PIECE_CATALOG};
pub use rng::{RandomSource, ScriptedSource, SimpleRng};
pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler};
