//! Game engine - owns the complete game state
//!
//! Ties together the board, the active piece, the piece catalog, scoring and the
//! tick clock. Everything happens on the caller's thread: [`GameEngine::tick`]
//! advances gravity by one row, [`GameEngine::handle_input`] applies a player
//! command, and both run to completion.

use std::time::Duration;

use log::{debug, info};

use crate::config::GameConfig;
use crate::pieces::{rotate, Shape, PIECE_CATALOG};
use crate::rng::{RandomSource, SimpleRng};
use crate::scheduler::{IntervalScheduler, Scheduler};
use crate::types::{Command, PieceKind, DEFAULT_COLS, DEFAULT_ROWS, LINE_CLEAR_POINTS};
use crate::Board;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Column of the shape's top-left cell
    pub x: i32,
    /// Row of the shape's top-left cell
    pub y: i32,
}

impl Piece {
    /// Place a catalog shape horizontally centred on the top row
    pub fn spawn(kind: PieceKind, shape: Shape, cols: usize) -> Self {
        let half_width = shape.width().div_ceil(2) as i32;
        Self {
            kind,
            shape,
            x: (cols / 2) as i32 - half_width,
            y: 0,
        }
    }

    /// Absolute board coordinates of every occupied cell
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// What a single [`GameEngine::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened (the game is over)
    Idle,
    /// There was no active piece; one was spawned
    Spawned,
    /// The active piece moved down one row
    Fell,
    /// The piece was merged, lines cleared, and the next piece spawned
    Locked { lines_cleared: usize },
    /// The next piece collided on spawn and the game ended
    GameOver { lines_cleared: usize },
}

/// The falling-block game engine
///
/// `R` supplies piece selection, `S` is the gravity clock. Production code uses
/// the defaults; tests inject [`ScriptedSource`](crate::ScriptedSource) and
/// [`ManualScheduler`](crate::ManualScheduler).
#[derive(Debug, Clone)]
pub struct GameEngine<R = SimpleRng, S = IntervalScheduler> {
    board: Board,
    active: Option<Piece>,
    score: u32,
    game_over: bool,
    tick_interval: Duration,
    rng: R,
    scheduler: S,
}

impl GameEngine {
    /// Engine with a `rows x cols` board, random pieces and a wall-clock scheduler
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_config(GameConfig::with_size(rows, cols))
    }

    pub fn from_config(config: GameConfig) -> Self {
        let rng = config
            .seed
            .map(SimpleRng::new)
            .unwrap_or_else(SimpleRng::from_entropy);
        Self::with_parts(config, rng, IntervalScheduler::new())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl<R: RandomSource, S: Scheduler> GameEngine<R, S> {
    /// Engine with an injected random source and scheduler
    pub fn with_parts(config: GameConfig, rng: R, scheduler: S) -> Self {
        Self {
            board: Board::new(config.rows, config.cols),
            active: None,
            score: 0,
            game_over: false,
            tick_interval: config.tick_interval,
            rng,
            scheduler,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Whether the tick clock is running
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Replace the settled board contents.
    ///
    /// Rejected (returns false) if the dimensions differ from the engine's.
    pub fn load_board(&mut self, board: Board) -> bool {
        if board.rows() != self.board.rows() || board.cols() != self.board.cols() {
            return false;
        }
        self.board = board;
        true
    }

    /// Spawn a random catalog piece at the top centre.
    ///
    /// Returns false (and ends the game) if it collides immediately.
    pub fn spawn_piece(&mut self) -> bool {
        let index = self.rng.pick(PIECE_CATALOG.len()).min(PIECE_CATALOG.len() - 1);
        let kind = PieceKind::ALL[index];
        let piece = Piece::spawn(kind, PIECE_CATALOG[index], self.board.cols());
        self.active = Some(piece);

        if self.collision(0, 0, None) {
            self.scheduler.stop();
            self.game_over = true;
            info!("game over: {} blocked at spawn, score {}", kind.as_str(), self.score);
            return false;
        }

        debug!("spawned {} at ({}, {})", kind.as_str(), piece.x, piece.y);
        true
    }

    /// Whether the active piece (or `candidate`, anchored at the active piece's
    /// position) would hit a wall, the floor or a settled cell after shifting
    /// by `(x_offset, y_offset)`.
    ///
    /// Cells above the top edge only check the side walls.
    pub fn collision(&self, x_offset: i32, y_offset: i32, candidate: Option<&Shape>) -> bool {
        let (anchor_x, anchor_y) = self.active.map(|p| (p.x, p.y)).unwrap_or((0, 0));
        let Some(shape) = candidate.or(self.active.as_ref().map(|p| &p.shape)) else {
            return false;
        };

        // i64: extreme offsets are out of bounds, never an overflow.
        let cols = self.board.cols() as i64;
        let rows = self.board.rows() as i64;
        shape.cells().iter().any(|&(dx, dy)| {
            let x = anchor_x as i64 + dx as i64 + x_offset as i64;
            let y = anchor_y as i64 + dy as i64 + y_offset as i64;
            x < 0
                || x >= cols
                || y >= rows
                || (y >= 0 && self.board.is_occupied(x as i32, y as i32))
        })
    }

    /// Write the active piece into the board
    pub fn merge_piece(&mut self) {
        let Some(piece) = self.active else {
            return;
        };

        let marker = piece.kind.marker();
        for (x, y) in piece.board_cells() {
            // Cells above the top edge are dropped.
            self.board.set(x, y, marker);
        }
    }

    /// Remove full rows and score them. Returns the number of rows cleared.
    pub fn clear_lines(&mut self) -> usize {
        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.score = self
                .score
                .saturating_add(LINE_CLEAR_POINTS.saturating_mul(cleared as u32));
            debug!("cleared {} line(s), score {}", cleared, self.score);
        }
        cleared
    }

    /// One gravity step
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Idle;
        }

        if self.active.is_none() {
            return if self.spawn_piece() {
                TickOutcome::Spawned
            } else {
                TickOutcome::GameOver { lines_cleared: 0 }
            };
        }

        if !self.collision(0, 1, None) {
            if let Some(piece) = self.active.as_mut() {
                piece.y += 1;
            }
            return TickOutcome::Fell;
        }

        self.merge_piece();
        let lines_cleared = self.clear_lines();
        if self.spawn_piece() {
            TickOutcome::Locked { lines_cleared }
        } else {
            TickOutcome::GameOver { lines_cleared }
        }
    }

    /// Apply a player command. Returns whether the active piece changed.
    ///
    /// Ignored when there is no active piece or the game is over. Blocked moves
    /// and rotations leave the piece untouched; there are no wall kicks.
    pub fn handle_input(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        match command.offset() {
            Some((dx, dy)) => {
                if self.collision(dx, dy, None) {
                    return false;
                }
                self.active = Some(Piece {
                    x: piece.x + dx,
                    y: piece.y + dy,
                    ..piece
                });
            }
            None => {
                let rotated = rotate(&piece.shape);
                if self.collision(0, 0, Some(&rotated)) {
                    return false;
                }
                self.active = Some(Piece {
                    shape: rotated,
                    ..piece
                });
            }
        }
        true
    }

    /// Apply a raw key identifier (`"ArrowLeft"`, ...). Unknown keys are ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Command::from_key(key) {
            Some(command) => self.handle_input(command),
            None => false,
        }
    }

    /// Board with the active piece drawn on top, for presentation
    pub fn render_view(&self) -> Board {
        let mut view = self.board.clone();
        if let Some(piece) = &self.active {
            let marker = piece.kind.marker();
            for (x, y) in piece.board_cells() {
                view.set(x, y, marker);
            }
        }
        view
    }

    /// Reset the game and start the clock
    pub fn start(&mut self) {
        self.scheduler.stop();
        self.board.clear();
        self.score = 0;
        self.game_over = false;
        self.active = None;

        info!(
            "starting {}x{} game, tick {:?}",
            self.board.rows(),
            self.board.cols(),
            self.tick_interval
        );

        if self.spawn_piece() {
            self.scheduler.start(self.tick_interval);
        }
    }

    /// Halt the clock. Idempotent.
    pub fn stop(&mut self) {
        if self.scheduler.is_running() {
            info!("stopping game, score {}", self.score);
        }
        self.scheduler.stop();
    }

    /// Run every tick the scheduler reports as due. Returns how many ran.
    pub fn run_pending(&mut self) -> u32 {
        let due = self.scheduler.poll();
        let mut ran = 0;
        for _ in 0..due {
            if self.game_over {
                break;
            }
            self.tick();
            ran += 1;
        }
        ran
    }
}
