//! Property tests for the board, rotation and engine invariants.

use proptest::prelude::*;

use blockfall::core::{
    rotate, Board, GameConfig, GameEngine, ManualScheduler, ScriptedSource, Shape, SimpleRng,
};
use blockfall::types::{Cell, Command, EMPTY};

/// Rectangular 0/1 matrices up to 4x4
fn shape_rows() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::collection::vec(0u8..=1, w), h)
    })
}

/// Boards with a healthy share of full rows
fn board_rows() -> impl Strategy<Value = Vec<Vec<Cell>>> {
    (1usize..=12, 1usize..=8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(
            prop_oneof![
                Just(vec![1u8; cols]),
                prop::collection::vec(0u8..=7, cols),
            ],
            rows,
        )
    })
}

fn command(op: u8) -> Option<Command> {
    match op {
        0 => Some(Command::MoveLeft),
        1 => Some(Command::MoveRight),
        2 => Some(Command::MoveDown),
        3 => Some(Command::Rotate),
        _ => None,
    }
}

proptest! {
    #[test]
    fn four_rotations_are_identity(rows in shape_rows()) {
        let shape = Shape::from_rows(&rows).unwrap();
        let back = rotate(&rotate(&rotate(&rotate(&shape))));
        prop_assert_eq!(back, shape);
    }

    #[test]
    fn rotation_preserves_cell_count(rows in shape_rows()) {
        let shape = Shape::from_rows(&rows).unwrap();
        let rotated = rotate(&shape);
        prop_assert_eq!(rotated.cells().len(), shape.cells().len());
        prop_assert_eq!((rotated.width(), rotated.height()), (shape.height(), shape.width()));
    }

    #[test]
    fn clear_lines_keeps_dimensions_and_leaves_no_full_row(rows in board_rows()) {
        let mut board = Board::from_rows(&rows).unwrap();
        let (r, c) = (board.rows(), board.cols());
        let full_before = (0..r).filter(|&y| board.is_row_full(y)).count();
        let filled_before: usize = rows
            .iter()
            .filter(|row| row.iter().any(|&v| v == EMPTY))
            .map(|row| row.iter().filter(|&&v| v != EMPTY).count())
            .sum();

        let cleared = board.clear_full_rows();

        prop_assert_eq!(cleared, full_before);
        prop_assert_eq!((board.rows(), board.cols()), (r, c));
        prop_assert_eq!(board.cells().len(), r * c);
        for y in 0..r {
            prop_assert!(!board.is_row_full(y));
        }
        // Surviving cells are moved, never lost or invented.
        let filled_after = board.cells().iter().filter(|&&v| v != EMPTY).count();
        prop_assert_eq!(filled_after, filled_before);
    }

    #[test]
    fn score_is_100_per_cleared_row(rows in board_rows()) {
        let board = Board::from_rows(&rows).unwrap();
        let full = (0..board.rows()).filter(|&y| board.is_row_full(y)).count();

        let mut game = GameEngine::with_parts(
            GameConfig::with_size(board.rows(), board.cols()),
            ScriptedSource::constant(0),
            ManualScheduler::new(),
        );
        prop_assert!(game.load_board(board));
        prop_assert_eq!(game.clear_lines(), full);
        prop_assert_eq!(game.score(), 100 * full as u32);
    }

    #[test]
    fn collision_matches_bounds_and_occupancy(
        rows in shape_rows(),
        pick in 0usize..7,
        dx in -6i32..6,
        dy in -4i32..22,
        blocks in prop::collection::vec((0i32..10, 0i32..20), 0..30),
    ) {
        let shape = Shape::from_rows(&rows).unwrap();
        let mut board = Board::new(20, 10);
        for &(x, y) in &blocks {
            board.set(x, y, 1);
        }

        let mut game = GameEngine::with_parts(
            GameConfig::with_size(20, 10),
            ScriptedSource::constant(pick),
            ManualScheduler::new(),
        );
        prop_assert!(game.load_board(board.clone()));
        game.spawn_piece();
        let anchor = game.active().map(|p| (p.x, p.y)).unwrap();

        let expected = shape.cells().iter().any(|&(cx, cy)| {
            let x = anchor.0 + cx + dx;
            let y = anchor.1 + cy + dy;
            x < 0 || x >= 10 || y >= 20 || (y >= 0 && board.get(x, y) != Some(EMPTY))
        });
        prop_assert_eq!(game.collision(dx, dy, Some(&shape)), expected);
    }

    #[test]
    fn random_play_keeps_invariants(seed in any::<u32>(), ops in prop::collection::vec(0u8..6, 0..400)) {
        let mut game = GameEngine::with_parts(
            GameConfig::with_size(12, 6),
            SimpleRng::new(seed),
            ManualScheduler::new(),
        );
        game.start();
        let mut last_score = 0;

        for op in ops {
            let frozen = game.is_game_over().then(|| game.board().clone());

            match command(op) {
                Some(cmd) => {
                    game.handle_input(cmd);
                }
                None => {
                    game.tick();
                    for y in 0..game.rows() {
                        prop_assert!(!game.board().is_row_full(y));
                    }
                }
            }

            prop_assert_eq!((game.rows(), game.cols()), (12, 6));
            prop_assert!(game.score() >= last_score);
            prop_assert_eq!(game.score() % 100, 0);
            last_score = game.score();

            if let Some(before) = frozen {
                prop_assert_eq!(game.board(), &before);
            }
            // A live piece never overlaps the walls or settled cells.
            if !game.is_game_over() {
                prop_assert!(!game.collision(0, 0, None));
            }
        }
    }
}
