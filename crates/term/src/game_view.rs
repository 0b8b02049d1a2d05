//! GameView: turns the engine's render view into text lines.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::Board;
use crate::types::EMPTY;

/// Glyph for an occupied cell (two columns to offset terminal glyph aspect ratio)
pub const BLOCK: &str = "[]";
/// Glyph for an empty cell
pub const EMPTY_CELL: &str = " .";

/// Lay out the board framed by walls, followed by the status lines.
pub fn frame_lines(view: &Board, score: u32, game_over: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows() + 4);

    for row in view.iter_rows() {
        let mut line = String::with_capacity(row.len() * 2 + 4);
        line.push_str("<!");
        for &cell in row {
            line.push_str(if cell == EMPTY { EMPTY_CELL } else { BLOCK });
        }
        line.push_str("!>");
        lines.push(line);
    }
    lines.push(format!("<!{}!>", "=".repeat(view.cols() * 2)));

    lines.push(format!("Score: {}", score));
    if game_over {
        lines.push("GAME OVER - r: restart, q: quit".to_string());
    } else {
        lines.push("arrows/hjkl: move, up/k: rotate, q: quit".to_string());
    }
    lines
}
