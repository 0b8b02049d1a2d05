//! Pieces module - tetromino shape matrices and rotation
//!
//! Shapes are small rectangular 0/1 matrices (at most 4x4). Rotation is the
//! plain matrix rotation: transpose, then reverse the row order of the result,
//! which turns a row-major matrix 90 degrees clockwise. There are no kick tables.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest side of a shape matrix
pub const MAX_SIDE: usize = 4;

/// Offset of a single occupied cell relative to the shape's top-left corner
pub type CellOffset = (i32, i32);

/// Occupied cells of a shape, in row-major order
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SIDE * MAX_SIDE }>;

/// A rectangular 0/1 matrix of at most `MAX_SIDE x MAX_SIDE` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Row-major storage; only the first `width * height` entries are meaningful
    cells: [u8; MAX_SIDE * MAX_SIDE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values (any nonzero counts as occupied).
    ///
    /// Returns `None` for empty, ragged or oversized input.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.as_ref().len();
        if width == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return None;
        }

        let mut cells = [0; MAX_SIDE * MAX_SIDE];
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            for (x, &c) in row.iter().enumerate() {
                cells[y * width + x] = u8::from(c != 0);
            }
        }

        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    /// Const constructor for the static catalog
    const fn fixed<const W: usize, const H: usize>(rows: [[u8; W]; H]) -> Self {
        let mut cells = [0; MAX_SIDE * MAX_SIDE];
        let mut y = 0;
        while y < H {
            let mut x = 0;
            while x < W {
                cells[y * W + x] = rows[y][x];
                x += 1;
            }
            y += 1;
        }
        Self {
            width: W as u8,
            height: H as u8,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Whether the cell at column `x`, row `y` is occupied
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height() && self.cells[y * self.width() + x] != 0
    }

    /// Occupied cell offsets, row-major
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.is_filled(x, y) {
                    out.push((x as i32, y as i32));
                }
            }
        }
        out
    }

    /// Rows of 0/1 values
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height())
            .map(|y| (0..self.width()).map(|x| u8::from(self.is_filled(x, y))).collect())
            .collect()
    }

    /// Rotated copy, see [`rotate`]
    pub fn rotated(&self) -> Self {
        rotate(self)
    }
}

/// Rotate a shape 90 degrees clockwise (transpose, then reverse rows).
///
/// The result is `height x width`; row `i` of the result is column `i` of the
/// input read bottom to top.
pub fn rotate(shape: &Shape) -> Shape {
    let (w, h) = (shape.width(), shape.height());
    let mut cells = [0; MAX_SIDE * MAX_SIDE];
    // New shape is h wide and w tall.
    for ny in 0..w {
        for nx in 0..h {
            cells[ny * h + nx] = u8::from(shape.is_filled(ny, h - 1 - nx));
        }
    }
    Shape {
        width: h as u8,
        height: w as u8,
        cells,
    }
}

/// The fixed tetromino catalog, in [`PieceKind::ALL`] order
pub static PIECE_CATALOG: [Shape; 7] = [
    // I
    Shape::fixed([[1, 1, 1, 1]]),
    // O
    Shape::fixed([[1, 1], [1, 1]]),
    // T
    Shape::fixed([[0, 1, 0], [1, 1, 1]]),
    // S
    Shape::fixed([[0, 1, 1], [1, 1, 0]]),
    // Z
    Shape::fixed([[1, 1, 0], [0, 1, 1]]),
    // J
    Shape::fixed([[1, 0, 0], [1, 1, 1]]),
    // L
    Shape::fixed([[0, 0, 1], [1, 1, 1]]),
];

/// Spawn shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    PIECE_CATALOG[catalog_index(kind)]
}

/// Position of a kind inside [`PIECE_CATALOG`]
pub fn catalog_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::S => 3,
        PieceKind::Z => 4,
        PieceKind::J => 5,
        PieceKind::L => 6,
    }
}
