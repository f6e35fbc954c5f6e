//! Shape table and rotation.
//!
//! Each piece kind has one canonical orientation matrix (rows of 0/1 cells).
//! Rotation is the generic transpose-and-reverse transform, applied to the
//! matrix a piece currently carries; there is no per-kind rotation center and
//! no wall kicks. For O the transform is a no-op, for I it alternates between
//! 1x4 and 4x1.

use arrayvec::ArrayVec;

use brickfall_types::PieceKind;

/// Largest matrix extent (the I piece rotated vertically).
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<u8, MAX_SHAPE_DIM>;

/// An orientation matrix: rectangular, rows of equal length, 0/1 cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// Canonical spawn orientation for a piece kind.
    pub fn base(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
            PieceKind::L => Self::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        }
    }

    fn from_rows(rows: &[&[u8]]) -> Self {
        let mut out = ArrayVec::new();
        for row in rows {
            let mut cells = ShapeRow::new();
            cells.try_extend_from_slice(row).expect("shape row too wide");
            out.push(cells);
        }
        Self { rows: out }
    }

    /// Matrix width in cells.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Matrix height in cells.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cell at matrix position (x, y) is filled.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .is_some_and(|cell| *cell != 0)
    }

    /// Iterate the filled cells as (x, y) offsets from the matrix origin.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell != 0)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// The filled cells collected into a fixed array. Every tetromino matrix
    /// has exactly four filled cells.
    pub fn blocks(&self) -> [(i8, i8); 4] {
        let mut blocks = [(0i8, 0i8); 4];
        for (i, cell) in self.filled_cells().enumerate() {
            blocks[i] = cell;
        }
        blocks
    }

    /// Rotate 90° clockwise: transpose the matrix and reverse row order.
    pub fn rotated(&self) -> Self {
        let width = self.width();
        let height = self.height();
        let mut rows = ArrayVec::new();
        for x in 0..width {
            let mut row = ShapeRow::new();
            for y in (0..height).rev() {
                row.push(self.rows[y][x]);
            }
            rows.push(row);
        }
        Self { rows }
    }
}
