//! The falling piece and the piece factory.

use brickfall_types::{PieceKind, BOARD_WIDTH};

use crate::rng::SimpleRng;
use crate::shape::Shape;

/// The active (or look-ahead) piece: kind, orientation matrix, and origin.
///
/// The origin is the top-left corner of the matrix's bounding box in board
/// coordinates. A piece is only ever mutated by translating its origin or by
/// replacing its matrix on rotation; everything else is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    shape: Shape,
}

impl Piece {
    /// Create a piece of the given kind at its spawn position: horizontally
    /// centered (matrix center on board center), top row at 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::base(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8;
        Self { kind, x, y: 0, shape }
    }

    /// The current orientation matrix.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Replace the orientation matrix (successful rotation).
    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    /// Translate the origin.
    pub(crate) fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Iterate the filled cells in board coordinates.
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(|(sx, sy)| (self.x + sx, self.y + sy))
    }
}

/// Produces new pieces with a uniform random kind.
///
/// No bag, no history avoidance: every draw is an independent uniform
/// choice over the seven kinds, so repeats happen.
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
}

impl PieceFactory {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw a fresh piece at its spawn position.
    pub fn next_piece(&mut self) -> Piece {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        Piece::spawn(PieceKind::ALL[index])
    }

    /// Current RNG state, used to reseed a successor session on reset.
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_horizontally_centered() {
        // I is 4 wide: 10/2 - 4/2 = 3. O is 2 wide: 5 - 1 = 4.
        assert_eq!(Piece::spawn(PieceKind::I).x, 3);
        assert_eq!(Piece::spawn(PieceKind::O).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T).x, 4);
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind).y, 0);
        }
    }

    #[test]
    fn board_cells_follow_the_origin() {
        let mut piece = Piece::spawn(PieceKind::O);
        let before: Vec<_> = piece.board_cells().collect();
        piece.translate(-1, 2);
        let after: Vec<_> = piece.board_cells().collect();
        for ((bx, by), (ax, ay)) in before.iter().zip(&after) {
            assert_eq!(bx - 1, *ax);
            assert_eq!(by + 2, *ay);
        }
    }

    #[test]
    fn factory_is_deterministic_per_seed() {
        let mut a = PieceFactory::new(99);
        let mut b = PieceFactory::new(99);
        for _ in 0..20 {
            assert_eq!(a.next_piece().kind, b.next_piece().kind);
        }
    }

    #[test]
    fn factory_eventually_produces_every_kind() {
        let mut factory = PieceFactory::new(1);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[factory.next_piece().kind.code() as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s), "all kinds should appear: {seen:?}");
    }
}
