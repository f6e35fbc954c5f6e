//! The pure collision check shared by moves, rotation, and spawning.

use brickfall_types::{BOARD_HEIGHT, BOARD_WIDTH};

use crate::board::Board;
use crate::piece::Piece;
use crate::shape::Shape;

/// Whether the piece, displaced by (dx, dy), would overlap a wall, the
/// floor, or a locked cell.
///
/// Pass a `shape_override` to test a candidate orientation (rotation
/// legality) at the piece's current origin. Cells above the visible board
/// (row < 0) are only checked against the side walls, so a freshly spawned
/// piece can overhang the top edge without counting as a collision.
pub fn collides(
    board: &Board,
    piece: &Piece,
    dx: i8,
    dy: i8,
    shape_override: Option<&Shape>,
) -> bool {
    let shape = shape_override.unwrap_or_else(|| piece.shape());
    for (sx, sy) in shape.filled_cells() {
        let x = piece.x + sx + dx;
        let y = piece.y + sy + dy;
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y >= 0 && board.is_occupied(x, y) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickfall_types::PieceKind;

    #[test]
    fn empty_board_is_collision_free() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::T);
        assert!(!collides(&board, &piece, 0, 0, None));
        assert!(!collides(&board, &piece, 0, 1, None));
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::O); // x = 4, 2 wide

        assert!(collides(&board, &piece, -5, 0, None)); // past the left wall
        assert!(!collides(&board, &piece, -4, 0, None)); // flush against it
        assert!(collides(&board, &piece, 5, 0, None)); // past the right wall
        assert!(!collides(&board, &piece, 4, 0, None));
        assert!(collides(&board, &piece, 0, 19, None)); // through the floor
        assert!(!collides(&board, &piece, 0, 18, None)); // resting on it
    }

    #[test]
    fn locked_cells_collide() {
        let mut board = Board::new();
        let piece = Piece::spawn(PieceKind::O);
        board.set(piece.x, 1, Some(PieceKind::I));

        assert!(collides(&board, &piece, 0, 0, None));
        assert!(!collides(&board, &piece, 1, 0, None));
    }

    #[test]
    fn rows_above_the_board_ignore_contents() {
        let mut board = Board::new();
        // Top row fully occupied.
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 0, Some(PieceKind::J));
        }
        let mut piece = Piece::spawn(PieceKind::I);
        piece.translate(0, -1);

        // Entirely above the board: only the side walls matter.
        assert!(!collides(&board, &piece, 0, 0, None));
        assert!(collides(&board, &piece, -4, 0, None));
        // One row down it meets the locked cells.
        assert!(collides(&board, &piece, 0, 1, None));
    }

    #[test]
    fn shape_override_tests_candidate_orientation() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::I);
        piece.translate(0, 17); // 1x4 near the floor

        let vertical = piece.shape().rotated();
        // Horizontal fits, the 4-tall candidate pokes through the floor.
        assert!(!collides(&board, &piece, 0, 0, None));
        assert!(collides(&board, &piece, 0, 0, Some(&vertical)));
    }
}
