//! 8x8 grid of optional pieces.
//!
//! Row `r` of the grid is rank `r`. Black's back rank sits on rank 0 and its
//! pawns on rank 1; White's pawns sit on rank 6 and its back rank on rank 7.

use crate::coord::{Coordinate, BOARD_SIZE};
use crate::piece::{Color, Piece, PieceKind};

type Grid = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting arrangement for both colors.
    pub fn initial_setup() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            board.seed_back_rank(color);
            board.seed_pawn_rank(color);
        }
        board
    }

    /// Refill `color`'s home pawn rank with eight pawns of that color.
    pub fn seed_pawn_rank(&mut self, color: Color) {
        let row = color.home_pawn_rank() as usize;
        self.cells[row] = [Some(Piece::new(PieceKind::Pawn, color)); BOARD_SIZE];
    }

    /// Refill `color`'s back rank with rook, knight, bishop, queen, king, bishop, knight, rook.
    pub fn seed_back_rank(&mut self, color: Color) {
        let row = color.back_rank() as usize;
        self.cells[row] = PieceKind::BACK_RANK.map(|kind| Some(Piece::new(kind, color)));
    }

    pub fn piece_at(&self, coord: Coordinate) -> Option<Piece> {
        let (row, col) = coord.to_index();
        self.cells[row][col]
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.piece_at(coord).is_some()
    }

    pub(crate) fn place(&mut self, coord: Coordinate, piece: Piece) {
        let (row, col) = coord.to_index();
        self.cells[row][col] = Some(piece);
    }

    pub(crate) fn clear(&mut self, coord: Coordinate) -> Option<Piece> {
        let (row, col) = coord.to_index();
        self.cells[row][col].take()
    }

    /// Whether any pawn of `color` stands anywhere on `rank`.
    pub fn has_pawn_on_rank(&self, color: Color, rank: u8) -> bool {
        self.cells[rank as usize]
            .iter()
            .flatten()
            .any(|p| p.kind == PieceKind::Pawn && p.color == color)
    }

    /// Grid rows from rank 7 down to rank 0, files `a`..`h` within each row.
    pub fn ranks_descending(&self) -> impl Iterator<Item = &[Option<Piece>; BOARD_SIZE]> {
        self.cells.iter().rev()
    }

    /// Occupied squares with their pieces, rank 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(|c| self.piece_at(c).map(|p| (c, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::initial_setup();

        assert_eq!(board.piece_at(sq("a0")), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(board.piece_at(sq("e0")), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(board.piece_at(sq("d7")), Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(board.piece_at(sq("g7")), Some(Piece::new(PieceKind::Knight, Color::White)));

        for file in 0..8 {
            let black_pawn = Coordinate::new(file, 1).unwrap();
            let white_pawn = Coordinate::new(file, 6).unwrap();
            assert_eq!(board.piece_at(black_pawn), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            assert_eq!(board.piece_at(white_pawn), Some(Piece::new(PieceKind::Pawn, Color::White)));
            for rank in 2..6 {
                assert!(!board.is_occupied(Coordinate::new(file, rank).unwrap()));
            }
        }

        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_reseeding_restores_ranks() {
        let mut board = Board::empty();
        board.seed_pawn_rank(Color::White);
        board.seed_back_rank(Color::Black);
        assert!(board.has_pawn_on_rank(Color::White, 6));
        assert!(!board.has_pawn_on_rank(Color::Black, 1));
        assert_eq!(board.pieces().count(), 16);

        board.seed_pawn_rank(Color::Black);
        board.seed_back_rank(Color::White);
        assert_eq!(board, Board::initial_setup());
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::initial_setup();
        let pawn = board.clear(sq("c6")).unwrap();
        assert!(!board.is_occupied(sq("c6")));
        board.place(sq("c3"), pawn);
        assert_eq!(board.piece_at(sq("c3")), Some(pawn));
        assert_eq!(board.clear(sq("c6")), None);
    }

    #[test]
    fn test_has_pawn_on_rank_checks_color() {
        let mut board = Board::empty();
        board.place(sq("b6"), Piece::new(PieceKind::Pawn, Color::Black));
        board.place(sq("c6"), Piece::new(PieceKind::Rook, Color::White));
        assert!(!board.has_pawn_on_rank(Color::White, 6));
        assert!(board.has_pawn_on_rank(Color::Black, 6));
    }

    #[test]
    fn test_ranks_descending_starts_with_white_back_rank() {
        let board = Board::initial_setup();
        let rows: Vec<_> = board.ranks_descending().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0][4], Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(rows[1][0], Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(rows[7][0], Some(Piece::new(PieceKind::Rook, Color::Black)));
    }
}
