//! Game session engine for a two-player pawn-rank duel played on a chess board.
//!
//! The board uses its own addressing convention: files `a`..`h`, ranks `0`..`7`,
//! with rank 0 holding Black's back rank and rank 7 holding White's.

pub mod board;
pub mod coord;
pub mod error;
pub mod piece;
pub mod session;

pub use board::Board;
pub use coord::Coordinate;
pub use error::GameError;
pub use piece::{is_legal_shape, Color, Piece, PieceKind};
pub use session::{GameStatus, MoveOutcome, MoveRecord, Player, Session};
