//! Rejections produced by the engine.
//!
//! Every variant leaves the session exactly as it was before the request.

use thiserror::Error;

use crate::coord::Coordinate;
use crate::piece::PieceKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Game has not been started")]
    SessionNotStarted,

    #[error("Game is already finished")]
    SessionFinished,

    #[error("Both players chose {0}")]
    ColorConflict(String),

    #[error("Players must have different names")]
    SamePlayer,

    #[error("It is not {player}'s turn; {expected} is to move")]
    NotYourTurn { player: String, expected: String },

    #[error("No piece on square {0}")]
    EmptySquare(Coordinate),

    #[error("The piece on {0} is not yours")]
    WrongOwner(Coordinate),

    #[error("Square {0} is already occupied")]
    DestinationOccupied(Coordinate),

    #[error("A {kind} cannot move from {from} to {to}")]
    IllegalShape {
        kind: PieceKind,
        from: Coordinate,
        to: Coordinate,
    },
}

impl GameError {
    /// Stable machine-readable identifier for the rejection.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::InvalidCoordinate(_) => "invalid_coordinate",
            GameError::InvalidColor(_) => "invalid_color",
            GameError::SessionNotStarted => "session_not_started",
            GameError::SessionFinished => "session_finished",
            GameError::ColorConflict(_) => "color_conflict",
            GameError::SamePlayer => "same_player",
            GameError::NotYourTurn { .. } => "not_your_turn",
            GameError::EmptySquare(_) => "empty_square",
            GameError::WrongOwner(_) => "wrong_owner",
            GameError::DestinationOccupied(_) => "destination_occupied",
            GameError::IllegalShape { .. } => "illegal_shape",
        }
    }
}
