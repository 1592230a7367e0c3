//! Turn-based game session: validates move requests, applies them to the
//! board, alternates turns and decides the outcome.
//!
//! A side loses as soon as it is due to move with no pawn of its own color left
//! on its home pawn rank. There is no other way for a game to end.

use serde::Serialize;

use crate::board::Board;
use crate::coord::Coordinate;
use crate::error::GameError;
use crate::piece::{Color, Piece};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub player: String,
    pub piece: Piece,
    pub from: Coordinate,
    pub to: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum GameStatus {
    InProgress,
    Finished { winner: String },
}

/// What an accepted move led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { next_player: String },
    Finished { winner: String },
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    history: Vec<MoveRecord>,
    players: [Player; 2],
    current: Color,
    status: GameStatus,
}

impl Session {
    /// Start a fresh game. `player1` is bound to `player1_color`, `player2` to
    /// `player2_color`; the colors must differ. White moves first.
    pub fn start(
        player1: &str,
        player2: &str,
        player1_color: Color,
        player2_color: Color,
    ) -> Result<Self, GameError> {
        if player1_color == player2_color {
            return Err(GameError::ColorConflict(player1_color.to_string()));
        }
        if player1 == player2 {
            return Err(GameError::SamePlayer);
        }

        // Both sides are always repopulated, whichever color each player picked.
        let mut board = Board::initial_setup();
        board.seed_pawn_rank(player1_color);
        board.seed_back_rank(player1_color);
        board.seed_pawn_rank(player2_color);
        board.seed_back_rank(player2_color);

        Ok(Self {
            board,
            history: Vec::new(),
            players: [
                Player {
                    name: player1.to_string(),
                    color: player1_color,
                },
                Player {
                    name: player2.to_string(),
                    color: player2_color,
                },
            ],
            current: Color::White,
            status: GameStatus::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<&str> {
        match &self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    /// Players in start order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player_with(&self, color: Color) -> &Player {
        if self.players[0].color == color {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    pub fn current_player(&self) -> &str {
        &self.player_with(self.current).name
    }

    pub fn current_color(&self) -> Color {
        self.current
    }

    /// Validate and apply one move.
    ///
    /// The piece is always the one standing on `from`; callers never name it.
    /// A rejection leaves board, history and turn untouched.
    pub fn apply_move(
        &mut self,
        player: &str,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<MoveOutcome, GameError> {
        if self.is_finished() {
            return Err(GameError::SessionFinished);
        }

        let current = self.player_with(self.current);
        if player != current.name {
            return Err(GameError::NotYourTurn {
                player: player.to_string(),
                expected: current.name.clone(),
            });
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::EmptySquare(from))?;

        if piece.color != current.color {
            return Err(GameError::WrongOwner(from));
        }

        if self.board.is_occupied(to) {
            return Err(GameError::DestinationOccupied(to));
        }

        if !piece.is_legal_shape(from, to) {
            return Err(GameError::IllegalShape {
                kind: piece.kind,
                from,
                to,
            });
        }

        self.board.clear(from);
        self.board.place(to, piece);
        self.history.push(MoveRecord {
            player: player.to_string(),
            piece,
            from,
            to,
        });
        self.current = self.current.opponent();

        Ok(self.evaluate_termination())
    }

    /// Checks the side now due to move. If its home pawn rank holds none of its
    /// pawns, the player who just moved wins.
    fn evaluate_termination(&mut self) -> MoveOutcome {
        let due = self.current;
        if self.board.has_pawn_on_rank(due, due.home_pawn_rank()) {
            return MoveOutcome::Continue {
                next_player: self.current_player().to_string(),
            };
        }

        let winner = self.player_with(due.opponent()).name.clone();
        self.status = GameStatus::Finished {
            winner: winner.clone(),
        };
        MoveOutcome::Finished { winner }
    }
}
