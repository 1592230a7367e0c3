use axum::{Extension, Json};
use duel_core::{Color, Coordinate, GameError, MoveOutcome, Piece};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use sqlx::SqlitePool;

use crate::db::matches;
use crate::error::AppError;
use crate::state::SessionSlot;

const MAX_NAME_LEN: usize = 64;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    pub player1: String,
    pub player2: String,
    pub player1_color: String,
    pub player2_color: String,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub player: String,
    pub from: String,
    pub to: String,
}

#[derive(Deserialize)]
pub struct FastWinRequest {
    pub winner: String,
}

fn validate_name(field: &str, raw: &str) -> Result<String, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(format!("{field} cannot be empty")));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

/// POST /api/game/start
pub async fn start_game(
    Extension(slot): Extension<SessionSlot>,
    Json(req): Json<StartRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let player1 = validate_name("player1", &req.player1)?;
    let player2 = validate_name("player2", &req.player2)?;
    let player1_color: Color = req.player1_color.parse()?;
    let player2_color: Color = req.player2_color.parse()?;

    let session = duel_core::Session::start(&player1, &player2, player1_color, player2_color)?;

    let mut current = slot.lock().await;
    if current.is_some() {
        tracing::info!("Discarding previous session");
    }
    *current = Some(session);

    tracing::info!(%player1, %player2, %player1_color, %player2_color, "Game started");

    Ok(Json(json!({
        "message": "Game started",
        "player1": player1,
        "player2": player2,
    })))
}

/// POST /api/game/move
pub async fn make_move(
    Extension(pool): Extension<SqlitePool>,
    Extension(slot): Extension<SessionSlot>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let from: Coordinate = req.from.parse()?;
    let to: Coordinate = req.to.parse()?;
    let player = req.player.trim();

    let (outcome, player1, player2) = {
        let mut current = slot.lock().await;
        let session = current.as_mut().ok_or(GameError::SessionNotStarted)?;

        let outcome = session.apply_move(player, from, to).map_err(|e| {
            tracing::debug!(%player, %from, %to, "Move rejected: {e}");
            e
        })?;

        let [p1, p2] = session.players();
        (outcome, p1.name.clone(), p2.name.clone())
    };

    tracing::info!(%player, "Piece moved from {from} to {to}");

    match outcome {
        MoveOutcome::Continue { next_player } => Ok(Json(json!({
            "message": "Move applied",
            "from": from,
            "to": to,
            "nextPlayer": next_player,
        }))),
        MoveOutcome::Finished { winner } => {
            tracing::info!(%winner, "Game finished");

            // The write runs on its own task so it completes even if this
            // request is dropped. The outcome stands if it fails.
            let save = tokio::spawn({
                let pool = pool.clone();
                let winner = winner.clone();
                async move { matches::save_match_result(&pool, &player1, &player2, &winner).await }
            });

            let warning = match save.await {
                Ok(Ok(id)) => {
                    tracing::info!(result_id = id, "Match result saved");
                    None
                }
                Ok(Err(e)) => {
                    tracing::warn!("Failed to save match result: {e}");
                    Some(format!("Match result could not be saved: {e}"))
                }
                Err(e) => {
                    tracing::warn!("Match result task failed: {e}");
                    Some(format!("Match result could not be saved: {e}"))
                }
            }
            .map(|detail| json!({ "code": "persistence_failure", "detail": detail }));

            Ok(Json(json!({
                "message": format!("{winner} wins!"),
                "from": from,
                "to": to,
                "winner": winner,
                "warning": warning,
            })))
        }
    }
}

/// GET /api/game/board
///
/// Rows run from rank 7 down to rank 0; each cell is `null` or `{"type", "color"}`.
pub async fn get_board(
    Extension(slot): Extension<SessionSlot>,
) -> Result<Json<JsonValue>, AppError> {
    let current = slot.lock().await;
    let session = current.as_ref().ok_or(GameError::SessionNotStarted)?;

    let rows: Vec<Vec<Option<Piece>>> = session
        .board()
        .ranks_descending()
        .map(|row| row.to_vec())
        .collect();

    Ok(Json(json!({ "board": rows })))
}

/// GET /api/game
pub async fn get_game(
    Extension(slot): Extension<SessionSlot>,
) -> Result<Json<JsonValue>, AppError> {
    let current = slot.lock().await;
    let session = current.as_ref().ok_or(GameError::SessionNotStarted)?;

    Ok(Json(json!({
        "players": session.players(),
        "currentPlayer": session.current_player(),
        "status": session.status(),
        "winner": session.winner(),
        "moveCount": session.history().len(),
        "history": session.history(),
    })))
}

/// POST /api/game/fast-win
///
/// Records a result for the live session right away without touching its state.
pub async fn fast_win(
    Extension(pool): Extension<SqlitePool>,
    Extension(slot): Extension<SessionSlot>,
    Json(req): Json<FastWinRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let winner = validate_name("winner", &req.winner)?;

    let (current_player, opponent) = {
        let current = slot.lock().await;
        let session = current.as_ref().ok_or(GameError::SessionNotStarted)?;
        let due = session.current_color();
        (
            session.current_player().to_string(),
            session.player_with(due.opponent()).name.clone(),
        )
    };

    let id = matches::save_match_result(&pool, &current_player, &opponent, &winner).await?;
    tracing::info!(result_id = id, %winner, "Fast win recorded");

    Ok(Json(json!({
        "message": format!("Winner: {winner}"),
        "id": id,
    })))
}
