use sqlx::SqlitePool;

use crate::error::AppError;

#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct MatchResult {
    pub id: i64,
    pub player1: String,
    pub player2: String,
    pub winner: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

pub async fn save_match_result(
    pool: &SqlitePool,
    player1: &str,
    player2: &str,
    winner: &str,
) -> Result<i64, AppError> {
    let row: (i64,) = sqlx::query_as(
        r#"INSERT INTO matches (player1, player2, winner, timestamp)
           VALUES (?, ?, ?, ?)
           RETURNING id"#,
    )
    .bind(player1)
    .bind(player2)
    .bind(winner)
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await
    .map_err(AppError::Sqlx)?;

    Ok(row.0)
}

/// All recorded results, oldest first.
pub async fn list_match_results(pool: &SqlitePool) -> Result<Vec<MatchResult>, AppError> {
    sqlx::query_as::<_, MatchResult>(
        "SELECT id, player1, player2, winner, timestamp FROM matches ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .map_err(AppError::Sqlx)
}
