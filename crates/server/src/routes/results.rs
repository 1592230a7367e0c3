use axum::{Extension, Json};
use sqlx::SqlitePool;

use crate::db::matches::{self, MatchResult};
use crate::error::AppError;

/// GET /api/results
pub async fn get_match_results(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    let results = matches::list_match_results(&pool).await?;
    Ok(Json(results))
}
