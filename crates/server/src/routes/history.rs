use axum::{Extension, Json};

use crate::db::games::{self, GameRecord};
use crate::error::AppError;
use crate::HistoryPool;

/// GET /history
/// All finished games, newest first. Empty when history is disabled.
pub async fn get_history(
    Extension(history): Extension<HistoryPool>,
) -> Result<Json<Vec<GameRecord>>, AppError> {
    let Some(pool) = history else {
        return Ok(Json(Vec::new()));
    };

    let records = games::list_games(&pool).await?;
    Ok(Json(records))
}
