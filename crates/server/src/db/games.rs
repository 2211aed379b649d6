use chess_core::GameSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::AppError;

/// A finished game as stored. Rows are never updated once written.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GameRecord {
    pub id: i64,
    pub fen: String,
    pub result: String,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub player_white: Option<String>,
    pub player_black: Option<String>,
    pub moves_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Store a finished game. Returns the new row id.
pub async fn insert_game(pool: &SqlitePool, game: &GameSummary) -> Result<i64, AppError> {
    let created_at = Utc::now();

    let done = sqlx::query(
        r#"INSERT INTO games (
            fen, result, is_checkmate, is_stalemate,
            player_white, player_black, moves_count, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(&game.fen)
    .bind(game.result.as_str())
    .bind(game.is_checkmate)
    .bind(game.is_stalemate)
    .bind(&game.player_white)
    .bind(&game.player_black)
    .bind(game.moves_count)
    .bind(created_at)
    .execute(pool)
    .await
    .map_err(AppError::Sqlx)?;

    Ok(done.last_insert_rowid())
}

/// Every stored game, newest first.
pub async fn list_games(pool: &SqlitePool) -> Result<Vec<GameRecord>, AppError> {
    let rows = sqlx::query_as::<_, GameRecord>(
        r#"SELECT id, fen, result, is_checkmate, is_stalemate,
                  player_white, player_black, moves_count, created_at
           FROM games
           ORDER BY created_at DESC, id DESC"#,
    )
    .fetch_all(pool)
    .await
    .map_err(AppError::Sqlx)?;

    Ok(rows)
}
