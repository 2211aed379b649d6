use axum::{extract::rejection::JsonRejection, Extension, Json};
use chess_core::{BoardArray, Game, GameSummary, MaterialScore, Players};
use serde::{Deserialize, Serialize};

use crate::db::games;
use crate::error::AppError;
use crate::{HistoryPool, SharedGame};

#[derive(Deserialize, Default)]
pub struct StartRequest {
    pub player_white: Option<String>,
    pub player_black: Option<String>,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    #[serde(rename = "move")]
    pub uci: Option<String>,
}

/// Position fields shared by the board and move responses.
#[derive(Serialize)]
pub struct BoardState {
    pub fen: String,
    pub board: BoardArray,
    pub turn: &'static str,
    pub is_game_over: bool,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub material: MaterialScore,
}

impl BoardState {
    fn of(game: &Game) -> Self {
        let status = game.status();
        Self {
            fen: game.fen(),
            board: game.board_array(),
            turn: status.turn_name(),
            is_game_over: status.is_game_over(),
            is_check: status.is_check,
            is_checkmate: status.is_checkmate,
            is_stalemate: status.is_stalemate,
            material: game.material(),
        }
    }
}

#[derive(Serialize)]
pub struct StartResponse {
    pub success: bool,
    pub player_white: Option<String>,
    pub player_black: Option<String>,
    pub fen: String,
    pub board: BoardArray,
    pub turn: &'static str,
}

#[derive(Serialize)]
pub struct MoveResponse {
    pub success: bool,
    #[serde(flatten)]
    pub state: BoardState,
    pub captured_piece: String,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub fen: String,
    pub board: BoardArray,
    pub turn: &'static str,
    pub material: MaterialScore,
}

/// POST /start
/// New game with optional player names. A request without a JSON body
/// starts an anonymous game.
pub async fn start_game(
    Extension(shared): Extension<SharedGame>,
    body: Result<Json<StartRequest>, JsonRejection>,
) -> Result<Json<StartResponse>, AppError> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => StartRequest::default(),
        Err(e) => return Err(AppError::BadRequest(e.body_text())),
    };

    let mut game = shared.lock().await;
    game.start(Players {
        white: req.player_white,
        black: req.player_black,
    });

    let players = game.players().clone();
    tracing::info!(
        "New game: {} vs {}",
        players.white.as_deref().unwrap_or("?"),
        players.black.as_deref().unwrap_or("?")
    );

    Ok(Json(StartResponse {
        success: true,
        player_white: players.white,
        player_black: players.black,
        fen: game.fen(),
        board: game.board_array(),
        turn: "white",
    }))
}

/// GET /board
pub async fn get_board(Extension(shared): Extension<SharedGame>) -> Json<BoardState> {
    let game = shared.lock().await;
    Json(BoardState::of(&game))
}

/// POST /move
/// Play one move in coordinate notation. When the move ends the game the
/// finished game is recorded before responding.
pub async fn make_move(
    Extension(shared): Extension<SharedGame>,
    Extension(history): Extension<HistoryPool>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, AppError> {
    let Json(req) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let uci = req
        .uci
        .ok_or_else(|| AppError::BadRequest("Missing 'move' field".into()))?;

    let mut game = shared.lock().await;
    let outcome = game.apply_uci(&uci).inspect_err(|e| {
        tracing::debug!("Rejected move {uci:?}: {e}");
    })?;
    tracing::info!("Played {} (ply {})", outcome.uci, game.ply_count());

    if outcome.status.is_game_over() {
        if let Some(summary) = game.summary() {
            tracing::info!(
                "Game over: {} ({:?})",
                summary.result,
                outcome.status.termination
            );
            record_finished_game(&history, &summary).await;
        }
    }

    Ok(Json(MoveResponse {
        success: true,
        state: BoardState::of(&game),
        captured_piece: outcome.captured_code(),
    }))
}

/// Best-effort write; a storage failure never undoes or hides the move.
async fn record_finished_game(history: &HistoryPool, summary: &GameSummary) {
    let Some(pool) = history else {
        return;
    };

    match games::insert_game(pool, summary).await {
        Ok(id) => tracing::info!("Recorded game {id}"),
        Err(e) => tracing::warn!("Failed to record finished game: {e}"),
    }
}

/// POST /reset
pub async fn reset_board(Extension(shared): Extension<SharedGame>) -> Json<ResetResponse> {
    let mut game = shared.lock().await;
    game.reset();
    tracing::info!("Board reset");

    Json(ResetResponse {
        success: true,
        fen: game.fen(),
        board: game.board_array(),
        turn: "white",
        material: game.material(),
    })
}
