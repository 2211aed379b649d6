use crate::status::GameResult;

/// Display names for the two sides. Free text, never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Players {
    pub white: Option<String>,
    pub black: Option<String>,
}

/// Everything worth keeping about a game once it has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub fen: String,
    pub result: GameResult,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub player_white: Option<String>,
    pub player_black: Option<String>,
    pub moves_count: i64, // plies
}
