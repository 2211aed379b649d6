//! Terminal-state model for a single game.

use serde::{Deserialize, Serialize};
use shakmaty::Color;

/// Half-move clock value at which the game is drawn without a claim
/// (seventy-five full moves).
pub const SEVENTY_FIVE_MOVE_HALFMOVES: u32 = 150;

/// Occurrences of the same position that end the game.
pub const REPETITION_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
}

impl GameResult {
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }

    fn winner(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The side to move (the loser) is mated.
    Checkmate { loser: Color },
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoveRule,
    FivefoldRepetition,
}

impl Termination {
    pub fn result(self) -> GameResult {
        match self {
            Termination::Checkmate { loser } => GameResult::winner(loser.other()),
            _ => GameResult::Draw,
        }
    }
}

/// Snapshot of the flags reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub turn: Color,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub termination: Option<Termination>,
}

impl GameStatus {
    pub fn is_game_over(&self) -> bool {
        self.termination.is_some()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.termination.map(Termination::result)
    }

    /// "white" or "black".
    pub fn turn_name(&self) -> &'static str {
        color_name(self.turn)
    }
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}
