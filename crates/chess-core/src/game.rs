//! The single live game: position, move list, repetition keys and players.

use std::collections::HashMap;

use shakmaty::{fen::Fen, uci::UciMove, CastlingMode, Chess, EnPassantMode, Piece, Position};

use crate::board_array::{fen_to_array, BoardArray};
use crate::error::MoveError;
use crate::game_data::{GameSummary, Players};
use crate::material::{material_score, MaterialScore};
use crate::status::{GameStatus, Termination, REPETITION_LIMIT, SEVENTY_FIVE_MOVE_HALFMOVES};

/// Result of a move that was accepted and played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Normalized coordinate notation of the move played.
    pub uci: String,
    pub captured: Option<Piece>,
    /// Status of the position after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// Single-character code of the captured piece, or `""`.
    ///
    /// En passant reports the captured pawn even though the destination
    /// square was empty, so a board diff alone would show no capture.
    pub fn captured_code(&self) -> String {
        self.captured.map(|p| p.char().to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    pos: Chess,
    moves: Vec<String>,
    repetitions: HashMap<String, usize>,
    players: Players,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard initial position, no players.
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    fn from_position(pos: Chess) -> Self {
        let mut game = Self {
            pos,
            moves: Vec::new(),
            repetitions: HashMap::new(),
            players: Players::default(),
        };
        game.record_position();
        game
    }

    /// Back to the initial position. Player names are cleared.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Reset and name the two sides.
    pub fn start(&mut self, players: Players) {
        self.reset();
        self.players = players;
    }

    pub fn position(&self) -> &Chess {
        &self.pos
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Moves played since the last reset, in coordinate notation.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.pos, EnPassantMode::Legal).to_string()
    }

    pub fn board_array(&self) -> BoardArray {
        fen_to_array(&self.fen())
    }

    pub fn material(&self) -> MaterialScore {
        material_score(self.pos.board())
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            turn: self.pos.turn(),
            is_check: self.pos.is_check(),
            is_checkmate: self.pos.is_checkmate(),
            is_stalemate: self.pos.is_stalemate(),
            termination: self.termination(),
        }
    }

    fn termination(&self) -> Option<Termination> {
        if self.pos.is_checkmate() {
            Some(Termination::Checkmate {
                loser: self.pos.turn(),
            })
        } else if self.pos.is_stalemate() {
            Some(Termination::Stalemate)
        } else if self.pos.is_insufficient_material() {
            Some(Termination::InsufficientMaterial)
        } else if self.pos.halfmoves() >= SEVENTY_FIVE_MOVE_HALFMOVES {
            Some(Termination::SeventyFiveMoveRule)
        } else if self.repetition_count() >= REPETITION_LIMIT {
            Some(Termination::FivefoldRepetition)
        } else {
            None
        }
    }

    /// Parse, validate and play a move given in coordinate notation.
    ///
    /// Nothing changes unless the move is legal. A finished game accepts no
    /// further moves, even where the rules would still allow one (draws by
    /// the seventy-five-move rule or repetition).
    pub fn apply_uci(&mut self, text: &str) -> Result<MoveOutcome, MoveError> {
        let uci = parse_uci(text)?;

        if self.termination().is_some() {
            return Err(MoveError::Illegal);
        }

        let mv = uci.to_move(&self.pos).map_err(|_| MoveError::Illegal)?;
        let captured = mv.capture().map(|role| Piece {
            color: self.pos.turn().other(),
            role,
        });
        let played = mv.to_uci(CastlingMode::Standard).to_string();

        self.pos.play_unchecked(mv);
        self.moves.push(played.clone());
        self.record_position();

        Ok(MoveOutcome {
            uci: played,
            captured,
            status: self.status(),
        })
    }

    /// The record of a finished game. `None` while the game is in progress.
    pub fn summary(&self) -> Option<GameSummary> {
        let status = self.status();
        let result = status.result()?;

        Some(GameSummary {
            fen: self.fen(),
            result,
            is_checkmate: status.is_checkmate,
            is_stalemate: status.is_stalemate,
            player_white: self.players.white.clone(),
            player_black: self.players.black.clone(),
            moves_count: self.moves.len() as i64,
        })
    }

    fn record_position(&mut self) {
        *self.repetitions.entry(self.repetition_key()).or_insert(0) += 1;
    }

    fn repetition_count(&self) -> usize {
        self.repetitions
            .get(&self.repetition_key())
            .copied()
            .unwrap_or(0)
    }

    /// Placement, side to move, castling rights and en passant square.
    fn repetition_key(&self) -> String {
        self.fen()
            .split_whitespace()
            .take(4)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Read coordinate notation such as `e2e4` or `e7e8q`.
pub fn parse_uci(text: &str) -> Result<UciMove, MoveError> {
    text.trim()
        .parse::<UciMove>()
        .map_err(|_| MoveError::Malformed(text.to_string()))
}
