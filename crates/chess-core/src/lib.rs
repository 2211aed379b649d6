pub mod board_array;
pub mod error;
pub mod game;
pub mod game_data;
pub mod material;
pub mod status;

pub use board_array::{fen_to_array, placement_from_array, BoardArray};
pub use error::MoveError;
pub use game::{Game, MoveOutcome};
pub use game_data::{GameSummary, Players};
pub use material::{material_score, MaterialScore};
pub use status::{GameResult, GameStatus, Termination};
