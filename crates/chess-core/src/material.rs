use serde::{Deserialize, Serialize};
use shakmaty::{Board, Color, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialScore {
    pub white: i32,
    pub black: i32,
    /// white - black
    pub balance: i32,
}

/// Standard piece values. The king counts for nothing.
pub fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 1,
        Role::Knight => 3,
        Role::Bishop => 3,
        Role::Rook => 5,
        Role::Queen => 9,
        Role::King => 0,
    }
}

fn side_total(board: &Board, color: Color) -> i32 {
    Role::ALL
        .iter()
        .map(|&role| {
            let count = (board.by_role(role) & board.by_color(color)).count() as i32;
            count * piece_value(role)
        })
        .sum()
}

/// Sum piece values per side.
pub fn material_score(board: &Board) -> MaterialScore {
    let white = side_total(board, Color::White);
    let black = side_total(board, Color::Black);
    MaterialScore {
        white,
        black,
        balance: white - black,
    }
}
