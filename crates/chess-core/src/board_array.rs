//! FEN piece placement <-> 8x8 grid of single-character cells.

/// Rank 8 first, file a first. Empty squares are `""`.
pub type BoardArray = Vec<Vec<String>>;

/// Expand the piece-placement field of a FEN into an 8x8 grid.
///
/// Only the first whitespace-separated field is read, so a full FEN and a
/// bare placement string give the same result. Digits expand into that many
/// empty cells.
pub fn fen_to_array(fen: &str) -> BoardArray {
    let placement = fen.split_whitespace().next().unwrap_or("");

    placement
        .split('/')
        .map(|rank| {
            let mut row = Vec::with_capacity(8);
            for ch in rank.chars() {
                match ch.to_digit(10) {
                    Some(n) => row.extend(std::iter::repeat(String::new()).take(n as usize)),
                    None => row.push(ch.to_string()),
                }
            }
            row
        })
        .collect()
}

/// Collapse a grid back into a FEN piece-placement field.
pub fn placement_from_array(board: &[Vec<String>]) -> String {
    let ranks: Vec<String> = board
        .iter()
        .map(|row| {
            let mut out = String::new();
            let mut empty = 0;
            for cell in row {
                if cell.is_empty() {
                    empty += 1;
                } else {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push_str(cell);
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            out
        })
        .collect();

    ranks.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_position_grid() {
        let board = fen_to_array(START_FEN);
        assert_eq!(board.len(), 8);
        assert!(board.iter().all(|row| row.len() == 8));

        assert_eq!(board[0], ["r", "n", "b", "q", "k", "b", "n", "r"]);
        assert_eq!(board[1], vec!["p"; 8]);
        for row in &board[2..6] {
            assert!(row.iter().all(|cell| cell.is_empty()));
        }
        assert_eq!(board[6], vec!["P"; 8]);
        assert_eq!(board[7][4], "K");
    }

    #[test]
    fn test_mixed_digits_expand() {
        // After 1. e4: e4 pawn sits between two runs of empties
        let board = fen_to_array("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
        assert_eq!(board[4], ["", "", "", "", "P", "", "", ""]);
        assert_eq!(board[6], ["P", "P", "P", "P", "", "P", "P", "P"]);
    }

    #[test]
    fn test_placement_round_trip() {
        let fens = [
            START_FEN,
            "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
            "8/8/8/8/8/8/8/4K2k w - - 0 1",
            "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
        ];
        for fen in fens {
            let placement = fen.split_whitespace().next().unwrap();
            assert_eq!(placement_from_array(&fen_to_array(fen)), placement);
        }
    }
}
