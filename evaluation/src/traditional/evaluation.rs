use chess::{Board, BoardStatus, Color, Piece, Square, EMPTY};

use crate::scores::{Score, MATE_VALUE};
use crate::traditional::pst::pst_value;
use crate::traditional::values::piece_value;

// Return final evaluation (positive = good for White, negative = good for Black)
pub fn evaluate_board(board: &Board) -> Score {
    match board.status() {
        // Unsigned on purpose: the search knows who is to move and signs it.
        BoardStatus::Checkmate => return MATE_VALUE,
        BoardStatus::Stalemate | BoardStatus::Ongoing => {}
    }

    let endgame = is_endgame(board);

    occupied_squares(board)
        .map(|(square, color, piece)| {
            let value = piece_value(piece) + pst_value(piece, color, square, endgame);
            match color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

/// Coarse phase split: the endgame starts once neither side has a queen.
#[inline(always)]
pub fn is_endgame(board: &Board) -> bool {
    *board.pieces(Piece::Queen) == EMPTY
}

/// Every occupied square with the piece standing on it.
pub fn occupied_squares(board: &Board) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
    (*board.combined())
        .filter_map(move |square| Some((square, board.color_on(square)?, board.piece_on(square)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const ROOK_UP_FEN: &str = "3r4/8/1R4pk/1P3p1p/3bn2P/3R2P1/6K1/3B4 b - - 0 1";
    const ROOK_UP_VALUE: Score = 140;

    fn board(fen: &str) -> Board {
        Board::from_str(fen).unwrap()
    }

    #[test]
    fn test_checkmate_scores_sentinel() {
        // White is mated; the material on the board heavily favours Black
        let mated = board("3k4/8/8/8/8/3qqq2/P7/4K3 w - - 0 1");
        assert_eq!(mated.status(), BoardStatus::Checkmate);
        assert_eq!(evaluate_board(&mated), MATE_VALUE);
    }

    #[test]
    fn test_checkmate_sentinel_ignores_mated_side() {
        // Back rank mate of Black
        let mated = board("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(mated.status(), BoardStatus::Checkmate);
        assert_eq!(evaluate_board(&mated), MATE_VALUE);
    }

    #[test]
    fn test_start_position_is_balanced() {
        assert_eq!(evaluate_board(&Board::default()), 0);
    }

    #[test]
    fn test_different_positions_differ() {
        let start = evaluate_board(&Board::default());
        let other = evaluate_board(&board(ROOK_UP_FEN));
        assert_ne!(start, other);
    }

    #[test]
    fn test_rook_up_position_value() {
        // Rook for a knight, partly paid back by White's passive king and bishop
        assert_eq!(evaluate_board(&board(ROOK_UP_FEN)), ROOK_UP_VALUE);
    }

    #[test]
    fn test_color_flip_negates_score() {
        let white = board("4k3/8/8/3p4/8/2N5/PP6/4K3 w - - 0 1");
        let black = board("3k4/6pp/5n2/8/4P3/8/8/3K4 b - - 0 1");
        assert_eq!(evaluate_board(&white), -evaluate_board(&black));
        assert_ne!(evaluate_board(&white), 0);
    }

    #[test]
    fn test_stalemate_is_scored_by_material() {
        // Only checkmate short-circuits; the search handles stalemate itself
        let stalemate = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(stalemate.status(), BoardStatus::Stalemate);
        assert!(evaluate_board(&stalemate) > 0);
    }

    #[test]
    fn test_endgame_detection() {
        assert!(!is_endgame(&Board::default()));
        assert!(is_endgame(&board(ROOK_UP_FEN)));
        assert!(!is_endgame(&board("4k3/8/8/8/8/8/8/3QK3 w - - 0 1")));
    }

    #[test]
    fn test_occupied_squares() {
        let pieces: Vec<_> = occupied_squares(&board("4k3/8/8/8/8/8/8/3QK3 w - - 0 1")).collect();
        assert_eq!(pieces.len(), 3);
        assert!(pieces.contains(&(Square::from_str("d1").unwrap(), Color::White, Piece::Queen)));
        assert!(pieces.contains(&(Square::from_str("e8").unwrap(), Color::Black, Piece::King)));
    }
}
