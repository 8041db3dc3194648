use chess::Piece;

use crate::scores::Score;

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 320;
pub const BISHOP_VALUE: Score = 330;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;
// Nominal; both kings are always on the board so it cancels out. It keeps the
// king tables on the same scale as the other pieces.
pub const KING_VALUE: Score = 20_000;

#[inline(always)]
pub fn piece_value(piece: Piece) -> Score {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}
