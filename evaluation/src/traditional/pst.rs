use chess::{Color, Piece, Square};

use crate::scores::Score;

// Piece-square tables from the Simplified Evaluation Function.
// <https://www.chessprogramming.org/Simplified_Evaluation_Function>
//
// Each table is printed rank 8 first as White sees the board. With the
// a1 = 0 .. h8 = 63 square numbering that layout is read directly by Black
// (`table[sq]`) and mirrored for White (`table[63 - sq]`).

#[inline(always)]
pub fn pst_value(piece: Piece, color: Color, square: Square, endgame: bool) -> Score {
    let table = match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::Rook => &ROOK_PST,
        Piece::Queen => &QUEEN_PST,
        Piece::King if endgame => &KING_ENDGAME_PST,
        Piece::King => &KING_MIDGAME_PST,
    };

    table[table_index(color, square)]
}

#[inline(always)]
fn table_index(color: Color, square: Square) -> usize {
    match color {
        Color::White => 63 - square.to_index(),
        Color::Black => square.to_index(),
    }
}

// - Rewards advancing, most of all on the seventh rank
// - Keeps d/e pawns from lingering at home
const PAWN_PST: [Score; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 8
    50, 50, 50, 50, 50, 50, 50, 50, // RANK 7
    10, 10, 20, 30, 30, 20, 10, 10, // RANK 6
    5, 5, 10, 25, 25, 10, 5, 5, // RANK 5
    0, 0, 0, 20, 20, 0, 0, 0, // RANK 4
    5, -5, -10, 0, 0, -10, -5, 5, // RANK 3
    5, 10, 10, -20, -20, 10, 10, 5, // RANK 2
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 1
];

// - Knights on the rim are dim
const KNIGHT_PST: [Score; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 8
    -40, -20, 0, 0, 0, 0, -20, -40, // RANK 7
    -30, 0, 10, 15, 15, 10, 0, -30, // RANK 6
    -30, 5, 15, 20, 20, 15, 5, -30, // RANK 5
    -30, 0, 15, 20, 20, 15, 0, -30, // RANK 4
    -30, 5, 10, 15, 15, 10, 5, -30, // RANK 3
    -40, -20, 0, 5, 5, 0, -20, -40, // RANK 2
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 1
];

// - Avoids corners and borders, likes long diagonals
const BISHOP_PST: [Score; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 8
    -10, 0, 0, 0, 0, 0, 0, -10, // RANK 7
    -10, 0, 5, 10, 10, 5, 0, -10, // RANK 6
    -10, 5, 5, 10, 10, 5, 5, -10, // RANK 5
    -10, 0, 10, 10, 10, 10, 0, -10, // RANK 4
    -10, 10, 10, 10, 10, 10, 10, -10, // RANK 3
    -10, 5, 0, 0, 0, 0, 5, -10, // RANK 2
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 1
];

// - Seventh rank bonus, central files on the back rank
const ROOK_PST: [Score; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 8
    5, 10, 10, 10, 10, 10, 10, 5, // RANK 7
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 6
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 5
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 4
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 3
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 2
    0, 0, 0, 5, 5, 0, 0, 0, // RANK 1
];

// - Mild center bonus
const QUEEN_PST: [Score; 64] = [
    -20, -10, -10, -5, -5, -10, -10, -20, // RANK 8
    -10, 0, 0, 0, 0, 0, 0, -10, // RANK 7
    -10, 0, 5, 5, 5, 5, 0, -10, // RANK 6
    -5, 0, 5, 5, 5, 5, 0, -5, // RANK 5
    0, 0, 5, 5, 5, 5, 0, -5, // RANK 4
    -10, 5, 5, 5, 5, 5, 0, -10, // RANK 3
    -10, 0, 5, 0, 0, 0, 0, -10, // RANK 2
    -20, -10, -10, -5, -5, -10, -10, -20, // RANK 1
];

// - Stay home behind the pawns, castled
const KING_MIDGAME_PST: [Score; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 8
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 7
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 6
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 5
    -20, -30, -30, -40, -40, -30, -30, -20, // RANK 4
    -10, -20, -20, -20, -20, -20, -20, -10, // RANK 3
    20, 20, 0, 0, 0, 0, 20, 20, // RANK 2
    20, 30, 10, 0, 0, 10, 30, 20, // RANK 1
];

// - Centralise once the queens are gone
const KING_ENDGAME_PST: [Score; 64] = [
    -50, -40, -30, -20, -20, -30, -40, -50, // RANK 8
    -30, -20, -10, 0, 0, -10, -20, -30, // RANK 7
    -30, -10, 20, 30, 30, 20, -10, -30, // RANK 6
    -30, -10, 30, 40, 40, 30, -10, -30, // RANK 5
    -30, -10, 30, 40, 40, 30, -10, -30, // RANK 4
    -30, -10, 20, 30, 30, 20, -10, -30, // RANK 3
    -30, -30, 0, 0, 0, 0, -30, -30, // RANK 2
    -50, -30, -30, -30, -30, -30, -30, -50, // RANK 1
];
