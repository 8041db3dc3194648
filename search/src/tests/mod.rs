
use chess::Board;
use std::str::FromStr;

pub(crate) fn board(fen: &str) -> Board {
    Board::from_str(fen).unwrap()
}

pub(crate) const GREEDY_CAPTURE: &str = "3r4/8/1R4pk/1P3p1p/3bn2P/3R2P1/6K1/3B4 b - - 0 1";
pub(crate) const QUEEN_TRADE: &str =
    "rnbqk1nr/p1ppppbp/1p4p1/8/2P5/2Q5/PP1PPPPP/RNB1KBNR b KQkq - 0 1";
pub(crate) const WHITE_WINS_QUEEN: &str =
    "rnb1k1nr/p1p1ppb1/1p1p2pp/6q1/2P5/3P4/PPQ1PPPP/RNB1KBNR w KQkq - 0 1";
pub(crate) const BLACK_MATES_IN_ONE: &str = "3k4/8/8/8/5P2/1r2P3/r7/4K3 b - - 0 1";
pub(crate) const WHITE_MATES_IN_TWO: &str = "k7/8/5ppQ/8/8/8/8/1R2K3 w - - 0 1";
