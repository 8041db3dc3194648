use evaluation::{Score, MATE_VALUE};
use uci::commands;

use crate::MAX_DEPTH;

pub fn is_mate_score(score: Score) -> bool {
    score.abs() >= MATE_VALUE - Score::from(MAX_DEPTH)
}

/// Converts a root score into UCI `mate N` moves for a search of `depth` plies.
///
/// A mate found with `d` plies left sits `depth - d` plies below the root.
pub fn convert_mate_score(score: Score, depth: u8) -> commands::Score {
    let remaining = Score::from(MAX_DEPTH) - (MATE_VALUE - score.abs());
    let mate_plies = (Score::from(depth) - remaining).max(0);
    let mate_in = (mate_plies + 1) / 2;
    if score > 0 {
        commands::Score::Mate(mate_in)
    } else {
        commands::Score::Mate(-mate_in)
    }
}

pub fn convert_centipawn_score(score: Score) -> commands::Score {
    commands::Score::Centipawns(score)
}
