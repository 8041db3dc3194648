use chess::Board;

use crate::scores::Score;

/// Static position evaluation consulted by the search at its leaves.
pub trait Evaluator: Send {
    fn name(&self) -> String;

    /// Evaluate position from White's perspective. Positive = White advantage.
    ///
    /// A checkmated position returns [`MATE_VALUE`](crate::MATE_VALUE) no matter
    /// which side is mated; the caller knows whose turn it is and signs it.
    fn evaluate(&self, board: &Board) -> Score;
}
