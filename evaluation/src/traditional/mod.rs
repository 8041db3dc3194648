pub mod evaluation;
mod pst;
pub mod values;

pub use evaluation::{evaluate_board, is_endgame, occupied_squares};
pub use pst::pst_value;
pub use values::piece_value;

use crate::def::Evaluator;
use crate::scores::Score;
use chess::Board;

/// Material plus piece-square tables, with a separate king table once the queens are off.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraditionalEvaluator;

impl Evaluator for TraditionalEvaluator {
    fn name(&self) -> String {
        "Traditional".to_string()
    }

    fn evaluate(&self, board: &Board) -> Score {
        evaluate_board(board)
    }
}
