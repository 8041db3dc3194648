pub mod def;
pub mod scores;
pub mod traditional;

pub use def::Evaluator;
pub use scores::{Score, MATE_VALUE, NEG_INFINITY, POS_INFINITY};
pub use traditional::{evaluate_board, is_endgame, occupied_squares, piece_value};
pub use traditional::TraditionalEvaluator;
