mod engine;
mod root;
mod search;

pub use engine::MinimaxEngine;
pub use root::{best_move, choose_move, RootResult};
pub use search::{mate_score, Search};
