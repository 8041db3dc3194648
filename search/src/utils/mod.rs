mod score;

pub use score::{convert_centipawn_score, convert_mate_score, is_mate_score};
