// Score bounds and special values for the minimax search.
//
// Every bound is chosen so that negating it stays representable: the window
// bounds sit at +/- i32::MAX (never i32::MIN) and the checkmate sentinel one
// step inside them.

pub type Score = i32;

pub const POS_INFINITY: Score = Score::MAX;
pub const NEG_INFINITY: Score = -POS_INFINITY;

/// Returned by the evaluator for a checkmated position, whichever side is mated.
/// The search decides the sign and subtracts the distance to the mate.
pub const MATE_VALUE: Score = POS_INFINITY - 1;
