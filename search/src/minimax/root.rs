use chess::{Board, ChessMove, MoveGen};
use evaluation::{Evaluator, Score, NEG_INFINITY, POS_INFINITY};
use log::debug;

use super::search::Search;
use crate::MAX_DEPTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootResult {
    pub best_move: ChessMove,
    /// Value of `best_move` for the side to move at the root.
    pub score: Score,
    pub nodes: u64,
}

/// Picks the best move for the side to move without touching `board`.
///
/// Each root move is searched with its own full window, and a later move
/// replaces the current best on equal scores. Returns `None` when there is no
/// legal move.
pub fn choose_move(board: &Board, depth: u8, evaluator: &dyn Evaluator) -> Option<RootResult> {
    let depth = depth.clamp(1, MAX_DEPTH);
    let mut search = Search::new(evaluator);
    let mut best: Option<(ChessMove, Score)> = None;

    for mv in MoveGen::new_legal(board) {
        let child = board.make_move_new(mv);
        let score = search.search_min(&child, depth - 1, NEG_INFINITY, POS_INFINITY);
        debug!("Move: {}, Score: {}", mv, score);

        match best {
            Some((_, best_score)) if score < best_score => {}
            _ => best = Some((mv, score)),
        }
    }

    best.map(|(best_move, score)| RootResult {
        best_move,
        score,
        nodes: search.nodes(),
    })
}

/// Like [`choose_move`], but also plays the chosen move on `board`.
pub fn best_move(board: &mut Board, depth: u8, evaluator: &dyn Evaluator) -> Option<ChessMove> {
    let result = choose_move(board, depth, evaluator)?;
    *board = board.make_move_new(result.best_move);
    Some(result.best_move)
}
