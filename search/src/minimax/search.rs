use chess::{Board, Color, MoveGen};
use evaluation::{Evaluator, Score, MATE_VALUE, NEG_INFINITY, POS_INFINITY};

use crate::MAX_DEPTH;

/// Score of a side left without a legal move with `depth` plies of search left.
///
/// Mates found closer to the root keep more of the sentinel, so the search
/// prefers the quickest mate and the slowest defeat. The magnitude never
/// exceeds [`MATE_VALUE`].
#[inline]
pub fn mate_score(depth: u8) -> Score {
    MATE_VALUE - Score::from(MAX_DEPTH.saturating_sub(depth))
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Every value is reported for the maximizer, the side to move at
/// [`Search::search_max`] nodes. Moves are visited in generation order.
pub struct Search<'a> {
    evaluator: &'a dyn Evaluator,
    nodes: u64,
}

impl<'a> Search<'a> {
    pub fn new(evaluator: &'a dyn Evaluator) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    /// Nodes visited so far, leaves and terminal positions included.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn search_max(&mut self, board: &Board, depth: u8, mut alpha: Score, beta: Score) -> Score {
        self.nodes += 1;
        let maximizer = board.side_to_move();

        if depth == 0 {
            return self.leaf(board, depth, maximizer);
        }

        let moves = MoveGen::new_legal(board);
        if moves.len() == 0 {
            return self.terminal(board, depth, maximizer);
        }

        let mut value = NEG_INFINITY;
        for mv in moves {
            let child = board.make_move_new(mv);
            value = value.max(self.search_min(&child, depth - 1, alpha, beta));
            alpha = alpha.max(value);

            if alpha >= beta {
                break;
            }
        }

        value
    }

    pub fn search_min(&mut self, board: &Board, depth: u8, alpha: Score, mut beta: Score) -> Score {
        self.nodes += 1;
        let maximizer = !board.side_to_move();

        if depth == 0 {
            return self.leaf(board, depth, maximizer);
        }

        let moves = MoveGen::new_legal(board);
        if moves.len() == 0 {
            return self.terminal(board, depth, maximizer);
        }

        let mut value = POS_INFINITY;
        for mv in moves {
            let child = board.make_move_new(mv);
            value = value.min(self.search_max(&child, depth - 1, alpha, beta));
            beta = beta.min(value);

            if beta <= alpha {
                break;
            }
        }

        value
    }

    // Static evaluation turned towards the maximizer.
    fn leaf(&self, board: &Board, depth: u8, maximizer: Color) -> Score {
        let eval = self.evaluator.evaluate(board);

        if eval == MATE_VALUE {
            return self.terminal(board, depth, maximizer);
        }

        match maximizer {
            Color::White => eval,
            Color::Black => -eval,
        }
    }

    // The side to move has no legal move and loses, stalemated or mated.
    fn terminal(&self, board: &Board, depth: u8, maximizer: Color) -> Score {
        if board.side_to_move() == maximizer {
            -mate_score(depth)
        } else {
            mate_score(depth)
        }
    }
}
