use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use chess::{Board, ChessMove};
use evaluation::{Evaluator, Score};
use log::{info, warn};
use uci::{
    commands::{GoParams, Info},
    UciOutput,
};

use super::root::{choose_move, RootResult};
use crate::utils::{convert_centipawn_score, convert_mate_score, is_mate_score};
use crate::{Engine, EngineConfig, MAX_DEPTH};

pub struct MinimaxEngine {
    config: EngineConfig,
    evaluator: Box<dyn Evaluator>,

    /// The position we are finding the best move for (root position)
    board: Board,
}

impl Engine for MinimaxEngine {
    fn new(evaluator: Box<dyn Evaluator>, config: &EngineConfig) -> Self {
        Self {
            config: config.clone(),
            evaluator,
            board: Board::default(),
        }
    }

    fn configure(&mut self, config: &EngineConfig) {
        self.config = config.clone();
    }

    fn new_game(&mut self) {
        self.board = Board::default();
    }

    fn set_position(&mut self, board: Board) {
        self.board = board;
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn search(
        &mut self,
        params: &GoParams,
        output: Option<&Sender<UciOutput>>,
    ) -> Option<(ChessMove, Score)> {
        let depth = params
            .depth
            .unwrap_or(self.config.depth.value)
            .clamp(1, MAX_DEPTH);
        let start_time = Instant::now();

        let Some(result) = choose_move(&self.board, depth, self.evaluator.as_ref()) else {
            info!("No legal move in {}", self.board);
            return None;
        };
        let elapsed = start_time.elapsed();

        info!(
            "Depth {}: {} scored {} after {} nodes in {:?}",
            depth, result.best_move, result.score, result.nodes, elapsed
        );

        if let Some(output) = output {
            self.send_search_info(output, depth, &result, elapsed);
        }

        self.board = self.board.make_move_new(result.best_move);
        Some((result.best_move, result.score))
    }

    fn name(&self) -> String {
        format!("Minimax ({})", self.evaluator.name())
    }
}

impl MinimaxEngine {
    fn send_search_info(
        &self,
        output: &Sender<UciOutput>,
        depth: u8,
        result: &RootResult,
        elapsed: Duration,
    ) {
        let nps = (result.nodes as f64 / elapsed.as_secs_f64().max(1e-6)) as u64;

        let info = UciOutput::Info(Info {
            depth,
            nodes: result.nodes,
            nodes_per_second: nps,
            time: elapsed.as_millis() as u64,
            score: if is_mate_score(result.score) {
                convert_mate_score(result.score, depth)
            } else {
                convert_centipawn_score(result.score)
            },
            pv: vec![result.best_move],
        });

        if output.send(info).is_err() {
            warn!("Output channel closed, dropping search info");
        }
    }
}
