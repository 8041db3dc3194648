use crate::EngineConfig;
use chess::{Board, ChessMove};
use evaluation::{Evaluator, Score};
use std::sync::mpsc::Sender;
use uci::{commands::GoParams, UciOutput};

pub trait Engine {
    fn new(evaluator: Box<dyn Evaluator>, config: &EngineConfig) -> Self;
    fn configure(&mut self, config: &EngineConfig);
    fn new_game(&mut self);
    fn set_position(&mut self, board: Board);
    fn board(&self) -> &Board;
    /// Searches the current position and plays the chosen move on it.
    /// `None` when the side to move has no legal move.
    fn search(
        &mut self,
        params: &GoParams,
        output: Option<&Sender<UciOutput>>,
    ) -> Option<(ChessMove, Score)>;
    fn name(&self) -> String;
}
