use std::error::Error;
use std::sync::mpsc::Sender;

use log::{debug, warn};
use search::{Engine, EngineConfig};
use uci::{UciInput, UciOutput};

pub const ENGINE_NAME: &str = "Halfmove";
pub const ENGINE_AUTHOR: &str = "Halfmove developers";

/// Maps protocol commands onto the engine.
pub struct Halfmove<E: Engine> {
    engine: E,
    config: EngineConfig,
}

impl<E: Engine> Halfmove<E> {
    pub fn new(engine: E, config: EngineConfig) -> Self {
        Self { engine, config }
    }

    pub fn handle(
        &mut self,
        input: &UciInput,
        output: &Sender<UciOutput>,
    ) -> Result<(), Box<dyn Error>> {
        match input {
            UciInput::Uci => {
                output.send(UciOutput::IdName(ENGINE_NAME.to_string()))?;
                output.send(UciOutput::IdAuthor(ENGINE_AUTHOR.to_string()))?;
                self.config.to_uci(output)?;
                output.send(UciOutput::UciOk)?;
            }
            UciInput::IsReady => {
                output.send(UciOutput::ReadyOk)?;
            }
            UciInput::SetOption { name, value } => {
                if let Err(e) = self.config.update_from_uci(name, value) {
                    warn!("Option setting failed: {}", e);
                } else {
                    debug!("Set option '{}' to '{}'", name, value);
                    self.engine.configure(&self.config);
                }
            }
            UciInput::UciNewGame => {
                self.engine.new_game();
            }
            UciInput::Position(board) => {
                self.engine.set_position(*board);
            }
            UciInput::Go(params) => {
                let result = self.engine.search(params, Some(output));
                if result.is_none() {
                    debug!("No legal move, game over ({:?})", self.engine.board().status());
                }
                output.send(UciOutput::BestMove(result.map(|(best_move, _)| best_move)))?;
            }
            UciInput::Quit => {}
            UciInput::Invalid(e) => {
                warn!("Ignoring command: {}", e);
            }
            UciInput::Unknown(line) => {
                debug!("Unknown command: {}", line);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use std::sync::mpsc::{channel, Receiver};
    use uci::{Decoder, Encoder};

    fn halfmove() -> Halfmove<impl Engine> {
        let config = EngineConfig::default();
        Halfmove::new(engine::create(&config), config)
    }

    fn run<E: Engine>(halfmove: &mut Halfmove<E>, script: &[&str]) -> Vec<String> {
        let (tx, rx): (_, Receiver<UciOutput>) = channel();
        for line in script {
            halfmove.handle(&Decoder.decode(line), &tx).unwrap();
        }
        drop(tx);
        rx.iter().map(|output| Encoder.encode(&output)).collect()
    }

    #[test]
    fn test_handshake() {
        let lines = run(&mut halfmove(), &["uci", "isready"]);
        assert_eq!(
            lines,
            vec![
                "id name Halfmove",
                "id author Halfmove developers",
                "option name Depth type spin default 3 min 1 max 100",
                "uciok",
                "readyok",
            ]
        );
    }

    #[test]
    fn test_go_from_fen() {
        let lines = run(
            &mut halfmove(),
            &[
                "position fen 3r4/8/1R4pk/1P3p1p/3bn2P/3R2P1/6K1/3B4 b - - 0 1",
                "go",
            ],
        );
        assert!(lines[0].starts_with("info depth 3 score cp "));
        assert_eq!(lines.last().unwrap(), "bestmove d4b6");
    }

    #[test]
    fn test_go_depth_from_moves() {
        let lines = run(
            &mut halfmove(),
            &["position startpos moves e2e4 e7e5", "go depth 1"],
        );
        assert!(lines[0].starts_with("info depth 1 "));
        assert!(lines.last().unwrap().starts_with("bestmove "));
        assert_ne!(lines.last().unwrap(), "bestmove 0000");
    }

    #[test]
    fn test_go_without_moves_sends_null_move() {
        let lines = run(
            &mut halfmove(),
            &["position fen 3k4/8/8/8/8/3qqq2/P7/4K3 w - - 0 1", "go"],
        );
        assert_eq!(lines, vec!["bestmove 0000"]);
    }

    #[test]
    fn test_invalid_position_keeps_previous() {
        let mut halfmove = halfmove();
        run(
            &mut halfmove,
            &[
                "position fen 3k4/8/8/8/8/3qqq2/P7/4K3 w - - 0 1",
                "position startpos moves e2e4 e7e4",
            ],
        );
        // The mated position is still loaded
        let lines = run(&mut halfmove, &["go"]);
        assert_eq!(lines, vec!["bestmove 0000"]);
    }

    #[test]
    fn test_setoption_depth() {
        let mut halfmove = halfmove();
        run(&mut halfmove, &["setoption name Depth value 1", "position startpos"]);
        let lines = run(&mut halfmove, &["go"]);
        assert!(lines[0].starts_with("info depth 1 "));

        // Out of range values are ignored
        run(&mut halfmove, &["setoption name Depth value 0", "position startpos"]);
        let lines = run(&mut halfmove, &["go"]);
        assert!(lines[0].starts_with("info depth 1 "));
    }

    #[test]
    fn test_ucinewgame_resets_position() {
        let mut halfmove = halfmove();
        run(
            &mut halfmove,
            &["position fen 3k4/8/8/8/8/3qqq2/P7/4K3 w - - 0 1", "ucinewgame"],
        );
        let lines = run(&mut halfmove, &["go depth 1"]);
        assert_ne!(lines.last().unwrap(), "bestmove 0000");
    }

    #[test]
    fn test_unknown_commands_are_silent() {
        let lines = run(&mut halfmove(), &["xyzzy", "setoption name Hash value 16", "quit"]);
        assert!(lines.is_empty());
    }
}
