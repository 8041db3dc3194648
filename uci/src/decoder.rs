use std::str::FromStr;

use chess::{Board, ChessMove};

use super::commands::{GoParams, UciInput};
use super::error::DecodeError;

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> UciInput {
        let tokens: Vec<&str> = input.split_whitespace().collect();

        match tokens.first().copied() {
            Some("uci") => UciInput::Uci,
            Some("isready") => UciInput::IsReady,
            Some("ucinewgame") => UciInput::UciNewGame,

            Some("position") => match self.decode_position(&tokens[1..]) {
                Ok(board) => UciInput::Position(board),
                Err(e) => UciInput::Invalid(e),
            },
            Some("go") => self.decode_go(&tokens[1..]),
            Some("setoption") => self.decode_setoption(&tokens[1..]),
            Some("quit") => UciInput::Quit,

            _ => UciInput::Unknown(input.trim().to_string()),
        }
    }

    // position [startpos | fen <fen>] [moves <move>...]
    fn decode_position(&self, tokens: &[&str]) -> Result<Board, DecodeError> {
        let (setup, moves) = match tokens.iter().position(|t| *t == "moves") {
            Some(split) => (&tokens[..split], &tokens[split + 1..]),
            None => (tokens, &[][..]),
        };

        let mut board = match setup.first().copied() {
            Some("startpos") => Board::default(),
            Some("fen") => {
                let fen = setup[1..].join(" ");
                if fen.is_empty() {
                    return Err(DecodeError::MissingFen);
                }
                Board::from_str(&fen).map_err(|_| DecodeError::InvalidFen(fen))?
            }
            _ => return Err(DecodeError::MissingSetup),
        };

        for mv_str in moves {
            let mv = ChessMove::from_str(mv_str)
                .ok()
                .filter(|mv| board.legal(*mv))
                .ok_or_else(|| DecodeError::InvalidMove(mv_str.to_string()))?;
            board = board.make_move_new(mv);
        }

        Ok(board)
    }

    // setoption name <name> [value <value>]
    // Value is optional (button-type options have no value)
    fn decode_setoption(&self, tokens: &[&str]) -> UciInput {
        let Some((&"name", rest)) = tokens.split_first() else {
            return UciInput::Invalid(DecodeError::MalformedOption);
        };

        let (name, value) = match rest.iter().position(|t| *t == "value") {
            Some(split) => (&rest[..split], &rest[split + 1..]),
            None => (rest, &[][..]),
        };

        if name.is_empty() {
            return UciInput::Invalid(DecodeError::MalformedOption);
        }

        UciInput::SetOption {
            name: name.join(" "),
            value: value.join(" "),
        }
    }

    fn decode_go(&self, tokens: &[&str]) -> UciInput {
        UciInput::Go(GoParams {
            depth: extract_numeric_param(tokens, "depth").map(|d| d.min(u8::MAX as u64) as u8),
        })
    }
}

fn extract_numeric_param(tokens: &[&str], param: &str) -> Option<u64> {
    tokens
        .windows(2)
        .find(|w| w[0] == param)
        .and_then(|w| w[1].parse().ok())
}
