use thiserror::Error;

/// A command line that was recognised but could not be turned into a valid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("position command needs `startpos` or `fen <fen>`")]
    MissingSetup,

    #[error("position command has no FEN string after `fen`")]
    MissingFen,

    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("illegal or malformed move `{0}`")]
    InvalidMove(String),

    #[error("setoption command needs `name <name> [value <value>]`")]
    MalformedOption,
}
