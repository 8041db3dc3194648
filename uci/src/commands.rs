use chess::{Board, ChessMove};

use crate::DecodeError;

#[derive(Debug)]
pub enum UciInput {
    Uci,
    IsReady,

    UciNewGame,
    Position(Board),
    Go(GoParams),

    SetOption {
        name: String,
        value: String,
    },
    Quit,

    Invalid(DecodeError),
    Unknown(String),
}

#[derive(Debug)]
pub enum UciOutput {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    /// `None` is sent as the null move when the position has no legal move.
    BestMove(Option<ChessMove>),
    Info(Info),
    Option(String),
}

#[derive(Debug, Default)]
pub struct Info {
    pub depth: u8,
    pub nodes: u64,
    pub nodes_per_second: u64,
    pub time: u64,
    pub pv: Vec<ChessMove>,
    pub score: Score,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Score {
    Centipawns(i32), // centipawns
    Mate(i32),       // Positive for mate-in-n, negative for mated-in-n
}

impl Default for Score {
    fn default() -> Self {
        Score::Centipawns(0)
    }
}

#[derive(Debug, Default)]
pub struct GoParams {
    // Search depth ply only. Clock and node limits are accepted but not honoured.
    pub depth: Option<u8>,
}
