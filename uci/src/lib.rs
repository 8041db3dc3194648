mod connection;
mod decoder;
mod encoder;
mod error;
mod options;

pub mod commands;

pub use commands::{UciInput, UciOutput};
pub use connection::UciConnection;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::DecodeError;
pub use options::{UciOption, UciOptionType};

/// Sent as `bestmove` when the side to move has no legal move.
pub const NULL_MOVE: &str = "0000";
