mod config;
mod def;
pub mod minimax;
mod utils;

#[cfg(test)]
mod tests;

/// Maximum search depth supported by the engine.
pub const MAX_DEPTH: u8 = 100;

pub use config::EngineConfig;
pub use def::Engine;
pub use minimax::{best_move, choose_move, MinimaxEngine, RootResult, Search};
