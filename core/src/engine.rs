use evaluation::TraditionalEvaluator;
pub use search::Engine;
use search::{EngineConfig, MinimaxEngine};

pub fn create(config: &EngineConfig) -> impl Engine {
    MinimaxEngine::new(Box::new(TraditionalEvaluator), config)
}
