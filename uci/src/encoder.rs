use super::commands::{Score, UciOutput};
use super::NULL_MOVE;

pub struct Encoder;

impl Encoder {
    pub fn encode(&self, response: &UciOutput) -> String {
        match response {
            UciOutput::IdName(name) => format!("id name {}", name),
            UciOutput::IdAuthor(author) => format!("id author {}", author),

            UciOutput::UciOk => "uciok".to_string(),
            UciOutput::ReadyOk => "readyok".to_string(),

            UciOutput::BestMove(Some(best_move)) => format!("bestmove {}", best_move),
            UciOutput::BestMove(None) => format!("bestmove {}", NULL_MOVE),
            UciOutput::Info(info) => {
                let pv = info
                    .pv
                    .iter()
                    .map(|mv| mv.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");

                let mut line = format!(
                    "info depth {} score {} nodes {} nps {} time {}",
                    info.depth,
                    match info.score {
                        Score::Centipawns(cp) => format!("cp {}", cp),
                        Score::Mate(moves) => format!("mate {}", moves),
                    },
                    info.nodes,
                    info.nodes_per_second,
                    info.time,
                );
                if !pv.is_empty() {
                    line.push_str(" pv ");
                    line.push_str(&pv);
                }
                line
            }
            UciOutput::Option(option_str) => option_str.clone(),
        }
    }
}
