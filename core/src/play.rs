use std::io::{self, BufRead, Write};

use chess::{Board, BoardStatus, ChessMove, Color, File, MoveGen, Piece, Rank, Square};
use evaluation::TraditionalEvaluator;
use log::info;
use search::best_move;

/// Plays one game against the engine from the start position.
pub fn run<R: BufRead, W: Write>(input: R, output: W, depth: u8) -> io::Result<()> {
    Game::new(input, output, depth).play(Board::default())?;
    Ok(())
}

/// A game between a human typing UCI moves and the engine.
pub struct Game<R, W> {
    input: R,
    output: W,
    depth: u8,
    evaluator: TraditionalEvaluator,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(input: R, output: W, depth: u8) -> Self {
        Self {
            input,
            output,
            depth,
            evaluator: TraditionalEvaluator,
        }
    }

    /// Runs until the game is over. `None` when the input ends first.
    pub fn play(&mut self, mut board: Board) -> io::Result<Option<BoardStatus>> {
        writeln!(self.output, "Start as [w]hite or [b]lack:")?;
        let Some(answer) = self.read_line()? else {
            return Ok(None);
        };
        let user = if answer.trim() == "w" {
            Color::White
        } else {
            Color::Black
        };

        while board.status() == BoardStatus::Ongoing {
            if board.side_to_move() == user {
                writeln!(self.output, "{}", render(&board))?;
                let Some(mv) = self.prompt_move(&board)? else {
                    return Ok(None);
                };
                board = board.make_move_new(mv);
            } else {
                match best_move(&mut board, self.depth, &self.evaluator) {
                    Some(mv) => info!("Engine plays {}", mv),
                    None => break,
                }
            }
        }

        writeln!(self.output, "{}", render(&board))?;
        writeln!(self.output, "\nResult: [w] {} [b]", result(&board))?;
        Ok(Some(board.status()))
    }

    // Asks until a legal move is typed.
    fn prompt_move(&mut self, board: &Board) -> io::Result<Option<ChessMove>> {
        let example = MoveGen::new_legal(board)
            .next()
            .map(|mv| mv.to_string())
            .unwrap_or_default();

        loop {
            writeln!(self.output, "\nYour move (e.g. {}):", example)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(mv) = parse_move(board, &line) {
                return Ok(Some(mv));
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// The legal move written as `input` in UCI notation, if any.
pub fn parse_move(board: &Board, input: &str) -> Option<ChessMove> {
    let input = input.trim();
    MoveGen::new_legal(board).find(|mv| mv.to_string() == input)
}

/// Board drawn with chess symbols, the side to move at the bottom.
pub fn render(board: &Board) -> String {
    let mut rows: Vec<String> = (0..8)
        .rev()
        .map(|rank| {
            let cells: Vec<String> = (0..8)
                .map(|file| {
                    let square =
                        Square::make_square(Rank::from_index(rank), File::from_index(file));
                    match (board.piece_on(square), board.color_on(square)) {
                        (Some(piece), Some(color)) => symbol(piece, color).to_string(),
                        _ => "·".to_string(),
                    }
                })
                .collect();
            format!("  {} {}", rank + 1, cells.join(" "))
        })
        .collect();

    if board.side_to_move() == Color::Black {
        rows.reverse();
    }
    rows.push("    a b c d e f g h".to_string());

    format!("\n{}", rows.join("\n"))
}

fn symbol(piece: Piece, color: Color) -> char {
    match (color, piece) {
        (Color::White, Piece::Rook) => '♖',
        (Color::White, Piece::Knight) => '♘',
        (Color::White, Piece::Bishop) => '♗',
        (Color::White, Piece::Queen) => '♕',
        (Color::White, Piece::King) => '♔',
        (Color::White, Piece::Pawn) => '♙',
        (Color::Black, Piece::Rook) => '♜',
        (Color::Black, Piece::Knight) => '♞',
        (Color::Black, Piece::Bishop) => '♝',
        (Color::Black, Piece::Queen) => '♛',
        (Color::Black, Piece::King) => '♚',
        (Color::Black, Piece::Pawn) => '♟',
    }
}

fn result(board: &Board) -> &'static str {
    match board.status() {
        BoardStatus::Checkmate => match board.side_to_move() {
            Color::White => "0-1",
            Color::Black => "1-0",
        },
        BoardStatus::Stalemate => "1/2-1/2",
        BoardStatus::Ongoing => "*",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::str::FromStr;

    const BACK_RANK: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";

    fn play(fen: &str, script: &str) -> (Option<BoardStatus>, String) {
        let mut output = Vec::new();
        let status = Game::new(Cursor::new(script), &mut output, 2)
            .play(Board::from_str(fen).unwrap())
            .unwrap();
        (status, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_render_start_position() {
        let expected = [
            "",
            "  8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜",
            "  7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟",
            "  6 · · · · · · · ·",
            "  5 · · · · · · · ·",
            "  4 · · · · · · · ·",
            "  3 · · · · · · · ·",
            "  2 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙",
            "  1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖",
            "    a b c d e f g h",
        ]
        .join("\n");
        assert_eq!(render(&Board::default()), expected);
    }

    #[test]
    fn test_render_black_to_move_flips_ranks() {
        let board = Board::from_str("4k3/8/8/8/4P3/8/8/4K3 b - - 0 1").unwrap();
        let rendered = render(&board);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], "  1 · · · · ♔ · · ·");
        assert_eq!(lines[4], "  4 · · · · ♙ · · ·");
        assert_eq!(lines[8], "  8 · · · · ♚ · · ·");
        assert_eq!(lines[9], "    a b c d e f g h");
    }

    #[test]
    fn test_parse_move() {
        let board = Board::default();
        assert_eq!(
            parse_move(&board, " e2e4\n"),
            Some(ChessMove::from_str("e2e4").unwrap())
        );
        assert_eq!(parse_move(&board, "e2e5"), None);
        assert_eq!(parse_move(&board, "e4"), None);
        assert_eq!(parse_move(&board, ""), None);
    }

    #[test]
    fn test_parse_promotion() {
        let board = Board::from_str("8/4P1k1/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(
            parse_move(&board, "e7e8n"),
            Some(ChessMove::from_str("e7e8n").unwrap())
        );
        assert_eq!(parse_move(&board, "e7e8"), None);
    }

    #[test]
    fn test_engine_mates_the_user() {
        let (status, output) = play(BACK_RANK, "b\n");
        assert_eq!(status, Some(BoardStatus::Checkmate));
        assert!(!output.contains("Your move"));
        assert!(output.ends_with("\nResult: [w] 1-0 [b]\n"));
    }

    #[test]
    fn test_user_retries_illegal_move() {
        let (status, output) = play(BACK_RANK, "w\nzz\na1b2\na1a8\n");
        assert_eq!(status, Some(BoardStatus::Checkmate));
        assert_eq!(output.matches("Your move").count(), 3);
        assert!(output.contains("Result: [w] 1-0 [b]"));
    }

    #[test]
    fn test_stalemate_result() {
        let (status, output) = play("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1", "w\nf1f7\n");
        assert_eq!(status, Some(BoardStatus::Stalemate));
        assert!(output.contains("Result: [w] 1/2-1/2 [b]"));
    }

    #[test]
    fn test_input_ends_mid_game() {
        let (status, output) = play(BACK_RANK, "w\n");
        assert_eq!(status, None);
        assert!(!output.contains("Result"));
    }
}
