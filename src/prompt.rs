//! Interactive FEN prompt.
//!
//! Reads one FEN per line and answers with a predicted move. Empty input
//! means the starting position and `quit` ends the session. Decoding errors
//! are reported on the output and the loop carries on.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::{
    find_best_move, Board, Evaluator, FenError, Move, SearchConfig, STARTING_FEN,
};

/// Settings for the prompt loop
#[derive(Clone, Copy, Debug, Default)]
pub struct PromptOptions {
    pub config: SearchConfig,
    /// Print the decoded board before each prediction
    pub show_board: bool,
}

/// Result of processing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Line handled; text to print (may span several lines)
    Ok(String),
    /// Session should end
    Quit,
}

/// Handle a single line of user input.
#[must_use]
pub fn process_line(line: &str, options: &PromptOptions) -> CommandResult {
    let input = line.trim();
    if input.eq_ignore_ascii_case("quit") {
        return CommandResult::Quit;
    }

    let mut reply = String::new();
    let fen = if input.is_empty() {
        reply.push_str("Using starting position\n");
        STARTING_FEN
    } else {
        input
    };

    match predict_line(fen, options) {
        Ok((board, best)) => {
            if options.show_board {
                reply.push_str(&format!("{board}\n"));
            }
            match best {
                Some(mv) => reply.push_str(&format!("Predicted best move: {mv}")),
                None => reply.push_str("No legal moves found"),
            }
        }
        Err(e) => {
            debug!("rejected input {fen:?}: {e}");
            reply.push_str(&format!("Error: {e}"));
        }
    }

    CommandResult::Ok(reply)
}

fn predict_line(fen: &str, options: &PromptOptions) -> Result<(Board, Option<Move>), FenError> {
    let board = Board::try_from_fen(fen)?;
    let result = find_best_move(
        &board,
        board.side_to_move(),
        &options.config,
        Evaluator::default(),
    );
    Ok((board, result.best_move))
}

/// Run the prompt until `quit` or end of input.
///
/// Lines that are not valid UTF-8 are decoded lossily and answered like any
/// other input; only read and write failures end the loop early.
pub fn run_prompt_loop<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    options: &PromptOptions,
) -> io::Result<()> {
    writeln!(output, "Chess Move Predictor")?;
    writeln!(output, "Enter FEN notation or 'quit' to exit")?;
    writeln!(output, "Example: {STARTING_FEN}")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "\nEnter FEN: ")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        match process_line(&line, options) {
            CommandResult::Ok(reply) => writeln!(output, "{reply}")?,
            CommandResult::Quit => break,
        }
    }

    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(depth: u32) -> PromptOptions {
        PromptOptions {
            config: SearchConfig::depth(depth),
            show_board: false,
        }
    }

    #[test]
    fn quit_is_case_insensitive() {
        assert_eq!(process_line("quit", &options(1)), CommandResult::Quit);
        assert_eq!(process_line("  QUIT \n", &options(1)), CommandResult::Quit);
    }

    #[test]
    fn empty_line_uses_starting_position() {
        let CommandResult::Ok(reply) = process_line("", &options(1)) else {
            panic!("expected a reply");
        };
        assert!(reply.starts_with("Using starting position\n"));
        assert!(reply.contains("Predicted best move: "));
    }

    #[test]
    fn bad_fen_is_reported_not_fatal() {
        let CommandResult::Ok(reply) = process_line("8/8/8 w", &options(1)) else {
            panic!("expected a reply");
        };
        assert_eq!(reply, "Error: FEN must describe 8 ranks, found 3");
    }

    #[test]
    fn side_without_moves_reports_none() {
        let CommandResult::Ok(reply) = process_line("8/8/8/8/8/8/8/k7 w - - 0 1", &options(2))
        else {
            panic!("expected a reply");
        };
        assert_eq!(reply, "No legal moves found");
    }

    #[test]
    fn show_board_prints_diagram_first() {
        let opts = PromptOptions {
            config: SearchConfig::depth(1),
            show_board: true,
        };
        let CommandResult::Ok(reply) = process_line("8/8/8/8/8/8/P7/k6K w - - 0 1", &opts) else {
            panic!("expected a reply");
        };
        assert!(reply.contains("2 | P |"));
        assert!(reply.ends_with("Predicted best move: a2a3"));
    }
}
