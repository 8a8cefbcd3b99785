use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use chess_predictor::board::{find_best_move, Board, Evaluator, SearchConfig, DEFAULT_DEPTH};
use chess_predictor::prompt::{run_prompt_loop, PromptOptions};

/// Predict a plausible next move for a chess position given in FEN.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Search depth in plies.
    #[arg(short, long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u32).range(1..=8))]
    depth: u32,

    /// Predict for this position once and exit instead of prompting.
    #[arg(long)]
    fen: Option<String>,

    /// Print the decoded board before each prediction.
    #[arg(long)]
    show_board: bool,

    /// Disable alpha-beta cutoffs (plain minimax, same answer, slower).
    #[arg(long)]
    no_pruning: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = SearchConfig::depth(cli.depth);
    if cli.no_pruning {
        config = config.without_pruning();
    }
    let options = PromptOptions {
        config,
        show_board: cli.show_board,
    };

    if let Some(fen) = cli.fen {
        let board = Board::try_from_fen(&fen).with_context(|| format!("invalid FEN {fen:?}"))?;
        if options.show_board {
            println!("{board}");
        }
        let result = find_best_move(&board, board.side_to_move(), &config, Evaluator::default());
        match result.best_move {
            Some(mv) => println!("{mv}"),
            None => println!("No legal moves found"),
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_prompt_loop(stdin.lock(), &mut stdout, &options).context("prompt loop failed")
}
