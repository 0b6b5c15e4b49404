mod config;
mod evaluate;
mod self_play;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{Board, Difficulty, FirstPlayer, Mark};
use common::{log, logger};

use config::get_config_manager;
use evaluate::{evaluate_board, print_evaluation};
use self_play::{print_summary, run_self_play};

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// YAML config file, defaults to the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Mark the computer plays when evaluating a board
    #[arg(long, value_parser = parse_mark)]
    computer_mark: Option<Mark>,

    /// Computer opens every self-play game
    #[arg(long)]
    computer_first: bool,

    #[arg(long)]
    seed: Option<u64>,

    /// Board to evaluate, e.g. "XX./.O./..."
    #[arg(long, conflicts_with = "self_play")]
    board: Option<String>,

    /// Number of self-play games, overriding the config
    #[arg(long)]
    self_play: Option<u32>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    value.parse().map_err(|e: common::EngineError| e.to_string())
}

fn parse_mark(value: &str) -> Result<Mark, String> {
    let mut chars = value.trim().chars();
    match (chars.next().and_then(Mark::from_char), chars.next()) {
        (Some(mark), None) if mark.is_player() => Ok(mark),
        _ => Err(format!("invalid mark '{}' (expected X or O)", value)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(args.config).get_config()?;
    if let Some(difficulty) = args.difficulty {
        config.tictactoe.difficulty = difficulty;
    }
    if args.computer_first {
        config.tictactoe.first_player = FirstPlayer::Computer;
    }
    if let Some(games) = args.self_play {
        config.self_play.games = games;
    }
    config.validate()?;

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Using seed {}", rng.seed());

    if let Some(notation) = args.board {
        let board: Board = notation.parse()?;
        let computer_mark = args
            .computer_mark
            .unwrap_or_else(|| config.tictactoe.computer_mark());
        let evaluation = evaluate_board(board, computer_mark, config.tictactoe.difficulty, rng)?;
        print_evaluation(&evaluation);
        return Ok(());
    }

    log!(
        "Playing {} games: {} computer against {} opponent",
        config.self_play.games,
        config.tictactoe.difficulty,
        config.self_play.opponent_difficulty
    );
    let summary = run_self_play(
        config.tictactoe,
        config.self_play.opponent_difficulty,
        config.self_play.games,
        rng.seed(),
        config.self_play.print_boards,
    )?;
    print_summary(&summary);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mark() {
        assert_eq!(parse_mark("x"), Ok(Mark::X));
        assert_eq!(parse_mark(" O "), Ok(Mark::O));
        assert!(parse_mark(".").is_err());
        assert!(parse_mark("XO").is_err());
        assert!(parse_mark("").is_err());
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty("HARD"), Ok(Difficulty::Hard));
        let error = parse_difficulty("nightmare").unwrap_err();
        assert!(error.contains("unknown difficulty"), "{}", error);
    }

    #[test]
    fn test_board_conflicts_with_self_play() {
        let result = Args::try_parse_from(["tictactoe_client", "--board", "X........", "--self-play", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "tictactoe_client",
            "--difficulty",
            "medium",
            "--computer-mark",
            "X",
            "--seed",
            "7",
            "--board",
            "XX./.O./...",
        ])
        .unwrap();
        assert_eq!(args.difficulty, Some(Difficulty::Medium));
        assert_eq!(args.computer_mark, Some(Mark::X));
        assert_eq!(args.seed, Some(7));
        assert!(!args.computer_first);
    }
}
