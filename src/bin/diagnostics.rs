use std::process::ExitCode;

use chess_movegen::game_logic::{MAX_MOVES, MoveList, generate_moves_into};
use chess_movegen::game_state::{Board, Color, FenLoad, STARTING_FEN};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

/// The starting position must report 20 moves for either side.
#[derive(Debug, Parser)]
#[command(about = "Count pseudo-legal moves for a FEN position")]
struct Args {
    /// FEN to load; only the placement field is read
    #[arg(default_value = STARTING_FEN)]
    fen: String,

    /// Side to generate moves for
    #[arg(long, value_enum, default_value_t = Side::White)]
    side: Side,

    /// Print every move, not just the count
    #[arg(long)]
    list: bool,

    /// Maximum number of moves to collect
    #[arg(long, default_value_t = MAX_MOVES)]
    limit: usize,

    /// Also print the occupancy bitboards
    #[arg(long)]
    bitboards: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let side = Color::from(args.side);

    let mut board = Board::empty();
    match board.load_fen(&args.fen) {
        Ok(FenLoad::Complete) => {}
        Ok(FenLoad::Truncated { row }) => {
            log::warn!("FEN stopped early at row {row}; using the partial board");
        }
        Err(e) => {
            eprintln!("invalid FEN: {e}");
            return ExitCode::FAILURE;
        }
    }

    println!("{board}");
    println!("state: {}", board.state_string());
    if args.bitboards {
        println!("\noccupied:\n{}", board.occupied());
        println!("\n{side}:\n{}", board.occupied_by(side));
    }

    let mut moves = MoveList::with_limit(args.limit);
    let truncated = generate_moves_into(&board, side, &mut moves).is_err();

    println!("\n{} moves for {side}{}", moves.len(), if truncated { " (truncated)" } else { "" });
    if args.list {
        for mv in &moves {
            println!("  {mv} ({:?})", mv.role);
        }
    }

    if board == Board::starting_position() && moves.len() != 20 {
        eprintln!("expected 20 moves from the starting position");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
