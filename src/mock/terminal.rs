use std::io::{self, Write};

use super::{ScriptedMoves, TerminalDisplay};
use crate::BoardDisplay;
use crate::feedback::{BoardFeedback, compute_feedback};
use crate::game_logic::ChessGame;
use crate::game_state::{STARTING_FEN, Square};

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive terminal session standing in for the drag-and-drop board.
///
/// Moves are validated exactly as a drag would be; `moves` dumps the full
/// generator output for the side to move.
pub fn run_interactive_terminal() {
    let mut game = ChessGame::new();
    let mut display = TerminalDisplay::new();
    let mut selected: Option<Square> = None;

    redraw(&game, &mut display, selected);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "m" => {
                if parts.len() < 2 {
                    println!("Usage: m <e2e4> [more moves...]");
                    continue;
                }
                let mut script = ScriptedMoves::new();
                if let Err(e) = script.push_script(&parts[1..].join(" ")) {
                    println!("❌ {}", e);
                    continue;
                }
                let mut sink = SilentDisplay;
                let played = match game.play(&mut script, &mut sink) {
                    Ok(played) => played,
                    Err(e) => {
                        println!("❌ {}", e);
                        continue;
                    }
                };
                selected = None;
                redraw(&game, &mut display, selected);
                println!("\nPlayed {played} move(s)");
            }
            "s" => {
                if parts.len() < 2 {
                    println!("Usage: s <square>");
                    continue;
                }
                match parts[1].parse::<Square>() {
                    Ok(square) => {
                        selected = Some(square);
                        redraw(&game, &mut display, selected);
                    }
                    Err(e) => println!("Invalid square: {}", e),
                }
            }
            "moves" => match game.moves() {
                Ok(moves) => {
                    let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                    println!("{} moves: {}", moves.len(), listed.join(" "));
                }
                Err(e) => println!("❌ {}", e),
            },
            "state" => println!("{}", game.state_string()),
            "load" => {
                if parts.len() < 2 {
                    println!("Usage: load <fen> | load startpos");
                    continue;
                }
                let fen = if parts[1] == "startpos" {
                    STARTING_FEN.to_string()
                } else {
                    // Rejoin the rest as the FEN may carry trailing fields
                    parts[1..].join(" ")
                };
                match game.load_fen(&fen) {
                    Ok(outcome) => {
                        selected = None;
                        redraw(&game, &mut display, selected);
                        println!("\n✅ Position loaded ({outcome:?})");
                    }
                    Err(e) => println!("❌ Invalid FEN: {}", e),
                }
            }
            "r" => {
                game.reset();
                selected = None;
                redraw(&game, &mut display, selected);
                println!("\n🔄 Reset to initial state");
            }
            "p" => redraw(&game, &mut display, selected),
            "q" => break,
            _ => println!("Unknown command"),
        }
    }
}

/// Swallows intermediate refreshes while a multi-move script is applied.
struct SilentDisplay;

impl BoardDisplay for SilentDisplay {
    type Error = std::convert::Infallible;

    fn show(
        &mut self,
        _board: &crate::game_state::Board,
        _feedback: &BoardFeedback,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Draws the complete interface: help text, turn and board.
fn redraw(game: &ChessGame, display: &mut TerminalDisplay, selected: Option<Square>) {
    clear_screen();
    println!("♟️  Chess Move Generator");
    println!();
    println!(
        "Commands: m <e2e4..> | s <square> | moves | state | load <fen> | r (reset) | p (refresh) | q (quit)"
    );
    println!();
    println!("{} to move", game.turn());

    let feedback = match game.state(selected) {
        Ok(state) => compute_feedback(&state),
        Err(e) => {
            log::warn!("no highlights: {e}");
            BoardFeedback::new()
        }
    };
    if let Err(e) = display.show(game.board(), &feedback) {
        eprintln!("Failed to draw board: {}", e);
    }

    let occupied = game.board().occupied();
    println!("Occupied: {:#018X} | Pieces: {:02}", occupied, occupied.count());
}
