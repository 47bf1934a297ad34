use std::io::{self, Write};

use crate::BoardDisplay;
use crate::feedback::{BoardFeedback, SquareFeedback};
use crate::game_state::{Board, Square};

/// Draws the board on stdout in place of a physical display.
///
/// Pieces are printed as FEN letters, empty squares as `·`, and highlighted
/// squares get an ANSI background per [`SquareFeedback`] kind.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }
}

/// Writing the board to the terminal failed.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("terminal write failed: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, board: &Board, feedback: &BoardFeedback) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), board, feedback)
    }
}

/// Writes the board, rank 8 first, followed by the file labels.
pub fn render_board(
    w: &mut impl Write,
    board: &Board,
    feedback: &BoardFeedback,
) -> Result<(), DisplayError> {
    for y in 0..8u8 {
        write!(w, " {} ", 8 - y)?;
        for x in 0..8u8 {
            let square = Square::from_grid(x, y);
            let symbol = board.piece_at(square).map_or('·', |piece| piece.char());
            write!(w, "{}", format_square(symbol, feedback.get(square)))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}

/// One three-character cell, wrapped in a background colour when highlighted.
fn format_square(symbol: char, feedback: Option<SquareFeedback>) -> String {
    match feedback {
        Some(SquareFeedback::Destination) => format!("\x1b[44m {symbol} \x1b[0m"),
        Some(SquareFeedback::Capture) => format!("\x1b[41m {symbol} \x1b[0m"),
        Some(SquareFeedback::Origin) => format!("\x1b[42m {symbol} \x1b[0m"),
        None => format!(" {symbol} "),
    }
}
