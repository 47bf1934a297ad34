use std::fmt;

use log::{debug, warn};

use super::bitboard::{Bitboard, Square};
use super::NUM_SQUARES;
use super::piece::{Color, Piece};

/// Board layout of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Length of [`Board::state_string`].
pub const STATE_STRING_LEN: usize = NUM_SQUARES;

/// Character used for an empty square in the state string.
pub const EMPTY_CELL: char = '0';

/// Error returned when a FEN is rejected before the board is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("board field must have exactly 7 '/' separators, found {found}")]
    SeparatorCount { found: usize },
}

/// Outcome of a FEN load that was not rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenLoad {
    /// Every rank reached its separator with all eight files accounted for.
    Complete,
    /// A separator was hit with the file cursor away from 8; loading stopped
    /// there and rows from `row` onwards are left empty.
    Truncated { row: u8 },
}

/// Occupancy of the two sides from the point of view of the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Occupancy {
    pub us: Bitboard,
    pub them: Bitboard,
}

impl Occupancy {
    #[inline]
    pub fn all(self) -> Bitboard {
        self.us | self.them
    }
}

/// The 8×8 grid of squares, each holding at most one piece.
///
/// Cells are kept in display order: row 0 is the 8th rank and columns run
/// from the a-file. Bitboards are never stored, they are rebuilt from the grid
/// on every query.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; NUM_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [None; NUM_SQUARES],
        }
    }

    pub fn starting_position() -> Self {
        Self::from_fen(STARTING_FEN).expect("starting FEN has 7 separators")
    }

    /// Builds a fresh board from a FEN, see [`Board::load_fen`].
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Self::empty();
        board.load_fen(fen)?;
        Ok(board)
    }

    #[inline]
    fn cell(square: Square) -> usize {
        square.grid_y() as usize * 8 + square.grid_x() as usize
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[Self::cell(square)]
    }

    /// Puts `piece` on `square`, returning whatever stood there before.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[Self::cell(square)], piece)
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.set_piece(square, None)
    }

    pub fn clear(&mut self) {
        self.cells = [None; NUM_SQUARES];
    }

    /// Occupied squares in storage scan order: 8th rank first, a-file first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(cell, piece)| {
            piece.map(|p| (Square::from_grid((cell % 8) as u8, (cell / 8) as u8), p))
        })
    }

    /// Loads the placement field of a FEN.
    ///
    /// Only the text before the first space is read. Unless that field holds
    /// exactly seven `/`, nothing changes and [`FenError::SeparatorCount`] is
    /// returned. Otherwise every piece is removed and the field is walked from
    /// the 8th rank down: digits skip empty squares, letters place a piece and
    /// advance one file, and any other character is ignored without advancing.
    /// A `/` reached with the file cursor anywhere but 8 stops the load,
    /// leaving the rows read so far in place.
    pub fn load_fen(&mut self, fen: &str) -> Result<FenLoad, FenError> {
        let field = fen.split(' ').next().unwrap_or_default();

        let found = field.matches('/').count();
        if found != 7 {
            warn!("rejecting FEN {fen:?}: {found} rank separators");
            return Err(FenError::SeparatorCount { found });
        }

        self.clear();

        let (mut x, mut y) = (0usize, 0usize);
        for ch in field.chars() {
            if ch == '/' {
                if x != 8 {
                    debug!("FEN row {y} ends at file {x}, stopping");
                    return Ok(FenLoad::Truncated { row: y as u8 });
                }
                x = 0;
                y += 1;
                continue;
            }

            if let Some(skip) = ch.to_digit(10) {
                x += skip as usize;
                continue;
            }

            let Some(piece) = Piece::from_char(ch) else {
                debug!("skipping unrecognised FEN character {ch:?}");
                continue;
            };

            if x < 8 {
                self.cells[y * 8 + x] = Some(piece);
            }
            x += 1;
        }

        Ok(FenLoad::Complete)
    }

    /// Union of all occupied squares.
    pub fn occupied(&self) -> Bitboard {
        self.pieces().map(|(square, _)| square).collect()
    }

    /// Squares holding a piece of `color`.
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(square, _)| square)
            .collect()
    }

    pub fn occupancy(&self, mover: Color) -> Occupancy {
        Occupancy {
            us: self.occupied_by(mover),
            them: self.occupied_by(!mover),
        }
    }

    /// One character per cell in storage order: `'0'` for empty, otherwise
    /// the piece letter (uppercase for White).
    pub fn state_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or(EMPTY_CELL, Piece::char))
            .collect()
    }

    /// Clears every cell whose character in `state` is `'0'`.
    ///
    /// Piece letters are not placed; only clearing is applied. Characters past
    /// the 64th are ignored, as are cells missing from a short string.
    pub fn set_state_string(&mut self, state: &str) {
        for (cell, ch) in state.chars().take(STATE_STRING_LEN).enumerate() {
            if ch == EMPTY_CELL {
                self.cells[cell] = None;
            }
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("state", &self.state_string())
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(8).enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                write!(f, "{} ", cell.map_or('.', Piece::char))?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
