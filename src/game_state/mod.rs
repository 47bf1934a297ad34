pub mod bitboard;
pub mod board;
pub mod piece;

pub use bitboard::{Bitboard, Square, SquareIter, SquareParseError};
pub use board::{Board, FenError, FenLoad, Occupancy, STARTING_FEN};
pub use piece::{Color, Piece, Role, classify};

/// Number of squares on the board
pub const NUM_SQUARES: usize = 64;
