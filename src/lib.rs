use game_state::{Board, Square};

pub mod feedback;
pub mod game_logic;
pub mod game_state;
pub mod mock;

/// Trait for receiving the moves a player attempts.
///
/// Abstracts over interactive and scripted input, providing a uniform
/// interface for [`game_logic::ChessGame::play`].
pub trait MoveInput {
    /// Error type for input failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Next attempted move as `(from, to)`, or `None` once input is exhausted.
    fn next_move(&mut self) -> Result<Option<(Square, Square)>, Self::Error>;
}

/// Trait for displaying the board and feedback to the player.
///
/// Mirrors [`MoveInput`] on the output side of the game loop.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the board with the given highlights.
    ///
    /// Implementations map [`feedback::SquareFeedback`] variants
    /// to their own output (terminal colors, etc.).
    fn show(&mut self, board: &Board, feedback: &feedback::BoardFeedback) -> Result<(), Self::Error>;
}
