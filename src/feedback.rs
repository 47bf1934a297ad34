use crate::game_logic::BitMove;
use crate::game_state::{Bitboard, Square};

/// How a square is highlighted while a piece is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// Legal place to drop the selected piece
    Destination,
    /// Dropping here captures an opponent piece
    Capture,
    /// The square the selected piece is lifted from
    Origin,
}

/// Highlighted squares for the current selection.
///
/// Computed by `compute_feedback()` and consumed by a [`crate::BoardDisplay`]
/// to highlight where a picked-up piece may be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Square, SquareFeedback)>,
}

impl BoardFeedback {
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    #[inline]
    pub fn squares(&self) -> &[(Square, SquareFeedback)] {
        &self.squares
    }

    /// Highlight of `square`, if it has one
    #[inline]
    pub fn get(&self, square: Square) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, feedback)| *feedback)
    }

    /// Set or replace the feedback of one square
    pub fn set(&mut self, square: Square, feedback: SquareFeedback) {
        match self.squares.iter_mut().find(|(sq, _)| *sq == square) {
            Some(entry) => entry.1 = feedback,
            None => self.squares.push((square, feedback)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Square, SquareFeedback)>> for BoardFeedback {
    fn from(squares: Vec<(Square, SquareFeedback)>) -> Self {
        Self { squares }
    }
}

/// What [`compute_feedback`] needs to know about the position
pub trait FeedbackSource {
    /// Moves available to the side to move
    fn moves(&self) -> &[BitMove];

    /// Square of the piece the player has picked up
    fn selected(&self) -> Option<Square>;

    /// Squares holding opponent pieces
    fn enemies(&self) -> Bitboard;
}

/// Compute visual feedback for the current selection.
///
/// Nothing is shown until a square is selected. Then the selected square is
/// the origin and every generated move from it is marked, as a capture when
/// an opponent piece stands on the destination.
pub fn compute_feedback(source: &impl FeedbackSource) -> BoardFeedback {
    let Some(from) = source.selected() else {
        return BoardFeedback::default();
    };

    let enemies = source.enemies();
    std::iter::once((from, SquareFeedback::Origin))
        .chain(
            source
                .moves()
                .iter()
                .filter(|mv| mv.from == from)
                .map(|mv| classify_move(mv, enemies)),
        )
        .collect::<Vec<_>>()
        .into()
}

/// Capture when an opponent piece stands on the destination
fn classify_move(mv: &BitMove, enemies: Bitboard) -> (Square, SquareFeedback) {
    if enemies.contains(mv.to) {
        (mv.to, SquareFeedback::Capture)
    } else {
        (mv.to, SquareFeedback::Destination)
    }
}
