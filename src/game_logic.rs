pub mod attacks;
pub mod movegen;
pub mod rules;
pub mod validate;

pub use movegen::{BitMove, MAX_MOVES, MoveList, MoveListFull, generate_moves, generate_moves_into};
pub use rules::{Reach, reach};
pub use validate::can_move;

use log::{debug, info};

use crate::feedback::FeedbackSource;
use crate::game_state::{Bitboard, Board, Color, FenError, FenLoad, Piece, Square};
use crate::{BoardDisplay, MoveInput};

/// Snapshot handed to the feedback layer: the mover's moves plus what the
/// player currently has selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    moves: MoveList,
    selected: Option<Square>,
    enemies: Bitboard,
}

impl FeedbackSource for GameState {
    fn moves(&self) -> &[BitMove] {
        self.moves.as_slice()
    }

    fn selected(&self) -> Option<Square> {
        self.selected
    }

    fn enemies(&self) -> Bitboard {
        self.enemies
    }
}

/// Why an attempted move was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("{square} holds a {color} piece but it is not {color}'s turn")]
    NotYourTurn { square: Square, color: Color },
    #[error("{piece} cannot move from {from} to {to}")]
    Illegal { piece: Piece, from: Square, to: Square },
}

/// Failure while feeding scripted moves to a game.
#[derive(Debug, thiserror::Error)]
pub enum PlayError<I, D> {
    #[error("reading move failed: {0}")]
    Input(I),
    #[error("updating display failed: {0}")]
    Display(D),
}

/// A board plus the side to move.
///
/// The turn passes after every accepted [`ChessGame::try_move`]; nothing else
/// about the game (clocks, castling rights, results) is tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessGame {
    board: Board,
    turn: Color,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::starting_position())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            turn: Color::White,
        }
    }

    /// Creates a game from a FEN placement, White to move.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Board::from_fen(fen).map(Self::from_board)
    }

    /// Replaces the placement in place. On success White is to move again.
    pub fn load_fen(&mut self, fen: &str) -> Result<FenLoad, FenError> {
        let outcome = self.board.load_fen(fen)?;
        self.turn = Color::White;
        info!("position loaded ({outcome:?})");
        Ok(outcome)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn state_string(&self) -> String {
        self.board.state_string()
    }

    pub fn set_state_string(&mut self, state: &str) {
        self.board.set_state_string(state);
    }

    /// Whether the piece on `from` may move to `to` right now.
    pub fn can_move(&self, from: Square, to: Square) -> bool {
        self.board
            .piece_at(from)
            .is_some_and(|piece| can_move(&self.board, self.turn, piece, from, to))
    }

    /// Moves the piece on `from` to `to` if the rules allow it, capturing
    /// whatever stands on `to`, and passes the turn.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<BitMove, MoveError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare(from))?;

        if piece.color != self.turn {
            return Err(MoveError::NotYourTurn {
                square: from,
                color: piece.color,
            });
        }
        if !can_move(&self.board, self.turn, piece, from, to) {
            return Err(MoveError::Illegal { piece, from, to });
        }

        self.board.remove(from);
        let captured = self.board.set_piece(to, Some(piece));
        self.turn = !self.turn;

        let mv = BitMove::new(from, to, piece.role);
        match captured {
            Some(victim) => debug!("{piece} {mv} takes {victim}"),
            None => debug!("{piece} {mv}"),
        }
        Ok(mv)
    }

    /// All pseudo-legal moves of the side to move.
    pub fn moves(&self) -> Result<MoveList, MoveListFull> {
        generate_moves(&self.board, self.turn)
    }

    /// Builds the feedback snapshot for the current position.
    pub fn state(&self, selected: Option<Square>) -> Result<GameState, MoveListFull> {
        Ok(GameState {
            moves: self.moves()?,
            selected,
            enemies: self.board.occupied_by(!self.turn),
        })
    }

    /// Applies every move `input` yields, refreshing `display` after each
    /// accepted one. Refused moves are logged and skipped.
    ///
    /// Returns how many moves were played.
    pub fn play<I, D>(
        &mut self,
        input: &mut I,
        display: &mut D,
    ) -> Result<usize, PlayError<I::Error, D::Error>>
    where
        I: MoveInput,
        D: BoardDisplay,
    {
        let mut played = 0;
        while let Some((from, to)) = input.next_move().map_err(PlayError::Input)? {
            match self.try_move(from, to) {
                Ok(mv) => {
                    played += 1;
                    display
                        .show(&self.board, &Default::default())
                        .map_err(PlayError::Display)?;
                    debug!("played {mv}, {} to move", self.turn);
                }
                Err(err) => info!("ignoring {from}{to}: {err}"),
            }
        }
        Ok(played)
    }

    /// Ends the game: every piece is removed.
    pub fn stop(&mut self) {
        self.board.clear();
        info!("game stopped");
    }

    /// Back to the starting position with White to move.
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }
}
