use super::rules::reach;
use crate::game_state::{Board, Color, Piece, Square};

/// Answers whether `piece` may go from `from` to `to` with `side` to move.
///
/// The piece must belong to `side`; after that the answer is whatever
/// [`reach`] says, so this always agrees with the bulk generator.
pub fn can_move(board: &Board, side: Color, piece: Piece, from: Square, to: Square) -> bool {
    if piece.color != side {
        return false;
    }
    reach(piece, from, board.occupancy(side)).contains(to)
}
