use std::fmt;

use log::warn;

use super::rules::reach;
use crate::game_state::{Board, Color, Role, Square};

/// Default limit of a [`MoveList`].
pub const MAX_MOVES: usize = 256;

/// A single generated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitMove {
    pub from: Square,
    pub to: Square,
    pub role: Role,
}

impl BitMove {
    pub const fn new(from: Square, to: Square, role: Role) -> Self {
        Self { from, to, role }
    }

    /// Raw piece-type number (1 = pawn .. 6 = king).
    pub const fn piece(self) -> u8 {
        self.role as u8
    }
}

/// Coordinate notation, e.g. `e2e4`.
impl fmt::Display for BitMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Returned when a move would push a [`MoveList`] past its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("move list is full ({limit} moves)")]
pub struct MoveListFull {
    pub limit: usize,
}

/// Growable move buffer that refuses to grow past a fixed limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<BitMove>,
    limit: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveList {
    pub fn new() -> Self {
        Self::with_limit(MAX_MOVES)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            moves: Vec::with_capacity(limit.min(MAX_MOVES)),
            limit,
        }
    }

    pub fn push(&mut self, mv: BitMove) -> Result<(), MoveListFull> {
        if self.moves.len() >= self.limit {
            return Err(MoveListFull { limit: self.limit });
        }
        self.moves.push(mv);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[BitMove] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BitMove> {
        self.moves.iter()
    }

    pub fn contains(&self, mv: &BitMove) -> bool {
        self.moves.contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a BitMove;
    type IntoIter = std::slice::Iter<'a, BitMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = BitMove;
    type IntoIter = std::vec::IntoIter<BitMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Appends every pseudo-legal move of `side` to `list`.
///
/// Squares are visited in storage order (8th rank first, a-file first) and
/// each piece's moves follow [`reach`]'s order. Returns how many moves were
/// added. If the list fills up, the moves written so far stay in it.
pub fn generate_moves_into(
    board: &Board,
    side: Color,
    list: &mut MoveList,
) -> Result<usize, MoveListFull> {
    let start = list.len();
    let occupancy = board.occupancy(side);

    for (from, piece) in board.pieces().filter(|(_, p)| p.color == side) {
        for to in reach(piece, from, occupancy) {
            list.push(BitMove::new(from, to, piece.role)).inspect_err(|err| {
                warn!("move generation for {side} truncated: {err}");
            })?;
        }
    }

    Ok(list.len() - start)
}

/// Generates the moves of `side` into a fresh list of [`MAX_MOVES`].
pub fn generate_moves(board: &Board, side: Color) -> Result<MoveList, MoveListFull> {
    let mut list = MoveList::new();
    generate_moves_into(board, side, &mut list)?;
    Ok(list)
}
