use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};
use std::str::FromStr;

/// A board square, numbered rank by rank from a1 = 0 to h8 = 63.
///
/// The board grid is stored in display order instead (row 0 is the 8th rank),
/// so [`Square::from_grid`] and [`Square::grid_y`] flip the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// `None` for anything past h8.
    pub const fn new(idx: u8) -> Option<Self> {
        if idx < 64 { Some(Square(idx)) } else { None }
    }

    /// Maps grid coordinates to a square: `(7 - y) * 8 + x`.
    ///
    /// `x` is the file column and `y` the storage row, both in `0..8`.
    /// Staying in range is the caller's job.
    #[inline]
    pub const fn from_grid(x: u8, y: u8) -> Self {
        debug_assert!(x < 8 && y < 8);
        Square((7 - y) * 8 + x)
    }

    /// Bit position within a [`Bitboard`].
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Column in the storage grid (same as the file index).
    #[inline]
    pub const fn grid_x(self) -> u8 {
        self.0 % 8
    }

    /// Row in the storage grid; row 0 holds the 8th rank.
    #[inline]
    pub const fn grid_y(self) -> u8 {
        7 - self.0 / 8
    }

    /// File index, 0 for the a-file.
    #[inline]
    pub const fn file_index(self) -> u8 {
        self.0 % 8
    }

    /// Rank index, 0 for the 1st rank.
    #[inline]
    pub const fn rank_index(self) -> u8 {
        self.0 / 8
    }

    pub fn file(self) -> char {
        (b'a' + self.file_index()) as char
    }

    /// Rank number as printed, 1 to 8.
    pub fn rank(self) -> u8 {
        self.rank_index() + 1
    }

    /// Steps by a file and rank delta, returning `None` off the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file_index() as i8 + file_delta;
        let rank = self.rank_index() as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Every square in index order, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

/// Algebraic coordinates, file letter in either case.
///
/// # Examples
/// ```
/// # use chess_movegen::game_state::Square;
/// let square: Square = "e4".parse().unwrap();
/// assert_eq!(square.value(), 28);
/// ```
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::WrongLength);
        };

        let file = file.to_ascii_lowercase();
        let rank = rank.to_digit(10).ok_or(SquareParseError::BadRank)?;

        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::BadFile);
        }
        if !(1..=8).contains(&rank) {
            return Err(SquareParseError::BadRank);
        }

        let idx = ((rank as u8 - 1) * 8) + (file as u8 - b'a');
        Ok(Square(idx))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Why a coordinate string is not a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SquareParseError {
    #[error("square must be 2 characters (e.g., 'e4')")]
    WrongLength,
    #[error("file must be a-h")]
    BadFile,
    #[error("rank must be 1-8")]
    BadRank,
}

/// A set of squares packed into 64 bits.
///
/// Bit `n` is set when [`Square`] `n` is in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    pub const fn new(value: u64) -> Self {
        Bitboard(value)
    }

    pub const fn from_square(square: Square) -> Self {
        Bitboard(1u64 << square.0)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1u64 << square.0) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn set(&mut self, square: Square) {
        self.0 |= 1u64 << square.value();
    }

    /// Scans the set squares from lowest to highest.
    #[inline]
    pub fn iter(self) -> SquareIter {
        SquareIter(self.0)
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = SquareIter;

    fn into_iter(self) -> SquareIter {
        self.iter()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        for square in iter {
            bb.set(square);
        }
        bb
    }
}

/// Forward bit scan over a mask. Each step yields the lowest set bit and clears it.
#[derive(Debug, Clone)]
pub struct SquareIter(u64);

impl Iterator for SquareIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = Square(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        Some(square)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareIter {}

impl std::iter::FusedIterator for SquareIter {}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::UpperHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Renders the mask as a grid with the 8th rank on top.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let square = Square(rank * 8 + file);
                write!(f, "{} ", if self.contains(square) { 'X' } else { '.' })?;
            }
            writeln!(f, "{}", rank + 1)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
