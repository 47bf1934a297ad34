use std::array;
use std::iter::Flatten;

use super::attacks::{king_attacks, knight_attacks};
use crate::game_state::{Bitboard, Color, Occupancy, Piece, Role, Square};

/// Destinations reachable by one piece, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Pawn steps: push, double push, capture toward the a-file, capture
    /// toward the h-file.
    Steps([Option<Square>; 4]),
    /// Leaper destinations, emitted lowest square first.
    Jumps(Bitboard),
}

impl Reach {
    pub const NONE: Reach = Reach::Jumps(Bitboard::EMPTY);

    pub fn contains(&self, square: Square) -> bool {
        match self {
            Reach::Steps(steps) => steps.contains(&Some(square)),
            Reach::Jumps(mask) => mask.contains(square),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Reach::Steps(steps) => steps.iter().all(Option::is_none),
            Reach::Jumps(mask) => mask.is_empty(),
        }
    }
}

impl IntoIterator for Reach {
    type Item = Square;
    type IntoIter = ReachIter;

    fn into_iter(self) -> ReachIter {
        match self {
            Reach::Steps(steps) => ReachIter::Steps(steps.into_iter().flatten()),
            Reach::Jumps(mask) => ReachIter::Jumps(mask.iter()),
        }
    }
}

pub enum ReachIter {
    Steps(Flatten<array::IntoIter<Option<Square>, 4>>),
    Jumps(crate::game_state::SquareIter),
}

impl Iterator for ReachIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        match self {
            ReachIter::Steps(it) => it.next(),
            ReachIter::Jumps(it) => it.next(),
        }
    }
}

/// Computes the pseudo-legal destinations of `piece` standing on `from`.
///
/// `occupancy` must be taken from the point of view of `piece.color`.
/// Bishops, rooks and queens have no movement rules yet and reach nothing.
/// Both [`super::generate_moves`] and [`super::can_move`] go through here.
pub fn reach(piece: Piece, from: Square, occupancy: Occupancy) -> Reach {
    match piece.role {
        Role::Pawn => Reach::Steps(pawn_steps(piece.color, from, occupancy)),
        Role::Knight => Reach::Jumps(knight_attacks(from) & !occupancy.us),
        Role::King => Reach::Jumps(king_attacks(from) & !occupancy.us),
        Role::Bishop | Role::Rook | Role::Queen => Reach::NONE,
    }
}

/// Rank step toward the opponent and the rank index pawns start on.
const fn pawn_geometry(color: Color) -> (i8, u8) {
    match color {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    }
}

fn pawn_steps(color: Color, from: Square, occupancy: Occupancy) -> [Option<Square>; 4] {
    let (dir, start_rank) = pawn_geometry(color);
    let empty = !occupancy.all();

    let push = from.offset(0, dir).filter(|&sq| empty.contains(sq));
    let double = push
        .filter(|_| from.rank_index() == start_rank)
        .and_then(|sq| sq.offset(0, dir))
        .filter(|&sq| empty.contains(sq));

    let capture = |file_delta| {
        from.offset(file_delta, dir)
            .filter(|&sq| occupancy.them.contains(sq))
    };

    [push, double, capture(-1), capture(1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::Board;
    use test_case::test_case;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square is valid")
    }

    fn reach_on(fen: &str, from: &str) -> Vec<String> {
        let board = Board::from_fen(fen).expect("valid FEN");
        let from = sq(from);
        let piece = board.piece_at(from).expect("piece on origin");
        reach(piece, from, board.occupancy(piece.color))
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test_case("4k3/8/8/8/8/8/4P3/4K3", "e2", &["e3", "e4"]; "white double push")]
    #[test_case("4k3/4p3/8/8/8/8/8/4K3", "e7", &["e6", "e5"]; "black double push")]
    #[test_case("4k3/8/8/8/8/4P3/8/4K3", "e3", &["e4"]; "single push off start rank")]
    #[test_case("4k3/8/8/8/8/4n3/4P3/4K3", "e2", &[]; "blocked directly")]
    #[test_case("4k3/8/8/8/4n3/8/4P3/4K3", "e2", &["e3"]; "double push blocked")]
    #[test_case("4k3/8/8/8/8/3p1n2/4P3/4K3", "e2", &["e3", "e4", "d3", "f3"]; "both captures")]
    #[test_case("4k3/8/8/8/8/3P1N2/4P3/4K3", "e2", &["e3", "e4"]; "no own captures")]
    #[test_case("4k3/8/8/8/8/8/P7/4K3", "a2", &["a3", "a4"]; "a-file does not wrap")]
    #[test_case("4k2P/8/8/8/8/8/8/4K3", "h8", &[]; "last rank has no step")]
    fn test_pawn_steps(fen: &str, from: &str, expected: &[&str]) {
        assert_eq!(reach_on(fen, from), expected);
    }

    #[test]
    fn test_pawn_captures_on_h_file_edge() {
        // A black piece on a3 must not be seen as diagonal from h2.
        assert_eq!(reach_on("4k3/8/8/8/8/p7/7P/4K3", "h2"), ["h3", "h4"]);
    }

    #[test]
    fn test_knight_excludes_own_pieces_only() {
        // e2 holds our pawn, f3 an enemy pawn.
        assert_eq!(reach_on("4k3/8/8/8/8/5p2/4P3/6N1", "g1"), ["f3", "h3"]);
    }

    #[test]
    fn test_king_blocked_in_start_position() {
        let board = Board::starting_position();
        let king = board.piece_at(sq("e1")).unwrap();
        assert!(reach(king, sq("e1"), board.occupancy(Color::White)).is_empty());
    }

    #[test_case(Role::Bishop)]
    #[test_case(Role::Rook)]
    #[test_case(Role::Queen)]
    fn test_sliders_reach_nothing(role: Role) {
        let piece = Piece::new(Color::White, role);
        let reach = reach(piece, sq("d4"), Occupancy::default());
        assert!(reach.is_empty());
        assert_eq!(reach.into_iter().count(), 0);
    }
}
