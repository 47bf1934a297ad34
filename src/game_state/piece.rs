use std::fmt;
use std::ops::Not;

/// Bit 7 of a tag marks a black piece.
pub const BLACK_TAG_BIT: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Host player number: White plays first as player 0.
    #[inline]
    pub const fn player_number(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    pub const fn from_player_number(player: u8) -> Option<Self> {
        match player {
            0 => Some(Color::White),
            1 => Some(Color::Black),
            _ => None,
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Role::Pawn),
            2 => Some(Role::Knight),
            3 => Some(Role::Bishop),
            4 => Some(Role::Rook),
            5 => Some(Role::Queen),
            6 => Some(Role::King),
            _ => None,
        }
    }

    /// Lowercase letter used by FEN.
    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    /// Case-insensitive.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(Role::Pawn),
            'n' => Some(Role::Knight),
            'b' => Some(Role::Bishop),
            'r' => Some(Role::Rook),
            'q' => Some(Role::Queen),
            'k' => Some(Role::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    pub const fn new(color: Color, role: Role) -> Self {
        Self { color, role }
    }

    /// Encodes the piece as its interchange tag: `1..=6` for White,
    /// `129..=134` for Black. `0` stands for an empty square.
    pub const fn tag(self) -> u8 {
        match self.color {
            Color::White => self.role as u8,
            Color::Black => self.role as u8 | BLACK_TAG_BIT,
        }
    }

    /// Decodes a tag, `None` for an empty square or an unknown type.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match classify(tag) {
            (color, Some(role)) => Some(Self { color, role }),
            (_, None) => None,
        }
    }

    /// FEN letter: uppercase for White.
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.char().to_ascii_uppercase(),
            Color::Black => self.role.char(),
        }
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
        match Role::from_char(ch) {
            Some(role) => Some(Self { color, role }),
            None => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// Splits a tag into its color and type.
///
/// Total over `u8`: any tag whose low seven bits are not `1..=6` yields no
/// type, and the color still follows bit 7.
pub const fn classify(tag: u8) -> (Color, Option<Role>) {
    let color = if tag < BLACK_TAG_BIT { Color::White } else { Color::Black };
    (color, Role::from_u8(tag % BLACK_TAG_BIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, Color::White, None; "empty")]
    #[test_case(1, Color::White, Some(Role::Pawn); "white pawn")]
    #[test_case(6, Color::White, Some(Role::King); "white king")]
    #[test_case(7, Color::White, None; "white out of range")]
    #[test_case(128, Color::Black, None; "black bit alone")]
    #[test_case(130, Color::Black, Some(Role::Knight); "black knight")]
    #[test_case(134, Color::Black, Some(Role::King); "black king")]
    #[test_case(255, Color::Black, None; "all bits")]
    fn test_classify(tag: u8, color: Color, role: Option<Role>) {
        assert_eq!(classify(tag), (color, role));
    }

    #[test]
    fn test_tag_roundtrip() {
        for color in Color::ALL {
            for role in Role::ALL {
                let piece = Piece::new(color, role);
                assert_eq!(Piece::from_tag(piece.tag()), Some(piece));
            }
        }
    }

    #[test]
    fn test_black_tags_set_high_bit() {
        assert_eq!(Piece::new(Color::White, Role::Queen).tag(), 5);
        assert_eq!(Piece::new(Color::Black, Role::Queen).tag(), 133);
    }

    #[test]
    fn test_classify_is_total() {
        for tag in 0..=u8::MAX {
            let (color, role) = classify(tag);
            assert_eq!(color == Color::Black, tag >= 128);
            assert_eq!(role.is_some(), matches!(tag % 128, 1..=6));
        }
    }

    #[test_case('P', Some(Piece::new(Color::White, Role::Pawn)))]
    #[test_case('k', Some(Piece::new(Color::Black, Role::King)))]
    #[test_case('N', Some(Piece::new(Color::White, Role::Knight)))]
    #[test_case('x', None)]
    #[test_case('3', None)]
    fn test_from_char(ch: char, expected: Option<Piece>) {
        assert_eq!(Piece::from_char(ch), expected);
        if let Some(piece) = expected {
            assert_eq!(piece.char(), ch);
        }
    }

    #[test]
    fn test_player_numbers() {
        assert_eq!(Color::from_player_number(Color::White.player_number()), Some(Color::White));
        assert_eq!(Color::from_player_number(Color::Black.player_number()), Some(Color::Black));
        assert_eq!(Color::from_player_number(2), None);
        assert_eq!(!Color::White, Color::Black);
    }
}
