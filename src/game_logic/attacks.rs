use crate::game_state::{Bitboard, Square};

const NOT_A_FILE: u64 = 0xfefe_fefe_fefe_fefe;
const NOT_H_FILE: u64 = 0x7f7f_7f7f_7f7f_7f7f;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Knight destinations from every square, indexed by [`Square::index`].
pub static KNIGHT_ATTACKS: [Bitboard; 64] = knight_table();

const fn knight_table() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut mask = 0u64;
        let mut i = 0;
        while i < KNIGHT_OFFSETS.len() {
            let (df, dr) = KNIGHT_OFFSETS[i];
            let (f, r) = (file + df, rank + dr);
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                mask |= 1u64 << (r * 8 + f) as u32;
            }
            i += 1;
        }
        table[sq] = Bitboard::new(mask);
        sq += 1;
    }
    table
}

#[inline]
pub fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square.index()]
}

/// The up to eight neighbours of `square`.
///
/// Shifts along a file need no guard; the sideways and diagonal shifts drop
/// whatever wrapped onto the opposite edge file.
pub const fn king_attacks(square: Square) -> Bitboard {
    let k = 1u64 << square.value();
    Bitboard::new(
        ((k << 1) & NOT_A_FILE)
            | ((k >> 1) & NOT_H_FILE)
            | (k << 8)
            | (k >> 8)
            | ((k << 9) & NOT_A_FILE)
            | ((k << 7) & NOT_H_FILE)
            | ((k >> 9) & NOT_H_FILE)
            | ((k >> 7) & NOT_A_FILE),
    )
}
