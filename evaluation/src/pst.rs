use chess::{Color, Piece, Square};

use crate::scores::Score;

/// Piece-Square Table: position-dependent bonuses/penalties for each piece.
///
/// Values are in centipawns. Positive = good square, negative = bad square.
/// Tables are authored for White (a1=index 0, h8=index 63); Black tables are
/// the same tables flipped vertically.
///
/// <https://www.chessprogramming.org/Simplified_Evaluation_Function>
pub type PST = [Score; 64];

/// Indexed by `[color][piece]`.
const PST_TABLE: [[&PST; 6]; 2] = [
    // index 0 → White
    [
        &WHITE_PAWN_PST,
        &WHITE_KNIGHT_PST,
        &WHITE_BISHOP_PST,
        &WHITE_ROOK_PST,
        &WHITE_QUEEN_PST,
        &WHITE_KING_PST,
    ],
    // index 1 → Black
    [
        &BLACK_PAWN_PST,
        &BLACK_KNIGHT_PST,
        &BLACK_BISHOP_PST,
        &BLACK_ROOK_PST,
        &BLACK_QUEEN_PST,
        &BLACK_KING_PST,
    ],
];

#[inline(always)]
pub fn pst(piece: Piece, color: Color) -> &'static PST {
    PST_TABLE[color.to_index()][piece.to_index()]
}

/// Bonus for `color`'s `piece` standing on `square`, from that side's viewpoint.
#[inline(always)]
pub fn square_bonus(piece: Piece, color: Color, square: Square) -> Score {
    pst(piece, color)[square.to_index()]
}

const fn flip_vertical(source: &PST) -> PST {
    let mut table = [0; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = source[i ^ 56];
        i += 1;
    }
    table
}

// - Encourages central pawn pushes, discourages leaving d2/e2 unmoved
#[rustfmt::skip]
pub const WHITE_PAWN_PST: PST = [
      0,   0,   0,   0,   0,   0,   0,   0, // RANK 1: a1..h1
      5,  10,  10, -20, -20,  10,  10,   5, // RANK 2
      5,  -5, -10,   0,   0, -10,  -5,   5, // RANK 3
      0,   0,   0,  20,  20,   0,   0,   0, // RANK 4
      5,   5,  10,  25,  25,  10,   5,   5, // RANK 5
     10,  10,  20,  30,  30,  20,  10,  10, // RANK 6
     50,  50,  50,  50,  50,  50,  50,  50, // RANK 7
      0,   0,   0,   0,   0,   0,   0,   0, // RANK 8
];
const BLACK_PAWN_PST: PST = flip_vertical(&WHITE_PAWN_PST);

// - Knights on the rim are dim
#[rustfmt::skip]
pub const WHITE_KNIGHT_PST: PST = [
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 1: a1..h1
    -40, -20,   0,   5,   5,   0, -20, -40, // RANK 2
    -30,   5,  10,  15,  15,  10,   5, -30, // RANK 3
    -30,   0,  15,  20,  20,  15,   0, -30, // RANK 4
    -30,   5,  15,  20,  20,  15,   5, -30, // RANK 5
    -30,   0,  10,  15,  15,  10,   0, -30, // RANK 6
    -40, -20,   0,   0,   0,   0, -20, -40, // RANK 7
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 8
];
const BLACK_KNIGHT_PST: PST = flip_vertical(&WHITE_KNIGHT_PST);

// - Long diagonals and centre, avoid corners
#[rustfmt::skip]
pub const WHITE_BISHOP_PST: PST = [
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 1: a1..h1
    -10,   5,   0,   0,   0,   0,   5, -10, // RANK 2
    -10,  10,  10,  10,  10,  10,  10, -10, // RANK 3
    -10,   0,  10,  10,  10,  10,   0, -10, // RANK 4
    -10,   5,   5,  10,  10,   5,   5, -10, // RANK 5
    -10,   0,   5,  10,  10,   5,   0, -10, // RANK 6
    -10,   0,   0,   0,   0,   0,   0, -10, // RANK 7
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 8
];
const BLACK_BISHOP_PST: PST = flip_vertical(&WHITE_BISHOP_PST);

// - Seventh rank and central back-rank files
#[rustfmt::skip]
pub const WHITE_ROOK_PST: PST = [
      0,   0,   0,   5,   5,   0,   0,   0, // RANK 1: a1..h1
     -5,   0,   0,   0,   0,   0,   0,  -5, // RANK 2
     -5,   0,   0,   0,   0,   0,   0,  -5, // RANK 3
     -5,   0,   0,   0,   0,   0,   0,  -5, // RANK 4
     -5,   0,   0,   0,   0,   0,   0,  -5, // RANK 5
     -5,   0,   0,   0,   0,   0,   0,  -5, // RANK 6
      5,  10,  10,  10,  10,  10,  10,   5, // RANK 7
      0,   0,   0,   0,   0,   0,   0,   0, // RANK 8
];
const BLACK_ROOK_PST: PST = flip_vertical(&WHITE_ROOK_PST);

// - Mild center bonus
#[rustfmt::skip]
pub const WHITE_QUEEN_PST: PST = [
    -20, -10, -10,  -5,  -5, -10, -10, -20, // RANK 1: a1..h1
    -10,   0,   5,   0,   0,   0,   0, -10, // RANK 2
    -10,   5,   5,   5,   5,   5,   0, -10, // RANK 3
      0,   0,   5,   5,   5,   5,   0,  -5, // RANK 4
     -5,   0,   5,   5,   5,   5,   0,  -5, // RANK 5
    -10,   0,   5,   5,   5,   5,   0, -10, // RANK 6
    -10,   0,   0,   0,   0,   0,   0, -10, // RANK 7
    -20, -10, -10,  -5,  -5, -10, -10, -20, // RANK 8
];
const BLACK_QUEEN_PST: PST = flip_vertical(&WHITE_QUEEN_PST);

// - Stay behind the pawn shield, encourage castling
#[rustfmt::skip]
pub const WHITE_KING_PST: PST = [
     20,  30,  10,   0,   0,  10,  30,  20, // RANK 1: a1..h1
     20,  20,   0,   0,   0,   0,  20,  20, // RANK 2
    -10, -20, -20, -20, -20, -20, -20, -10, // RANK 3
    -20, -30, -30, -40, -40, -30, -30, -20, // RANK 4
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 5
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 6
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 7
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 8
];
const BLACK_KING_PST: PST = flip_vertical(&WHITE_KING_PST);
