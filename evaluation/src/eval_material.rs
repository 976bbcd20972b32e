use chess::{Board, Color, ALL_PIECES};

use crate::scores::Score;
use crate::values::piece_value;

#[inline(always)]
pub(crate) fn side_sign(color: Color) -> Score {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Material of one side, signed from White's perspective.
#[inline(always)]
pub fn material(board: &Board, color: Color) -> Score {
    let color_mask = board.color_combined(color);

    let mut cp: Score = 0;
    for piece in ALL_PIECES {
        let count = (board.pieces(piece) & color_mask).popcnt() as Score;
        cp += piece_value(piece) * count;
    }

    side_sign(color) * cp
}

#[inline(always)]
pub fn material_balance(board: &Board) -> Score {
    material(board, Color::White) + material(board, Color::Black)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{KING_VALUE, QUEEN_VALUE, ROOK_VALUE};
    use std::str::FromStr;

    #[test]
    fn test_start_position_material_is_neutral() {
        assert_eq!(material_balance(&Board::default()), 0);
    }

    #[test]
    fn test_material_is_signed_per_side() {
        let board = Board::from_str("3qk3/8/8/8/8/8/8/3RK3 w - - 0 1").unwrap();
        assert_eq!(material(&board, Color::White), ROOK_VALUE + KING_VALUE);
        assert_eq!(material(&board, Color::Black), -(QUEEN_VALUE + KING_VALUE));
        assert_eq!(material_balance(&board), ROOK_VALUE - QUEEN_VALUE);
    }
}
