use chess::{Board, Color, ALL_PIECES};

use crate::eval_material::side_sign;
use crate::pst::square_bonus;
use crate::scores::Score;

/// Piece-square score of one side, read from that side's own tables and
/// signed from White's perspective.
#[inline(always)]
pub fn placement(board: &Board, color: Color) -> Score {
    let color_mask = board.color_combined(color);

    let mut cp: Score = 0;
    for piece in ALL_PIECES {
        for sq in board.pieces(piece) & color_mask {
            cp += square_bonus(piece, color, sq);
        }
    }

    side_sign(color) * cp
}

#[inline(always)]
pub fn placement_balance(board: &Board) -> Score {
    placement(board, Color::White) + placement(board, Color::Black)
}
