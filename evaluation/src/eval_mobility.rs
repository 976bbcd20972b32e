use utils::Position;

use crate::eval_material::side_sign;
use crate::scores::Score;

/// Legal move count of the side to move, signed from White's perspective.
#[inline(always)]
pub fn mobility(position: &Position) -> Score {
    side_sign(position.side_to_move()) * position.mobility() as Score
}
