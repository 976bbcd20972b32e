use chess::ChessMove;
use evaluation::{Evaluator, Score};
use utils::Position;

use crate::error::SearchError;

/// Orders the legal moves of `position` by a one-ply lookahead.
///
/// Each move is applied, the child is statically evaluated and the move is
/// taken back. Moves are sorted best-first for the side to move: descending
/// when `maximizing`, ascending otherwise. The sort is stable, so moves with
/// equal scores keep the rules engine's order.
pub fn ordered_moves(
    position: &mut Position,
    evaluator: &mut Evaluator,
    maximizing: bool,
) -> Result<Vec<ChessMove>, SearchError> {
    let moves = position.legal_moves();
    let mut scored: Vec<(ChessMove, Score)> = Vec::with_capacity(moves.len());

    for mv in moves {
        let child = position.make_move(mv)?;
        scored.push((mv, evaluator.evaluate(&child)));
    }

    if maximizing {
        scored.sort_by(|a, b| b.1.cmp(&a.1));
    } else {
        scored.sort_by(|a, b| a.1.cmp(&b.1));
    }

    Ok(scored.into_iter().map(|(mv, _)| mv).collect())
}
