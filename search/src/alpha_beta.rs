use chess::{ChessMove, Color};
use evaluation::scores::{LOSS, WIN};
use evaluation::{Evaluator, Score};
use log::error;
use utils::Position;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::move_ordering::ordered_moves;

/// Depth-bounded minimax with alpha-beta pruning.
///
/// Scores are from White's perspective: White maximizes, Black minimizes.
/// Every move is applied through a [`utils::MoveGuard`], so the position is
/// back in its original state whenever a call returns, cutoffs and errors
/// included.
pub(crate) struct AlphaBeta<'a> {
    evaluator: &'a mut Evaluator,
    config: &'a SearchConfig,
}

impl<'a> AlphaBeta<'a> {
    pub fn new(evaluator: &'a mut Evaluator, config: &'a SearchConfig) -> Self {
        Self { evaluator, config }
    }

    pub fn search(
        &mut self,
        position: &mut Position,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
    ) -> Result<Score, SearchError> {
        if depth >= self.config.max_depth || position.is_terminal() {
            return Ok(self.evaluator.evaluate(position));
        }

        let maximizing = position.side_to_move() == Color::White;
        let moves = self.moves(position, maximizing)?;

        if maximizing {
            let mut best = LOSS;
            for mv in moves {
                let value = {
                    let mut child = position.make_move(mv)?;
                    self.search(&mut child, depth + 1, alpha, beta)?
                };

                best = best.max(value);
                alpha = alpha.max(best);

                if alpha >= beta {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = WIN;
            for mv in moves {
                let value = {
                    let mut child = position.make_move(mv)?;
                    self.search(&mut child, depth + 1, alpha, beta)?
                };

                best = best.min(value);
                beta = beta.min(best);

                if alpha >= beta {
                    break;
                }
            }
            Ok(best)
        }
    }

    fn moves(
        &mut self,
        position: &mut Position,
        maximizing: bool,
    ) -> Result<Vec<ChessMove>, SearchError> {
        let moves = if self.config.move_ordering {
            ordered_moves(position, self.evaluator, maximizing)?
        } else {
            position.legal_moves()
        };

        if moves.is_empty() {
            let fen = position.fen();
            error!("Rules engine returned no moves for non-terminal position {}", fen);
            return Err(SearchError::NoLegalMoves { fen });
        }

        Ok(moves)
    }
}

/// Alpha-beta value of `position`, searched `config.max_depth` plies deep
/// with the full `[LOSS, WIN]` window.
pub fn search_score(
    position: &mut Position,
    evaluator: &mut Evaluator,
    config: &SearchConfig,
) -> Result<Score, SearchError> {
    config.validate()?;
    AlphaBeta::new(evaluator, config).search(position, 0, LOSS, WIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation::{EvalConfig, EvalKind};

    fn evaluator(kind: EvalKind) -> Evaluator {
        Evaluator::new(kind.build(EvalConfig::default()))
    }

    #[test]
    fn test_depth_one_is_best_child() {
        let mut position = Position::from_fen("3q3k/8/8/8/8/8/8/K2R4 w - - 0 1").unwrap();
        let mut evaluator = evaluator(EvalKind::Material);

        let score = search_score(&mut position, &mut evaluator, &SearchConfig::with_depth(1));
        assert_eq!(score.unwrap(), 500);
    }

    #[test]
    fn test_terminal_position_returns_sentinel() {
        // Black is mated
        let mut position = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1").unwrap();
        let mut evaluator = evaluator(EvalKind::Full);

        let score = search_score(&mut position, &mut evaluator, &SearchConfig::with_depth(3));
        assert_eq!(score.unwrap(), WIN);
        assert_eq!(evaluator.count(), 1);
    }

    #[test]
    fn test_minimizer_avoids_losing_material() {
        // Black to move can take the rook on d1 with the queen.
        let mut position = Position::from_fen("3q3k/8/8/8/8/8/8/K2R4 b - - 0 1").unwrap();
        let mut evaluator = evaluator(EvalKind::Material);

        let score = search_score(&mut position, &mut evaluator, &SearchConfig::with_depth(2));
        assert_eq!(score.unwrap(), -900);
    }

    #[test]
    fn test_search_restores_position() {
        let mut position = Position::default();
        let fen = position.fen();
        let mut evaluator = evaluator(EvalKind::Full);

        search_score(&mut position, &mut evaluator, &SearchConfig::with_depth(3)).unwrap();
        assert_eq!(position.fen(), fen);
        assert_eq!(position.ply(), 0);
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let mut position = Position::default();
        let mut evaluator = evaluator(EvalKind::Full);

        assert!(matches!(
            search_score(&mut position, &mut evaluator, &SearchConfig::with_depth(0)),
            Err(SearchError::InvalidDepth)
        ));
    }
}
