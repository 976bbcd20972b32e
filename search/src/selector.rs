use chess::{ChessMove, Color};
use evaluation::scores::{is_decisive, LOSS, WIN};
use evaluation::{Evaluator, Score};
use log::{debug, error, info};
use std::time::{Duration, Instant};
use utils::Position;

use crate::alpha_beta::AlphaBeta;
use crate::config::{SearchConfig, TieBreak};
use crate::error::SearchError;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Evaluator calls, cache hits included
    pub nodes: u64,
    /// Evaluator calls that missed the cache
    pub evaluations_computed: u64,
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.nodes as f64 / secs) as u64
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// `None` when the position is already finished.
    pub best_move: Option<ChessMove>,
    pub score: Score,
    pub stats: SearchStats,
}

/// Picks the best move for the side to move.
///
/// Every legal root move is searched with the full window, in the order the
/// rules engine generates them. Equal scores are resolved by
/// `config.tie_break`, except that a move which mates immediately is never
/// replaced by a slower mate of the same score. A finished position yields
/// no move and its terminal score.
pub fn select_move(
    position: &mut Position,
    evaluator: &mut Evaluator,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    config.validate()?;
    evaluator.reset();

    let start = Instant::now();

    if position.is_terminal() {
        let score = evaluator.evaluate(position);
        debug!("Position {} is finished with score {}", position.fen(), score);
        return Ok(SearchResult {
            best_move: None,
            score,
            stats: stats(evaluator, start),
        });
    }

    let moves = position.legal_moves();
    if moves.is_empty() {
        let fen = position.fen();
        error!("Rules engine returned no moves for non-terminal position {}", fen);
        return Err(SearchError::NoLegalMoves { fen });
    }

    let maximizing = position.side_to_move() == Color::White;
    let win = if maximizing { WIN } else { LOSS };
    let mut best_move = None;
    let mut best_score = if maximizing { LOSS } else { WIN };
    let mut best_mates = false;

    let mut search = AlphaBeta::new(evaluator, config);
    for mv in moves {
        let (score, mates) = {
            let mut child = position.make_move(mv)?;
            let score = search.search(&mut child, 1, LOSS, WIN)?;
            (score, score == win && child.is_terminal())
        };

        debug!("Move: {}, Score: {}", mv, score);

        let better = if mates != best_mates {
            mates
        } else {
            replaces(score, best_score, maximizing, config.tie_break)
        };

        if best_move.is_none() || better {
            best_move = Some(mv);
            best_score = score;
            best_mates = mates;
        }
    }

    let stats = stats(evaluator, start);

    if best_mates {
        debug!("Mate in one found");
    } else if is_decisive(best_score) {
        debug!("Forced result within {} plies", config.max_depth);
    }

    if let Some(mv) = best_move {
        info!(
            "Best value: {} -> {} : explored {} nodes in {:.3} seconds",
            best_score,
            mv,
            stats.nodes,
            stats.elapsed.as_secs_f64()
        );
    }

    Ok(SearchResult {
        best_move,
        score: best_score,
        stats,
    })
}

#[inline(always)]
fn replaces(score: Score, best: Score, maximizing: bool, tie_break: TieBreak) -> bool {
    match (maximizing, tie_break) {
        (true, TieBreak::LastWins) => score >= best,
        (true, TieBreak::FirstWins) => score > best,
        (false, TieBreak::LastWins) => score <= best,
        (false, TieBreak::FirstWins) => score < best,
    }
}

fn stats(evaluator: &Evaluator, start: Instant) -> SearchStats {
    SearchStats {
        nodes: evaluator.count(),
        evaluations_computed: evaluator.computed(),
        elapsed: start.elapsed(),
    }
}
