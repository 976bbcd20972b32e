use ahash::AHashMap;
use log::debug;
use utils::{Outcome, Position};

use crate::def::StaticEval;
use crate::scores::{Score, DRAW, LOSS, WIN};

/// Memoizing front for a [`StaticEval`].
///
/// Scores are cached by position fingerprint for the lifetime of one game.
/// [`Evaluator::reset`] only clears the node counter between searches;
/// [`Evaluator::new_game`] is the only thing that empties the cache.
pub struct Evaluator {
    strategy: Box<dyn StaticEval>,
    cache: AHashMap<u64, Score>,

    /// Calls to `evaluate` since the last reset, cache hits included
    count: u64,
    /// Cache misses since the last reset
    computed: u64,
}

impl Evaluator {
    pub fn new(strategy: Box<dyn StaticEval>) -> Self {
        Self {
            strategy,
            cache: AHashMap::new(),
            count: 0,
            computed: 0,
        }
    }

    pub fn name(&self) -> String {
        self.strategy.name()
    }

    pub fn evaluate(&mut self, position: &Position) -> Score {
        self.count += 1;

        let key = position.fingerprint();
        if let Some(&score) = self.cache.get(&key) {
            return score;
        }

        self.computed += 1;
        let score = match position.outcome() {
            Some(outcome) => terminal_score(outcome),
            None => self.strategy.evaluate(position),
        };
        self.cache.insert(key, score);
        score
    }

    /// Clears the counters. The cache survives.
    pub fn reset(&mut self) {
        self.count = 0;
        self.computed = 0;
    }

    pub fn new_game(&mut self) {
        debug!("Clearing evaluation cache ({} entries)", self.cache.len());
        self.cache.clear();
        self.reset();
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn computed(&self) -> u64 {
        self.computed
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

#[inline(always)]
pub fn terminal_score(outcome: Outcome) -> Score {
    match outcome {
        Outcome::WhiteWins => WIN,
        Outcome::BlackWins => LOSS,
        Outcome::Draw => DRAW,
    }
}
