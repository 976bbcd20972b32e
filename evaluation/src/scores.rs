// Score bounds and special values for alpha-beta search.
// Scores are from White's perspective: positive favors White.
pub type Score = i32;

/// Forced win for White. Also the upper bound of the search window.
pub const WIN: Score = 1_000_000;
/// Forced win for Black. Also the lower bound of the search window.
pub const LOSS: Score = -WIN;
pub const DRAW: Score = 0;

/// Narrows a wide non-terminal score to strictly inside the sentinels.
#[inline(always)]
pub fn clamp_ordinary(score: i64) -> Score {
    score.clamp((LOSS + 1) as i64, (WIN - 1) as i64) as Score
}

#[inline(always)]
pub fn is_decisive(score: Score) -> bool {
    score == WIN || score == LOSS
}
