use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// How the root resolves moves with equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// A later move with an equal score replaces the current best.
    #[default]
    LastWins,
    /// The first move reaching the best score is kept.
    FirstWins,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::LastWins => write!(f, "last"),
            TieBreak::FirstWins => write!(f, "first"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last" | "last-wins" => Ok(TieBreak::LastWins),
            "first" | "first-wins" => Ok(TieBreak::FirstWins),
            other => Err(format!("Unknown tie-break: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies searched below the current position. Root moves count as ply 1.
    pub max_depth: u8,
    pub tie_break: TieBreak,
    /// One-ply lookahead ordering at interior nodes.
    pub move_ordering: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            tie_break: TieBreak::LastWins,
            move_ordering: true,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_depth == 0 {
            return Err(SearchError::InvalidDepth);
        }
        Ok(())
    }
}
