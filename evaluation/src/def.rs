use std::fmt;
use std::str::FromStr;

use utils::Position;

use crate::config::EvalConfig;
use crate::scores::Score;
use crate::strategies::{FullEval, MaterialEval, PlacementEval};

/// Static scoring of a non-terminal position.
/// Evaluates from White's perspective. Positive = White advantage.
pub trait StaticEval: Send {
    fn name(&self) -> String;
    fn evaluate(&self, position: &Position) -> Score;
}

/// Selects which static evaluation the engine runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalKind {
    Material,
    Placement,
    #[default]
    Full,
}

impl EvalKind {
    pub fn build(self, config: EvalConfig) -> Box<dyn StaticEval> {
        match self {
            EvalKind::Material => Box::new(MaterialEval::new(config)),
            EvalKind::Placement => Box::new(PlacementEval::new(config)),
            EvalKind::Full => Box::new(FullEval::new(config)),
        }
    }
}

impl fmt::Display for EvalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalKind::Material => write!(f, "material"),
            EvalKind::Placement => write!(f, "placement"),
            EvalKind::Full => write!(f, "full"),
        }
    }
}

impl FromStr for EvalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "material" => Ok(EvalKind::Material),
            "placement" => Ok(EvalKind::Placement),
            "full" => Ok(EvalKind::Full),
            other => Err(format!("Unknown evaluator: {}", other)),
        }
    }
}
