use utils::Position;

use crate::config::{EvalConfig, PlacementScope};
use crate::def::StaticEval;
use crate::eval_material::material_balance;
use crate::eval_mobility::mobility;
use crate::eval_placement::{placement, placement_balance};
use crate::scores::{clamp_ordinary, Score};

// Weighted terms are summed in i64 so any i32 weight stays finite before clamping.
#[inline(always)]
fn weighted(weight: i32, term: Score) -> i64 {
    weight as i64 * term as i64
}

#[inline(always)]
fn weighted_material(position: &Position, config: &EvalConfig) -> i64 {
    weighted(config.material_weight, material_balance(position.board()))
}

#[inline(always)]
fn weighted_placement(position: &Position, config: &EvalConfig) -> i64 {
    let board = position.board();
    let term = match config.placement_scope {
        PlacementScope::BothSides => placement_balance(board),
        PlacementScope::SideToMove => placement(board, position.side_to_move()),
    };
    weighted(config.placement_weight, term)
}

/// Material only.
pub struct MaterialEval {
    config: EvalConfig,
}

impl MaterialEval {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }
}

impl StaticEval for MaterialEval {
    fn name(&self) -> String {
        "Material".to_string()
    }

    fn evaluate(&self, position: &Position) -> Score {
        clamp_ordinary(weighted_material(position, &self.config))
    }
}

/// Material plus piece-square placement.
pub struct PlacementEval {
    config: EvalConfig,
}

impl PlacementEval {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }
}

impl StaticEval for PlacementEval {
    fn name(&self) -> String {
        "Material+Placement".to_string()
    }

    fn evaluate(&self, position: &Position) -> Score {
        let mut cp = weighted_material(position, &self.config);
        cp += weighted_placement(position, &self.config);
        clamp_ordinary(cp)
    }
}

/// Material, placement and mobility.
pub struct FullEval {
    config: EvalConfig,
}

impl FullEval {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }
}

impl StaticEval for FullEval {
    fn name(&self) -> String {
        "Material+Placement+Mobility".to_string()
    }

    fn evaluate(&self, position: &Position) -> Score {
        let mut cp = weighted_material(position, &self.config);
        cp += weighted_placement(position, &self.config);
        cp += weighted(self.config.mobility_weight, mobility(position));
        clamp_ordinary(cp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::ROOK_VALUE;
    use chess::Color;

    #[test]
    fn test_all_strategies_are_neutral_on_material_at_start() {
        let position = Position::default();
        let config = EvalConfig::default();

        assert_eq!(MaterialEval::new(config).evaluate(&position), 0);
        assert_eq!(PlacementEval::new(config).evaluate(&position), 0);
        // Only the mobility of the side to move remains
        assert_eq!(
            FullEval::new(config).evaluate(&position),
            config.mobility_weight * 20
        );
    }

    #[test]
    fn test_material_weight_scales_score() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let config = EvalConfig {
            material_weight: 3,
            ..EvalConfig::default()
        };
        assert_eq!(MaterialEval::new(config).evaluate(&position), 3 * ROOK_VALUE);
    }

    #[test]
    fn test_side_to_move_placement_scope() {
        let position = Position::default();
        let config = EvalConfig {
            placement_scope: PlacementScope::SideToMove,
            ..EvalConfig::default()
        };
        let expected = placement(position.board(), Color::White);
        assert_eq!(PlacementEval::new(config).evaluate(&position), expected);
    }

    #[test]
    fn test_ordinary_scores_stay_inside_sentinels() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/QQQQK3 w - - 0 1").unwrap();
        let config = EvalConfig {
            material_weight: 10_000,
            ..EvalConfig::default()
        };
        let score = MaterialEval::new(config).evaluate(&position);
        assert_eq!(score, crate::scores::WIN - 1);
    }

    #[test]
    fn test_extreme_weights_do_not_overflow() {
        let position = Position::default();
        let config = EvalConfig {
            material_weight: i32::MAX,
            placement_weight: i32::MAX,
            mobility_weight: i32::MAX,
            ..EvalConfig::default()
        };
        assert_eq!(FullEval::new(config).evaluate(&position), crate::scores::WIN - 1);

        // Black to move, so mobility pulls the score down
        let black =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
                .unwrap();
        let config = EvalConfig {
            mobility_weight: i32::MAX,
            ..EvalConfig::default()
        };
        assert_eq!(FullEval::new(config).evaluate(&black), crate::scores::LOSS + 1);

        let config = EvalConfig {
            material_weight: i32::MIN,
            ..EvalConfig::default()
        };
        let rook_up = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert_eq!(MaterialEval::new(config).evaluate(&rook_up), crate::scores::LOSS + 1);
    }
}
