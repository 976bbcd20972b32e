/// Which side's pieces contribute to the placement term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementScope {
    /// Both sides, each scored from its own viewpoint.
    #[default]
    BothSides,
    /// Only the pieces of the side to move.
    SideToMove,
}

#[derive(Debug, Clone, Copy)]
pub struct EvalConfig {
    pub material_weight: i32,
    pub placement_weight: i32,
    pub mobility_weight: i32, // per legal move of the side to move
    pub placement_scope: PlacementScope,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            material_weight: 1,
            placement_weight: 1,
            mobility_weight: 2,
            placement_scope: PlacementScope::BothSides,
        }
    }
}
