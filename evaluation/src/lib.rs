mod config;
pub mod def;
mod eval_material;
mod eval_mobility;
mod eval_placement;
mod evaluator;
pub mod pst;
pub mod scores;
mod strategies;
pub mod values;

pub use config::{EvalConfig, PlacementScope};
pub use def::{EvalKind, StaticEval};
pub use eval_material::{material, material_balance};
pub use eval_mobility::mobility;
pub use eval_placement::{placement, placement_balance};
pub use evaluator::{terminal_score, Evaluator};
pub use scores::Score;
pub use strategies::{FullEval, MaterialEval, PlacementEval};
pub use values::piece_value;
