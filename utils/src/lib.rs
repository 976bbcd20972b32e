mod board;
mod error;
mod position;

pub use board::has_insufficient_material;
pub use error::PositionError;
pub use position::{MoveGuard, Outcome, Position};
