mod alpha_beta;
mod config;
mod engine;
mod error;
mod move_ordering;
mod selector;

#[cfg(test)]
mod tests;

pub use alpha_beta::search_score;
pub use config::{SearchConfig, TieBreak};
pub use engine::Engine;
pub use error::SearchError;
pub use move_ordering::ordered_moves;
pub use selector::{select_move, SearchResult, SearchStats};
