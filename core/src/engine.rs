use evaluation::Evaluator;
use search::{Engine, SearchError};
use utils::Position;

use crate::args::SearchArgs;

pub fn create(args: &SearchArgs) -> Result<Engine, SearchError> {
    let evaluator = Evaluator::new(args.eval.build(args.eval_config()));
    Engine::new(evaluator, args.search_config())
}

/// Parses `fen` (or takes the initial setup) and plays `moves` on top of it.
pub fn load_position(fen: Option<&str>, moves: &[String]) -> Result<Position, SearchError> {
    let mut position = match fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::default(),
    };

    for text in moves {
        let mv = position.parse_move(text)?;
        position.play(mv)?;
    }

    Ok(position)
}
