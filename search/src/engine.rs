use chess::ChessMove;
use evaluation::Evaluator;
use log::{debug, info};
use utils::Position;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::selector::{select_move, SearchResult};

/// Game-level front end: owns the current position and the evaluator whose
/// cache lives for the whole game.
pub struct Engine {
    position: Position,
    evaluator: Evaluator,
    config: SearchConfig,
}

impl Engine {
    pub fn new(evaluator: Evaluator, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            position: Position::default(),
            evaluator,
            config,
        })
    }

    pub fn configure(&mut self, config: SearchConfig) -> Result<(), SearchError> {
        config.validate()?;
        debug!("Configured search: {:?}", config);
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Back to the initial setup with an empty evaluation cache.
    pub fn new_game(&mut self) {
        info!("New game ({} evaluator)", self.evaluator.name());
        self.position = Position::default();
        self.evaluator.new_game();
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn play(&mut self, mv: ChessMove) -> Result<(), SearchError> {
        self.position.play(mv)?;
        Ok(())
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn search(&mut self) -> Result<SearchResult, SearchError> {
        select_move(&mut self.position, &mut self.evaluator, &self.config)
    }
}
