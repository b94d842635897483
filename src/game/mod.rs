//! The pursuit game the adversarial engine plays: rules, players and the
//! game loop.

use thiserror::Error;

use crate::adversarial_searcher::SearchError;
use crate::grid::{Direction, LayoutError};

pub mod agents;
mod config;
mod game_loop;
mod state;

pub use agents::{build_agent, Agent, MultiAgentSearcher, RandomGhost, ReflexAgent};
pub use config::{AgentConfig, AgentKind, AgentParseError};
pub use game_loop::{GameLoop, GameOutcome};
pub use state::{
    PursuitState, FOOD_POINTS, GHOST_POINTS, LOSE_POINTS, SCARED_TIME, TIME_PENALTY, WIN_POINTS,
};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Agent {agent} cannot play {action}")]
    InvalidAction { action: Direction, agent: usize },
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}
