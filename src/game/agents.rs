use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{AgentConfig, AgentKind};
use super::{GameError, PursuitState};
use crate::adversarial_searcher::{self, AdversarialState, SearchContext, SearchError, Strategy};
use crate::evaluate::{reflex_evaluation, EvaluationFunction};
use crate::grid::Direction;

/// Something that picks moves for one agent of a pursuit game.
pub trait Agent {
    /// Index of the agent this player moves for.
    fn index(&self) -> usize;

    fn choose_action(&mut self, state: &PursuitState) -> Result<Direction, GameError>;
}

/// Plays agent 0 with a depth-limited game-tree search.
pub struct MultiAgentSearcher {
    strategy: Strategy,
    evaluation: EvaluationFunction,
    context: SearchContext,
}

impl MultiAgentSearcher {
    pub fn new(strategy: Strategy, depth: u8, evaluation: EvaluationFunction) -> Self {
        Self {
            strategy,
            evaluation,
            context: SearchContext::new(depth),
        }
    }

    pub fn context(&self) -> &SearchContext {
        &self.context
    }
}

impl Agent for MultiAgentSearcher {
    fn index(&self) -> usize {
        0
    }

    fn choose_action(&mut self, state: &PursuitState) -> Result<Direction, GameError> {
        let evaluator = self.evaluation.resolve::<PursuitState>();
        let action = adversarial_searcher::search(self.strategy, &mut self.context, state, &evaluator)?;
        Ok(action)
    }
}

/// Plays agent 0 one move ahead, scoring each action with the reflex
/// evaluation. Ties are broken at random.
pub struct ReflexAgent {
    rng: StdRng,
}

impl ReflexAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for ReflexAgent {
    fn index(&self) -> usize {
        0
    }

    fn choose_action(&mut self, state: &PursuitState) -> Result<Direction, GameError> {
        let scored: Vec<(Direction, f64)> = state
            .legal_actions(0)
            .into_iter()
            .map(|action| (action, reflex_evaluation(state, action)))
            .collect();

        let best_score = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);
        let best: Vec<Direction> = scored
            .iter()
            .filter(|(_, score)| *score == best_score)
            .map(|(action, _)| *action)
            .collect();

        if best.is_empty() {
            return Err(SearchError::NoAvailableMoves.into());
        }

        trace!("reflex candidates {:?} scored {}", best, best_score);
        Ok(best[self.rng.gen_range(0..best.len())])
    }
}

/// A ghost that picks uniformly among its legal actions.
pub struct RandomGhost {
    index: usize,
    rng: StdRng,
}

impl RandomGhost {
    pub fn new(index: usize, seed: u64) -> Self {
        Self {
            index,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomGhost {
    fn index(&self) -> usize {
        self.index
    }

    fn choose_action(&mut self, state: &PursuitState) -> Result<Direction, GameError> {
        let actions = state.legal_actions(self.index);
        if actions.is_empty() {
            return Err(SearchError::NoAvailableMoves.into());
        }
        Ok(actions[self.rng.gen_range(0..actions.len())])
    }
}

/// Builds the agent-0 player described by `config`.
pub fn build_agent(config: &AgentConfig, seed: u64) -> Box<dyn Agent> {
    let strategy = match config.kind {
        AgentKind::Reflex => return Box::new(ReflexAgent::new(seed)),
        AgentKind::Minimax => Strategy::Minimax,
        AgentKind::AlphaBeta => Strategy::AlphaBeta,
        AgentKind::Expectimax => Strategy::Expectimax,
    };
    Box::new(MultiAgentSearcher::new(strategy, config.depth, config.evaluation))
}
