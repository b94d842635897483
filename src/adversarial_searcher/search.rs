//! Game-tree search for agent 0 against any number of adversaries.
//!
//! # Depth
//!
//! Depth is counted in rounds, not in individual moves: it grows by one each
//! time agent 0 moves, no matter how many adversaries follow. The evaluator is
//! called when an agent-0 layer is reached at the configured depth, when the
//! state is won or lost, or when the agent to move has no legal actions.
//!
//! # Strategies
//!
//! ## Minimax
//! Agent-0 layers take the maximum of their children, adversary layers the
//! minimum. Adversaries are assumed to play the worst case for agent 0.
//!
//! ## Alpha-Beta
//! Minimax with a window [alpha, beta] inherited from the ancestors. A
//! maximizing layer stops as soon as its value exceeds beta, a minimizing layer
//! as soon as its value drops below alpha. The comparisons are strict, so a
//! subtree is never cut on equality and the chosen action is always the one
//! plain minimax would choose.
//!
//! ## Expectimax
//! Agent-0 layers take the maximum; adversary layers take the mean of their
//! children, modelling adversaries that pick uniformly at random among their
//! legal actions.
//!
//! # Root
//!
//! At the root every legal action of agent 0 is scored and the first action
//! with the strictly greatest score wins. Later actions with an equal score do
//! not replace it.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, trace};
use thiserror::Error;

use super::{AdversarialState, Evaluator};

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
}

#[derive(Error, Debug, PartialEq)]
pub enum StrategyParseError {
    #[error("Unknown adversarial strategy: {name:?} (expected minimax, alpha-beta or expectimax)")]
    UnknownStrategy { name: String },
}

/// The rule used to combine the values of adversary layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "minimax" => Ok(Strategy::Minimax),
            "alpha-beta" | "alphabeta" => Ok(Strategy::AlphaBeta),
            "expectimax" => Ok(Strategy::Expectimax),
            _ => Err(StrategyParseError::UnknownStrategy {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::Expectimax => "expectimax",
        };
        write!(f, "{}", name)
    }
}

/// Statistics collected during search.
#[derive(Default)]
struct SearchStats {
    position_count: usize,
    pruned_count: usize,
    last_score: Option<f64>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, score: f64, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

pub struct SearchContext {
    depth: u8,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            stats: SearchStats::default(),
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.depth
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Number of positions handed to the evaluator during the last search.
    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    /// Number of layers cut short by alpha-beta during the last search.
    pub fn pruned_branch_count(&self) -> usize {
        self.stats.pruned_count
    }

    /// Score of the chosen action in the last search.
    pub fn last_score(&self) -> Option<f64> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }
}

#[inline(always)]
fn next_agent(agent: usize, agent_count: usize) -> usize {
    (agent + 1) % agent_count
}

/// Recursive layer functions, sharing the depth limit, evaluator and stats.
struct TreeWalker<'a, E> {
    max_depth: u8,
    evaluator: &'a E,
    stats: &'a mut SearchStats,
}

impl<'a, E> TreeWalker<'a, E> {
    fn evaluate<S>(&mut self, state: &S) -> f64
    where
        E: Evaluator<S>,
    {
        self.stats.position_count += 1;
        self.evaluator.evaluate(state)
    }

    /// Returns the actions to search from this layer, or `None` if the layer
    /// is a leaf.
    fn expand<S: AdversarialState>(&self, state: &S, agent: usize, depth: u8) -> Option<Vec<S::Action>> {
        if state.is_terminal() || (agent == 0 && depth >= self.max_depth) {
            return None;
        }
        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            None
        } else {
            Some(actions)
        }
    }

    fn minimax<S>(&mut self, state: &S, agent: usize, depth: u8) -> f64
    where
        S: AdversarialState,
        E: Evaluator<S>,
    {
        let actions = match self.expand(state, agent, depth) {
            Some(actions) => actions,
            None => return self.evaluate(state),
        };
        let next = next_agent(agent, state.agent_count());

        if agent == 0 {
            let mut value = f64::NEG_INFINITY;
            for action in actions.iter() {
                let successor = state.successor(agent, action);
                value = value.max(self.minimax(&successor, next, depth + 1));
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for action in actions.iter() {
                let successor = state.successor(agent, action);
                value = value.min(self.minimax(&successor, next, depth));
            }
            value
        }
    }

    fn alpha_beta<S>(&mut self, state: &S, agent: usize, depth: u8, mut alpha: f64, mut beta: f64) -> f64
    where
        S: AdversarialState,
        E: Evaluator<S>,
    {
        let actions = match self.expand(state, agent, depth) {
            Some(actions) => actions,
            None => return self.evaluate(state),
        };
        let next = next_agent(agent, state.agent_count());

        if agent == 0 {
            let mut value = f64::NEG_INFINITY;
            for action in actions.iter() {
                let successor = state.successor(agent, action);
                value = value.max(self.alpha_beta(&successor, next, depth + 1, alpha, beta));

                if value > beta {
                    self.stats.pruned_count += 1;
                    return value;
                }
                alpha = alpha.max(value);
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for action in actions.iter() {
                let successor = state.successor(agent, action);
                value = value.min(self.alpha_beta(&successor, next, depth, alpha, beta));

                if value < alpha {
                    self.stats.pruned_count += 1;
                    return value;
                }
                beta = beta.min(value);
            }
            value
        }
    }

    fn expectimax<S>(&mut self, state: &S, agent: usize, depth: u8) -> f64
    where
        S: AdversarialState,
        E: Evaluator<S>,
    {
        let actions = match self.expand(state, agent, depth) {
            Some(actions) => actions,
            None => return self.evaluate(state),
        };
        let next = next_agent(agent, state.agent_count());

        if agent == 0 {
            let mut value = f64::NEG_INFINITY;
            for action in actions.iter() {
                let successor = state.successor(agent, action);
                value = value.max(self.expectimax(&successor, next, depth + 1));
            }
            value
        } else {
            let mut total = 0.0;
            for action in actions.iter() {
                let successor = state.successor(agent, action);
                total += self.expectimax(&successor, next, depth);
            }
            total / actions.len() as f64
        }
    }
}

/// Returns the minimax action for agent 0.
#[must_use = "search returns the best action found"]
pub fn minimax_search<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
) -> Result<S::Action, SearchError>
where
    S: AdversarialState,
    E: Evaluator<S>,
{
    search(Strategy::Minimax, context, state, evaluator)
}

/// Returns the minimax action for agent 0, found with alpha-beta pruning.
#[must_use = "search returns the best action found"]
pub fn alpha_beta_search<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
) -> Result<S::Action, SearchError>
where
    S: AdversarialState,
    E: Evaluator<S>,
{
    search(Strategy::AlphaBeta, context, state, evaluator)
}

/// Returns the expectimax action for agent 0.
#[must_use = "search returns the best action found"]
pub fn expectimax_search<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
) -> Result<S::Action, SearchError>
where
    S: AdversarialState,
    E: Evaluator<S>,
{
    search(Strategy::Expectimax, context, state, evaluator)
}

/// Searches the game tree below `state` with the given strategy and returns
/// the best action for agent 0.
///
/// # Returns
///
/// - `Ok(action)` - The first legal action with the greatest score
/// - `Err(SearchError::DepthTooLow)` - If the context depth is < 1
/// - `Err(SearchError::NoAvailableMoves)` - If agent 0 has no legal actions
#[must_use = "search returns the best action found"]
pub fn search<S, E>(
    strategy: Strategy,
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
) -> Result<S::Action, SearchError>
where
    S: AdversarialState,
    E: Evaluator<S>,
{
    let max_depth = context.search_depth();
    debug!("{} search depth: {}", strategy, max_depth);

    if max_depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    context.reset_stats();
    let start = Instant::now();
    let mut candidates = state.legal_actions(0);

    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let next = next_agent(0, state.agent_count());
    let mut walker = TreeWalker {
        max_depth,
        evaluator,
        stats: &mut context.stats,
    };

    let mut best_index = 0;
    let mut best_score = f64::NEG_INFINITY;
    let mut alpha = f64::NEG_INFINITY;

    for (index, action) in candidates.iter().enumerate() {
        let successor = state.successor(0, action);
        let score = match strategy {
            Strategy::Minimax => walker.minimax(&successor, next, 1),
            Strategy::AlphaBeta => {
                walker.alpha_beta(&successor, next, 1, alpha, f64::INFINITY)
            }
            Strategy::Expectimax => walker.expectimax(&successor, next, 1),
        };
        trace!("root action {:?} scored {}", action, score);

        if score > best_score {
            best_score = score;
            best_index = index;
        }
        alpha = alpha.max(score);
    }

    context.stats.record_result(best_score, start.elapsed());
    let best_action = candidates.swap_remove(best_index);
    debug!(
        "{} chose {:?} with score {} after evaluating {} positions",
        strategy,
        best_action,
        best_score,
        context.searched_position_count()
    );

    Ok(best_action)
}
