//! Graph search strategies.
//!
//! Every strategy follows the same skeleton: seed a frontier with the start
//! state and an empty plan, repeatedly remove one node, return its plan if it
//! is a goal, and otherwise push its unexplored successors. The strategies
//! differ in the order nodes leave the frontier and in when a state counts as
//! explored:
//!
//! | strategy            | frontier        | marked explored            |
//! |---------------------|-----------------|----------------------------|
//! | depth-first         | stack           | when popped                |
//! | breadth-first       | queue           | when pushed                |
//! | uniform-cost        | priority (g)    | when first popped          |
//! | A*                  | priority (g+h)  | when first popped          |
//! | iterative deepening | stack per bound | when pushed, reset per bound |
//!
//! An exhausted frontier is not an error: it is reported as `None`.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, trace};
use rustc_hash::FxHashSet;
use thiserror::Error;

use super::frontier::{Node, PriorityFrontier};
use super::{Heuristic, SearchProblem};

/// An ordered sequence of actions leading from the start state to a goal.
pub type Plan<A> = Vec<A>;

/// The largest cost bound iterative deepening will try before giving up.
pub const MAX_COST_BOUND: u32 = 100;

/// Statistics collected during the most recent search.
#[derive(Clone, Debug, Default)]
pub struct ExpansionStats {
    expanded: usize,
    max_frontier: usize,
    final_bound: Option<u32>,
    last_duration: Option<Duration>,
}

impl ExpansionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of states whose successors were generated.
    pub fn expanded_count(&self) -> usize {
        self.expanded
    }

    /// Largest number of nodes held by the frontier at once.
    pub fn max_frontier_size(&self) -> usize {
        self.max_frontier
    }

    /// The cost bound iterative deepening stopped at, if it ran.
    pub fn final_bound(&self) -> Option<u32> {
        self.final_bound
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_duration
    }

    fn record_expansion(&mut self) {
        self.expanded += 1;
    }

    fn record_frontier_size(&mut self, size: usize) {
        if size > self.max_frontier {
            self.max_frontier = size;
        }
    }

    fn finish<A>(&mut self, name: &str, start: Instant, plan: Option<Plan<A>>) -> Option<Plan<A>> {
        self.last_duration = Some(start.elapsed());
        match &plan {
            Some(actions) => debug!(
                "{}: found plan of {} actions after expanding {} states",
                name,
                actions.len(),
                self.expanded
            ),
            None => debug!(
                "{}: no plan found after expanding {} states",
                name, self.expanded
            ),
        }
        plan
    }
}

/// Searches the deepest nodes first.
///
/// A state may sit on the stack more than once, but it is expanded at most
/// once. The returned plan reaches a goal but is not necessarily short.
pub fn depth_first_search<P: SearchProblem>(
    stats: &mut ExpansionStats,
    problem: &P,
) -> Option<Plan<P::Action>> {
    stats.reset();
    let start = Instant::now();

    let mut fringe = vec![Node::root(problem.start_state())];
    let mut explored = FxHashSet::default();

    while let Some(node) = fringe.pop() {
        if !explored.insert(node.state.clone()) {
            continue;
        }

        if problem.is_goal(&node.state) {
            return stats.finish("depth-first", start, Some(node.actions));
        }

        stats.record_expansion();
        trace!("depth-first expanding {:?}", node.state);
        for successor in problem.successors(&node.state) {
            if !explored.contains(&successor.state) {
                fringe.push(node.child(successor));
            }
        }
        stats.record_frontier_size(fringe.len());
    }

    stats.finish("depth-first", start, None)
}

/// Searches the shallowest nodes first.
///
/// States are marked explored as they enter the queue, so no state is ever
/// queued twice. With uniform step costs the plan has the fewest actions.
pub fn breadth_first_search<P: SearchProblem>(
    stats: &mut ExpansionStats,
    problem: &P,
) -> Option<Plan<P::Action>> {
    stats.reset();
    let start = Instant::now();

    let start_state = problem.start_state();
    let mut explored = FxHashSet::default();
    explored.insert(start_state.clone());

    let mut fringe = VecDeque::new();
    fringe.push_back(Node::root(start_state));

    while let Some(node) = fringe.pop_front() {
        if problem.is_goal(&node.state) {
            return stats.finish("breadth-first", start, Some(node.actions));
        }

        stats.record_expansion();
        trace!("breadth-first expanding {:?}", node.state);
        for successor in problem.successors(&node.state) {
            if explored.insert(successor.state.clone()) {
                fringe.push_back(node.child(successor));
            }
        }
        stats.record_frontier_size(fringe.len());
    }

    stats.finish("breadth-first", start, None)
}

/// Searches the node of least accumulated cost first.
pub fn uniform_cost_search<P: SearchProblem>(
    stats: &mut ExpansionStats,
    problem: &P,
) -> Option<Plan<P::Action>> {
    best_first_search("uniform-cost", stats, problem, |_, cost| cost)
}

/// Searches the node with the lowest accumulated cost plus heuristic estimate
/// first. The estimate is taken at the successor being pushed. The plan has
/// minimum cost whenever the heuristic never overestimates.
pub fn a_star_search<P, H>(
    stats: &mut ExpansionStats,
    problem: &P,
    heuristic: &H,
) -> Option<Plan<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    best_first_search("a-star", stats, problem, |state, cost| {
        cost + heuristic.estimate(state, problem)
    })
}

fn best_first_search<P, F>(
    name: &str,
    stats: &mut ExpansionStats,
    problem: &P,
    priority: F,
) -> Option<Plan<P::Action>>
where
    P: SearchProblem,
    F: Fn(&P::State, f64) -> f64,
{
    stats.reset();
    let start = Instant::now();

    let mut fringe = PriorityFrontier::new();
    let mut explored = FxHashSet::default();
    fringe.push(Node::root(problem.start_state()), 0.0);

    while let Some(node) = fringe.pop() {
        if problem.is_goal(&node.state) {
            return stats.finish(name, start, Some(node.actions));
        }

        // Later copies of an already expanded state carry a cost at least as
        // high as the first one and are dropped.
        if !explored.insert(node.state.clone()) {
            continue;
        }

        stats.record_expansion();
        trace!("{} expanding {:?} at cost {}", name, node.state, node.cost);
        for successor in problem.successors(&node.state) {
            if !explored.contains(&successor.state) {
                let child = node.child(successor);
                let key = priority(&child.state, child.cost);
                fringe.push(child, key);
            }
        }
        stats.record_frontier_size(fringe.len());
    }

    stats.finish(name, start, None)
}

/// Runs depth-limited searches under an increasing cost bound.
///
/// Each attempt admits only successors whose accumulated cost stays within the
/// bound and which have not been pushed earlier in the same attempt. The bound
/// starts at 1 and grows by 1 up to [`MAX_COST_BOUND`]. The explored set is
/// rebuilt for every attempt, so a state reached along a cheaper branch in a
/// later attempt is not blocked by an earlier one.
pub fn iterative_deepening_search<P: SearchProblem>(
    stats: &mut ExpansionStats,
    problem: &P,
) -> Option<Plan<P::Action>> {
    stats.reset();
    let start = Instant::now();

    for bound in 1..=MAX_COST_BOUND {
        let limit = f64::from(bound);
        stats.final_bound = Some(bound);

        let start_state = problem.start_state();
        let mut explored = FxHashSet::default();
        explored.insert(start_state.clone());
        let mut fringe = vec![Node::root(start_state)];

        while let Some(node) = fringe.pop() {
            if problem.is_goal(&node.state) {
                debug!("iterative-deepening: goal found within bound {}", bound);
                return stats.finish("iterative-deepening", start, Some(node.actions));
            }

            stats.record_expansion();
            for successor in problem.successors(&node.state) {
                if node.cost + successor.cost <= limit
                    && explored.insert(successor.state.clone())
                {
                    fringe.push(node.child(successor));
                }
            }
            stats.record_frontier_size(fringe.len());
        }

        trace!("iterative-deepening: bound {} exhausted", bound);
    }

    stats.finish("iterative-deepening", start, None)
}

#[derive(Error, Debug, PartialEq)]
pub enum StrategyParseError {
    #[error("Unknown search strategy: {name:?} (expected dfs, bfs, ucs, astar or ids)")]
    UnknownStrategy { name: String },
}

/// Selects one of the graph search strategies by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
    IterativeDeepening,
}

impl Strategy {
    /// Runs this strategy. The heuristic is only consulted by A*.
    pub fn search<P, H>(
        self,
        stats: &mut ExpansionStats,
        problem: &P,
        heuristic: &H,
    ) -> Option<Plan<P::Action>>
    where
        P: SearchProblem,
        H: Heuristic<P>,
    {
        match self {
            Strategy::DepthFirst => depth_first_search(stats, problem),
            Strategy::BreadthFirst => breadth_first_search(stats, problem),
            Strategy::UniformCost => uniform_cost_search(stats, problem),
            Strategy::AStar => a_star_search(stats, problem, heuristic),
            Strategy::IterativeDeepening => iterative_deepening_search(stats, problem),
        }
    }
}

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "ucs" | "uniform-cost" => Ok(Strategy::UniformCost),
            "astar" | "a-star" => Ok(Strategy::AStar),
            "ids" | "iterative-deepening" => Ok(Strategy::IterativeDeepening),
            _ => Err(StrategyParseError::UnknownStrategy {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::UniformCost => "ucs",
            Strategy::AStar => "astar",
            Strategy::IterativeDeepening => "ids",
        };
        write!(f, "{}", name)
    }
}
