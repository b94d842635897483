//! Core traits for generic graph search.

use std::fmt::Debug;
use std::hash::Hash;

/// One edge out of a search state: the state it leads to, the action that
/// gets there, and the non-negative cost of taking it.
#[derive(Clone, Debug, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: f64,
}

/// Describes a state space to be searched for a goal.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// Returns the state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Returns true if and only if `state` is a goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Returns the successors of `state`. The order of the returned edges
    /// determines the order in which strategies consider them.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Returns the total cost of a sequence of actions taken from the start
    /// state, or `None` if the sequence contains an illegal move.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<f64>;
}

/// Estimates the remaining cost from a state to the nearest goal.
pub trait Heuristic<P: SearchProblem> {
    fn estimate(&self, state: &P::State, problem: &P) -> f64;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: Fn(&P::State, &P) -> f64,
{
    #[inline(always)]
    fn estimate(&self, state: &P::State, problem: &P) -> f64 {
        self(state, problem)
    }
}

/// The trivial heuristic. Estimates zero for every state, which turns
/// A* into uniform-cost search.
#[derive(Clone, Copy, Default, Debug)]
pub struct NullHeuristic;

impl<P: SearchProblem> Heuristic<P> for NullHeuristic {
    #[inline(always)]
    fn estimate(&self, _state: &P::State, _problem: &P) -> f64 {
        0.0
    }
}
