//! Core traits for generic multi-agent game-tree search.

use std::fmt::Debug;

/// Represents the state of a game between agent 0 and one or more adversaries.
///
/// Agents move in a fixed round-robin order: 0, 1, ..., `agent_count() - 1`,
/// then 0 again. Agent 0 is the one searched for.
pub trait AdversarialState: Sized {
    type Action: Clone + Debug;

    /// Returns the legal actions of `agent` in enumeration order. A state in
    /// which the agent has no actions is terminal.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// Returns the state after `agent` takes `action`. `self` is left untouched.
    fn successor(&self, agent: usize, action: &Self::Action) -> Self;

    /// Returns the number of agents, including agent 0.
    fn agent_count(&self) -> usize;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// Evaluates a game state. Higher scores favor agent 0.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> f64,
{
    #[inline(always)]
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}
