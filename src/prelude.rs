//! Common types re-exported for convenience.

pub use crate::adversarial_searcher::{AdversarialState, Evaluator, SearchContext, SearchError};
pub use crate::evaluate::{EvaluationFunction, PursuitView};
pub use crate::game::{AgentConfig, AgentKind, GameLoop, GameOutcome, PursuitState};
pub use crate::graph_search::{ExpansionStats, Heuristic, SearchProblem};
pub use crate::grid::{Direction, Layout, Position, PositionSearchProblem};
