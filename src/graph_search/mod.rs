mod frontier;
mod search;
mod traits;

pub use search::{
    a_star_search, breadth_first_search, depth_first_search, iterative_deepening_search,
    uniform_cost_search, ExpansionStats, Plan, Strategy, StrategyParseError, MAX_COST_BOUND,
};
pub use traits::{Heuristic, NullHeuristic, SearchProblem, Successor};
