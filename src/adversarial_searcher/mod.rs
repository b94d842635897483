mod search;
mod traits;

pub use search::{
    alpha_beta_search, expectimax_search, minimax_search, search, SearchContext, SearchError,
    Strategy, StrategyParseError,
};
pub use traits::{AdversarialState, Evaluator};
