pub mod adversarial_searcher;
pub mod evaluate;
pub mod game;
pub mod graph_search;
pub mod grid;
pub mod prelude;
