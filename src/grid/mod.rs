//! The grid world the engines are driven on: cells, layouts and path finding.

mod layout;
mod position;
mod problem;

pub use layout::{builtin, Layout, LayoutError};
pub use position::{euclidean_distance, manhattan_distance, Direction, Position, ALL_MOVES};
pub use problem::{CostFunction, GridHeuristic, ProblemParseError, PositionSearchProblem};
