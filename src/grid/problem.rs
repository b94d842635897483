//! Path finding on a layout, as a [`SearchProblem`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{euclidean_distance, manhattan_distance, Direction, Layout, Position, ALL_MOVES};
use crate::graph_search::{Heuristic, SearchProblem, Successor};

/// Prices the step into a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostFunction {
    /// Every step costs 1.
    Uniform,
    /// Steps get cheaper towards the east: `0.5^x`.
    StayEast,
    /// Steps get cheaper towards the west: `2^x`.
    StayWest,
}

impl CostFunction {
    #[inline(always)]
    pub fn step_cost(self, position: Position) -> f64 {
        match self {
            CostFunction::Uniform => 1.0,
            CostFunction::StayEast => 0.5f64.powi(position.x),
            CostFunction::StayWest => 2f64.powi(position.x),
        }
    }
}

impl FromStr for CostFunction {
    type Err = ProblemParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "uniform" => Ok(CostFunction::Uniform),
            "stay-east" => Ok(CostFunction::StayEast),
            "stay-west" => Ok(CostFunction::StayWest),
            _ => Err(ProblemParseError::UnknownCostFunction {
                name: name.to_string(),
            }),
        }
    }
}

/// Finds a path for the agent from its start cell to a single goal cell.
///
/// The goal is the layout's only food if it has exactly one, and `(1, 1)`
/// otherwise. Successors are generated North, South, East, West.
#[derive(Clone, Debug)]
pub struct PositionSearchProblem {
    layout: Layout,
    start: Position,
    goal: Position,
    cost_function: CostFunction,
}

impl PositionSearchProblem {
    pub fn new(layout: Layout) -> Self {
        let goal = match layout.food() {
            [only] => *only,
            _ => Position::new(1, 1),
        };
        Self {
            start: layout.agent_start(),
            layout,
            goal,
            cost_function: CostFunction::Uniform,
        }
    }

    pub fn with_goal(mut self, goal: Position) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_cost_function(mut self, cost_function: CostFunction) -> Self {
        self.cost_function = cost_function;
        self
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

impl SearchProblem for PositionSearchProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        ALL_MOVES
            .iter()
            .map(|&direction| (direction, state.step(direction)))
            .filter(|(_, next)| !self.layout.is_wall(*next))
            .map(|(direction, next)| Successor {
                state: next,
                action: direction,
                cost: self.cost_function.step_cost(next),
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Option<f64> {
        let mut position = self.start;
        let mut total = 0.0;
        for &direction in actions {
            position = position.step(direction);
            if self.layout.is_wall(position) {
                return None;
            }
            total += self.cost_function.step_cost(position);
        }
        Some(total)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ProblemParseError {
    #[error("Unknown heuristic: {name:?} (expected null, manhattan or euclidean)")]
    UnknownHeuristic { name: String },
    #[error("Unknown cost function: {name:?} (expected uniform, stay-east or stay-west)")]
    UnknownCostFunction { name: String },
}

/// Distance estimates from a cell to the goal cell. All three are admissible
/// under uniform step costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridHeuristic {
    Null,
    Manhattan,
    Euclidean,
}

impl Heuristic<PositionSearchProblem> for GridHeuristic {
    fn estimate(&self, state: &Position, problem: &PositionSearchProblem) -> f64 {
        match self {
            GridHeuristic::Null => 0.0,
            GridHeuristic::Manhattan => f64::from(manhattan_distance(*state, problem.goal())),
            GridHeuristic::Euclidean => euclidean_distance(*state, problem.goal()),
        }
    }
}

impl FromStr for GridHeuristic {
    type Err = ProblemParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "null" => Ok(GridHeuristic::Null),
            "manhattan" => Ok(GridHeuristic::Manhattan),
            "euclidean" => Ok(GridHeuristic::Euclidean),
            _ => Err(ProblemParseError::UnknownHeuristic {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for GridHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            GridHeuristic::Null => "null",
            GridHeuristic::Manhattan => "manhattan",
            GridHeuristic::Euclidean => "euclidean",
        };
        write!(f, "{}", name)
    }
}
