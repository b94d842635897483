use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::adversarial_searcher::AdversarialState;
use crate::grid::{manhattan_distance, Direction, Position};

use self::weights::*;

mod weights;

pub use weights::DANGER_PENALTY;

/// The parts of a pursuit game state the evaluation functions look at.
pub trait PursuitView {
    fn agent_position(&self) -> Position;

    fn food_positions(&self) -> &[Position];

    fn capsule_positions(&self) -> &[Position];

    fn ghost_positions(&self) -> Vec<Position>;

    /// Remaining scared moves of each ghost, in the same order as
    /// `ghost_positions`. Zero means the ghost is dangerous.
    fn scared_timers(&self) -> Vec<u32>;

    fn score(&self) -> f64;
}

#[inline(always)]
fn nearest_distance<I>(from: Position, targets: I) -> Option<u32>
where
    I: IntoIterator<Item = Position>,
{
    targets
        .into_iter()
        .map(|target| manhattan_distance(from, target))
        .min()
}

/// Distance to the closest ghost that is not scared, if there is one.
fn nearest_dangerous_ghost<S: PursuitView>(state: &S, from: Position) -> Option<u32> {
    let dangerous = state
        .ghost_positions()
        .into_iter()
        .zip(state.scared_timers())
        .filter(|(_, timer)| *timer == 0)
        .map(|(position, _)| position);
    nearest_distance(from, dangerous)
}

/// The ghost-distance feature. Suppressed to zero while any ghost is scared,
/// and zero when there are no ghosts.
fn ghost_distance<S: PursuitView>(state: &S, from: Position, scared_time: u32) -> f64 {
    if scared_time > 0 {
        return 0.0;
    }
    f64::from(nearest_distance(from, state.ghost_positions()).unwrap_or(0))
}

fn food_term<S: PursuitView>(state: &S, from: Position) -> f64 {
    let nearest_food = nearest_distance(from, state.food_positions().iter().copied()).unwrap_or(0);
    FOOD_WEIGHT / f64::from(nearest_food + 1)
}

/// The closest capsule dominates; a capsule under the agent counts as one
/// step away.
fn capsule_term<S: PursuitView>(state: &S, from: Position) -> f64 {
    state
        .capsule_positions()
        .iter()
        .map(|&capsule| CAPSULE_WEIGHT / f64::from(manhattan_distance(from, capsule).max(1)))
        .fold(0.0, f64::max)
}

/// The default evaluation for adversarial agents: the game score.
pub fn score_evaluation<S: PursuitView>(state: &S) -> f64 {
    state.score()
}

/// Evaluates a state by combining food proximity, ghost distance, scared time,
/// capsule proximity and score.
pub fn better_evaluation<S: PursuitView>(state: &S) -> f64 {
    let position = state.agent_position();
    let scared_time: u32 = state.scared_timers().iter().sum();

    capsule_term(state, position)
        + SCARED_TIME_WEIGHT * f64::from(scared_time)
        + food_term(state, position)
        + GHOST_DISTANCE_WEIGHT * ghost_distance(state, position, scared_time)
        + SCORE_WEIGHT * state.score()
}

/// Evaluates taking `action` as agent 0 from `state`, by looking at the
/// successor. Standing still, or ending up within one step of a ghost that is
/// not scared, scores `DANGER_PENALTY`.
pub fn reflex_evaluation<S>(state: &S, action: Direction) -> f64
where
    S: PursuitView + AdversarialState<Action = Direction>,
{
    let successor = state.successor(0, &action);
    let position = successor.agent_position();

    let in_danger = nearest_dangerous_ghost(&successor, position).map_or(false, |distance| distance <= 1);
    if action == Direction::Stop || in_danger {
        return DANGER_PENALTY;
    }

    let scared_time: u32 = successor.scared_timers().iter().sum();

    REFLEX_SCARED_TIME_WEIGHT * f64::from(scared_time)
        + food_term(&successor, position)
        + GHOST_DISTANCE_WEIGHT * ghost_distance(&successor, position, scared_time)
        + SCORE_WEIGHT * successor.score()
}

#[derive(Error, Debug, PartialEq)]
pub enum EvaluationParseError {
    #[error("Unknown evaluation function: {name:?} (expected score or better)")]
    UnknownEvaluation { name: String },
}

/// Names a state evaluation function, so drivers can pick one from
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvaluationFunction {
    Score,
    Better,
}

impl EvaluationFunction {
    /// Returns the function this name stands for.
    pub fn resolve<S: PursuitView>(self) -> fn(&S) -> f64 {
        match self {
            EvaluationFunction::Score => score_evaluation::<S>,
            EvaluationFunction::Better => better_evaluation::<S>,
        }
    }
}

impl Default for EvaluationFunction {
    fn default() -> Self {
        EvaluationFunction::Better
    }
}

impl FromStr for EvaluationFunction {
    type Err = EvaluationParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "score" => Ok(EvaluationFunction::Score),
            "better" => Ok(EvaluationFunction::Better),
            _ => Err(EvaluationParseError::UnknownEvaluation {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for EvaluationFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EvaluationFunction::Score => "score",
            EvaluationFunction::Better => "better",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PursuitState;
    use crate::grid::Layout;

    /// A fixed snapshot of the accessor surface.
    struct Snapshot {
        agent: Position,
        food: Vec<Position>,
        capsules: Vec<Position>,
        ghosts: Vec<(Position, u32)>,
        score: f64,
    }

    impl Snapshot {
        fn at(x: i32, y: i32) -> Self {
            Self {
                agent: Position::new(x, y),
                food: vec![],
                capsules: vec![],
                ghosts: vec![],
                score: 0.0,
            }
        }
    }

    impl PursuitView for Snapshot {
        fn agent_position(&self) -> Position {
            self.agent
        }

        fn food_positions(&self) -> &[Position] {
            &self.food
        }

        fn capsule_positions(&self) -> &[Position] {
            &self.capsules
        }

        fn ghost_positions(&self) -> Vec<Position> {
            self.ghosts.iter().map(|(position, _)| *position).collect()
        }

        fn scared_timers(&self) -> Vec<u32> {
            self.ghosts.iter().map(|(_, timer)| *timer).collect()
        }

        fn score(&self) -> f64 {
            self.score
        }
    }

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_score_evaluation_passes_score_through() {
        let mut state = Snapshot::at(1, 1);
        state.score = 42.0;
        assert_eq!(42.0, score_evaluation(&state));
    }

    #[test]
    fn test_better_evaluation_combines_terms() {
        let mut state = Snapshot::at(1, 1);
        state.food = vec![Position::new(4, 1), Position::new(1, 3)];
        state.capsules = vec![Position::new(1, 6), Position::new(3, 1)];
        state.ghosts = vec![(Position::new(5, 5), 0), (Position::new(1, 4), 0)];
        state.score = 100.0;

        // capsule 10/2 + food 10/3 + ghost 0.3*3 + score 0.4*100
        assert_close(5.0 + 10.0 / 3.0 + 0.9 + 40.0, better_evaluation(&state));
    }

    #[test]
    fn test_scared_ghosts_suppress_ghost_distance() {
        let mut state = Snapshot::at(1, 1);
        state.ghosts = vec![(Position::new(5, 5), 3), (Position::new(9, 9), 2)];

        // scared time 5 + food term with no food 10/1
        assert_close(5.0 + 10.0, better_evaluation(&state));
    }

    #[test]
    fn test_closer_food_scores_higher() {
        let mut near = Snapshot::at(1, 1);
        near.food = vec![Position::new(2, 1)];
        let mut far = Snapshot::at(1, 1);
        far.food = vec![Position::new(6, 1)];

        assert!(better_evaluation(&near) > better_evaluation(&far));
    }

    #[test]
    fn test_no_ghosts_and_no_food() {
        let state = Snapshot::at(2, 2);
        assert_close(10.0, better_evaluation(&state));
    }

    const CORRIDOR: &str = "\
%%%%%%%%%
%P .  G.%
%%%%%%%%%";

    #[test]
    fn test_reflex_penalizes_stop() {
        let state = PursuitState::new(&CORRIDOR.parse::<Layout>().unwrap());
        assert_eq!(DANGER_PENALTY, reflex_evaluation(&state, Direction::Stop));
        assert!(reflex_evaluation(&state, Direction::East) > DANGER_PENALTY);
    }

    #[test]
    fn test_reflex_penalizes_stepping_next_to_a_ghost() {
        let layout: Layout = "\
%%%%%%
%P G.%
%%%%%%"
            .parse()
            .unwrap();
        let state = PursuitState::new(&layout);

        assert_eq!(DANGER_PENALTY, reflex_evaluation(&state, Direction::East));
    }

    #[test]
    fn test_reflex_ignores_scared_neighbours() {
        let layout: Layout = "\
%%%%%%
%PoG.%
%%%%%%"
            .parse()
            .unwrap();
        let state = PursuitState::new(&layout);

        // Eating the capsule scares the ghost that is now one step away.
        let value = reflex_evaluation(&state, Direction::East);
        assert!(value > DANGER_PENALTY);
    }

    #[test]
    fn test_resolve_by_name() {
        let mut state = Snapshot::at(1, 1);
        state.score = 7.0;

        let score: fn(&Snapshot) -> f64 = "score".parse::<EvaluationFunction>().unwrap().resolve();
        let better: fn(&Snapshot) -> f64 = EvaluationFunction::Better.resolve();

        assert_eq!(7.0, score(&state));
        assert_close(better_evaluation(&state), better(&state));
        assert_eq!(EvaluationFunction::Better, EvaluationFunction::default());
        assert!("worse".parse::<EvaluationFunction>().is_err());
    }
}
