use std::fmt;
use std::rc::Rc;

use super::GameError;
use crate::adversarial_searcher::AdversarialState;
use crate::evaluate::PursuitView;
use crate::grid::{Direction, Layout, Position, ALL_MOVES};

/// Points lost each time agent 0 moves.
pub const TIME_PENALTY: i32 = 1;
pub const FOOD_POINTS: i32 = 10;
/// Bonus for clearing the last food.
pub const WIN_POINTS: i32 = 500;
pub const GHOST_POINTS: i32 = 200;
/// Penalty for being caught by a ghost that is not scared.
pub const LOSE_POINTS: i32 = 500;
/// Number of its own moves a ghost stays scared after a capsule is eaten.
pub const SCARED_TIME: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Ghost {
    start: Position,
    position: Position,
    direction: Direction,
    scared_timer: u32,
}

impl Ghost {
    fn new(start: Position) -> Self {
        Self {
            start,
            position: start,
            direction: Direction::Stop,
            scared_timer: 0,
        }
    }

    fn send_home(&mut self) {
        *self = Self::new(self.start);
    }
}

/// A snapshot of a pursuit game: agent 0 collects food while the ghosts,
/// agents `1..=ghosts`, chase it.
///
/// States are immutable from the outside; `successor` returns a new state.
#[derive(Clone, Debug)]
pub struct PursuitState {
    layout: Rc<Layout>,
    agent: Position,
    food: Vec<Position>,
    capsules: Vec<Position>,
    ghosts: Vec<Ghost>,
    score: i32,
    won: bool,
    lost: bool,
}

impl PursuitState {
    /// Returns the starting state of a game on `layout`.
    pub fn new(layout: &Layout) -> Self {
        Self {
            agent: layout.agent_start(),
            food: layout.food().to_vec(),
            capsules: layout.capsules().to_vec(),
            ghosts: layout.ghost_starts().iter().copied().map(Ghost::new).collect(),
            score: 0,
            won: false,
            lost: false,
            layout: Rc::new(layout.clone()),
        }
    }

    /// Loads a built-in layout or layout file and returns its starting state.
    pub fn load(name_or_path: &str) -> Result<Self, GameError> {
        Ok(Self::new(&Layout::load(name_or_path)?))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn points(&self) -> i32 {
        self.score
    }

    pub fn ghost_count(&self) -> usize {
        self.ghosts.len()
    }

    fn open_moves(&self, from: Position) -> impl Iterator<Item = Direction> + '_ {
        ALL_MOVES
            .iter()
            .copied()
            .filter(move |&direction| !self.layout.is_wall(from.step(direction)))
    }

    /// Ghosts keep moving: they never stop while a move is open, and only turn
    /// back when it is their only way out.
    fn ghost_actions(&self, ghost: &Ghost) -> Vec<Direction> {
        let mut actions: Vec<Direction> = self.open_moves(ghost.position).collect();
        if actions.len() > 1 {
            let reverse = ghost.direction.reverse();
            actions.retain(|&direction| direction != reverse);
        }
        if actions.is_empty() {
            actions.push(Direction::Stop);
        }
        actions
    }

    fn move_agent(&mut self, direction: Direction) {
        let next = self.agent.step(direction);
        if !self.layout.is_wall(next) {
            self.agent = next;
        }
        self.score -= TIME_PENALTY;

        if let Ok(index) = self.food.binary_search(&self.agent) {
            self.food.remove(index);
            self.score += FOOD_POINTS;
            if self.food.is_empty() && !self.lost {
                self.score += WIN_POINTS;
                self.won = true;
            }
        }

        if let Ok(index) = self.capsules.binary_search(&self.agent) {
            self.capsules.remove(index);
            for ghost in self.ghosts.iter_mut() {
                ghost.scared_timer = SCARED_TIME;
            }
        }

        for index in 0..self.ghosts.len() {
            self.resolve_collision(index);
        }
    }

    fn move_ghost(&mut self, index: usize, direction: Direction) {
        let ghost = &mut self.ghosts[index];
        let next = ghost.position.step(direction);
        if !self.layout.is_wall(next) {
            ghost.position = next;
        }
        ghost.direction = direction;
        ghost.scared_timer = ghost.scared_timer.saturating_sub(1);

        self.resolve_collision(index);
    }

    fn resolve_collision(&mut self, index: usize) {
        let ghost = &mut self.ghosts[index];
        if ghost.position != self.agent {
            return;
        }
        if ghost.scared_timer > 0 {
            self.score += GHOST_POINTS;
            ghost.send_home();
        } else if !self.won {
            self.score -= LOSE_POINTS;
            self.lost = true;
        }
    }
}

impl AdversarialState for PursuitState {
    type Action = Direction;

    /// Agent 0 may move to any open neighbour or stop. Terminal states have no
    /// legal actions.
    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        if self.is_terminal() {
            return vec![];
        }
        if agent == 0 {
            let mut actions: Vec<Direction> = self.open_moves(self.agent).collect();
            actions.push(Direction::Stop);
            actions
        } else {
            match self.ghosts.get(agent - 1) {
                Some(ghost) => self.ghost_actions(ghost),
                None => vec![],
            }
        }
    }

    fn successor(&self, agent: usize, action: &Direction) -> Self {
        let mut next = self.clone();
        if agent == 0 {
            next.move_agent(*action);
        } else {
            next.move_ghost(agent - 1, *action);
        }
        next
    }

    fn agent_count(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn is_win(&self) -> bool {
        self.won
    }

    fn is_lose(&self) -> bool {
        self.lost
    }
}

impl PursuitView for PursuitState {
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
        self.ghosts.iter().map(|ghost| ghost.position).collect()
    }

    fn scared_timers(&self) -> Vec<u32> {
        self.ghosts.iter().map(|ghost| ghost.scared_timer).collect()
    }

    fn score(&self) -> f64 {
        f64::from(self.score)
    }
}

impl fmt::Display for PursuitState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.layout.height()).rev() {
            for x in 0..self.layout.width() {
                let position = Position::new(x, y);
                let cell = if self.layout.is_wall(position) {
                    '%'
                } else if let Some(ghost) = self.ghosts.iter().find(|g| g.position == position) {
                    if ghost.scared_timer > 0 {
                        'S'
                    } else {
                        'G'
                    }
                } else if position == self.agent {
                    'P'
                } else if self.food.binary_search(&position).is_ok() {
                    '.'
                } else if self.capsules.binary_search(&position).is_ok() {
                    'o'
                } else {
                    ' '
                };
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        write!(f, "score: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction::*;

    fn state(text: &str) -> PursuitState {
        PursuitState::new(&text.parse().unwrap())
    }

    #[test]
    fn test_initial_state_mirrors_layout() {
        let state = PursuitState::new(&Layout::load("smallPursuit").unwrap());

        assert_eq!(3, state.agent_count());
        assert_eq!(2, state.ghost_count());
        assert_eq!(Position::new(5, 3), state.agent_position());
        assert_eq!(20, state.food_positions().len());
        assert_eq!(vec![0, 0], state.scared_timers());
        assert_eq!(0.0, PursuitView::score(&state));
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_load_reports_layout_errors() {
        assert!(PursuitState::load("trappedPursuit").is_ok());
        assert!(matches!(
            PursuitState::load("/nonexistent/pursuit.lay"),
            Err(GameError::Layout(_))
        ));
    }

    #[test]
    fn test_agent_actions_include_stop() {
        let state = state("%%%%%\n%P .%\n%%%%%");
        assert_eq!(vec![East, Stop], state.legal_actions(0));
    }

    #[test]
    fn test_eating_food_and_winning() {
        let state = state("%%%%%\n%P..%\n%%%%%");

        let state = state.successor(0, &East);
        assert_eq!(9, state.points());
        assert!(!state.is_terminal());

        let state = state.successor(0, &East);
        assert_eq!(9 + 9 + WIN_POINTS, state.points());
        assert!(state.is_win());
        assert!(state.legal_actions(0).is_empty());
    }

    #[test]
    fn test_stopping_costs_a_point() {
        let state = state("%%%%%\n%P .%\n%%%%%").successor(0, &Stop);
        assert_eq!(-1, state.points());
        assert_eq!(Position::new(1, 1), state.agent_position());
    }

    #[test]
    fn test_ghost_catches_agent() {
        let state = state("%%%%%%\n%P G.%\n%%%%%%");

        let state = state.successor(0, &East).successor(1, &West);
        assert!(state.is_lose());
        assert_eq!(-1 - LOSE_POINTS, state.points());
        assert!(state.legal_actions(0).is_empty());
        assert!(state.legal_actions(1).is_empty());
    }

    #[test]
    fn test_capsule_scares_ghosts_and_eaten_ghost_goes_home() {
        let state = state("%%%%%%%\n%Po G.%\n%%%%%%%");

        let state = state.successor(0, &East);
        assert_eq!(vec![SCARED_TIME], state.scared_timers());
        assert!(state.capsule_positions().is_empty());

        let state = state.successor(1, &West);
        assert_eq!(vec![SCARED_TIME - 1], state.scared_timers());
        assert_eq!(vec![Position::new(3, 1)], state.ghost_positions());

        let state = state.successor(0, &East);
        assert_eq!(-2 + GHOST_POINTS, state.points());
        assert_eq!(vec![Position::new(4, 1)], state.ghost_positions());
        assert_eq!(vec![0], state.scared_timers());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_ghosts_do_not_reverse_unless_forced() {
        let state = state("%%%%%%%\n%P   G%\n%%% %%%\n%%%%%%%");

        // The ghost starts with no heading, so every open move is allowed.
        assert_eq!(vec![West], state.legal_actions(1));

        let state = state.successor(1, &West).successor(1, &West);
        assert_eq!(vec![Position::new(3, 2)], state.ghost_positions());
        assert_eq!(vec![South, West], state.legal_actions(1));

        // A dead end forces the ghost to turn back.
        let state = state.successor(1, &South);
        assert_eq!(vec![North], state.legal_actions(1));
    }

    #[test]
    fn test_boxed_in_ghost_may_only_stop() {
        let state = state("%%%%%%\n%P.%G%\n%%%%%%");
        assert_eq!(vec![Stop], state.legal_actions(1));
    }

    #[test]
    fn test_successor_leaves_state_untouched() {
        let before = state("%%%%%\n%P..%\n%%%%%");
        let _ = before.successor(0, &East);
        assert_eq!(Position::new(1, 1), before.agent_position());
        assert_eq!(2, before.food_positions().len());
    }

    #[test]
    fn test_display() {
        let state = state("%%%%%%%\n%Po G.%\n%%%%%%%");
        assert_eq!("%%%%%%%\n%Po G.%\n%%%%%%%\nscore: 0", state.to_string());

        let state = state.successor(0, &East);
        assert_eq!("%%%%%%%\n% P S.%\n%%%%%%%\nscore: -1", state.to_string());
    }
}
