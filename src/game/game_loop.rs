use log::{debug, info};

use super::agents::{Agent, RandomGhost};
use super::{GameError, PursuitState};
use crate::adversarial_searcher::AdversarialState;
use crate::evaluate::PursuitView;

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameOutcome {
    pub score: i32,
    pub won: bool,
    /// Number of rounds played, counting agent 0's moves.
    pub turns: usize,
}

/// Runs one game: agent 0, then every ghost in index order, until the game is
/// won, lost or the turn limit is reached.
pub struct GameLoop {
    state: PursuitState,
    agent: Box<dyn Agent>,
    ghosts: Vec<RandomGhost>,
    max_turns: usize,
}

impl GameLoop {
    /// Sets up a game with one random ghost per ghost start. Ghost `i` is
    /// seeded with `seed + i`.
    pub fn new(state: PursuitState, agent: Box<dyn Agent>, seed: u64, max_turns: usize) -> Self {
        let ghosts = (1..state.agent_count())
            .map(|index| RandomGhost::new(index, seed.wrapping_add(index as u64)))
            .collect();
        Self {
            state,
            agent,
            ghosts,
            max_turns,
        }
    }

    pub fn state(&self) -> &PursuitState {
        &self.state
    }

    /// Plays to the end, calling `on_turn` after each round.
    pub fn run<F>(&mut self, mut on_turn: F) -> Result<GameOutcome, GameError>
    where
        F: FnMut(usize, &PursuitState),
    {
        let mut turns = 0;

        while !self.state.is_terminal() && turns < self.max_turns {
            let action = self.agent.choose_action(&self.state)?;
            if !self.state.legal_actions(0).contains(&action) {
                return Err(GameError::InvalidAction { action, agent: 0 });
            }
            self.state = self.state.successor(0, &action);
            turns += 1;
            debug!("turn {}: agent moved {} (score {})", turns, action, self.state.points());

            for ghost in self.ghosts.iter_mut() {
                if self.state.is_terminal() {
                    break;
                }
                let action = ghost.choose_action(&self.state)?;
                self.state = self.state.successor(ghost.index(), &action);
            }

            on_turn(turns, &self.state);
        }

        let outcome = GameOutcome {
            score: self.state.points(),
            won: self.state.is_win(),
            turns,
        };
        info!(
            "game over after {} turns: {} with score {}",
            outcome.turns,
            if outcome.won { "won" } else { "not won" },
            PursuitView::score(&self.state)
        );
        Ok(outcome)
    }
}
