//! Play command - play one game against random ghosts.

use pursuit::game::{build_agent, GameLoop, PursuitState};
use structopt::StructOpt;

use super::util::AgentArgs;
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "smallPursuit")]
    pub layout: String,
    #[structopt(flatten)]
    pub agent: AgentArgs,
    #[structopt(long, default_value = "500")]
    pub max_turns: usize,
    /// Only print the result.
    #[structopt(short, long)]
    pub quiet: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let state = match PursuitState::load(&self.layout) {
            Ok(state) => state,
            Err(error) => {
                eprintln!("{}", error);
                return;
            }
        };

        println!("{}\n", state);
        let agent = build_agent(&self.agent.config(), self.agent.seed);
        let mut game = GameLoop::new(state, agent, self.agent.seed, self.max_turns);
        let quiet = self.quiet;

        let result = game.run(|turn, state| {
            if !quiet {
                println!("turn {}\n{}\n", turn, state);
            }
        });

        match result {
            Ok(outcome) => println!(
                "{} after {} turns with score {}",
                if outcome.won { "won" } else { "lost" },
                outcome.turns,
                outcome.score
            ),
            Err(error) => eprintln!("error: {}", error),
        }
    }
}
