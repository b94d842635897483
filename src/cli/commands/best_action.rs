//! Best action command - the move agent 0 makes from a starting layout.

use pursuit::game::{build_agent, Agent, PursuitState};
use structopt::StructOpt;

use super::util::AgentArgs;
use super::Command;

#[derive(StructOpt)]
pub struct BestActionArgs {
    #[structopt(short, long, default_value = "smallPursuit")]
    pub layout: String,
    #[structopt(flatten)]
    pub agent: AgentArgs,
}

impl Command for BestActionArgs {
    fn execute(self) {
        let state = match PursuitState::load(&self.layout) {
            Ok(state) => state,
            Err(error) => {
                eprintln!("{}", error);
                return;
            }
        };

        let mut agent = build_agent(&self.agent.config(), self.agent.seed);
        match agent.choose_action(&state) {
            Ok(action) => println!("{}", action),
            Err(error) => eprintln!("Failed to choose an action: {}", error),
        }
    }
}
