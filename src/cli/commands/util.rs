//! Shared utilities for CLI commands.

use pursuit::evaluate::EvaluationFunction;
use pursuit::game::{AgentConfig, AgentKind};
use structopt::StructOpt;

/// Agent-0 options shared by `play` and `best-action`.
#[derive(StructOpt)]
pub struct AgentArgs {
    #[structopt(short, long, default_value = "alpha-beta")]
    pub agent: AgentKind,
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(short, long, default_value = "better")]
    pub evaluation: EvaluationFunction,
    #[structopt(long, default_value = "0")]
    pub seed: u64,
}

impl AgentArgs {
    pub(crate) fn config(&self) -> AgentConfig {
        AgentConfig {
            kind: self.agent,
            depth: self.depth,
            evaluation: self.evaluation,
        }
    }
}
