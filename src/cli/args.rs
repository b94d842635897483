//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_action::BestActionArgs, plan::PlanArgs, play::PlayArgs};

#[derive(StructOpt)]
#[structopt(
    name = "pursuit",
    about = "Graph search and adversarial search on a grid-world pursuit game"
)]
pub enum Pursuit {
    #[structopt(
        name = "plan",
        about = "Find a path from the agent to the goal cell of a `--layout` (built-in name or file) with the given `--strategy` (default: bfs). A* uses the `--heuristic` (default: manhattan). Prints the plan, its cost and the number of expanded nodes."
    )]
    Plan(PlanArgs),
    #[structopt(
        name = "play",
        about = "Play one game on a `--layout` against random ghosts. Agent 0 is chosen with `--agent` (default: alpha-beta) and searches `--depth` rounds (default: 2) using the `--evaluation` function (default: better)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "best-action",
        about = "Print the action agent 0 would take from the starting state of a `--layout`, with the same agent options as `play`."
    )]
    BestAction(BestActionArgs),
}

impl crate::cli::commands::Command for Pursuit {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Plan(cmd),
            Play(cmd),
            BestAction(cmd),
        }
    }
}
