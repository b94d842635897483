//! Plan command - find a path through a layout with a graph search strategy.

use pursuit::graph_search::{ExpansionStats, SearchProblem, Strategy};
use pursuit::grid::{CostFunction, GridHeuristic, Layout, PositionSearchProblem};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct PlanArgs {
    #[structopt(short, long, default_value = "tinyMaze", parse(try_from_str = Layout::load))]
    pub layout: Layout,
    #[structopt(short, long, default_value = "bfs")]
    pub strategy: Strategy,
    #[structopt(long, default_value = "manhattan")]
    pub heuristic: GridHeuristic,
    #[structopt(short, long, default_value = "uniform")]
    pub cost: CostFunction,
}

impl Command for PlanArgs {
    fn execute(self) {
        let problem = PositionSearchProblem::new(self.layout).with_cost_function(self.cost);
        let mut stats = ExpansionStats::new();

        match self.strategy.search(&mut stats, &problem, &self.heuristic) {
            Some(plan) => {
                let steps: Vec<String> = plan.iter().map(|direction| direction.to_string()).collect();
                println!("{}", steps.join(" "));
                if let Some(cost) = problem.cost_of_actions(&plan) {
                    println!("cost: {}", cost);
                }
            }
            None => println!("no path from {} to {}", problem.start_state(), problem.goal()),
        }
        println!("expanded nodes: {}", stats.expanded_count());
    }
}
