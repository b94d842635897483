mod cli;

use cli::commands::Command;
use cli::Pursuit;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Pursuit::from_args().execute();
}
