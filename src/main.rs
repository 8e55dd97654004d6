mod cli;

use cli::commands::Command;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    cli::Jump61::from_args().execute();
}
