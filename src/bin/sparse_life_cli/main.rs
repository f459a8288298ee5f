mod run;
mod step;
mod util;

use clap::{Parser, Subcommand};
use run::{run_animation, RunArgs};
use step::{run_steps, StepArgs};

#[derive(Parser, Debug)]
#[command(version, about)]
struct CLIParser {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Animate the pattern in the terminal at the configured cadence
    Run(RunArgs),
    /// Advance the pattern by a number of generations at once and print the result
    Step(StepArgs),
}

fn main() -> anyhow::Result<()> {
    let args = CLIParser::parse();

    match args.action {
        Action::Run(args) => run_animation(args),
        Action::Step(args) => run_steps(args),
    }
}
