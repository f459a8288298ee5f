use crate::util::{build_controller, print_population, report, FieldArgs};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub(super) struct StepArgs {
    #[command(flatten)]
    field: FieldArgs,

    /// Number of generations to advance
    #[arg(short, long)]
    generations: u64,
}

pub(super) fn run_steps(args: StepArgs) -> Result<()> {
    let mut controller = build_controller(&args.field, sparse_life::DEFAULT_STEP_DELAY_MS)?;
    print_population(controller.simulation().board());

    let timer = std::time::Instant::now();
    for _ in 0..args.generations {
        controller.manual_step()?;
    }
    report(format_args!(
        "Updated pattern by {} generations in {:.3} secs",
        controller.generation(),
        timer.elapsed().as_secs_f64()
    ));
    print!("{}", controller.renderer());
    print_population(controller.simulation().board());
    Ok(())
}
