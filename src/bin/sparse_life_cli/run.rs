use crate::util::{build_controller, print_population, report, FieldArgs};
use anyhow::{Context, Result};
use clap::Args;
use sparse_life::{Command, EventLoop, RenderAdapter, TextCanvas};

#[derive(Args, Debug)]
pub(super) struct RunArgs {
    #[command(flatten)]
    field: FieldArgs,

    /// Delay between generations in milliseconds
    #[arg(short, long, default_value_t = sparse_life::DEFAULT_STEP_DELAY_MS)]
    delay_ms: u64,

    /// Stop after this many generations
    #[arg(short, long, default_value_t = 100)]
    generations: u64,
}

/// Prints every frame as it is completed.
struct Terminal {
    canvas: TextCanvas,
}

impl RenderAdapter for Terminal {
    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw_cell(&mut self, x: i64, y: i64, edge_length: u32) {
        self.canvas.draw_cell(x, y, edge_length);
    }

    fn generation_changed(&mut self, generation: u64) {
        self.canvas.generation_changed(generation);
        report(format_args!("generation {generation}"));
        print!("{}", self.canvas);
    }
}

pub(super) fn run_animation(args: RunArgs) -> Result<()> {
    let timer = std::time::Instant::now();
    let controller = build_controller(&args.field, args.delay_ms)?;
    report(format_args!(
        "Seeded {} cells in {:.1} secs",
        controller.simulation().board().len(),
        timer.elapsed().as_secs_f64()
    ));
    let controller = controller.map_renderer(|canvas| Terminal { canvas });

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build the runtime")?;

    let timer = std::time::Instant::now();
    let (event_loop, handle) = EventLoop::new(controller);
    let event_loop = event_loop.with_generation_limit(args.generations);
    handle.send(Command::Toggle)?;
    let controller = runtime.block_on(event_loop.run())?;

    report(format_args!(
        "Ran {} generations in {:.1} secs",
        controller.generation(),
        timer.elapsed().as_secs_f64()
    ));
    print_population(controller.simulation().board());
    Ok(())
}
