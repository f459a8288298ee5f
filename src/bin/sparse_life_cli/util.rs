use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Args;
use num_format::{CustomFormat, Grouping, ToFormattedString};
use sparse_life::{
    seed, AnimationController, Board, Config, Coordinate, PixelSize, TextCanvas, ViewportBounds,
};
use std::fmt::Display;

#[derive(Args, Debug)]
pub(super) struct FieldArgs {
    /// Width of the surface in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Height of the surface in pixels
    #[arg(long, default_value_t = 320)]
    height: u32,

    /// Side of one cell in pixels
    #[arg(short, long, default_value_t = sparse_life::DEFAULT_EDGE_LENGTH)]
    edge: u32,

    /// Live cell given as `X,Y` in cell coordinates; may be repeated
    #[arg(short, long = "cell", value_parser = parse_cell)]
    cells: Vec<Coordinate>,

    /// Also fill the field at random with probability `density`
    #[arg(short, long)]
    random: bool,

    /// Share of live cells for `--random`
    #[arg(long, default_value_t = 0.3)]
    density: f64,

    /// Seed for `--random`; seeds from the OS if omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_cell(s: &str) -> Result<Coordinate> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("cell {s:?} is not of the form X,Y"))?;
    let x = x.trim().parse().with_context(|| format!("bad x in cell {s:?}"))?;
    let y = y.trim().parse().with_context(|| format!("bad y in cell {s:?}"))?;
    Ok(Coordinate::new(x, y))
}

/// Builds a stopped controller drawing to a text canvas, seeded per `args`.
pub(super) fn build_controller(
    args: &FieldArgs,
    delay_ms: u64,
) -> Result<AnimationController<TextCanvas>> {
    if args.cells.is_empty() && !args.random {
        bail!("nothing to simulate, pass --cell X,Y or --random");
    }
    let config = Config::new(args.edge, delay_ms).context("invalid field configuration")?;
    let viewport = PixelSize::new(args.width, args.height);
    let bounds = ViewportBounds::from_pixels(args.width, args.height, config.edge_length());
    let canvas = TextCanvas::new(bounds.x_max as usize + 1, bounds.y_max as usize + 1)
        .context("field is too large to print, lower --width/--height or raise --edge")?;
    let mut controller = AnimationController::new(config, &viewport, canvas)?;

    controller.add_cells(args.cells.iter().copied());
    if args.random {
        controller.add_cells(seed::random_soup(bounds, args.density, args.seed)?);
    }
    Ok(controller)
}

pub(super) fn print_population(board: &Board) {
    let fmt = CustomFormat::builder()
        .grouping(Grouping::Standard)
        .separator("_")
        .build()
        .unwrap();
    println!("Population: {}", board.len().to_formatted_string(&fmt));
}

/// Prints `message` prefixed with the local time.
pub(super) fn report(message: impl Display) {
    println!("[{}] {}", Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(width: u32, height: u32, edge: u32, cells: &[(i64, i64)]) -> FieldArgs {
        FieldArgs {
            width,
            height,
            edge,
            cells: cells.iter().copied().map(Coordinate::from).collect(),
            random: false,
            density: 0.3,
            seed: Some(42),
        }
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("3,4").unwrap(), Coordinate::new(3, 4));
        assert_eq!(parse_cell(" -2 , 7").unwrap(), Coordinate::new(-2, 7));
        for s in ["", "3", "3;4", "a,4", "3,b", "3,4,5"] {
            assert!(parse_cell(s).is_err(), "{s:?} should be rejected");
        }
    }

    #[test]
    fn test_build_controller_places_cells() {
        let args = field(100, 100, 10, &[(4, 5), (5, 5), (6, 5)]);
        let controller = build_controller(&args, 500).unwrap();
        assert_eq!(controller.simulation().board().len(), 3);
        assert_eq!(controller.renderer().live_cells().len(), 3);
    }

    #[test]
    fn test_build_controller_rejects_huge_field() {
        let args = field(u32::MAX, u32::MAX, 1, &[(0, 0)]);
        assert!(build_controller(&args, 500).is_err());
    }

    #[test]
    fn test_build_controller_needs_cells() {
        assert!(build_controller(&field(100, 100, 10, &[]), 500).is_err());

        let mut args = field(100, 100, 10, &[]);
        args.random = true;
        args.density = 1.0;
        let controller = build_controller(&args, 500).unwrap();
        assert_eq!(controller.simulation().board().len(), 121);
    }
}
