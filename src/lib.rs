#![warn(clippy::all)]

mod board;
mod config;
mod controller;
mod coords;
mod error;
mod event_loop;
pub mod rule;
pub mod seed;
mod simulation;
mod stepper;
mod text_render;
mod traits;
mod viewport;

pub use board::Board;
pub use config::{Config, StepDelay, DEFAULT_EDGE_LENGTH, DEFAULT_STEP_DELAY_MS};
pub use controller::{AnimationController, AnimationState};
pub use coords::{CellKey, Coordinate, KEY_DELIMITER};
pub use error::LifeError;
pub use event_loop::{Command, EventLoop, EventLoopHandle};
pub use simulation::Simulation;
pub use stepper::{step, Generation};
pub use text_render::{TextCanvas, MAX_CANVAS_CELLS};
pub use traits::{RenderAdapter, ViewportProvider};
pub use viewport::{PixelSize, ViewportBounds};

pub const VERSION: &str = "0.1.0";
