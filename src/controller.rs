use crate::{
    Config, Coordinate, LifeError, RenderAdapter, Simulation, StepDelay, ViewportProvider,
};
use tokio::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Stopped,
    Running,
}

/// Drives the simulation: single steps, timed animation, editing and reset.
///
/// The controller itself never sleeps. While running it records the instant
/// the next step is due ([`AnimationController::pending_deadline`]) and the
/// owner of the clock calls [`AnimationController::fire_due`] once that
/// instant has passed; [`EventLoop`](crate::EventLoop) does exactly that.
///
/// There is a single deadline slot. Starting the animation fills it, every
/// fired step refills it while running, and stopping empties it, so at most
/// one step is ever pending.
///
/// # Example
///
/// ```rust
/// use sparse_life::{AnimationController, Config, Coordinate, PixelSize, TextCanvas};
///
/// let viewport = PixelSize::new(100, 100);
/// let canvas = TextCanvas::new(10, 10).unwrap();
/// let mut controller = AnimationController::new(Config::default(), &viewport, canvas).unwrap();
///
/// controller.add_cells([(4, 5), (5, 5), (6, 5)].map(Coordinate::from));
/// controller.manual_step().unwrap();
///
/// assert_eq!(controller.generation(), 1);
/// assert!(controller.simulation().board().contains_coordinate(Coordinate::new(5, 4)));
/// ```
pub struct AnimationController<R> {
    simulation: Simulation,
    renderer: R,
    state: AnimationState,
    delay: StepDelay,
    pending: Option<Instant>,
    painting: bool,
}

impl<R: RenderAdapter> AnimationController<R> {
    /// Creates a stopped controller with an empty board and draws it.
    pub fn new(
        config: Config,
        viewport: &impl ViewportProvider,
        renderer: R,
    ) -> Result<Self, LifeError> {
        let mut controller = Self {
            simulation: Simulation::new(&config, viewport),
            renderer,
            state: AnimationState::Stopped,
            delay: config.initial_step_delay(),
            pending: None,
            painting: false,
        };
        controller.redraw()?;
        Ok(controller)
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Swaps the render adapter, keeping the simulation and animation state.
    pub fn map_renderer<T: RenderAdapter>(self, f: impl FnOnce(R) -> T) -> AnimationController<T> {
        AnimationController {
            simulation: self.simulation,
            renderer: f(self.renderer),
            state: self.state,
            delay: self.delay,
            pending: self.pending,
            painting: self.painting,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    pub fn generation(&self) -> u64 {
        self.simulation.generation()
    }

    pub fn step_delay(&self) -> StepDelay {
        self.delay
    }

    /// The instant the next animated step is due, if one is scheduled.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending
    }

    /// How long to wait from `now` until the pending step, zero if overdue.
    pub fn next_delay(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Starts or stops the animation and returns the new state.
    ///
    /// Starting steps once right away and schedules the next step.
    /// Stopping cancels the pending step.
    pub fn toggle(&mut self) -> Result<AnimationState, LifeError> {
        match self.state {
            AnimationState::Stopped => {
                self.state = AnimationState::Running;
                self.run_step()?;
            }
            AnimationState::Running => {
                self.state = AnimationState::Stopped;
                self.pending = None;
            }
        }
        Ok(self.state)
    }

    /// Advances one generation. Does nothing while the animation runs.
    ///
    /// Returns whether a step was taken.
    pub fn manual_step(&mut self) -> Result<bool, LifeError> {
        if self.is_running() {
            return Ok(false);
        }
        self.run_step()?;
        Ok(true)
    }

    /// Changes the delay between animated steps.
    ///
    /// An already scheduled step keeps its deadline; the new delay applies
    /// from the next scheduling on.
    pub fn set_speed(&mut self, delay_ms: u64) -> Result<(), LifeError> {
        self.set_step_delay(StepDelay::from_millis(delay_ms)?);
        Ok(())
    }

    pub fn set_step_delay(&mut self, delay: StepDelay) {
        self.delay = delay;
    }

    /// Stops the animation, empties the board and zeroes the counter.
    pub fn reset(&mut self) -> Result<(), LifeError> {
        self.state = AnimationState::Stopped;
        self.pending = None;
        self.simulation.reset();
        self.renderer.generation_changed(0);
        self.redraw()
    }

    /// Runs the pending step if it is due at `now`.
    ///
    /// Returns whether a step was taken.
    pub fn fire_due(&mut self, now: Instant) -> Result<bool, LifeError> {
        match self.pending {
            Some(deadline) if deadline <= now => {
                self.pending = None;
                self.run_step()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Starts painting and adds the cell under the pointer.
    pub fn pointer_down(&mut self, px: i64, py: i64) -> Coordinate {
        self.painting = true;
        self.paint(px, py)
    }

    /// Adds the cell under the pointer while painting.
    pub fn pointer_move(&mut self, px: i64, py: i64) -> Option<Coordinate> {
        self.painting.then(|| self.paint(px, py))
    }

    pub fn pointer_up(&mut self) {
        self.painting = false;
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }

    /// Adds cells given in cell coordinates and draws each of them.
    pub fn add_cells(&mut self, cells: impl IntoIterator<Item = Coordinate>) {
        let edge_length = self.simulation.edge_length();
        for coord in cells {
            self.simulation.add_cell(coord);
            self.renderer.draw_cell(coord.x, coord.y, edge_length);
        }
    }

    /// Picks up a new surface size and redraws the board.
    pub fn resize(&mut self, viewport: &impl ViewportProvider) -> Result<(), LifeError> {
        self.simulation.resize(viewport);
        self.redraw()
    }

    /// Clears the surface and draws every live cell.
    pub fn redraw(&mut self) -> Result<(), LifeError> {
        let cells = self.simulation.board().coordinates()?;
        self.draw_frame(&cells);
        Ok(())
    }

    fn paint(&mut self, px: i64, py: i64) -> Coordinate {
        let coord = self.simulation.add_cell_at_pixel(px, py);
        self.renderer
            .draw_cell(coord.x, coord.y, self.simulation.edge_length());
        coord
    }

    fn run_step(&mut self) -> Result<(), LifeError> {
        let started = Instant::now();
        let draw_set = self.simulation.advance()?;
        self.draw_frame(&draw_set);
        self.renderer
            .generation_changed(self.simulation.generation());
        if self.is_running() {
            // measured from the step's start so compute time does not add drift
            self.pending = Some(started + self.delay.as_duration());
        }
        Ok(())
    }

    fn draw_frame(&mut self, cells: &[Coordinate]) {
        let edge_length = self.simulation.edge_length();
        self.renderer.clear();
        for coord in cells {
            self.renderer.draw_cell(coord.x, coord.y, edge_length);
        }
    }
}
