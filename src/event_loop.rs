use crate::{AnimationController, PixelSize, RenderAdapter, StepDelay};
use anyhow::{anyhow, Result};
use tokio::{
    sync::mpsc,
    time::{sleep_until, Instant},
};

/// Everything that may change the simulation from the outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Toggle,
    ManualStep,
    /// New delay between animated steps.
    SetSpeed(StepDelay),
    Reset,
    /// Pointer pressed at a pixel; starts painting.
    PointerDown { x: i64, y: i64 },
    PointerMove { x: i64, y: i64 },
    PointerUp,
    /// Any key press; steps once while stopped.
    KeyPress,
    /// The surface now measures `width × height` pixels.
    Resize { width: u32, height: u32 },
    Shutdown,
}

/// Sends [`Command`]s to a running [`EventLoop`].
#[derive(Clone, Debug)]
pub struct EventLoopHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl EventLoopHandle {
    /// # Errors
    ///
    /// Fails if the event loop has already finished.
    pub fn send(&self, command: Command) -> Result<()> {
        self.tx
            .send(command)
            .map_err(|e| anyhow!("event loop is gone, dropped {:?}", e.0))
    }

    /// Validates `delay_ms` before queueing a [`Command::SetSpeed`].
    pub fn set_speed(&self, delay_ms: u64) -> Result<()> {
        self.send(Command::SetSpeed(StepDelay::from_millis(delay_ms)?))
    }
}

/// Serializes every mutation of an [`AnimationController`] on one task.
///
/// Commands and timed steps are handled strictly one after another, so a
/// step never overlaps an edit or another step. Commands win over a step
/// that is due at the same moment; a `Toggle` that stops the animation is
/// therefore never followed by the step it cancelled.
///
/// The loop ends on [`Command::Shutdown`], when the generation limit is
/// reached, or when all handles are dropped and the animation is stopped.
///
/// The loop is meant to be driven by a current-thread runtime; it is
/// `Send` only when the render adapter is.
pub struct EventLoop<R> {
    controller: AnimationController<R>,
    rx: mpsc::UnboundedReceiver<Command>,
    generation_limit: Option<u64>,
}

impl<R: RenderAdapter> EventLoop<R> {
    pub fn new(controller: AnimationController<R>) -> (Self, EventLoopHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_loop = Self {
            controller,
            rx,
            generation_limit: None,
        };
        (event_loop, EventLoopHandle { tx })
    }

    /// Stops the loop once the generation counter reaches `limit`.
    pub fn with_generation_limit(mut self, limit: u64) -> Self {
        self.generation_limit = Some(limit);
        self
    }

    /// Processes commands and scheduled steps until the loop ends, then
    /// hands the controller back.
    ///
    /// # Errors
    ///
    /// A failed step aborts the loop; the simulation state is an internal
    /// invariant violation at that point and is not recovered.
    pub async fn run(mut self) -> Result<AnimationController<R>> {
        let mut commands_open = true;
        loop {
            if self.limit_reached() {
                break;
            }
            let deadline = self.controller.pending_deadline();
            if !commands_open && deadline.is_none() {
                break;
            }

            tokio::select! {
                biased;
                command = self.rx.recv(), if commands_open => match command {
                    Some(Command::Shutdown) => break,
                    Some(command) => self.dispatch(command)?,
                    None => commands_open = false,
                },
                _ = wait_for(deadline) => {
                    self.controller.fire_due(Instant::now())?;
                }
            }
        }
        Ok(self.controller)
    }

    fn limit_reached(&self) -> bool {
        self.generation_limit
            .is_some_and(|limit| self.controller.generation() >= limit)
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        let controller = &mut self.controller;
        match command {
            Command::Toggle => {
                controller.toggle()?;
            }
            Command::ManualStep | Command::KeyPress => {
                controller.manual_step()?;
            }
            Command::SetSpeed(delay) => controller.set_step_delay(delay),
            Command::Reset => controller.reset()?,
            Command::PointerDown { x, y } => {
                controller.pointer_down(x, y);
            }
            Command::PointerMove { x, y } => {
                controller.pointer_move(x, y);
            }
            Command::PointerUp => controller.pointer_up(),
            Command::Resize { width, height } => {
                controller.resize(&PixelSize::new(width, height))?
            }
            Command::Shutdown => {}
        }
        Ok(())
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
