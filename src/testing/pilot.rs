//! Pilot: a scripted headless host.
//!
//! The `Pilot` implements [`Host`] without any toolkit. Queue interactions
//! (button clicks, Return presses, clicks at a point) and hand the pilot to
//! [`Grid::run`]; it replays them against the grid's signals and records what
//! fired.

use tracing::debug;

use crate::app::{Host, Window};
use crate::control::ControlId;
use crate::error::{GridError, Result};
use crate::event::Signal;
use crate::geometry::Offset;
use crate::grid::Grid;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Click the named control.
    Click(String),
    /// Press Return in the named control.
    PressEnter(String),
    /// Click whatever control lies under a point of the window.
    ClickAt(Offset),
}

/// What one action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    /// The control that received the signal.
    pub control: ControlId,
    /// The signal fired.
    pub signal: Signal,
    /// How many callbacks ran.
    pub callbacks: usize,
}

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless host for testing.
///
/// # Examples
///
/// ```
/// use guigrid::cell::Token;
/// use guigrid::event::Callback;
/// use guigrid::grid::Grid;
/// use guigrid::testing::Pilot;
///
/// let mut grid = Grid::new(vec![vec![Token::button("Go")]]).unwrap();
/// grid.events(vec![vec![Callback::bound(|| println!("go")).into()]]).unwrap();
///
/// let mut pilot = Pilot::new().click("Go");
/// grid.run(&mut pilot).unwrap();
/// assert_eq!(pilot.fired().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Pilot {
    script: Vec<Action>,
    fired: Vec<Fired>,
    windows: Vec<Window>,
}

impl Pilot {
    /// Create a pilot with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Script ───────────────────────────────────────────────────────

    /// Queue a click on the control named `name` (builder).
    pub fn click(mut self, name: impl Into<String>) -> Self {
        self.script.push(Action::Click(name.into()));
        self
    }

    /// Queue a Return press in the control named `name` (builder).
    pub fn press_enter(mut self, name: impl Into<String>) -> Self {
        self.script.push(Action::PressEnter(name.into()));
        self
    }

    /// Queue a click at window point (x, y) (builder).
    pub fn click_at(mut self, x: i32, y: i32) -> Self {
        self.script.push(Action::ClickAt(Offset::new(x, y)));
        self
    }

    /// Actions not yet replayed.
    pub fn pending(&self) -> &[Action] {
        &self.script
    }

    // ── Results ──────────────────────────────────────────────────────

    /// Every signal fired so far, in order.
    pub fn fired(&self) -> &[Fired] {
        &self.fired
    }

    /// Every window this pilot has been asked to run.
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Number of completed runs.
    pub fn runs(&self) -> usize {
        self.windows.len()
    }

    // ── Replay ───────────────────────────────────────────────────────

    fn perform(grid: &Grid, window: &Window, action: &Action) -> Result<Fired> {
        let (control, signal) = match action {
            Action::Click(name) => (grid.resolve(name)?, Signal::Clicked),
            Action::PressEnter(name) => (grid.resolve(name)?, Signal::ReturnPressed),
            Action::ClickAt(point) => {
                let control = window
                    .spatial_map()?
                    .control_at(*point)
                    .ok_or_else(|| GridError::NotFound(format!("point ({}, {})", point.x, point.y)))?;
                (control, Signal::Clicked)
            }
        };
        expect_signal(grid, control, signal)?;
        let callbacks = grid.emit(control)?;
        Ok(Fired {
            control,
            signal,
            callbacks,
        })
    }
}

/// Fail unless `signal` is the default signal of `control`.
fn expect_signal(grid: &Grid, control: ControlId, signal: Signal) -> Result<()> {
    let kind = grid
        .control(control)
        .map(|c| c.kind())
        .ok_or_else(|| GridError::NotFound(format!("{control:?}")))?;
    if kind.default_signal() == Some(signal) {
        Ok(())
    } else {
        Err(grid.unsupported_event(control))
    }
}

impl Host for Pilot {
    type Error = GridError;

    /// Replay the queued actions in order. Stops at the first failing action;
    /// actions after it stay queued.
    fn run(&mut self, grid: &Grid, window: Window) -> Result<()> {
        debug!(target: "guigrid::app", actions = self.script.len(), "pilot run");
        let script = std::mem::take(&mut self.script);
        let mut actions = script.into_iter();
        while let Some(action) = actions.next() {
            match Self::perform(grid, &window, &action) {
                Ok(fired) => self.fired.push(fired),
                Err(err) => {
                    self.script = std::iter::once(action).chain(actions).collect();
                    return Err(err);
                }
            }
        }
        self.windows.push(window);
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
