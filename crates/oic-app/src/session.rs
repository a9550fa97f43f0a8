//! Calculation session: the backend handle and the latest result per mode.
//!
//! Solvers stay pure; this is the only place results are kept between calls.
//! A failed solve or an input change discards that mode's result and leaves
//! the other modes untouched.

use crate::case::Case;
use crate::error::{AppError, AppResult};
use crate::report::{render_mode1, render_mode2, render_mode3};
use crate::transfer::{Transfer, transfer_mode1_to_mode2};
use oic_fluids::PropertyBackend;
use oic_solver::{
    Mode1Inputs, Mode1Result, Mode2Inputs, Mode2Result, Mode3Inputs, Mode3Result,
    SolverOptions, SolverResult, solve_mode1, solve_mode2, solve_mode3,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Mode1,
    Mode2,
    Mode3,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Mode1, Mode::Mode2, Mode::Mode3];

    pub fn title(&self) -> &'static str {
        match self {
            Mode::Mode1 => "Performance Evaluation",
            Mode::Mode2 => "Refrigeration / Heat Pump Prediction",
            Mode::Mode3 => "Gas Compression Prediction",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Mode1 => write!(f, "Mode 1"),
            Mode::Mode2 => write!(f, "Mode 2"),
            Mode::Mode3 => write!(f, "Mode 3"),
        }
    }
}

/// A solved case, detached from the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Solved {
    Mode1(Mode1Result),
    Mode2(Mode2Result),
    Mode3(Mode3Result),
}

impl Solved {
    pub fn mode(&self) -> Mode {
        match self {
            Solved::Mode1(_) => Mode::Mode1,
            Solved::Mode2(_) => Mode::Mode2,
            Solved::Mode3(_) => Mode::Mode3,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Solved::Mode1(result) => render_mode1(result),
            Solved::Mode2(result) => render_mode2(result),
            Solved::Mode3(result) => render_mode3(result),
        }
    }
}

#[derive(Debug)]
struct Slot<T> {
    result: Option<T>,
    stale: bool,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            result: None,
            stale: false,
        }
    }
}

impl<T> Slot<T> {
    /// Keep a successful result, discard on failure.
    fn store(&mut self, outcome: SolverResult<T>) -> AppResult<&T> {
        self.stale = false;
        self.result = None;
        let result = outcome?;
        Ok(self.result.insert(result))
    }

    fn invalidate(&mut self) {
        self.result = None;
        self.stale = true;
    }
}

pub struct Session {
    backend: Arc<dyn PropertyBackend>,
    options: SolverOptions,
    mode1: Slot<Mode1Result>,
    mode2: Slot<Mode2Result>,
    mode3: Slot<Mode3Result>,
}

impl Session {
    pub fn new(backend: Arc<dyn PropertyBackend>) -> Self {
        info!(backend = backend.name(), "Session started");
        Self {
            backend,
            options: SolverOptions::default(),
            mode1: Slot::default(),
            mode2: Slot::default(),
            mode3: Slot::default(),
        }
    }

    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn backend(&self) -> &dyn PropertyBackend {
        self.backend.as_ref()
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SolverOptions) {
        if options != self.options {
            self.options = options;
            // Only Mode 2 depends on the policy.
            self.mode2.invalidate();
        }
    }

    pub fn solve_mode1(&mut self, inputs: &Mode1Inputs) -> AppResult<&Mode1Result> {
        debug!(fluid = %inputs.fluid, "Solving mode 1");
        let outcome = solve_mode1(self.backend.as_ref(), inputs);
        self.mode1.store(outcome)
    }

    pub fn solve_mode2(&mut self, inputs: &Mode2Inputs) -> AppResult<&Mode2Result> {
        debug!(fluid = %inputs.fluid, policy = ?self.options.no_oil, "Solving mode 2");
        let outcome = solve_mode2(self.backend.as_ref(), inputs, &self.options);
        self.mode2.store(outcome)
    }

    pub fn solve_mode3(&mut self, inputs: &Mode3Inputs) -> AppResult<&Mode3Result> {
        debug!(fluid = %inputs.fluid, reference = %inputs.reference, "Solving mode 3");
        let outcome = solve_mode3(self.backend.as_ref(), inputs);
        self.mode3.store(outcome)
    }

    /// Solve whatever mode the case describes. A Mode 2 case applies its options first.
    pub fn solve_case(&mut self, case: &Case) -> AppResult<Solved> {
        match case {
            Case::Mode1 { inputs } => Ok(Solved::Mode1(self.solve_mode1(inputs)?.clone())),
            Case::Mode2 { options, inputs } => {
                self.set_options(*options);
                Ok(Solved::Mode2(self.solve_mode2(inputs)?.clone()))
            }
            Case::Mode3 { inputs } => Ok(Solved::Mode3(self.solve_mode3(inputs)?.clone())),
        }
    }

    pub fn mode1_result(&self) -> Option<&Mode1Result> {
        self.mode1.result.as_ref()
    }

    pub fn mode2_result(&self) -> Option<&Mode2Result> {
        self.mode2.result.as_ref()
    }

    pub fn mode3_result(&self) -> Option<&Mode3Result> {
        self.mode3.result.as_ref()
    }

    pub fn has_result(&self, mode: Mode) -> bool {
        match mode {
            Mode::Mode1 => self.mode1.result.is_some(),
            Mode::Mode2 => self.mode2.result.is_some(),
            Mode::Mode3 => self.mode3.result.is_some(),
        }
    }

    /// Inputs of `mode` changed: its result no longer describes them.
    pub fn mark_stale(&mut self, mode: Mode) {
        debug!(%mode, "Result marked stale");
        match mode {
            Mode::Mode1 => self.mode1.invalidate(),
            Mode::Mode2 => self.mode2.invalidate(),
            Mode::Mode3 => self.mode3.invalidate(),
        }
    }

    pub fn is_stale(&self, mode: Mode) -> bool {
        match mode {
            Mode::Mode1 => self.mode1.stale,
            Mode::Mode2 => self.mode2.stale,
            Mode::Mode3 => self.mode3.stale,
        }
    }

    /// Seed Mode 2 inputs from the current Mode 1 result.
    pub fn transfer_mode1_to_mode2(&self) -> AppResult<Transfer> {
        let result = self
            .mode1_result()
            .ok_or(AppError::NoResult { mode: Mode::Mode1 })?;
        Ok(transfer_mode1_to_mode2(result))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("backend", &self.backend.name())
            .field("options", &self.options)
            .field("mode1", &self.mode1.result.is_some())
            .field("mode2", &self.mode2.result.is_some())
            .field("mode3", &self.mode3.result.is_some())
            .finish()
    }
}
