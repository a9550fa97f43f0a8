//! Solver policy knobs.

use serde::{Deserialize, Serialize};

/// What Mode 2 does when the estimated discharge temperature lies above the
/// oil-free (adiabatic) discharge temperature, i.e. the implied oil load is negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoOilPolicy {
    /// Fail with `PhysicallyInvalid`.
    #[default]
    Reject,
    /// Fall back to the oil-free discharge state with `Q_oil = 0` and attach a note.
    Clamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    pub no_oil: NoOilPolicy,
}

impl SolverOptions {
    pub fn clamping() -> Self {
        Self {
            no_oil: NoOilPolicy::Clamp,
        }
    }
}
