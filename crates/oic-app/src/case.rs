//! Case files: one mode's inputs stored as YAML.
//!
//! ```yaml
//! mode: mode2
//! options:
//!   no_oil: clamp
//! inputs:
//!   fluid: R134a
//!   flow: { kind: by_speed, rpm: 2900, displacement_cm3: 180 }
//!   ...
//! ```

use crate::error::{AppError, AppResult};
use crate::session::Mode;
use oic_solver::{Mode1Inputs, Mode2Inputs, Mode3Inputs, SolverOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Case {
    Mode1 {
        inputs: Mode1Inputs,
    },
    Mode2 {
        #[serde(default)]
        options: SolverOptions,
        inputs: Mode2Inputs,
    },
    Mode3 {
        inputs: Mode3Inputs,
    },
}

impl Case {
    pub fn mode(&self) -> Mode {
        match self {
            Case::Mode1 { .. } => Mode::Mode1,
            Case::Mode2 { .. } => Mode::Mode2,
            Case::Mode3 { .. } => Mode::Mode3,
        }
    }
}

pub fn parse_case(content: &str) -> AppResult<Case> {
    serde_yaml::from_str(content)
        .map_err(|e| AppError::Case(format!("Failed to parse case YAML: {}", e)))
}

pub fn case_to_yaml(case: &Case) -> AppResult<String> {
    serde_yaml::to_string(case)
        .map_err(|e| AppError::Case(format!("Failed to serialize case: {}", e)))
}

/// Load a case from a YAML file.
pub fn load_case(path: &Path) -> AppResult<Case> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::CaseFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_case(&content)
}

/// Save a case to a YAML file.
pub fn save_case(path: &Path, case: &Case) -> AppResult<()> {
    write_case_file(path, &case_to_yaml(case)?)
}

/// Write already rendered case text, e.g. YAML with leading comments.
pub fn write_case_file(path: &Path, content: &str) -> AppResult<()> {
    std::fs::write(path, content).map_err(|e| AppError::CaseFileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
