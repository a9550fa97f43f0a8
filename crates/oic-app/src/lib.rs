//! Shared application service layer for the compressor calculator.
//!
//! Front ends (the CLI today) go through this crate for case files, the
//! calculation session, the Mode 1 → Mode 2 transfer, reports and print sheets.

pub mod case;
pub mod error;
pub mod print;
pub mod report;
pub mod session;
pub mod transfer;

// Re-export key types for convenience
pub use case::{Case, case_to_yaml, load_case, parse_case, save_case, write_case_file};
pub use error::{AppError, AppResult};
pub use print::{PrintSheet, inputs_table};
pub use report::{render_mode1, render_mode2, render_mode3};
pub use session::{Mode, Session, Solved};
pub use transfer::{
    DEFAULT_ETA_S, DEFAULT_MOTOR_EFFICIENCY, FALLBACK_ETA_V, Transfer, transfer_mode1_to_mode2,
};
