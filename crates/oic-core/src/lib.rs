//! oic-core: shared foundation for the oil-injected compressor calculator.
//!
//! Contains:
//! - units (uom SI types, constructors and scalar unit conversions)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
