#![cfg_attr(not(test), no_std)]

//! Turns raw triaxial accelerometer records into a smoothed signal along the
//! gravity axis, ready for step detection.
//!
//! ```text
//! parse -> decompose (combined input only) -> project -> smooth
//! ```

extern crate alloc;

mod config;
mod decompose;
mod processor;
mod project;
mod smooth;
mod vector;
pub mod filters;
pub mod parser;
pub mod sample;

pub use config::{Config, ConfigError};
pub use decompose::decompose;
pub use filters::{Biquad, CoefficientError, CoefficientSet};
pub use parser::{Format, ParseError, ParsedInput, RawGroup, RawRecord, parse};
pub use processor::{Processed, Processor, process};
pub use project::project;
pub use sample::{AxisSeries, Sample};
pub use smooth::smooth;
pub use vector::Vector3;
