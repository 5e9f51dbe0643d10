//! Resolution of trend chart configurations from optional JSON payloads.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![deny(clippy::pedantic)]
#![deny(clippy::get_unwrap)]
#![allow(clippy::module_name_repetitions)]

pub mod axis;
pub mod config;
pub mod error;
pub mod payload;

pub use axis::AxisType;
pub use config::ChartModelConfiguration;
pub use error::PayloadError;
