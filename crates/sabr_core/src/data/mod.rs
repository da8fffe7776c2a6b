//! Embedded reference data
//!
//! Sample player records for demos and tests, compiled into the binary so
//! no file I/O or network access is needed at runtime.

pub mod embedded;

pub use embedded::{get_sample_data, SampleBatter, SampleData, SamplePitcher};
