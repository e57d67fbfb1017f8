//! User-facing CLI output: status, warnings, errors and progress lines,
//! honoring quiet and verbose modes.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};
