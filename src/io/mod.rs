//! Output serialization.

pub mod writer;

pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
