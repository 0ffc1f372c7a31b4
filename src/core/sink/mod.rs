//! Result sink
//!
//! - [`csv`] - full-rewrite CSV output with a fixed column order

pub mod csv;

pub use self::csv::{output_columns, CsvSink};
