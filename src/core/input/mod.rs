//! Input sheet reading and handle column selection
//!
//! - [`reader`] - loads a spreadsheet or CSV file into an [`InputTable`]
//! - [`column`] - pluggable strategies for picking the handle column

pub mod column;
pub mod reader;

pub use column::{default_selector, ColumnSelector, FirstMatch, HandlePrefixColumn, NamedColumn};
pub use reader::{read_table, InputTable};
