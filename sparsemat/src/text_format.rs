//! Entry-list text format
//!
//! ```text
//! rows=<N>
//! cols=<N>
//! (<row>, <col>, <value>)
//! ```
//!
//! Lines are trimmed and blank lines are ignored. Line numbers in errors are
//! physical (1-based) line numbers of the input.

pub mod reader;
pub mod writer;

pub use reader::{parse_entry_line, parse_header_line, parse_matrix};
pub use writer::{to_text, write_matrix};

/// Header key for the row count
pub const ROWS_KEY: &str = "rows";

/// Header key for the column count
pub const COLS_KEY: &str = "cols";
