//! The quoted, comma-separated record format:
//!
//! ```text
//! "<isbn>", "<title>", "<author>", <price>
//! ```
//!
//! A literal `"` inside a field is written as `""`. On input a comma may be
//! followed by any whitespace; on output it is followed by two spaces.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::ParseError;
pub use reader::BookReader;
pub use writer::{write_book, write_quoted, FIELD_SEPARATOR};
