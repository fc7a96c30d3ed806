pub mod export;
pub mod model;
pub mod parser;
pub mod statistics;

pub use export::{export_books, render, Export, ExportError, ExportFormat};
pub use model::*;
pub use parser::{BookReader, ParseError};
pub use statistics::*;
