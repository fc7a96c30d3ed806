pub mod books;
pub mod error;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::model::BookList;
pub use error::ExportError;

pub trait Export {
    fn to_csv(&self) -> Result<String, ExportError>;
    fn to_md(&self) -> Result<String, ExportError>;
    fn to_json(&self) -> Result<String, ExportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// The numbered listing, one quoted record per line.
    #[default]
    Text,
    Csv,
    #[value(name = "md")]
    Markdown,
    Json,
}

pub fn render(list: &BookList, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Text => {
            let mut out = String::new();
            writeln!(out, "{list}")?;
            Ok(out)
        }
        ExportFormat::Csv => list.to_csv(),
        ExportFormat::Markdown => list.to_md(),
        ExportFormat::Json => list.to_json(),
    }
}

pub fn export_books<P: AsRef<Path>>(
    list: &BookList,
    format: ExportFormat,
    path: P,
) -> Result<(), ExportError> {
    fs::write(path, render(list, format)?)?;
    Ok(())
}
