use std::io::Write;

use crate::export::{Export, ExportError};
use crate::model::{Book, BookList};

fn md_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

impl Export for [Book] {
    fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for book in self {
            wtr.serialize(book)?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn to_md(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();

        writeln!(buffer, "| ISBN | Title | Author | Price |")?;
        writeln!(buffer, "|------|-------|--------|-------|")?;

        for book in self {
            writeln!(
                buffer,
                "| {} | {} | {} | {:.2} |",
                md_cell(book.isbn()),
                md_cell(book.title()),
                md_cell(book.author()),
                book.price()
            )?;
        }
        Ok(String::from_utf8(buffer)?)
    }

    fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(ExportError::JsonToString)
    }
}

/// Exports only the books in `[0, size)`.
impl Export for BookList {
    fn to_csv(&self) -> Result<String, ExportError> {
        self.as_slice().to_csv()
    }

    fn to_md(&self) -> Result<String, ExportError> {
        self.as_slice().to_md()
    }

    fn to_json(&self) -> Result<String, ExportError> {
        self.as_slice().to_json()
    }
}
