use std::fmt;

use crate::model::Book;

/// Separator written between fields: a comma and two spaces.
pub const FIELD_SEPARATOR: &str = ",  ";

/// Writes `value` between double quotes, doubling any quote inside it.
pub fn write_quoted<W: fmt::Write + ?Sized>(out: &mut W, value: &str) -> fmt::Result {
    out.write_char('"')?;
    for (i, part) in value.split('"').enumerate() {
        if i > 0 {
            out.write_str("\"\"")?;
        }
        out.write_str(part)?;
    }
    out.write_char('"')
}

pub fn write_book<W: fmt::Write + ?Sized>(out: &mut W, book: &Book) -> fmt::Result {
    write_quoted(out, book.isbn())?;
    out.write_str(FIELD_SEPARATOR)?;
    write_quoted(out, book.title())?;
    out.write_str(FIELD_SEPARATOR)?;
    write_quoted(out, book.author())?;
    out.write_str(FIELD_SEPARATOR)?;
    write!(out, "{}", book.price())
}
