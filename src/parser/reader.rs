use super::error::ParseError;
use crate::model::Book;

const QUOTE: u8 = b'"';
const DELIMITER: u8 = b',';

/// Space, tab, newline, vertical tab, form feed and carriage return.
fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Reads `"<isbn>", "<title>", "<author>", <price>` records one after
/// another out of a text buffer. Records may be separated by any whitespace.
///
/// A failed read does not move the reader, so the offending record can be
/// inspected through [`BookReader::remaining`].
#[derive(Debug, Clone)]
pub struct BookReader<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> BookReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unread record.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// True when only whitespace is left.
    pub fn is_exhausted(&self) -> bool {
        self.remaining().bytes().all(is_separator)
    }

    pub fn read_book(&mut self) -> Result<Book, ParseError> {
        let mut cursor = Cursor {
            bytes: self.input.as_bytes(),
            pos: self.pos,
        };
        let isbn = cursor.quoted()?;
        cursor.delimiter()?;
        let title = cursor.quoted()?;
        cursor.delimiter()?;
        let author = cursor.quoted()?;
        cursor.delimiter()?;
        let price = cursor.price()?;

        self.pos = cursor.pos;
        Ok(Book::new(isbn, title, author, price))
    }
}

/// Yields records until the input runs out. The first malformed record is
/// yielded as an error and ends the iteration.
impl Iterator for BookReader<'_> {
    type Item = Result<Book, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_exhausted() {
            return None;
        }
        let result = self.read_book();
        self.failed = result.is_err();
        Some(result)
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn skip_whitespace(&mut self) {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|&b| is_separator(b))
        {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn quoted(&mut self) -> Result<String, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => return Err(ParseError::UnexpectedEof),
            Some(QUOTE) => {}
            Some(_) => return Err(ParseError::ExpectedQuote(self.pos)),
        }
        let start = self.pos;
        self.pos += 1;

        let mut field = Vec::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::UnterminatedQuote(start)),
                Some(QUOTE) if self.bytes.get(self.pos + 1) == Some(&QUOTE) => {
                    field.push(QUOTE);
                    self.pos += 2;
                }
                Some(QUOTE) => {
                    self.pos += 1;
                    break;
                }
                Some(b) => {
                    field.push(b);
                    self.pos += 1;
                }
            }
        }
        // Quotes are ASCII, so the collected bytes are still valid UTF-8.
        Ok(String::from_utf8_lossy(&field).into_owned())
    }

    fn delimiter(&mut self) -> Result<(), ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(ParseError::UnexpectedEof),
            Some(DELIMITER) => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(ParseError::MissingDelimiter(self.pos)),
        }
    }

    /// Consumes the longest prefix that looks like a floating-point literal
    /// (`[+-]digits[.digits][e[+-]digits]`) and parses it.
    fn price(&mut self) -> Result<f64, ParseError> {
        self.skip_whitespace();
        if self.peek().is_none() {
            return Err(ParseError::UnexpectedEof);
        }
        let start = self.pos;
        let mut end = start;
        let at = |i: usize| self.bytes.get(i).copied();

        if matches!(at(end), Some(b'+' | b'-')) {
            end += 1;
        }
        while at(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
        }
        if at(end) == Some(b'.') {
            end += 1;
            while at(end).is_some_and(|b| b.is_ascii_digit()) {
                end += 1;
            }
        }
        if matches!(at(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(at(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            if at(exp).is_some_and(|b| b.is_ascii_digit()) {
                while at(exp).is_some_and(|b| b.is_ascii_digit()) {
                    exp += 1;
                }
                end = exp;
            }
        }

        let literal = String::from_utf8_lossy(&self.bytes[start..end]);
        let price = literal
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidPrice(literal.to_string()))?;
        self.pos = end;
        Ok(price)
    }
}
