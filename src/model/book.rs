use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parser::{write_book, BookReader, ParseError};

/// Two prices closer than this are considered equal.
pub const EPSILON: f64 = 1.0E-4;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    price: f64,
}

impl Book {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_isbn(&mut self, isbn: impl Into<String>) {
        self.isbn = isbn.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Parses one record from the start of `text` into `self`.
    ///
    /// The record is built in a scratch value and only moved into `self`
    /// once every field has parsed, so on failure `self` keeps its old
    /// contents and `false` is returned.
    pub fn read_from(&mut self, text: &str) -> bool {
        match BookReader::new(text).read_book() {
            Ok(book) => {
                *self = book;
                true
            }
            Err(_) => false,
        }
    }

    /// Field-by-field comparison with no price tolerance.
    #[allow(clippy::float_cmp)]
    pub(crate) fn exactly_eq(&self, other: &Book) -> bool {
        self.isbn == other.isbn
            && self.title == other.title
            && self.author == other.author
            && self.price == other.price
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
            && self.title == other.title
            && self.author == other.author
            && (self.price - other.price).abs() < EPSILON
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_book(f, self)
    }
}

impl FromStr for Book {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookReader::new(s).read_book()
    }
}
