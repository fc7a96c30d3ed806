use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("expected an opening quote at byte {0}")]
    ExpectedQuote(usize),
    #[error("quoted field starting at byte {0} is never closed")]
    UnterminatedQuote(usize),
    #[error("expected ',' at byte {0}")]
    MissingDelimiter(usize),
    #[error("price is not a number: {0:?}")]
    InvalidPrice(String),
    #[error("input ended in the middle of a record")]
    UnexpectedEof,
}
