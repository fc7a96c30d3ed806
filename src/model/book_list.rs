use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::ops::{AddAssign, Index};
use std::path::Path;

use tracing::{debug, warn};

use crate::model::Book;
use crate::parser::BookReader;

/// An ordered list of books with a capacity fixed at construction.
///
/// All `capacity` slots are allocated up front; only `[0, size)` is part of
/// the list. Anything that would push the list past its capacity is dropped
/// without an error.
#[derive(Debug, Clone)]
pub struct BookList {
    books: Box<[Book]>,
    size: usize,
}

impl BookList {
    pub fn new(capacity: usize) -> Self {
        Self {
            books: vec![Book::default(); capacity].into_boxed_slice(),
            size: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.as_slice().get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.as_slice().iter()
    }

    pub fn as_slice(&self) -> &[Book] {
        &self.books[..self.size]
    }

    /// Position of the first book whose four fields match `book` exactly,
    /// or `self.size()` when there is none.
    ///
    /// Prices are compared bit for bit here, unlike `Book`'s `==`, which
    /// allows an [`EPSILON`](crate::model::EPSILON) of slack. Two books that
    /// are `==` can therefore sit at different positions and both be found.
    pub fn find(&self, book: &Book) -> usize {
        self.iter()
            .position(|candidate| candidate.exactly_eq(book))
            .unwrap_or(self.size)
    }

    /// Copies the books of `other`, in order, onto the end of this list
    /// until either this list is full or `other` runs out.
    pub fn append_all(&mut self, other: &BookList) -> &mut Self {
        let free = self.capacity() - self.size;
        let taken = free.min(other.size());
        self.books[self.size..self.size + taken].clone_from_slice(&other.as_slice()[..taken]);
        self.size += taken;

        if taken < other.size() {
            debug!(
                capacity = self.capacity(),
                dropped = other.size() - taken,
                "append truncated at capacity"
            );
        }
        self
    }

    /// Reads records from `text` into the list, starting at slot 0, until the
    /// text runs out, a record fails to parse, or every slot is filled.
    ///
    /// After a short read the size is the number of records read, even when
    /// the list held more before.
    pub fn parse_str(&mut self, text: &str) -> &mut Self {
        let (count, reader) = self.fill(text);
        if count < self.capacity() {
            self.size = count;
        } else if !reader.is_exhausted() {
            debug!(capacity = self.capacity(), "input truncated at capacity");
        }
        self
    }

    /// [`parse_str`](Self::parse_str) over the contents of `reader`.
    ///
    /// Reading stops at the first I/O error and parsing stops at the first
    /// byte that is not UTF-8; records before either point are kept.
    pub fn read_from<R: Read>(&mut self, mut reader: R) -> &mut Self {
        let mut bytes = Vec::new();
        if let Err(err) = reader.read_to_end(&mut bytes) {
            warn!(error = %err, "failed to read book stream");
        }
        self.parse_str(utf8_prefix(&bytes))
    }

    /// Replaces the contents with the records in the file at `path`, up to
    /// capacity. The size is set to the number of records read; a file that
    /// cannot be opened leaves the list empty.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> &mut Self {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot open book file");
                self.size = 0;
                return self;
            }
        };
        let (count, _) = self.fill(utf8_prefix(&bytes));
        self.size = count;
        self
    }

    /// Writes the numbered listing produced by `Display` to `out`.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Stores parsed records into slots `0..` and returns how many were
    /// stored along with the reader positioned after the last one.
    ///
    /// A stored slot past the current size extends the size to cover it;
    /// the size is never lowered here.
    fn fill<'a>(&mut self, text: &'a str) -> (usize, BookReader<'a>) {
        let mut reader = BookReader::new(text);
        let mut count = 0;
        while count < self.capacity() {
            match reader.next() {
                Some(Ok(book)) => {
                    self.books[count] = book;
                    count += 1;
                    if count > self.size {
                        self.size = count;
                    }
                }
                Some(Err(err)) => {
                    debug!(record = count, error = %err, "stopped at malformed record");
                    break;
                }
                None => break,
            }
        }
        (count, reader)
    }
}

/// The longest prefix of `bytes` that is valid UTF-8.
fn utf8_prefix(bytes: &[u8]) -> &str {
    match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!(offset = err.valid_up_to(), "input truncated at invalid UTF-8");
            // valid_up_to() marks the end of the longest valid prefix.
            std::str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default()
        }
    }
}

/// Indexing is only defined for `index < size()`; anything else panics.
impl Index<usize> for BookList {
    type Output = Book;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl AddAssign<&BookList> for BookList {
    fn add_assign(&mut self, rhs: &BookList) {
        self.append_all(rhs);
    }
}

impl<'a> IntoIterator for &'a BookList {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per book, each preceded by a newline:
/// `<index right-aligned in 5 columns>:  <book>`.
impl fmt::Display for BookList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, book) in self.iter().enumerate() {
            write!(f, "\n{i:>5}:  {book}")?;
        }
        Ok(())
    }
}
