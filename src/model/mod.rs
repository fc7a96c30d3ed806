pub mod book;
pub mod book_list;

pub use book::*;
pub use book_list::*;
