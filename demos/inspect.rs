use book_list::{Book, BookList, Export, Statistics};
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args()
        .nth(1)
        .or_else(|| env::var("BOOK_LIST_PATH").ok())
        .unwrap_or_else(|| "demos/books.txt".to_string());

    let mut shelf = BookList::new(4);
    shelf.load_from_file(&path);
    println!("loaded {} of at most {} books", shelf.size(), shelf.capacity());
    println!("{shelf}");

    let mut wishlist = BookList::new(2);
    wishlist.parse_str(
        r#""9780547928227", "The Hobbit", "J. R. R. Tolkien", 10.99
           "9780451524935", "1984", "George Orwell", 9.99"#,
    );

    shelf += &wishlist;
    println!("after merge: {} books (full: {})", shelf.size(), shelf.is_full());

    let dune = Book::new("9780441013593", "Dune", "Frank Herbert", 9.99);
    match shelf.find(&dune) {
        i if i == shelf.size() => println!("Dune is not on the shelf"),
        i => println!("Dune is at position {i}"),
    }

    println!("average price: {:.2}", shelf.avg());
    println!("{}", shelf.to_md()?);
    Ok(())
}
