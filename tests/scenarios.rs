use book_list::{Book, BookList, BookReader};
use std::fs;
use tempfile::TempDir;

fn record(isbn: &str, title: &str, author: &str, price: &str) -> String {
    format!("\"{isbn}\", \"{title}\", \"{author}\", {price}\n")
}

#[test]
fn near_equal_books_are_found_at_their_own_positions() {
    let mut list = BookList::new(3);
    let input = record("1", "T", "A", "9.99") + &record("1", "T", "A", "9.9901");
    list.parse_str(&input);
    assert_eq!(list.size(), 2);

    let first = list[0].clone();
    let second = list[1].clone();
    assert!(first == second);
    assert_eq!(list.find(&first), 0);
    assert_eq!(list.find(&second), 1);
}

#[test]
fn parse_bulk_drops_records_past_capacity() {
    let input = record("1", "One", "A", "1.5")
        + &record("2", "Two", "B", "2.5")
        + &record("3", "Three", "C", "3.5");
    let mut list = BookList::new(2);
    list.parse_str(&input);
    assert_eq!(list.size(), 2);
    assert_eq!(list[0].title(), "One");
    assert_eq!(list[1].title(), "Two");
}

#[test]
fn parse_bulk_exactly_at_capacity_fills_the_list() {
    let input = record("1", "One", "A", "1") + &record("2", "Two", "B", "2");
    let mut list = BookList::new(2);
    list.parse_str(&input);
    assert_eq!(list.size(), 2);
    assert!(list.is_full());
}

#[test]
fn parse_bulk_keeps_records_before_unterminated_quote() {
    let input = record("1", "One", "A", "1")
        + &record("2", "Two", "B", "2")
        + "\"3\", \"Never closed, 3.0\n";
    let mut list = BookList::new(5);
    list.parse_str(&input);
    assert_eq!(list.size(), 2);
    assert_eq!(list[1].isbn(), "2");
}

#[test]
fn load_from_nonexistent_file_is_empty() {
    let mut list = BookList::new(5);
    list.load_from_file("nonexistent.txt");
    assert_eq!(list.size(), 0);
}

#[test]
fn load_from_file_counts_records_read() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("books.txt");
    let contents = record("1", "One", "A", "1")
        + &record("2", "Two", "B", "2")
        + "\"3\", \"Three\" oops";
    fs::write(&path, contents).unwrap();

    let mut list = BookList::new(5);
    list.load_from_file(&path);
    assert_eq!(list.size(), 2);

    let mut full = BookList::new(1);
    full.load_from_file(&path);
    assert_eq!(full.size(), 1);
    assert_eq!(full[0].title(), "One");
}

#[test]
fn records_may_be_separated_by_any_whitespace() {
    let input = "\"1\",\"One\",\"A\",1 \"2\",  \"Two\",\t\"B\",\n2\t\t\"3\", \"Three\", \"C\", 3";
    let mut list = BookList::new(5);
    list.parse_str(input);
    assert_eq!(list.size(), 3);
    assert_eq!(list[1], Book::new("2", "Two", "B", 2.0));
}

#[test]
fn format_bulk_writes_one_numbered_line_per_book() {
    let mut list = BookList::new(4);
    list.parse_str(&(record("1", "One", "A", "1.25") + &record("2", "Two", "B", "2")));

    let text = list.to_string();
    assert!(text.starts_with('\n'));
    let lines: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("    0:  "));
    assert!(lines[1].starts_with("    1:  "));
    assert_eq!(lines[0], r#"    0:  "1",  "One",  "A",  1.25"#);
}

#[test]
fn formatted_listing_entries_parse_back() {
    let mut list = BookList::new(3);
    list.parse_str(&record("1", "The \"\"Quoted\"\" One", "A", "12.5"));
    assert_eq!(list[0].title(), "The \"Quoted\" One");

    let line = list.to_string();
    let entry = line.trim_start().trim_start_matches("0:").trim_start();
    let books: Vec<Book> = BookReader::new(entry).map(Result::unwrap).collect();
    assert_eq!(books, vec![list[0].clone()]);
}

#[test]
fn append_all_then_find() {
    let mut shelf = BookList::new(3);
    shelf.parse_str(&record("1", "One", "A", "1"));
    let mut more = BookList::new(3);
    more.parse_str(
        &(record("2", "Two", "B", "2")
            + &record("3", "Three", "C", "3")
            + &record("4", "Four", "D", "4")),
    );

    shelf += &more;
    assert_eq!(shelf.size(), 3);
    assert_eq!(shelf.find(&Book::new("3", "Three", "C", 3.0)), 2);
    assert_eq!(shelf.find(&Book::new("4", "Four", "D", 4.0)), shelf.size());
}

#[test]
fn find_reports_the_first_of_duplicate_books() {
    let mut list = BookList::new(4);
    list.parse_str(
        &(record("7", "Seven", "G", "7.77")
            + &record("8", "Eight", "H", "8")
            + &record("7", "Seven", "G", "7.77")),
    );
    assert_eq!(list.size(), 3);
    assert_eq!(list.find(&Book::new("7", "Seven", "G", 7.77)), 0);
}
