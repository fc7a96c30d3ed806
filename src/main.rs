use book_list::{render, BookList, ExportFormat, Statistics};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Load a file of quoted book records into a fixed-capacity list and print it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one `"<isbn>", "<title>", "<author>", <price>` record per line
    #[arg(env = "BOOK_LIST_PATH")]
    path: PathBuf,

    /// Maximum number of books to keep; the rest of the file is ignored
    #[arg(short, long, env = "BOOK_LIST_CAPACITY", default_value_t = 100)]
    capacity: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
    format: ExportFormat,

    /// Also print the average price and the 25th/50th/75th percentiles
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut books = BookList::new(args.capacity);
    books.load_from_file(&args.path);

    print!("{}", render(&books, args.format)?);

    if args.stats {
        let quartiles = books.calculate_percentile((), &[0.25, 0.5, 0.75]);
        println!("books: {} / {}", books.size(), books.capacity());
        println!("average price: {:.2}", books.avg());
        println!(
            "price quartiles: {}",
            quartiles
                .iter()
                .map(|q| format!("{q:.2}"))
                .collect::<Vec<_>>()
                .join(" / ")
        );
    }

    Ok(())
}
