use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(about = "Command-line library catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use a specific catalog directory
    #[arg(long, global = true, value_name = "DIR")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the catalog
    #[command(alias = "a")]
    Add {
        /// Book title (must be unique)
        title: String,

        /// Short title used in narrow listings
        #[arg(long)]
        short_title: Option<String>,

        /// Release date (YYYY-MM-DD, must not be in the future)
        #[arg(long)]
        released: Option<NaiveDate>,

        /// Number of pages
        #[arg(long)]
        pages: Option<u32>,

        /// Reader average rating
        #[arg(long)]
        rating: Option<f64>,

        /// Acquisition cost
        #[arg(long)]
        cost: Option<f64>,

        /// Retail price
        #[arg(long)]
        price: Option<f64>,

        /// Currency code for the prices
        #[arg(long)]
        currency: Option<String>,

        /// Publisher name (must be a known partner)
        #[arg(long)]
        publisher: Option<String>,

        /// Author name (repeatable, must be known partners)
        #[arg(long = "author")]
        authors: Vec<String>,

        /// Initial state: draft, available or lost
        #[arg(long)]
        state: Option<String>,

        /// Internal notes
        #[arg(long)]
        notes: Option<String>,

        /// Long-form description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List books
    #[command(alias = "ls")]
    List {
        /// Filter by state: draft, available or lost
        #[arg(long)]
        state: Option<String>,

        /// Filter by days since release, e.g. ">30" or "<=7"
        #[arg(long)]
        age: Option<String>,

        /// Search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// View one or more books in full
    #[command(alias = "v")]
    View {
        /// Indexes of the books (e.g. 1 d1 l1, ranges like 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Update fields on a book
    #[command(alias = "e")]
    Update {
        /// Index of the book (e.g. 1, d1, l1)
        index: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        short_title: Option<String>,

        /// Release date (YYYY-MM-DD)
        #[arg(long)]
        released: Option<NaiveDate>,

        /// Unset the release date
        #[arg(long, conflicts_with = "released")]
        clear_released: bool,

        #[arg(long)]
        pages: Option<u32>,

        #[arg(long)]
        rating: Option<f64>,

        #[arg(long)]
        cost: Option<f64>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        currency: Option<String>,

        #[arg(long)]
        publisher: Option<String>,

        /// Replace the author list (repeatable)
        #[arg(long = "author")]
        authors: Vec<String>,

        /// New state: draft, available or lost
        #[arg(long)]
        state: Option<String>,

        /// Mark as in or out of print (true/false)
        #[arg(long)]
        out_of_print: Option<bool>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Set a book's age in days (rewrites its release date)
    Age {
        /// Index of the book (e.g. 1, d1, l1)
        index: String,

        /// Days since release; the release date becomes today minus this
        days: f64,
    },

    /// Delete one or more books permanently
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the books (e.g. 1 3 5, ranges like 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Search books by title or notes
    Search { term: String },

    /// Manage publishers and authors
    Partner {
        #[command(subcommand)]
        action: PartnerCommands,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (date-format, default-state)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the catalog directory
    Init,

    /// Verify and repair catalog consistency
    Doctor,
}

#[derive(Subcommand, Debug)]
pub enum PartnerCommands {
    /// Add a publisher or author
    Add {
        name: String,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// List partners
    #[command(alias = "ls")]
    List,

    /// Show the books a partner published or authored
    Books { name: String },
}
