//! # Storage Layer
//!
//! This module defines the storage abstraction for libris. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Catalog cards in `catalog.json`, partners in `partners.json`
//!   - Book descriptions in individual files: `book-{uuid}.txt`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <catalog root>/
//! ├── catalog.json        # Catalog cards, keyed by book id
//! ├── partners.json       # Publishers and authors, keyed by partner id
//! ├── book-{uuid}.txt     # Long-form description, one file per book
//! └── config.json         # Catalog configuration
//! ```
//!
//! Cards and descriptions are stored separately so listing the catalog never
//! reads the description files.

use crate::error::Result;
use crate::model::{Book, Partner};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Report from the `doctor` operation.
#[derive(Debug, Default)]
pub struct DoctorReport {
    pub recreated_descriptions: usize,
    pub orphaned_descriptions: usize,
}

/// Abstract interface for catalog storage.
///
/// Implementations must handle persistence, retrieval, and consistency for
/// books and partners. Validation is not their concern; the command layer
/// runs it before calling in.
pub trait DataStore {
    /// Save a book (create or update)
    fn save_book(&mut self, book: &Book) -> Result<()>;

    /// Get a book by id
    fn get_book(&self, id: &Uuid) -> Result<Book>;

    /// List all books
    fn list_books(&self) -> Result<Vec<Book>>;

    /// Delete a book permanently
    fn delete_book(&mut self, id: &Uuid) -> Result<()>;

    /// Save a partner (create or update)
    fn save_partner(&mut self, partner: &Partner) -> Result<()>;

    /// Get a partner by id
    fn get_partner(&self, id: &Uuid) -> Result<Partner>;

    /// List all partners
    fn list_partners(&self) -> Result<Vec<Partner>>;

    /// Verify and fix consistency issues
    fn doctor(&mut self) -> Result<DoctorReport>;
}
