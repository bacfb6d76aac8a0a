use super::{DataStore, DoctorReport};
use crate::error::{LibrisError, Result};
use crate::model::{Book, Partner};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: HashMap<Uuid, Book>,
    partners: HashMap<Uuid, Partner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_book(&mut self, book: &Book) -> Result<()> {
        self.books.insert(book.card.id, book.clone());
        Ok(())
    }

    fn get_book(&self, id: &Uuid) -> Result<Book> {
        self.books
            .get(id)
            .cloned()
            .ok_or(LibrisError::BookNotFound(*id))
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.values().cloned().collect())
    }

    fn delete_book(&mut self, id: &Uuid) -> Result<()> {
        if self.books.remove(id).is_none() {
            return Err(LibrisError::BookNotFound(*id));
        }
        Ok(())
    }

    fn save_partner(&mut self, partner: &Partner) -> Result<()> {
        self.partners.insert(partner.id, partner.clone());
        Ok(())
    }

    fn get_partner(&self, id: &Uuid) -> Result<Partner> {
        self.partners
            .get(id)
            .cloned()
            .ok_or(LibrisError::PartnerNotFound(*id))
    }

    fn list_partners(&self) -> Result<Vec<Partner>> {
        Ok(self.partners.values().cloned().collect())
    }

    fn doctor(&mut self) -> Result<DoctorReport> {
        // Nothing can drift in memory.
        Ok(DoctorReport::default())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookState;
    use chrono::NaiveDate;

    pub struct CatalogFixture {
        pub store: InMemoryStore,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(mut self, title: &str, release: Option<NaiveDate>) -> Self {
            let mut book = Book::new(title.to_string(), format!("About {}", title));
            book.card.state = BookState::Available;
            book.card.date_release = release;
            self.store.save_book(&book).unwrap();
            self
        }

        pub fn with_draft(mut self, title: &str) -> Self {
            let book = Book::new(title.to_string(), String::new());
            self.store.save_book(&book).unwrap();
            self
        }

        pub fn with_lost_book(mut self, title: &str, release: Option<NaiveDate>) -> Self {
            let mut book = Book::new(title.to_string(), String::new());
            book.card.state = BookState::Lost;
            book.card.date_release = release;
            self.store.save_book(&book).unwrap();
            self
        }

        pub fn with_partner(mut self, name: &str, city: Option<&str>) -> Self {
            let mut partner = Partner::new(name.to_string());
            partner.city = city.map(str::to_string);
            self.store.save_partner(&partner).unwrap();
            self
        }
    }
}
