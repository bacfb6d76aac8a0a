//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all libris operations, regardless of the UI being used.
//!
//! It dispatches to the right command, normalizes inputs (index strings and
//! ranges → [`DisplayIndex`] values, age strings → [`AgeQuery`]), supplies
//! the reference "today" for all age arithmetic, and returns structured
//! `Result<CmdResult>` values. Business logic stays in `commands/*.rs`;
//! presentation stays with the caller.
//!
//! `LibrisApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::age::AgeQuery;
use crate::commands;
use crate::error::{LibrisError, Result};
use crate::index::{parse_index_or_range, DisplayIndex};
use crate::model::BookState;
use crate::store::DataStore;
use std::path::PathBuf;

/// The main API facade for libris operations.
pub struct LibrisApi<S: DataStore> {
    store: S,
    root: PathBuf,
}

impl<S: DataStore> LibrisApi<S> {
    pub fn new(store: S, root: PathBuf) -> Self {
        Self { store, root }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn add_book(
        &mut self,
        new: commands::NewBook,
        default_state: BookState,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, today(), new, default_state)
    }

    pub fn list_books(
        &self,
        state: Option<BookState>,
        age: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let age_query = age.map(parse_age).transpose()?;
        commands::list::run(&self.store, today(), state, age_query.as_ref())
    }

    pub fn search_books(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn view_books<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::view::run(&self.store, today(), &indexes)
    }

    pub fn update_book(
        &mut self,
        index: &str,
        patch: &commands::BookPatch,
    ) -> Result<commands::CmdResult> {
        let index = parse_single_index(index)?;
        commands::update::run(&mut self.store, today(), &index, patch)
    }

    pub fn set_age(&mut self, index: &str, days: f64) -> Result<commands::CmdResult> {
        let index = parse_single_index(index)?;
        commands::set_age::run(&mut self.store, today(), &index, days)
    }

    pub fn delete_books<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::delete::run(&mut self.store, &indexes)
    }

    pub fn add_partner(
        &mut self,
        name: String,
        city: Option<String>,
        email: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::partners::add(&mut self.store, name, city, email)
    }

    pub fn list_partners(&self) -> Result<commands::CmdResult> {
        commands::partners::list(&self.store)
    }

    pub fn partner_books(&self, name: &str) -> Result<commands::CmdResult> {
        commands::partners::books(&self.store, name)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.root, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.root)
    }

    pub fn doctor(&mut self) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store)
    }
}

/// Reference date for all age computations: the local calendar day.
fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn parse_age(s: &str) -> Result<AgeQuery> {
    s.parse().map_err(LibrisError::Api)
}

fn parse_single_index(s: &str) -> Result<DisplayIndex> {
    s.parse().map_err(LibrisError::Api)
}

fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    let mut indexes = Vec::new();
    for input in inputs {
        let expanded = parse_index_or_range(input.as_ref()).map_err(LibrisError::Api)?;
        indexes.extend(expanded);
    }
    Ok(indexes)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::partners::PartnerBooks;
pub use commands::{BookPatch, CmdMessage, CmdResult, MessageLevel, NewBook};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> LibrisApi<InMemoryStore> {
        LibrisApi::new(InMemoryStore::new(), PathBuf::from("/tmp/unused"))
    }

    #[test]
    fn dispatches_add_and_list() {
        let mut api = api();
        api.add_book(NewBook::titled("Dune"), BookState::Available)
            .unwrap();

        let result = api.list_books(None, None).unwrap();
        assert_eq!(result.listed_books.len(), 1);
    }

    #[test]
    fn expands_index_ranges() {
        let mut api = api();
        for title in ["A", "B", "C"] {
            api.add_book(NewBook::titled(title), BookState::Available)
                .unwrap();
        }

        let result = api.view_books(&["1-3"]).unwrap();
        assert_eq!(result.listed_books.len(), 3);
    }

    #[test]
    fn rejects_malformed_age_conditions() {
        let api = api();
        assert!(matches!(
            api.list_books(None, Some("oldish")),
            Err(LibrisError::Api(_))
        ));
    }
}
