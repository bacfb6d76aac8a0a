use crate::error::{LibrisError, Result};
use crate::index::{index_books, DisplayBook, DisplayIndex};
use crate::model::{Card, Partner};
use crate::store::DataStore;
use uuid::Uuid;

pub fn indexed_books<S: DataStore>(store: &S) -> Result<Vec<DisplayBook>> {
    let books = store.list_books()?;
    Ok(index_books(books))
}

pub fn resolve_indexes<S: DataStore>(
    store: &S,
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, Uuid)>> {
    let indexed = indexed_books(store)?;

    indexes
        .iter()
        .map(|idx| {
            indexed
                .iter()
                .find(|db| &db.index == idx)
                .map(|db| (idx.clone(), db.book.card.id))
                .ok_or_else(|| LibrisError::Api(format!("Index {} not found in catalog", idx)))
        })
        .collect()
}

pub fn books_by_indexes<S: DataStore>(
    store: &S,
    indexes: &[DisplayIndex],
) -> Result<Vec<DisplayBook>> {
    let resolved = resolve_indexes(store, indexes)?;
    let mut books = Vec::with_capacity(resolved.len());
    for (index, id) in resolved {
        let book = store.get_book(&id)?;
        books.push(DisplayBook { book, index });
    }
    Ok(books)
}

/// Looks a partner up by exact name. Names are kept unique by
/// `partners::add`, so this is unambiguous.
pub fn partner_by_name<S: DataStore>(store: &S, name: &str) -> Result<Partner> {
    store
        .list_partners()?
        .into_iter()
        .find(|p| p.name == name)
        .ok_or_else(|| LibrisError::Api(format!("No partner named '{}'", name)))
}

/// All catalog cards, for uniqueness validation.
pub fn all_cards<S: DataStore>(store: &S) -> Result<Vec<Card>> {
    Ok(store.list_books()?.into_iter().map(|b| b.card).collect())
}
