use crate::age;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::DataStore;
use chrono::NaiveDate;

use super::helpers::books_by_indexes;

/// Full cards for the selected indexes, with ages computed and the books'
/// publishers resolved so the caller can show publisher name and city.
pub fn run<S: DataStore>(store: &S, today: NaiveDate, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let mut listed = books_by_indexes(store, indexes)?;
    age::compute(today, listed.iter_mut().map(|db| &mut db.book));

    let mut result = CmdResult::default();
    for db in &listed {
        if let Some(publisher_id) = db.book.card.publisher_id {
            let partner = store.get_partner(&publisher_id)?;
            if !result.partners.iter().any(|p| p.id == partner.id) {
                result.partners.push(partner);
            }
        }
        for author_id in &db.book.card.author_ids {
            let partner = store.get_partner(author_id)?;
            if !result.partners.iter().any(|p| p.id == partner.id) {
                result.partners.push(partner);
            }
        }
    }

    Ok(result.with_listed_books(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, NewBook};
    use crate::model::BookState;
    use crate::store::memory::fixtures::CatalogFixture;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn views_selected_books_with_age() {
        let store = CatalogFixture::new()
            .with_book("Dune", Some(date(2024, 1, 5)))
            .store;

        let result = run(&store, date(2024, 1, 10), &[DisplayIndex::Available(1)]).unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].book.card.age_days, Some(5.0));
    }

    #[test]
    fn resolves_publisher_for_display() {
        let mut store = CatalogFixture::new()
            .with_partner("Ace Books", Some("New York"))
            .store;
        let mut new = NewBook::titled("Dune");
        new.publisher = Some("Ace Books".to_string());
        add::run(&mut store, date(2024, 1, 10), new, BookState::Available).unwrap();

        let result = run(&store, date(2024, 1, 10), &[DisplayIndex::Available(1)]).unwrap();
        assert_eq!(result.partners.len(), 1);
        assert_eq!(result.partners[0].name, "Ace Books");
        assert_eq!(result.partners[0].city.as_deref(), Some("New York"));
    }

    #[test]
    fn unknown_index_is_an_error() {
        let store = CatalogFixture::new().store;
        assert!(run(&store, date(2024, 1, 10), &[DisplayIndex::Available(1)]).is_err());
    }
}
