use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::DataStore;

use super::helpers::resolve_indexes;

pub fn run<S: DataStore>(store: &mut S, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, indexes)?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        let book = store.get_book(&id)?;
        store.delete_book(&id)?;
        result.add_message(CmdMessage::success(format!(
            "Book removed ({}): {}",
            display_index,
            book.card.display_name()
        )));
        result.affected_books.push(book);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn deletes_by_index() {
        let mut store = CatalogFixture::new()
            .with_book("Dune", Some(date(2023, 1, 1)))
            .with_book("Solaris", Some(date(2022, 1, 1)))
            .store;

        run(&mut store, &[DisplayIndex::Available(2)]).unwrap();

        let remaining = store.list_books().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].card.title, "Dune");
    }

    #[test]
    fn unknown_index_deletes_nothing() {
        let mut store = CatalogFixture::new()
            .with_book("Dune", Some(date(2023, 1, 1)))
            .store;

        assert!(run(&mut store, &[DisplayIndex::Lost(1)]).is_err());
        assert_eq!(store.list_books().unwrap().len(), 1);
    }
}
