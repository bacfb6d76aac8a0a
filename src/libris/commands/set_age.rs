use crate::age;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::index::DisplayIndex;
use crate::store::DataStore;
use crate::validate;
use chrono::{NaiveDate, Utc};

use super::helpers::resolve_indexes;

/// Writes the derived age through the inverse conversion: the book's release
/// date becomes `today - days`. Books without a release date are skipped
/// (the age has nothing to anchor to), and the resulting date is validated
/// before saving, so a negative age is rejected as a future release.
pub fn run<S: DataStore>(
    store: &mut S,
    today: NaiveDate,
    index: &DisplayIndex,
    days: f64,
) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, std::slice::from_ref(index))?;
    let (display_index, id) = resolved
        .into_iter()
        .next()
        .ok_or_else(|| LibrisError::Api(format!("Index {} not found", index)))?;

    let mut book = store.get_book(&id)?;
    let mut result = CmdResult::default();

    if book.card.date_release.is_none() {
        result.add_message(CmdMessage::warning(format!(
            "Book {} has no release date; age not applied",
            display_index
        )));
        return Ok(result);
    }

    if age::date_before(today, days).is_none() {
        return Err(LibrisError::Api(format!("Day count out of range: {}", days)));
    }

    book.card.age_days = Some(days);
    age::inverse(today, std::iter::once(&mut book));

    let others = crate::commands::helpers::all_cards(store)?;
    validate::validate_card(today, &book.card, &others)?;

    book.card.updated_at = Utc::now();
    store.save_book(&book)?;

    result.add_message(CmdMessage::success(format!(
        "Release date set ({}): {}",
        display_index,
        book.card.display_name()
    )));
    result.affected_books.push(book);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Violation;
    use crate::store::memory::fixtures::CatalogFixture;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rewrites_the_release_date() {
        let mut store = CatalogFixture::new()
            .with_book("Dune", Some(date(2023, 6, 1)))
            .store;

        let result = run(
            &mut store,
            date(2024, 1, 10),
            &DisplayIndex::Available(1),
            3.0,
        )
        .unwrap();
        assert_eq!(
            result.affected_books[0].card.date_release,
            Some(date(2024, 1, 7))
        );
    }

    #[test]
    fn skips_books_without_a_release_date() {
        let mut store = CatalogFixture::new().with_book("Undated", None).store;

        let result = run(
            &mut store,
            date(2024, 1, 10),
            &DisplayIndex::Available(1),
            3.0,
        )
        .unwrap();
        assert!(result.affected_books.is_empty());

        let books = store.list_books().unwrap();
        assert_eq!(books[0].card.date_release, None);
    }

    #[test]
    fn rejects_day_counts_outside_the_calendar_range() {
        let mut store = CatalogFixture::new()
            .with_book("Dune", Some(date(2023, 6, 1)))
            .store;

        let err = run(
            &mut store,
            date(2024, 1, 10),
            &DisplayIndex::Available(1),
            1e300,
        )
        .unwrap_err();
        assert!(matches!(err, LibrisError::Api(_)));

        let books = store.list_books().unwrap();
        assert_eq!(books[0].card.date_release, Some(date(2023, 6, 1)));
    }

    #[test]
    fn negative_age_yields_a_rejected_future_date() {
        let mut store = CatalogFixture::new()
            .with_book("Dune", Some(date(2023, 6, 1)))
            .store;

        let err = run(
            &mut store,
            date(2024, 1, 10),
            &DisplayIndex::Available(1),
            -5.0,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LibrisError::Validation(Violation::FutureReleaseDate(_))
        ));
    }
}
