use crate::commands::{helpers, BookPatch, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::DataStore;
use crate::validate;
use chrono::{NaiveDate, Utc};

use super::helpers::resolve_indexes;

pub fn run<S: DataStore>(
    store: &mut S,
    today: NaiveDate,
    index: &DisplayIndex,
    patch: &BookPatch,
) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, std::slice::from_ref(index))?;
    let (display_index, id) = resolved
        .into_iter()
        .next()
        .ok_or_else(|| crate::error::LibrisError::Api(format!("Index {} not found", index)))?;

    let mut book = store.get_book(&id)?;
    let card = &mut book.card;

    if let Some(title) = &patch.title {
        card.title = title.clone();
    }
    if let Some(short_title) = &patch.short_title {
        card.short_title = Some(short_title.clone());
    }
    if let Some(notes) = &patch.notes {
        card.notes = Some(notes.clone());
    }
    if let Some(state) = patch.state {
        card.state = state;
    }
    if let Some(out_of_print) = patch.out_of_print {
        card.out_of_print = out_of_print;
    }
    if patch.clear_release {
        card.date_release = None;
    } else if let Some(date) = patch.date_release {
        card.date_release = Some(date);
    }
    if let Some(pages) = patch.pages {
        card.pages = Some(pages);
    }
    if let Some(rating) = patch.reader_rating {
        card.reader_rating = Some(rating);
    }
    if let Some(cost) = patch.cost_price {
        card.cost_price = Some(cost);
    }
    if let Some(price) = patch.retail_price {
        card.retail_price = Some(price);
    }
    if let Some(currency) = &patch.currency {
        card.currency = Some(currency.clone());
    }
    if let Some(name) = &patch.publisher {
        card.publisher_id = Some(helpers::partner_by_name(store, name)?.id);
    }
    if let Some(names) = &patch.authors {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            ids.push(helpers::partner_by_name(store, name)?.id);
        }
        card.author_ids = ids;
    }
    if let Some(description) = &patch.description {
        book.description = description.clone();
    }

    let others = helpers::all_cards(store)?;
    validate::validate_card(today, &book.card, &others)?;

    book.card.updated_at = Utc::now();
    store.save_book(&book)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book updated ({}): {}",
        display_index,
        book.card.display_name()
    )));
    result.affected_books.push(book);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibrisError;
    use crate::model::BookState;
    use crate::store::memory::fixtures::CatalogFixture;
    use crate::validate::Violation;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn updates_selected_fields_only() {
        let mut store = CatalogFixture::new()
            .with_book("Dune", Some(date(2023, 1, 1)))
            .store;

        let patch = BookPatch {
            pages: Some(412),
            state: Some(BookState::Lost),
            ..BookPatch::default()
        };
        let result = run(
            &mut store,
            date(2024, 1, 10),
            &DisplayIndex::Available(1),
            &patch,
        )
        .unwrap();

        let card = &result.affected_books[0].card;
        assert_eq!(card.title, "Dune");
        assert_eq!(card.pages, Some(412));
        assert_eq!(card.state, BookState::Lost);
        assert_eq!(card.date_release, Some(date(2023, 1, 1)));
    }

    #[test]
    fn renaming_to_an_existing_title_is_rejected() {
        let mut store = CatalogFixture::new()
            .with_book("Dune", Some(date(2023, 2, 1)))
            .with_book("Solaris", Some(date(2023, 1, 1)))
            .store;

        let patch = BookPatch {
            title: Some("Dune".to_string()),
            ..BookPatch::default()
        };
        // Canonical order puts Dune (newer) at 1, Solaris at 2.
        let err = run(
            &mut store,
            date(2024, 1, 10),
            &DisplayIndex::Available(2),
            &patch,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LibrisError::Validation(Violation::DuplicateTitle(_))
        ));
    }

    #[test]
    fn keeping_own_title_is_not_a_collision() {
        let mut store = CatalogFixture::new()
            .with_book("Dune", Some(date(2023, 1, 1)))
            .store;

        let patch = BookPatch {
            title: Some("Dune".to_string()),
            notes: Some("first edition".to_string()),
            ..BookPatch::default()
        };
        let result = run(
            &mut store,
            date(2024, 1, 10),
            &DisplayIndex::Available(1),
            &patch,
        )
        .unwrap();
        assert_eq!(
            result.affected_books[0].card.notes.as_deref(),
            Some("first edition")
        );
    }

    #[test]
    fn clear_release_unsets_the_date() {
        let mut store = CatalogFixture::new()
            .with_book("Dune", Some(date(2023, 1, 1)))
            .store;

        let patch = BookPatch {
            clear_release: true,
            ..BookPatch::default()
        };
        let result = run(
            &mut store,
            date(2024, 1, 10),
            &DisplayIndex::Available(1),
            &patch,
        )
        .unwrap();
        assert_eq!(result.affected_books[0].card.date_release, None);
    }

    #[test]
    fn future_release_date_is_rejected() {
        let mut store = CatalogFixture::new()
            .with_book("Dune", Some(date(2023, 1, 1)))
            .store;

        let patch = BookPatch {
            date_release: Some(date(2025, 1, 1)),
            ..BookPatch::default()
        };
        assert!(run(
            &mut store,
            date(2024, 1, 10),
            &DisplayIndex::Available(1),
            &patch,
        )
        .is_err());
    }
}
