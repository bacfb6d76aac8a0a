use crate::commands::{helpers, CmdMessage, CmdResult, NewBook};
use crate::error::Result;
use crate::model::{Book, BookState, Card};
use crate::store::DataStore;
use crate::validate;
use chrono::NaiveDate;

pub fn run<S: DataStore>(
    store: &mut S,
    today: NaiveDate,
    new: NewBook,
    default_state: BookState,
) -> Result<CmdResult> {
    let mut card = Card::new(new.title);
    card.short_title = new.short_title;
    card.notes = new.notes;
    card.state = new.state.unwrap_or(default_state);
    card.date_release = new.date_release;
    card.pages = new.pages;
    card.reader_rating = new.reader_rating;
    card.cost_price = new.cost_price;
    card.retail_price = new.retail_price;
    card.currency = new.currency;

    if let Some(name) = &new.publisher {
        card.publisher_id = Some(helpers::partner_by_name(store, name)?.id);
    }
    for name in &new.authors {
        card.author_ids.push(helpers::partner_by_name(store, name)?.id);
    }

    let others = helpers::all_cards(store)?;
    validate::validate_card(today, &card, &others)?;

    let book = Book {
        card,
        description: new.description,
    };
    store.save_book(&book)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added: {}",
        book.card.display_name()
    )));
    result.affected_books.push(book);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibrisError;
    use crate::store::memory::InMemoryStore;
    use crate::validate::Violation;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn adds_a_book_with_defaults() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            today(),
            NewBook::titled("Dune"),
            BookState::Draft,
        )
        .unwrap();

        assert_eq!(result.affected_books.len(), 1);
        let book = &result.affected_books[0];
        assert_eq!(book.card.title, "Dune");
        assert_eq!(book.card.state, BookState::Draft);
        assert_eq!(store.list_books().unwrap().len(), 1);
    }

    #[test]
    fn rejects_duplicate_titles() {
        let mut store = InMemoryStore::new();
        run(
            &mut store,
            today(),
            NewBook::titled("Dune"),
            BookState::Draft,
        )
        .unwrap();

        let err = run(
            &mut store,
            today(),
            NewBook::titled("Dune"),
            BookState::Draft,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LibrisError::Validation(Violation::DuplicateTitle(_))
        ));
        assert_eq!(store.list_books().unwrap().len(), 1);
    }

    #[test]
    fn rejects_future_release_dates() {
        let mut store = InMemoryStore::new();
        let mut new = NewBook::titled("Tomorrow");
        new.date_release = NaiveDate::from_ymd_opt(2024, 1, 11);

        let err = run(&mut store, today(), new, BookState::Draft).unwrap_err();
        assert!(matches!(
            err,
            LibrisError::Validation(Violation::FutureReleaseDate(_))
        ));
        assert!(store.list_books().unwrap().is_empty());
    }

    #[test]
    fn resolves_publisher_and_authors_by_name() {
        let mut store = crate::store::memory::fixtures::CatalogFixture::new()
            .with_partner("Ace Books", Some("New York"))
            .with_partner("Frank Herbert", None)
            .store;

        let mut new = NewBook::titled("Dune");
        new.publisher = Some("Ace Books".to_string());
        new.authors = vec!["Frank Herbert".to_string()];

        let result = run(&mut store, today(), new, BookState::Available).unwrap();
        let card = &result.affected_books[0].card;
        assert!(card.publisher_id.is_some());
        assert_eq!(card.author_ids.len(), 1);
    }

    #[test]
    fn unknown_partner_name_is_an_error() {
        let mut store = InMemoryStore::new();
        let mut new = NewBook::titled("Dune");
        new.publisher = Some("Nobody".to_string());

        assert!(matches!(
            run(&mut store, today(), new, BookState::Draft),
            Err(LibrisError::Api(_))
        ));
    }
}
