use crate::age::{self, AgeQuery};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::BookState;
use crate::store::DataStore;
use chrono::NaiveDate;

use super::helpers::indexed_books;

/// Lists the catalog in canonical order. An age condition is rewritten into
/// a release-date comparison before filtering, so it selects exactly the
/// books whose computed age satisfies it.
pub fn run<S: DataStore>(
    store: &S,
    today: NaiveDate,
    state: Option<BookState>,
    age_query: Option<&AgeQuery>,
) -> Result<CmdResult> {
    let mut listed = indexed_books(store)?;

    if let Some(state) = state {
        listed.retain(|db| db.book.card.state == state);
    }

    if let Some(query) = age_query {
        let predicate = query.to_predicate(today);
        listed.retain(|db| predicate.matches(db.book.card.date_release));
    }

    age::compute(today, listed.iter_mut().map(|db| &mut db.book));

    Ok(CmdResult::default().with_listed_books(listed))
}
