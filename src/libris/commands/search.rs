use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayBook;
use crate::store::DataStore;

use super::helpers::indexed_books;

pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let indexed = indexed_books(store)?;
    let term_lower = term.to_lowercase();

    let mut matches: Vec<(DisplayBook, u8)> = indexed
        .into_iter()
        .filter_map(|db| {
            let card = &db.book.card;
            let title_lower = card.title.to_lowercase();
            let short_lower = card.short_title.as_deref().unwrap_or("").to_lowercase();
            let notes_lower = card.notes.as_deref().unwrap_or("").to_lowercase();

            let score = if title_lower == term_lower {
                1
            } else if title_lower.contains(&term_lower) || short_lower.contains(&term_lower) {
                2
            } else if notes_lower.contains(&term_lower) {
                3
            } else {
                return None;
            };

            Some((db, score))
        })
        .collect();

    matches.sort_by(|(a, score_a), (b, score_b)| match score_a.cmp(score_b) {
        std::cmp::Ordering::Equal => {
            let len_a = a.book.card.title.len();
            let len_b = b.book.card.title.len();
            match len_a.cmp(&len_b) {
                std::cmp::Ordering::Equal => a.book.card.title.cmp(&b.book.card.title),
                ord => ord,
            }
        }
        ord => ord,
    });

    let listed = matches.into_iter().map(|(db, _)| db).collect();
    Ok(CmdResult::default().with_listed_books(listed))
}
