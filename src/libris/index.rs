//! Display indexing and the canonical catalog order.
//!
//! Users never see UUIDs. Books are addressed by short display indexes,
//! bucketed by state: available books get bare numbers (`1`, `2`, ...),
//! drafts `d1`, `d2`, ..., lost books `l1`, `l2`, .... Indexes are assigned
//! in canonical order and are stable for a given catalog state.

use crate::model::{Book, BookState, Card};
use std::cmp::Ordering;
use std::str::FromStr;

/// A user-facing index for a book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Available(usize),
    Draft(usize),
    Lost(usize),
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayIndex::Available(i) => write!(f, "{}", i),
            DisplayIndex::Draft(i) => write!(f, "d{}", i),
            DisplayIndex::Lost(i) => write!(f, "l{}", i),
        }
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('d') {
            if let Ok(n) = rest.parse() {
                return Ok(DisplayIndex::Draft(n));
            }
        }
        if let Some(rest) = s.strip_prefix('l') {
            if let Ok(n) = rest.parse() {
                return Ok(DisplayIndex::Lost(n));
            }
        }
        if let Ok(n) = s.parse() {
            return Ok(DisplayIndex::Available(n));
        }
        Err(format!("Invalid index format: {}", s))
    }
}

#[derive(Debug, Clone)]
pub struct DisplayBook {
    pub book: Book,
    pub index: DisplayIndex,
}

/// Canonical catalog order: newest release first, undated books last, ties
/// broken by title.
pub fn canonical_order(a: &Card, b: &Card) -> Ordering {
    match (a.date_release, b.date_release) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}

/// Assigns display indexes to a list of books.
///
/// The returned list is in canonical order with each state bucket numbered
/// independently: available first as `1..`, then drafts as `d1..`, then lost
/// books as `l1..`.
pub fn index_books(mut books: Vec<Book>) -> Vec<DisplayBook> {
    books.sort_by(|a, b| canonical_order(&a.card, &b.card));

    let mut results = Vec::with_capacity(books.len());

    let mut available_idx = 1;
    for book in &books {
        if book.card.state == BookState::Available {
            results.push(DisplayBook {
                book: book.clone(),
                index: DisplayIndex::Available(available_idx),
            });
            available_idx += 1;
        }
    }

    let mut draft_idx = 1;
    for book in &books {
        if book.card.state == BookState::Draft {
            results.push(DisplayBook {
                book: book.clone(),
                index: DisplayIndex::Draft(draft_idx),
            });
            draft_idx += 1;
        }
    }

    let mut lost_idx = 1;
    for book in &books {
        if book.card.state == BookState::Lost {
            results.push(DisplayBook {
                book: book.clone(),
                index: DisplayIndex::Lost(lost_idx),
            });
            lost_idx += 1;
        }
    }

    results
}

/// Parses a single input that may be either one index or a range.
///
/// Supports `"3"`, `"d1"`, `"l2"`, and same-type ranges such as `"3-5"` or
/// `"d1-d3"`. Whether the indexes exist is checked later, at resolution.
pub fn parse_index_or_range(s: &str) -> Result<Vec<DisplayIndex>, String> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = DisplayIndex::from_str(&s[..dash_pos])?;
            let end = DisplayIndex::from_str(&s[dash_pos + 1..])?;
            return expand_range(start, end);
        }
    }
    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

fn expand_range(start: DisplayIndex, end: DisplayIndex) -> Result<Vec<DisplayIndex>, String> {
    let expand = |s: usize, e: usize, make: fn(usize) -> DisplayIndex| {
        if s > e {
            return Err(format!(
                "Invalid range: start ({}) must be <= end ({})",
                make(s),
                make(e)
            ));
        }
        Ok((s..=e).map(make).collect())
    };

    match (&start, &end) {
        (DisplayIndex::Available(s), DisplayIndex::Available(e)) => {
            expand(*s, *e, DisplayIndex::Available)
        }
        (DisplayIndex::Draft(s), DisplayIndex::Draft(e)) => expand(*s, *e, DisplayIndex::Draft),
        (DisplayIndex::Lost(s), DisplayIndex::Lost(e)) => expand(*s, *e, DisplayIndex::Lost),
        _ => Err(format!(
            "Invalid range: cannot mix index types ({} and {})",
            start, end
        )),
    }
}
