//! Explicit constraint checks, run by the command layer before every save.
//!
//! The store enforces nothing itself; any front end that goes through the
//! commands gets the same rules.

use crate::model::Card;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    DuplicateTitle(String),
    FutureReleaseDate(NaiveDate),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateTitle(title) => {
                write!(f, "Book title must be unique: {}", title)
            }
            Violation::FutureReleaseDate(date) => {
                write!(f, "Release date must be in the past: {}", date)
            }
        }
    }
}

impl std::error::Error for Violation {}

/// Exact, case-sensitive title uniqueness. The candidate's own id is
/// excluded so updating a book never collides with itself.
pub fn check_unique_title(card: &Card, others: &[Card]) -> Result<(), Violation> {
    for other in others {
        if other.id != card.id && other.title == card.title {
            return Err(Violation::DuplicateTitle(card.title.clone()));
        }
    }
    Ok(())
}

/// A release date, when set, must not lie after the caller-supplied "today".
pub fn check_release_date(today: NaiveDate, card: &Card) -> Result<(), Violation> {
    match card.date_release {
        Some(date) if date > today => Err(Violation::FutureReleaseDate(date)),
        _ => Ok(()),
    }
}

pub fn validate_card(today: NaiveDate, card: &Card, others: &[Card]) -> Result<(), Violation> {
    check_unique_title(card, others)?;
    check_release_date(today, card)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_duplicate_titles() {
        let a = Card::new("Dune".to_string());
        let b = Card::new("Dune".to_string());
        assert_eq!(
            check_unique_title(&b, &[a]),
            Err(Violation::DuplicateTitle("Dune".to_string()))
        );
    }

    #[test]
    fn uniqueness_is_case_sensitive() {
        let a = Card::new("Dune".to_string());
        let b = Card::new("dune".to_string());
        assert_eq!(check_unique_title(&b, &[a]), Ok(()));
    }

    #[test]
    fn a_card_does_not_collide_with_itself() {
        let a = Card::new("Dune".to_string());
        let others = vec![a.clone()];
        assert_eq!(check_unique_title(&a, &others), Ok(()));
    }

    #[test]
    fn rejects_future_release_dates() {
        let today = date(2024, 1, 10);
        let mut card = Card::new("A".to_string());
        card.date_release = Some(date(2024, 1, 11));
        assert_eq!(
            check_release_date(today, &card),
            Err(Violation::FutureReleaseDate(date(2024, 1, 11)))
        );
    }

    #[test]
    fn accepts_today_and_past_dates() {
        let today = date(2024, 1, 10);
        let mut card = Card::new("A".to_string());

        card.date_release = Some(today);
        assert_eq!(check_release_date(today, &card), Ok(()));

        card.date_release = Some(date(2020, 5, 1));
        assert_eq!(check_release_date(today, &card), Ok(()));

        card.date_release = None;
        assert_eq!(check_release_date(today, &card), Ok(()));
    }
}
