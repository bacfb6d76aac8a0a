use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookState {
    #[default]
    Draft,
    Available,
    Lost,
}

impl std::fmt::Display for BookState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookState::Draft => write!(f, "not available"),
            BookState::Available => write!(f, "available"),
            BookState::Lost => write!(f, "lost"),
        }
    }
}

impl FromStr for BookState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(BookState::Draft),
            "available" => Ok(BookState::Available),
            "lost" => Ok(BookState::Lost),
            other => Err(format!("Unknown book state: {}", other)),
        }
    }
}

/// The catalog card for a book: everything the catalog stores about it
/// except the long-form description, which lives in its own file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub short_title: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub state: BookState,
    #[serde(default)]
    pub out_of_print: bool,
    pub date_release: Option<NaiveDate>,
    pub pages: Option<u32>,
    pub reader_rating: Option<f64>,
    pub cost_price: Option<f64>,
    pub retail_price: Option<f64>,
    pub currency: Option<String>,
    pub publisher_id: Option<Uuid>,
    #[serde(default)]
    pub author_ids: Vec<Uuid>,
    // Derived from date_release on read; never persisted.
    #[serde(skip)]
    pub age_days: Option<f64>,
}

impl Card {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            title,
            short_title: None,
            notes: None,
            state: BookState::default(),
            out_of_print: false,
            date_release: None,
            pages: None,
            reader_rating: None,
            cost_price: None,
            retail_price: None,
            currency: None,
            publisher_id: None,
            author_ids: Vec::new(),
            age_days: None,
        }
    }

    /// Record display name: `"Title (YYYY-MM-DD)"`, or the bare title for an
    /// undated book.
    pub fn display_name(&self) -> String {
        match self.date_release {
            Some(date) => format!("{} ({})", self.title, date),
            None => self.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub card: Card,
    pub description: String,
}

impl Book {
    pub fn new(title: String, description: String) -> Self {
        Self {
            card: Card::new(title),
            description,
        }
    }
}

/// A publisher or author. Back-references to books are derived by filtering
/// the catalog, never stored on the partner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub email: Option<String>,
}

impl Partner {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            city: None,
            email: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_includes_release_date() {
        let mut card = Card::new("Brave New World".to_string());
        card.date_release = NaiveDate::from_ymd_opt(1932, 2, 4);
        assert_eq!(card.display_name(), "Brave New World (1932-02-04)");
    }

    #[test]
    fn display_name_for_undated_book_is_bare_title() {
        let card = Card::new("Unpublished Draft".to_string());
        assert_eq!(card.display_name(), "Unpublished Draft");
    }

    #[test]
    fn age_days_is_not_serialized() {
        let mut card = Card::new("A".to_string());
        card.age_days = Some(12.0);
        let json = serde_json::to_string(&card).unwrap();
        assert!(!json.contains("age_days"));

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back.age_days, None);
    }

    #[test]
    fn state_parses_and_defaults() {
        assert_eq!("available".parse::<BookState>(), Ok(BookState::Available));
        assert_eq!("lost".parse::<BookState>(), Ok(BookState::Lost));
        assert!("missing".parse::<BookState>().is_err());
        assert_eq!(BookState::default(), BookState::Draft);
    }
}
