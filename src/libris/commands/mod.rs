use crate::config::LibrisConfig;
use crate::index::DisplayBook;
use crate::model::{Book, BookState, Partner};
use crate::store::DoctorReport;
use chrono::NaiveDate;

pub mod add;
pub mod config;
pub mod delete;
pub mod doctor;
pub mod helpers;
pub mod init;
pub mod list;
pub mod partners;
pub mod search;
pub mod set_age;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<DisplayBook>,
    pub partners: Vec<Partner>,
    pub partner_books: Option<partners::PartnerBooks>,
    pub config: Option<LibrisConfig>,
    pub report: Option<DoctorReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_partners(mut self, partners: Vec<Partner>) -> Self {
        self.partners = partners;
        self
    }

    pub fn with_config(mut self, config: LibrisConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_report(mut self, report: DoctorReport) -> Self {
        self.report = Some(report);
        self
    }
}

/// Field values for a new book. Partner references are by name; the command
/// resolves them against the partner list.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub short_title: Option<String>,
    pub notes: Option<String>,
    pub state: Option<BookState>,
    pub date_release: Option<NaiveDate>,
    pub pages: Option<u32>,
    pub reader_rating: Option<f64>,
    pub cost_price: Option<f64>,
    pub retail_price: Option<f64>,
    pub currency: Option<String>,
    pub publisher: Option<String>,
    pub authors: Vec<String>,
    pub description: String,
}

impl NewBook {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update for an existing book; `None` leaves a field alone.
/// `clear_release` unsets the release date (and with it the derived age).
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub notes: Option<String>,
    pub state: Option<BookState>,
    pub out_of_print: Option<bool>,
    pub date_release: Option<NaiveDate>,
    pub clear_release: bool,
    pub pages: Option<u32>,
    pub reader_rating: Option<f64>,
    pub cost_price: Option<f64>,
    pub retail_price: Option<f64>,
    pub currency: Option<String>,
    pub publisher: Option<String>,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
}
