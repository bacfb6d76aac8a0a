use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::index::DisplayBook;
use crate::model::Partner;
use crate::store::DataStore;

use super::helpers::{indexed_books, partner_by_name};

/// A partner together with its derived book back-references: the books it
/// published and the books it authored. Neither list is stored anywhere;
/// both are rebuilt from the catalog on every call.
#[derive(Debug, Clone)]
pub struct PartnerBooks {
    pub partner: Partner,
    pub published: Vec<DisplayBook>,
    pub authored: Vec<DisplayBook>,
}

pub fn add<S: DataStore>(
    store: &mut S,
    name: String,
    city: Option<String>,
    email: Option<String>,
) -> Result<CmdResult> {
    if store.list_partners()?.iter().any(|p| p.name == name) {
        return Err(LibrisError::Api(format!(
            "Partner '{}' already exists",
            name
        )));
    }

    let mut partner = Partner::new(name);
    partner.city = city;
    partner.email = email;
    store.save_partner(&partner)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Partner added: {}",
        partner.name
    )));
    result.partners.push(partner);
    Ok(result)
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut partners = store.list_partners()?;
    partners.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(CmdResult::default().with_partners(partners))
}

pub fn books<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    let partner = partner_by_name(store, name)?;
    let indexed = indexed_books(store)?;

    let published = indexed
        .iter()
        .filter(|db| db.book.card.publisher_id == Some(partner.id))
        .cloned()
        .collect();
    let authored = indexed
        .iter()
        .filter(|db| db.book.card.author_ids.contains(&partner.id))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    result.partner_books = Some(PartnerBooks {
        partner,
        published,
        authored,
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add as add_book, NewBook};
    use crate::model::BookState;
    use crate::store::memory::fixtures::CatalogFixture;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn adds_and_lists_partners_by_name() {
        let mut store = CatalogFixture::new().store;
        add(&mut store, "Tor".to_string(), None, None).unwrap();
        add(&mut store, "Ace Books".to_string(), None, None).unwrap();

        let result = list(&store).unwrap();
        let names: Vec<_> = result.partners.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ace Books", "Tor"]);
    }

    #[test]
    fn duplicate_partner_names_are_rejected() {
        let mut store = CatalogFixture::new().store;
        add(&mut store, "Tor".to_string(), None, None).unwrap();
        assert!(add(&mut store, "Tor".to_string(), None, None).is_err());
    }

    #[test]
    fn back_references_are_derived_from_the_catalog() {
        let mut store = CatalogFixture::new()
            .with_partner("Chilton", Some("Philadelphia"))
            .with_partner("Frank Herbert", None)
            .store;

        let mut new = NewBook::titled("Dune");
        new.date_release = NaiveDate::from_ymd_opt(1965, 8, 1);
        new.publisher = Some("Chilton".to_string());
        new.authors = vec!["Frank Herbert".to_string()];
        add_book::run(&mut store, today(), new, BookState::Available).unwrap();

        let result = books(&store, "Chilton").unwrap();
        let pb = result.partner_books.unwrap();
        assert_eq!(pb.published.len(), 1);
        assert_eq!(pb.published[0].book.card.title, "Dune");
        assert!(pb.authored.is_empty());

        let result = books(&store, "Frank Herbert").unwrap();
        let pb = result.partner_books.unwrap();
        assert!(pb.published.is_empty());
        assert_eq!(pb.authored.len(), 1);
    }

    #[test]
    fn unknown_partner_is_an_error() {
        let store = CatalogFixture::new().store;
        assert!(books(&store, "Nobody").is_err());
    }
}
