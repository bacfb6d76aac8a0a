use super::{DataStore, DoctorReport};
use crate::error::{LibrisError, Result};
use crate::model::{Book, Card, Partner};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

const CATALOG_FILENAME: &str = "catalog.json";
const PARTNERS_FILENAME: &str = "partners.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn book_filename(id: &Uuid) -> String {
        format!("book-{}.txt", id)
    }

    fn book_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(Self::book_filename(id))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn load_cards(&self) -> Result<HashMap<Uuid, Card>> {
        let catalog_file = self.root.join(CATALOG_FILENAME);
        if !catalog_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(catalog_file)?;
        let cards: HashMap<Uuid, Card> = serde_json::from_str(&content)?;
        Ok(cards)
    }

    fn save_cards(&self, cards: &HashMap<Uuid, Card>) -> Result<()> {
        let catalog_file = self.root.join(CATALOG_FILENAME);
        let content = serde_json::to_string_pretty(cards)?;
        fs::write(catalog_file, content)?;
        Ok(())
    }

    fn load_partners(&self) -> Result<HashMap<Uuid, Partner>> {
        let partners_file = self.root.join(PARTNERS_FILENAME);
        if !partners_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(partners_file)?;
        let partners: HashMap<Uuid, Partner> = serde_json::from_str(&content)?;
        Ok(partners)
    }

    fn save_partners(&self, partners: &HashMap<Uuid, Partner>) -> Result<()> {
        let partners_file = self.root.join(PARTNERS_FILENAME);
        let content = serde_json::to_string_pretty(partners)?;
        fs::write(partners_file, content)?;
        Ok(())
    }

    fn read_description(&self, id: &Uuid) -> Result<String> {
        let path = self.book_path(id);
        if path.exists() {
            Ok(fs::read_to_string(path)?)
        } else {
            Ok(String::new())
        }
    }
}

impl DataStore for FileStore {
    fn save_book(&mut self, book: &Book) -> Result<()> {
        self.ensure_root()?;

        let mut cards = self.load_cards()?;
        cards.insert(book.card.id, book.card.clone());
        self.save_cards(&cards)?;

        fs::write(self.book_path(&book.card.id), &book.description)?;
        Ok(())
    }

    fn get_book(&self, id: &Uuid) -> Result<Book> {
        let cards = self.load_cards()?;
        let card = cards
            .get(id)
            .ok_or(LibrisError::BookNotFound(*id))?
            .clone();
        let description = self.read_description(id)?;
        Ok(Book { card, description })
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let cards = self.load_cards()?;
        let mut books = Vec::with_capacity(cards.len());
        for (id, card) in cards {
            let description = self.read_description(&id)?;
            books.push(Book { card, description });
        }
        Ok(books)
    }

    fn delete_book(&mut self, id: &Uuid) -> Result<()> {
        let mut cards = self.load_cards()?;
        if cards.remove(id).is_none() {
            return Err(LibrisError::BookNotFound(*id));
        }
        self.save_cards(&cards)?;

        let path = self.book_path(id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn save_partner(&mut self, partner: &Partner) -> Result<()> {
        self.ensure_root()?;
        let mut partners = self.load_partners()?;
        partners.insert(partner.id, partner.clone());
        self.save_partners(&partners)?;
        Ok(())
    }

    fn get_partner(&self, id: &Uuid) -> Result<Partner> {
        let partners = self.load_partners()?;
        partners
            .get(id)
            .cloned()
            .ok_or(LibrisError::PartnerNotFound(*id))
    }

    fn list_partners(&self) -> Result<Vec<Partner>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        Ok(self.load_partners()?.into_values().collect())
    }

    fn doctor(&mut self) -> Result<DoctorReport> {
        let mut report = DoctorReport::default();
        if !self.root.exists() {
            return Ok(report);
        }

        let cards = self.load_cards()?;

        // Every card needs a description file, even an empty one.
        for id in cards.keys() {
            let path = self.book_path(id);
            if !path.exists() {
                fs::write(path, "")?;
                report.recreated_descriptions += 1;
            }
        }

        // Description files without a card are reported, not removed.
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if let Some(stem) = name.strip_prefix("book-").and_then(|n| n.strip_suffix(".txt")) {
                match Uuid::from_str(stem) {
                    Ok(id) if cards.contains_key(&id) => {}
                    _ => report.orphaned_descriptions += 1,
                }
            }
        }

        Ok(report)
    }
}
