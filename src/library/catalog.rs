//! Static, read-only book catalog with author and genre lookups.

use crate::error::{AppError, Result};
use crate::filter::{self, FilterCriteria};
use crate::library::book::Book;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Id to display name mapping, iterated in ascending id order.
pub type Lookup = BTreeMap<String, String>;

/// Placeholder shown when a lookup id has no display name.
pub const UNKNOWN: &str = "Unknown";

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    books: Vec<Book>,
    #[serde(default)]
    authors: Lookup,
    #[serde(default)]
    genres: Lookup,
}

/// The full book collection plus its lookup tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    authors: Lookup,
    genres: Lookup,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique and every author and
    /// genre a book refers to exists.
    pub fn new(books: Vec<Book>, authors: Lookup, genres: Lookup) -> Result<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if book.id.is_empty() {
                return Err(AppError::Catalog(format!(
                    "book \"{}\" has an empty id",
                    book.title
                )));
            }
            if !seen.insert(book.id.as_str()) {
                return Err(AppError::Catalog(format!("duplicate book id {}", book.id)));
            }
            if !authors.contains_key(&book.author) {
                return Err(AppError::Catalog(format!(
                    "book {} refers to unknown author {}",
                    book.id, book.author
                )));
            }
            if let Some(genre) = book.genres.iter().find(|g| !genres.contains_key(*g)) {
                return Err(AppError::Catalog(format!(
                    "book {} refers to unknown genre {}",
                    book.id, genre
                )));
            }
        }

        Ok(Self {
            books,
            authors,
            genres,
        })
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.books, file.authors, file.genres)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let start = std::time::Instant::now();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;

        tracing::info!(
            path = %path.display(),
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            genres = catalog.genres.len(),
            elapsed = ?start.elapsed(),
            "Loaded catalog"
        );

        Ok(catalog)
    }

    /// All books in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Author lookup table.
    pub fn authors(&self) -> &Lookup {
        &self.authors
    }

    /// Genre lookup table.
    pub fn genres(&self) -> &Lookup {
        &self.genres
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Get book by id.
    pub fn get_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Display name for an author id.
    pub fn author_name(&self, id: &str) -> &str {
        self.authors.get(id).map(String::as_str).unwrap_or(UNKNOWN)
    }

    /// Display name for a genre id.
    pub fn genre_name(&self, id: &str) -> &str {
        self.genres.get(id).map(String::as_str).unwrap_or(UNKNOWN)
    }

    /// Books matching `criteria`, in catalog order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Book> {
        filter::filter_books(&self.books, criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "books": [
            {
                "id": "b1",
                "title": "Moby Dick",
                "author": "a1",
                "image": "https://example.com/moby.jpg",
                "description": "A whale of a tale.",
                "genres": ["g1"],
                "published": "1851-10-18T00:00:00.000Z"
            },
            {
                "id": "b2",
                "title": "Dune",
                "author": "a2",
                "image": "https://example.com/dune.jpg",
                "description": "Spice.",
                "genres": ["g2"],
                "published": "1965-08-01T00:00:00.000Z"
            }
        ],
        "authors": {"a1": "Herman Melville", "a2": "Frank Herbert"},
        "genres": {"g1": "Adventure", "g2": "Science Fiction"}
    }"#;

    #[test]
    fn parse_sample_catalog() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.author_name("a1"), "Herman Melville");
        assert_eq!(catalog.genre_name("g2"), "Science Fiction");
        assert_eq!(catalog.get_book("b2").unwrap().published_year(), 1965);
    }

    #[test]
    fn unknown_lookup_degrades_to_placeholder() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.author_name("nobody"), UNKNOWN);
    }

    #[test]
    fn rejects_dangling_author() {
        let json = SAMPLE.replace("\"author\": \"a2\"", "\"author\": \"a9\"");
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, AppError::Catalog(_)));
    }

    #[test]
    fn rejects_dangling_genre() {
        let json = SAMPLE.replace("[\"g2\"]", "[\"g9\"]");
        assert!(matches!(
            Catalog::from_json(&json).unwrap_err(),
            AppError::Catalog(_)
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = SAMPLE.replace("\"id\": \"b2\"", "\"id\": \"b1\"");
        assert!(matches!(
            Catalog::from_json(&json).unwrap_err(),
            AppError::Catalog(_)
        ));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            Catalog::from_json("{not json").unwrap_err(),
            AppError::Json(_)
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.books()[0].id, "b1");
    }
}
