//! Book metadata model.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book.
    pub id: String,

    /// Book title.
    pub title: String,

    /// Author id (key into the author lookup).
    pub author: String,

    /// Cover image URL.
    pub image: String,

    /// Book description or summary.
    #[serde(default)]
    pub description: String,

    /// Genre ids (keys into the genre lookup).
    #[serde(default)]
    pub genres: Vec<String>,

    /// Publication date.
    pub published: DateTime<Utc>,
}

impl Book {
    /// Whether the book is tagged with the given genre.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Year of publication.
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}

impl Default for Book {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: "Unknown".to_string(),
            author: String::new(),
            image: String::new(),
            description: String::new(),
            genres: Vec::new(),
            published: DateTime::default(),
        }
    }
}
