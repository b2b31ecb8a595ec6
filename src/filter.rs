//! Search criteria and the catalog filter predicate.

use crate::library::Book;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel form value that matches every genre or author.
pub const ANY: &str = "any";

/// A lookup criterion: either unrestricted or a single id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Matches everything.
    #[default]
    Any,
    /// Matches exactly this id.
    Id(String),
}

impl Selection {
    /// Parse a form value; `any` and blank values are unrestricted. Ids are
    /// kept exactly as submitted.
    pub fn parse(value: &str) -> Self {
        if value.trim().is_empty() || value == ANY {
            Selection::Any
        } else {
            Selection::Id(value.to_string())
        }
    }

    /// Form value for this selection.
    pub fn as_str(&self) -> &str {
        match self {
            Selection::Any => ANY,
            Selection::Id(id) => id,
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Selection::parse(&value))
    }
}

/// Filter criteria as submitted by the search form.
///
/// Missing fields default to "match all" for that dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Genre id or `any`.
    #[serde(default)]
    pub genre: Selection,

    /// Case-insensitive title substring; blank matches all.
    #[serde(default)]
    pub title: String,

    /// Author id or `any`.
    #[serde(default)]
    pub author: Selection,
}

impl FilterCriteria {
    /// Build criteria from raw form values.
    pub fn new(genre: &str, title: &str, author: &str) -> Self {
        Self {
            genre: Selection::parse(genre),
            title: title.to_string(),
            author: Selection::parse(author),
        }
    }

    /// Test a single book against all three criteria.
    pub fn matches(&self, book: &Book) -> bool {
        let genre_match = match &self.genre {
            Selection::Any => true,
            Selection::Id(genre) => book.has_genre(genre),
        };

        // Blank check trims; the containment test uses the text as typed.
        let title_match = self.title.trim().is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase());

        let author_match = match &self.author {
            Selection::Any => true,
            Selection::Id(author) => book.author == *author,
        };

        genre_match && title_match && author_match
    }
}

/// Return the books matching `criteria`, preserving catalog order.
pub fn filter_books(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    books
        .iter()
        .filter(|book| criteria.matches(book))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            ..Book::default()
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("b1", "Moby Dick", "a1", &["g1", "g2"]),
            book("b2", "Dune", "a2", &["g3"]),
            book("b3", "Children of Dune", "a2", &["g3", "g1"]),
            book("b4", "Emma", "a3", &["g2"]),
        ]
    }

    #[test]
    fn unrestricted_criteria_return_everything_in_order() {
        let books = shelf();
        let result = filter_books(&books, &FilterCriteria::default());
        assert_eq!(result, books);
    }

    #[test]
    fn title_match_is_case_insensitive_both_ways() {
        let books = shelf();
        let criteria = FilterCriteria::new("any", "dUnE", "any");
        let result = filter_books(&books, &criteria);

        let ids: Vec<_> = result.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b2", "b3"]);
        for excluded in books.iter().filter(|b| !ids.contains(&b.id.as_str())) {
            assert!(!excluded.title.to_lowercase().contains("dune"));
        }
    }

    #[test]
    fn whitespace_title_matches_all() {
        let books = shelf();
        let criteria = FilterCriteria::new("any", "   ", "any");
        assert_eq!(filter_books(&books, &criteria).len(), books.len());
    }

    #[test]
    fn title_is_not_trimmed_for_containment() {
        let books = shelf();
        let criteria = FilterCriteria::new("any", " dune", "any");
        let ids: Vec<_> = filter_books(&books, &criteria)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, ["b3"]);
    }

    #[test]
    fn genre_and_author_combine_as_conjunction() {
        let books = shelf();
        let criteria = FilterCriteria::new("g1", "", "a2");
        let ids: Vec<_> = filter_books(&books, &criteria)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, ["b3"]);
    }

    #[test]
    fn unknown_genre_matches_nothing() {
        let criteria = FilterCriteria::new("g9", "", "any");
        assert!(filter_books(&shelf(), &criteria).is_empty());
    }

    #[test]
    fn selection_parses_sentinel_and_blank() {
        assert_eq!(Selection::parse("any"), Selection::Any);
        assert_eq!(Selection::parse(""), Selection::Any);
        assert_eq!(Selection::parse("  "), Selection::Any);
        assert_eq!(Selection::parse("g1"), Selection::Id("g1".to_string()));
    }

    #[test]
    fn ids_are_compared_exactly() {
        let books = shelf();
        assert_eq!(Selection::parse(" a2"), Selection::Id(" a2".to_string()));
        assert!(filter_books(&books, &FilterCriteria::new("any", "", " a2")).is_empty());
        assert!(filter_books(&books, &FilterCriteria::new("g3 ", "", "any")).is_empty());
        assert_eq!(
            filter_books(&books, &FilterCriteria::new("any", "", "a2")).len(),
            2
        );
    }

    #[test]
    fn criteria_deserialize_with_missing_fields() {
        let criteria: FilterCriteria = serde_json::from_str(r#"{"title":"moby"}"#).unwrap();
        assert_eq!(criteria.genre, Selection::Any);
        assert_eq!(criteria.author, Selection::Any);
        assert_eq!(criteria.title, "moby");
    }
}
