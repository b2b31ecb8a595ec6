//! Forward-only pagination over the current match set.

use crate::library::Book;

/// Tracks the active match set and how many pages of it have been revealed.
///
/// The cursor is 1-based and only moves forward; applying a new match set
/// resets it to the first page.
#[derive(Debug, Clone)]
pub struct Paginator {
    matches: Vec<Book>,
    page: usize,
    page_size: usize,
}

impl Paginator {
    /// Start on the first page of `matches`. A zero page size is treated as 1.
    pub fn new(matches: Vec<Book>, page_size: usize) -> Self {
        Self {
            matches,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the match set and rewind to the first page.
    pub fn apply_filter(&mut self, matches: Vec<Book>) -> &[Book] {
        self.matches = matches;
        self.page = 1;
        self.current_page()
    }

    /// Advance one page. Inert (returns `None`) once nothing remains.
    pub fn show_more(&mut self) -> Option<&[Book]> {
        if !self.has_more() {
            return None;
        }
        self.page += 1;
        Some(self.current_page())
    }

    /// Books on the page the cursor points at.
    pub fn current_page(&self) -> &[Book] {
        let start = (self.page - 1)
            .saturating_mul(self.page_size)
            .min(self.matches.len());
        let end = self.revealed();
        &self.matches[start..end]
    }

    /// Number of books revealed so far: `min(page * page_size, |matches|)`.
    pub fn revealed(&self) -> usize {
        self.page
            .saturating_mul(self.page_size)
            .min(self.matches.len())
    }

    /// Books not yet revealed: `|matches| - page * page_size`, floored at zero.
    pub fn remaining(&self) -> usize {
        self.matches
            .len()
            .saturating_sub(self.page.saturating_mul(self.page_size))
    }

    /// Whether "show more" can advance.
    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The whole match set.
    pub fn matches(&self) -> &[Book] {
        &self.matches
    }

    /// Whether the match set is empty.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Slice out one page of `books` without keeping a cursor.
///
/// Returns the page and the number of books after it. Pages past the end are
/// empty.
pub fn page_of(books: &[Book], page: usize, page_size: usize) -> (&[Book], usize) {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let start = (page - 1).saturating_mul(page_size).min(books.len());
    let end = page.saturating_mul(page_size).min(books.len());
    (&books[start..end], books.len() - end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books(n: usize) -> Vec<Book> {
        (0..n)
            .map(|i| Book {
                id: format!("b{}", i),
                title: format!("Book {}", i),
                ..Book::default()
            })
            .collect()
    }

    fn ids(page: &[Book]) -> Vec<&str> {
        page.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn twenty_five_books_page_size_three() {
        let all = books(25);
        let mut pager = Paginator::new(all.clone(), 3);

        assert_eq!(pager.current_page(), &all[0..3]);
        assert_eq!(pager.remaining(), 22);

        let next = pager.show_more().unwrap().to_vec();
        assert_eq!(next, &all[3..6]);
        assert_eq!(pager.remaining(), 19);
        assert_eq!(pager.revealed(), 6);
    }

    #[test]
    fn show_more_is_inert_at_the_end() {
        let mut pager = Paginator::new(books(7), 3);
        assert_eq!(ids(pager.show_more().unwrap()), ["b3", "b4", "b5"]);
        assert_eq!(ids(pager.show_more().unwrap()), ["b6"]);
        assert_eq!(pager.remaining(), 0);
        assert!(!pager.has_more());

        assert!(pager.show_more().is_none());
        assert_eq!(pager.page(), 3);
        assert_eq!(pager.revealed(), 7);
    }

    #[test]
    fn apply_filter_resets_cursor() {
        let mut pager = Paginator::new(books(10), 3);
        pager.show_more();
        pager.show_more();
        assert_eq!(pager.page(), 3);

        let first = pager.apply_filter(books(5)).to_vec();
        assert_eq!(ids(&first), ["b0", "b1", "b2"]);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.remaining(), 2);
    }

    #[test]
    fn affordance_disabled_exactly_when_nothing_remains() {
        for len in 0..10 {
            let mut pager = Paginator::new(books(len), 3);
            loop {
                let signed = len as i64 - (pager.page() * 3) as i64;
                assert_eq!(pager.has_more(), signed > 0, "len {} page {}", len, pager.page());
                if pager.show_more().is_none() {
                    break;
                }
            }
        }
    }

    #[test]
    fn empty_match_set() {
        let pager = Paginator::new(Vec::new(), 3);
        assert!(pager.is_empty());
        assert!(pager.current_page().is_empty());
        assert_eq!(pager.remaining(), 0);
        assert_eq!(pager.revealed(), 0);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let pager = Paginator::new(books(2), 0);
        assert_eq!(pager.current_page().len(), 1);
        assert_eq!(pager.remaining(), 1);
    }

    #[test]
    fn page_of_slices_without_state() {
        let all = books(8);
        let (page, after) = page_of(&all, 3, 3);
        assert_eq!(ids(page), ["b6", "b7"]);
        assert_eq!(after, 0);

        let (page, after) = page_of(&all, 9, 3);
        assert!(page.is_empty());
        assert_eq!(after, 0);

        let (page, after) = page_of(&all, 0, 3);
        assert_eq!(ids(page), ["b0", "b1", "b2"]);
        assert_eq!(after, 5);
    }

    #[test]
    fn page_of_huge_page_is_empty_not_wrapped() {
        let all = books(8);
        let (page, after) = page_of(&all, usize::MAX, 3);
        assert!(page.is_empty());
        assert_eq!(after, 0);

        let (page, after) = page_of(&all, usize::MAX / 2 + 2, 2);
        assert!(page.is_empty());
        assert_eq!(after, 0);

        let (page, after) = page_of(&all, 2, usize::MAX);
        assert!(page.is_empty());
        assert_eq!(after, 0);
    }

    #[test]
    fn page_of_oversized_page_returns_everything() {
        let all = books(8);
        let (page, after) = page_of(&all, 1, usize::MAX);
        assert_eq!(page.len(), 8);
        assert_eq!(after, 0);
    }
}
