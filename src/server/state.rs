//! Application state shared across handlers.

use crate::config::Config;
use crate::filter::FilterCriteria;
use crate::library::{Book, Catalog};
use crate::pagination::Paginator;
use crate::theme::Theme;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Browse state driven by form submissions: the active criteria, the
/// pagination cursor over their matches, and the chosen theme.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    criteria: FilterCriteria,
    pager: Paginator,
    theme: Option<Theme>,
    searched: bool,
}

impl BrowseSession {
    /// Unfiltered session over the whole catalog.
    pub fn new(catalog: &Catalog, page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            pager: Paginator::new(catalog.books().to_vec(), page_size),
            theme: None,
            searched: false,
        }
    }

    /// Active criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Pagination over the active match set.
    pub fn pager(&self) -> &Paginator {
        &self.pager
    }

    /// Whether to show the "no results" message: only after a search
    /// submission produced an empty match set.
    pub fn show_no_results(&self) -> bool {
        self.searched && self.pager.is_empty()
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Read-only catalog.
    catalog: Arc<Catalog>,
    /// Single browse session.
    session: Arc<Mutex<BrowseSession>>,
}

impl AppState {
    /// Create new application state over a loaded catalog.
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let session = BrowseSession::new(&catalog, config.catalog.page_size);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Lock the browse session.
    pub fn session(&self) -> MutexGuard<'_, BrowseSession> {
        self.session.lock()
    }

    /// Get book by id.
    pub fn get_book(&self, id: &str) -> Option<&Book> {
        self.catalog.get_book(id)
    }

    /// Filter the catalog, replace the match set and rewind to page one.
    /// Returns the number of matches.
    pub fn apply_filter(&self, criteria: FilterCriteria) -> usize {
        let matches = self.catalog.filter(&criteria);
        let count = matches.len();

        let mut session = self.session.lock();
        session.pager.apply_filter(matches);
        session.criteria = criteria;
        session.searched = true;

        tracing::debug!(
            genre = %session.criteria.genre.as_str(),
            title = %session.criteria.title,
            author = %session.criteria.author.as_str(),
            matches = count,
            "Applied filter"
        );

        count
    }

    /// Reveal the next page. Returns false when nothing was left to show.
    pub fn show_more(&self) -> bool {
        let mut session = self.session.lock();
        let advanced = session.pager.show_more().is_some();
        tracing::debug!(
            page = session.pager.page(),
            remaining = session.pager.remaining(),
            advanced,
            "Show more"
        );
        advanced
    }

    /// Pin the theme chosen in the settings form.
    pub fn set_theme(&self, theme: Theme) {
        self.session.lock().theme = Some(theme);
        tracing::debug!(theme = theme.as_str(), "Theme changed");
    }

    /// Effective theme: the chosen one, else the configured default
    /// resolved against the client's color scheme hint.
    pub fn theme(&self, color_scheme: Option<&str>) -> Theme {
        self.session
            .lock()
            .theme
            .unwrap_or_else(|| self.config.theme.default.resolve(color_scheme))
    }
}
