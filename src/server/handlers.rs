//! HTTP request handlers.

use crate::error::{AppError, Result};
use crate::filter::FilterCriteria;
use crate::pagination;
use crate::render::{self, PageView};
use crate::server::AppState;
use crate::theme::{PREFERS_COLOR_SCHEME, Theme};
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderName, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};

/// Client hints the page asks the browser to send.
const ACCEPT_CH: HeaderName = HeaderName::from_static("accept-ch");

/// Color scheme hint sent by the client, if any.
fn color_scheme(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(PREFERS_COLOR_SCHEME)
        .and_then(|v| v.to_str().ok())
}

/// Render the browser page for the current session, optionally with the
/// detail overlay for `active` open.
fn render_page(state: &AppState, headers: &HeaderMap, active: Option<&str>) -> Response {
    let theme = state.theme(color_scheme(headers));
    let catalog = state.catalog();
    let active = active.and_then(|id| catalog.get_book(id));

    let html = {
        let session = state.session();
        let pager = session.pager();
        render::page(&PageView {
            title: &state.config.server.title,
            catalog,
            books: pager.current_page(),
            criteria: session.criteria(),
            remaining: pager.remaining(),
            no_results: session.show_no_results(),
            theme,
            active,
        })
    };

    (
        [
            (ACCEPT_CH, "Sec-CH-Prefers-Color-Scheme"),
            (header::VARY, "Sec-CH-Prefers-Color-Scheme"),
        ],
        Html(html),
    )
        .into_response()
}

// ============================================================================
// WEB PAGES
// ============================================================================

/// Browser page.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render_page(&state, &headers, None)
}

/// Browser page with the detail overlay open.
pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    if state.get_book(&id).is_none() {
        return Err(AppError::NotFound(id));
    }
    Ok(render_page(&state, &headers, Some(&id)))
}

/// Search form submission.
pub async fn search(
    State(state): State<AppState>,
    Form(criteria): Form<FilterCriteria>,
) -> Redirect {
    state.apply_filter(criteria);
    Redirect::to("/")
}

/// "Show more" button.
pub async fn show_more(State(state): State<AppState>) -> Redirect {
    state.show_more();
    Redirect::to("/")
}

/// Settings form fields.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    /// `day` or `night`.
    #[serde(default)]
    pub theme: String,
}

/// Settings form submission.
pub async fn settings(
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> Redirect {
    state.set_theme(Theme::from_form_value(&form.theme));
    Redirect::to("/")
}

// ============================================================================
// JSON API
// ============================================================================

/// Summary consumed by the preview widget.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PreviewResponse {
    /// Book ID.
    pub id: String,
    /// Book title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Description.
    pub description: String,
}

/// Book summary for the preview widget.
pub async fn api_book_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PreviewResponse>> {
    let catalog = state.catalog();
    let book = catalog.get_book(&id).ok_or(AppError::NotFound(id))?;

    Ok(Json(PreviewResponse {
        id: book.id.clone(),
        title: book.title.clone(),
        author: catalog.author_name(&book.author).to_string(),
        description: book.description.clone(),
    }))
}

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    genre: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    page: Option<usize>,
}

/// Listing entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListEntry {
    /// Book ID.
    pub id: String,
    /// Book title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Cover image URL.
    pub image: String,
}

/// Listing response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    /// Books on the requested page.
    pub books: Vec<ListEntry>,
    /// Requested page (1-based).
    pub page: usize,
    /// Page size.
    pub page_size: usize,
    /// Total matches.
    pub total: usize,
    /// Matches after this page.
    pub remaining: usize,
}

/// Stateless filtered listing; does not touch the browse session.
pub async fn api_books(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ListResponse> {
    let catalog = state.catalog();
    let criteria = FilterCriteria::new(&query.genre, &query.title, &query.author);
    let matches = catalog.filter(&criteria);

    let page = query.page.unwrap_or(1).max(1);
    let page_size = state.config.catalog.page_size;
    let (slice, remaining) = pagination::page_of(&matches, page, page_size);

    let books = slice
        .iter()
        .map(|book| ListEntry {
            id: book.id.clone(),
            title: book.title.clone(),
            author: catalog.author_name(&book.author).to_string(),
            image: book.image.clone(),
        })
        .collect();

    Json(ListResponse {
        books,
        page,
        page_size,
        total: matches.len(),
        remaining,
    })
}
