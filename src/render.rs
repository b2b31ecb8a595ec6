//! HTML rendering for the catalog browser.
//!
//! Every function here is stateless: it takes books, lookups and flags and
//! returns markup. Text and attribute values are escaped by the writer.

use crate::filter::{ANY, FilterCriteria};
use crate::library::{Book, Catalog, Lookup};
use crate::theme::Theme;
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

/// CSS class that makes the "no results" message visible.
pub const MESSAGE_SHOW_CLASS: &str = "list__message_show";

type HtmlWriter = Writer<Cursor<Vec<u8>>>;

fn new_writer() -> HtmlWriter {
    Writer::new(Cursor::new(Vec::new()))
}

fn finish(writer: HtmlWriter) -> String {
    String::from_utf8(writer.into_inner().into_inner()).unwrap_or_default()
}

fn element<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    elem
}

// Writing to a Vec can't fail.
fn open(writer: &mut HtmlWriter, name: &str, attrs: &[(&str, &str)]) {
    let _ = writer.write_event(Event::Start(element(name, attrs)));
}

fn close(writer: &mut HtmlWriter, name: &str) {
    let _ = writer.write_event(Event::End(BytesEnd::new(name)));
}

fn void(writer: &mut HtmlWriter, name: &str, attrs: &[(&str, &str)]) {
    let _ = writer.write_event(Event::Empty(element(name, attrs)));
}

fn text(writer: &mut HtmlWriter, content: &str) {
    let _ = writer.write_event(Event::Text(BytesText::new(content)));
}

fn text_element(writer: &mut HtmlWriter, name: &str, attrs: &[(&str, &str)], content: &str) {
    open(writer, name, attrs);
    text(writer, content);
    close(writer, name);
}

fn write_preview(writer: &mut HtmlWriter, book: &Book, catalog: &Catalog) {
    let href = format!("/books/{}", urlencoding::encode(&book.id));
    open(
        writer,
        "a",
        &[
            ("class", "preview"),
            ("data-preview", book.id.as_str()),
            ("href", href.as_str()),
        ],
    );
    void(
        writer,
        "img",
        &[
            ("class", "preview__image"),
            ("src", book.image.as_str()),
            ("alt", ""),
        ],
    );
    open(writer, "div", &[("class", "preview__info")]);
    text_element(writer, "h3", &[("class", "preview__title")], &book.title);
    text_element(
        writer,
        "div",
        &[("class", "preview__author")],
        catalog.author_name(&book.author),
    );
    close(writer, "div");
    close(writer, "a");
}

/// The list container holding one preview per book.
///
/// The container is always rendered whole; callers pass the slice that
/// should be visible.
pub fn book_list(books: &[Book], catalog: &Catalog) -> String {
    let mut writer = new_writer();
    open(&mut writer, "div", &[("class", "list__items"), ("data-list-items", "")]);
    for book in books {
        write_preview(&mut writer, book, catalog);
    }
    close(&mut writer, "div");
    finish(writer)
}

/// Detail overlay for one book.
pub fn detail_panel(book: &Book, catalog: &Catalog) -> String {
    let subtitle = format!(
        "{} ({})",
        catalog.author_name(&book.author),
        book.published_year()
    );

    let mut writer = new_writer();
    open(
        &mut writer,
        "dialog",
        &[("class", "overlay"), ("data-list-active", ""), ("open", "")],
    );
    open(&mut writer, "div", &[("class", "overlay__preview")]);
    void(
        &mut writer,
        "img",
        &[
            ("class", "overlay__blur"),
            ("data-list-blur", ""),
            ("src", book.image.as_str()),
            ("alt", ""),
        ],
    );
    void(
        &mut writer,
        "img",
        &[
            ("class", "overlay__image"),
            ("data-list-image", ""),
            ("src", book.image.as_str()),
            ("alt", ""),
        ],
    );
    close(&mut writer, "div");

    open(&mut writer, "div", &[("class", "overlay__content")]);
    text_element(
        &mut writer,
        "h3",
        &[("class", "overlay__title"), ("data-list-title", "")],
        &book.title,
    );
    text_element(
        &mut writer,
        "div",
        &[("class", "overlay__data"), ("data-list-subtitle", "")],
        &subtitle,
    );
    text_element(
        &mut writer,
        "p",
        &[
            ("class", "overlay__data overlay__data_secondary"),
            ("data-list-description", ""),
        ],
        &book.description,
    );
    close(&mut writer, "div");

    open(&mut writer, "div", &[("class", "overlay__row")]);
    text_element(
        &mut writer,
        "a",
        &[
            ("class", "overlay__button overlay__button_primary"),
            ("data-list-close", ""),
            ("href", "/"),
        ],
        "Close",
    );
    close(&mut writer, "div");
    close(&mut writer, "dialog");
    finish(writer)
}

/// `<option>` list with a leading `any` sentinel followed by every lookup
/// entry. The entry whose value equals `selected` is marked selected.
fn write_filter_options(writer: &mut HtmlWriter, lookup: &Lookup, any_label: &str, selected: &str) {
    write_option(writer, ANY, any_label, selected == ANY);
    for (id, name) in lookup {
        write_option(writer, id, name, selected == id.as_str());
    }
}

/// Labelled `<select>` for one search dimension.
fn write_filter_select(
    writer: &mut HtmlWriter,
    label: &str,
    name: &str,
    marker: &str,
    options: (&Lookup, &str, &str),
) {
    let (lookup, any_label, selected) = options;
    open(writer, "label", &[("class", "overlay__field")]);
    text_element(writer, "div", &[("class", "overlay__label")], label);
    open(
        writer,
        "select",
        &[
            ("class", "overlay__input overlay__input_select"),
            (marker, ""),
            ("name", name),
        ],
    );
    write_filter_options(writer, lookup, any_label, selected);
    close(writer, "select");
    close(writer, "label");
}

fn write_option(writer: &mut HtmlWriter, value: &str, label: &str, selected: bool) {
    let mut attrs = vec![("value", value)];
    if selected {
        attrs.push(("selected", ""));
    }
    text_element(writer, "option", &attrs, label);
}

/// Label for the "show more" button.
pub fn show_more_label(remaining: usize) -> String {
    format!("Show more ({})", remaining)
}

/// "Show more" form; the button is disabled when nothing remains.
pub fn show_more_button(remaining: usize) -> String {
    let label = show_more_label(remaining);
    let mut attrs = vec![
        ("class", "list__button"),
        ("data-list-button", ""),
        ("type", "submit"),
    ];
    if remaining == 0 {
        attrs.push(("disabled", ""));
    }

    let mut writer = new_writer();
    open(
        &mut writer,
        "form",
        &[("method", "post"), ("action", "/list/more")],
    );
    text_element(&mut writer, "button", &attrs, &label);
    close(&mut writer, "form");
    finish(writer)
}

/// The "no results" message, shown only when `visible`.
pub fn list_message(visible: bool) -> String {
    let class = if visible {
        format!("list__message {}", MESSAGE_SHOW_CLASS)
    } else {
        "list__message".to_string()
    };

    let mut writer = new_writer();
    text_element(
        &mut writer,
        "div",
        &[("class", class.as_str()), ("data-list-message", "")],
        "No results found. Your filters might be too narrow.",
    );
    finish(writer)
}

/// `:root` rule setting the theme's color variables.
pub fn theme_style(theme: Theme) -> String {
    let vars: Vec<String> = theme
        .css_variables()
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect();
    format!(":root {{ {} }}", vars.join(" "))
}

fn search_form(catalog: &Catalog, criteria: &FilterCriteria) -> String {
    let mut writer = new_writer();
    open(
        &mut writer,
        "form",
        &[
            ("class", "overlay__form"),
            ("data-search-form", ""),
            ("method", "post"),
            ("action", "/search"),
        ],
    );

    open(&mut writer, "label", &[("class", "overlay__field")]);
    text_element(&mut writer, "div", &[("class", "overlay__label")], "Title");
    void(
        &mut writer,
        "input",
        &[
            ("class", "overlay__input"),
            ("data-search-title", ""),
            ("name", "title"),
            ("placeholder", "Any"),
            ("value", criteria.title.as_str()),
        ],
    );
    close(&mut writer, "label");

    write_filter_select(
        &mut writer,
        "Genre",
        "genre",
        "data-search-genres",
        (catalog.genres(), "All Genres", criteria.genre.as_str()),
    );
    write_filter_select(
        &mut writer,
        "Author",
        "author",
        "data-search-authors",
        (catalog.authors(), "All Authors", criteria.author.as_str()),
    );
    text_element(
        &mut writer,
        "button",
        &[("class", "overlay__button overlay__button_primary"), ("type", "submit")],
        "Search",
    );
    close(&mut writer, "form");
    finish(writer)
}

fn settings_form(theme: Theme) -> String {
    let mut writer = new_writer();
    open(
        &mut writer,
        "form",
        &[
            ("class", "overlay__form"),
            ("data-settings-form", ""),
            ("method", "post"),
            ("action", "/settings"),
        ],
    );
    open(&mut writer, "label", &[("class", "overlay__field")]);
    text_element(&mut writer, "div", &[("class", "overlay__label")], "Theme");
    open(
        &mut writer,
        "select",
        &[
            ("class", "overlay__input overlay__input_select"),
            ("data-settings-theme", ""),
            ("name", "theme"),
        ],
    );
    for (candidate, label) in [(Theme::Day, "Day"), (Theme::Night, "Night")] {
        write_option(&mut writer, candidate.as_str(), label, candidate == theme);
    }
    close(&mut writer, "select");
    close(&mut writer, "label");
    text_element(
        &mut writer,
        "button",
        &[("class", "overlay__button overlay__button_primary"), ("type", "submit")],
        "Save",
    );
    close(&mut writer, "form");
    finish(writer)
}

/// Everything needed to render the browser page.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    /// Document title.
    pub title: &'a str,
    /// Catalog supplying the lookups.
    pub catalog: &'a Catalog,
    /// Books visible in the list.
    pub books: &'a [Book],
    /// Criteria pre-filled into the search form.
    pub criteria: &'a FilterCriteria,
    /// Books not yet revealed.
    pub remaining: usize,
    /// Whether the active match set is empty.
    pub no_results: bool,
    /// Effective color theme.
    pub theme: Theme,
    /// Book shown in the detail overlay, if any.
    pub active: Option<&'a Book>,
}

/// Render the whole document.
pub fn page(view: &PageView<'_>) -> String {
    let detail = view
        .active
        .map(|book| detail_panel(book, view.catalog))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>
        {theme}
        body {{ font-family: system-ui, sans-serif; margin: 0; color: rgb(var(--color-dark)); background: rgb(var(--color-light)); }}
        .header {{ display: flex; gap: 1rem; align-items: baseline; padding: 1rem 2rem; }}
        .overlay {{ border: 0; border-radius: 8px; max-width: 32rem; color: inherit; background: inherit; }}
        .list__items {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; padding: 1rem 2rem; }}
        .preview {{ display: flex; gap: 1rem; color: inherit; text-decoration: none; }}
        .preview__image {{ width: 48px; height: 70px; object-fit: cover; }}
        .list__message {{ display: none; padding: 2rem; text-align: center; }}
        .{message_show} {{ display: block; }}
        .list__button {{ display: block; margin: 1rem auto 3rem; }}
    </style>
</head>
<body>
    <header class="header">
        <h1 class="header__text">{title}</h1>
        <details class="overlay__search" data-search-overlay>
            <summary data-header-search>Search</summary>
            {search}
        </details>
        <details class="overlay__settings" data-settings-overlay>
            <summary data-header-settings>Settings</summary>
            {settings}
        </details>
    </header>
    <main class="list">
        {list}
        {message}
        {more}
    </main>
    {detail}
</body>
</html>"#,
        title = escape(view.title),
        theme = theme_style(view.theme),
        message_show = MESSAGE_SHOW_CLASS,
        search = search_form(view.catalog, view.criteria),
        settings = settings_form(view.theme),
        list = book_list(view.books, view.catalog),
        message = list_message(view.no_results),
        more = show_more_button(view.remaining),
        detail = detail,
    )
}
