//! bookshelf entry point.

use bookshelf::{
    config::{Cli, Command, Config},
    filter::FilterCriteria,
    library::Catalog,
    pagination, server,
};
use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Find or load config
    let config_path = cli.config.clone().or_else(Config::find_config_file);

    let config = if let Some(ref path) = config_path {
        Config::load(path)?
    } else {
        Config::default()
    };

    match cli.command {
        Some(Command::Init { force }) => cmd_init(force),
        Some(Command::Search {
            genre,
            title,
            author,
            page,
        }) => cmd_search(&config, FilterCriteria::new(&genre, &title, &author), page),
        Some(Command::Show { id }) => cmd_show(&config, &id),
        Some(Command::Serve { bind, catalog }) => cmd_serve(config, bind, catalog).await,
        None => cmd_serve(config, None, None).await,
    }
}

/// Write a default config file.
fn cmd_init(force: bool) -> anyhow::Result<()> {
    let config_path = PathBuf::from("config.toml");

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, Config::generate_default())?;
    println!("Created config file: {}", config_path.display());
    println!("\nPoint [catalog] path at your catalog JSON, then run: bookshelf serve");

    Ok(())
}

/// Print one page of matches.
fn cmd_search(config: &Config, criteria: FilterCriteria, page: usize) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config.catalog.path)?;
    let matches = catalog.filter(&criteria);

    if matches.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    let (books, remaining) = pagination::page_of(&matches, page, config.catalog.page_size);

    println!("{:<24} {:<40} AUTHOR", "ID", "TITLE");
    println!("{}", "-".repeat(90));
    for book in books {
        println!(
            "{:<24} {:<40} {}",
            book.id,
            book.title,
            catalog.author_name(&book.author)
        );
    }
    println!(
        "\n{} of {} matches shown on page {} ({} remaining)",
        books.len(),
        matches.len(),
        page.max(1),
        remaining
    );

    Ok(())
}

/// Print a single book.
fn cmd_show(config: &Config, id: &str) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config.catalog.path)?;
    let Some(book) = catalog.get_book(id) else {
        anyhow::bail!("Book not found: {}", id);
    };

    let genres: Vec<&str> = book.genres.iter().map(|g| catalog.genre_name(g)).collect();

    println!("{}", book.title);
    println!(
        "{} ({})",
        catalog.author_name(&book.author),
        book.published_year()
    );
    println!("Genres: {}", genres.join(", "));
    println!("Image:  {}", book.image);
    println!("\n{}", book.description);

    Ok(())
}

/// Start the server.
async fn cmd_serve(
    mut config: Config,
    bind: Option<std::net::SocketAddr>,
    catalog: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(addr) = bind {
        config.server.bind = addr;
    }
    if let Some(path) = catalog {
        config.catalog.path = path;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        bind = %config.server.bind,
        catalog = %config.catalog.path.display(),
        page_size = config.catalog.page_size,
        "Starting bookshelf server"
    );

    let catalog = Catalog::load(&config.catalog.path)?;
    if catalog.is_empty() {
        tracing::warn!("Catalog is empty; the browser will show no books");
    }

    let bind = config.server.bind;
    let state = server::AppState::new(config, catalog);
    let app = server::create_router(state);

    let listener = TcpListener::bind(bind).await?;
    tracing::info!(address = %bind, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
