//! Quote Browser — a terminal client that fetches quotes from a remote API, prints a
//! random sample of them and lets the user page through the rest, search, and keep a
//! list of favorites that survives restarts.
//!
//! Usage example (CLI):
//! ```bash
//! quote_browser --limit 100 --storage ./favorites.json
//! ```
//!
//! Once the first page is printed, type `help` for the list of commands.
#![warn(missing_docs)]
mod args;

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use quote_browser::command::{Command, HELP};
use quote_browser::presenter::{ConsolePresenter, format_line};
use quote_browser::source::HttpQuoteSource;
use quote_browser::storage::{FileStorage, KeyValueStorage};
use quote_browser::{Config, FavoritesStore, QuoteSession};
use quote_common::{Quote, QuoteError, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let config = Config::from(Args::parse());

    let mut favorites = FavoritesStore::new(FileStorage::open(&config.storage_path)?);
    favorites.load()?;

    let presenter = Arc::new(ConsolePresenter::new());
    presenter.set_favorites(favorites.ids());
    let session = QuoteSession::new(
        Arc::new(HttpQuoteSource::with_base_url(&config.api_url)),
        presenter.clone(),
    )
    .with_limit(config.limit);

    info!("Loading {} quotes from {}", config.limit, config.api_url);
    session.try_load_all().await?;
    print_quotes(&session.displayed(), &favorites);
    println!("{}", HELP);

    run_prompt(&session, &presenter, &mut favorites).await
}

/// Reads commands from stdin until `quit` or end of input.
async fn run_prompt<S: KeyValueStorage>(
    session: &QuoteSession,
    presenter: &ConsolePresenter,
    favorites: &mut FavoritesStore<S>,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut search_term: Option<String> = None;

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{}", e);
                println!("{}", HELP);
                continue;
            }
        };

        match command {
            Command::More => {
                let added = session.append_more(search_term.is_some()).await;
                presenter.finished().await;
                if search_term.is_some() {
                    println!("Leave search with `clear` to load more quotes.");
                } else if added == 0 {
                    println!("All {} quotes are displayed.", session.all_quotes().len());
                }
            }
            Command::List => print_quotes(&session.displayed(), favorites),
            Command::Fav(id) => {
                let now_favorite = favorites.toggle(id)?;
                presenter.set_favorites(favorites.ids());
                if now_favorite {
                    println!("Added #{} to favorites.", id);
                } else {
                    println!("Removed #{} from favorites.", id);
                }
            }
            Command::Favs => print_favorites(session, favorites),
            Command::Search(term) => {
                let found = session.search(&term);
                println!("{} quotes match \"{}\":", found.len(), term);
                print_quotes(&found, favorites);
                search_term = Some(term);
            }
            Command::Clear => {
                search_term = None;
                print_quotes(&session.displayed(), favorites);
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }
    info!("Bye");
    Ok(())
}

fn print_quotes<S: KeyValueStorage>(quotes: &[Quote], favorites: &FavoritesStore<S>) {
    for (index, quote) in quotes.iter().enumerate() {
        println!("{}", format_line(index, quote, favorites.is_favorite(quote.id)));
    }
}

fn print_favorites<S: KeyValueStorage>(session: &QuoteSession, favorites: &FavoritesStore<S>) {
    if favorites.ids().is_empty() {
        println!("No favorites yet. Use `fav <id>`.");
        return;
    }
    let all = session.all_quotes();
    for id in favorites.ids() {
        match all.get(*id) {
            Some(quote) => println!("  * {}", quote),
            None => println!("  * #{} (not in the fetched quotes)", id),
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
