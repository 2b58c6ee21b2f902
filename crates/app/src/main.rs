//! Holocron - Main Entry Point
//!
//! Terminal client for the character catalog. Loads settings, wires the
//! HTTP adapter into the catalog store and runs the command loop on stdin.

mod commands;
mod logging;
mod render;

use std::io::Write;
use std::sync::Arc;

use holocron_application::{CatalogApi, CatalogStore, SyncError, SyncResult};
use holocron_domain::Record;
use holocron_infrastructure::{ReqwestCatalogApi, SettingsRepository};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::commands::{Command, HELP};

type Store = CatalogStore<dyn CatalogApi>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging()?;

    let repository = SettingsRepository::new();
    let settings = repository.load_effective().await?;
    info!(base_url = %settings.base_url, page_size = settings.page_size, "starting");

    let api: Arc<dyn CatalogApi> = Arc::new(ReqwestCatalogApi::new(&settings)?);
    let store: Store = CatalogStore::new(api, &settings)?;

    let (species, initial) = tokio::join!(store.load_species_options(), store.refresh());
    info!(species, "species options loaded");
    report(&store, initial.map(Some)).await;

    println!("{HELP}");
    run(store).await?;
    Ok(())
}

/// Reads commands until `quit` or end of input.
async fn run(store: Store) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => handle(&store, command).await,
            Err(e) => println!("{e}"),
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

async fn handle(store: &Store, command: Command) {
    match command {
        Command::Page(page) => spawn_sync(store, move |s| async move { s.set_page(page).await }),
        Command::Select(selection) => spawn_sync(store, move |s| async move {
            s.select_ui_page(selection).await
        }),
        Command::Search(text) => spawn_sync(store, move |s| async move { s.set_search(text).await }),
        Command::Species(value) => spawn_sync(store, move |s| async move {
            s.set_species_filter(value).await
        }),
        Command::Retry => spawn_sync(store, |s| async move { s.retry().await.map(Some) }),
        Command::Favorite(number) => match card(store, number).await.and_then(|r| r.id()) {
            Some(id) => {
                let added = store.toggle_favorite(id).await;
                println!("{}", if added { "added to favorites" } else { "removed from favorites" });
            }
            None => println!("no card {number} on this page"),
        },
        Command::Favorites => print!("{}", render::render_favorites(&store.snapshot().await)),
        Command::Details(number) => {
            let Some(record) = card(store, number).await else {
                println!("no card {number} on this page");
                return;
            };
            if let Some(details) = store.open_details(record).await {
                print!("{}", render::render_details(&details));
            }
        }
        Command::Close => store.close_details().await,
        Command::SpeciesOptions => {
            print!("{}", render::render_species_options(&store.snapshot().await));
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

/// Runs a query-changing intent in the background so later input can
/// supersede it.
fn spawn_sync<F, Fut>(store: &Store, intent: F)
where
    F: FnOnce(Store) -> Fut + Send + 'static,
    Fut: Future<Output = SyncResult> + Send + 'static,
{
    let store = store.clone();
    tokio::spawn(async move {
        let result = intent(store.clone()).await;
        report(&store, result).await;
    });
}

async fn report(store: &Store, result: SyncResult) {
    match result {
        Ok(None) | Err(SyncError::Superseded) => {}
        Ok(Some(_)) => print!("\n{}", render::render_page(&store.snapshot().await)),
        Err(SyncError::Fetch(e)) => {
            warn!(kind = e.kind().title(), error = %e, "load failed");
            print!("\n{}", render::render_page(&store.snapshot().await));
        }
    }
}

/// The n-th card (one-indexed) on the current page.
async fn card(store: &Store, number: usize) -> Option<Record> {
    let snapshot = store.snapshot().await;
    number
        .checked_sub(1)
        .and_then(|index| snapshot.results().items().get(index))
        .cloned()
}
