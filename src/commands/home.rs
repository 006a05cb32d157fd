use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, KalitaResult};
use crate::feed::first_loaded;
use crate::formatting::news::print_home;
use crate::home::HomeView;

pub async fn handle_home(_matches: &ArgMatches, context: &mut CliContext) -> KalitaResult<()> {
    let feed = context.feed().context("Failed to open the news feed")?;
    let snapshot = first_loaded(feed.as_ref()).await?;

    print_home(HomeView::preview(&snapshot.data), snapshot.loading);

    if let Some(error) = &snapshot.error {
        eprintln!("Gagal memuat berita: {}", error);
    }
    Ok(())
}
