use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, KalitaResult};
use crate::interactive::run_interactive_mode;
use crate::models::Page;

pub async fn handle_tui(matches: &ArgMatches, context: &mut CliContext) -> KalitaResult<()> {
    let page = matches
        .get_one::<String>("page")
        .map(|s| s.parse::<Page>())
        .transpose()?
        .unwrap_or(Page::Beranda);

    let feed = context.feed().context("Failed to open the news feed")?;
    run_interactive_mode(feed.as_ref(), page).await
}
