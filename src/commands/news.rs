use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{KalitaError, KalitaResult};
use crate::filtering::{filter_items, CategoryFilter};
use crate::formatting::news::{print_news, print_single_news};
use crate::logging::log_debug;

pub async fn handle_news(matches: &ArgMatches, context: &mut CliContext) -> KalitaResult<()> {
    let filter = matches
        .get_one::<String>("type")
        .map(|s| s.parse::<CategoryFilter>())
        .transpose()?
        .unwrap_or_default();
    let format = matches.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("simple");
    let limit = matches
        .get_one::<String>("limit")
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| KalitaError::InvalidInput(format!("invalid limit '{}'", s)))
        })
        .transpose()?;

    log_debug(&format!("news: filter={} format={} limit={:?}", filter, format, limit));

    if context.is_demo() {
        let items = context.demo_items();
        let mut visible = filter_items(&items, filter);
        if let Some(limit) = limit {
            visible.truncate(limit);
        }
        return print_news(&visible, format);
    }

    let client = context.client()?;
    let items = client.get_news(filter, limit).await?;
    print_news(&items.iter().collect::<Vec<_>>(), format)
}

pub async fn handle_show(matches: &ArgMatches, context: &mut CliContext) -> KalitaResult<()> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| KalitaError::InvalidInput("news id is required".to_string()))?;

    let item = if context.is_demo() {
        context
            .demo_items()
            .into_iter()
            .find(|item| &item.id == id)
            .ok_or_else(|| KalitaError::NotFound(format!("news item '{}'", id)))?
    } else {
        context.client()?.get_news_item(id).await?
    };

    print_single_news(&item);
    Ok(())
}
