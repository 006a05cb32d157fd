use colored::*;

use super::theme::helpers::{kind_color, kind_symbol};
use super::theme::{SemanticColor, ThemedColorize};
use super::utils::*;
use crate::constants::{EMPTY_STATE_MESSAGE, READ_MORE_HINT, WRITTEN_BY};
use crate::error::KalitaResult;
use crate::home::{
    HERO_TAGLINE, HERO_TITLE, RECENT_TITLE, STATS, WELCOME_CLOSING, WELCOME_PARAGRAPHS, WELCOME_ROLE,
    WELCOME_SIGNER, WELCOME_TITLE,
};
use crate::models::{NewsItem, NewsKind};

const TEXT_WIDTH: usize = 78;

pub fn kind_badge(kind: NewsKind) -> ColoredString {
    format!("{} {}", kind_symbol(kind), kind.label())
        .with_theme(kind_color(kind))
        .bold()
}

/// JSON array of the items; `[]` when there are none.
pub fn news_json(items: &[&NewsItem]) -> KalitaResult<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Print a list of items in `simple`, `table` or `json` form.
pub fn print_news(items: &[&NewsItem], format: &str) -> KalitaResult<()> {
    if format == "json" {
        println!("{}", news_json(items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("{}", EMPTY_STATE_MESSAGE.dimmed());
        return Ok(());
    }

    match format {
        "table" => {
            println!("{}", "─".repeat(100).dimmed());
            println!(
                "{:<8} {:<12} {:<11} {:<45} {:<20}",
                "ID".bold(),
                "Jenis".bold(),
                "Tanggal".bold(),
                "Judul".bold(),
                "Penulis".bold()
            );
            println!("{}", "─".repeat(100).dimmed());
            for item in items {
                println!(
                    "{:<8} {:<12} {:<11} {:<45} {:<20}",
                    truncate(&item.id, 8).with_theme(SemanticColor::Muted),
                    item.kind.label().with_theme(kind_color(item.kind)),
                    format_short_date(&item.published_at),
                    truncate(&item.title, 45),
                    truncate(&item.author, 20).green()
                );
            }
            println!("{}", "─".repeat(100).dimmed());
        }
        _ => {
            for item in items {
                println!(
                    "\n{}  {}  {}",
                    kind_badge(item.kind),
                    format_short_date(&item.published_at).dimmed(),
                    format!("#{}", item.id).with_theme(SemanticColor::Muted)
                );
                println!("{}", item.title.bold());
                for line in wrap_text(&item.summary, TEXT_WIDTH) {
                    println!("  {}", line.with_theme(SemanticColor::Secondary));
                }
                println!("  {}", READ_MORE_HINT.with_theme(SemanticColor::Accent));
            }
            println!();
        }
    }

    Ok(())
}

/// Print one item the way the detail page shows it.
pub fn print_single_news(item: &NewsItem) {
    println!(
        "\n{}  {}",
        kind_badge(item.kind),
        format_long_date(&item.published_at).dimmed()
    );
    println!("{}\n", item.title.bold().underline());
    for line in wrap_text(&item.content, TEXT_WIDTH) {
        println!("{}", line);
    }
    println!("\n{}", "─".repeat(40).dimmed());
    println!("{} {}", WRITTEN_BY.dimmed(), item.author.bold());
}

/// Print the home page with a preview of the given recent items.
pub fn print_home(recent: &[NewsItem], loading: bool) {
    println!("\n{}", HERO_TITLE.with_theme(SemanticColor::Header).bold());
    for line in wrap_text(HERO_TAGLINE, TEXT_WIDTH) {
        println!("{}", line.with_theme(SemanticColor::Secondary));
    }

    println!();
    let stats: Vec<String> = STATS
        .iter()
        .map(|s| format!("{} {}", s.value.bold(), s.label.dimmed()))
        .collect();
    println!("{}", stats.join("   │   "));

    println!("\n{}", WELCOME_TITLE.bold());
    for paragraph in WELCOME_PARAGRAPHS {
        for line in wrap_text(paragraph, TEXT_WIDTH) {
            println!("{}", line);
        }
        println!();
    }
    println!("{}", WELCOME_CLOSING.bold());
    println!("{}", WELCOME_SIGNER.with_theme(SemanticColor::Accent).bold());
    println!("{}", WELCOME_ROLE.dimmed());

    println!("\n{}", RECENT_TITLE.bold());
    println!("{}", "─".repeat(50).dimmed());
    if loading {
        println!("{}", crate::constants::LOADING_MESSAGE.dimmed());
    } else if recent.is_empty() {
        println!("{}", EMPTY_STATE_MESSAGE.dimmed());
    } else {
        for item in recent {
            println!(
                "{}  {}  {}",
                kind_badge(item.kind),
                format_short_date(&item.published_at).dimmed(),
                item.title.bold()
            );
            println!("    {}", truncate(&item.summary, TEXT_WIDTH - 4).dimmed());
        }
    }
    println!(
        "\n{}",
        "Lihat semua: kalita news   •   Pengurus: kalita tui --page struktur".dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::sample::sample_items;

    #[test]
    fn test_json_output_for_empty_list() {
        assert_eq!(news_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_json_output_keeps_wire_names() {
        let items = sample_items();
        let refs: Vec<&NewsItem> = items.iter().take(2).collect();
        let value: serde_json::Value = serde_json::from_str(&news_json(&refs).unwrap()).unwrap();

        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], "1");
        assert_eq!(rows[0]["type"], "pengumuman");
        assert_eq!(rows[1]["type"], "berita");
    }
}
