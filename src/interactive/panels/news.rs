use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::constants::{BACK_TO_LIST, EMPTY_STATE_MESSAGE, LOADING_MESSAGE, READ_MORE_HINT, WRITTEN_BY};
use crate::filtering::CategoryFilter;
use crate::formatting::utils::{format_long_date, format_short_date, truncate};
use crate::interactive::app::InteractiveApp;
use crate::interactive::state::NewsScreen;
use crate::interactive::ui::{kind_badge, ACCENT, MUTED};
use crate::models::NewsItem;

pub fn draw_news(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    match app.news.screen(&app.snapshot) {
        NewsScreen::Loading => draw_loading(frame, area),
        NewsScreen::Detail(item) => draw_detail(frame, area, item, app.detail_scroll),
        NewsScreen::Empty => {
            let body = draw_listing_frame(frame, area, app.news.filter());
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("📰", Style::default().fg(MUTED))),
                Line::from(Span::styled(EMPTY_STATE_MESSAGE, Style::default().fg(Color::Gray))),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(empty, body);
        }
        NewsScreen::List(items) => {
            let body = draw_listing_frame(frame, area, app.news.filter());
            draw_list(frame, body, &items, app.news.cursor());
        }
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let y = area.y + area.height / 2;
    let row = Rect::new(area.x, y.saturating_sub(1), area.width, 2.min(area.height));
    let loading = Paragraph::new(vec![
        Line::from(Span::styled("⟳", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(LOADING_MESSAGE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(loading, row);
}

/// Title, intro and filter tabs. Returns the area left for the list body.
fn draw_listing_frame(frame: &mut Frame, area: Rect, filter: CategoryFilter) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Berita & Pengumuman",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Informasi terkini mengenai kegiatan, pengumuman, dan perkembangan terbaru di lingkungan Cluster Kalita.",
            Style::default().fg(MUTED),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(intro, chunks[0]);

    let selected = CategoryFilter::TABS.iter().position(|t| *t == filter).unwrap_or(0);
    let tabs = Tabs::new(CategoryFilter::TABS.iter().map(|t| t.label()).collect::<Vec<_>>())
        .select(selected)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[1]);

    chunks[2]
}

fn draw_list(frame: &mut Frame, area: Rect, items: &[&NewsItem], cursor: usize) {
    let text_width = (area.width as usize).saturating_sub(4);

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(vec![
                    kind_badge(item.kind),
                    Span::raw(" "),
                    Span::styled(format_short_date(&item.published_at), Style::default().fg(MUTED)),
                ]),
                Line::from(Span::styled(
                    truncate(&item.title, text_width),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(truncate(&item.summary, text_width), Style::default().fg(Color::Gray))),
                Line::from(Span::styled(READ_MORE_HINT, Style::default().fg(ACCENT))),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} item ", items.len()))
                .border_style(Style::default().fg(MUTED)),
        )
        .highlight_style(Style::default().bg(Color::Rgb(30, 41, 59)))
        .highlight_symbol("▌ ");

    let mut state = ListState::default().with_selected(Some(cursor.min(items.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_detail(frame: &mut Frame, area: Rect, item: &NewsItem, scroll: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" ← {} (Esc) ", BACK_TO_LIST))
        .border_style(Style::default().fg(ACCENT));

    let mut lines = vec![
        Line::from(vec![
            kind_badge(item.kind),
            Span::raw("  "),
            Span::styled(format_long_date(&item.published_at), Style::default().fg(MUTED)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            item.title.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    // keep the author's line breaks
    lines.extend(
        item.content
            .lines()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Gray)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("─".repeat(40), Style::default().fg(MUTED))));
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", WRITTEN_BY), Style::default().fg(MUTED)),
        Span::styled(item.author.as_str(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ]));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use crate::feed::sample::sample_items;
    use crate::feed::FeedSnapshot;
    use crate::filtering::CategoryFilter;
    use crate::interactive::app::InteractiveApp;
    use crate::interactive::keys::Action;
    use crate::interactive::ui::test_support::{buffer_text, render};
    use crate::models::{NewsKind, Page};

    #[test]
    fn test_loading_shows_only_indicator() {
        let mut snapshot = FeedSnapshot::loaded(sample_items());
        snapshot.loading = true;
        let app = InteractiveApp::new(Page::Berita, snapshot);

        let text = buffer_text(&render(&app, 100, 30));
        assert!(text.contains("Memuat berita..."));
        assert!(!text.contains("Semua"));
        assert!(!text.contains("Pembayaran Iuran"));
        assert!(!text.contains("Belum ada berita"));
    }

    #[test]
    fn test_empty_state_message() {
        let app = InteractiveApp::new(Page::Berita, FeedSnapshot::loaded(Vec::new()));
        let text = buffer_text(&render(&app, 100, 30));
        assert!(text.contains("Belum ada berita atau pengumuman"));
        assert!(text.contains("Semua"));
        assert!(!text.contains("Memuat berita..."));
    }

    #[test]
    fn test_listing_respects_filter() {
        let mut app = InteractiveApp::new(Page::Berita, FeedSnapshot::loaded(sample_items()));
        app.handle_action(Action::SetFilter(CategoryFilter::Only(NewsKind::Berita)));

        let text = buffer_text(&render(&app, 100, 30));
        assert!(text.contains("Gotong Royong Bersih-Bersih Lingkungan"));
        assert!(!text.contains("Rapat Bulanan Pengurus RT"));
        assert!(text.contains("1 item"));
    }

    #[test]
    fn test_detail_shows_content_date_and_author() {
        let mut app = InteractiveApp::new(Page::Berita, FeedSnapshot::loaded(sample_items()));
        app.handle_action(Action::Activate);

        let text = buffer_text(&render(&app, 110, 40));
        assert!(text.contains("Kembali ke Daftar Berita"));
        assert!(text.contains("Rabu, 15 Januari 2025"));
        assert!(text.contains("Kepada seluruh warga Cluster Kalita yang terhormat,"));
        assert!(text.contains("Ditulis oleh: Ahmad Wijaya"));
        assert!(!text.contains("Semua"));
    }
}
