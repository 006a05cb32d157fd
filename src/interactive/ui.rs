use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::InteractiveApp;
use super::layout::app_layout;
use super::panels;
use super::popups;
use super::state::ViewMode;
use crate::models::{NewsKind, Page};

pub const ACCENT: Color = Color::Rgb(5, 150, 105);
pub const MUTED: Color = Color::DarkGray;

pub fn kind_color(kind: NewsKind) -> Color {
    match kind {
        NewsKind::Berita => Color::Rgb(37, 99, 235),
        NewsKind::Pengumuman => Color::Rgb(234, 88, 12),
    }
}

/// Badge span such as ` Berita `.
pub fn kind_badge(kind: NewsKind) -> Span<'static> {
    Span::styled(
        format!(" {} ", kind.label()),
        Style::default()
            .fg(Color::White)
            .bg(kind_color(kind))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let layout = app_layout(frame.size());

    panels::header::draw_header(frame, layout.header, app);

    match app.page {
        Page::Beranda => panels::home::draw_home(frame, layout.main, app),
        Page::Berita => panels::news::draw_news(frame, layout.main, app),
        Page::Struktur | Page::Kontak => panels::placeholder::draw_placeholder(frame, layout.main, app.page),
    }

    draw_footer(frame, layout.footer, app);

    if app.show_help {
        popups::help::draw(frame, frame.size());
    }
}

fn key_hints(app: &InteractiveApp) -> Vec<(&'static str, &'static str)> {
    let mut hints = match app.page {
        Page::Beranda => vec![("↑↓", "pilih"), ("Enter", "buka")],
        Page::Berita if app.snapshot.loading => vec![],
        Page::Berita => match app.news_mode() {
            ViewMode::Listing => vec![
                ("↑↓", "pilih"),
                ("Enter", "baca"),
                ("f", "filter"),
                ("Esc", "beranda"),
            ],
            ViewMode::Detail => vec![("↑↓", "gulir"), ("Esc", "kembali")],
        },
        Page::Struktur | Page::Kontak => vec![("Esc", "beranda")],
    };
    hints.extend([("r", "muat ulang"), ("?", "bantuan"), ("q", "keluar")]);
    hints
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let mut spans = Vec::new();
    for (key, desc) in key_hints(app) {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("{} ", desc), Style::default().fg(MUTED)));
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(error) = &app.snapshot.error {
        lines.push(Line::from(Span::styled(
            format!(" ✗ Gagal memuat berita: {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}


#[cfg(test)]
mod tests {
    use super::test_support::{buffer_text, render};
    use super::*;
    use crate::feed::sample::sample_items;
    use crate::feed::FeedSnapshot;

    #[test]
    fn test_footer_shows_feed_error() {
        let mut snapshot = FeedSnapshot::loaded(sample_items());
        snapshot.error = Some("HTTP error 503".to_string());
        let app = InteractiveApp::new(Page::Beranda, snapshot);

        let text = buffer_text(&render(&app, 100, 40));
        assert!(text.contains("Gagal memuat berita: HTTP error 503"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = InteractiveApp::new(Page::Beranda, FeedSnapshot::loaded(sample_items()));
        app.show_help = true;
        let text = buffer_text(&render(&app, 100, 40));
        assert!(text.contains("Pintasan Keyboard"));
    }
}
