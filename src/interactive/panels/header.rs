use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::ASSOCIATION_NAME;
use crate::interactive::app::InteractiveApp;
use crate::interactive::ui::ACCENT;
use crate::models::Page;

pub fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width = area.width as usize;

    let mut left = vec![Span::styled(
        format!(" {} ", ASSOCIATION_NAME),
        Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    for (key, page) in [("1", Page::Beranda), ("2", Page::Berita)] {
        let style = if app.page == page {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        left.push(Span::raw("  "));
        left.push(Span::styled(format!("{} {}", key, page.title()), style));
    }
    if matches!(app.page, Page::Struktur | Page::Kontak) {
        left.push(Span::raw("  "));
        left.push(Span::styled(
            app.page.title(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ));
    }

    // Right: feed status
    let status = if app.snapshot.loading {
        Span::styled("⟳ memuat ", Style::default().fg(Color::Yellow))
    } else if app.snapshot.error.is_some() {
        Span::styled("✗ feed bermasalah ", Style::default().fg(Color::Red))
    } else {
        Span::styled(
            format!("● {} item ", app.snapshot.data.len()),
            Style::default().fg(Color::DarkGray),
        )
    };

    let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_len + status.content.chars().count());

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(status);

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(20, 22, 30)));
    frame.render_widget(header, area);
}
