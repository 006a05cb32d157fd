use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::interactive::layout::centered_popup;
use crate::interactive::ui::ACCENT;
use crate::models::Page;

/// Pages whose content is not part of this client.
pub fn draw_placeholder(frame: &mut Frame, area: Rect, page: Page) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", page.title()))
        .border_style(Style::default().fg(ACCENT));

    let lines = vec![
        Line::from(Span::styled(
            page.title(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Halaman ini belum tersedia di aplikasi terminal.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Tekan Esc untuk kembali ke Beranda.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = centered_popup(56, 8, area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, popup);
}
