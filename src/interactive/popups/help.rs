use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::layout::centered_popup;

const SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Umum",
        &[
            ("1 / 2", "Beranda / Berita"),
            ("r", "Muat ulang berita"),
            ("?", "Bantuan"),
            ("q", "Keluar"),
        ],
    ),
    (
        "Beranda",
        &[
            ("↑↓ / Tab", "Pindah pilihan"),
            ("Enter", "Buka pilihan"),
        ],
    ),
    (
        "Berita",
        &[
            ("↑↓ / j k", "Pilih berita / gulir"),
            ("Enter", "Baca selengkapnya"),
            ("f", "Ganti filter"),
            ("a b p", "Semua / Berita / Pengumuman"),
            ("Esc", "Kembali"),
        ],
    ),
];

/// Draw the keyboard shortcuts overlay.
pub fn draw(frame: &mut Frame, area: Rect) {
    let popup_area = centered_popup(52, 19, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Pintasan Keyboard ")
        .border_style(Style::default().fg(Color::Cyan));

    let header_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines: Vec<Line> = Vec::new();
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(title, header_style)));
        for (key, desc) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", key), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
    }
    lines.push(Line::from(Span::styled(
        "Tekan tombol apa saja untuk menutup",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
