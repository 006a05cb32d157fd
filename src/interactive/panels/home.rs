use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::{EMPTY_STATE_MESSAGE, LOADING_MESSAGE};
use crate::formatting::utils::format_short_date;
use crate::home::{
    HomeAction, HomeView, HERO_TAGLINE, HERO_TITLE, RECENT_TITLE, STATS, WELCOME_CLOSING,
    WELCOME_PARAGRAPHS, WELCOME_ROLE, WELCOME_SIGNER, WELCOME_TITLE,
};
use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::{columns, home_layout};
use crate::interactive::ui::{kind_badge, ACCENT};

pub fn draw_home(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let layout = home_layout(area);
    let focused = app.home.focused_action(app.home_preview_len());

    draw_hero(frame, layout.hero, focused);
    draw_stats(frame, layout.stats);
    draw_welcome(frame, layout.welcome);
    draw_recent(frame, layout.recent, app, focused);
}

fn button(action: HomeAction, focused: HomeAction) -> Span<'static> {
    let style = if action == focused {
        Style::default().fg(ACCENT).bg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("[ {} ]", action.label()), style)
}

fn draw_hero(frame: &mut Frame, area: Rect, focused: HomeAction) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(Color::Rgb(4, 120, 87)));

    let lines = vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(HERO_TAGLINE, Style::default().fg(Color::Rgb(209, 250, 229)))),
        Line::from(vec![
            button(HomeAction::SeeBoard, focused),
            Span::raw("  "),
            button(HomeAction::ContactUs, focused),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn draw_stats(frame: &mut Frame, area: Rect) {
    for (stat, column) in STATS.iter().zip(columns(area, STATS.len())) {
        let lines = vec![
            Line::from(Span::styled(
                stat.value,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(stat.label, Style::default().fg(Color::Gray))),
        ];
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(card, column);
    }
}

fn draw_welcome(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", WELCOME_TITLE))
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines: Vec<Line> = Vec::new();
    for paragraph in WELCOME_PARAGRAPHS {
        lines.push(Line::from(Span::styled(paragraph, Style::default().fg(Color::Gray))));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        WELCOME_CLOSING,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        WELCOME_SIGNER,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(WELCOME_ROLE, Style::default().fg(Color::Gray))));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn draw_recent(frame: &mut Frame, area: Rect, app: &InteractiveApp, focused: HomeAction) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", RECENT_TITLE))
        .title(
            ratatui::widgets::block::Title::from(button(HomeAction::ViewAll, focused))
                .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let preview = HomeView::preview(&app.snapshot.data);
    if app.snapshot.loading || preview.is_empty() {
        let message = if app.snapshot.loading { LOADING_MESSAGE } else { EMPTY_STATE_MESSAGE };
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    for (idx, (item, column)) in preview.iter().zip(columns(inner, preview.len())).enumerate() {
        let is_focused = focused == HomeAction::OpenPreview(idx);
        let border = if is_focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines = vec![
            Line::from(vec![
                kind_badge(item.kind),
                Span::raw(" "),
                Span::styled(format_short_date(&item.published_at), Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(Span::styled(
                item.title.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(item.summary.as_str(), Style::default().fg(Color::Gray))),
        ];

        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(card, column);
    }
}
