use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::ViewMode;
use crate::filtering::CategoryFilter;
use crate::models::{NewsKind, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    Activate,
    Back,
    GoTo(Page),

    // News listing
    CycleFilter,
    SetFilter(CategoryFilter),

    // General
    Refresh,
    Help,
    CloseHelp,
    Quit,

    None,
}

pub fn map_key(key: KeyEvent, page: Page, news_mode: ViewMode, show_help: bool) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    if show_help {
        return match key.code {
            KeyCode::Char('q') => Action::Quit,
            _ => Action::CloseHelp,
        };
    }

    if let Some(action) = map_global_key(key.code) {
        return action;
    }

    match page {
        Page::Beranda => map_home_key(key.code),
        Page::Berita => match news_mode {
            ViewMode::Listing => map_listing_key(key.code),
            ViewMode::Detail => map_detail_key(key.code),
        },
        Page::Struktur | Page::Kontak => map_placeholder_key(key.code),
    }
}

fn map_global_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('1') => Some(Action::GoTo(Page::Beranda)),
        KeyCode::Char('2') => Some(Action::GoTo(Page::Berita)),
        _ => None,
    }
}

fn map_home_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::BackTab => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Tab => Action::MoveDown,
        KeyCode::Enter => Action::Activate,
        _ => Action::None,
    }
}

fn map_listing_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Enter => Action::Activate,
        KeyCode::Char('f') | KeyCode::Tab => Action::CycleFilter,
        KeyCode::Char('a') => Action::SetFilter(CategoryFilter::All),
        KeyCode::Char('b') => Action::SetFilter(CategoryFilter::Only(NewsKind::Berita)),
        KeyCode::Char('p') => Action::SetFilter(CategoryFilter::Only(NewsKind::Pengumuman)),
        KeyCode::Esc | KeyCode::Char('h') => Action::GoTo(Page::Beranda),
        _ => Action::None,
    }
}

fn map_detail_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('h') => Action::Back,
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        _ => Action::None,
    }
}

fn map_placeholder_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => Action::GoTo(Page::Beranda),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_b_means_filter_in_listing_and_back_in_detail() {
        assert_eq!(
            map_key(key(KeyCode::Char('b')), Page::Berita, ViewMode::Listing, false),
            Action::SetFilter(CategoryFilter::Only(NewsKind::Berita))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('b')), Page::Berita, ViewMode::Detail, false),
            Action::Back
        );
    }

    #[test]
    fn test_help_swallows_keys() {
        assert_eq!(
            map_key(key(KeyCode::Enter), Page::Beranda, ViewMode::Listing, true),
            Action::CloseHelp
        );
        assert_eq!(
            map_key(key(KeyCode::Char('q')), Page::Beranda, ViewMode::Listing, true),
            Action::Quit
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, Page::Kontak, ViewMode::Listing, true), Action::Quit);
    }

    #[test]
    fn test_global_page_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('2')), Page::Beranda, ViewMode::Listing, false),
            Action::GoTo(Page::Berita)
        );
        assert_eq!(
            map_key(key(KeyCode::Esc), Page::Struktur, ViewMode::Listing, false),
            Action::GoTo(Page::Beranda)
        );
    }
}
