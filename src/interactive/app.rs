use super::keys::Action;
use super::state::{NewsViewState, ViewMode};
use crate::feed::FeedSnapshot;
use crate::home::HomeView;
use crate::logging::log_debug;
use crate::models::Page;

pub struct InteractiveApp {
    pub page: Page,
    pub home: HomeView,
    pub news: NewsViewState,
    pub snapshot: FeedSnapshot,
    pub detail_scroll: u16,
    pub show_help: bool,
    pub should_quit: bool,
    pub refresh_requested: bool,
}

impl InteractiveApp {
    pub fn new(page: Page, snapshot: FeedSnapshot) -> Self {
        Self {
            page,
            home: HomeView::new(),
            news: NewsViewState::new(),
            snapshot,
            detail_scroll: 0,
            show_help: false,
            should_quit: false,
            refresh_requested: false,
        }
    }

    /// Take a new snapshot from the feed.
    pub fn apply_snapshot(&mut self, snapshot: FeedSnapshot) {
        self.snapshot = snapshot;
        let visible = self.news.visible_items(&self.snapshot.data).len();
        self.news.clamp_cursor(visible);
    }

    pub fn navigate(&mut self, page: Page) {
        log_debug(&format!("Navigate {} -> {}", self.page, page));
        self.page = page;
    }

    pub fn news_mode(&self) -> ViewMode {
        self.news.mode()
    }

    pub fn home_preview_len(&self) -> usize {
        HomeView::preview(&self.snapshot.data).len()
    }

    fn visible_len(&self) -> usize {
        self.news.visible_items(&self.snapshot.data).len()
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::Refresh => self.refresh_requested = true,
            Action::GoTo(page) => self.navigate(page),
            Action::None => {}
            _ => match self.page {
                Page::Beranda => self.handle_home_action(action),
                Page::Berita => self.handle_news_action(action),
                Page::Struktur | Page::Kontak => {
                    if action == Action::Back {
                        self.navigate(Page::Beranda);
                    }
                }
            },
        }
    }

    fn handle_home_action(&mut self, action: Action) {
        let preview_len = self.home_preview_len();
        match action {
            Action::MoveUp => self.home.focus_prev(preview_len),
            Action::MoveDown => self.home.focus_next(preview_len),
            Action::Activate => {
                let focused = self.home.focused_action(preview_len);
                let mut target = None;
                self.home.activate(focused, &mut |page| target = Some(page));
                if let Some(page) = target {
                    self.navigate(page);
                }
            }
            _ => {}
        }
    }

    fn handle_news_action(&mut self, action: Action) {
        // nothing to act on until the first load finishes
        if self.snapshot.loading {
            return;
        }
        let visible = self.visible_len();
        match (self.news.mode(), action) {
            (ViewMode::Detail, Action::Back) => {
                self.news.go_back();
                self.detail_scroll = 0;
            }
            (ViewMode::Detail, Action::MoveUp) => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            (ViewMode::Detail, Action::MoveDown) => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
            (ViewMode::Listing, Action::MoveUp) => self.news.move_up(visible),
            (ViewMode::Listing, Action::MoveDown) => self.news.move_down(visible),
            (ViewMode::Listing, Action::Activate) => {
                if self.news.select_current(&self.snapshot.data) {
                    self.detail_scroll = 0;
                }
            }
            (ViewMode::Listing, Action::CycleFilter) => {
                self.news.cycle_filter();
            }
            (ViewMode::Listing, Action::SetFilter(filter)) => {
                self.news.set_filter(filter);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::sample::sample_items;
    use crate::filtering::CategoryFilter;
    use crate::models::NewsKind;

    fn loaded_app(page: Page) -> InteractiveApp {
        InteractiveApp::new(page, FeedSnapshot::loaded(sample_items()))
    }

    #[test]
    fn test_home_call_to_actions_navigate() {
        let mut app = loaded_app(Page::Beranda);
        app.handle_action(Action::Activate);
        assert_eq!(app.page, Page::Struktur);

        let mut app = loaded_app(Page::Beranda);
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::Activate);
        assert_eq!(app.page, Page::Kontak);

        let mut app = loaded_app(Page::Beranda);
        app.handle_action(Action::MoveUp);
        app.handle_action(Action::Activate);
        assert_eq!(app.page, Page::Berita);
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut app = loaded_app(Page::Berita);
        app.handle_action(Action::SetFilter(CategoryFilter::Only(NewsKind::Berita)));
        app.handle_action(Action::Activate);
        assert_eq!(app.news_mode(), ViewMode::Detail);
        assert_eq!(app.news.selected().unwrap().kind, NewsKind::Berita);

        // filter keys do nothing in detail
        app.handle_action(Action::CycleFilter);
        assert_eq!(app.news.filter(), CategoryFilter::Only(NewsKind::Berita));

        app.handle_action(Action::MoveDown);
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::MoveUp);
        assert_eq!(app.detail_scroll, 1);

        app.handle_action(Action::Back);
        assert_eq!(app.news_mode(), ViewMode::Listing);
        assert_eq!(app.detail_scroll, 0);
        assert_eq!(app.page, Page::Berita);
    }

    #[test]
    fn test_actions_ignored_while_loading() {
        let mut app = InteractiveApp::new(Page::Berita, FeedSnapshot::initial());
        app.handle_action(Action::Activate);
        app.handle_action(Action::CycleFilter);
        assert_eq!(app.news, NewsViewState::new());
    }

    #[test]
    fn test_snapshot_update_clamps_cursor() {
        let mut app = loaded_app(Page::Berita);
        app.handle_action(Action::MoveUp);
        assert_eq!(app.news.cursor(), 2);

        app.apply_snapshot(FeedSnapshot::loaded(sample_items()[..1].to_vec()));
        assert_eq!(app.news.cursor(), 0);
    }

    #[test]
    fn test_refresh_and_quit_flags() {
        let mut app = loaded_app(Page::Kontak);
        app.handle_action(Action::Refresh);
        assert!(app.refresh_requested);
        app.handle_action(Action::Back);
        assert_eq!(app.page, Page::Beranda);
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }
}
