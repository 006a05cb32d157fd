use crate::feed::FeedSnapshot;
use crate::filtering::{filter_items, CategoryFilter};
use crate::models::NewsItem;

/// Render mode of the news page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Filter tabs and the list of items
    Listing,
    /// Full content of one item
    Detail,
}

/// What the news page shows for a given snapshot.
#[derive(Debug, PartialEq)]
pub enum NewsScreen<'a> {
    Loading,
    Detail(&'a NewsItem),
    Empty,
    List(Vec<&'a NewsItem>),
}

/// UI state of the news page: selected article, active category, list cursor.
///
/// The feed data is never stored or mutated here; every derived list is
/// recomputed from the snapshot handed in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsViewState {
    filter: CategoryFilter,
    selected: Option<NewsItem>,
    cursor: usize,
}

impl NewsViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        if self.selected.is_some() {
            ViewMode::Detail
        } else {
            ViewMode::Listing
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn selected(&self) -> Option<&NewsItem> {
        self.selected.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_item(&mut self, item: NewsItem) {
        self.selected = Some(item);
    }

    pub fn go_back(&mut self) {
        self.selected = None;
    }

    /// Change the category tab. Tabs are not shown in detail mode, so the call
    /// is ignored there; returns whether the filter was applied.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> bool {
        if self.mode() == ViewMode::Detail {
            return false;
        }
        if self.filter != filter {
            self.filter = filter;
            self.cursor = 0;
        }
        true
    }

    pub fn cycle_filter(&mut self) -> bool {
        self.set_filter(self.filter.next())
    }

    pub fn visible_items<'a>(&self, source: &'a [NewsItem]) -> Vec<&'a NewsItem> {
        filter_items(source, self.filter)
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 {
            self.cursor = (self.cursor.min(len - 1) + 1) % len;
        }
    }

    pub fn move_up(&mut self, len: usize) {
        if len > 0 {
            let current = self.cursor.min(len - 1);
            self.cursor = if current == 0 { len - 1 } else { current - 1 };
        }
    }

    /// Keep the cursor on a visible row after the list changed size.
    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Open the item under the cursor; returns false when the list is empty.
    pub fn select_current(&mut self, source: &[NewsItem]) -> bool {
        let picked = self.visible_items(source).get(self.cursor).map(|item| (*item).clone());
        match picked {
            Some(item) => {
                self.select_item(item);
                true
            }
            None => false,
        }
    }

    /// Loading wins over everything, then the selected article, then the
    /// empty state, then the filtered list.
    pub fn screen<'a>(&'a self, snapshot: &'a FeedSnapshot) -> NewsScreen<'a> {
        if snapshot.loading {
            return NewsScreen::Loading;
        }
        if let Some(item) = &self.selected {
            return NewsScreen::Detail(item);
        }
        let visible = self.visible_items(&snapshot.data);
        if visible.is_empty() {
            NewsScreen::Empty
        } else {
            NewsScreen::List(visible)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewsKind;

    fn item(id: &str, kind: NewsKind) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: format!("Judul {}", id),
            summary: format!("Ringkasan {}", id),
            content: format!("Isi lengkap {}", id),
            kind,
            author: format!("Penulis {}", id),
            published_at: "2025-01-15".to_string(),
        }
    }

    fn source() -> Vec<NewsItem> {
        vec![
            item("1", NewsKind::Pengumuman),
            item("2", NewsKind::Berita),
            item("3", NewsKind::Berita),
        ]
    }

    #[test]
    fn test_initial_state_is_listing() {
        let state = NewsViewState::new();
        assert_eq!(state.mode(), ViewMode::Listing);
        assert!(state.selected().is_none());
        assert_eq!(state.filter(), CategoryFilter::All);
    }

    #[test]
    fn test_select_then_back_restores_initial_state() {
        let data = source();
        let mut state = NewsViewState::new();
        state.select_item(data[0].clone());
        assert_eq!(state.mode(), ViewMode::Detail);

        state.go_back();
        assert_eq!(state, NewsViewState::new());
    }

    #[test]
    fn test_berita_filter_scenario() {
        let data = source();
        let mut state = NewsViewState::new();
        assert!(state.set_filter(CategoryFilter::Only(NewsKind::Berita)));

        let ids: Vec<&str> = state.visible_items(&data).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_set_filter_is_idempotent() {
        let data = source();
        let mut state = NewsViewState::new();
        state.set_filter(CategoryFilter::Only(NewsKind::Pengumuman));
        let first: Vec<String> = state.visible_items(&data).iter().map(|i| i.id.clone()).collect();
        state.move_down(first.len());

        state.set_filter(CategoryFilter::Only(NewsKind::Pengumuman));
        let second: Vec<String> = state.visible_items(&data).iter().map(|i| i.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_ignored_in_detail() {
        let data = source();
        let mut state = NewsViewState::new();
        state.select_item(data[1].clone());
        assert!(!state.set_filter(CategoryFilter::Only(NewsKind::Pengumuman)));
        assert_eq!(state.filter(), CategoryFilter::All);
    }

    #[test]
    fn test_loading_hides_everything() {
        let mut snapshot = FeedSnapshot::loaded(source());
        snapshot.loading = true;

        let mut state = NewsViewState::new();
        assert_eq!(state.screen(&snapshot), NewsScreen::Loading);

        state.set_filter(CategoryFilter::Only(NewsKind::Berita));
        state.select_item(snapshot.data[1].clone());
        assert_eq!(state.screen(&snapshot), NewsScreen::Loading);
    }

    #[test]
    fn test_empty_after_load() {
        let snapshot = FeedSnapshot::loaded(Vec::new());
        assert_eq!(NewsViewState::new().screen(&snapshot), NewsScreen::Empty);

        let only_berita = FeedSnapshot::loaded(vec![item("9", NewsKind::Berita)]);
        let mut state = NewsViewState::new();
        state.set_filter(CategoryFilter::Only(NewsKind::Pengumuman));
        assert_eq!(state.screen(&only_berita), NewsScreen::Empty);
    }

    #[test]
    fn test_select_current_follows_filtered_cursor() {
        let snapshot = FeedSnapshot::loaded(source());
        let mut state = NewsViewState::new();
        state.set_filter(CategoryFilter::Only(NewsKind::Berita));
        state.move_down(2);
        assert!(state.select_current(&snapshot.data));

        match state.screen(&snapshot) {
            NewsScreen::Detail(item) => assert_eq!(item.id, "3"),
            other => panic!("expected detail, got {:?}", other),
        }
    }

    #[test]
    fn test_cursor_wraps_and_clamps() {
        let mut state = NewsViewState::new();
        state.move_up(3);
        assert_eq!(state.cursor(), 2);
        state.move_down(3);
        assert_eq!(state.cursor(), 0);

        state.move_up(3);
        state.clamp_cursor(1);
        assert_eq!(state.cursor(), 0);

        assert!(!state.select_current(&[]));
    }
}
