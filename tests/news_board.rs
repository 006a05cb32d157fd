use std::future::Future;
use std::time::Duration;

use kalita_cli::feed::polling::{NewsSource, PollingFeed};
use kalita_cli::feed::sample::sample_items;
use kalita_cli::feed::static_feed::StaticFeed;
use kalita_cli::feed::{first_loaded, recent_items, FeedSnapshot, NewsFeed};
use kalita_cli::filtering::{filter_items, CategoryFilter};
use kalita_cli::home::{HomeAction, HomeView};
use kalita_cli::interactive::{NewsScreen, NewsViewState, ViewMode};
use kalita_cli::{KalitaError, KalitaResult, NewsItem, NewsKind, Page};

struct FixedSource(Vec<NewsItem>);

impl NewsSource for FixedSource {
    fn fetch_news(&self) -> impl Future<Output = KalitaResult<Vec<NewsItem>>> + Send {
        let items = self.0.clone();
        async move { Ok(items) }
    }
}

struct DownSource;

impl NewsSource for DownSource {
    fn fetch_news(&self) -> impl Future<Output = KalitaResult<Vec<NewsItem>>> + Send {
        async { Err(KalitaError::ApiError("HTTP error 502".to_string())) }
    }
}

#[test]
fn test_filter_scenarios() {
    let items = sample_items();

    let all: Vec<&str> = filter_items(&items, CategoryFilter::All)
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(all, vec!["1", "2", "3"]);

    let berita = filter_items(&items, CategoryFilter::Only(NewsKind::Berita));
    assert_eq!(berita.len(), 1);
    assert_eq!(berita[0].title, "Gotong Royong Bersih-Bersih Lingkungan");

    let pengumuman: Vec<&str> = filter_items(&items, CategoryFilter::Only(NewsKind::Pengumuman))
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(pengumuman, vec!["1", "3"]);
}

#[test]
fn test_listing_to_detail_and_back() {
    let snapshot = FeedSnapshot::loaded(sample_items());
    let mut state = NewsViewState::new();

    state.set_filter(CategoryFilter::Only(NewsKind::Pengumuman));
    state.move_down(state.visible_items(&snapshot.data).len());
    assert!(state.select_current(&snapshot.data));
    assert_eq!(state.mode(), ViewMode::Detail);

    match state.screen(&snapshot) {
        NewsScreen::Detail(item) => assert_eq!(item.title, "Rapat Bulanan Pengurus RT"),
        other => panic!("expected detail, got {:?}", other),
    }

    // filter changes are ignored while reading
    assert!(!state.set_filter(CategoryFilter::All));

    state.go_back();
    assert_eq!(state.mode(), ViewMode::Listing);
    assert_eq!(state.filter(), CategoryFilter::Only(NewsKind::Pengumuman));
    assert!(matches!(state.screen(&snapshot), NewsScreen::List(items) if items.len() == 2));
}

#[test]
fn test_loading_wins_over_selection() {
    let mut snapshot = FeedSnapshot::loaded(sample_items());
    let mut state = NewsViewState::new();
    state.select_item(snapshot.data[0].clone());

    snapshot.loading = true;
    assert!(matches!(state.screen(&snapshot), NewsScreen::Loading));
}

#[test]
fn test_home_navigation_targets() {
    let home = HomeView::new();
    let mut visited = Vec::new();
    for action in [
        HomeAction::SeeBoard,
        HomeAction::ContactUs,
        HomeAction::ViewAll,
        HomeAction::OpenPreview(0),
    ] {
        home.activate(action, &mut |page: Page| visited.push(page.key()));
    }
    assert_eq!(visited, vec!["struktur", "kontak", "berita", "berita"]);
}

#[tokio::test]
async fn test_static_feed_updates_reach_subscribers() {
    let feed = StaticFeed::sample();
    let mut rx = feed.subscribe();
    assert_eq!(recent_items(&rx.borrow().data, 3).len(), 3);

    feed.publish(sample_items().into_iter().take(1).collect());
    rx.changed().await.unwrap();
    assert_eq!(HomeView::preview(&rx.borrow().data).len(), 1);
}

#[tokio::test]
async fn test_polling_feed_first_load() {
    let feed = PollingFeed::spawn(FixedSource(sample_items()), Duration::from_secs(60));
    let snapshot = first_loaded(&feed).await.unwrap();

    assert!(!snapshot.loading);
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.data.len(), 3);
    feed.shutdown();
}

#[tokio::test]
async fn test_polling_feed_reports_errors() {
    let feed = PollingFeed::spawn(DownSource, Duration::from_secs(60));
    let snapshot = first_loaded(&feed).await.unwrap();

    assert!(!snapshot.loading);
    assert!(snapshot.data.is_empty());
    assert!(snapshot.error.unwrap().contains("502"));

    let state = NewsViewState::new();
    let current = feed.snapshot();
    assert!(matches!(state.screen(&current), NewsScreen::Empty));
}

#[tokio::test]
async fn test_loading_with_stale_data_hides_list_until_reload() {
    let feed = StaticFeed::sample();
    let mut rx = feed.subscribe();
    let state = NewsViewState::new();

    let mut reloading = FeedSnapshot::loaded(sample_items());
    reloading.loading = true;
    feed.publish_snapshot(reloading);
    rx.changed().await.unwrap();
    {
        let snapshot = rx.borrow_and_update();
        assert_eq!(snapshot.data.len(), 3);
        assert!(matches!(state.screen(&snapshot), NewsScreen::Loading));
    }

    feed.publish_snapshot(FeedSnapshot::loaded(sample_items()));
    rx.changed().await.unwrap();
    let snapshot = rx.borrow_and_update().clone();
    assert!(matches!(state.screen(&snapshot), NewsScreen::List(items) if items.len() == 3));
}
