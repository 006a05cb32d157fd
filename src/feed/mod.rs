//! Live news feed.
//!
//! A feed publishes [`FeedSnapshot`] values through a `watch` channel. Views
//! only ever read the latest snapshot; fetching, retrying and shutdown belong
//! to the feed implementation.

pub mod polling;
pub mod sample;
pub mod static_feed;

use tokio::sync::watch;

use crate::error::{KalitaError, KalitaResult};
use crate::models::NewsItem;

pub use polling::{NewsSource, PollingFeed};
pub use static_feed::StaticFeed;

/// One observed state of the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    pub data: Vec<NewsItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FeedSnapshot {
    /// State before the first fetch completes.
    pub fn initial() -> Self {
        Self {
            data: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn loaded(data: Vec<NewsItem>) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

pub trait NewsFeed: Send + Sync {
    /// Receiver that observes every published snapshot.
    fn subscribe(&self) -> watch::Receiver<FeedSnapshot>;

    fn snapshot(&self) -> FeedSnapshot {
        self.subscribe().borrow().clone()
    }

    /// Ask for an early refresh. Feeds without a remote source ignore it.
    fn refresh(&self) {}
}

/// The first `n` items of the feed, in feed order.
///
/// This is the projection behind the home page preview, so the preview and the
/// full listing never disagree about what is recent.
pub fn recent_items(data: &[NewsItem], n: usize) -> &[NewsItem] {
    &data[..n.min(data.len())]
}

/// Wait until the feed has finished its first load and return that snapshot.
pub async fn first_loaded(feed: &dyn NewsFeed) -> KalitaResult<FeedSnapshot> {
    let mut rx = feed.subscribe();
    let snapshot = rx
        .wait_for(|snapshot| !snapshot.loading)
        .await
        .map_err(|_| KalitaError::ApiError("news feed stopped before loading".to_string()))?
        .clone();
    Ok(snapshot)
}
