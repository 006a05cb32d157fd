use tokio::sync::watch;

use super::{sample, FeedSnapshot, NewsFeed};
use crate::models::NewsItem;

/// Feed over a fixed list of items, already loaded.
pub struct StaticFeed {
    sender: watch::Sender<FeedSnapshot>,
}

impl StaticFeed {
    pub fn new(items: Vec<NewsItem>) -> Self {
        let (sender, _) = watch::channel(FeedSnapshot::loaded(items));
        Self { sender }
    }

    /// Built-in sample announcements, used by `--demo`.
    pub fn sample() -> Self {
        Self::new(sample::sample_items())
    }

    /// Replace the published items, as a push from upstream would.
    pub fn publish(&self, items: Vec<NewsItem>) {
        self.sender.send_replace(FeedSnapshot::loaded(items));
    }

    /// Publish an arbitrary snapshot, including a loading one.
    pub fn publish_snapshot(&self, snapshot: FeedSnapshot) {
        self.sender.send_replace(snapshot);
    }
}

impl NewsFeed for StaticFeed {
    fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.sender.subscribe()
    }

    fn snapshot(&self) -> FeedSnapshot {
        self.sender.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_notifies_subscribers() {
        let feed = StaticFeed::new(Vec::new());
        let mut rx = feed.subscribe();
        assert!(!rx.has_changed().unwrap());

        feed.publish(sample::sample_items());
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().data.len(), 3);
        assert_eq!(feed.snapshot().data.len(), 3);
    }
}
