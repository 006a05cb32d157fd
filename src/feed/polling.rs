use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;

use super::{FeedSnapshot, NewsFeed};
use crate::error::KalitaResult;
use crate::logging::{log_debug, log_error};
use crate::models::NewsItem;

/// Something that can fetch the complete news list on demand.
pub trait NewsSource: Send + Sync + 'static {
    fn fetch_news(&self) -> impl Future<Output = KalitaResult<Vec<NewsItem>>> + Send;
}

/// Feed that re-fetches its source on a fixed interval.
///
/// `loading` is only reported until the first fetch finishes. Later refreshes
/// replace the data in place, and a failed refresh keeps the previous items
/// while recording the error.
///
/// Polling stops on `shutdown()`, on drop, or once every receiver handed out
/// by `subscribe()` has been dropped.
pub struct PollingFeed {
    sender: Arc<watch::Sender<FeedSnapshot>>,
    wake: Arc<Notify>,
    subscribed: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl PollingFeed {
    /// Start polling on the current tokio runtime.
    pub fn spawn<S: NewsSource>(source: S, interval: Duration) -> Self {
        let (sender, _) = watch::channel(FeedSnapshot::initial());
        let sender = Arc::new(sender);
        let wake = Arc::new(Notify::new());
        let subscribed = Arc::new(AtomicBool::new(false));

        let task = tokio::spawn(poll_loop(
            source,
            interval,
            sender.clone(),
            wake.clone(),
            subscribed.clone(),
        ));

        Self {
            sender,
            wake,
            subscribed,
            task,
        }
    }

    pub fn shutdown(&self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl NewsFeed for PollingFeed {
    fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        let receiver = self.sender.subscribe();
        self.subscribed.store(true, Ordering::Release);
        receiver
    }

    fn snapshot(&self) -> FeedSnapshot {
        self.sender.borrow().clone()
    }

    fn refresh(&self) {
        self.wake.notify_one();
    }
}

impl Drop for PollingFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn poll_loop<S: NewsSource>(
    source: S,
    interval: Duration,
    sender: Arc<watch::Sender<FeedSnapshot>>,
    wake: Arc<Notify>,
    subscribed: Arc<AtomicBool>,
) {
    loop {
        let result = source.fetch_news().await;
        sender.send_modify(|snapshot| apply_fetch(snapshot, result));

        // nobody has subscribed yet, keep the first snapshot warm for them
        let watched = subscribed.load(Ordering::Acquire);

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = wake.notified() => log_debug("News feed refresh requested"),
            _ = sender.closed(), if watched => {
                log_debug("News feed has no subscribers left, polling stopped");
                return;
            }
        }
    }
}

fn apply_fetch(snapshot: &mut FeedSnapshot, result: KalitaResult<Vec<NewsItem>>) {
    snapshot.loading = false;
    match result {
        Ok(items) => {
            log_debug(&format!("News feed fetched {} items", items.len()));
            snapshot.data = items;
            snapshot.error = None;
        }
        Err(e) => {
            log_error(&format!("News feed fetch failed: {}", e));
            snapshot.error = Some(e.to_string());
        }
    }
}
