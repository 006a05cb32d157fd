use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Url;
use serde_json::Value;

use crate::constants::{NEWS_FIELDS, REQUEST_TIMEOUT_SECS};
use crate::error::{KalitaError, KalitaResult};
use crate::feed::NewsSource;
use crate::filtering::CategoryFilter;
use crate::kalita_error;
use crate::logging::log_error;
use crate::models::NewsItem;

/// Read-only client for the news table exposed through Supabase PostgREST.
#[derive(Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str, table: &str) -> KalitaResult<Self> {
        Self::with_timeout(base_url, anon_key, table, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// A stalled request fails with `RequestError` once `timeout` elapses.
    pub fn with_timeout(
        base_url: &str,
        anon_key: &str,
        table: &str,
        timeout: Duration,
    ) -> KalitaResult<Self> {
        let base = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| KalitaError::ConfigError(format!("invalid feed URL '{}': {}", base_url, e)))?;
        let endpoint = base
            .join(&format!("rest/v1/{}", table))
            .map_err(|e| KalitaError::ConfigError(format!("invalid table name '{}': {}", table, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "apikey",
            HeaderValue::from_str(anon_key)
                .map_err(|_| KalitaError::ConfigError("anon key contains invalid characters".to_string()))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", anon_key))
                .map_err(|_| KalitaError::ConfigError("anon key contains invalid characters".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch_rows(&self, query: &str) -> KalitaResult<Vec<Value>> {
        let mut url = self.endpoint.clone();
        url.set_query(Some(query));

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(KalitaError::ApiError(format!("HTTP error {}: {}", status, body)));
        }

        Ok(response.json().await?)
    }

    pub async fn get_news(&self, filter: CategoryFilter, limit: Option<usize>) -> KalitaResult<Vec<NewsItem>> {
        let rows = self.fetch_rows(&news_query(filter, limit)).await?;
        Ok(parse_news_rows(rows))
    }

    pub async fn get_news_item(&self, id: &str) -> KalitaResult<NewsItem> {
        let query = item_query(id)?;
        parse_news_rows(self.fetch_rows(&query).await?)
            .into_iter()
            .next()
            .ok_or_else(|| KalitaError::NotFound(format!("news item '{}'", id)))
    }
}

impl NewsSource for SupabaseClient {
    fn fetch_news(&self) -> impl Future<Output = KalitaResult<Vec<NewsItem>>> + Send {
        self.get_news(CategoryFilter::All, None)
    }
}

/// PostgREST query for the news listing, newest first.
pub fn news_query(filter: CategoryFilter, limit: Option<usize>) -> String {
    let mut parts = vec![format!("select={}", NEWS_FIELDS), "order=published_at.desc".to_string()];
    if let Some(condition) = filter.query_param() {
        parts.push(condition);
    }
    if let Some(limit) = limit {
        parts.push(format!("limit={}", limit));
    }
    parts.join("&")
}

pub fn item_query(id: &str) -> KalitaResult<String> {
    let valid = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(kalita_error!(InvalidInput, "invalid news id '{}'", id));
    }
    Ok(format!("select={}&id=eq.{}&limit=1", NEWS_FIELDS, id))
}

/// Decode rows one by one, dropping the ones that do not describe a news item.
pub fn parse_news_rows(rows: Vec<Value>) -> Vec<NewsItem> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.get("id").map(|v| v.to_string()).unwrap_or_else(|| "?".to_string());
            match serde_json::from_value::<NewsItem>(row) {
                Ok(item) => Some(item),
                Err(e) => {
                    log_error(&format!("Skipping malformed news row {}: {}", id, e));
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewsKind;
    use serde_json::json;

    #[test]
    fn test_news_query_shapes() {
        assert_eq!(
            news_query(CategoryFilter::All, None),
            format!("select={}&order=published_at.desc", NEWS_FIELDS)
        );
        let q = news_query(CategoryFilter::Only(NewsKind::Pengumuman), Some(3));
        assert!(q.ends_with("&type=eq.pengumuman&limit=3"));
    }

    #[test]
    fn test_item_query_rejects_injection() {
        assert!(item_query("42").unwrap().contains("id=eq.42"));
        assert!(item_query("5f0c7d2e-1111").is_ok());
        assert!(item_query("1&type=eq.berita").is_err());
        assert!(item_query("").is_err());
    }

    #[test]
    fn test_parse_rows_drops_unknown_types() {
        let rows = vec![
            json!({"id": 1, "title": "A", "type": "berita", "published_at": "2025-01-01"}),
            json!({"id": 2, "title": "B", "type": "lomba", "published_at": "2025-01-02"}),
            json!({"id": 3, "title": "C", "type": "pengumuman", "published_at": "2025-01-03"}),
            json!({"title": "no id"}),
        ];
        let items = parse_news_rows(rows);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_endpoint_and_bad_config() {
        let client = SupabaseClient::new("https://abc.supabase.co/", "anon", "berita").unwrap();
        assert_eq!(client.endpoint().as_str(), "https://abc.supabase.co/rest/v1/berita");

        assert!(SupabaseClient::new("not a url", "anon", "berita").is_err());
        assert!(SupabaseClient::new("https://abc.supabase.co", "bad\nkey", "berita").is_err());
    }

    #[tokio::test]
    async fn test_stalled_server_times_out() {
        // accepts connections but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = SupabaseClient::with_timeout(
            &format!("http://{}", addr),
            "anon",
            "berita",
            Duration::from_millis(200),
        )
        .unwrap();

        let started = std::time::Instant::now();
        match client.get_news(CategoryFilter::All, None).await {
            Err(KalitaError::RequestError(e)) => assert!(e.is_timeout()),
            other => panic!("expected a timeout, got {:?}", other.map(|items| items.len())),
        }
        assert!(started.elapsed() < Duration::from_secs(5));

        server.abort();
    }
}
