use std::fmt;
use std::str::FromStr;

use crate::error::KalitaError;
use crate::models::{NewsItem, NewsKind};

/// Category tab of the news listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(NewsKind),
}

impl CategoryFilter {
    pub const TABS: [CategoryFilter; 3] = [
        CategoryFilter::All,
        CategoryFilter::Only(NewsKind::Berita),
        CategoryFilter::Only(NewsKind::Pengumuman),
    ];

    pub fn matches(self, kind: NewsKind) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == kind,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "Semua",
            CategoryFilter::Only(kind) => kind.label(),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(kind) => kind.key(),
        }
    }

    /// Next tab, wrapping from the last one back to `All`.
    pub fn next(self) -> Self {
        let idx = Self::TABS.iter().position(|t| *t == self).unwrap_or(0);
        Self::TABS[(idx + 1) % Self::TABS.len()]
    }

    /// PostgREST condition for the `type` column, if any.
    pub fn query_param(self) -> Option<String> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(kind) => Some(format!("type=eq.{}", kind.key())),
        }
    }
}

impl From<NewsKind> for CategoryFilter {
    fn from(kind: NewsKind) -> Self {
        CategoryFilter::Only(kind)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CategoryFilter {
    type Err = KalitaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "semua" | "" => Ok(CategoryFilter::All),
            other => other.parse::<NewsKind>().map(CategoryFilter::Only),
        }
    }
}

/// Items of `source` accepted by `filter`, in source order.
pub fn filter_items(source: &[NewsItem], filter: CategoryFilter) -> Vec<&NewsItem> {
    source.iter().filter(|item| filter.matches(item.kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, kind: NewsKind) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: format!("Item {}", id),
            summary: String::new(),
            content: String::new(),
            kind,
            author: "Pengurus".to_string(),
            published_at: "2025-01-01".to_string(),
        }
    }

    #[test]
    fn test_filter_berita_keeps_source_order() {
        let source = vec![
            item("1", NewsKind::Pengumuman),
            item("2", NewsKind::Berita),
            item("3", NewsKind::Berita),
        ];

        let visible = filter_items(&source, CategoryFilter::Only(NewsKind::Berita));
        let ids: Vec<&str> = visible.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_filter_all_returns_everything_unchanged() {
        let source = vec![
            item("3", NewsKind::Berita),
            item("1", NewsKind::Pengumuman),
            item("2", NewsKind::Berita),
        ];

        let visible = filter_items(&source, CategoryFilter::All);
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().zip(source.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_does_not_touch_source() {
        let source = vec![item("1", NewsKind::Pengumuman), item("2", NewsKind::Berita)];
        let before = source.clone();
        let _ = filter_items(&source, CategoryFilter::Only(NewsKind::Pengumuman));
        assert_eq!(source, before);
    }

    #[test]
    fn test_parse_and_cycle() {
        assert_eq!("semua".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Pengumuman".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(NewsKind::Pengumuman)
        );
        assert!("gosip".parse::<CategoryFilter>().is_err());

        let mut f = CategoryFilter::All;
        f = f.next();
        assert_eq!(f, CategoryFilter::Only(NewsKind::Berita));
        f = f.next();
        assert_eq!(f, CategoryFilter::Only(NewsKind::Pengumuman));
        assert_eq!(f.next(), CategoryFilter::All);
    }

    #[test]
    fn test_query_param() {
        assert_eq!(CategoryFilter::All.query_param(), None);
        assert_eq!(
            CategoryFilter::Only(NewsKind::Berita).query_param().as_deref(),
            Some("type=eq.berita")
        );
    }
}
