pub mod news;
pub mod page;

// Re-export commonly used types
pub use news::{parse_published_date, NewsItem, NewsKind};
pub use page::Page;
