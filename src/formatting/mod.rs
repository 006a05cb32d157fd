pub mod news;
pub mod theme;
pub mod utils;

pub use news::{news_json, print_home, print_news, print_single_news};
pub use theme::{current_theme, ColorTheme, SemanticColor, ThemedColorize};
pub use utils::{format_long_date, format_short_date, truncate, wrap_text};
