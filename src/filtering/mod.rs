pub mod category;

pub use category::{filter_items, CategoryFilter};
