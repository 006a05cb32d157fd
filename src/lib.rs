// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod feed;
pub mod filtering;
pub mod formatting;
pub mod home;
pub mod interactive;
pub mod logging;
pub mod models;


// Re-export commonly used items
pub use client::SupabaseClient;
pub use config::{load_config, save_config, Config};
pub use error::{KalitaError, KalitaResult};
pub use feed::{FeedSnapshot, NewsFeed};
pub use filtering::CategoryFilter;
pub use models::*;
