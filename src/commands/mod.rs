pub mod config;
pub mod home;
pub mod news;
pub mod tui;

pub use config::{handle_config, mask_key};
pub use home::handle_home;
pub use news::{handle_news, handle_show};
pub use tui::handle_tui;
