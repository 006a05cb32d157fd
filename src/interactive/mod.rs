pub mod app;
pub mod event;
pub mod handlers;
pub mod keys;
pub mod layout;
pub mod panels;
pub mod popups;
pub mod state;
pub mod ui;

pub use app::InteractiveApp;
pub use handlers::run_interactive_mode;
pub use state::{NewsScreen, NewsViewState, ViewMode};
