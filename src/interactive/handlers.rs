use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::InteractiveApp;
use super::event::{Event, EventHandler};
use super::keys::map_key;
use crate::error::{KalitaError, KalitaResult};
use crate::feed::NewsFeed;
use crate::logging::{log_debug, log_error, log_info, log_panic_info};
use crate::models::Page;

const TICK_RATE: Duration = Duration::from_millis(200);

pub async fn run_interactive_mode(feed: &dyn NewsFeed, start_page: Page) -> KalitaResult<()> {
    log_info(&format!("Starting interactive mode on page {}", start_page));

    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let result = event_loop(&mut terminal, feed, start_page);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log_info("Exiting interactive mode");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    feed: &dyn NewsFeed,
    start_page: Page,
) -> KalitaResult<()> {
    let mut updates = feed.subscribe();
    let mut app = InteractiveApp::new(start_page, updates.borrow_and_update().clone());
    let events = EventHandler::new(TICK_RATE);

    loop {
        if updates.has_changed().unwrap_or(false) {
            let snapshot = updates.borrow_and_update().clone();
            log_debug(&format!(
                "Feed update: {} items, loading={}",
                snapshot.data.len(),
                snapshot.loading
            ));
            app.apply_snapshot(snapshot);
        }

        if let Err(e) = terminal.draw(|f| super::ui::draw(f, &app)) {
            log_error(&format!("Error drawing UI: {}", e));
            return Err(KalitaError::TerminalError(e.to_string()));
        }

        let event = events
            .recv()
            .map_err(|e| KalitaError::TerminalError(format!("input thread stopped: {}", e)))?;

        match event {
            Event::Key(key) => {
                let action = map_key(key, app.page, app.news_mode(), app.show_help);
                log_debug(&format!("Key {:?} -> {:?} on {}", key.code, action, app.page));
                app.handle_action(action);
            }
            Event::Resize | Event::Tick => {}
        }

        if app.refresh_requested {
            app.refresh_requested = false;
            feed.refresh();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Put the terminal back before the default hook prints the panic.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log_panic_info(info);
        default_hook(info);
    }));
}
