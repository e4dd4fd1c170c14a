//! Terminal User Interface (TUI) module
//!
//! Two screens over one storefront page: Home (slideshow) and Products
//! (search bar and product list).

use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info};

mod action;
mod app;
mod event_handler;
mod ui;

pub use action::Action;
pub use app::{App, CurrentScreen};

use crate::client::CatalogApi;
use crate::errors::{Result, ShopfrontError};
use crate::page::{Page, PageEvent, PageLayout, PageSettings};
use ui::ui;

/// How long to wait for a key before draining page events again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the TUI application
pub async fn run_tui(api: Arc<dyn CatalogApi>, settings: PageSettings) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(|e| ShopfrontError::terminal(e.to_string()))?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let (page, mut events) = Page::new(api, settings, PageLayout::storefront());
    let mut app = App::new(page);
    app.page.on_load();
    info!("TUI started");

    let res = run_app(&mut terminal, &mut app, &mut events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("TUI exited with error: {}", err);
    }
    res.map_err(|e| ShopfrontError::terminal(e.to_string()))
}

/// Main application loop
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    events: &mut UnboundedReceiver<PageEvent>,
) -> io::Result<()> {
    loop {
        app.drain_page_events(events);

        // Render UI
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        // Handle events
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let action = event_handler::handle_key_event(app, key.code);
            if app.dispatch(action) {
                return Ok(());
            }
        }
    }
}
