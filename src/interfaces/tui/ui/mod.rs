// UI submodules
mod common;
mod help;
mod home_screen;
mod products_screen;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use help::draw_help_screen;
pub use home_screen::draw_home_screen;
pub use products_screen::draw_products_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    match app.current_screen {
        CurrentScreen::Home => draw_home_screen(frame, app, main_chunks[1]),
        CurrentScreen::Products => draw_products_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => {
            // 帮助弹窗覆盖在上一个屏幕之上
            match app.previous_screen {
                CurrentScreen::Products => draw_products_screen(frame, app, main_chunks[1]),
                _ => draw_home_screen(frame, app, main_chunks[1]),
            }
            draw_help_screen(frame, main_chunks[1]);
        }
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
