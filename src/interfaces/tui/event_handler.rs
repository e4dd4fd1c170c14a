//! Event handling for TUI
//!
//! Maps key codes to [`Action`]s based on the current screen

use ratatui::crossterm::event::KeyCode;

use super::action::Action;
use super::app::{App, CurrentScreen};

/// Translate a key press into an action
pub fn handle_key_event(app: &App, key_code: KeyCode) -> Action {
    // 搜索框聚焦时优先处理输入
    if app.search_focused && app.current_screen == CurrentScreen::Products {
        return handle_search_input(key_code);
    }

    match app.current_screen {
        CurrentScreen::Home => handle_home_screen(key_code),
        CurrentScreen::Products => handle_products_screen(key_code),
        CurrentScreen::Help => handle_help_screen(key_code),
    }
}

fn handle_search_input(key_code: KeyCode) -> Action {
    match key_code {
        KeyCode::Enter => Action::SubmitSearch,
        KeyCode::Esc => Action::BlurSearch,
        KeyCode::Backspace => Action::DeleteChar,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::Noop,
    }
}

fn handle_home_screen(key_code: KeyCode) -> Action {
    match key_code {
        KeyCode::Tab => Action::SwitchScreen(CurrentScreen::Products),
        KeyCode::Char('/') => Action::FocusSearch,
        KeyCode::Char('?') => Action::ShowHelp,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Noop,
    }
}

fn handle_products_screen(key_code: KeyCode) -> Action {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Enter | KeyCode::Char('l') => Action::LikeSelected,
        KeyCode::Char('/') => Action::FocusSearch,
        KeyCode::Tab => Action::SwitchScreen(CurrentScreen::Home),
        KeyCode::Char('?') => Action::ShowHelp,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Noop,
    }
}

fn handle_help_screen(key_code: KeyCode) -> Action {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => Action::GoBack,
        _ => Action::Noop,
    }
}
