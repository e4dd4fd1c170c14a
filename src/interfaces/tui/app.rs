//! App state for the storefront TUI

use ratatui::widgets::ListState;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use super::action::Action;
use crate::page::{Page, PageEvent, ProductItemView};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    /// Slideshow of popular products
    Home,
    /// Search bar and product list
    Products,
    Help,
}

pub struct App {
    pub page: Page,
    pub current_screen: CurrentScreen,
    pub previous_screen: CurrentScreen,

    /// Key presses go to the search bar
    pub search_focused: bool,
    pub list_state: ListState,

    pub status_message: String,
}

impl App {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            current_screen: CurrentScreen::Home,
            previous_screen: CurrentScreen::Home,
            search_focused: false,
            list_state: ListState::default(),
            status_message: String::new(),
        }
    }

    /// Apply every page event that is ready, without waiting.
    pub fn drain_page_events(&mut self, events: &mut UnboundedReceiver<PageEvent>) -> usize {
        let mut applied = 0;
        while let Ok(event) = events.try_recv() {
            self.page.apply(event);
            applied += 1;
        }
        if applied > 0 {
            self.clamp_selection();
        }
        applied
    }

    /// Items currently listed (empty while loading or showing a message)
    pub fn items(&self) -> &[ProductItemView] {
        self.page
            .product_list()
            .map(|list| list.items())
            .unwrap_or_default()
    }

    pub fn selected_item(&self) -> Option<&ProductItemView> {
        self.list_state
            .selected()
            .and_then(|index| self.items().get(index))
    }

    fn clamp_selection(&mut self) {
        let len = self.items().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(index) if index >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    fn move_selection(&mut self, down: bool) {
        let len = self.items().len();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            None => 0,
            Some(i) if down => (i + 1).min(len - 1),
            Some(i) => i.saturating_sub(1),
        };
        self.list_state.select(Some(next));
    }

    fn switch_screen(&mut self, screen: CurrentScreen) {
        if screen != self.current_screen {
            self.previous_screen = self.current_screen;
            self.current_screen = screen;
        }
        if screen != CurrentScreen::Products {
            self.search_focused = false;
        }
    }

    /// Execute an action. Returns `true` when the app should exit.
    pub fn dispatch(&mut self, action: Action) -> bool {
        if !action.is_noop() {
            debug!("TUI action: {:?}", action);
        }
        match action {
            Action::MoveUp => self.move_selection(false),
            Action::MoveDown => self.move_selection(true),
            Action::SwitchScreen(screen) => self.switch_screen(screen),
            Action::GoBack => {
                let back = self.previous_screen;
                self.switch_screen(back);
            }
            Action::FocusSearch => {
                self.switch_screen(CurrentScreen::Products);
                self.search_focused = true;
            }
            Action::BlurSearch => self.search_focused = false,
            Action::InputChar(c) => self.page.search_bar_mut().push(c),
            Action::DeleteChar => {
                self.page.search_bar_mut().pop();
            }
            Action::SubmitSearch => {
                self.search_focused = false;
                if self.page.submit_search().is_some() {
                    let term = self.page.search_bar().trim().to_string();
                    self.status_message = if term.is_empty() {
                        "Listing all products".to_string()
                    } else {
                        format!("Searching for \"{}\"", term)
                    };
                }
            }
            Action::LikeSelected => {
                if let Some(product_id) = self.selected_item().map(|item| item.product_id.clone()) {
                    self.page.like_product(&product_id);
                    self.status_message = format!("Liked {}", product_id);
                }
            }
            Action::ShowHelp => self.switch_screen(CurrentScreen::Help),
            Action::Quit | Action::Noop => {}
        }
        action.should_quit()
    }
}
