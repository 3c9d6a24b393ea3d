//! Screen trait and associated types.
//!
//! Screens own their state, render themselves and answer events with a
//! [`ScreenAction`] instead of mutating the app directly.

use crate::services::AccountStore;
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::cell::RefCell;
use std::rc::Rc;

/// Account store shared between the app, its screens and the presenter.
pub type SharedStore = Rc<RefCell<AccountStore>>;

/// Context provided to screens for rendering and event handling.
pub struct ScreenContext<'a> {
    /// Account store.
    pub store: &'a SharedStore,
}

impl<'a> ScreenContext<'a> {
    pub fn new(store: &'a SharedStore) -> Self {
        Self { store }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Navigate to a different screen.
    Navigate(ScreenId),
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
pub trait Screen {
    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()>;

    /// Handle an input event.
    ///
    /// # Returns
    ///
    /// An action indicating what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, single-letter shortcuts are typed instead of triggered.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen is entered (navigated to).
    ///
    /// A screen may redirect right away by returning `Navigate`.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(ScreenAction::None)
    }

    /// Called at a fixed rate while the screen is current.
    fn on_tick(&mut self, _ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(ScreenAction::None)
    }
}
