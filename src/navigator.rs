//! Navigation collaborator.
//!
//! The presenter asks the navigator to leave the login screen; how that
//! happens is up to the implementation. [`ScreenNavigator`] records the
//! requested screen so the application loop can switch to it after the
//! current event has been handled.

use crate::ui::Screen;
use anyhow::Result;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Navigation contract consumed by the login presenter.
pub trait Navigator {
    /// Go to the main view (user already logged in).
    fn open_main_view(&mut self) -> Result<()>;

    /// Go to the loading view (login just happened).
    fn open_loading_view(&mut self) -> Result<()>;
}

/// Navigator that stores the requested screen in a shared slot.
///
/// Clones share the same slot, so the app keeps one clone and hands the
/// other to the presenter.
#[derive(Debug, Clone, Default)]
pub struct ScreenNavigator {
    pending: Rc<Cell<Option<Screen>>>,
}

impl ScreenNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending navigation request, if any.
    pub fn take_pending(&self) -> Option<Screen> {
        self.pending.take()
    }

    /// Peek at the pending navigation request without consuming it.
    pub fn pending(&self) -> Option<Screen> {
        self.pending.get()
    }

    fn request(&self, screen: Screen) {
        debug!("Navigation requested: {:?}", screen);
        self.pending.set(Some(screen));
    }
}

impl Navigator for ScreenNavigator {
    fn open_main_view(&mut self) -> Result<()> {
        self.request(Screen::Main);
        Ok(())
    }

    fn open_loading_view(&mut self) -> Result<()> {
        self.request(Screen::Loading);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_pending_slot() {
        let app_side = ScreenNavigator::new();
        let mut presenter_side = app_side.clone();

        presenter_side.open_loading_view().unwrap();
        assert_eq!(app_side.pending(), Some(Screen::Loading));
        assert_eq!(app_side.take_pending(), Some(Screen::Loading));
        assert_eq!(app_side.take_pending(), None);
    }

    #[test]
    fn test_last_request_wins() {
        let mut navigator = ScreenNavigator::new();
        navigator.open_loading_view().unwrap();
        navigator.open_main_view().unwrap();
        assert_eq!(navigator.take_pending(), Some(Screen::Main));
    }
}
