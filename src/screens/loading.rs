//! Loading screen shown right after a login.

use crate::components::{Footer, Header};
use crate::screens::screen_trait::{Screen, ScreenAction, ScreenContext};
use crate::ui::Screen as ScreenId;
use crate::utils::{center_fixed_height, create_standard_layout};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Gauge};
use ratatui::Frame;
use tracing::debug;

/// Loading screen controller.
///
/// Counts down `loading_ticks` ticks from the config and then moves on to
/// the main view.
#[derive(Debug, Default)]
pub struct LoadingScreen {
    total_ticks: u16,
    remaining_ticks: u16,
    account_name: Option<String>,
}

impl LoadingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed fraction, 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        if self.total_ticks == 0 {
            return 1.0;
        }
        f64::from(self.total_ticks - self.remaining_ticks) / f64::from(self.total_ticks)
    }
}

impl Screen for LoadingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &ScreenContext) -> Result<()> {
        let (header_area, content_area, footer_area) = create_standard_layout(area, 4, 2);

        let description = match &self.account_name {
            Some(name) => format!("Signing in as {}", name),
            None => "Signing in".to_string(),
        };
        let _ = Header::render(frame, header_area, "Tuenti TV - Loading", &description);

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Loading your TV "),
            )
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(self.progress().clamp(0.0, 1.0));
        frame.render_widget(gauge, center_fixed_height(content_area, 60, 3));

        let _ = Footer::render(frame, footer_area, "Skip: Enter | Quit: q");
        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                return Ok(match key.code {
                    KeyCode::Enter => ScreenAction::Navigate(ScreenId::Main),
                    KeyCode::Char('q') => ScreenAction::Quit,
                    _ => ScreenAction::None,
                });
            }
        }
        Ok(ScreenAction::None)
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<ScreenAction> {
        let store = ctx.store.borrow();
        self.total_ticks = store.config().loading_ticks;
        self.remaining_ticks = self.total_ticks;
        self.account_name = store.logged_account().map(|a| a.name);
        debug!("Loading for {} ticks", self.total_ticks);
        Ok(ScreenAction::None)
    }

    fn on_tick(&mut self, _ctx: &ScreenContext) -> Result<ScreenAction> {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            Ok(ScreenAction::Navigate(ScreenId::Main))
        } else {
            Ok(ScreenAction::None)
        }
    }
}
