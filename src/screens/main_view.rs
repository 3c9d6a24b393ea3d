//! Main view, shown once an account is logged in.

use crate::components::{Footer, Header};
use crate::screens::screen_trait::{Screen, ScreenAction, ScreenContext};
use crate::ui::Screen as ScreenId;
use crate::utils::{create_standard_layout, muted_text_style};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// Main view controller.
#[derive(Debug, Default)]
pub struct MainScreen;

impl MainScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for MainScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()> {
        let (header_area, content_area, footer_area) = create_standard_layout(area, 4, 2);
        let _ = Header::render(frame, header_area, "Tuenti TV", "Your TV, your friends");

        let lines = match ctx.store.borrow().logged_account() {
            Some(account) => vec![
                Line::from(format!("Welcome, {}!", account.name)).bold(),
                Line::from(""),
                Line::styled(account.email.clone(), muted_text_style()),
                Line::styled(
                    format!("Logged in since {}", account.last_login_display()),
                    muted_text_style(),
                ),
            ],
            None => vec![Line::from("Nobody is logged in.")],
        };

        let body = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(body, content_area);

        let _ = Footer::render(frame, footer_area, "Logout: l | Quit: q/Esc");
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        match key.code {
            KeyCode::Char('l') => {
                ctx.store.borrow_mut().logout()?;
                Ok(ScreenAction::Navigate(ScreenId::Login))
            }
            KeyCode::Char('q') | KeyCode::Esc => Ok(ScreenAction::Quit),
            _ => Ok(ScreenAction::None),
        }
    }
}
