//! Login screen controller.
//!
//! Lists the accounts that logged in before. Picking one opens a password
//! box; confirming it logs the account in. All decisions go through the
//! [`LoginPresenter`]; this screen only renders [`LoginViewState`] and turns
//! key presses into presenter calls.

use crate::components::{Footer, Header};
use crate::model::Account;
use crate::navigator::ScreenNavigator;
use crate::presenter::{LoginPresenter, LoginView};
use crate::screens::screen_trait::{Screen, ScreenAction, ScreenContext, SharedStore};
use crate::ui::LoginViewState;
use crate::utils::{
    center_fixed_height, create_standard_layout, error_text_style, list_highlight_style,
    muted_text_style, ListStateExt,
};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

const LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";

impl LoginView for LoginViewState {
    fn show_accounts(&mut self, accounts: &[Account]) {
        self.accounts = accounts.to_vec();
        self.list_state.clamp_to(self.accounts.len());
        self.error_message = None;
    }

    fn show_password_box(&mut self) {
        self.password_input.clear();
        self.error_message = None;
        self.show_password_box = true;
    }

    fn close(&mut self) {
        self.dismiss_password_box();
        self.closed = true;
    }
}

/// Login screen controller.
pub struct LoginScreen {
    presenter: LoginPresenter<SharedStore, ScreenNavigator>,
    navigator: ScreenNavigator,
    state: Rc<RefCell<LoginViewState>>,
}

impl LoginScreen {
    /// Create the screen and wire the presenter to its view state.
    pub fn new(store: SharedStore) -> Self {
        let navigator = ScreenNavigator::new();
        let state = Rc::new(RefCell::new(LoginViewState::default()));
        let mut presenter = LoginPresenter::new(store, navigator.clone());
        presenter.set_view(&state);
        Self {
            presenter,
            navigator,
            state,
        }
    }

    /// Read access to the view state.
    pub fn state(&self) -> std::cell::Ref<'_, LoginViewState> {
        self.state.borrow()
    }

    /// Turn a navigation request made through the presenter into an action.
    fn pending_navigation(&self) -> ScreenAction {
        self.navigator
            .take_pending()
            .map(ScreenAction::Navigate)
            .unwrap_or_default()
    }

    fn reset(&mut self) {
        let mut state = self.state.borrow_mut();
        state.dismiss_password_box();
        state.error_message = None;
        state.closed = false;
    }

    fn select_highlighted(&mut self) -> Result<ScreenAction> {
        let Some(index) = self.state.borrow().list_state.selected() else {
            return Ok(ScreenAction::None);
        };
        let account = self.presenter.account_at_index(index)?.clone();
        self.presenter.on_account_clicked(account)?;
        Ok(ScreenAction::None)
    }

    fn submit_password(&mut self) -> Result<ScreenAction> {
        if self.state.borrow().password_input.is_empty() {
            self.state.borrow_mut().error_message = Some("Password cannot be empty".to_string());
            return Ok(ScreenAction::None);
        }

        match self.presenter.login_with_selected_user() {
            Ok(()) => Ok(self.pending_navigation()),
            Err(e) => {
                warn!("Login failed: {}", e);
                let mut state = self.state.borrow_mut();
                state.password_input.clear();
                state.error_message = Some(format!("Login failed: {}", e));
                Ok(ScreenAction::None)
            }
        }
    }

    fn handle_password_key(&mut self, code: KeyCode) -> Result<ScreenAction> {
        match code {
            KeyCode::Esc => {
                self.state.borrow_mut().dismiss_password_box();
                Ok(ScreenAction::None)
            }
            KeyCode::Enter => self.submit_password(),
            other => {
                self.state.borrow_mut().password_input.handle_key(other);
                Ok(ScreenAction::None)
            }
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) -> Result<ScreenAction> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                let mut state = self.state.borrow_mut();
                let total = state.accounts.len();
                state.list_state.select_previous_wrap(total);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let mut state = self.state.borrow_mut();
                let total = state.accounts.len();
                state.list_state.select_next_wrap(total);
            }
            KeyCode::Enter => return self.select_highlighted(),
            KeyCode::Char('r') => self.presenter.load_accounts()?,
            KeyCode::Esc | KeyCode::Char('q') => return Ok(ScreenAction::Quit),
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn render_account_list(&self, frame: &mut Frame, area: Rect, state: &mut LoginViewState) {
        let items: Vec<ListItem> = if state.accounts.is_empty() {
            vec![ListItem::new("  No accounts yet. Add one with `tuentitv add`.")
                .style(muted_text_style())]
        } else {
            state
                .accounts
                .iter()
                .map(|account| {
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("{:<20}", account.name)),
                        Span::styled(format!("{:<32}", account.email), muted_text_style()),
                        Span::styled(
                            format!("last login: {}", account.last_login_display()),
                            muted_text_style(),
                        ),
                    ]))
                })
                .collect()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Recent Accounts ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .highlight_style(list_highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(list, area, &mut state.list_state);
    }

    fn render_password_box(&self, frame: &mut Frame, area: Rect, state: &LoginViewState) {
        let popup_area = center_fixed_height(area, 50, 7);
        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(popup_area);

        let who = self
            .presenter
            .selected_account()
            .map(|a| format!("Password for {}", a.name))
            .unwrap_or_else(|| "Password".to_string());
        frame.render_widget(
            Paragraph::new(who).alignment(Alignment::Center).bold(),
            chunks[0],
        );

        let widget = TextInputWidget::new(&state.password_input)
            .title("Password")
            .placeholder("Enter password...")
            .focused(true)
            .masked(true);
        frame.render_text_input_widget(widget, chunks[1]);

        if let Some(error) = &state.error_message {
            frame.render_widget(
                Paragraph::new(error.as_str())
                    .style(error_text_style())
                    .alignment(Alignment::Center),
                chunks[2],
            );
        }
    }
}

impl Screen for LoginScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &ScreenContext) -> Result<()> {
        let (header_area, content_area, footer_area) = create_standard_layout(area, 4, 2);

        let _ = Header::render(
            frame,
            header_area,
            "Tuenti TV - Login",
            "Choose your account to continue",
        );

        let state = Rc::clone(&self.state);
        let mut state = state.borrow_mut();
        self.render_account_list(frame, content_area, &mut state);

        if state.show_password_box {
            self.render_password_box(frame, content_area, &state);
        }

        let footer_text = if state.show_password_box {
            "Login: Enter | Cancel: Esc"
        } else {
            "Navigate: ↑↓/jk | Select: Enter | Reload: r | Quit: q/Esc"
        };
        let _ = Footer::render(frame, footer_area, footer_text);

        if !state.show_password_box {
            if let Some(error) = &state.error_message {
                let line_area = Rect::new(
                    content_area.x + 1,
                    content_area.bottom().saturating_sub(2),
                    content_area.width.saturating_sub(2),
                    1,
                );
                frame.render_widget(
                    Paragraph::new(error.as_str()).style(error_text_style()),
                    line_area,
                );
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        if self.is_input_focused() {
            self.handle_password_key(key.code)
        } else {
            self.handle_list_key(key.code)
        }
    }

    fn is_input_focused(&self) -> bool {
        self.state.borrow().show_password_box
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<ScreenAction> {
        self.reset();

        self.presenter.initialize()?;
        let action = self.pending_navigation();
        if action != ScreenAction::None {
            return Ok(action);
        }

        self.presenter.load_accounts()?;
        Ok(ScreenAction::None)
    }
}
