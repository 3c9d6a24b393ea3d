use crate::model::Account;
use crate::utils::TextInput;
use ratatui::widgets::ListState;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Loading,
    Main,
}

/// State the login screen renders from.
///
/// The presenter writes to it through the login view; key handling in the
/// screen writes the rest.
#[derive(Debug, Default)]
pub struct LoginViewState {
    pub accounts: Vec<Account>,
    pub list_state: ListState,
    pub show_password_box: bool,
    pub password_input: TextInput,
    pub error_message: Option<String>,
    pub closed: bool, // Set by the presenter when the view is torn down
}

impl LoginViewState {
    /// Hide the password box and forget what was typed.
    pub fn dismiss_password_box(&mut self) {
        self.show_password_box = false;
        self.password_input.clear();
    }
}
