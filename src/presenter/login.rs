//! Login screen presenter.
//!
//! The presenter gets the accounts that logged in before and hands them to
//! the view. When the user picks one it asks the view for a password box,
//! and once the password is entered it logs the account in and moves on to
//! the loading view. A user who is already logged in skips straight to the
//! main view.
//!
//! ```text
//! initialize ──(logged)──▶ open_main_view ─▶ close
//!     │
//!     ▼
//! load_accounts ─▶ show_accounts
//!     │
//!     ▼
//! on_account_clicked ─▶ show_password_box
//!     │
//!     ▼
//! login_with_selected_user ─▶ login ─▶ open_loading_view ─▶ close
//! ```

use crate::model::{Account, Accounts};
use crate::navigator::Navigator;
use crate::presenter::error::{LoginError, Result};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Passive login view driven by the presenter.
pub trait LoginView {
    /// Display the list of recent accounts, in the given order.
    fn show_accounts(&mut self, accounts: &[Account]);

    /// Ask the user for the password of the selected account.
    fn show_password_box(&mut self);

    /// Tear the login view down.
    fn close(&mut self);
}

/// Presenter for the login view.
///
/// Collaborators are injected at construction. The view is attached later
/// through [`LoginPresenter::set_view`] and only held weakly: the presenter
/// never keeps a view alive, and operations that need one fail with
/// [`LoginError::ViewNotAttached`] once it is gone.
pub struct LoginPresenter<A, N> {
    accounts: A,
    navigator: N,
    view: Option<Weak<RefCell<dyn LoginView>>>,
    account_list: Option<Vec<Account>>,
    selected_account: Option<Account>,
}

impl<A: Accounts, N: Navigator> LoginPresenter<A, N> {
    pub fn new(accounts: A, navigator: N) -> Self {
        Self {
            accounts,
            navigator,
            view: None,
            account_list: None,
            selected_account: None,
        }
    }

    /// Attach the view. Replaces any view attached before.
    pub fn set_view<V: LoginView + 'static>(&mut self, view: &Rc<RefCell<V>>) {
        let view: Rc<RefCell<dyn LoginView>> = view.clone();
        self.view = Some(Rc::downgrade(&view));
    }

    /// Leave the login view right away when a user is already logged in.
    ///
    /// The view is resolved before navigating, so a missing view never
    /// leaves a half-done transition behind.
    pub fn initialize(&mut self) -> Result<()> {
        if self.is_user_logged_in() {
            let view = self.view()?;
            debug!("User already logged in, opening main view");
            self.navigator.open_main_view()?;
            view.borrow_mut().close();
        }
        Ok(())
    }

    /// Fetch the recent accounts, remember them and show them.
    pub fn load_accounts(&mut self) -> Result<()> {
        let view = self.view()?;
        let accounts = self.accounts.recent_logged_accounts()?;
        debug!("Loaded {} recent accounts", accounts.len());
        let accounts = self.account_list.insert(accounts);
        view.borrow_mut().show_accounts(accounts);
        Ok(())
    }

    /// Account at `position` in the list last passed to the view.
    pub fn account_at_index(&self, position: usize) -> Result<&Account> {
        let accounts = self
            .account_list
            .as_ref()
            .ok_or(LoginError::AccountsNotLoaded)?;
        accounts.get(position).ok_or(LoginError::IndexOutOfBounds {
            index: position,
            len: accounts.len(),
        })
    }

    /// Remember the clicked account and ask for its password.
    pub fn on_account_clicked(&mut self, account: Account) -> Result<()> {
        let view = self.view()?;
        debug!("Account selected: {}", account.email);
        self.selected_account = Some(account);
        view.borrow_mut().show_password_box();
        Ok(())
    }

    /// Log the selected account in and move on to the loading view.
    ///
    /// The password is checked by the view, not here. A failing login stops
    /// the sequence: neither navigation nor `close` happens and the
    /// selection is kept.
    pub fn login_with_selected_user(&mut self) -> Result<()> {
        let view = self.view()?;
        let account = self
            .selected_account
            .as_ref()
            .ok_or(LoginError::NoAccountSelected)?;

        debug!("Logging in {}", account.email);
        self.accounts.login(account)?;
        self.selected_account = None;
        self.navigator.open_loading_view()?;
        view.borrow_mut().close();
        Ok(())
    }

    pub fn is_user_logged_in(&self) -> bool {
        self.accounts.is_user_logged()
    }

    /// Account waiting for its password, if any.
    pub fn selected_account(&self) -> Option<&Account> {
        self.selected_account.as_ref()
    }

    /// Accounts from the last `load_accounts` call.
    pub fn account_list(&self) -> Option<&[Account]> {
        self.account_list.as_deref()
    }

    fn view(&self) -> Result<Rc<RefCell<dyn LoginView>>> {
        self.view
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(LoginError::ViewNotAttached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        RecentAccounts,
        Login(Account),
        OpenMainView,
        OpenLoadingView,
        ShowAccounts(Vec<Account>),
        ShowPasswordBox,
        Close,
    }

    type CallLog = Rc<RefCell<Vec<Call>>>;

    struct FakeAccounts {
        log: CallLog,
        recent: Vec<Account>,
        logged: bool,
        fail_login: bool,
    }

    impl Accounts for FakeAccounts {
        fn recent_logged_accounts(&self) -> anyhow::Result<Vec<Account>> {
            self.log.borrow_mut().push(Call::RecentAccounts);
            Ok(self.recent.clone())
        }

        fn login(&mut self, account: &Account) -> anyhow::Result<()> {
            self.log.borrow_mut().push(Call::Login(account.clone()));
            if self.fail_login {
                bail!("backend unavailable");
            }
            self.logged = true;
            Ok(())
        }

        fn is_user_logged(&self) -> bool {
            self.logged
        }
    }

    struct FakeNavigator {
        log: CallLog,
    }

    impl Navigator for FakeNavigator {
        fn open_main_view(&mut self) -> anyhow::Result<()> {
            self.log.borrow_mut().push(Call::OpenMainView);
            Ok(())
        }

        fn open_loading_view(&mut self) -> anyhow::Result<()> {
            self.log.borrow_mut().push(Call::OpenLoadingView);
            Ok(())
        }
    }

    struct FakeView {
        log: CallLog,
    }

    impl LoginView for FakeView {
        fn show_accounts(&mut self, accounts: &[Account]) {
            self.log
                .borrow_mut()
                .push(Call::ShowAccounts(accounts.to_vec()));
        }

        fn show_password_box(&mut self) {
            self.log.borrow_mut().push(Call::ShowPasswordBox);
        }

        fn close(&mut self) {
            self.log.borrow_mut().push(Call::Close);
        }
    }

    fn sample_accounts() -> Vec<Account> {
        vec![
            Account::new("Pedro", "pedro@example.com"),
            Account::new("Ana", "ana@example.com"),
            Account::new("Luis", "luis@example.com"),
        ]
    }

    struct Fixture {
        log: CallLog,
        presenter: LoginPresenter<FakeAccounts, FakeNavigator>,
        view: Rc<RefCell<FakeView>>,
    }

    fn fixture(logged: bool) -> Fixture {
        let log: CallLog = Rc::default();
        let accounts = FakeAccounts {
            log: log.clone(),
            recent: sample_accounts(),
            logged,
            fail_login: false,
        };
        let navigator = FakeNavigator { log: log.clone() };
        let view = Rc::new(RefCell::new(FakeView { log: log.clone() }));
        let mut presenter = LoginPresenter::new(accounts, navigator);
        presenter.set_view(&view);
        Fixture {
            log,
            presenter,
            view,
        }
    }

    fn calls(log: &CallLog) -> Vec<Call> {
        log.borrow().clone()
    }

    #[test]
    fn test_initialize_logged_user_opens_main_view_then_closes() {
        let mut f = fixture(true);
        f.presenter.initialize().unwrap();
        assert_eq!(calls(&f.log), vec![Call::OpenMainView, Call::Close]);
    }

    #[test]
    fn test_initialize_without_logged_user_does_nothing() {
        let mut f = fixture(false);
        f.presenter.initialize().unwrap();
        assert!(calls(&f.log).is_empty());
    }

    #[test]
    fn test_initialize_without_view_fails_before_navigating() {
        let log: CallLog = Rc::default();
        let accounts = FakeAccounts {
            log: log.clone(),
            recent: Vec::new(),
            logged: true,
            fail_login: false,
        };
        let mut presenter = LoginPresenter::new(accounts, FakeNavigator { log: log.clone() });

        let err = presenter.initialize().unwrap_err();
        assert!(matches!(err, LoginError::ViewNotAttached));
        assert!(calls(&log).is_empty());
    }

    #[test]
    fn test_initialize_without_view_is_fine_when_not_logged() {
        let log: CallLog = Rc::default();
        let accounts = FakeAccounts {
            log: log.clone(),
            recent: Vec::new(),
            logged: false,
            fail_login: false,
        };
        let mut presenter = LoginPresenter::new(accounts, FakeNavigator { log });
        assert!(presenter.initialize().is_ok());
    }

    #[test]
    fn test_load_accounts_forwards_sequence_in_order() {
        let mut f = fixture(false);
        f.presenter.load_accounts().unwrap();
        assert_eq!(
            calls(&f.log),
            vec![Call::RecentAccounts, Call::ShowAccounts(sample_accounts())]
        );
        assert_eq!(f.presenter.account_list(), Some(sample_accounts().as_slice()));
    }

    #[test]
    fn test_account_at_index_matches_shown_list() {
        let mut f = fixture(false);
        f.presenter.load_accounts().unwrap();

        let shown = match calls(&f.log).pop() {
            Some(Call::ShowAccounts(list)) => list,
            other => panic!("unexpected last call: {:?}", other),
        };
        for (i, account) in shown.iter().enumerate() {
            assert_eq!(f.presenter.account_at_index(i).unwrap(), account);
        }
    }

    #[test]
    fn test_account_at_index_out_of_bounds() {
        let mut f = fixture(false);
        f.presenter.load_accounts().unwrap();

        let err = f.presenter.account_at_index(3).unwrap_err();
        assert!(matches!(
            err,
            LoginError::IndexOutOfBounds { index: 3, len: 3 }
        ));
    }

    #[test]
    fn test_account_at_index_before_load() {
        let f = fixture(false);
        let err = f.presenter.account_at_index(0).unwrap_err();
        assert!(matches!(err, LoginError::AccountsNotLoaded));
    }

    #[test]
    fn test_click_then_login_uses_clicked_account() {
        let mut f = fixture(false);
        f.presenter.load_accounts().unwrap();
        let account = f.presenter.account_at_index(1).unwrap().clone();

        f.presenter.on_account_clicked(account.clone()).unwrap();
        assert_eq!(f.presenter.selected_account(), Some(&account));
        f.log.borrow_mut().clear();

        f.presenter.login_with_selected_user().unwrap();
        assert_eq!(
            calls(&f.log),
            vec![Call::Login(account), Call::OpenLoadingView, Call::Close]
        );
        assert!(f.presenter.is_user_logged_in());
        assert!(f.presenter.selected_account().is_none());
    }

    #[test]
    fn test_on_account_clicked_shows_password_box() {
        let mut f = fixture(false);
        f.presenter
            .on_account_clicked(Account::new("Ana", "ana@example.com"))
            .unwrap();
        assert_eq!(calls(&f.log), vec![Call::ShowPasswordBox]);
    }

    #[test]
    fn test_login_without_selection_fails() {
        let mut f = fixture(false);
        let err = f.presenter.login_with_selected_user().unwrap_err();
        assert!(matches!(err, LoginError::NoAccountSelected));
        assert!(calls(&f.log).is_empty());
    }

    #[test]
    fn test_failed_login_propagates_and_stops() {
        let mut f = fixture(false);
        f.presenter.accounts.fail_login = true;
        let account = Account::new("Luis", "luis@example.com");
        f.presenter.on_account_clicked(account.clone()).unwrap();
        f.log.borrow_mut().clear();

        let err = f.presenter.login_with_selected_user().unwrap_err();
        assert!(matches!(err, LoginError::Collaborator(_)));
        assert_eq!(err.to_string(), "backend unavailable");
        assert_eq!(calls(&f.log), vec![Call::Login(account.clone())]);
        assert_eq!(f.presenter.selected_account(), Some(&account));
    }

    #[test]
    fn test_dropped_view_is_reported() {
        let mut f = fixture(false);
        drop(f.view);
        let err = f.presenter.load_accounts().unwrap_err();
        assert!(matches!(err, LoginError::ViewNotAttached));
    }

    #[test]
    fn test_set_view_replaces_previous_view() {
        let mut f = fixture(false);
        let other_log: CallLog = Rc::default();
        let other = Rc::new(RefCell::new(FakeView {
            log: other_log.clone(),
        }));
        f.presenter.set_view(&other);

        f.presenter
            .on_account_clicked(Account::new("Ana", "ana@example.com"))
            .unwrap();
        assert!(calls(&f.log).is_empty());
        assert_eq!(calls(&other_log), vec![Call::ShowPasswordBox]);
        drop(f.view);
    }

    #[test]
    fn test_is_user_logged_in_delegates() {
        assert!(fixture(true).presenter.is_user_logged_in());
        assert!(!fixture(false).presenter.is_user_logged_in());
    }
}
