use crate::model::Account;
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Data-access collaborator for previously used accounts.
///
/// The login presenter only reads recent accounts, logs one in and asks
/// whether somebody is already logged. Errors are returned as-is and the
/// presenter never retries them.
pub trait Accounts {
    /// Accounts that logged in before, most relevant first.
    fn recent_logged_accounts(&self) -> Result<Vec<Account>>;

    /// Mark `account` as the logged user.
    fn login(&mut self, account: &Account) -> Result<()>;

    /// Whether a user is currently logged in.
    fn is_user_logged(&self) -> bool;
}

impl<T: Accounts + ?Sized> Accounts for &mut T {
    fn recent_logged_accounts(&self) -> Result<Vec<Account>> {
        (**self).recent_logged_accounts()
    }

    fn login(&mut self, account: &Account) -> Result<()> {
        (**self).login(account)
    }

    fn is_user_logged(&self) -> bool {
        (**self).is_user_logged()
    }
}

/// Shared store: the app keeps one handle, the presenter gets another.
impl<T: Accounts + ?Sized> Accounts for Rc<RefCell<T>> {
    fn recent_logged_accounts(&self) -> Result<Vec<Account>> {
        self.borrow().recent_logged_accounts()
    }

    fn login(&mut self, account: &Account) -> Result<()> {
        self.borrow_mut().login(account)
    }

    fn is_user_logged(&self) -> bool {
        self.borrow().is_user_logged()
    }
}
