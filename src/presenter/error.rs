use thiserror::Error;

/// Errors raised by the login presenter.
///
/// Contract violations (no view, nothing loaded, nothing selected, bad
/// index) get their own variants. Anything coming from a collaborator is
/// passed through untouched.
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Account index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Accounts have not been loaded yet")]
    AccountsNotLoaded,

    #[error("No view is attached to the login presenter")]
    ViewNotAttached,

    #[error("No account has been selected")]
    NoAccountSelected,

    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LoginError>;
