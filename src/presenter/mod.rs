//! Presentation logic for the login flow.
//!
//! The presenter is UI-agnostic: the terminal login screen and the
//! non-interactive `login` command both drive the same [`LoginPresenter`],
//! each with its own [`LoginView`] implementation.

pub mod error;
pub mod login;

pub use error::LoginError;
pub use login::{LoginPresenter, LoginView};
