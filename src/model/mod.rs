//! Domain model for the login flow.
//!
//! `Account` is the identity shown on the login screen and `Accounts` is the
//! collaborator contract the presenter reads it through. Concrete storage
//! lives in [`crate::services::AccountStore`].

pub mod account;
pub mod accounts;

pub use account::Account;
pub use accounts::Accounts;
