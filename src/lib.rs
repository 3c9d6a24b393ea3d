//! Tuenti TV - terminal client login flow
//!
//! This library provides the login presenter, its collaborators and the
//! terminal screens that drive it.

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod model;
pub mod navigator;
pub mod presenter;
pub mod screens;
pub mod services;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use model::{Account, Accounts};
pub use navigator::{Navigator, ScreenNavigator};
pub use presenter::{LoginError, LoginPresenter, LoginView};
pub use services::AccountStore;
