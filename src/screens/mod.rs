//! Screen controllers for the application.
//!
//! Each screen implements the `Screen` trait, owns its state and handles
//! both rendering and events.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      App                               │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Router                    │    │
//! │  │  match current_screen {                        │    │
//! │  │    Login   => login.handle_event(...)          │    │
//! │  │    Loading => loading.handle_event(...)        │    │
//! │  │    Main    => main.handle_event(...)           │    │
//! │  │  }                                             │    │
//! │  └────────────────────────────────────────────────┘    │
//! │                                                        │
//! │  LoginScreen ──▶ LoginPresenter ──▶ AccountStore       │
//! │       ▲                │                               │
//! │       └── LoginView ───┘ + ScreenNavigator             │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod loading;
pub mod login;
pub mod main_view;
pub mod screen_trait;

pub use loading::LoadingScreen;
pub use login::LoginScreen;
pub use main_view::MainScreen;
pub use screen_trait::{Screen, ScreenAction, ScreenContext, SharedStore};
