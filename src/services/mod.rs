//! Application services layer.
//!
//! Services hold the state the UI layer reads and mutates through
//! collaborator traits, keeping file access out of screens.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   UI Layer                      │
//! │  (App, Screens, LoginPresenter)                 │
//! └─────────────────────┬───────────────────────────┘
//!                       │ Accounts trait
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │               Services Layer                    │
//! │  ┌──────────────┐                               │
//! │  │ AccountStore │                               │
//! │  └──────────────┘                               │
//! └─────────────────────┬───────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │             Infrastructure Layer                │
//! │  (Config, config.toml)                          │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod account_store;

pub use account_store::AccountStore;
