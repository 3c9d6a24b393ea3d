//! Shared test utilities for login workflow integration tests.
//!
//! Provides `TestEnv` - an isolated config directory with a prepared
//! account list, cleaned up automatically via `TempDir`.

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use std::path::PathBuf;
use tempfile::TempDir;

use tuentitv::config::{AccountRecord, Config};
use tuentitv::services::AccountStore;

/// An isolated tuentitv test environment.
///
/// Layout:
/// - `config/config.toml` - the account store
#[allow(dead_code)]
pub struct TestEnv {
    temp_dir: TempDir,
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new TestEnvBuilder for fluent configuration.
    pub fn new() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    // ==================== Path Helpers ====================

    /// Get the config file path.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    // ==================== Store Helpers ====================

    /// Open the account store backed by this environment.
    pub fn open_store(&self) -> Result<AccountStore> {
        AccountStore::open(&self.config_path())
    }

    /// Load the config as currently written on disk.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_or_create(&self.config_path())
    }

    // ==================== Assertions ====================

    /// Assert the config on disk has `email` as the logged account.
    pub fn assert_logged_as(&self, email: &str) {
        let config = self.load_config().expect("Failed to load config");
        assert_eq!(
            config.logged_account.as_deref(),
            Some(email),
            "Expected {} to be logged in",
            email
        );
    }

    /// Assert nobody is logged in according to the config on disk.
    pub fn assert_not_logged(&self) {
        let config = self.load_config().expect("Failed to load config");
        assert!(
            config.logged_account.is_none(),
            "Expected nobody logged in, found {:?}",
            config.logged_account
        );
    }
}

/// Builder for `TestEnv`.
#[derive(Default)]
pub struct TestEnvBuilder {
    accounts: Vec<AccountRecord>,
    logged_account: Option<String>,
    loading_ticks: Option<u16>,
    max_recent_accounts: Option<usize>,
}

#[allow(dead_code)]
impl TestEnvBuilder {
    /// Add an account that never logged in.
    pub fn with_account(mut self, name: &str, email: &str) -> Self {
        self.accounts.push(AccountRecord::new(name, email));
        self
    }

    /// Add an account that last logged in on `day` of November 2014.
    pub fn with_account_logged_on(mut self, name: &str, email: &str, day: u32) -> Self {
        let mut record = AccountRecord::new(name, email);
        record.last_login = Utc.with_ymd_and_hms(2014, 11, day, 20, 0, 0).single();
        self.accounts.push(record);
        self
    }

    /// Mark `email` as the logged account.
    pub fn with_logged_account(mut self, email: &str) -> Self {
        self.logged_account = Some(email.to_string());
        self
    }

    pub fn with_loading_ticks(mut self, ticks: u16) -> Self {
        self.loading_ticks = Some(ticks);
        self
    }

    pub fn with_max_recent_accounts(mut self, max: usize) -> Self {
        self.max_recent_accounts = Some(max);
        self
    }

    /// Write the config and return the environment.
    pub fn build(self) -> Result<TestEnv> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        let config_dir = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_dir)?;

        let mut config = Config::default();
        config.accounts = self.accounts;
        config.logged_account = self.logged_account;
        if let Some(ticks) = self.loading_ticks {
            config.loading_ticks = ticks;
        }
        if let Some(max) = self.max_recent_accounts {
            config.max_recent_accounts = max;
        }
        config.save(&config_dir.join("config.toml"))?;

        Ok(TestEnv {
            temp_dir,
            config_dir,
        })
    }
}
