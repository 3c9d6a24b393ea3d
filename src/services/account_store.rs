//! Account store backed by the configuration file.
//!
//! This is the concrete `Accounts` collaborator used by the application.
//! Every mutation is written back to disk before returning. Changes are
//! made on a copy of the config and only kept once the copy is saved.

use crate::config::{AccountRecord, Config};
use crate::model::{Account, Accounts};
use crate::utils::{validate_account_email, validate_account_name};
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Persistent account storage.
pub struct AccountStore {
    config: Config,
    config_path: PathBuf,
}

impl AccountStore {
    /// Open the store at `config_path`, creating a default config if needed.
    pub fn open(config_path: &Path) -> Result<Self> {
        let config = Config::load_or_create(config_path)
            .with_context(|| format!("Failed to open account store: {:?}", config_path))?;
        Ok(Self::new(config, config_path.to_path_buf()))
    }

    /// Wrap an already loaded config.
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The account currently logged in, if any.
    pub fn logged_account(&self) -> Option<Account> {
        self.config.get_logged_account().map(Account::from)
    }

    /// Forget the logged account.
    ///
    /// # Returns
    ///
    /// `true` if somebody was logged in.
    pub fn logout(&mut self) -> Result<bool> {
        let mut updated = self.config.clone();
        match updated.logged_account.take() {
            Some(email) => {
                self.commit(updated)?;
                info!("Logged out {}", email);
                Ok(true)
            }
            None => {
                debug!("Logout requested with nobody logged in");
                Ok(false)
            }
        }
    }

    /// Register a new account.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name.
    /// * `email` - Email address, must be unique.
    pub fn add_account(&mut self, name: &str, email: &str) -> Result<Account> {
        validate_account_name(name)?;
        let existing: Vec<String> = self
            .config
            .accounts
            .iter()
            .map(|a| a.email.clone())
            .collect();
        validate_account_email(email, &existing)?;

        let record = AccountRecord::new(name.trim(), email.trim());
        let account = Account::from(&record);
        let mut updated = self.config.clone();
        updated.accounts.push(record);
        self.commit(updated)?;

        info!("Added account {}", account.email);
        Ok(account)
    }

    /// Save `updated` and make it the current config. On error the
    /// current config is left untouched.
    fn commit(&mut self, updated: Config) -> Result<()> {
        updated.save(&self.config_path)?;
        self.config = updated;
        Ok(())
    }
}

impl Accounts for AccountStore {
    /// Most recent login first; accounts that never logged in keep their
    /// file order at the end.
    fn recent_logged_accounts(&self) -> Result<Vec<Account>> {
        let mut records: Vec<&AccountRecord> = self.config.accounts.iter().collect();
        records.sort_by(|a, b| b.last_login.cmp(&a.last_login));
        Ok(records
            .into_iter()
            .take(self.config.max_recent_accounts)
            .map(Account::from)
            .collect())
    }

    fn login(&mut self, account: &Account) -> Result<()> {
        let mut updated = self.config.clone();
        let record = updated
            .get_account_mut(&account.email)
            .ok_or_else(|| anyhow!("Unknown account: {}", account.email))?;
        record.last_login = Some(Utc::now());
        let email = record.email.clone();

        updated.logged_account = Some(email.clone());
        self.commit(updated)?;

        info!("Logged in {}", email);
        Ok(())
    }

    fn is_user_logged(&self) -> bool {
        self.config.get_logged_account().is_some()
    }
}
