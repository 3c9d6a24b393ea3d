use crate::model::Account;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Accounts that have used this client before
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,
    /// Email of the account currently logged in
    #[serde(default)]
    pub logged_account: Option<String>,
    /// How many accounts the login screen lists (default: 10)
    #[serde(default = "default_max_recent_accounts")]
    pub max_recent_accounts: usize,
    /// Ticks the loading screen stays up before the main view (default: 4)
    #[serde(default = "default_loading_ticks")]
    pub loading_ticks: u16,
}

/// Stored form of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Display name
    pub name: String,
    /// Email address (account identity)
    pub email: String,
    /// Last successful login
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl AccountRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            last_login: None,
        }
    }

    /// Whether this record belongs to the user identified by `email`
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

impl From<&AccountRecord> for Account {
    fn from(record: &AccountRecord) -> Self {
        Account {
            name: record.name.clone(),
            email: record.email.clone(),
            last_login: record.last_login,
        }
    }
}

fn default_max_recent_accounts() -> usize {
    10
}

fn default_loading_ticks() -> u16 {
    4
}

impl Config {
    /// Load configuration from file or create default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;

            // A zero limit would hide every account
            if config.max_recent_accounts == 0 {
                config.max_recent_accounts = default_max_recent_accounts();
            }

            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // Set secure permissions (600: owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// Default configuration, seeded with sample accounts so a first run
    /// has something to log in with
    pub fn default() -> Self {
        Self {
            accounts: vec![
                AccountRecord::new("Pedro", "pedro@tuenti.com"),
                AccountRecord::new("Maria", "maria@tuenti.com"),
                AccountRecord::new("Sergio", "sergio@tuenti.com"),
                AccountRecord::new("Lucia", "lucia@tuenti.com"),
            ],
            logged_account: None,
            max_recent_accounts: default_max_recent_accounts(),
            loading_ticks: default_loading_ticks(),
        }
    }

    /// Get an account record by email
    pub fn get_account(&self, email: &str) -> Option<&AccountRecord> {
        self.accounts.iter().find(|a| a.matches_email(email))
    }

    /// Get a mutable account record by email
    pub fn get_account_mut(&mut self, email: &str) -> Option<&mut AccountRecord> {
        self.accounts.iter_mut().find(|a| a.matches_email(email))
    }

    /// Get the record of the logged account, if it still exists
    pub fn get_logged_account(&self) -> Option<&AccountRecord> {
        self.logged_account
            .as_deref()
            .and_then(|email| self.get_account(email))
    }

    /// Check if an account with this email exists
    pub fn has_account(&self, email: &str) -> bool {
        self.get_account(email).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.logged_account.is_none());
        assert_eq!(config.max_recent_accounts, 10);
        assert!(!config.accounts.is_empty());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.logged_account = Some("maria@tuenti.com".to_string());
        config.save(&config_path).unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(config.accounts, loaded.accounts);
        assert_eq!(loaded.logged_account.as_deref(), Some("maria@tuenti.com"));
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_or_create(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(config.accounts.len(), Config::default().accounts.len());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[[accounts]]\nname = \"Ana\"\nemail = \"ana@example.com\"\n",
        )
        .unwrap();

        let config = Config::load_or_create(&config_path).unwrap();
        assert_eq!(config.accounts.len(), 1);
        assert_eq!(config.max_recent_accounts, 10);
        assert_eq!(config.loading_ticks, 4);
        assert!(config.accounts[0].last_login.is_none());
    }

    #[test]
    fn test_zero_max_recent_accounts_resets_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "max_recent_accounts = 0\n\n[[accounts]]\nname = \"Ana\"\nemail = \"ana@example.com\"\n",
        )
        .unwrap();

        let config = Config::load_or_create(&config_path).unwrap();
        assert_eq!(config.max_recent_accounts, 10);
        assert_eq!(config.accounts.len(), 1);
    }

    #[test]
    fn test_logged_account_lookup_is_case_insensitive() {
        let mut config = Config::default();
        config.logged_account = Some("PEDRO@tuenti.com".to_string());
        let logged = config.get_logged_account().unwrap();
        assert_eq!(logged.name, "Pedro");
    }

    #[test]
    fn test_logged_account_unknown_email() {
        let mut config = Config::default();
        config.logged_account = Some("ghost@tuenti.com".to_string());
        assert!(config.get_logged_account().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        Config::default().save(&config_path).unwrap();

        let mode = std::fs::metadata(&config_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
