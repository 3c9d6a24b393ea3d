use chrono::{DateTime, Utc};

/// A previously authenticated user identity.
///
/// Two accounts are the same user when their emails match; the display
/// name and last login stamp are informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Display name shown in the account list (e.g., "Pedro")
    pub name: String,
    /// Email address, used as the account identity
    pub email: String,
    /// When this account last logged in, if ever
    pub last_login: Option<DateTime<Utc>>,
}

impl Account {
    /// Create an account that has never logged in
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            last_login: None,
        }
    }

    /// Whether this account refers to the same user as `other`
    pub fn same_user(&self, other: &Account) -> bool {
        self.email.eq_ignore_ascii_case(&other.email)
    }

    /// Human readable last login, or "never"
    pub fn last_login_display(&self) -> String {
        self.last_login
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_account_never_logged() {
        let account = Account::new("Pedro", "pedro@example.com");
        assert!(account.last_login.is_none());
        assert_eq!(account.last_login_display(), "never");
    }

    #[test]
    fn test_same_user_ignores_email_case() {
        let a = Account::new("Pedro", "Pedro@Example.com");
        let b = Account::new("Pedro V.", "pedro@example.com");
        assert!(a.same_user(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_last_login_display() {
        let mut account = Account::new("Ana", "ana@example.com");
        account.last_login = Some(Utc.with_ymd_and_hms(2014, 11, 3, 9, 30, 0).unwrap());
        assert_eq!(account.last_login_display(), "2014-11-03 09:30");
    }
}
