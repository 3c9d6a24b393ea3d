use anyhow::{bail, Result};

/// Maximum display name length
const MAX_NAME_LENGTH: usize = 40;

/// Validate an account display name
///
/// # Rules
/// - Must be 1-40 characters after trimming
/// - Cannot contain control characters
pub fn validate_account_name(name: &str) -> Result<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        bail!("Account name cannot be empty");
    }

    let length = trimmed.chars().count();
    if length > MAX_NAME_LENGTH {
        bail!(
            "Account name must be {} characters or less (got {})",
            MAX_NAME_LENGTH,
            length
        );
    }

    if trimmed.chars().any(char::is_control) {
        bail!("Account name cannot contain control characters");
    }

    Ok(())
}

/// Validate an account email
///
/// # Arguments
/// * `email` - The email to validate
/// * `existing_emails` - Emails already registered
///
/// # Rules
/// - Exactly one `@`, with text on both sides
/// - No whitespace
/// - Must be unique (case-insensitive)
pub fn validate_account_email(email: &str, existing_emails: &[String]) -> Result<()> {
    let trimmed = email.trim();

    if trimmed.is_empty() {
        bail!("Email cannot be empty");
    }

    if trimmed.chars().any(char::is_whitespace) {
        bail!("Email cannot contain whitespace");
    }

    let mut parts = trimmed.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => bail!("'{}' is not a valid email address", trimmed),
    };
    if local.is_empty() || domain.is_empty() {
        bail!("'{}' is not a valid email address", trimmed);
    }

    if existing_emails.iter().any(|e| e.eq_ignore_ascii_case(trimmed)) {
        bail!("An account with the email '{}' already exists", trimmed);
    }

    Ok(())
}
