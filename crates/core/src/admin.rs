//! Admin account rules: email normalisation, password policy, and the
//! account lifecycle derived from the stored secret-key flag.

use crate::error::CoreError;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Lifecycle of an admin account.
///
/// There is no stored state column: the state is derived from whether an
/// admin row exists and whether its secret key has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    Unregistered,
    PendingSecretConfirmation,
    Active,
}

impl AccountState {
    /// Derive the state from the `secret_key_used` flag of an existing row.
    pub fn from_secret_key_used(secret_key_used: bool) -> Self {
        if secret_key_used {
            Self::Active
        } else {
            Self::PendingSecretConfirmation
        }
    }
}

/// Canonical stored form of an email address: trimmed and lower-cased.
///
/// Every lookup and insert goes through this so that uniqueness is
/// case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Return the value if it is present and not blank after trimming.
pub fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validate that a password meets the minimum length.
pub fn validate_password_strength(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Admin@Example.COM "), "admin@example.com");
    }

    #[test]
    fn required_rejects_missing_and_blank() {
        assert_eq!(required(None), None);
        assert_eq!(required(Some("")), None);
        assert_eq!(required(Some("   ")), None);
        assert_eq!(required(Some("x")), Some("x"));
    }

    #[test]
    fn password_below_minimum_is_rejected() {
        let err = validate_password_strength("short").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("at least 8"));
    }

    #[test]
    fn password_at_minimum_is_accepted() {
        assert!(validate_password_strength("password").is_ok());
        assert!(validate_password_strength("password1").is_ok());
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Seven two-byte characters: 14 bytes but still too short.
        assert!(validate_password_strength("ééééééé").is_err());
    }

    #[test]
    fn account_state_follows_secret_flag() {
        assert_eq!(
            AccountState::from_secret_key_used(false),
            AccountState::PendingSecretConfirmation
        );
        assert_eq!(AccountState::from_secret_key_used(true), AccountState::Active);
    }
}
