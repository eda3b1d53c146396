//! Field validation for registration candidates
//!
//! Each field is checked by an ordered list of rules; the first failing rule
//! supplies the message for that field. The result is a field -> message map
//! suitable for a 400 response body.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::{Candidate, UserRecord};

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 10;

/// Symbols a password may (and must) contain
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Errors that can occur during candidate validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("User name cannot be null")]
    MissingUserName,

    #[error("Email cannot be null")]
    MissingEmail,

    #[error("Email should be valid")]
    InvalidEmail,

    #[error("Password cannot be null")]
    MissingPassword,

    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters long")]
    PasswordTooShort,

    #[error(
        "Password must contain at least one uppercase letter, one lowercase letter, one number, and one special character"
    )]
    PasswordTooWeak,
}

/// Map of field name -> violation message, one entry per failing field
pub type FieldErrors = BTreeMap<String, String>;

/// Validate the username: must be present and non-blank
pub fn validate_user_name(user_name: Option<&str>) -> Result<(), UserValidationError> {
    match user_name {
        Some(name) if !name.trim().is_empty() => Ok(()),
        _ => Err(UserValidationError::MissingUserName),
    }
}

/// Validate the email: must be present and match the address grammar
pub fn validate_email(email: Option<&str>) -> Result<(), UserValidationError> {
    let email = match email {
        Some(e) if !e.trim().is_empty() => e,
        _ => return Err(UserValidationError::MissingEmail),
    };

    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate the password
///
/// Rules:
/// - Must be present
/// - At least 10 characters
/// - At least one lowercase letter, one uppercase letter, one digit, and
///   one symbol from `@$!%*?&`
/// - Only ASCII letters, digits, and that symbol set are allowed
pub fn validate_password(password: Option<&str>) -> Result<(), UserValidationError> {
    let password = match password {
        Some(p) if !p.is_empty() => p,
        _ => return Err(UserValidationError::MissingPassword),
    };

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort);
    }

    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for c in password.chars() {
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if PASSWORD_SYMBOLS.contains(c) {
            has_symbol = true;
        } else {
            return Err(UserValidationError::PasswordTooWeak);
        }
    }

    if !(has_lower && has_upper && has_digit && has_symbol) {
        return Err(UserValidationError::PasswordTooWeak);
    }

    Ok(())
}

/// Validate a candidate record.
///
/// Returns the validated, not-yet-persisted `UserRecord` on success, or a
/// field -> message map with one entry per failing field.
pub fn validate_candidate(candidate: &Candidate) -> Result<UserRecord, FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Err(e) = validate_user_name(candidate.user_name.as_deref()) {
        errors.insert("userName".to_string(), e.to_string());
    }

    if let Err(e) = validate_email(candidate.email.as_deref()) {
        errors.insert("email".to_string(), e.to_string());
    }

    if let Err(e) = validate_password(candidate.password.as_deref()) {
        errors.insert("password".to_string(), e.to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All three fields are present once validation passed
    Ok(UserRecord::new(
        candidate.user_name.clone().unwrap_or_default(),
        candidate.email.clone().unwrap_or_default(),
        candidate.password.clone().unwrap_or_default(),
    ))
}
