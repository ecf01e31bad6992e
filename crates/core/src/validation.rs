//! Field validation rules applied to request bodies before anything is
//! resolved or written.

use crate::error::CoreError;
use crate::types::Timestamp;

/// Maximum length of names, titles and cities.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum length of free-text fields (descriptions, synopses).
pub const MAX_TEXT_LEN: usize = 10_000;

/// Require `value` to be non-blank and at most `max_len` characters.
pub fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must not exceed {max_len} characters"
        )));
    }
    Ok(())
}

/// Like [`validate_text`] but blank values are allowed.
pub fn validate_optional_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must not exceed {max_len} characters"
        )));
    }
    Ok(())
}

/// Minimal email shape check: `local@domain` with no whitespace.
pub fn validate_email(field: &str, value: &str) -> Result<(), CoreError> {
    validate_text(field, value, MAX_EMAIL_LEN)?;
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(CoreError::Validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(())
}

pub fn validate_non_negative(field: &str, value: i32) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(())
}

/// A conference may not end before it starts.
pub fn validate_schedule(starts: Timestamp, ends: Timestamp) -> Result<(), CoreError> {
    if starts > ends {
        return Err(CoreError::Validation(
            "starts must not be after ends".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn blank_text_rejected() {
        assert!(validate_text("name", "   ", MAX_NAME_LEN).is_err());
        assert!(validate_text("name", "Hall A", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn overlong_text_rejected() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_text("name", &long, MAX_NAME_LEN).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: name must not exceed 200 characters"
        );
    }

    #[test]
    fn optional_text_allows_blank() {
        assert!(validate_optional_text("company_name", "", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("email", "ada@example.com").is_ok());
        assert!(validate_email("email", "ada.example.com").is_err());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "ada@").is_err());
        assert!(validate_email("email", "a da@example.com").is_err());
        assert!(validate_email("email", "a@b@c").is_err());
    }

    #[test]
    fn negative_counts_rejected() {
        assert!(validate_non_negative("room_count", 0).is_ok());
        assert!(validate_non_negative("room_count", -1).is_err());
    }

    #[test]
    fn schedule_order() {
        let starts = Utc.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap();
        let ends = Utc.with_ymd_and_hms(2026, 9, 3, 17, 0, 0).unwrap();
        assert!(validate_schedule(starts, ends).is_ok());
        assert!(validate_schedule(starts, starts).is_ok());
        assert!(validate_schedule(ends, starts).is_err());
    }
}
