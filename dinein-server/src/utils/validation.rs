//! Input validation helpers
//!
//! Centralized text length constants, id shape checks and validation
//! functions shared by the CRUD handlers.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: restaurant, category, menu item, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, rejection reasons
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Short identifiers: phone numbers etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Id shape check ──────────────────────────────────────────────────

/// Reject malformed record ids before any store lookup.
///
/// Browsers that interpolate an unset variable into a URL produce the
/// literal path segment `undefined`; it and the empty string are the two
/// shapes that must never reach the database. `resource` is the human name
/// used in the error message ("table" -> "Invalid table ID").
pub fn validate_id(id: &str, resource: &str) -> Result<(), AppError> {
    if id.trim().is_empty() || id == "undefined" {
        return Err(AppError::invalid_id(resource));
    }
    Ok(())
}

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_and_empty_ids_are_rejected() {
        assert!(validate_id("undefined", "table").is_err());
        assert!(validate_id("", "table").is_err());
        assert!(validate_id("   ", "table").is_err());
        assert!(validate_id("abc123", "table").is_ok());
    }

    #[test]
    fn id_error_names_the_resource() {
        let err = validate_id("undefined", "menu item").unwrap_err();
        assert_eq!(err.to_string(), "Invalid menu item ID");
    }

    #[test]
    fn required_text_rejects_blank() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Tea", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn optional_text_checks_length_only_when_present() {
        assert!(validate_optional_text(&None, "notes", 5).is_ok());
        assert!(validate_optional_text(&Some("short".into()), "notes", 5).is_ok());
        assert!(validate_optional_text(&Some("too long".into()), "notes", 5).is_err());
    }
}
