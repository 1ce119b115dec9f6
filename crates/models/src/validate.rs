//! Field validators shared by the entity modules.
//!
//! Each returns `ModelError::Validation` with a `field: message` text so the
//! API can report which input was rejected.

use crate::errors::ModelError;

/// Non-blank text no longer than `max` characters.
pub fn required_text(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::invalid(field, "this field may not be blank"));
    }
    max_len(field, value, max)
}

pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::invalid(field, format!("ensure this field has no more than {max} characters")));
    }
    Ok(())
}

/// Slugs are letters, digits, underscores and hyphens.
pub fn slug(field: &str, value: &str) -> Result<(), ModelError> {
    required_text(field, value, 50)?;
    let ok = value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !ok {
        return Err(ModelError::invalid(
            field,
            "enter a valid slug consisting of letters, numbers, underscores or hyphens",
        ));
    }
    Ok(())
}

pub fn positive(field: &str, value: i32) -> Result<(), ModelError> {
    if value <= 0 {
        return Err(ModelError::invalid(field, "ensure this value is greater than 0"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_url_safe_text() {
        assert!(slug("slug", "test-provider-1").is_ok());
        assert!(slug("slug", "under_score").is_ok());
    }

    #[test]
    fn slug_rejects_spaces_and_blank() {
        let err = slug("slug", "has space").unwrap_err();
        assert!(err.to_string().contains("slug:"));
        assert!(slug("slug", "  ").is_err());
        assert!(slug("slug", &"a".repeat(51)).is_err());
    }

    #[test]
    fn text_length_is_counted_in_chars() {
        assert!(max_len("name", "ééé", 3).is_ok());
        assert!(max_len("name", "éééé", 3).is_err());
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(positive("port_speed", 0).is_err());
        assert!(positive("port_speed", 1_000_000).is_ok());
    }
}
