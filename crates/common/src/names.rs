//! Entity name validation.
//!
//! Names become path segments in the parameter hierarchy, so a name may
//! not contain `/` or anything else the parameter service rejects.

use thiserror::Error;

/// Maximum length of a single name segment.
pub const MAX_NAME_LEN: usize = 128;

/// Reasons a name cannot be used as a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name must not be empty")]
    Empty,

    #[error("name must be at most {max} characters, got {len}")]
    TooLong { max: usize, len: usize },

    #[error("name contains invalid character {0:?} (allowed: letters, digits, '-', '_', '.')")]
    InvalidCharacter(char),
}

/// Check that `name` is a valid path segment.
///
/// # Errors
///
/// Returns the first rule the name violates.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(NameError::TooLong {
            max: MAX_NAME_LEN,
            len,
        });
    }

    match name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        Some(c) => Err(NameError::InvalidCharacter(c)),
        None => Ok(()),
    }
}
