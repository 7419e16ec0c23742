//! Input validation helpers

use crate::orders::ValidationError;

/// Trim a required form field, rejecting blank values.
///
/// Any non-empty text is accepted; there is no length limit.
pub fn required_text(value: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(trimmed.to_string())
}
