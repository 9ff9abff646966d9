//! Required-field checks shared by the API boundary and the site forms.
//!
//! Every create DTO marks its text fields `#[validate(length(min = 1))]`.
//! Missing JSON fields deserialize to empty strings (`#[serde(default)]`),
//! so a single length check covers both "absent" and "blank".

use validator::Validate;

use crate::error::CoreError;

/// Validate `input`, reporting every blank required field in one error.
///
/// Field names are sorted so the message is stable across runs.
pub fn validate_required<T: Validate>(input: &T) -> Result<(), CoreError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();

    Err(CoreError::Validation(format!(
        "missing required fields: {}",
        fields.join(", ")
    )))
}
