use shared_types::AppError;
use std::collections::HashMap;
use validator::Validate;

/// Run the request's validation rules before anything goes over the wire.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(AppError::from)
}

/// Per-field message for an input, if the last submit flagged it.
pub fn field_error(errors: &HashMap<String, String>, field: &str) -> Option<String> {
    errors.get(field).cloned()
}

/// Inline message and field errors to show after a failed submit.
///
/// Validation failures that carry field errors are shown next to the
/// inputs only; anything else becomes the banner message.
pub fn split_error(err: &AppError) -> (Option<String>, HashMap<String, String>) {
    if err.field_errors.is_empty() {
        (Some(err.friendly_message()), HashMap::new())
    } else {
        (None, err.field_errors.clone())
    }
}
