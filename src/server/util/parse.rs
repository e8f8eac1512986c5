/// Normalizes a required string field from a request body.
///
/// # Arguments
/// - `value` - Field as deserialized from JSON
///
/// # Returns
/// - `Some(String)` - The trimmed value
/// - `None` - The field was absent or blank
pub fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
