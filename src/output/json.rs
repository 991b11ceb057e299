//! JSON output formatting.

use serde::Serialize;

use crate::error::TomataError;

/// Serialize any value to pretty-printed JSON.
///
/// # Errors
///
/// Returns `TomataError::Serialization` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TomataError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| TomataError::Serialization(format!("JSON error: {e}")))
}
