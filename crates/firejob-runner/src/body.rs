//! Request body compilation.

use serde_json::Value;

use crate::error::RequestError;

/// Normalize a free-form body into JSON bytes.
///
/// An empty body compiles to JSON `null`. Anything else must parse as a
/// generic JSON value and is re-serialized, so the payload on the wire is
/// always canonical JSON. A body that fails to parse is rejected instead
/// of being sent half-interpreted.
pub fn compile_body(raw: &str) -> Result<Vec<u8>, RequestError> {
    let value = if raw.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str::<Value>(raw).map_err(|e| RequestError::MalformedBody(e.to_string()))?
    };

    let bytes =
        serde_json::to_vec(&value).map_err(|e| RequestError::MalformedBody(e.to_string()))?;
    if bytes.is_empty() && !raw.is_empty() {
        return Err(RequestError::EmptyBody);
    }
    Ok(bytes)
}
