//! Tolerant JSON extraction from model output.
//!
//! Models wrap JSON payloads unpredictably: sometimes bare, sometimes in
//! ```json fences (with or without the language tag), sometimes with prose
//! before or after. Rather than stripping known fence tokens, this scanner
//! locates the first `{` or `[` and returns the slice up to its matching
//! close bracket, tracking string literals so braces inside strings do not
//! affect the depth count.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("no JSON object or array found in model output")]
    NoPayload,

    #[error("unbalanced JSON payload in model output")]
    Unbalanced,
}

/// Returns the first balanced JSON object or array inside `raw`.
///
/// The returned slice is syntactically balanced but not validated — callers
/// run it through `serde_json` for the actual parse.
pub fn extract_json(raw: &str) -> Result<&str, ExtractError> {
    let bytes = raw.as_bytes();
    let start = bytes
        .iter()
        .position(|&b| b == b'{' || b == b'[')
        .ok_or(ExtractError::NoPayload)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' | b'[' => depth += 1,
            b'}' | b']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&raw[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    Err(ExtractError::Unbalanced)
}
