//! Byte-buffer predicates and text encodings used across the guard layer.

/// Returns `true` when `buffer` is absent or has zero length.
///
/// Accepts anything viewable as bytes, so text arguments (`&str`, `&String`)
/// share the same check as byte buffers.
pub fn is_null_or_empty<B>(buffer: Option<&B>) -> bool
where
    B: AsRef<[u8]> + ?Sized,
{
    buffer.map_or(true, |b| b.as_ref().is_empty())
}

/// Lowercase hex rendering of `bytes`, two digits per byte, no separators.
///
/// Absent or empty input yields an empty string.
pub fn to_hex_string(bytes: Option<&[u8]>) -> String {
    match bytes {
        Some(b) if !b.is_empty() => hex::encode(b),
        _ => String::new(),
    }
}

/// Structural check that `text` looks like non-empty standard base64.
///
/// Any leading or trailing whitespace rejects the input outright. Padding bits
/// and the decoded length are not checked.
pub fn is_non_empty_base64(text: Option<&str>) -> bool {
    let Some(text) = text else {
        return false;
    };

    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.len() != text.len() {
        return false;
    }
    if trimmed.len() % 4 != 0 {
        return false;
    }

    let body = trimmed.trim_end_matches('=');
    if trimmed.len() - body.len() > 3 {
        return false;
    }
    body.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}
