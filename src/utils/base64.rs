use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encodes a string to standard Base64.
pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input)
}

/// Decodes a Base64 string into UTF-8 text.
///
/// Share links in the wild mix the standard and URL-safe alphabets and
/// frequently drop padding, so both are normalized before decoding.
/// Returns `None` when the input is not valid Base64 or the decoded
/// bytes are not valid UTF-8.
pub fn base64_decode(input: &str) -> Option<String> {
    let normalized = input.trim().replace('-', "+").replace('_', "/");
    let padded = match normalized.len() % 4 {
        0 => normalized,
        2 => format!("{}==", normalized),
        3 => format!("{}=", normalized),
        _ => return None,
    };

    let bytes = STANDARD.decode(padded).ok()?;
    String::from_utf8(bytes).ok()
}
