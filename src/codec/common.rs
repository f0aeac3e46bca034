//! Helpers shared by the URI-authority-shaped decoders.

use std::collections::HashMap;

use url::Url;

use crate::models::{CodecError, NodeRecord, Protocol};
use crate::utils::url::url_decode;

/// Parses a link with a standard `scheme://authority` shape.
pub(crate) fn parse_authority(link: &str) -> Result<Url, CodecError> {
    Url::parse(link).map_err(|e| CodecError::Url(e.to_string()))
}

/// Extracts `(host, port)` from a parsed URL. A missing host is an error;
/// a missing port is carried through as unknown.
pub(crate) fn host_port(url: &Url) -> Result<(String, Option<u16>), CodecError> {
    let host = url.host_str().ok_or(CodecError::MissingHost)?.to_string();
    Ok((host, url.port()))
}

/// Collects query parameters into a map. The first value wins when a key
/// repeats.
pub(crate) fn query_map(url: &Url) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for (key, value) in url.query_pairs() {
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    params
}

/// Looks up a query parameter, falling back to `default` when absent.
pub(crate) fn param_or<'a>(
    params: &'a HashMap<String, String>,
    key: &str,
    default: &'a str,
) -> String {
    params.get(key).map(String::as_str).unwrap_or(default).to_string()
}

/// Boolean query flag: only the literal value `"1"` means true.
pub(crate) fn param_flag(params: &HashMap<String, String>, key: &str) -> bool {
    params.get(key).map(String::as_str) == Some("1")
}

/// Integer query parameter with a default; a present but unparseable value
/// is a decode failure, not a silent fallback.
pub(crate) fn param_u32(
    params: &HashMap<String, String>,
    key: &'static str,
    default: u32,
) -> Result<u32, CodecError> {
    match params.get(key) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| CodecError::Numeric {
            field: key,
            value: value.clone(),
        }),
    }
}

/// Node name from the URL fragment (percent-decoded), or the synthesized
/// fallback when the fragment is absent or empty.
pub(crate) fn name_from_fragment(
    url: &Url,
    protocol: Protocol,
    server: &str,
    port: Option<u16>,
) -> String {
    match url.fragment() {
        Some(fragment) if !fragment.is_empty() => url_decode(fragment),
        _ => NodeRecord::fallback_name(protocol, server, port),
    }
}
