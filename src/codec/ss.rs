//! Shadowsocks link codec.
//!
//! Two shapes are accepted on decode:
//! - SIP002: `ss://base64(method:password@host:port)[#name]`
//! - legacy: `ss://host:port:method:password[#name]` (plain text, >=4 fields)
//!
//! Encode always emits the SIP002 shape.

use crate::models::{CodecError, NodeRecord, Protocol, ProtocolDetail};
use crate::utils::base64::{base64_decode, base64_encode};
use crate::utils::url::url_decode;

pub fn decode(link: &str) -> Result<NodeRecord, CodecError> {
    let mut body = &link[5..];

    // Fragment is the node name
    let mut name = String::new();
    if let Some(pos) = body.find('#') {
        name = url_decode(&body[pos + 1..]);
        body = &body[..pos];
    }

    // Base64 decode first; an '@' in the decoded text selects the SIP002
    // split, anything else falls back to the legacy colon layout.
    let parsed = match base64_decode(body) {
        Some(decoded) if decoded.contains('@') => split_sip002(&decoded),
        _ => None,
    };

    let (server, port, method, password) = match parsed {
        Some(fields) => fields,
        None => split_legacy(body)?,
    };

    if name.is_empty() {
        name = NodeRecord::fallback_name(Protocol::Shadowsocks, &server, Some(port));
    }

    Ok(NodeRecord {
        protocol: Protocol::Shadowsocks,
        name,
        server,
        port: Some(port),
        detail: ProtocolDetail::Shadowsocks { method, password },
    })
}

/// `method:password@host:port`. Password may itself contain colons.
fn split_sip002(decoded: &str) -> Option<(String, u16, String, String)> {
    let (credential, address) = decoded.split_once('@')?;
    let (method, password) = credential.split_once(':')?;
    let (host, port_str) = address.rsplit_once(':')?;
    let port = port_str.parse::<u16>().ok()?;
    Some((
        host.to_string(),
        port,
        method.to_string(),
        password.to_string(),
    ))
}

/// `host:port:method:password`, at least four fields.
fn split_legacy(body: &str) -> Result<(String, u16, String, String), CodecError> {
    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() < 4 {
        return Err(CodecError::FieldCount {
            expected: 4,
            found: parts.len(),
        });
    }

    let port = parts[1]
        .parse::<u16>()
        .map_err(|_| CodecError::Port(parts[1].to_string()))?;

    Ok((
        parts[0].to_string(),
        port,
        parts[2].to_string(),
        parts[3..].join(":"),
    ))
}

pub fn encode(record: &NodeRecord) -> Option<String> {
    let ProtocolDetail::Shadowsocks { method, password } = &record.detail else {
        return None;
    };

    let content = format!(
        "{}:{}@{}:{}",
        method,
        password,
        record.server,
        record.port.unwrap_or(443)
    );
    Some(format!("ss://{}#{}", base64_encode(&content), record.name))
}
