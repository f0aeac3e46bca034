//! ShadowsocksR link decoder.
//!
//! The entire body is base64. The decoded text is
//! `host:port:protocol:method:obfs:password_b64[/?params]` where the
//! password and the `remarks`/`obfsparam`/`protoparam` query values carry
//! their own inner base64 layer. There is no encoder.

use crate::models::{CodecError, NodeRecord, Protocol, ProtocolDetail};
use crate::utils::base64::base64_decode;

pub fn decode(link: &str) -> Result<NodeRecord, CodecError> {
    let decoded = base64_decode(&link[6..]).ok_or(CodecError::Base64)?;

    // Links in the wild separate config and params with "/?", some with a
    // bare "?". Only the separator's own slash may be removed: a trailing
    // '/' can also be a legitimate final character of the password base64.
    let (config_part, params_part) = match decoded.split_once("/?") {
        Some((config, params)) => (config, Some(params)),
        None => match decoded.split_once('?') {
            Some((config, params)) => (config, Some(params)),
            None => (decoded.as_str(), None),
        },
    };

    let parts: Vec<&str> = config_part.split(':').collect();
    if parts.len() < 6 {
        return Err(CodecError::FieldCount {
            expected: 6,
            found: parts.len(),
        });
    }

    let server = parts[0].to_string();
    let port = parts[1]
        .parse::<u16>()
        .map_err(|_| CodecError::Port(parts[1].to_string()))?;
    let password = base64_decode(&parts[5..].join(":")).ok_or(CodecError::Base64)?;

    let mut name = String::new();
    let mut obfs_param = String::new();
    let mut proto_param = String::new();

    if let Some(params) = params_part {
        for (key, value) in url::form_urlencoded::parse(params.as_bytes()) {
            // Each value is independently base64-encoded
            let decoded_value = base64_decode(&value).ok_or(CodecError::Base64)?;
            match key.as_ref() {
                "remarks" => name = decoded_value,
                "obfsparam" => obfs_param = decoded_value,
                "protoparam" => proto_param = decoded_value,
                _ => {}
            }
        }
    }

    if name.is_empty() {
        name = NodeRecord::fallback_name(Protocol::ShadowsocksR, &server, Some(port));
    }

    Ok(NodeRecord {
        protocol: Protocol::ShadowsocksR,
        name,
        server,
        port: Some(port),
        detail: ProtocolDetail::ShadowsocksR {
            protocol: parts[2].to_string(),
            method: parts[3].to_string(),
            obfs: parts[4].to_string(),
            password,
            obfs_param,
            proto_param,
        },
    })
}
