//! VMess link codec: `vmess://base64(json)`.

use serde_json::Value;

use crate::models::{CodecError, NodeRecord, Protocol, ProtocolDetail};
use crate::utils::base64::{base64_decode, base64_encode};

pub fn decode(link: &str) -> Result<NodeRecord, CodecError> {
    let decoded = base64_decode(&link[8..]).ok_or(CodecError::Base64)?;

    let json: Value =
        serde_json::from_str(&decoded).map_err(|e| CodecError::Json(e.to_string()))?;

    let server = json["add"].as_str().unwrap_or("").to_string();
    if server.is_empty() {
        return Err(CodecError::MissingHost);
    }

    // Both "port" and "aid" appear as string or number in the wild
    let port = json_u16(&json["port"]).ok_or_else(|| CodecError::Port(json["port"].to_string()))?;
    let alter_id = match &json["aid"] {
        Value::Null => 0,
        value => json_u16(value).ok_or_else(|| CodecError::Numeric {
            field: "aid",
            value: value.to_string(),
        })?,
    };

    let name = match json["ps"].as_str() {
        Some(ps) if !ps.is_empty() => ps.to_string(),
        _ => NodeRecord::fallback_name(Protocol::VMess, &server, Some(port)),
    };

    Ok(NodeRecord {
        protocol: Protocol::VMess,
        name,
        server,
        port: Some(port),
        detail: ProtocolDetail::VMess {
            uuid: json["id"].as_str().unwrap_or("").to_string(),
            alter_id,
            security: json["scy"].as_str().unwrap_or("auto").to_string(),
            network: json["net"].as_str().unwrap_or("tcp").to_string(),
            ws_path: json["path"].as_str().unwrap_or("").to_string(),
            ws_host: json["host"].as_str().unwrap_or("").to_string(),
            tls: json["tls"].as_str().unwrap_or("none").to_string(),
            sni: json["sni"].as_str().unwrap_or("").to_string(),
        },
    })
}

fn json_u16(value: &Value) -> Option<u16> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        _ => None,
    }
}

pub fn encode(record: &NodeRecord) -> Option<String> {
    let ProtocolDetail::VMess {
        uuid,
        alter_id,
        security,
        network,
        ws_path,
        ws_host,
        tls,
        sni,
    } = &record.detail
    else {
        return None;
    };

    let config = serde_json::json!({
        "v": "2",
        "ps": record.name,
        "add": record.server,
        "port": record.port.unwrap_or(443),
        "id": uuid,
        "aid": alter_id,
        "scy": security,
        "net": network,
        "type": "none",
        "host": ws_host,
        "path": ws_path,
        "tls": tls,
        "sni": sni,
    });

    Some(format!("vmess://{}", base64_encode(&config.to_string())))
}
