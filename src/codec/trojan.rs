//! Trojan link codec: `trojan://password@host:port?query#name`.

use crate::codec::common::{host_port, name_from_fragment, param_or, parse_authority, query_map};
use crate::models::{CodecError, NodeRecord, Protocol, ProtocolDetail};

pub fn decode(link: &str) -> Result<NodeRecord, CodecError> {
    let url = parse_authority(link)?;

    let password = url.username().to_string();
    if password.is_empty() {
        return Err(CodecError::MissingCredential);
    }

    let (server, port) = host_port(&url)?;
    let params = query_map(&url);
    let name = name_from_fragment(&url, Protocol::Trojan, &server, port);

    Ok(NodeRecord {
        protocol: Protocol::Trojan,
        name,
        server,
        port,
        detail: ProtocolDetail::Trojan {
            password,
            sni: param_or(&params, "sni", ""),
            network: param_or(&params, "type", "tcp"),
        },
    })
}

pub fn encode(record: &NodeRecord) -> Option<String> {
    let ProtocolDetail::Trojan {
        password,
        sni,
        network,
    } = &record.detail
    else {
        return None;
    };

    let mut link = format!(
        "trojan://{}@{}:{}",
        password,
        record.server,
        record.port.unwrap_or(443)
    );

    let mut params = Vec::new();
    if !sni.is_empty() {
        params.push(format!("sni={}", sni));
    }
    if !network.is_empty() && network != "tcp" {
        params.push(format!("type={}", network));
    }

    if !params.is_empty() {
        link.push('?');
        link.push_str(&params.join("&"));
    }
    if !record.name.is_empty() {
        link.push('#');
        link.push_str(&record.name);
    }

    Some(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_sni() {
        let node = decode("trojan://hunter2@example.com:443?sni=cdn.example.com#Edge").unwrap();
        assert_eq!(node.name, "Edge");
        assert_eq!(node.server, "example.com");
        assert_eq!(node.port, Some(443));
        assert_eq!(
            node.detail,
            ProtocolDetail::Trojan {
                password: "hunter2".to_string(),
                sni: "cdn.example.com".to_string(),
                network: "tcp".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_fallback_name() {
        let node = decode("trojan://hunter2@example.com:443").unwrap();
        assert_eq!(node.name, "Trojan-example.com:443");
    }

    #[test]
    fn test_decode_missing_password() {
        let err = decode("trojan://example.com:443").unwrap_err();
        assert_eq!(err, CodecError::MissingCredential);
    }

    #[test]
    fn test_encode_skips_default_network() {
        let record = NodeRecord {
            protocol: Protocol::Trojan,
            name: "Edge".to_string(),
            server: "example.com".to_string(),
            port: Some(443),
            detail: ProtocolDetail::Trojan {
                password: "hunter2".to_string(),
                sni: "".to_string(),
                network: "tcp".to_string(),
            },
        };
        assert_eq!(
            encode(&record).unwrap(),
            "trojan://hunter2@example.com:443#Edge"
        );
    }

    #[test]
    fn test_round_trip() {
        let link = "trojan://hunter2@example.com:443?sni=cdn.example.com&type=ws#Edge";
        let node = decode(link).unwrap();
        let reencoded = encode(&node).unwrap();
        assert_eq!(decode(&reencoded).unwrap(), node);
    }
}
