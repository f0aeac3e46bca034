//! VLESS link codec: `vless://uuid@host:port?query#name`.

use crate::codec::common::{host_port, name_from_fragment, param_or, parse_authority, query_map};
use crate::models::{CodecError, NodeRecord, Protocol, ProtocolDetail};

pub fn decode(link: &str) -> Result<NodeRecord, CodecError> {
    let url = parse_authority(link)?;

    let uuid = url.username().to_string();
    if uuid.is_empty() {
        return Err(CodecError::MissingCredential);
    }

    let (server, port) = host_port(&url)?;
    let params = query_map(&url);
    let name = name_from_fragment(&url, Protocol::Vless, &server, port);

    Ok(NodeRecord {
        protocol: Protocol::Vless,
        name,
        server,
        port,
        detail: ProtocolDetail::Vless {
            uuid,
            network: param_or(&params, "type", "tcp"),
            security: param_or(&params, "security", "none"),
            path: param_or(&params, "path", ""),
            host: param_or(&params, "host", ""),
            sni: param_or(&params, "sni", ""),
        },
    })
}

pub fn encode(record: &NodeRecord) -> Option<String> {
    let ProtocolDetail::Vless {
        uuid,
        network,
        security,
        path,
        host,
        sni,
    } = &record.detail
    else {
        return None;
    };

    let mut link = format!(
        "vless://{}@{}:{}",
        uuid,
        record.server,
        record.port.unwrap_or(443)
    );

    // Parameters equal to their defaults are omitted
    let mut params = Vec::new();
    if !network.is_empty() && network != "tcp" {
        params.push(format!("type={}", network));
    }
    if !security.is_empty() && security != "none" {
        params.push(format!("security={}", security));
    }
    if !path.is_empty() {
        params.push(format!("path={}", path));
    }
    if !host.is_empty() {
        params.push(format!("host={}", host));
    }
    if !sni.is_empty() {
        params.push(format!("sni={}", sni));
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
    fn test_decode_with_query_and_fragment() {
        let node = decode(
            "vless://23ad6b10-8d1a-40f7-8ad0-e3e35cd38297@example.com:443?type=ws&security=tls&path=/ws&sni=example.com#My%20VLESS",
        )
        .unwrap();

        assert_eq!(node.name, "My VLESS");
        assert_eq!(node.server, "example.com");
        assert_eq!(node.port, Some(443));
        assert_eq!(
            node.detail,
            ProtocolDetail::Vless {
                uuid: "23ad6b10-8d1a-40f7-8ad0-e3e35cd38297".to_string(),
                network: "ws".to_string(),
                security: "tls".to_string(),
                path: "/ws".to_string(),
                host: "".to_string(),
                sni: "example.com".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_without_query_or_fragment() {
        let node = decode("vless://23ad6b10-8d1a-40f7-8ad0-e3e35cd38297@example.com:443").unwrap();
        assert_eq!(node.name, "VLESS-example.com:443");
        assert_eq!(
            node.detail,
            ProtocolDetail::Vless {
                uuid: "23ad6b10-8d1a-40f7-8ad0-e3e35cd38297".to_string(),
                network: "tcp".to_string(),
                security: "none".to_string(),
                path: "".to_string(),
                host: "".to_string(),
                sni: "".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_first_query_value_wins() {
        let node = decode("vless://uuid@example.com:443?type=ws&type=grpc").unwrap();
        let ProtocolDetail::Vless { network, .. } = node.detail else {
            panic!("wrong detail variant");
        };
        assert_eq!(network, "ws");
    }

    #[test]
    fn test_decode_missing_uuid() {
        let err = decode("vless://example.com:443").unwrap_err();
        assert_eq!(err, CodecError::MissingCredential);
    }

    #[test]
    fn test_encode_omits_defaults() {
        let record = NodeRecord {
            protocol: Protocol::Vless,
            name: "node".to_string(),
            server: "example.com".to_string(),
            port: Some(443),
            detail: ProtocolDetail::Vless {
                uuid: "uuid".to_string(),
                network: "tcp".to_string(),
                security: "none".to_string(),
                path: "".to_string(),
                host: "".to_string(),
                sni: "".to_string(),
            },
        };
        assert_eq!(encode(&record).unwrap(), "vless://uuid@example.com:443#node");
    }

    #[test]
    fn test_round_trip() {
        let link =
            "vless://23ad6b10-8d1a-40f7-8ad0-e3e35cd38297@example.com:443?type=ws&security=tls&path=/ws#node";
        let node = decode(link).unwrap();
        let reencoded = encode(&node).unwrap();
        assert_eq!(decode(&reencoded).unwrap(), node);
    }
}
