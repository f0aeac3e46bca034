//! Hysteria link decoder: `hysteria://host:port?query#name`. No encoder.

use crate::codec::common::{
    host_port, name_from_fragment, param_flag, param_or, param_u32, parse_authority, query_map,
};
use crate::models::{CodecError, NodeRecord, Protocol, ProtocolDetail};

pub fn decode(link: &str) -> Result<NodeRecord, CodecError> {
    let url = parse_authority(link)?;
    let (server, port) = host_port(&url)?;
    let params = query_map(&url);
    let name = name_from_fragment(&url, Protocol::Hysteria, &server, port);

    Ok(NodeRecord {
        protocol: Protocol::Hysteria,
        name,
        server,
        port,
        detail: ProtocolDetail::Hysteria {
            protocol: param_or(&params, "protocol", "udp"),
            auth: param_or(&params, "auth", ""),
            peer: param_or(&params, "peer", ""),
            insecure: param_flag(&params, "insecure"),
            up_mbps: param_u32(&params, "upmbps", 100)?,
            down_mbps: param_u32(&params, "downmbps", 100)?,
            alpn: param_or(&params, "alpn", "h3"),
        },
    })
}
