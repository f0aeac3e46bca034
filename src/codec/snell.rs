//! Snell link decoder: `snell://password@host:port?query#name`. No encoder.

use crate::codec::common::{host_port, name_from_fragment, param_or, parse_authority, query_map};
use crate::models::{CodecError, NodeRecord, Protocol, ProtocolDetail};

pub fn decode(link: &str) -> Result<NodeRecord, CodecError> {
    let url = parse_authority(link)?;

    // Credential is a bare password, no username component
    let password = url.username().to_string();
    if password.is_empty() {
        return Err(CodecError::MissingCredential);
    }

    let (server, port) = host_port(&url)?;
    let params = query_map(&url);
    let name = name_from_fragment(&url, Protocol::Snell, &server, port);

    Ok(NodeRecord {
        protocol: Protocol::Snell,
        name,
        server,
        port,
        detail: ProtocolDetail::Snell {
            password,
            obfs: param_or(&params, "obfs", "none"),
            obfs_host: param_or(&params, "obfs-host", ""),
        },
    })
}
