//! Node record definitions.
//!
//! A [`NodeRecord`] is the structured form of a single share link. The four
//! core fields are common to every protocol; everything else lives in the
//! protocol-specific [`ProtocolDetail`] variant.

use serde::Serialize;

/// The protocol a node speaks.
///
/// Covers the ten schemes with a working codec plus three names that only
/// appear in the supported-protocol display table (no codec exists for them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Protocol {
    #[serde(rename = "ss")]
    Shadowsocks,
    #[serde(rename = "vmess")]
    VMess,
    #[serde(rename = "vless")]
    Vless,
    #[serde(rename = "trojan")]
    Trojan,
    #[serde(rename = "ssr")]
    ShadowsocksR,
    #[serde(rename = "socks5")]
    Socks5,
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "snell")]
    Snell,
    #[serde(rename = "hysteria")]
    Hysteria,
    #[serde(rename = "tuic")]
    Tuic,
    #[serde(rename = "wireguard")]
    WireGuard,
    #[serde(rename = "reality")]
    Reality,
    #[serde(rename = "naive")]
    Naive,
}

impl Protocol {
    /// Short label used as the prefix of synthesized node names.
    pub fn label(self) -> &'static str {
        match self {
            Protocol::Shadowsocks => "SS",
            Protocol::VMess => "VMess",
            Protocol::Vless => "VLESS",
            Protocol::Trojan => "Trojan",
            Protocol::ShadowsocksR => "SSR",
            Protocol::Socks5 => "SOCKS5",
            Protocol::Http => "HTTP",
            Protocol::Snell => "Snell",
            Protocol::Hysteria => "Hysteria",
            Protocol::Tuic => "TUIC",
            Protocol::WireGuard => "WireGuard",
            Protocol::Reality => "Reality",
            Protocol::Naive => "NaiveProxy",
        }
    }
}

/// Structured form of one decoded share link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRecord {
    #[serde(rename = "type")]
    pub protocol: Protocol,
    /// Display label. Never empty: decoders fall back to
    /// `"<label>-<server>:<port>"` when the link carries no name.
    pub name: String,
    pub server: String,
    /// `None` means the link did not carry a usable port. Distinct from 0.
    pub port: Option<u16>,
    #[serde(flatten)]
    pub detail: ProtocolDetail,
}

impl NodeRecord {
    /// Synthesized fallback name for links without a remark.
    pub fn fallback_name(protocol: Protocol, server: &str, port: Option<u16>) -> String {
        format!("{}-{}:{}", protocol.label(), server, port.unwrap_or(0))
    }
}

/// Protocol-specific fields, one variant per codec-backed protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProtocolDetail {
    Shadowsocks {
        method: String,
        password: String,
    },
    VMess {
        uuid: String,
        #[serde(rename = "alterId")]
        alter_id: u16,
        security: String,
        network: String,
        #[serde(rename = "wsPath")]
        ws_path: String,
        #[serde(rename = "wsHost")]
        ws_host: String,
        tls: String,
        sni: String,
    },
    Vless {
        uuid: String,
        network: String,
        security: String,
        path: String,
        host: String,
        sni: String,
    },
    Trojan {
        password: String,
        sni: String,
        network: String,
    },
    ShadowsocksR {
        protocol: String,
        method: String,
        obfs: String,
        password: String,
        #[serde(rename = "obfsparam")]
        obfs_param: String,
        #[serde(rename = "protoparam")]
        proto_param: String,
    },
    Hysteria {
        protocol: String,
        auth: String,
        peer: String,
        insecure: bool,
        #[serde(rename = "upmbps")]
        up_mbps: u32,
        #[serde(rename = "downmbps")]
        down_mbps: u32,
        alpn: String,
    },
    Tuic {
        uuid: String,
        password: String,
        congestion_control: String,
        udp_relay_mode: String,
        alpn: String,
        allow_insecure: bool,
    },
    Snell {
        password: String,
        obfs: String,
        #[serde(rename = "obfs-host")]
        obfs_host: String,
    },
    Socks5 {
        username: Option<String>,
        password: Option<String>,
    },
    Http {
        username: Option<String>,
        password: Option<String>,
    },
}
