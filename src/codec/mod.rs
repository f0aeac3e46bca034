//! Scheme dispatcher and protocol codec set.
//!
//! `decode` routes a link to the matching protocol decoder based on its
//! exact scheme prefix and converts every decoder failure into a
//! [`ParseOutcome::Malformed`]; nothing here panics or propagates errors
//! to the caller. `encode` is the reverse direction for the protocols
//! that support it.

mod common;
pub mod http;
pub mod hysteria;
pub mod snell;
pub mod socks;
pub mod ss;
pub mod ssr;
pub mod trojan;
pub mod tuic;
pub mod vless;
pub mod vmess;

use lazy_static::lazy_static;
use linked_hash_map::LinkedHashMap;

use crate::models::{NodeRecord, ParseOutcome, Protocol};

lazy_static! {
    /// Scheme tag to display name, in declaration order. Immutable for the
    /// process lifetime. The last three entries have no codec yet.
    static ref SUPPORTED_PROTOCOLS: LinkedHashMap<&'static str, &'static str> = {
        let mut table = LinkedHashMap::new();
        table.insert("ss", "Shadowsocks");
        table.insert("vmess", "VMess");
        table.insert("vless", "VLESS");
        table.insert("trojan", "Trojan");
        table.insert("ssr", "ShadowsocksR");
        table.insert("socks5", "SOCKS5");
        table.insert("http", "HTTP");
        table.insert("snell", "Snell");
        table.insert("hysteria", "Hysteria");
        table.insert("tuic", "TUIC");
        table.insert("wireguard", "WireGuard");
        table.insert("reality", "Reality");
        table.insert("naive", "NaiveProxy");
        table
    };
}

/// Static scheme-tag to display-name table.
pub fn supported_protocols() -> &'static LinkedHashMap<&'static str, &'static str> {
    &SUPPORTED_PROTOCOLS
}

/// Decodes one share link into a [`ParseOutcome`]. Never panics; an
/// unmatched scheme yields `Unrecognized` and any decoder failure yields
/// `Malformed` carrying the trimmed input verbatim.
pub fn decode(link: &str) -> ParseOutcome {
    let link = link.trim();
    if link.is_empty() {
        return ParseOutcome::Unrecognized;
    }

    let result = if link.starts_with("ss://") {
        ss::decode(link)
    } else if link.starts_with("vmess://") {
        // '#' is a bare comment here, not part of the payload grammar
        vmess::decode(strip_comment(link))
    } else if link.starts_with("vless://") {
        vless::decode(link)
    } else if link.starts_with("trojan://") {
        trojan::decode(link)
    } else if link.starts_with("ssr://") {
        ssr::decode(strip_comment(link))
    } else if link.starts_with("hysteria://") {
        hysteria::decode(link)
    } else if link.starts_with("tuic://") {
        tuic::decode(link)
    } else if link.starts_with("snell://") {
        snell::decode(link)
    } else if link.starts_with("socks5://") {
        socks::decode(link)
    } else if link.starts_with("http://") {
        http::decode(link)
    } else {
        log::debug!("unrecognized scheme in link");
        return ParseOutcome::Unrecognized;
    };

    match result {
        Ok(node) => ParseOutcome::Node(node),
        Err(error) => {
            log::warn!("failed to decode link: {}", error);
            ParseOutcome::Malformed {
                error,
                raw: link.to_string(),
            }
        }
    }
}

/// Decodes a batch of links independently: N inputs, N outcomes.
pub fn decode_batch<'a, I>(links: I) -> Vec<ParseOutcome>
where
    I: IntoIterator<Item = &'a str>,
{
    links.into_iter().map(decode).collect()
}

/// Encodes a record back into a share link. Returns `None` for protocols
/// without an encoder.
pub fn encode(record: &NodeRecord) -> Option<String> {
    match record.protocol {
        Protocol::Shadowsocks => ss::encode(record),
        Protocol::VMess => vmess::encode(record),
        Protocol::Vless => vless::encode(record),
        Protocol::Trojan => trojan::encode(record),
        _ => None,
    }
}

/// Strips a trailing bare `#comment` from links whose grammar has no
/// fragment of its own.
fn strip_comment(link: &str) -> &str {
    match link.find('#') {
        Some(pos) => &link[..pos],
        None => link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_protocols_table() {
        let table = supported_protocols();
        assert_eq!(table.len(), 13);
        assert_eq!(table.get("ss"), Some(&"Shadowsocks"));
        assert_eq!(table.get("naive"), Some(&"NaiveProxy"));
        // Declaration order is preserved
        assert_eq!(table.keys().next(), Some(&"ss"));
    }

    #[test]
    fn test_decode_unrecognized_inputs() {
        assert!(decode("").is_unrecognized());
        assert!(decode("   ").is_unrecognized());
        assert!(decode("unknown://x").is_unrecognized());
    }

    #[test]
    fn test_dispatch_is_prefix_exact() {
        assert!(decode("sss://YWVzLTI1Ni1nY206aHVudGVyMkBleGFtcGxlLmNvbTo4Mzg4").is_unrecognized());
    }

    #[test]
    fn test_decode_trims_whitespace() {
        let outcome = decode("  ss://example.com:8388:aes-256-gcm:hunter2\n");
        let node = outcome.into_node().unwrap();
        assert_eq!(node.server, "example.com");
    }

    #[test]
    fn test_vmess_trailing_comment_is_stripped() {
        let link = "vmess://eyJhZGQiOiAianAuZXhhbXBsZS5jb20iLCAicG9ydCI6ICI4NDQzIiwgImlkIjogIjIzYWQ2YjEwLThkMWEtNDBmNy04YWQwLWUzZTM1Y2QzODI5NyJ9#comment";
        let node = decode(link).into_node().unwrap();
        assert_eq!(node.server, "jp.example.com");
    }

    #[test]
    fn test_malformed_preserves_trimmed_raw() {
        let outcome = decode("  vmess://not-valid-base64!!  ");
        let ParseOutcome::Malformed { raw, .. } = outcome else {
            panic!("expected malformed outcome");
        };
        assert_eq!(raw, "vmess://not-valid-base64!!");
    }

    #[test]
    fn test_encode_unsupported_protocol() {
        let node = decode("snell://hunter2@example.com:6160")
            .into_node()
            .unwrap();
        assert_eq!(encode(&node), None);
    }
}
