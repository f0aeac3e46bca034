pub mod codec;
pub mod models;
pub mod utils;

// Re-export the codec surface for easier access
pub use codec::{decode, decode_batch, encode, supported_protocols};
pub use models::{CodecError, NodeRecord, ParseOutcome, Protocol, ProtocolDetail};
