//! Data model for decoded proxy nodes.

pub mod node;
pub mod outcome;

pub use node::{NodeRecord, Protocol, ProtocolDetail};
pub use outcome::{CodecError, ParseOutcome};
