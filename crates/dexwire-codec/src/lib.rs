//! # dexwire-codec
//!
//! **Bit-exact encoding for the DEX transaction format.**
//!
//! Everything here is a pure function of its inputs: the same message and
//! the same account snapshot always produce the same bytes, which is what
//! lets a remote verifier recompute exactly what was signed.
//!
//! - **frame**: unsigned LEB128 varint length prefixes and type-prefixed frames
//! - **schema**: protobuf message definitions for every wire structure
//! - **body**: message → framed protobuf body
//! - **canonical**: message → ordered canonical sign payload → JSON bytes
//! - **envelope**: signature record and `StdTx` envelope encoding
//! - **inspect**: read a finished transaction back into its parts
//!
//! ## Wire Layout
//!
//! ```text
//! varint(len) ‖ F0625DEE ‖ StdTx {
//!     msgs:       [ varint(len) ‖ kind prefix ‖ body ],
//!     signatures: [ StdSignature { EB5AE987 ‖ varint(len) ‖ pubkey, sig, account, seq } ],
//!     memo, source, data
//! }
//! ```

pub mod body;
pub mod canonical;
pub mod envelope;
pub mod frame;
pub mod inspect;
pub mod schema;

pub use body::{encode_body, frame_body};
pub use canonical::{CanonicalRecord, CanonicalValue, canonical_payload};
pub use envelope::{encode_public_key, encode_signature_record, encode_transaction};
pub use frame::{
    Frame, decode_varint, encode_varint, frame_prefixed, length_prefixed, split_length_prefixed,
};
pub use inspect::{DecodedMessage, DecodedSignature, DecodedTransaction, decode_transaction};
