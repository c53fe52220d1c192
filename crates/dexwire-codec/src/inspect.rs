//! Read a finished transaction back into its parts.
//!
//! Used by tests and tooling to check what was actually put on the wire.
//! Message bodies are left encoded; only the envelope, the type prefixes
//! and the signature records are decoded.

use dexwire_types::{
    DexwireError, MessageKind, PUBLIC_KEY_PREFIX, Result, STD_TX_PREFIX, Source,
    constants::MESSAGES_PER_TX,
};
use prost::Message as _;

use crate::frame::{Frame, split_length_prefixed};
use crate::schema::{StdSignature, StdTx};

/// One message inside the envelope: its kind and its protobuf body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub kind: MessageKind,
    pub body: Vec<u8>,
}

/// One signature record, with the public key unwrapped from its prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSignature {
    pub public_key: Vec<u8>,
    pub signature: Vec<u8>,
    pub account_number: i64,
    pub sequence: i64,
}

impl DecodedSignature {
    #[must_use]
    pub fn signature_hex(&self) -> String {
        hex::encode(&self.signature)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTransaction {
    pub messages: Vec<DecodedMessage>,
    pub signatures: Vec<DecodedSignature>,
    pub memo: String,
    pub source: Source,
    pub data: Vec<u8>,
}

impl DecodedTransaction {
    #[must_use]
    pub fn kinds(&self) -> Vec<MessageKind> {
        self.messages.iter().map(|m| m.kind).collect()
    }
}

/// Parse `varint ‖ F0625DEE ‖ StdTx` back into its parts.
///
/// # Errors
/// - `MalformedFrame` on any length mismatch, a wrong envelope prefix,
///   undecodable protobuf, an unknown source code or a message count other
///   than one
/// - `UnsupportedKind` if a message carries an unknown type prefix
pub fn decode_transaction(bytes: &[u8]) -> Result<DecodedTransaction> {
    let frame = Frame::parse(bytes)?;
    if frame.prefix != STD_TX_PREFIX {
        return Err(malformed(format!(
            "expected {STD_TX_PREFIX} envelope, found {}",
            frame.prefix
        )));
    }

    let tx = StdTx::decode(frame.body).map_err(|e| malformed(e.to_string()))?;
    if tx.msgs.len() != MESSAGES_PER_TX || tx.signatures.len() != MESSAGES_PER_TX {
        return Err(malformed(format!(
            "{} messages and {} signatures, expected {MESSAGES_PER_TX} of each",
            tx.msgs.len(),
            tx.signatures.len()
        )));
    }

    let messages = tx
        .msgs
        .iter()
        .map(|framed| decode_message(framed))
        .collect::<Result<Vec<_>>>()?;
    let signatures = tx
        .signatures
        .iter()
        .map(|record| decode_signature(record))
        .collect::<Result<Vec<_>>>()?;

    let source = match tx.source {
        0 => Source::Hidden,
        1 => Source::Broadcast,
        other => return Err(malformed(format!("unknown source code {other}"))),
    };

    tracing::debug!(
        kinds = ?messages.iter().map(|m| m.kind).collect::<Vec<_>>(),
        memo_len = tx.memo.len(),
        "Transaction decoded"
    );

    Ok(DecodedTransaction {
        messages,
        signatures,
        memo: tx.memo,
        source,
        data: tx.data,
    })
}

fn decode_message(framed: &[u8]) -> Result<DecodedMessage> {
    let frame = Frame::parse(framed)?;
    Ok(DecodedMessage {
        kind: MessageKind::from_prefix(frame.prefix.as_bytes())?,
        body: frame.body.to_vec(),
    })
}

fn decode_signature(record: &[u8]) -> Result<DecodedSignature> {
    let record = StdSignature::decode(record).map_err(|e| malformed(e.to_string()))?;

    let Some(framed_key) = record.pub_key.strip_prefix(PUBLIC_KEY_PREFIX.as_bytes()) else {
        return Err(malformed(format!(
            "public key does not start with {PUBLIC_KEY_PREFIX}"
        )));
    };
    let public_key = split_length_prefixed(framed_key)?.to_vec();

    Ok(DecodedSignature {
        public_key,
        signature: record.signature,
        account_number: record.account_number,
        sequence: record.sequence,
    })
}

fn malformed(reason: String) -> DexwireError {
    DexwireError::MalformedFrame { reason }
}
