//! Signature record and transaction envelope.

use dexwire_types::{
    AccountSnapshot, DexwireError, EncoderConfig, PUBLIC_KEY_PREFIX, Result, STD_TX_PREFIX,
};
use prost::Message as _;

use crate::frame::length_prefixed;
use crate::schema::{StdSignature, StdTx};

/// `EB5AE987 ‖ varint(len(key)) ‖ key`.
#[must_use]
pub fn encode_public_key(key: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(PUBLIC_KEY_PREFIX.as_bytes().len() + 1 + key.len());
    out.extend_from_slice(PUBLIC_KEY_PREFIX.as_bytes());
    out.extend_from_slice(&length_prefixed(key));
    out
}

/// Encode the `StdSignature` record for one signer.
///
/// Account number and sequence come from the same snapshot the sign
/// payload was built from.
///
/// # Errors
/// `ValueOutOfRange` if either counter does not fit a signed 64-bit field.
pub fn encode_signature_record(account: &AccountSnapshot, signature: &[u8]) -> Result<Vec<u8>> {
    let record = StdSignature {
        pub_key: encode_public_key(&account.public_key),
        signature: signature.to_vec(),
        account_number: account.account_number_i64()?,
        sequence: account.sequence_i64()?,
    };
    Ok(record.encode_to_vec())
}

/// Wrap one framed message and one signature record into the final
/// broadcastable bytes: `varint(len) ‖ F0625DEE ‖ StdTx`.
///
/// `framed_message` keeps its own length prefix inside `msgs`.
///
/// # Errors
/// `Serialization` if protobuf encoding fails.
pub fn encode_transaction(
    framed_message: Vec<u8>,
    signature_record: Vec<u8>,
    config: &EncoderConfig,
) -> Result<Vec<u8>> {
    let tx = StdTx {
        msgs: vec![framed_message],
        signatures: vec![signature_record],
        memo: config.memo.clone(),
        source: config.source.code(),
        data: Vec::new(),
    };

    let mut content = Vec::with_capacity(STD_TX_PREFIX.as_bytes().len() + tx.encoded_len());
    content.extend_from_slice(STD_TX_PREFIX.as_bytes());
    tx.encode(&mut content)
        .map_err(|e| DexwireError::Serialization(e.to_string()))?;

    tracing::trace!(
        content_len = content.len(),
        memo_len = config.memo.len(),
        source = %config.source,
        "StdTx envelope encoded"
    );
    Ok(length_prefixed(&content))
}
