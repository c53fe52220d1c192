//! The external signer capability.
//!
//! Key custody, address derivation and counter bookkeeping all live outside
//! the encoder. The pipeline only *reads* this state, once per encode, via
//! [`SignerContext::snapshot`], and asks for one signature over the
//! canonical payload.
//!
//! Callers must serialize encodes against one signer: two transactions built
//! from the same sequence number are both well-formed, but the network will
//! reject the second as a nonce conflict.

use serde::{Deserialize, Serialize};

use crate::{DexwireError, Result};

/// Account state and signing capability consumed by the encoder.
pub trait SignerContext {
    /// The account address in its human-readable form.
    fn address(&self) -> &str;

    /// Order id the next `NewOrder` will carry.
    fn next_order_id(&self) -> String;

    /// Current replay-protection sequence number.
    fn sequence(&self) -> u64;

    fn account_number(&self) -> u64;

    /// Raw public key bytes as embedded in the signature record.
    fn public_key(&self) -> &[u8];

    /// Sign the canonical payload bytes, returning the raw signature.
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>>;

    /// Convert an address string to raw account bytes.
    ///
    /// The default treats addresses as plain hex. Signers for networks with
    /// a human-readable address scheme override this.
    fn decode_address(&self, address: &str) -> Result<Vec<u8>> {
        decode_hex_address(address)
    }

    /// Read every field the encoder needs in one go.
    fn snapshot(&self) -> Result<AccountSnapshot> {
        let address = self.address().to_string();
        let address_bytes = self.decode_address(&address)?;
        Ok(AccountSnapshot {
            address,
            address_bytes,
            order_id: self.next_order_id(),
            sequence: self.sequence(),
            account_number: self.account_number(),
            public_key: self.public_key().to_vec(),
        })
    }
}

/// A consistent, owned view of the signer's account state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Human-readable address, used in the canonical payload.
    pub address: String,
    /// Raw account bytes, used in protobuf bodies.
    pub address_bytes: Vec<u8>,
    pub order_id: String,
    pub sequence: u64,
    pub account_number: u64,
    pub public_key: Vec<u8>,
}

impl AccountSnapshot {
    /// Sequence as the signed integer the wire schema carries.
    pub fn sequence_i64(&self) -> Result<i64> {
        to_wire_int("sequence", self.sequence)
    }

    pub fn account_number_i64(&self) -> Result<i64> {
        to_wire_int("account_number", self.account_number)
    }
}

fn to_wire_int(field: &'static str, value: u64) -> Result<i64> {
    i64::try_from(value).map_err(|_| DexwireError::ValueOutOfRange {
        field,
        value: value.to_string(),
    })
}

/// Decode a hex address (optionally `0x`-prefixed) into raw bytes.
///
/// # Errors
/// `InvalidAddress` for empty input or non-hex characters.
pub fn decode_hex_address(address: &str) -> Result<Vec<u8>> {
    let trimmed = address.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(DexwireError::InvalidAddress {
            address: address.to_string(),
            reason: "empty address".to_string(),
        });
    }

    hex::decode(digits).map_err(|e| DexwireError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl AccountSnapshot {
    /// A fixed 20-byte account at sequence 0. Not a real key.
    pub fn dummy() -> Self {
        let address_bytes = vec![0x11u8; 20];
        Self {
            address: hex::encode(&address_bytes),
            order_id: format!("{}-1", hex::encode_upper(&address_bytes)),
            address_bytes,
            sequence: 0,
            account_number: 0,
            public_key: vec![0x02; 33],
        }
    }
}

/// A deterministic stand-in signer for unit tests.
///
/// Its "signature" is `SHA-256(payload)`; it never touches key material.
/// **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone)]
pub struct StaticSigner {
    pub account: AccountSnapshot,
    /// When set, `sign` fails with this reason.
    pub fail_with: Option<String>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl StaticSigner {
    pub fn new(account: AccountSnapshot) -> Self {
        Self {
            account,
            fail_with: None,
        }
    }

    pub fn dummy() -> Self {
        Self::new(AccountSnapshot::dummy())
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            account: AccountSnapshot::dummy(),
            fail_with: Some(reason.to_string()),
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl SignerContext for StaticSigner {
    fn address(&self) -> &str {
        &self.account.address
    }

    fn next_order_id(&self) -> String {
        self.account.order_id.clone()
    }

    fn sequence(&self) -> u64 {
        self.account.sequence
    }

    fn account_number(&self) -> u64 {
        self.account.account_number
    }

    fn public_key(&self) -> &[u8] {
        &self.account.public_key
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>> {
        use sha2::{Digest, Sha256};

        if let Some(reason) = &self.fail_with {
            return Err(DexwireError::Signing {
                reason: reason.clone(),
            });
        }
        Ok(Sha256::digest(payload).to_vec())
    }
}
