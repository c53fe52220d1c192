//! In-process secp256k1 signer.
//!
//! Holds the private key in memory and tracks the account counters
//! locally. Suited to tests, tooling and single-process bots; custody-grade
//! deployments implement [`SignerContext`] over their own key store.

use std::fmt;

use dexwire_types::{DexwireError, Result, SignerContext, decode_hex_address};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey, signature::Signer};

/// A [`SignerContext`] backed by a local secp256k1 key.
///
/// Signatures are deterministic (RFC 6979) over SHA-256 of the payload and
/// returned as 64-byte `r ‖ s`.
pub struct LocalSigner {
    key: SigningKey,
    public_key: Vec<u8>,
    address: String,
    address_bytes: Vec<u8>,
    account_number: u64,
    sequence: u64,
}

impl LocalSigner {
    /// Build from a 32-byte secret key.
    ///
    /// # Errors
    /// - `Signing` if `secret` is not a valid secp256k1 scalar
    /// - `InvalidAddress` if `address` cannot be decoded
    pub fn new(
        secret: &[u8],
        address: impl Into<String>,
        account_number: u64,
        sequence: u64,
    ) -> Result<Self> {
        let key = SigningKey::from_slice(secret).map_err(|e| DexwireError::Signing {
            reason: format!("invalid secret key: {e}"),
        })?;
        Self::from_signing_key(key, address, account_number, sequence)
    }

    pub fn from_signing_key(
        key: SigningKey,
        address: impl Into<String>,
        account_number: u64,
        sequence: u64,
    ) -> Result<Self> {
        let address = address.into();
        let address_bytes = decode_hex_address(&address)?;
        let public_key = key.verifying_key().to_sec1_bytes().to_vec();

        Ok(Self {
            key,
            public_key,
            address,
            address_bytes,
            account_number,
            sequence,
        })
    }

    #[must_use]
    pub fn verifying_key(&self) -> &VerifyingKey {
        self.key.verifying_key()
    }

    /// Move to the next sequence number after a transaction was accepted.
    ///
    /// Takes `&mut self`, so it cannot run while a message borrowing this
    /// signer is alive.
    pub fn advance(&mut self) {
        self.sequence = self.sequence.saturating_add(1);
        tracing::debug!(
            address = %self.address,
            sequence = self.sequence,
            "Signer sequence advanced"
        );
    }

    /// Resynchronize with the sequence the network reports.
    pub fn set_sequence(&mut self, sequence: u64) {
        self.sequence = sequence;
    }
}

impl SignerContext for LocalSigner {
    fn address(&self) -> &str {
        &self.address
    }

    /// `UPPERHEX(address bytes)-(sequence + 1)`.
    fn next_order_id(&self) -> String {
        format!(
            "{}-{}",
            hex::encode_upper(&self.address_bytes),
            self.sequence.saturating_add(1)
        )
    }

    fn sequence(&self) -> u64 {
        self.sequence
    }

    fn account_number(&self) -> u64 {
        self.account_number
    }

    fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let signature: Signature = self.key.try_sign(payload).map_err(|e| DexwireError::Signing {
            reason: e.to_string(),
        })?;
        Ok(signature.to_bytes().to_vec())
    }
}

impl fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .field("account_number", &self.account_number)
            .field("sequence", &self.sequence)
            .field("public_key", &hex::encode(&self.public_key))
            .finish_non_exhaustive()
    }
}
