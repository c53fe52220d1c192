//! The encode pipeline.
//!
//! ```text
//! Message ─snapshot─▶ FramedBody ─canonical─▶ SignPayload ─sign─▶ RawSignature ─envelope─▶ SignedTransaction
//! ```
//!
//! Each arrow is a public function that takes only the previous
//! intermediate. The message is bound into [`FramedBody`] and travels with
//! it, so a later stage always works on the message that was framed. The
//! signer is read exactly once (`snapshot`) and invoked exactly once
//! (`sign`); every other step is a pure function of those two results and
//! the config.

use dexwire_codec::{canonical_payload, encode_signature_record, encode_transaction, frame_body};
use dexwire_types::{AccountSnapshot, DexwireError, EncoderConfig, Message, MessageKind, Result};
use sha2::{Digest, Sha256};

use crate::stage::AssemblyStage;

/// Output of [`frame_message`]: the message being encoded, the account
/// view for this encode and the framed protobuf body.
///
/// Later stages read the message from here, never from a separate
/// argument, so a body and its signature always describe the same message.
#[derive(Debug, Clone)]
pub struct FramedBody<'m> {
    message: &'m Message<'m>,
    account: AccountSnapshot,
    bytes: Vec<u8>,
}

impl<'m> FramedBody<'m> {
    #[must_use]
    pub fn message(&self) -> &'m Message<'m> {
        self.message
    }

    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.message.kind()
    }

    #[must_use]
    pub fn account(&self) -> &AccountSnapshot {
        &self.account
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Output of [`build_payload`]: the exact bytes handed to the signer.
#[derive(Debug, Clone)]
pub struct SignPayload<'m> {
    framed: FramedBody<'m>,
    bytes: Vec<u8>,
}

impl<'m> SignPayload<'m> {
    #[must_use]
    pub fn framed(&self) -> &FramedBody<'m> {
        &self.framed
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Output of [`sign_payload`].
#[derive(Debug, Clone)]
pub struct RawSignature<'m> {
    payload: SignPayload<'m>,
    bytes: Vec<u8>,
}

impl<'m> RawSignature<'m> {
    #[must_use]
    pub fn payload(&self) -> &SignPayload<'m> {
        &self.payload
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A finished, broadcastable transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    bytes: Vec<u8>,
    kind: MessageKind,
    sequence: u64,
}

impl SignedTransaction {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// The sequence number this transaction was signed with.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// SHA-256 of the broadcast bytes.
    #[must_use]
    pub fn hash(&self) -> [u8; 32] {
        Sha256::digest(&self.bytes).into()
    }

    /// Transaction hash in the upper-case hex form the network reports.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        hex::encode_upper(self.hash())
    }

    /// Lower-case hex of the broadcast bytes, as HTTP broadcast endpoints
    /// expect in the request body.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// `Constructed → BodyFramed`. Reads the signer once and frames the body.
pub fn frame_message<'m>(message: &'m Message<'m>) -> Result<FramedBody<'m>> {
    let account = message.signer().snapshot()?;
    let bytes = frame_body(message, &account)?;

    tracing::debug!(
        stage = %AssemblyStage::BodyFramed,
        kind = %message.kind(),
        sequence = account.sequence,
        bytes = bytes.len(),
        "Body framed"
    );
    Ok(FramedBody {
        message,
        account,
        bytes,
    })
}

/// `BodyFramed → PayloadBuilt`. Renders the canonical payload of the framed
/// message from the same snapshot the body was built from.
pub fn build_payload(framed: FramedBody<'_>) -> Result<SignPayload<'_>> {
    let bytes = canonical_payload(framed.message, &framed.account).to_sign_bytes()?;

    tracing::debug!(
        stage = %AssemblyStage::PayloadBuilt,
        kind = %framed.kind(),
        bytes = bytes.len(),
        "Sign payload built"
    );
    Ok(SignPayload { framed, bytes })
}

/// `PayloadBuilt → Signed`. Invokes the framed message's signer on the
/// payload bytes.
///
/// # Errors
/// Whatever the signer returns, or `Signing` if it returns no bytes.
pub fn sign_payload(payload: SignPayload<'_>) -> Result<RawSignature<'_>> {
    let framed = &payload.framed;
    let bytes = framed.message.signer().sign(&payload.bytes)?;
    if bytes.is_empty() {
        tracing::warn!(
            kind = %framed.kind(),
            address = %framed.account.address,
            "Signer returned an empty signature"
        );
        return Err(DexwireError::Signing {
            reason: "signer returned an empty signature".to_string(),
        });
    }

    tracing::debug!(
        stage = %AssemblyStage::Signed,
        kind = %framed.kind(),
        signature_len = bytes.len(),
        "Payload signed"
    );
    Ok(RawSignature { payload, bytes })
}

/// `Signed → EnvelopeAssembled`.
///
/// # Errors
/// `Configuration` if `config` fails validation, or any encoding error.
pub fn assemble_envelope(
    signature: RawSignature<'_>,
    config: &EncoderConfig,
) -> Result<SignedTransaction> {
    config.validate()?;

    let RawSignature {
        payload: SignPayload { framed, .. },
        bytes: signature,
    } = signature;
    let kind = framed.kind();

    let record = encode_signature_record(&framed.account, &signature)?;
    let bytes = encode_transaction(framed.bytes, record, config)?;

    tracing::debug!(
        stage = %AssemblyStage::EnvelopeAssembled,
        kind = %kind,
        bytes = bytes.len(),
        "Envelope assembled"
    );
    Ok(SignedTransaction {
        bytes,
        kind,
        sequence: framed.account.sequence,
    })
}

// ---------------------------------------------------------------------------
// TransactionAssembler
// ---------------------------------------------------------------------------

/// Runs the full pipeline with a fixed memo and source.
#[derive(Debug, Clone, Default)]
pub struct TransactionAssembler {
    config: EncoderConfig,
}

impl TransactionAssembler {
    /// # Errors
    /// `Configuration` if the config fails validation.
    pub fn new(config: EncoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode and sign `message` into broadcastable bytes.
    ///
    /// Nothing is retried and nothing is returned on failure; the first
    /// failing stage's error is propagated as-is.
    pub fn encode(&self, message: &Message<'_>) -> Result<SignedTransaction> {
        let framed = frame_message(message)?;
        let payload = build_payload(framed)?;
        let signature = sign_payload(payload)?;
        let tx = assemble_envelope(signature, &self.config)?;

        tracing::info!(
            kind = %tx.kind(),
            sequence = tx.sequence(),
            hash = %tx.hash_hex(),
            bytes = tx.len(),
            "Transaction encoded"
        );
        Ok(tx)
    }
}
