//! # dexwire-assembler
//!
//! Turns a [`Message`] into signed, broadcastable bytes.
//!
//! - [`TransactionAssembler`]: runs the pipeline with a fixed memo and source
//! - [`stage`]: the [`AssemblyStage`] lifecycle
//! - [`assembler`]: one public function per stage and their typed outputs
//! - [`LocalSigner`]: in-process secp256k1 [`SignerContext`]
//!
//! ```text
//! Constructed ─▶ BodyFramed ─▶ PayloadBuilt ─▶ Signed ─▶ EnvelopeAssembled
//! ```
//!
//! [`SignerContext`]: dexwire_types::SignerContext

pub mod assembler;
pub mod local_signer;
pub mod stage;

pub use assembler::{
    FramedBody, RawSignature, SignPayload, SignedTransaction, TransactionAssembler,
    assemble_envelope, build_payload, frame_message, sign_payload,
};
pub use local_signer::LocalSigner;
pub use stage::AssemblyStage;

use dexwire_types::{Message, Result};

/// Encode `message` with the default config (empty memo, broadcast).
pub fn encode(message: &Message<'_>) -> Result<SignedTransaction> {
    TransactionAssembler::default().encode(message)
}
