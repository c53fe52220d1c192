//! Lifecycle of a single encode.
//!
//! Each stage function in [`crate::assembler`] moves a message one step
//! along [`AssemblyStage`] and tags its log line with the stage it reached.
//! Intermediates carry the message they were built from, so the only way
//! forward is the previous stage's output.

use std::fmt;

/// Where a message is in the assembly pipeline.
///
/// The pipeline is linear: every encode walks these stages in order and
/// either reaches `EnvelopeAssembled` or stops with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssemblyStage {
    /// A message exists; nothing has been encoded.
    Constructed,
    /// Protobuf body encoded and wrapped with its length and kind prefix.
    BodyFramed,
    /// Canonical sign payload rendered to bytes.
    PayloadBuilt,
    /// Signer returned a signature over the payload.
    Signed,
    /// Signature record and envelope encoded; bytes ready to broadcast.
    EnvelopeAssembled,
}

impl AssemblyStage {
    pub const ALL: [Self; 5] = [
        Self::Constructed,
        Self::BodyFramed,
        Self::PayloadBuilt,
        Self::Signed,
        Self::EnvelopeAssembled,
    ];

    /// The stage after this one, or `None` once the envelope is assembled.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Constructed => Some(Self::BodyFramed),
            Self::BodyFramed => Some(Self::PayloadBuilt),
            Self::PayloadBuilt => Some(Self::Signed),
            Self::Signed => Some(Self::EnvelopeAssembled),
            Self::EnvelopeAssembled => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::EnvelopeAssembled)
    }
}

impl fmt::Display for AssemblyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constructed => write!(f, "CONSTRUCTED"),
            Self::BodyFramed => write!(f, "BODY_FRAMED"),
            Self::PayloadBuilt => write!(f, "PAYLOAD_BUILT"),
            Self::Signed => write!(f, "SIGNED"),
            Self::EnvelopeAssembled => write!(f, "ENVELOPE_ASSEMBLED"),
        }
    }
}
