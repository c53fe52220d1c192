//! Type registry: the fixed mapping from transaction kind to its 4-byte
//! wire prefix.
//!
//! Prefixes tag the framed message body and the signed-transaction wrapper.
//! `PublicKey` and `Signature` are pseudo-kinds: the public key has a real
//! prefix (embedded inside a signature record), the signature record has
//! none because it is never wrapped at the top level.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DexwireError, Result, constants::TYPE_PREFIX_LEN};

/// A 4-byte type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePrefix(pub [u8; TYPE_PREFIX_LEN]);

impl TypePrefix {
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; TYPE_PREFIX_LEN] {
        &self.0
    }

    /// Upper-case hex, the form the registry is published in.
    #[must_use]
    pub fn hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Display for TypePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

pub const NEW_ORDER_PREFIX: TypePrefix = TypePrefix([0xCE, 0x6D, 0xC0, 0x43]);
pub const CANCEL_ORDER_PREFIX: TypePrefix = TypePrefix([0x16, 0x6E, 0x68, 0x1B]);
pub const FREEZE_PREFIX: TypePrefix = TypePrefix([0xE7, 0x74, 0xB3, 0x2D]);
pub const UNFREEZE_PREFIX: TypePrefix = TypePrefix([0x65, 0x15, 0xFF, 0x0D]);
pub const TRANSFER_PREFIX: TypePrefix = TypePrefix([0x2A, 0x2C, 0x87, 0xFA]);
pub const VOTE_PREFIX: TypePrefix = TypePrefix([0xA1, 0xCA, 0xDD, 0x36]);
pub const STD_TX_PREFIX: TypePrefix = TypePrefix([0xF0, 0x62, 0x5D, 0xEE]);
pub const PUBLIC_KEY_PREFIX: TypePrefix = TypePrefix([0xEB, 0x5A, 0xE9, 0x87]);

// ---------------------------------------------------------------------------
// MessageKind
// ---------------------------------------------------------------------------

/// The closed set of broadcastable transaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum MessageKind {
    NewOrder,
    CancelOrder,
    Freeze,
    Unfreeze,
    Transfer,
    Vote,
}

impl MessageKind {
    /// Every kind, in registry order.
    pub const ALL: [Self; 6] = [
        Self::NewOrder,
        Self::CancelOrder,
        Self::Freeze,
        Self::Unfreeze,
        Self::Transfer,
        Self::Vote,
    ];

    #[must_use]
    pub const fn prefix(self) -> TypePrefix {
        match self {
            Self::NewOrder => NEW_ORDER_PREFIX,
            Self::CancelOrder => CANCEL_ORDER_PREFIX,
            Self::Freeze => FREEZE_PREFIX,
            Self::Unfreeze => UNFREEZE_PREFIX,
            Self::Transfer => TRANSFER_PREFIX,
            Self::Vote => VOTE_PREFIX,
        }
    }

    /// Resolve a prefix read off the wire.
    ///
    /// # Errors
    /// `UnsupportedKind` if the bytes match no registered message kind.
    pub fn from_prefix(bytes: &[u8]) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.prefix().as_bytes().as_slice() == bytes)
            .ok_or_else(|| DexwireError::UnsupportedKind(hex::encode_upper(bytes)))
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewOrder => write!(f, "NEW_ORDER"),
            Self::CancelOrder => write!(f, "CANCEL_ORDER"),
            Self::Freeze => write!(f, "FREEZE"),
            Self::Unfreeze => write!(f, "UNFREEZE"),
            Self::Transfer => write!(f, "TRANSFER"),
            Self::Vote => write!(f, "VOTE"),
        }
    }
}

// ---------------------------------------------------------------------------
// WireType
// ---------------------------------------------------------------------------

/// Everything that can appear in a serialized transaction: the real kinds
/// plus the envelope and the two signature-record pseudo-kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    Message(MessageKind),
    StdTx,
    PublicKey,
    Signature,
}

impl WireType {
    /// `None` only for [`WireType::Signature`].
    #[must_use]
    pub const fn prefix(self) -> Option<TypePrefix> {
        match self {
            Self::Message(kind) => Some(kind.prefix()),
            Self::StdTx => Some(STD_TX_PREFIX),
            Self::PublicKey => Some(PUBLIC_KEY_PREFIX),
            Self::Signature => None,
        }
    }
}

impl From<MessageKind> for WireType {
    fn from(kind: MessageKind) -> Self {
        Self::Message(kind)
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(kind) => write!(f, "{kind}"),
            Self::StdTx => write!(f, "STD_TX"),
            Self::PublicKey => write!(f, "PUBLIC_KEY"),
            Self::Signature => write!(f, "SIGNATURE"),
        }
    }
}
