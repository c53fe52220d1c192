//! Error types for the dexwire encoder.
//!
//! All errors use the `DW_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Message construction errors
//! - 2xx: Encoding errors
//! - 3xx: Signing errors
//! - 9xx: General / internal errors

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::MessageKind;

/// Central error enum for all dexwire operations.
#[derive(Debug, Error)]
pub enum DexwireError {
    // =================================================================
    // Message Construction Errors (1xx)
    // =================================================================
    /// A builder was called without a field its kind requires.
    #[error("DW_ERR_100: {kind} message is missing required field `{field}`")]
    MissingField {
        kind: MessageKind,
        field: &'static str,
    },

    // =================================================================
    // Encoding Errors (2xx)
    // =================================================================
    /// A type prefix read off the wire does not belong to any known kind.
    #[error("DW_ERR_200: Unsupported message kind: {0}")]
    UnsupportedKind(String),

    /// Schema-directed encoding failed.
    #[error("DW_ERR_201: Serialization error: {0}")]
    Serialization(String),

    /// An address could not be converted to its raw account bytes.
    #[error("DW_ERR_202: Invalid address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// A value does not fit the integer width the wire schema mandates.
    #[error("DW_ERR_203: Value out of range for `{field}`: {value}")]
    ValueOutOfRange { field: &'static str, value: String },

    /// A decimal amount carries more fractional digits than the chain supports.
    #[error("DW_ERR_204: Precision loss converting {value} to {decimals}-decimal minor units")]
    PrecisionLoss { value: Decimal, decimals: u32 },

    /// A length-prefixed frame is truncated or its length does not match.
    #[error("DW_ERR_205: Malformed frame: {reason}")]
    MalformedFrame { reason: String },

    // =================================================================
    // Signing Errors (3xx)
    // =================================================================
    /// The signer capability failed or produced an unusable signature.
    #[error("DW_ERR_300: Signing failed: {reason}")]
    Signing { reason: String },

    /// The canonical payload could not be rendered to signable bytes.
    #[error("DW_ERR_301: Canonical payload error: {0}")]
    CanonicalPayload(String),

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("DW_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Configuration error (memo too long, unparsable config, etc.).
    #[error("DW_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Coarse error taxonomy, for callers that branch on failure type rather
/// than on the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    Construction,
    UnsupportedKind,
    Serialization,
    Signing,
    Configuration,
    Internal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction => write!(f, "CONSTRUCTION"),
            Self::UnsupportedKind => write!(f, "UNSUPPORTED_KIND"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Signing => write!(f, "SIGNING"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

impl DexwireError {
    /// Which part of the taxonomy this error belongs to.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::MissingField { .. } => ErrorClass::Construction,
            Self::UnsupportedKind(_) => ErrorClass::UnsupportedKind,
            Self::Serialization(_)
            | Self::InvalidAddress { .. }
            | Self::ValueOutOfRange { .. }
            | Self::PrecisionLoss { .. }
            | Self::MalformedFrame { .. } => ErrorClass::Serialization,
            Self::Signing { .. } | Self::CanonicalPayload(_) => ErrorClass::Signing,
            Self::Configuration(_) => ErrorClass::Configuration,
            Self::Internal(_) => ErrorClass::Internal,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, DexwireError>;

impl From<serde_json::Error> for DexwireError {
    fn from(err: serde_json::Error) -> Self {
        Self::CanonicalPayload(err.to_string())
    }
}
