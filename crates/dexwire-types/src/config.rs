//! Configuration types for the transaction assembler.

use serde::{Deserialize, Serialize};

use crate::{DexwireError, Result, constants};

/// Whether a transaction is meant for network broadcast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Built but not intended for broadcast.
    Hidden,
    #[default]
    Broadcast,
}

impl Source {
    /// Value carried by the envelope's `source` field.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Hidden => 0,
            Self::Broadcast => 1,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hidden => write!(f, "HIDDEN"),
            Self::Broadcast => write!(f, "BROADCAST"),
        }
    }
}

/// Envelope-level settings applied to every encoded transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Free-text memo, at most [`constants::MAX_MEMO_BYTES`] bytes.
    pub memo: String,
    pub source: Source,
}

impl EncoderConfig {
    /// Broadcast config carrying `memo`.
    #[must_use]
    pub fn with_memo(memo: impl Into<String>) -> Self {
        Self {
            memo: memo.into(),
            source: Source::Broadcast,
        }
    }

    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DexwireError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// `Configuration` if the memo exceeds the network limit.
    pub fn validate(&self) -> Result<()> {
        if self.memo.len() > constants::MAX_MEMO_BYTES {
            return Err(DexwireError::Configuration(format!(
                "memo is {} bytes, limit is {}",
                self.memo.len(),
                constants::MAX_MEMO_BYTES
            )));
        }
        Ok(())
    }
}
