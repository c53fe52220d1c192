//! System-wide constants for the dexwire encoder.

/// Decimal places carried by every on-chain amount, price and quantity.
pub const AMOUNT_DECIMALS: u32 = 8;

/// `10^AMOUNT_DECIMALS`: one whole token expressed in minor units.
pub const MINOR_UNITS_PER_TOKEN: i64 = 100_000_000;

/// Maximum memo length accepted by the network, in UTF-8 bytes.
pub const MAX_MEMO_BYTES: usize = 128;

/// Length of every type prefix in the registry.
pub const TYPE_PREFIX_LEN: usize = 4;

/// Number of messages carried by one envelope.
pub const MESSAGES_PER_TX: usize = 1;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
