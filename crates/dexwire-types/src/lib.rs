//! # dexwire-types
//!
//! Shared types, errors, and configuration for the **dexwire** transaction
//! encoder.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Type registry**: [`MessageKind`], [`WireType`], [`TypePrefix`]
//! - **Order enums**: [`OrderSide`], [`OrderType`], [`TimeInForce`], [`VoteOption`]
//! - **Amounts**: [`MinorUnits`] (exact fixed-point, 1e8 scale)
//! - **Message model**: [`Message`], [`MessageBody`] and one struct per kind
//! - **Signer capability**: [`SignerContext`], [`AccountSnapshot`]
//! - **Configuration**: [`EncoderConfig`], [`Source`]
//! - **Errors**: [`DexwireError`] with `DW_ERR_` prefix codes
//! - **Constants**: wire limits and defaults

pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
pub mod message;
pub mod order;
pub mod registry;
pub mod signer;

// Re-export all primary types at crate root for ergonomic imports:
//   use dexwire_types::{Message, MessageKind, SignerContext, ...};

pub use amount::*;
pub use config::*;
pub use error::*;
pub use message::*;
pub use order::*;
pub use registry::*;
pub use signer::*;

// Constants are accessed via `dexwire_types::constants::FOO`
// (not re-exported to avoid name collisions).
