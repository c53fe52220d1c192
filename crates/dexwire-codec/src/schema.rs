//! Protobuf schemas for every structure on the wire.
//!
//! Field names, numbers and types are fixed by the network. proto3 rules
//! apply: fields holding their default value (0, empty string, empty bytes)
//! are omitted from the encoding.

/// Place an order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NewOrderMsg {
    #[prost(bytes = "vec", tag = "1")]
    pub sender: Vec<u8>,
    #[prost(string, tag = "2")]
    pub id: String,
    #[prost(string, tag = "3")]
    pub symbol: String,
    #[prost(int64, tag = "4")]
    pub ordertype: i64,
    #[prost(int64, tag = "5")]
    pub side: i64,
    #[prost(int64, tag = "6")]
    pub price: i64,
    #[prost(int64, tag = "7")]
    pub quantity: i64,
    #[prost(int64, tag = "8")]
    pub timeinforce: i64,
}

/// Cancel a resting order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelOrderMsg {
    #[prost(bytes = "vec", tag = "1")]
    pub sender: Vec<u8>,
    #[prost(string, tag = "2")]
    pub symbol: String,
    #[prost(string, tag = "3")]
    pub refid: String,
}

/// Freeze and unfreeze share one layout; only the type prefix differs.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenFreezeMsg {
    #[prost(bytes = "vec", tag = "1")]
    pub from: Vec<u8>,
    #[prost(string, tag = "2")]
    pub symbol: String,
    #[prost(int64, tag = "3")]
    pub amount: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Token {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(int64, tag = "2")]
    pub amount: i64,
}

/// One side of a send: an account and the coins leaving or entering it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendLeg {
    #[prost(bytes = "vec", tag = "1")]
    pub address: Vec<u8>,
    #[prost(message, repeated, tag = "2")]
    pub coins: Vec<Token>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendMsg {
    #[prost(message, repeated, tag = "1")]
    pub inputs: Vec<SendLeg>,
    #[prost(message, repeated, tag = "2")]
    pub outputs: Vec<SendLeg>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VoteMsg {
    #[prost(int64, tag = "1")]
    pub proposal_id: i64,
    #[prost(bytes = "vec", tag = "2")]
    pub voter: Vec<u8>,
    #[prost(int64, tag = "3")]
    pub option: i64,
}

/// Signature record. `pub_key` is itself prefixed: `EB5AE987 ‖ varint ‖ key`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StdSignature {
    #[prost(bytes = "vec", tag = "1")]
    pub pub_key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
    #[prost(int64, tag = "3")]
    pub account_number: i64,
    #[prost(int64, tag = "4")]
    pub sequence: i64,
}

/// Transaction envelope. Messages and signatures are carried pre-encoded.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StdTx {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub msgs: Vec<Vec<u8>>,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub signatures: Vec<Vec<u8>>,
    #[prost(string, tag = "3")]
    pub memo: String,
    #[prost(int64, tag = "4")]
    pub source: i64,
    #[prost(bytes = "vec", tag = "5")]
    pub data: Vec<u8>,
}
