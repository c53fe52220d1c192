//! Canonical sign payload.
//!
//! Verifiers rebuild this structure independently from the broadcast
//! message, so its shape is as fixed as the wire format: a per-kind field
//! set in a per-kind order (not alphabetical, not insertion-dependent),
//! integers as JSON integers, nested records for composite kinds.
//!
//! Values are a closed sum type and records are ordered lists of
//! `(name, value)` pairs, so there is no dynamic map whose iteration order
//! or value types could drift.

use dexwire_types::{AccountSnapshot, Message, MessageBody, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One value in the canonical payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalValue {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Record(CanonicalRecord),
    List(Vec<CanonicalRecord>),
}

/// An ordered set of named fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalRecord {
    fields: Vec<(&'static str, CanonicalValue)>,
}

impl CanonicalRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Order of calls is the order on the wire.
    #[must_use]
    pub fn field(mut self, name: &'static str, value: CanonicalValue) -> Self {
        self.fields.push((name, value));
        self
    }

    #[must_use]
    pub fn text(self, name: &'static str, value: impl Into<String>) -> Self {
        self.field(name, CanonicalValue::Text(value.into()))
    }

    #[must_use]
    pub fn signed(self, name: &'static str, value: i64) -> Self {
        self.field(name, CanonicalValue::Signed(value))
    }

    #[must_use]
    pub fn unsigned(self, name: &'static str, value: u64) -> Self {
        self.field(name, CanonicalValue::Unsigned(value))
    }

    #[must_use]
    pub fn list(self, name: &'static str, records: Vec<CanonicalRecord>) -> Self {
        self.field(name, CanonicalValue::List(records))
    }

    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CanonicalValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Canonical text form: compact JSON in field order, as UTF-8 bytes.
    ///
    /// # Errors
    /// `CanonicalPayload` if the record cannot be rendered.
    pub fn to_sign_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl Serialize for CanonicalRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for CanonicalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Signed(n) => serializer.serialize_i64(*n),
            Self::Unsigned(n) => serializer.serialize_u64(*n),
            Self::Record(record) => record.serialize(serializer),
            Self::List(records) => serializer.collect_seq(records),
        }
    }
}

/// Build the canonical payload for `message` as seen from `account`.
#[must_use]
pub fn canonical_payload(message: &Message<'_>, account: &AccountSnapshot) -> CanonicalRecord {
    match message.body() {
        MessageBody::NewOrder(order) => CanonicalRecord::new()
            .text("id", account.order_id.as_str())
            .signed("ordertype", order.order_type.code())
            .signed("price", order.price.value())
            .signed("quantity", order.quantity.value())
            .signed("side", order.side.code())
            .text("symbol", order.symbol.as_str())
            .signed("timeinforce", order.time_in_force.code()),

        MessageBody::CancelOrder(cancel) => CanonicalRecord::new()
            .text("refid", cancel.order_id.as_str())
            .text("sender", account.address.as_str())
            .text("symbol", cancel.symbol.as_str()),

        MessageBody::Freeze(token) | MessageBody::Unfreeze(token) => CanonicalRecord::new()
            .signed("amount", token.amount.value())
            .text("from", account.address.as_str())
            .text("symbol", token.symbol.as_str()),

        MessageBody::Transfer(transfer) => {
            let leg = |address: &str| {
                CanonicalRecord::new().text("address", address).list(
                    "coins",
                    vec![
                        CanonicalRecord::new()
                            .signed("amount", transfer.amount.value())
                            .text("denom", transfer.symbol.as_str()),
                    ],
                )
            };
            CanonicalRecord::new()
                .list("inputs", vec![leg(&account.address)])
                .list("outputs", vec![leg(&transfer.to_address)])
        }

        MessageBody::Vote(vote) => CanonicalRecord::new()
            .signed("proposal_id", vote.proposal_id)
            .text("voter", account.address.as_str())
            .unsigned("option", vote.option.unsigned_code()),
    }
}
