//! The message model: one transaction intent per [`Message`].
//!
//! A message is built through exactly one smart constructor per kind and
//! its kind can never change afterwards; the body is private and has no
//! setters. Builders do no semantic validation (price ranges, balances) and
//! never read the signer's counters; sender, order id and sequence are
//! taken from the signer when the message is encoded.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    DexwireError, MessageKind, MinorUnits, OrderSide, OrderType, Result, SignerContext,
    TimeInForce, VoteOption,
};

/// Place an order on the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub symbol: String,
    pub order_type: OrderType,
    pub side: OrderSide,
    pub price: MinorUnits,
    pub quantity: MinorUnits,
    pub time_in_force: TimeInForce,
}

/// Cancel a resting order by its reference id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrder {
    pub symbol: String,
    pub order_id: String,
}

/// Amount of one token, shared by freeze and unfreeze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
    pub symbol: String,
    pub amount: MinorUnits,
}

/// Send one token from the signer's account to `to_address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub symbol: String,
    pub amount: MinorUnits,
    pub to_address: String,
}

/// Cast a ballot on a governance proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub proposal_id: i64,
    pub option: VoteOption,
}

/// Kind-specific payload of a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageBody {
    NewOrder(NewOrder),
    CancelOrder(CancelOrder),
    Freeze(TokenAmount),
    Unfreeze(TokenAmount),
    Transfer(Transfer),
    Vote(Vote),
}

impl MessageBody {
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::NewOrder(_) => MessageKind::NewOrder,
            Self::CancelOrder(_) => MessageKind::CancelOrder,
            Self::Freeze(_) => MessageKind::Freeze,
            Self::Unfreeze(_) => MessageKind::Unfreeze,
            Self::Transfer(_) => MessageKind::Transfer,
            Self::Vote(_) => MessageKind::Vote,
        }
    }
}

/// One transaction intent bound to the signer that will authorize it.
#[derive(Clone)]
pub struct Message<'a> {
    signer: &'a dyn SignerContext,
    body: MessageBody,
}

impl<'a> Message<'a> {
    #[must_use]
    pub fn new_order(
        symbol: impl Into<String>,
        order_type: OrderType,
        side: OrderSide,
        price: MinorUnits,
        quantity: MinorUnits,
        time_in_force: TimeInForce,
        signer: &'a dyn SignerContext,
    ) -> Self {
        let body = MessageBody::NewOrder(NewOrder {
            symbol: symbol.into(),
            order_type,
            side,
            price,
            quantity,
            time_in_force,
        });
        Self { signer, body }
    }

    #[must_use]
    pub fn cancel_order(
        symbol: impl Into<String>,
        order_id: impl Into<String>,
        signer: &'a dyn SignerContext,
    ) -> Self {
        let body = MessageBody::CancelOrder(CancelOrder {
            symbol: symbol.into(),
            order_id: order_id.into(),
        });
        Self { signer, body }
    }

    #[must_use]
    pub fn freeze(
        symbol: impl Into<String>,
        amount: MinorUnits,
        signer: &'a dyn SignerContext,
    ) -> Self {
        let body = MessageBody::Freeze(TokenAmount {
            symbol: symbol.into(),
            amount,
        });
        Self { signer, body }
    }

    #[must_use]
    pub fn unfreeze(
        symbol: impl Into<String>,
        amount: MinorUnits,
        signer: &'a dyn SignerContext,
    ) -> Self {
        let body = MessageBody::Unfreeze(TokenAmount {
            symbol: symbol.into(),
            amount,
        });
        Self { signer, body }
    }

    /// # Errors
    /// `MissingField` if `to_address` is empty or whitespace.
    pub fn transfer(
        symbol: impl Into<String>,
        amount: MinorUnits,
        to_address: impl Into<String>,
        signer: &'a dyn SignerContext,
    ) -> Result<Self> {
        let to_address = to_address.into();
        if to_address.trim().is_empty() {
            return Err(DexwireError::MissingField {
                kind: MessageKind::Transfer,
                field: "to_address",
            });
        }
        let body = MessageBody::Transfer(Transfer {
            symbol: symbol.into(),
            amount,
            to_address,
        });
        Ok(Self { signer, body })
    }

    #[must_use]
    pub fn vote(proposal_id: i64, option: VoteOption, signer: &'a dyn SignerContext) -> Self {
        let body = MessageBody::Vote(Vote {
            proposal_id,
            option,
        });
        Self { signer, body }
    }

    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.body.kind()
    }

    #[must_use]
    pub const fn body(&self) -> &MessageBody {
        &self.body
    }

    #[must_use]
    pub fn signer(&self) -> &'a dyn SignerContext {
        self.signer
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("signer", &self.signer.address())
            .field("body", &self.body)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticSigner;

    #[test]
    fn builders_fix_the_kind() {
        let signer = StaticSigner::dummy();
        let cases = [
            (
                Message::new_order(
                    "BNB_USDT",
                    OrderType::Limit,
                    OrderSide::Buy,
                    MinorUnits(1),
                    MinorUnits(1),
                    TimeInForce::GoodTillExpire,
                    &signer,
                ),
                MessageKind::NewOrder,
            ),
            (
                Message::cancel_order("BNB_USDT", "1-1", &signer),
                MessageKind::CancelOrder,
            ),
            (Message::freeze("BNB", MinorUnits(1), &signer), MessageKind::Freeze),
            (Message::unfreeze("BNB", MinorUnits(1), &signer), MessageKind::Unfreeze),
            (
                Message::transfer("BNB", MinorUnits(1), "ab", &signer).unwrap(),
                MessageKind::Transfer,
            ),
            (Message::vote(7, VoteOption::No, &signer), MessageKind::Vote),
        ];
        for (msg, kind) in cases {
            assert_eq!(msg.kind(), kind);
            assert_eq!(msg.body().kind(), kind);
        }
    }

    #[test]
    fn vote_is_its_own_kind() {
        let signer = StaticSigner::dummy();
        let vote = Message::vote(7, VoteOption::No, &signer);
        assert_eq!(vote.kind(), MessageKind::Vote);
        assert_ne!(vote.kind(), MessageKind::CancelOrder);
    }

    #[test]
    fn transfer_requires_destination() {
        let signer = StaticSigner::dummy();
        for to in ["", "   "] {
            let err = Message::transfer("BNB", MinorUnits(1), to, &signer).unwrap_err();
            assert!(matches!(
                err,
                DexwireError::MissingField {
                    kind: MessageKind::Transfer,
                    field: "to_address"
                }
            ));
        }
    }

    #[test]
    fn builders_do_not_consult_counters() {
        // Construction must succeed even when the signer could not produce
        // a snapshot; counters are only read at encode time.
        let mut account = crate::AccountSnapshot::dummy();
        account.address = "not-hex".to_string();
        let signer = StaticSigner::new(account);
        let msg = Message::cancel_order("BNB_USDT", "123-45", &signer);
        assert_eq!(msg.kind(), MessageKind::CancelOrder);
        match msg.body() {
            MessageBody::CancelOrder(c) => assert_eq!(c.order_id, "123-45"),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn debug_shows_address_not_signer_internals() {
        let signer = StaticSigner::dummy();
        let msg = Message::vote(1, VoteOption::Yes, &signer);
        let dbg = format!("{msg:?}");
        assert!(dbg.contains(&signer.account.address));
        assert!(dbg.contains("Vote"));
    }
}
