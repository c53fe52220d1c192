//! Body encoder: [`Message`] → protobuf body → framed body.
//!
//! The match over [`MessageBody`] has no catch-all arm, so a new kind does
//! not compile until it has a schema here, a prefix in the registry and a
//! canonical payload.

use dexwire_types::{AccountSnapshot, Message, MessageBody, Result, TokenAmount};
use prost::Message as _;

use crate::frame::frame_prefixed;
use crate::schema::{
    CancelOrderMsg, NewOrderMsg, SendLeg, SendMsg, Token, TokenFreezeMsg, VoteMsg,
};

/// Encode the kind-specific protobuf body, without prefix or length.
///
/// Sender, order id and voter come from `account`; a transfer destination
/// is decoded through the message's signer.
///
/// # Errors
/// `InvalidAddress` if the transfer destination cannot be decoded.
pub fn encode_body(message: &Message<'_>, account: &AccountSnapshot) -> Result<Vec<u8>> {
    let bytes = match message.body() {
        MessageBody::NewOrder(order) => NewOrderMsg {
            sender: account.address_bytes.clone(),
            id: account.order_id.clone(),
            symbol: order.symbol.clone(),
            ordertype: order.order_type.code(),
            side: order.side.code(),
            price: order.price.value(),
            quantity: order.quantity.value(),
            timeinforce: order.time_in_force.code(),
        }
        .encode_to_vec(),

        MessageBody::CancelOrder(cancel) => CancelOrderMsg {
            sender: account.address_bytes.clone(),
            symbol: cancel.symbol.clone(),
            refid: cancel.order_id.clone(),
        }
        .encode_to_vec(),

        MessageBody::Freeze(token) | MessageBody::Unfreeze(token) => {
            token_freeze(account, token).encode_to_vec()
        }

        MessageBody::Transfer(transfer) => {
            let destination = message.signer().decode_address(&transfer.to_address)?;
            let coins = vec![Token {
                denom: transfer.symbol.clone(),
                amount: transfer.amount.value(),
            }];
            SendMsg {
                inputs: vec![SendLeg {
                    address: account.address_bytes.clone(),
                    coins: coins.clone(),
                }],
                outputs: vec![SendLeg {
                    address: destination,
                    coins,
                }],
            }
            .encode_to_vec()
        }

        MessageBody::Vote(vote) => VoteMsg {
            proposal_id: vote.proposal_id,
            voter: account.address_bytes.clone(),
            option: vote.option.code(),
        }
        .encode_to_vec(),
    };
    Ok(bytes)
}

/// `varint(4 + len(body)) ‖ kind prefix ‖ body`.
pub fn frame_body(message: &Message<'_>, account: &AccountSnapshot) -> Result<Vec<u8>> {
    let body = encode_body(message, account)?;
    Ok(frame_prefixed(message.kind().prefix(), &body))
}

fn token_freeze(account: &AccountSnapshot, token: &TokenAmount) -> TokenFreezeMsg {
    TokenFreezeMsg {
        from: account.address_bytes.clone(),
        symbol: token.symbol.clone(),
        amount: token.amount.value(),
    }
}
