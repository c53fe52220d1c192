//! Integration test: message → signed transaction → decoded back
//!
//! Exercises the full pipeline with a real secp256k1 signer and checks the
//! result from the outside, the way a node would see it.

use dexwire_assembler::{
    LocalSigner, TransactionAssembler, assemble_envelope, build_payload, encode, frame_message,
    sign_payload,
};
use dexwire_codec::schema::{CancelOrderMsg, NewOrderMsg, SendMsg, VoteMsg};
use dexwire_codec::{canonical_payload, decode_transaction, decode_varint};
use dexwire_types::*;
use k256::ecdsa::{Signature, SigningKey, signature::Verifier};
use prost::Message as _;

const ACCOUNT: &str = "ba36f0fad74d8f41045463e4774f328f4af779e5";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn local_signer(sequence: u64) -> LocalSigner {
    LocalSigner::new(&[0x42; 32], ACCOUNT, 1_234, sequence).unwrap()
}

fn random_signer() -> LocalSigner {
    let key = SigningKey::random(&mut rand::thread_rng());
    LocalSigner::from_signing_key(key, ACCOUNT, 9, 0).unwrap()
}

fn limit_buy(signer: &LocalSigner) -> Message<'_> {
    Message::new_order(
        "BNB_USDT",
        OrderType::Limit,
        OrderSide::Buy,
        MinorUnits(100_000_000),
        MinorUnits(100_000_000),
        TimeInForce::GoodTillExpire,
        signer,
    )
}

fn one_of_each(signer: &LocalSigner) -> Vec<Message<'_>> {
    vec![
        limit_buy(signer),
        Message::cancel_order("BNB_USDT", "123-45", signer),
        Message::freeze("BNB", MinorUnits(5_000_000_000), signer),
        Message::unfreeze("BNB", MinorUnits(5_000_000_000), signer),
        Message::transfer("BNB", MinorUnits(1), "22".repeat(20), signer).unwrap(),
        Message::vote(7, VoteOption::No, signer),
    ]
}

#[test]
fn final_varint_covers_the_rest() {
    init_tracing();
    let signer = local_signer(0);
    for msg in one_of_each(&signer) {
        let tx = encode(&msg).unwrap();
        let mut cursor = tx.as_bytes();
        let declared = decode_varint(&mut cursor).unwrap();
        assert_eq!(declared as usize, cursor.len(), "{}", msg.kind());
        assert_eq!(&cursor[..4], STD_TX_PREFIX.as_bytes());
    }
}

#[test]
fn encoding_twice_is_byte_identical() {
    let signer = local_signer(5);
    for msg in one_of_each(&signer) {
        assert_eq!(encode(&msg).unwrap(), encode(&msg).unwrap(), "{}", msg.kind());
    }
}

#[test]
fn envelope_decodes_with_memo_and_source() {
    init_tracing();
    let signer = local_signer(11);
    let config = EncoderConfig {
        memo: "rebalance".to_string(),
        source: Source::Hidden,
    };
    let assembler = TransactionAssembler::new(config).unwrap();

    for msg in one_of_each(&signer) {
        let tx = assembler.encode(&msg).unwrap();
        let decoded = decode_transaction(tx.as_bytes()).unwrap();

        assert_eq!(decoded.kinds(), vec![msg.kind()]);
        assert_eq!(decoded.signatures.len(), 1);
        assert_eq!(decoded.memo, "rebalance");
        assert_eq!(decoded.source, Source::Hidden);
        assert!(decoded.data.is_empty());

        let record = &decoded.signatures[0];
        assert_eq!(record.public_key, signer.public_key());
        assert_eq!(record.account_number, 1_234);
        assert_eq!(record.sequence, 11);
        assert_eq!(tx.sequence(), 11);
    }
}

#[test]
fn signature_verifies_over_canonical_payload() {
    let signer = random_signer();
    for msg in one_of_each(&signer) {
        let payload = build_payload(frame_message(&msg).unwrap()).unwrap();
        let tx = encode(&msg).unwrap();
        let decoded = decode_transaction(tx.as_bytes()).unwrap();

        let signature = Signature::from_slice(&decoded.signatures[0].signature).unwrap();
        assert!(
            signer.verifying_key().verify(payload.bytes(), &signature).is_ok(),
            "{} signature does not verify",
            msg.kind()
        );
    }
}

#[test]
fn staged_encode_signs_the_framed_message_only() {
    init_tracing();
    let signer_a = local_signer(3);
    let signer_b = random_signer();
    let freeze = Message::freeze("BNB", MinorUnits(10), &signer_a);
    let vote = Message::vote(7, VoteOption::Yes, &signer_b);

    let framed = frame_message(&freeze).unwrap();
    let payload = build_payload(framed).unwrap();
    let expected = canonical_payload(&freeze, payload.framed().account())
        .to_sign_bytes()
        .unwrap();
    assert_eq!(payload.bytes(), expected);
    assert_eq!(payload.framed().kind(), MessageKind::Freeze);
    assert_ne!(vote.kind(), payload.framed().kind());

    let signature = sign_payload(payload).unwrap();
    let parsed = Signature::from_slice(signature.bytes()).unwrap();
    assert!(signer_a.verifying_key().verify(&expected, &parsed).is_ok());
    assert!(signer_b.verifying_key().verify(&expected, &parsed).is_err());

    let tx = assemble_envelope(signature, &EncoderConfig::default()).unwrap();
    let decoded = decode_transaction(tx.as_bytes()).unwrap();
    assert_eq!(decoded.kinds(), vec![MessageKind::Freeze]);
    assert_eq!(decoded.signatures[0].public_key, signer_a.public_key());
    assert_eq!(decoded.signatures[0].sequence, 3);
    assert_eq!(tx, encode(&freeze).unwrap());
}

#[test]
fn new_order_scenario() {
    let signer = local_signer(0);
    let msg = limit_buy(&signer);

    let framed = frame_message(&msg).unwrap();
    let mut cursor = framed.bytes();
    decode_varint(&mut cursor).unwrap();
    assert_eq!(&cursor[..4], &[0xCE, 0x6D, 0xC0, 0x43]);

    let payload = build_payload(framed).unwrap();
    let expected = format!(
        r#"{{"id":"{}-1","ordertype":2,"price":100000000,"quantity":100000000,"side":1,"symbol":"BNB_USDT","timeinforce":1}}"#,
        ACCOUNT.to_uppercase()
    );
    assert_eq!(std::str::from_utf8(payload.bytes()).unwrap(), expected);

    let decoded = decode_transaction(encode(&msg).unwrap().as_bytes()).unwrap();
    let body = NewOrderMsg::decode(decoded.messages[0].body.as_slice()).unwrap();
    assert_eq!(body.sender, hex::decode(ACCOUNT).unwrap());
    assert_eq!(body.id, format!("{}-1", ACCOUNT.to_uppercase()));
    assert_eq!(body.price, 100_000_000);
    assert_eq!(body.timeinforce, 1);
}

#[test]
fn cancel_order_scenario() {
    let signer = local_signer(0);
    let msg = Message::cancel_order("BNB_USDT", "123-45", &signer);

    let payload = build_payload(frame_message(&msg).unwrap()).unwrap();
    assert_eq!(
        std::str::from_utf8(payload.bytes()).unwrap(),
        format!(r#"{{"refid":"123-45","sender":"{ACCOUNT}","symbol":"BNB_USDT"}}"#)
    );

    let decoded = decode_transaction(encode(&msg).unwrap().as_bytes()).unwrap();
    let body = CancelOrderMsg::decode(decoded.messages[0].body.as_slice()).unwrap();
    assert_eq!(body.refid, "123-45");
    assert_eq!(body.sender, hex::decode(ACCOUNT).unwrap());
}

#[test]
fn vote_is_tagged_vote_not_cancel() {
    let signer = local_signer(0);
    let msg = Message::vote(7, VoteOption::No, &signer);

    let framed = frame_message(&msg).unwrap();
    let mut cursor = framed.bytes();
    decode_varint(&mut cursor).unwrap();
    assert_eq!(&cursor[..4], VOTE_PREFIX.as_bytes());
    assert_ne!(&cursor[..4], CANCEL_ORDER_PREFIX.as_bytes());

    let decoded = decode_transaction(encode(&msg).unwrap().as_bytes()).unwrap();
    assert_eq!(decoded.kinds(), vec![MessageKind::Vote]);
    let body = VoteMsg::decode(decoded.messages[0].body.as_slice()).unwrap();
    assert_eq!(body.proposal_id, 7);
    assert_eq!(body.option, 3);
}

#[test]
fn transfer_scenario() {
    let signer = local_signer(0);
    let to = "22".repeat(20);
    let msg = Message::transfer("BNB", MinorUnits(42), to.clone(), &signer).unwrap();

    let decoded = decode_transaction(encode(&msg).unwrap().as_bytes()).unwrap();
    let body = SendMsg::decode(decoded.messages[0].body.as_slice()).unwrap();
    assert_eq!(body.inputs[0].address, hex::decode(ACCOUNT).unwrap());
    assert_eq!(body.outputs[0].address, hex::decode(&to).unwrap());
    assert_eq!(body.outputs[0].coins[0].amount, 42);
}

#[test]
fn transfer_without_destination_fails_at_construction() {
    let signer = local_signer(0);
    let err = Message::transfer("BNB", MinorUnits(1), "  ", &signer).unwrap_err();
    assert!(matches!(
        err,
        DexwireError::MissingField {
            kind: MessageKind::Transfer,
            field: "to_address"
        }
    ));
    assert_eq!(err.class(), ErrorClass::Construction);
}

#[test]
fn advancing_sequence_changes_the_next_transaction() {
    let mut signer = local_signer(0);
    let first = encode(&limit_buy(&signer)).unwrap();
    signer.advance();
    let second = encode(&limit_buy(&signer)).unwrap();

    assert_eq!(first.sequence(), 0);
    assert_eq!(second.sequence(), 1);
    assert_ne!(first.hash(), second.hash());

    let body = NewOrderMsg::decode(
        decode_transaction(second.as_bytes()).unwrap().messages[0]
            .body
            .as_slice(),
    )
    .unwrap();
    assert_eq!(body.id, format!("{}-2", ACCOUNT.to_uppercase()));
}

#[test]
fn signer_failure_aborts_without_output() {
    let signer = StaticSigner::failing("device locked");
    let msg = Message::freeze("BNB", MinorUnits(1), &signer);
    let err = encode(&msg).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Signing);
}

#[test]
fn decimal_amounts_enter_through_minor_units() {
    let signer = local_signer(0);
    let amount = MinorUnits::from_decimal("0.5".parse().unwrap()).unwrap();
    assert_eq!(amount, MinorUnits(50_000_000));
    assert!(MinorUnits::from_decimal("0.000000001".parse().unwrap()).is_err());

    let tx = encode(&Message::freeze("BNB", amount, &signer)).unwrap();
    assert_eq!(tx.kind(), MessageKind::Freeze);
}
