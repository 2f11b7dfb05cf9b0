mod common;

use common::*;
use ipay88_opsg::domain::amount::PaymentAmount;
use ipay88_opsg::domain::signature::compute_signature;
use ipay88_opsg::{Message, MessageKind};
use rust_decimal_macros::dec;

fn payment_request() -> Message {
    Message::from_transport_mapping(
        MessageKind::PaymentRequest,
        &mapping(&[
            ("MerchantCode", "M001"),
            ("RefNo", "REF1"),
            ("Amount", "100.00"),
            ("Currency", "MYR"),
            ("SignatureType", "SHA256"),
        ]),
    )
}

#[test]
fn test_payment_request_signature() {
    let mut message = payment_request();
    let expected = sha256_hex("secret123M001REF110000MYR");

    assert_eq!(message.compute_signature("secret123"), Some(expected.clone()));
    assert_eq!(message.sign("secret123"), Some(expected.as_str()));
    assert_eq!(message.to_transport_mapping().get("Signature"), Some(expected.as_str()));
}

#[test]
fn test_signature_is_deterministic() {
    let message = payment_request();
    assert_eq!(
        compute_signature(&message, SECRET),
        compute_signature(&message, SECRET)
    );
}

#[test]
fn test_amount_uses_hashable_representation() {
    let mut message = payment_request();
    message
        .header_mut()
        .set_payment_amount(Some(PaymentAmount::from(dec!(123456.789))));
    assert_eq!(
        message.compute_signature("k"),
        Some(sha256_hex("kM001REF112345679MYR"))
    );
}

#[test]
fn test_every_recipe_field_invalidates_the_request_signature() {
    let mutations: Vec<Box<dyn Fn(&mut Message)>> = vec![
        Box::new(|m: &mut Message| m.header_mut().set_seller_identifier(Some("M002".to_string()))),
        Box::new(|m: &mut Message| m.header_mut().set_payment_reference(Some("REF2".to_string()))),
        Box::new(|m: &mut Message| m.header_mut().set_payment_amount(Some(dec!(1).into()))),
        Box::new(|m: &mut Message| {
            if let Message::PaymentRequest(request) = m {
                request.set_payment_currency(Some("USD".to_string()));
            }
        }),
    ];

    for mutate in mutations {
        let mut message = payment_request();
        let before = message.sign(SECRET).map(str::to_string);
        mutate(&mut message);
        assert_eq!(message.signature(), None);
        let after = message.sign(SECRET).map(str::to_string);
        assert!(after.is_some());
        assert_ne!(before, after);
    }
}

#[test]
fn test_response_signature_covers_method_and_status() {
    let mut message = Message::from_transport_mapping(
        MessageKind::PaymentResponse,
        &payment_response_parameters(),
    );
    let signed = message.sign(SECRET).map(str::to_string);
    assert_eq!(
        signed,
        Some(sha256_hex("secret123M0012REF1100000MYR1"))
    );

    if let Message::PaymentResponse(response) = &mut message {
        response.set_payment_status(Some("0".to_string()));
    }
    assert_eq!(message.signature(), None);
    assert_ne!(message.sign(SECRET).map(str::to_string), signed);
}

#[test]
fn test_unsupported_signature_type_yields_no_signature() {
    let mut message = payment_request();
    if let Message::PaymentRequest(request) = &mut message {
        request.set_signature_type(Some("SHA1".to_string()));
    }
    assert_eq!(message.sign(SECRET), None);
}

#[test]
fn test_status_messages_are_never_signed() {
    let mut message = Message::from_transport_mapping(
        MessageKind::PaymentStatusRequest,
        &mapping(&[("MerchantCode", "M001"), ("RefNo", "REF1"), ("Amount", "1.00")]),
    );
    assert_eq!(message.sign(SECRET), None);
    assert!(!message.to_transport_mapping().contains_key("Signature"));
}
