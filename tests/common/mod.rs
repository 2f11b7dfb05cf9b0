#![allow(dead_code)]

use ipay88_opsg::domain::mapping::TransportMapping;
use ipay88_opsg::{GatewayConfig, Message, MessageKind};
use sha2::{Digest, Sha256};

pub const MERCHANT_CODE: &str = "M001";
pub const SECRET: &str = "secret123";

pub fn config() -> GatewayConfig {
    GatewayConfig::new(MERCHANT_CODE, SECRET)
}

pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

pub fn mapping(pairs: &[(&str, &str)]) -> TransportMapping {
    pairs.iter().copied().collect()
}

/// A complete payment request, unsigned.
pub fn payment_request_parameters() -> TransportMapping {
    mapping(&[
        ("MerchantCode", MERCHANT_CODE),
        ("RefNo", "REF1"),
        ("Amount", "100.00"),
        ("Currency", "MYR"),
        ("PaymentId", "2"),
        ("ProdDesc", "Photo print"),
        ("UserName", "Jane Doe"),
        ("UserEmail", "jane@example.com"),
        ("UserContact", "0126500100"),
        ("Lang", "UTF-8"),
        ("SignatureType", "SHA256"),
        ("ResponseURL", "https://shop.example.com/return"),
        ("BackendURL", "https://shop.example.com/notify"),
    ])
}

/// A successful card payment response, unsigned.
pub fn payment_response_parameters() -> TransportMapping {
    mapping(&[
        ("MerchantCode", MERCHANT_CODE),
        ("PaymentId", "2"),
        ("RefNo", "REF1"),
        ("Amount", "1,000.00"),
        ("Currency", "MYR"),
        ("Remark", ""),
        ("TransId", "T0012345600"),
        ("AuthCode", "123456"),
        ("Status", "1"),
        ("ErrDesc", ""),
        ("CCName", "JANE DOE"),
        ("CCNo", "123456xxxxxx7890"),
        ("S_bankname", "Bank"),
        ("S_country", "MY"),
    ])
}

/// Payment response parameters carrying a valid signature.
pub fn signed_payment_response_parameters(kind: MessageKind) -> TransportMapping {
    let mut message = Message::from_transport_mapping(kind, &payment_response_parameters());
    message.sign(SECRET);
    message.to_transport_mapping()
}
