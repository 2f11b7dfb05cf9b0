//! Static lookup tables of the values the gateway accepts or returns.
//!
//! Records are `'static` and immutable. Typed accessors fail with
//! [`GatewayError::UnknownCatalogEntry`] when a key is absent; the generic
//! [`lookup`], [`list_all`] and [`filter_by`] functions expose the same data
//! keyed by wire string.

use crate::error::{GatewayError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    Malaysia = 1,
    Multicurrency = 2,
}

impl Area {
    pub fn label(self) -> &'static str {
        match self {
            Self::Malaysia => "Malaysia",
            Self::Multicurrency => "Others",
        }
    }

    pub fn all() -> &'static [Area] {
        &[Area::Malaysia, Area::Multicurrency]
    }
}

#[derive(Debug, PartialEq)]
pub struct Currency {
    pub code: &'static str,
    pub label: &'static str,
    /// Amount to use when testing payments in this currency.
    pub amount_test_value: Decimal,
    pub areas: &'static [Area],
}

#[derive(Debug, PartialEq)]
pub struct PaymentMethod {
    pub id: u16,
    pub label: &'static str,
    pub area: Area,
    pub currency: &'static str,
    /// Delayed methods first report "6" (pending) to the return URL and "1"
    /// to the notify URL once the customer has paid.
    pub delayed: bool,
    pub delay_secs: Option<u64>,
}

#[derive(Debug, PartialEq)]
pub struct CharacterEncoding {
    pub id: &'static str,
    pub label: &'static str,
    /// Identifier expected by the gateway when it differs from `id`.
    pub gateway_id: Option<&'static str>,
    pub language: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Language {
    pub tag: &'static str,
    pub label: &'static str,
    pub character_encoding: &'static str,
    pub character_encodings: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct SignatureType {
    pub id: &'static str,
    pub label: &'static str,
}

/// Values of the `Status` field of payment responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Failed = 0,
    Succeeded = 1,
    Delayed = 6,
}

impl PaymentStatus {
    pub fn code(self) -> &'static str {
        match self {
            Self::Failed => "0",
            Self::Succeeded => "1",
            Self::Delayed => "6",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Status {
    pub status: PaymentStatus,
    pub label: &'static str,
    pub description: &'static str,
}

/// Outcome a payment status message stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    Succeeded,
    Failed,
    /// The status request itself was rejected.
    Errored,
}

pub const STATUS_MESSAGE_SUCCEEDED: &str = "00";
pub const STATUS_MESSAGE_FAILED: &str = "Payment fail";
pub const STATUS_MESSAGE_INVALID_AMOUNT: &str = "Incorrect amount";
pub const STATUS_MESSAGE_INVALID_PARAMETERS: &str = "Invalid parameters";
pub const STATUS_MESSAGE_INVALID_REFERENCE: &str = "Record not found";
pub const STATUS_MESSAGE_GATEWAY_CANCELED: &str = "M88Admin";
pub const STATUS_MESSAGE_EXCEEDED_LIMIT: &str = "Limited by per day maximum number of requery";

#[derive(Debug, PartialEq)]
pub struct StatusMessage {
    pub message: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub outcome: StatusOutcome,
    /// Wire field the message points at, if any.
    pub parameter: Option<&'static str>,
}

/// Values of the `ErrDesc` field of payment responses.
#[derive(Debug, PartialEq)]
pub struct ErrorDescription {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub parameters: &'static [&'static str],
}

static CURRENCIES: &[Currency] = &[
    Currency {
        code: "AUD",
        label: "Australian Dollar",
        amount_test_value: dec!(1),
        areas: &[Area::Multicurrency],
    },
    Currency {
        code: "CAD",
        label: "Canadian Dollar",
        amount_test_value: dec!(1),
        areas: &[Area::Multicurrency],
    },
    Currency {
        code: "EUR",
        label: "Euro",
        amount_test_value: dec!(1),
        areas: &[Area::Multicurrency],
    },
    Currency {
        code: "GBP",
        label: "Pound Sterling",
        amount_test_value: dec!(1),
        areas: &[Area::Multicurrency],
    },
    Currency {
        code: "HKD",
        label: "Hong Kong Dollar",
        amount_test_value: dec!(2.5),
        areas: &[Area::Multicurrency],
    },
    Currency {
        code: "MYR",
        label: "Malaysian Ringgit",
        amount_test_value: dec!(1),
        areas: &[Area::Malaysia, Area::Multicurrency],
    },
    Currency {
        code: "SGD",
        label: "Singapore Dollar",
        amount_test_value: dec!(1),
        areas: &[Area::Multicurrency],
    },
    Currency {
        code: "THB",
        label: "Thailand Baht",
        amount_test_value: dec!(15),
        areas: &[Area::Multicurrency],
    },
    Currency {
        code: "USD",
        label: "US Dollar",
        amount_test_value: dec!(1),
        areas: &[Area::Multicurrency],
    },
];

const fn method(id: u16, label: &'static str, area: Area, currency: &'static str) -> PaymentMethod {
    PaymentMethod {
        id,
        label,
        area,
        currency,
        delayed: false,
        delay_secs: None,
    }
}

static PAYMENT_METHODS: &[PaymentMethod] = &[
    method(2, "Credit Card", Area::Malaysia, "MYR"),
    method(6, "Maybank2U", Area::Malaysia, "MYR"),
    method(8, "Alliance Online", Area::Malaysia, "MYR"),
    method(10, "AmOnline", Area::Malaysia, "MYR"),
    method(14, "RHB Online", Area::Malaysia, "MYR"),
    method(15, "Hong Leong Online", Area::Malaysia, "MYR"),
    method(20, "CIMB Click", Area::Malaysia, "MYR"),
    method(22, "Web Cash", Area::Malaysia, "MYR"),
    method(25, "Credit Card", Area::Multicurrency, "USD"),
    method(31, "Public Bank Online", Area::Malaysia, "MYR"),
    method(35, "Credit Card", Area::Multicurrency, "GBP"),
    method(36, "Credit Card", Area::Multicurrency, "THB"),
    method(37, "Credit Card", Area::Multicurrency, "CAD"),
    method(38, "Credit Card", Area::Multicurrency, "SGD"),
    method(39, "Credit Card", Area::Multicurrency, "AUD"),
    method(40, "Credit Card", Area::Multicurrency, "MYR"),
    method(41, "Credit Card", Area::Multicurrency, "EUR"),
    method(42, "Credit Card", Area::Multicurrency, "HKD"),
    method(48, "PayPal", Area::Malaysia, "MYR"),
    method(55, "Credit Card Pre-Auth", Area::Malaysia, "MYR"),
    method(102, "Bank Rakyat Internet Banking", Area::Malaysia, "MYR"),
    method(103, "Affin Online", Area::Malaysia, "MYR"),
    PaymentMethod {
        id: 122,
        label: "Pay4Me",
        area: Area::Malaysia,
        currency: "MYR",
        delayed: true,
        delay_secs: None,
    },
    method(124, "BSN Online", Area::Malaysia, "MYR"),
    method(134, "Bank Islam", Area::Malaysia, "MYR"),
    method(152, "UOB", Area::Malaysia, "MYR"),
    method(163, "Hong Leong PEx+", Area::Malaysia, "MYR"),
    method(166, "Bank Muamalat", Area::Malaysia, "MYR"),
    method(167, "OCBC", Area::Malaysia, "MYR"),
    method(168, "Standard Chartered Bank", Area::Malaysia, "MYR"),
    PaymentMethod {
        id: 173,
        label: "CIMB Virtual Account",
        area: Area::Malaysia,
        currency: "MYR",
        delayed: true,
        delay_secs: Some(7 * 24 * 3600),
    },
    method(198, "HSBC Online Banking", Area::Malaysia, "MYR"),
    method(199, "Kuwait Finance House", Area::Malaysia, "MYR"),
    method(210, "Boost Wallet", Area::Malaysia, "MYR"),
    method(243, "VCash", Area::Malaysia, "MYR"),
];

static CHARACTER_ENCODINGS: &[CharacterEncoding] = &[
    CharacterEncoding {
        id: "BIG5",
        label: "BIG5",
        gateway_id: None,
        language: "zh-hant",
    },
    CharacterEncoding {
        id: "GB2312",
        label: "GB2312",
        gateway_id: None,
        language: "zh-hans",
    },
    CharacterEncoding {
        id: "GB18030",
        label: "GB18030",
        // Misspelled by the gateway.
        gateway_id: Some("GD18030"),
        language: "zh-hans",
    },
    CharacterEncoding {
        id: "ISO-8859-1",
        label: "ISO-8859-1",
        gateway_id: None,
        language: "en",
    },
    CharacterEncoding {
        id: "UTF-8",
        label: "UTF-8",
        gateway_id: None,
        language: "en",
    },
];

static LANGUAGES: &[Language] = &[
    Language {
        tag: "en",
        label: "English",
        character_encoding: "UTF-8",
        character_encodings: &["ISO-8859-1", "UTF-8"],
    },
    Language {
        tag: "zh-hans",
        label: "Simplified Chinese",
        character_encoding: "GB18030",
        character_encodings: &["GB2312", "GB18030"],
    },
    Language {
        tag: "zh-hant",
        label: "Traditional Chinese",
        character_encoding: "BIG5",
        character_encodings: &["BIG5"],
    },
];

static SIGNATURE_TYPES: &[SignatureType] = &[SignatureType {
    id: "SHA256",
    label: "SHA256",
}];

static STATUSES: &[Status] = &[
    Status {
        status: PaymentStatus::Delayed,
        label: "Delayed payment",
        description: "The payment is delayed.",
    },
    Status {
        status: PaymentStatus::Failed,
        label: "Failed payment",
        description: "The payment failed.",
    },
    Status {
        status: PaymentStatus::Succeeded,
        label: "Succeeded payment",
        description: "The payment succeeded.",
    },
];

static STATUS_MESSAGES: &[StatusMessage] = &[
    StatusMessage {
        message: STATUS_MESSAGE_FAILED,
        label: "Failed payment",
        description: "The payment has failed.",
        outcome: StatusOutcome::Failed,
        parameter: None,
    },
    StatusMessage {
        message: STATUS_MESSAGE_INVALID_AMOUNT,
        label: "Invalid payment amount",
        description: "The payment amount is invalid.",
        outcome: StatusOutcome::Errored,
        parameter: Some("Amount"),
    },
    StatusMessage {
        message: STATUS_MESSAGE_INVALID_PARAMETERS,
        label: "Invalid payment parameters",
        description: "One or more payment parameters are invalid.",
        outcome: StatusOutcome::Errored,
        parameter: None,
    },
    StatusMessage {
        message: STATUS_MESSAGE_INVALID_REFERENCE,
        label: "Invalid payment reference",
        description: "The payment reference is invalid.",
        outcome: StatusOutcome::Errored,
        parameter: Some("RefNo"),
    },
    StatusMessage {
        message: STATUS_MESSAGE_GATEWAY_CANCELED,
        label: "Canceled payment by the gateway",
        description: "The payment has been canceled by the gateway administrator.",
        outcome: StatusOutcome::Failed,
        parameter: None,
    },
    StatusMessage {
        message: STATUS_MESSAGE_EXCEEDED_LIMIT,
        label: "Exceeded limit",
        description: "The number of payment status requests exceeds the allowed limit per day.",
        outcome: StatusOutcome::Errored,
        parameter: None,
    },
    StatusMessage {
        message: STATUS_MESSAGE_SUCCEEDED,
        label: "Succeeded payment",
        description: "The payment has succeeded.",
        outcome: StatusOutcome::Succeeded,
        parameter: None,
    },
];

static ERRORS: &[ErrorDescription] = &[
    ErrorDescription {
        key: "Customer Cancel Transaction",
        label: "Canceled payment",
        description: "The payment has been canceled by the customer.",
        parameters: &[],
    },
    ErrorDescription {
        key: "Duplicate reference number",
        label: "Invalid payment reference",
        description: "The payment reference has already been processed within another payment request.",
        parameters: &["RefNo"],
    },
    ErrorDescription {
        key: "Fail(Bank Declined Transaction)",
        label: "Declined payment",
        description: "The payment has been declined by the customer's bank.",
        parameters: &[],
    },
    ErrorDescription {
        key: "Invalid merchant",
        label: "Invalid seller identifier",
        description: "The seller identifier is invalid.",
        parameters: &["MerchantCode"],
    },
    ErrorDescription {
        key: "Invalid merchant code",
        label: "Invalid seller identifier",
        description: "The seller identifier is invalid.",
        parameters: &["MerchantCode"],
    },
    ErrorDescription {
        key: "Invalid parameters",
        label: "Invalid parameters",
        description: "One or more parameters are invalid.",
        parameters: &[],
    },
    ErrorDescription {
        key: "Overlimit per transaction",
        label: "Exceeded amount limit",
        description: "The amount exceeds the allowed limit.",
        parameters: &["Amount"],
    },
    ErrorDescription {
        key: "Payment not allowed",
        label: "Unallowed payment method",
        description: "The payment method is not allowed by the gateway.",
        parameters: &["PaymentId"],
    },
    ErrorDescription {
        key: "Permission not allow",
        label: "Invalid URLs",
        description: "The notify, the return and/or the request URLs are not allowed by the gateway.",
        parameters: &["BackendURL", "ResponseURL"],
    },
    ErrorDescription {
        key: "Signature not match",
        label: "Invalid signature",
        description: "The signature is invalid.",
        parameters: &["Signature"],
    },
    ErrorDescription {
        key: "Status not approved",
        label: "Unallowed seller",
        description: "The seller is not allowed by the gateway.",
        parameters: &["MerchantCode"],
    },
    ErrorDescription {
        key: "Transaction Timeout",
        label: "Expired payment",
        description: "The payment allowed time has expired.",
        parameters: &[],
    },
];

pub fn currencies() -> &'static [Currency] {
    CURRENCIES
}

pub fn currency(code: &str) -> Result<&'static Currency> {
    CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| GatewayError::unknown("currency", code))
}

pub fn currencies_by_area(area: Area) -> Vec<&'static Currency> {
    CURRENCIES.iter().filter(|c| c.areas.contains(&area)).collect()
}

pub fn areas_by_currency(code: &str) -> Result<Vec<Area>> {
    Ok(currency(code)?.areas.to_vec())
}

pub fn amount_test_value(code: &str) -> Result<Decimal> {
    Ok(currency(code)?.amount_test_value)
}

pub fn payment_method(id: u16) -> Result<&'static PaymentMethod> {
    PAYMENT_METHODS
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| GatewayError::unknown("payment method", id.to_string()))
}

/// Payment methods, optionally restricted to an area and/or a currency.
pub fn payment_methods(area: Option<Area>, currency: Option<&str>) -> Vec<&'static PaymentMethod> {
    PAYMENT_METHODS
        .iter()
        .filter(|m| area.is_none_or(|a| m.area == a))
        .filter(|m| currency.is_none_or(|c| m.currency == c))
        .collect()
}

pub fn character_encodings() -> &'static [CharacterEncoding] {
    CHARACTER_ENCODINGS
}

pub fn character_encoding(id: &str) -> Result<&'static CharacterEncoding> {
    CHARACTER_ENCODINGS
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| GatewayError::unknown("character encoding", id))
}

/// The identifier the gateway expects for a character encoding.
pub fn gateway_character_encoding(id: &str) -> Result<&'static str> {
    let encoding = character_encoding(id)?;
    Ok(encoding.gateway_id.unwrap_or(encoding.id))
}

pub fn character_encoding_language(id: &str) -> Result<&'static str> {
    Ok(character_encoding(id)?.language)
}

pub fn languages() -> &'static [Language] {
    LANGUAGES
}

pub fn language(tag: &str) -> Result<&'static Language> {
    LANGUAGES
        .iter()
        .find(|l| l.tag == tag)
        .ok_or_else(|| GatewayError::unknown("language", tag))
}

/// The default character encoding for a language; the gateway's `Lang` field
/// carries encodings, not language tags.
pub fn language_character_encoding(tag: &str) -> Result<&'static str> {
    Ok(language(tag)?.character_encoding)
}

pub fn signature_types() -> &'static [SignatureType] {
    SIGNATURE_TYPES
}

pub fn signature_type(id: &str) -> Result<&'static SignatureType> {
    SIGNATURE_TYPES
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| GatewayError::unknown("signature type", id))
}

pub fn statuses() -> &'static [Status] {
    STATUSES
}

pub fn status(code: &str) -> Result<&'static Status> {
    STATUSES
        .iter()
        .find(|s| s.status.code() == code)
        .ok_or_else(|| GatewayError::unknown("status", code))
}

pub fn status_messages() -> &'static [StatusMessage] {
    STATUS_MESSAGES
}

pub fn status_message(message: &str) -> Result<&'static StatusMessage> {
    STATUS_MESSAGES
        .iter()
        .find(|s| s.message == message)
        .ok_or_else(|| GatewayError::unknown("status message", message))
}

pub fn errors() -> &'static [ErrorDescription] {
    ERRORS
}

pub fn error_description(key: &str) -> Result<&'static ErrorDescription> {
    ERRORS
        .iter()
        .find(|e| e.key == key)
        .ok_or_else(|| GatewayError::unknown("error", key))
}

/// Catalog tables addressable by wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogCategory {
    Currency,
    PaymentMethod,
    CharacterEncoding,
    Language,
    SignatureType,
    Status,
    StatusMessage,
    Error,
}

impl CatalogCategory {
    pub fn name(self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::PaymentMethod => "payment method",
            Self::CharacterEncoding => "character encoding",
            Self::Language => "language",
            Self::SignatureType => "signature type",
            Self::Status => "status",
            Self::StatusMessage => "status message",
            Self::Error => "error",
        }
    }
}

/// A borrowed catalog record of any category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogRecord {
    Currency(&'static Currency),
    PaymentMethod(&'static PaymentMethod),
    CharacterEncoding(&'static CharacterEncoding),
    Language(&'static Language),
    SignatureType(&'static SignatureType),
    Status(&'static Status),
    StatusMessage(&'static StatusMessage),
    Error(&'static ErrorDescription),
}

impl CatalogRecord {
    /// The wire key of the record.
    pub fn key(&self) -> String {
        match self {
            Self::Currency(c) => c.code.to_string(),
            Self::PaymentMethod(m) => m.id.to_string(),
            Self::CharacterEncoding(e) => e.id.to_string(),
            Self::Language(l) => l.tag.to_string(),
            Self::SignatureType(s) => s.id.to_string(),
            Self::Status(s) => s.status.code().to_string(),
            Self::StatusMessage(s) => s.message.to_string(),
            Self::Error(e) => e.key.to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Currency(c) => c.label,
            Self::PaymentMethod(m) => m.label,
            Self::CharacterEncoding(e) => e.label,
            Self::Language(l) => l.label,
            Self::SignatureType(s) => s.label,
            Self::Status(s) => s.label,
            Self::StatusMessage(s) => s.label,
            Self::Error(e) => e.label,
        }
    }
}

pub fn list_all(category: CatalogCategory) -> Vec<CatalogRecord> {
    match category {
        CatalogCategory::Currency => CURRENCIES.iter().map(CatalogRecord::Currency).collect(),
        CatalogCategory::PaymentMethod => PAYMENT_METHODS
            .iter()
            .map(CatalogRecord::PaymentMethod)
            .collect(),
        CatalogCategory::CharacterEncoding => CHARACTER_ENCODINGS
            .iter()
            .map(CatalogRecord::CharacterEncoding)
            .collect(),
        CatalogCategory::Language => LANGUAGES.iter().map(CatalogRecord::Language).collect(),
        CatalogCategory::SignatureType => SIGNATURE_TYPES
            .iter()
            .map(CatalogRecord::SignatureType)
            .collect(),
        CatalogCategory::Status => STATUSES.iter().map(CatalogRecord::Status).collect(),
        CatalogCategory::StatusMessage => STATUS_MESSAGES
            .iter()
            .map(CatalogRecord::StatusMessage)
            .collect(),
        CatalogCategory::Error => ERRORS.iter().map(CatalogRecord::Error).collect(),
    }
}

pub fn lookup(category: CatalogCategory, key: &str) -> Result<CatalogRecord> {
    list_all(category)
        .into_iter()
        .find(|record| record.key() == key)
        .ok_or_else(|| GatewayError::unknown(category.name(), key))
}

pub fn filter_by<F>(category: CatalogCategory, predicate: F) -> Vec<CatalogRecord>
where
    F: Fn(&CatalogRecord) -> bool,
{
    list_all(category).into_iter().filter(predicate).collect()
}

pub fn contains(category: CatalogCategory, key: &str) -> bool {
    lookup(category, key).is_ok()
}

pub fn keys(category: CatalogCategory) -> Vec<String> {
    list_all(category).iter().map(CatalogRecord::key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_lookup() {
        let myr = currency("MYR").unwrap();
        assert_eq!(myr.label, "Malaysian Ringgit");
        assert_eq!(myr.areas, &[Area::Malaysia, Area::Multicurrency]);

        assert!(matches!(
            currency("IDR"),
            Err(GatewayError::UnknownCatalogEntry { category: "currency", .. })
        ));
    }

    #[test]
    fn test_currencies_by_area() {
        let malaysia = currencies_by_area(Area::Malaysia);
        assert_eq!(malaysia.len(), 1);
        assert_eq!(malaysia[0].code, "MYR");
        assert_eq!(currencies_by_area(Area::Multicurrency).len(), currencies().len());
        assert_eq!(
            areas_by_currency("USD").unwrap(),
            vec![Area::Multicurrency]
        );
    }

    #[test]
    fn test_amount_test_value() {
        assert_eq!(amount_test_value("HKD").unwrap(), dec!(2.5));
        assert_eq!(amount_test_value("THB").unwrap(), dec!(15));
    }

    #[test]
    fn test_payment_methods_filters() {
        let usd = payment_methods(None, Some("USD"));
        assert_eq!(usd.len(), 1);
        assert_eq!(usd[0].id, 25);

        let multicurrency_myr = payment_methods(Some(Area::Multicurrency), Some("MYR"));
        assert_eq!(multicurrency_myr.len(), 1);
        assert_eq!(multicurrency_myr[0].id, 40);

        assert_eq!(payment_methods(None, None).len(), PAYMENT_METHODS.len());
        assert!(payment_method(173).unwrap().delayed);
        assert!(payment_method(1).is_err());
    }

    #[test]
    fn test_character_encoding_mappings() {
        assert_eq!(gateway_character_encoding("GB18030").unwrap(), "GD18030");
        assert_eq!(gateway_character_encoding("UTF-8").unwrap(), "UTF-8");
        assert_eq!(character_encoding_language("BIG5").unwrap(), "zh-hant");
        assert_eq!(language_character_encoding("zh-hans").unwrap(), "GB18030");
        assert!(language_character_encoding("fr").is_err());
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            status_message("00").unwrap().outcome,
            StatusOutcome::Succeeded
        );
        assert_eq!(
            status_message(STATUS_MESSAGE_INVALID_REFERENCE)
                .unwrap()
                .parameter,
            Some("RefNo")
        );
        assert!(status_message("whatever").is_err());
        assert_eq!(status("6").unwrap().status, PaymentStatus::Delayed);
    }

    #[test]
    fn test_generic_lookup() {
        let record = lookup(CatalogCategory::PaymentMethod, "48").unwrap();
        assert_eq!(record.label(), "PayPal");
        assert!(contains(CatalogCategory::SignatureType, "SHA256"));
        assert!(!contains(CatalogCategory::SignatureType, "MD5"));
        assert!(matches!(
            lookup(CatalogCategory::Error, "Unknown error"),
            Err(GatewayError::UnknownCatalogEntry { category: "error", .. })
        ));
        assert_eq!(
            error_description("Signature not match").unwrap().parameters,
            &["Signature"]
        );
    }

    #[test]
    fn test_filter_by() {
        let delayed = filter_by(CatalogCategory::PaymentMethod, |record| {
            matches!(record, CatalogRecord::PaymentMethod(m) if m.delayed)
        });
        let ids: Vec<String> = delayed.iter().map(CatalogRecord::key).collect();
        assert_eq!(ids, vec!["122", "173"]);
        assert_eq!(keys(CatalogCategory::Language), vec!["en", "zh-hans", "zh-hant"]);
    }
}
