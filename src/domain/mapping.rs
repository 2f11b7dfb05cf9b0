use serde::Serialize;

/// Wire field names. Case-sensitive.
pub mod fields {
    pub const MERCHANT_CODE: &str = "MerchantCode";
    pub const REF_NO: &str = "RefNo";
    pub const AMOUNT: &str = "Amount";
    pub const CURRENCY: &str = "Currency";
    pub const PAYMENT_ID: &str = "PaymentId";
    pub const REMARK: &str = "Remark";
    pub const PROD_DESC: &str = "ProdDesc";
    pub const USER_NAME: &str = "UserName";
    pub const USER_EMAIL: &str = "UserEmail";
    pub const USER_CONTACT: &str = "UserContact";
    pub const LANG: &str = "Lang";
    pub const SIGNATURE_TYPE: &str = "SignatureType";
    pub const RESPONSE_URL: &str = "ResponseURL";
    pub const BACKEND_URL: &str = "BackendURL";
    pub const SIGNATURE: &str = "Signature";
    pub const TRANS_ID: &str = "TransId";
    pub const STATUS: &str = "Status";
    pub const ERR_DESC: &str = "ErrDesc";
    pub const AUTH_CODE: &str = "AuthCode";
    pub const CC_NO: &str = "CCNo";
    pub const CC_NAME: &str = "CCName";
    pub const S_BANKNAME: &str = "S_bankname";
    pub const S_COUNTRY: &str = "S_country";
    pub const PAYMENT_STATUS_MESSAGE: &str = "PaymentStatusMessage";

    pub const ALL: &[&str] = &[
        MERCHANT_CODE,
        REF_NO,
        AMOUNT,
        CURRENCY,
        PAYMENT_ID,
        REMARK,
        PROD_DESC,
        USER_NAME,
        USER_EMAIL,
        USER_CONTACT,
        LANG,
        SIGNATURE_TYPE,
        RESPONSE_URL,
        BACKEND_URL,
        SIGNATURE,
        TRANS_ID,
        STATUS,
        ERR_DESC,
        AUTH_CODE,
        CC_NO,
        CC_NAME,
        S_BANKNAME,
        S_COUNTRY,
        PAYMENT_STATUS_MESSAGE,
    ];

    pub fn is_known(name: &str) -> bool {
        ALL.contains(&name)
    }
}

/// Flat, ordered key to string mapping used on the wire.
///
/// Serializes as a sequence of pairs, which is what form encoders expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TransportMapping(Vec<(String, String)>);

impl TransportMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Inserts `key` only when a value is present.
    pub fn insert_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Owned copy of a value, as message constructors need.
    pub fn get_owned(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Appends the inherited entries whose keys are not declared here yet.
    pub fn merge_inherited(&mut self, inherited: TransportMapping) {
        for (key, value) in inherited.0 {
            if !self.contains_key(&key) {
                self.0.push((key, value));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Encodes the mapping as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        self.iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Decodes a form body whose keys are all known wire fields.
    pub fn from_form_body(body: &str) -> Option<Self> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }
        let mut mapping = Self::new();
        for pair in body.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=')?;
            let key = form_decode(key);
            if !fields::is_known(&key) {
                return None;
            }
            mapping.insert(key, form_decode(value));
        }
        Some(mapping)
    }

    /// Coerces a response body to a mapping. Bodies that are not a form of
    /// known fields are stored whole under `bare_field`.
    pub fn from_response_body(body: &str, bare_field: Option<&str>) -> Self {
        if let Some(mapping) = Self::from_form_body(body) {
            return mapping;
        }
        let mut mapping = Self::new();
        if let Some(field) = bare_field {
            mapping.insert(field, body.trim());
        }
        mapping
    }
}

fn form_decode(value: &str) -> String {
    let value = value.replace('+', " ");
    let decoded = urlencoding::decode(&value).map(|decoded| decoded.into_owned());
    decoded.unwrap_or(value)
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TransportMapping {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut mapping = TransportMapping::new();
        mapping.insert(fields::REF_NO, "A");
        mapping.insert(fields::AMOUNT, "1.00");
        mapping.insert(fields::REF_NO, "B");

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get(fields::REF_NO), Some("B"));
        assert_eq!(mapping.keys().collect::<Vec<_>>(), vec!["RefNo", "Amount"]);
    }

    #[test]
    fn test_merge_inherited_keeps_declared_values() {
        let mut declared: TransportMapping =
            [("Currency", "MYR"), ("RefNo", "OWN")].into_iter().collect();
        let inherited: TransportMapping =
            [("RefNo", "PARENT"), ("Amount", "1.00")].into_iter().collect();
        declared.merge_inherited(inherited);

        assert_eq!(declared.get("RefNo"), Some("OWN"));
        assert_eq!(declared.get("Amount"), Some("1.00"));
        assert_eq!(declared.len(), 3);
    }

    #[test]
    fn test_insert_opt_skips_unset_values() {
        let mut mapping = TransportMapping::new();
        mapping.insert_opt(fields::REMARK, None);
        mapping.insert_opt(fields::CURRENCY, Some("MYR"));
        assert!(!mapping.contains_key(fields::REMARK));
        assert_eq!(mapping.get(fields::CURRENCY), Some("MYR"));
    }

    #[test]
    fn test_form_body_decoding() {
        let mapping =
            TransportMapping::from_form_body("RefNo=A%201&ErrDesc=Customer+Cancel+Transaction")
                .unwrap();
        assert_eq!(mapping.get(fields::REF_NO), Some("A 1"));
        assert_eq!(mapping.get(fields::ERR_DESC), Some("Customer Cancel Transaction"));

        assert_eq!(TransportMapping::from_form_body("Unknown=1"), None);
        assert_eq!(TransportMapping::from_form_body("00"), None);
        assert_eq!(TransportMapping::from_form_body(""), None);
    }

    #[test]
    fn test_bare_response_body() {
        let mapping =
            TransportMapping::from_response_body("00", Some(fields::PAYMENT_STATUS_MESSAGE));
        assert_eq!(mapping.get(fields::PAYMENT_STATUS_MESSAGE), Some("00"));

        let mapping = TransportMapping::from_response_body(
            "Record not found\r\n",
            Some(fields::PAYMENT_STATUS_MESSAGE),
        );
        assert_eq!(mapping.get(fields::PAYMENT_STATUS_MESSAGE), Some("Record not found"));

        assert!(TransportMapping::from_response_body("oops", None).is_empty());
    }

    #[test]
    fn test_form_body_encoding() {
        let mapping: TransportMapping = [("ProdDesc", "Book & pen"), ("Amount", "1,000.00")]
            .into_iter()
            .collect();
        let body = mapping.to_form_body();
        assert_eq!(body, "ProdDesc=Book%20%26%20pen&Amount=1%2C000.00");
        assert_eq!(TransportMapping::from_form_body(&body), Some(mapping));
    }

    #[test]
    fn test_known_fields() {
        assert!(fields::is_known("S_bankname"));
        assert!(!fields::is_known("s_bankname"));
    }
}
