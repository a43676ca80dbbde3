//! Input records and tolerant display-field extraction

use crate::words::amount_in_words;
use crate::{ReceiptError, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

/// Placeholder drawn for any optional field that is absent or unparseable
pub const PLACEHOLDER: &str = "-";

/// The input document: one order record and one user record
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptRequest {
    pub order_data: OrderRecord,
    pub user_data: UserRecord,
}

impl ReceiptRequest {
    /// Parse the input document from JSON
    ///
    /// A missing sub-record or missing required field is an input error;
    /// nothing is substituted for those.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| ReceiptError::InvalidInput(e.to_string()))
    }
}

/// Payment order as persisted by the registration system
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: String,

    /// Amount actually collected, in whole rupees; fractional input is
    /// truncated at extraction time
    pub collected_amount: f64,

    #[serde(rename = "type", default)]
    pub kind: Option<PaymentKind>,

    /// ISO-8601 timestamp of the successful payment; persisted stores
    /// serialize their native timestamps before handing records over
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Gateway payment metadata: a mapping, or a JSON-encoded string
    /// containing one
    #[serde(default)]
    pub payment_data: Option<Value>,
}

/// What the order paid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentKind {
    FestRegistration,
    AccRegistration,
    EventRegistration,
    /// Values introduced after this binary shipped
    #[serde(other)]
    Unknown,
}

impl PaymentKind {
    /// Human label printed on the receipt
    ///
    /// Unknown values fall back to the fest label. Strings reproduce the
    /// shipped receipts byte-for-byte, including the historical spelling
    /// of the accommodation label.
    pub fn label(self) -> &'static str {
        match self {
            PaymentKind::AccRegistration => "Accomodation Fee Payment",
            PaymentKind::EventRegistration => "Event Registration",
            PaymentKind::FestRegistration | PaymentKind::Unknown => "Fest Registration",
        }
    }
}

/// Registered user the order belongs to
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub phone_number: String,

    #[serde(default)]
    pub college: Option<String>,

    /// Participant identifier, encoded as a barcode on the pass variant
    #[serde(default)]
    pub pid: Option<String>,
}

/// Every string drawn on the receipt, fully resolved
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub pid: String,
    pub payment_type: String,
    pub payment_date: String,
    pub order_id: String,
    pub payment_id: String,
    pub payment_method: String,
    /// Whole-rupee amount after truncation
    pub amount: u64,
    pub amount_line: String,
    pub amount_words: String,
    pub generated_on: String,
}

impl DisplayFields {
    /// Resolve display fields with "generated on" set to today
    pub fn resolve(order: &OrderRecord, user: &UserRecord) -> Self {
        Self::resolve_at(order, user, Local::now().date_naive())
    }

    /// Resolve display fields with an explicit "generated on" date
    pub fn resolve_at(order: &OrderRecord, user: &UserRecord, today: NaiveDate) -> Self {
        let payment = payment_mapping(order.payment_data.as_ref());
        let payment_id = string_entry(&payment, "id")
            .or_else(|| string_entry(&payment, "gatewayPaymentId"))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let payment_method = string_entry(&payment, "method")
            .map(|m| m.to_uppercase())
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        let amount = order.collected_amount.max(0.0).trunc() as u64;

        DisplayFields {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone_number.clone(),
            college: or_placeholder(user.college.as_deref()),
            pid: or_placeholder(user.pid.as_deref()),
            payment_type: order
                .kind
                .unwrap_or(PaymentKind::FestRegistration)
                .label()
                .to_string(),
            payment_date: format_payment_date(order.updated_at.as_deref()),
            order_id: order.order_id.clone(),
            payment_id,
            payment_method,
            amount,
            amount_line: format!("Rs. {amount}/-"),
            amount_words: format!("{} Only", amount_in_words(amount)),
            generated_on: today.format("%d/%m/%Y").to_string(),
        }
    }

    /// Whether a real participant identifier is present
    ///
    /// The barcode is only drawn for real identifiers, never for the
    /// placeholder.
    pub fn has_pid(&self) -> bool {
        self.pid != PLACEHOLDER
    }
}

/// Substitute the placeholder for absent, null, or blank optional values
fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Normalize `paymentData` into a mapping
///
/// Accepts a JSON object or a JSON-encoded string containing one. Decode
/// failures and every other shape degrade to an empty mapping.
fn payment_mapping(raw: Option<&Value>) -> serde_json::Map<String, Value> {
    match raw {
        Some(Value::Object(map)) => map.clone(),
        Some(Value::String(encoded)) => serde_json::from_str::<Value>(encoded)
            .ok()
            .and_then(|v| v.as_object().cloned())
            .unwrap_or_default(),
        _ => serde_json::Map::new(),
    }
}

/// Non-empty string entry of a payment mapping
fn string_entry(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Format the payment date for display
///
/// ISO-8601 input becomes `DD/MM/YYYY`; anything unparseable falls back to
/// the raw string, and absent or blank input becomes the placeholder.
fn format_payment_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    parse_iso_date(raw)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Parse the calendar date out of an ISO-8601 value
///
/// Accepts full RFC 3339 (trailing `Z` as UTC), naive date-times with
/// optional fractional seconds, and bare dates.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn order() -> OrderRecord {
        OrderRecord {
            order_id: "ORD1".to_string(),
            collected_amount: 5000.0,
            kind: Some(PaymentKind::EventRegistration),
            updated_at: None,
            payment_data: None,
        }
    }

    fn user() -> UserRecord {
        UserRecord {
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "9999999999".to_string(),
            college: None,
            pid: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    #[test]
    fn test_from_json_complete_document() {
        let input = json!({
            "order_data": {
                "orderId": "ORD1",
                "collectedAmount": 5000,
                "type": "EVENT_REGISTRATION"
            },
            "user_data": {
                "name": "Asha",
                "email": "a@x.com",
                "phoneNumber": "9999999999"
            }
        });

        let request = ReceiptRequest::from_json(&input.to_string()).unwrap();
        assert_eq!(request.order_data.order_id, "ORD1");
        assert_eq!(request.order_data.kind, Some(PaymentKind::EventRegistration));
        assert_eq!(request.user_data.name, "Asha");
    }

    #[test]
    fn test_from_json_missing_record_fails() {
        let input = json!({ "order_data": { "orderId": "X", "collectedAmount": 1 } });
        let err = ReceiptRequest::from_json(&input.to_string()).unwrap_err();
        assert!(matches!(err, ReceiptError::InvalidInput(_)));
    }

    #[test]
    fn test_from_json_missing_required_field_fails() {
        let input = json!({
            "order_data": { "orderId": "X", "collectedAmount": 1 },
            "user_data": { "name": "A", "email": "a@x.com" }
        });
        assert!(ReceiptRequest::from_json(&input.to_string()).is_err());
    }

    #[test]
    fn test_unknown_payment_type_degrades() {
        let input = json!({
            "order_data": {
                "orderId": "X",
                "collectedAmount": 1,
                "type": "MERCH_ORDER"
            },
            "user_data": { "name": "A", "email": "a@x.com", "phoneNumber": "1" }
        });

        let request = ReceiptRequest::from_json(&input.to_string()).unwrap();
        assert_eq!(request.order_data.kind, Some(PaymentKind::Unknown));

        let fields = DisplayFields::resolve_at(&request.order_data, &request.user_data, today());
        assert_eq!(fields.payment_type, "Fest Registration");
    }

    #[test]
    fn test_payment_data_as_json_string() {
        let mut order = order();
        order.payment_data = Some(json!(r#"{"id":"pay_1","method":"upi"}"#));

        let fields = DisplayFields::resolve_at(&order, &user(), today());
        assert_eq!(fields.payment_id, "pay_1");
        assert_eq!(fields.payment_method, "UPI");
    }

    #[test]
    fn test_payment_data_as_mapping() {
        let mut order = order();
        order.payment_data = Some(json!({ "gatewayPaymentId": "gw_9", "method": "card" }));

        let fields = DisplayFields::resolve_at(&order, &user(), today());
        assert_eq!(fields.payment_id, "gw_9");
        assert_eq!(fields.payment_method, "CARD");
    }

    #[test]
    fn test_payment_data_prefers_id_over_gateway_id() {
        let mut order = order();
        order.payment_data = Some(json!({ "id": "pay_1", "gatewayPaymentId": "gw_9" }));

        let fields = DisplayFields::resolve_at(&order, &user(), today());
        assert_eq!(fields.payment_id, "pay_1");
    }

    #[test]
    fn test_malformed_payment_data_degrades() {
        let mut order = order();
        order.payment_data = Some(json!("{not json"));

        let fields = DisplayFields::resolve_at(&order, &user(), today());
        assert_eq!(fields.payment_id, PLACEHOLDER);
        assert_eq!(fields.payment_method, PLACEHOLDER);
    }

    #[test]
    fn test_absent_college_and_pid_resolve_to_placeholder() {
        let fields = DisplayFields::resolve_at(&order(), &user(), today());
        assert_eq!(fields.college, PLACEHOLDER);
        assert_eq!(fields.pid, PLACEHOLDER);
        assert!(!fields.has_pid());
    }

    #[test]
    fn test_present_pid() {
        let mut user = user();
        user.pid = Some("PID-00042".to_string());
        user.college = Some("NITK".to_string());

        let fields = DisplayFields::resolve_at(&order(), &user, today());
        assert_eq!(fields.pid, "PID-00042");
        assert_eq!(fields.college, "NITK");
        assert!(fields.has_pid());
    }

    #[test]
    fn test_iso_date_is_reformatted() {
        let mut order = order();
        order.updated_at = Some("2023-01-01T12:00:00.000Z".to_string());

        let fields = DisplayFields::resolve_at(&order, &user(), today());
        assert_eq!(fields.payment_date, "01/01/2023");
    }

    #[test]
    fn test_naive_and_bare_dates_are_accepted() {
        assert_eq!(format_payment_date(Some("2023-06-15T08:30:00")), "15/06/2023");
        assert_eq!(format_payment_date(Some("2023-06-15")), "15/06/2023");
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        let mut order = order();
        order.updated_at = Some("not-a-date".to_string());

        let fields = DisplayFields::resolve_at(&order, &user(), today());
        assert_eq!(fields.payment_date, "not-a-date");
    }

    #[test]
    fn test_absent_date_is_placeholder() {
        let fields = DisplayFields::resolve_at(&order(), &user(), today());
        assert_eq!(fields.payment_date, PLACEHOLDER);
    }

    #[test]
    fn test_amount_formatting() {
        let fields = DisplayFields::resolve_at(&order(), &user(), today());
        assert_eq!(fields.amount, 5000);
        assert_eq!(fields.amount_line, "Rs. 5000/-");
        assert_eq!(fields.amount_words, "Five Thousand Only");
    }

    #[test]
    fn test_fractional_amount_is_truncated() {
        let mut order = order();
        order.collected_amount = 499.99;

        let fields = DisplayFields::resolve_at(&order, &user(), today());
        assert_eq!(fields.amount, 499);
        assert_eq!(fields.amount_line, "Rs. 499/-");
    }

    #[test]
    fn test_generated_on_uses_given_date() {
        let fields = DisplayFields::resolve_at(&order(), &user(), today());
        assert_eq!(fields.generated_on, "10/02/2024");
    }
}
