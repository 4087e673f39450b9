/*
[INPUT]:  Raw JSON objects from the Increase API
[OUTPUT]: Shared wire primitives (extras map, shared enums, list pages)
[POS]:    Data layer - building blocks reused by every entity
[UPDATE]: When a primitive shared across entities is added
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// JSON keys an entity does not declare, kept for re-serialization.
pub type Extras = serde_json::Map<String, Value>;

/// Access to fields the static struct does not model.
///
/// Every response entity collects unknown keys into its `extra` map. This
/// trait lets callers read those keys without reaching for raw JSON.
pub trait Extensible {
    fn extra(&self) -> &Extras;

    /// Decode one unknown key. `None` when the key is absent.
    fn extra_field<T: DeserializeOwned>(&self, key: &str) -> Option<serde_json::Result<T>> {
        self.extra()
            .get(key)
            .map(|value| serde_json::from_value(value.clone()))
    }

    fn has_extra(&self) -> bool {
        !self.extra().is_empty()
    }
}

/// A literal rejected by a strict `FromStr` parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    kind: &'static str,
    value: String,
    known: &'static [&'static str],
}

impl UnknownValue {
    pub(crate) fn new(kind: &'static str, value: String, known: &'static [&'static str]) -> Self {
        Self { kind, value, known }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn known(&self) -> &'static [&'static str] {
        self.known
    }
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} `{}` (expected one of: {})",
            self.kind,
            self.value,
            self.known.join(", ")
        )
    }
}

impl std::error::Error for UnknownValue {}

/// Pull the payload of a tagged-union slot out of its parent object.
pub(crate) fn take_slot<T: DeserializeOwned>(raw: &mut Extras, slot: &str) -> Result<T, String> {
    match raw.remove(slot) {
        None | Some(Value::Null) => Err(format!(
            "source category `{slot}` has no `{slot}` payload"
        )),
        Some(value) => {
            serde_json::from_value(value).map_err(|e| format!("invalid `{slot}` payload: {e}"))
        }
    }
}

/// Keys of a source object left after its payload was taken.
///
/// Drops `category` and null slots of known categories. A null key the client
/// does not know about is kept.
pub(crate) fn source_extras(mut raw: Extras, slots: &[&str]) -> Extras {
    raw.remove("category");
    raw.retain(|key, value| !(value.is_null() && slots.contains(&key.as_str())));
    raw
}

wire_enum! {
    /// ISO 4217 codes supported by Increase.
    pub enum Currency {
        Cad = "CAD",
        Chf = "CHF",
        Eur = "EUR",
        Gbp = "GBP",
        Jpy = "JPY",
        Usd = "USD",
    }
}

wire_enum! {
    /// Kind of route a transaction travelled through.
    pub enum RouteType {
        AccountNumber = "account_number",
        Card = "card",
        Lockbox = "lockbox",
    }
}

wire_enum! {
    /// Value of the `type` field every API object carries.
    pub enum ObjectType {
        AccountTransfer = "account_transfer",
        AchDecline = "ach_decline",
        AchTransfer = "ach_transfer",
        CardDecline = "card_decline",
        CardDispute = "card_dispute",
        CardRefund = "card_refund",
        CardSettlement = "card_settlement",
        CheckDeposit = "check_deposit",
        CheckTransfer = "check_transfer",
        CheckTransferDeposit = "check_transfer_deposit",
        DeclinedTransaction = "declined_transaction",
        Document = "document",
        InboundAchTransferSimulationResult = "inbound_ach_transfer_simulation_result",
        InboundRealTimePaymentsTransferSimulationResult =
            "inbound_real_time_payments_transfer_simulation_result",
        InboundWireTransferSimulationResult = "inbound_wire_transfer_simulation_result",
        RealTimePaymentsTransfer = "real_time_payments_transfer",
        Transaction = "transaction",
    }
}

/// One page of a cursor-paginated list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(flatten)]
    pub extra: Extras,
}

impl<T> Page<T> {
    pub fn has_next_page(&self) -> bool {
        self.next_cursor.as_deref().is_some_and(|cursor| !cursor.is_empty())
    }
}

impl<T> Extensible for Page<T> {
    fn extra(&self) -> &Extras {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn currency_keeps_unknown_literal() {
        let currency: Currency = serde_json::from_value(json!("MXN")).unwrap();
        assert_eq!(currency, Currency::Unrecognized("MXN".to_string()));
        assert!(!currency.is_recognized());
        assert_eq!(serde_json::to_value(&currency).unwrap(), json!("MXN"));
    }

    #[test]
    fn strict_parse_rejects_unknown_literal() {
        let err = "bogus".parse::<RouteType>().unwrap_err();
        assert_eq!(err.value(), "bogus");
        assert!(err.to_string().contains("account_number"));
        assert_eq!("card".parse::<RouteType>().unwrap(), RouteType::Card);
    }

    #[test]
    fn source_extras_keep_unknown_nulls() {
        let raw = json!({
            "category": "card_refund",
            "card_settlement": null,
            "trace": { "id": 7 },
            "unmodelled_slot": null
        });
        let Value::Object(raw) = raw else {
            panic!("expected object");
        };

        let extras = source_extras(raw, &["card_refund", "card_settlement"]);
        assert_eq!(
            Value::Object(extras),
            json!({ "trace": { "id": 7 }, "unmodelled_slot": null })
        );
    }

    #[test]
    fn page_without_cursor_is_last() {
        let page: Page<Value> = serde_json::from_value(json!({
            "data": [],
            "next_cursor": null,
        }))
        .unwrap();
        assert!(!page.has_next_page());
        assert!(!page.has_extra());
    }

    #[test]
    fn extra_field_decodes_on_demand() {
        let page: Page<Value> = serde_json::from_value(json!({
            "data": [],
            "next_cursor": "abc",
            "total_count": 12,
        }))
        .unwrap();
        assert!(page.has_next_page());
        let total: u32 = page.extra_field("total_count").unwrap().unwrap();
        assert_eq!(total, 12);
        assert!(page.extra_field::<u32>("missing").is_none());
    }
}
