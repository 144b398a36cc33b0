use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Registry-assigned identifier for a stored receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Purchase receipt exactly as submitted by the client.
///
/// Amounts, dates and times stay textual so a stored receipt round-trips
/// field for field; the typed accessors parse on demand and return `None`
/// when a field is malformed. Missing `retailer`, `total` and item fields
/// bind as empty strings and simply earn nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    #[serde(default)]
    pub total: String,
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Vec<LineItem>,
}

impl Receipt {
    pub fn total_amount(&self) -> Option<f64> {
        parse_amount(&self.total)
    }

    pub fn purchase_date(&self) -> Option<NaiveDate> {
        parse_purchase_date(&self.purchase_date)
    }

    pub fn purchase_time(&self) -> Option<NaiveTime> {
        parse_purchase_time(&self.purchase_time)
    }
}

/// One purchased product on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub price: String,
}

impl LineItem {
    pub fn price_amount(&self) -> Option<f64> {
        parse_amount(self.price.trim())
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    let shaped = raw.len() == 10
        && raw.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parses a strict 24-hour `HH:MM` time of day.
pub fn parse_purchase_time(raw: &str) -> Option<NaiveTime> {
    let shaped = raw.len() == 5
        && raw.bytes().enumerate().all(|(index, byte)| match index {
            2 => byte == b':',
            _ => byte.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

// `null` and a missing key both bind to an empty item list.
fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<LineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<LineItem>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}
