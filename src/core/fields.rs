use crate::domain::model::{NormalizedRecord, RawCharge};
use chrono::{DateTime, Local};
use serde_json::Value;

pub const PLACEHOLDER: &str = "N/A";

/// Flatten a raw charge into the nine export columns. Never fails:
/// anything missing becomes `N/A` (or the epoch, for `created`).
pub fn extract_fields(charge: &RawCharge) -> NormalizedRecord {
    let payment_method = charge
        .get("payment_method_details")
        .and_then(|details| details.get("type"))
        .filter(|kind| !kind.is_null())
        .map(value_to_string)
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    NormalizedRecord {
        id: charge
            .get("id")
            .map(value_to_string)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        amount: format_amount_value(charge.get("amount")),
        currency: charge
            .get("currency")
            .map(|v| value_to_string(v).to_uppercase())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        status: non_empty_or_placeholder(charge, "status"),
        customer: non_empty_or_placeholder(charge, "customer"),
        description: non_empty_or_placeholder(charge, "description"),
        created: format_timestamp(timestamp_secs(charge.get("created"))),
        receipt_email: non_empty_or_placeholder(charge, "receipt_email"),
        payment_method,
    }
}

/// Minor units to a two-decimal string. Always divides by 100.
pub fn format_amount(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

fn format_amount_value(value: Option<&Value>) -> String {
    match value {
        Some(v) => match (v.as_i64(), v.as_f64()) {
            (Some(minor_units), _) => format_amount(minor_units),
            (None, Some(f)) => format!("{:.2}", f / 100.0),
            (None, None) => format_amount(0),
        },
        None => format_amount(0),
    }
}

/// Unix seconds to local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|utc| {
            utc.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

// Float timestamps are truncated to whole seconds.
fn timestamp_secs(value: Option<&Value>) -> i64 {
    match value {
        Some(v) => v
            .as_i64()
            .or_else(|| v.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        None => 0,
    }
}

fn non_empty_or_placeholder(charge: &RawCharge, key: &str) -> String {
    match charge.get(key).map(value_to_string) {
        Some(s) if !s.is_empty() => s,
        _ => PLACEHOLDER.to_string(),
    }
}

// Expanded objects (e.g. `customer` with `expand[]`) are kept as their JSON text.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
